/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Read;

use pnm_core::bytestream::ByteReader;
use pnm_core::format::{PixelModel, PnmFormat, SampleEncoding};
use pnm_core::grid::PixelGrid;
use pnm_core::log::{info, trace, warn};
use pnm_core::options::DecoderOptions;
use pnm_core::pixel::Rgb;
use pnm_core::result::DecodingResult;

use crate::errors::PnmDecodeErrors;

/// Information carried by a Netpbm header
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PnmHeader {
    pub format:    PnmFormat,
    pub width:     usize,
    pub height:    usize,
    /// Maximum sample value, `None` for bitmaps
    pub max_value: Option<u8>
}

/// An instance of a Netpbm decoder
///
/// The decoder can decode all of P1, P2, P3, P4, P5 and P6 formats
/// with maximum values up to 255
pub struct PnmDecoder<'a> {
    width:           usize,
    height:          usize,
    max_value:       Option<u8>,
    format:          Option<PnmFormat>,
    decoded_headers: bool,
    reader:          ByteReader<'a>,
    options:         DecoderOptions
}

impl<'a> PnmDecoder<'a> {
    /// Create a new decoder with default options
    ///
    /// # Arguments
    /// - data: Netpbm encoded pixels
    ///
    /// # Example
    /// ```
    /// use pnm_codec::PnmDecoder;
    /// let mut decoder = PnmDecoder::new(b"NOT VALID PNM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PnmDecoder<'a> {
        PnmDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: Netpbm encoded data.
    /// # Example
    /// ```
    /// use pnm_codec::PnmDecoder;
    /// use pnm_codec::pnm_core::options::DecoderOptions;
    /// let options = DecoderOptions::default().set_max_width(2);
    /// let mut decoder = PnmDecoder::new_with_options(options, b"P1\n3 1\n0 1 0\n");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PnmDecoder<'a> {
        PnmDecoder {
            width: 0,
            height: 0,
            max_value: None,
            format: None,
            decoded_headers: false,
            reader: ByteReader::new(data),
            options
        }
    }

    /// Read the header and store it in internal state
    ///
    /// Calling this more than once is a no-op.
    pub fn read_headers(&mut self) -> Result<(), PnmDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let format = self.read_magic()?;

        trace!("Format: {}", format);

        let width = self.read_header_integer("width")?;
        let height = self.read_header_integer("height")?;

        if width == 0 || height == 0 {
            return Err(PnmDecodeErrors::ZeroDimensions(width, height));
        }
        if width > self.options.get_max_width() {
            return Err(PnmDecodeErrors::LargeDimensions(
                "width",
                self.options.get_max_width(),
                width
            ));
        }
        if height > self.options.get_max_height() {
            return Err(PnmDecodeErrors::LargeDimensions(
                "height",
                self.options.get_max_height(),
                height
            ));
        }
        info!("Width: {}, height: {}", width, height);

        let max_value = if format.model().has_max_value() {
            let max_value = self.read_header_integer("maximum value")?;

            if max_value == 0 {
                return Err(PnmDecodeErrors::InvalidMaxValue(max_value));
            }
            let max_value = u8::try_from(max_value)
                .map_err(|_| PnmDecodeErrors::UnsupportedMaxValue(max_value))?;

            info!("Maximum value: {}", max_value);
            Some(max_value)
        } else {
            None
        };

        // binary bodies start right after a single whitespace byte,
        // ascii bodies are tokenized so separators are skipped there
        if format.encoding() == SampleEncoding::Binary && !self.reader.eof() {
            let position = self.reader.get_position();
            let byte = self.reader.get_u8();

            if !byte.is_ascii_whitespace() {
                return Err(PnmDecodeErrors::InvalidHeader(
                    "whitespace before pixel data",
                    position
                ));
            }
        }

        self.width = width;
        self.height = height;
        self.max_value = max_value;
        self.format = Some(format);
        self.decoded_headers = true;

        Ok(())
    }

    fn read_magic(&mut self) -> Result<PnmFormat, PnmDecodeErrors> {
        let lossy = |bytes: &[u8]| String::from_utf8_lossy(bytes).to_string();

        let magic = match self.reader.get_as_ref(2) {
            Ok(magic) => magic,
            Err(_) => {
                return Err(PnmDecodeErrors::InvalidMagic(lossy(
                    self.reader.remaining_bytes()
                )))
            }
        };
        let format = PnmFormat::from_magic(magic)
            .ok_or_else(|| PnmDecodeErrors::InvalidMagic(lossy(magic)))?;

        // `P12` is not `P1` followed by a width
        if let Some(next) = self.reader.peek_u8() {
            if !next.is_ascii_whitespace() && next != b'#' {
                return Err(PnmDecodeErrors::InvalidMagic(format!(
                    "{}{}",
                    lossy(magic),
                    next as char
                )));
            }
        }
        Ok(format)
    }

    /// Skip whitespace and comments, then read an unsigned decimal token
    fn read_header_integer(&mut self, field: &'static str) -> Result<usize, PnmDecodeErrors> {
        skip_spaces(&mut self.reader);

        let position = self.reader.get_position();

        get_integer(&mut self.reader).ok_or(PnmDecodeErrors::InvalidHeader(field, position))
    }

    /// Return the image format or none if
    /// headers aren't decoded
    pub const fn get_format(&self) -> Option<PnmFormat> {
        if self.decoded_headers {
            self.format
        } else {
            None
        }
    }

    /// Return image dimensions or none if headers aren't decoded
    pub const fn get_dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the declared maximum sample value
    ///
    /// This is none if headers aren't decoded or the image is a bitmap
    pub const fn get_max_value(&self) -> Option<u8> {
        if self.decoded_headers {
            self.max_value
        } else {
            None
        }
    }

    /// Return the full header or none if headers aren't decoded
    pub fn get_header(&self) -> Option<PnmHeader> {
        let format = self.get_format()?;

        Some(PnmHeader {
            format,
            width: self.width,
            height: self.height,
            max_value: self.max_value
        })
    }

    /// Decode a Netpbm encoded file into a pixel grid
    ///
    /// The grid type depends on the pixel model of the magic number,
    /// see [`DecodingResult`]. Decoding either returns a complete grid or an error.
    pub fn decode(&mut self) -> Result<DecodingResult, PnmDecodeErrors> {
        self.read_headers()?;

        let format = self
            .format
            .ok_or(PnmDecodeErrors::InvalidHeader("magic number", 0))?;

        let result = match format {
            PnmFormat::P1 => DecodingResult::Bitmap(self.decode_ascii_bitmap()?),
            PnmFormat::P2 => DecodingResult::Greyscale(self.decode_ascii_greyscale()?),
            PnmFormat::P3 => DecodingResult::Color(self.decode_ascii_color()?),
            PnmFormat::P4 => DecodingResult::Bitmap(self.decode_binary_bitmap()?),
            PnmFormat::P5 => DecodingResult::Greyscale(self.decode_binary_greyscale()?),
            PnmFormat::P6 => DecodingResult::Color(self.decode_binary_color()?)
        };

        self.check_trailing_data(format.encoding())?;

        Ok(result)
    }

    fn max_sample(&self) -> u8 {
        self.max_value.unwrap_or(1)
    }

    fn num_samples(&self, model: PixelModel) -> Result<usize, PnmDecodeErrors> {
        self.width
            .checked_mul(self.height)
            .and_then(|x| x.checked_mul(model.num_components()))
            .ok_or(PnmDecodeErrors::LargeDimensions(
                "image size",
                usize::MAX,
                self.width.saturating_mul(self.height)
            ))
    }

    /// Bytes in the raw body, `ceil(width/8)` per row for bitmaps
    fn binary_body_size(&self, model: PixelModel) -> Result<usize, PnmDecodeErrors> {
        match model {
            PixelModel::Bitmap => Ok(self.width.div_ceil(8) * self.height),
            _ => self.num_samples(model)
        }
    }

    fn get_binary_body(&mut self, model: PixelModel) -> Result<&'a [u8], PnmDecodeErrors> {
        let size = self.binary_body_size(model)?;
        let remaining = self.reader.remaining();

        self.reader
            .get_as_ref(size)
            .map_err(|_| PnmDecodeErrors::TruncatedBody(size, remaining))
    }

    fn decode_ascii_bitmap(&mut self) -> Result<PixelGrid<bool>, PnmDecodeErrors> {
        let size = self.num_samples(PixelModel::Bitmap)?;
        let mut pixels = Vec::with_capacity(size);

        for count in 0..size {
            skip_spaces(&mut self.reader);

            if self.reader.eof() {
                return Err(PnmDecodeErrors::TruncatedBody(size, count));
            }
            let position = self.reader.get_position();

            match self.reader.get_u8() {
                b'0' => pixels.push(false),
                b'1' => pixels.push(true),
                byte => {
                    let msg = format!("expected `0` or `1` but found `{}`", byte as char);
                    return Err(PnmDecodeErrors::InvalidSample(position, msg));
                }
            }
        }
        Ok(PixelGrid::from_vec(self.width, self.height, pixels)?)
    }

    fn read_ascii_samples(&mut self, model: PixelModel) -> Result<Vec<u8>, PnmDecodeErrors> {
        let size = self.num_samples(model)?;
        let max_value = self.max_sample();
        let mut samples = Vec::with_capacity(size);

        for count in 0..size {
            skip_spaces(&mut self.reader);

            if self.reader.eof() {
                return Err(PnmDecodeErrors::TruncatedBody(size, count));
            }
            let position = self.reader.get_position();

            let value = get_integer(&mut self.reader).ok_or_else(|| {
                let byte = self.reader.peek_u8().unwrap_or(b'?');
                let msg = format!("expected a decimal sample but found `{}`", byte as char);
                PnmDecodeErrors::InvalidSample(position, msg)
            })?;

            if value > usize::from(max_value) {
                let msg = format!("value {value} exceeds the maximum value {max_value}");
                return Err(PnmDecodeErrors::InvalidSample(position, msg));
            }
            // bounded by max_value above
            samples.push(value as u8);
        }
        Ok(samples)
    }

    fn decode_ascii_greyscale(&mut self) -> Result<PixelGrid<u8>, PnmDecodeErrors> {
        let samples = self.read_ascii_samples(PixelModel::Greyscale)?;

        Ok(PixelGrid::from_vec(self.width, self.height, samples)?)
    }

    fn decode_ascii_color(&mut self) -> Result<PixelGrid<Rgb>, PnmDecodeErrors> {
        let samples = self.read_ascii_samples(PixelModel::Color)?;

        Ok(PixelGrid::from_vec(
            self.width,
            self.height,
            samples_to_rgb(&samples)
        )?)
    }

    fn decode_binary_bitmap(&mut self) -> Result<PixelGrid<bool>, PnmDecodeErrors> {
        let body = self.get_binary_body(PixelModel::Bitmap)?;
        let row_bytes = self.width.div_ceil(8);

        let mut pixels = Vec::with_capacity(self.width * self.height);

        for row in body.chunks_exact(row_bytes) {
            for x in 0..self.width {
                // most significant bit is the leftmost pixel
                pixels.push((row[x / 8] >> (7 - (x % 8))) & 1 != 0);
            }
        }
        Ok(PixelGrid::from_vec(self.width, self.height, pixels)?)
    }

    /// Reject raw samples above the declared maximum
    fn check_binary_samples(&self, body: &[u8], start: usize) -> Result<(), PnmDecodeErrors> {
        let max_value = self.max_sample();

        if let Some(offset) = body.iter().position(|x| *x > max_value) {
            let msg = format!(
                "value {} exceeds the maximum value {max_value}",
                body[offset]
            );
            return Err(PnmDecodeErrors::InvalidSample(start + offset, msg));
        }
        Ok(())
    }

    fn decode_binary_greyscale(&mut self) -> Result<PixelGrid<u8>, PnmDecodeErrors> {
        let start = self.reader.get_position();
        let body = self.get_binary_body(PixelModel::Greyscale)?;

        self.check_binary_samples(body, start)?;

        Ok(PixelGrid::from_vec(self.width, self.height, body.to_vec())?)
    }

    fn decode_binary_color(&mut self) -> Result<PixelGrid<Rgb>, PnmDecodeErrors> {
        let start = self.reader.get_position();
        let body = self.get_binary_body(PixelModel::Color)?;

        self.check_binary_samples(body, start)?;

        Ok(PixelGrid::from_vec(
            self.width,
            self.height,
            samples_to_rgb(body)
        )?)
    }

    fn check_trailing_data(&mut self, encoding: SampleEncoding) -> Result<(), PnmDecodeErrors> {
        if encoding == SampleEncoding::Ascii {
            skip_spaces(&mut self.reader);
        }
        let remaining = self.reader.remaining();

        if remaining > 0 {
            if self.options.get_strict_mode() {
                return Err(PnmDecodeErrors::TrailingData(remaining));
            }
            warn!("Ignoring {} bytes after the pixel body", remaining);
        }
        Ok(())
    }
}

/// Read a whole stream into memory and decode it
///
/// Returns the header alongside the pixels so callers can
/// reproduce the same variant when encoding.
pub fn decode_reader<R: Read>(
    reader: &mut R, options: DecoderOptions
) -> Result<(PnmHeader, DecodingResult), PnmDecodeErrors> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let mut decoder = PnmDecoder::new_with_options(options, &data);
    let pixels = decoder.decode()?;
    let header = decoder
        .get_header()
        .ok_or(PnmDecodeErrors::InvalidHeader("magic number", 0))?;

    Ok((header, pixels))
}

fn samples_to_rgb(samples: &[u8]) -> Vec<Rgb> {
    samples
        .chunks_exact(3)
        .map(|x| Rgb::new(x[0], x[1], x[2]))
        .collect()
}

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
fn skip_spaces(byte_stream: &mut ByteReader) {
    while let Some(byte) = byte_stream.peek_u8() {
        if byte == b'#' {
            // comment, skip the whole line
            while !byte_stream.eof() && byte_stream.get_u8() != b'\n' {}
        } else if byte.is_ascii_whitespace() {
            byte_stream.skip(1);
        } else {
            break;
        }
    }
}

/// Read an unsigned decimal integer at the current position
///
/// Returns `None` if the stream does not start with a digit or
/// the value overflows
fn get_integer(byte_stream: &mut ByteReader) -> Option<usize> {
    let mut value = 0_usize;
    let mut digits = 0;

    while let Some(byte) = byte_stream.peek_u8() {
        if !byte.is_ascii_digit() {
            break;
        }
        value = value
            .checked_mul(10)?
            .checked_add(usize::from(byte - b'0'))?;

        byte_stream.skip(1);
        digits += 1;
    }
    if digits == 0 {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_spaces_skips_comments() {
        let mut reader = ByteReader::new(b"  # a comment\n\n\t# another\r\n42");
        skip_spaces(&mut reader);

        assert_eq!(get_integer(&mut reader), Some(42));
        assert!(reader.eof());
    }

    #[test]
    fn integer_requires_digits() {
        let mut reader = ByteReader::new(b"x1");
        assert_eq!(get_integer(&mut reader), None);
        assert_eq!(reader.get_position(), 0);

        let mut reader = ByteReader::new(b"99999999999999999999999999");
        assert_eq!(get_integer(&mut reader), None);
    }

    #[test]
    fn header_with_comments_everywhere() {
        let data = b"P2\n# comment\n2 # trailing\n1\n#c\n255\n0 255\n";
        let mut decoder = PnmDecoder::new(data);
        decoder.read_headers().unwrap();

        assert_eq!(
            decoder.get_header(),
            Some(PnmHeader {
                format:    PnmFormat::P2,
                width:     2,
                height:    1,
                max_value: Some(255)
            })
        );
    }

    #[test]
    fn header_not_available_before_decoding() {
        let decoder = PnmDecoder::new(b"P1\n1 1\n1");

        assert_eq!(decoder.get_dimensions(), None);
        assert_eq!(decoder.get_format(), None);
        assert_eq!(decoder.get_header(), None);
    }

    #[test]
    fn binary_bitmap_row_padding() {
        // 10 pixels wide needs 2 bytes per row
        let mut data = b"P4\n10 2\n".to_vec();
        data.extend_from_slice(&[0b1000_0000, 0b0100_0000, 0b0000_0001, 0b1000_0000]);

        let grid = PnmDecoder::new(&data)
            .decode()
            .unwrap()
            .into_bitmap()
            .unwrap();

        let expected = [
            true, false, false, false, false, false, false, false, false, true, //
            false, false, false, false, false, false, false, true, true, false
        ];
        assert_eq!(grid.as_slice(), &expected);
    }

    #[test]
    fn binary_body_starting_with_whitespace_byte() {
        // pixel bytes are 10 (newline) and 32 (space), they must not be skipped
        let data = b"P5 2 1 255\n\n ";
        let grid = PnmDecoder::new(data)
            .decode()
            .unwrap()
            .into_greyscale()
            .unwrap();

        assert_eq!(grid.as_slice(), &[b'\n', b' ']);
    }

    #[test]
    fn decode_from_reader() {
        let mut cursor = std::io::Cursor::new(b"P3\n1 1\n7\n1 2 3\n".to_vec());
        let (header, pixels) = decode_reader(&mut cursor, DecoderOptions::default()).unwrap();

        assert_eq!(header.format, PnmFormat::P3);
        assert_eq!(header.max_value, Some(7));
        assert_eq!(pixels.into_color().unwrap().as_slice(), &[Rgb::new(1, 2, 3)]);
    }
}
