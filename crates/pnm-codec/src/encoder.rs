/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use pnm_core::format::{PixelModel, PnmFormat, SampleEncoding};
use pnm_core::grid::PixelGrid;
use pnm_core::log::trace;
use pnm_core::pixel::Rgb;

use crate::errors::PnmEncodeErrors;

/// A Netpbm encoder
///
/// Writes `P1` to `P6` images, the variant is chosen by the
/// format passed to each `encode_*` call.
pub struct PnmEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PnmEncoder<'a, W> {
    /// Create a new encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PnmEncoder<'a, W> {
        Self { writer }
    }

    /// Write the magic number, dimensions and the optional maximum value
    fn write_headers(
        &mut self, format: PnmFormat, width: usize, height: usize, max_value: Option<u8>
    ) -> Result<(), PnmEncodeErrors> {
        let header = match max_value {
            Some(max_value) => format!("{format}\n{width} {height}\n{max_value}\n"),
            None => format!("{format}\n{width} {height}\n")
        };
        trace!("Writing header for {} image {}x{}", format, width, height);

        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Write rows of decimal samples, single space separated, one row per line
    fn write_ascii_rows<T, F>(
        &mut self, grid: &PixelGrid<T>, mut write_pixel: F
    ) -> Result<(), PnmEncodeErrors>
    where
        T: Copy,
        F: FnMut(&mut String, T)
    {
        let mut line = String::new();

        for row in grid.rows() {
            line.clear();

            for (i, pixel) in row.iter().enumerate() {
                if i != 0 {
                    line.push(' ');
                }
                write_pixel(&mut line, *pixel);
            }
            line.push('\n');
            self.writer.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    /// Encode a bitmap as `P1` or `P4`
    ///
    /// `P4` rows are bit packed, most significant bit first, and padded
    /// to a whole number of bytes.
    pub fn encode_bitmap(
        &mut self, grid: &PixelGrid<bool>, format: PnmFormat
    ) -> Result<(), PnmEncodeErrors> {
        check_format(format, PixelModel::Bitmap)?;

        let (width, height) = grid.dimensions();
        self.write_headers(format, width, height, None)?;

        match format.encoding() {
            SampleEncoding::Ascii => {
                self.write_ascii_rows(grid, |line, pixel| {
                    line.push(if pixel { '1' } else { '0' });
                })?;
            }
            SampleEncoding::Binary => {
                let mut packed = vec![0_u8; width.div_ceil(8)];

                for row in grid.rows() {
                    pack_bits(row, &mut packed);
                    self.writer.write_all(&packed)?;
                }
            }
        }
        self.writer.flush()?;

        Ok(())
    }

    /// Encode a greyscale image as `P2` or `P5`
    pub fn encode_greyscale(
        &mut self, grid: &PixelGrid<u8>, format: PnmFormat, max_value: u8
    ) -> Result<(), PnmEncodeErrors> {
        check_format(format, PixelModel::Greyscale)?;
        check_samples(grid.as_slice().iter().copied(), max_value)?;

        let (width, height) = grid.dimensions();
        self.write_headers(format, width, height, Some(max_value))?;

        match format.encoding() {
            SampleEncoding::Ascii => {
                self.write_ascii_rows(grid, |line, pixel| {
                    line.push_str(&pixel.to_string());
                })?;
            }
            SampleEncoding::Binary => {
                self.writer.write_all(grid.as_slice())?;
            }
        }
        self.writer.flush()?;

        Ok(())
    }

    /// Encode a color image as `P3` or `P6`
    ///
    /// Channels are written in R, G, B order
    pub fn encode_color(
        &mut self, grid: &PixelGrid<Rgb>, format: PnmFormat, max_value: u8
    ) -> Result<(), PnmEncodeErrors> {
        check_format(format, PixelModel::Color)?;
        check_samples(grid.as_slice().iter().map(Rgb::max_channel), max_value)?;

        let (width, height) = grid.dimensions();
        self.write_headers(format, width, height, Some(max_value))?;

        match format.encoding() {
            SampleEncoding::Ascii => {
                self.write_ascii_rows(grid, |line, pixel| {
                    line.push_str(&format!("{} {} {}", pixel.r, pixel.g, pixel.b));
                })?;
            }
            SampleEncoding::Binary => {
                let mut bytes = Vec::with_capacity(width * 3);

                for row in grid.rows() {
                    bytes.clear();
                    bytes.extend(row.iter().flat_map(|x| [x.r, x.g, x.b]));
                    self.writer.write_all(&bytes)?;
                }
            }
        }
        self.writer.flush()?;

        Ok(())
    }
}

fn check_format(format: PnmFormat, model: PixelModel) -> Result<(), PnmEncodeErrors> {
    if format.model() != model {
        return Err(PnmEncodeErrors::FormatMismatch(format, model));
    }
    Ok(())
}

fn check_samples<I: Iterator<Item = u8>>(
    mut samples: I, max_value: u8
) -> Result<(), PnmEncodeErrors> {
    if max_value == 0 {
        return Err(PnmEncodeErrors::InvalidMaxValue(max_value));
    }
    if let Some(sample) = samples.find(|x| *x > max_value) {
        return Err(PnmEncodeErrors::SampleExceedsMax(sample, max_value));
    }
    Ok(())
}

/// Pack a row of bits into bytes, most significant bit first
///
/// `out` must hold `ceil(row.len() / 8)` bytes, unused low bits of the
/// last byte are zero.
fn pack_bits(row: &[bool], out: &mut [u8]) {
    out.fill(0);

    for (byte, bits) in out.iter_mut().zip(row.chunks(8)) {
        for (i, bit) in bits.iter().enumerate() {
            *byte |= u8::from(*bit) << (7 - i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_bits_pads_last_byte() {
        let mut out = [0xff; 2];
        pack_bits(
            &[true, false, true, true, false, false, false, false, true, true],
            &mut out
        );
        assert_eq!(out, [0b1011_0000, 0b1100_0000]);
    }

    #[test]
    fn ascii_rows_have_no_trailing_space() {
        let grid = PixelGrid::from_vec(3, 2, vec![0, 10, 255, 1, 2, 3]).unwrap();
        let mut out = Vec::new();

        PnmEncoder::new(&mut out)
            .encode_greyscale(&grid, PnmFormat::P2, 255)
            .unwrap();

        assert_eq!(out, b"P2\n3 2\n255\n0 10 255\n1 2 3\n");
    }

    #[test]
    fn binary_bitmap_is_packed() {
        let grid = PixelGrid::from_vec(3, 1, vec![true, false, true]).unwrap();
        let mut out = Vec::new();

        PnmEncoder::new(&mut out)
            .encode_bitmap(&grid, PnmFormat::P4)
            .unwrap();

        assert_eq!(out, b"P4\n3 1\n\xa0");
    }

    #[test]
    fn color_rows() {
        let grid = PixelGrid::from_vec(2, 1, vec![Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)]).unwrap();
        let mut ascii = Vec::new();
        let mut binary = Vec::new();

        PnmEncoder::new(&mut ascii)
            .encode_color(&grid, PnmFormat::P3, 9)
            .unwrap();
        PnmEncoder::new(&mut binary)
            .encode_color(&grid, PnmFormat::P6, 9)
            .unwrap();

        assert_eq!(ascii, b"P3\n2 1\n9\n1 2 3 4 5 6\n");
        assert_eq!(binary, b"P6\n2 1\n9\n\x01\x02\x03\x04\x05\x06");
    }

    #[test]
    fn mismatched_format_and_samples() {
        let grid = PixelGrid::new(1, 1, 200_u8);
        let mut out = Vec::new();
        let mut encoder = PnmEncoder::new(&mut out);

        assert!(matches!(
            encoder.encode_greyscale(&grid, PnmFormat::P6, 255),
            Err(PnmEncodeErrors::FormatMismatch(PnmFormat::P6, PixelModel::Greyscale))
        ));
        assert!(matches!(
            encoder.encode_greyscale(&grid, PnmFormat::P5, 100),
            Err(PnmEncodeErrors::SampleExceedsMax(200, 100))
        ));
        assert!(out.is_empty());
    }
}
