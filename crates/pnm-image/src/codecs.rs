/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry points for decoding and encoding images
//!
//! This glues [`Image`] to the decoder and encoder in `pnm-codec`
use std::io::{Read, Write};

use pnm_codec::{decode_reader, PnmDecoder, PnmEncoder, PnmHeader};
use pnm_core::log::trace;
use pnm_core::options::{DecoderOptions, EncoderOptions};
use pnm_core::result::DecodingResult;

use crate::errors::ImageErrors;
use crate::image::{BitmapImage, ColorImage, GreyImage, Image};

impl Image {
    /// Decode an image from a reader with default options
    ///
    /// The whole stream is read into memory before decoding starts
    pub fn decode<R: Read>(reader: &mut R) -> Result<Image, ImageErrors> {
        Image::decode_with_options(reader, DecoderOptions::default())
    }

    /// Decode an image from a reader, honouring `options`
    pub fn decode_with_options<R: Read>(
        reader: &mut R, options: DecoderOptions
    ) -> Result<Image, ImageErrors> {
        let (header, pixels) = decode_reader(reader, options)?;

        Image::from_decoded(header, pixels)
    }

    /// Decode an image already in memory
    ///
    /// # Example
    /// ```
    /// use pnm_image::image::Image;
    /// use pnm_image::pnm_core::options::DecoderOptions;
    ///
    /// let image = Image::decode_bytes(b"P2\n2 1\n15\n0 15\n", DecoderOptions::default()).unwrap();
    /// assert_eq!(image.size(), (2, 1));
    /// assert_eq!(image.max_value(), Some(15));
    /// ```
    pub fn decode_bytes(bytes: &[u8], options: DecoderOptions) -> Result<Image, ImageErrors> {
        let mut decoder = PnmDecoder::new_with_options(options, bytes);
        let pixels = decoder.decode()?;
        let header = decoder
            .get_header()
            .ok_or(ImageErrors::GenericStatic("Headers not decoded"))?;

        Image::from_decoded(header, pixels)
    }

    /// Build an image from a decoded header and its pixels
    pub fn from_decoded(header: PnmHeader, pixels: DecodingResult) -> Result<Image, ImageErrors> {
        let max_value = header.max_value.unwrap_or(1);

        let image = match pixels {
            DecodingResult::Bitmap(grid) => BitmapImage::from_grid(grid, header.format)?.into(),
            DecodingResult::Greyscale(grid) => {
                GreyImage::from_grid(grid, header.format, max_value)?.into()
            }
            DecodingResult::Color(grid) => {
                ColorImage::from_grid(grid, header.format, max_value)?.into()
            }
        };
        Ok(image)
    }

    /// Encode the image in the variant it carries
    pub fn encode<W: Write>(&self, writer: &mut W) -> Result<(), ImageErrors> {
        self.encode_with_options(writer, EncoderOptions::default())
    }

    /// Encode the image, `options` may override the sample encoding
    pub fn encode_with_options<W: Write>(
        &self, writer: &mut W, options: EncoderOptions
    ) -> Result<(), ImageErrors> {
        let format = match options.get_encoding() {
            Some(encoding) => self.format().with_encoding(encoding),
            None => self.format()
        };
        trace!("Encoding {:?} image as {}", self.model(), format);

        let mut encoder = PnmEncoder::new(writer);

        match self {
            Image::Bitmap(image) => encoder.encode_bitmap(image.grid(), format)?,
            Image::Greyscale(image) => {
                encoder.encode_greyscale(image.grid(), format, image.max_value())?;
            }
            Image::Color(image) => encoder.encode_color(image.grid(), format, image.max_value())?
        }
        Ok(())
    }

    /// Encode the image into a new buffer
    pub fn write_to_vec(&self) -> Result<Vec<u8>, ImageErrors> {
        let mut output = Vec::new();
        self.encode(&mut output)?;

        Ok(output)
    }
}
