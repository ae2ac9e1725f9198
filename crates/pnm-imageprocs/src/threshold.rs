/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Convert greyscale and color images to bitmaps
//!
//! The threshold is always half the image's maximum value,
//! using truncating division.
use pnm_core::format::{PixelModel, PnmFormat};
use pnm_core::pixel::Rgb;
use pnm_image::errors::ImageErrors;
use pnm_image::image::{BitmapImage, ColorImage, GreyImage, Image};
use pnm_image::traits::OperationsTrait;

/// How samples are compared with the threshold
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ThresholdMethod {
    /// A bit is set when the sample is above the threshold
    #[default]
    Binary,
    /// A bit is set when the sample is below the threshold
    BinaryInv
}

impl ThresholdMethod {
    #[inline]
    const fn is_set(self, value: u8, threshold: u8) -> bool {
        match self {
            Self::Binary => value > threshold,
            Self::BinaryInv => value < threshold
        }
    }
}

/// Convert an image to a bitmap
///
/// Greyscale pixels are compared directly, color pixels are first
/// averaged as in [`ToGreyscale`](crate::grayscale::ToGreyscale).
/// Both models use the same method, [`ThresholdMethod::Binary`] unless
/// another one is given.
#[derive(Default, Copy, Clone, Debug)]
pub struct ToBitmap {
    method: ThresholdMethod
}

impl ToBitmap {
    #[must_use]
    pub fn new(method: ThresholdMethod) -> ToBitmap {
        ToBitmap { method }
    }
}

impl OperationsTrait for ToBitmap {
    fn name(&self) -> &'static str {
        "To bitmap"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let bitmap = match image {
            Image::Greyscale(grey) => greyscale_to_bitmap(grey, self.method)?,
            Image::Color(color) => color_to_bitmap(color, self.method)?,
            Image::Bitmap(_) => {
                return Err(ImageErrors::UnsupportedModel(
                    self.name(),
                    PixelModel::Bitmap
                ))
            }
        };
        *image = bitmap.into();

        Ok(())
    }

    fn supported_models(&self) -> &'static [PixelModel] {
        &[PixelModel::Greyscale, PixelModel::Color]
    }
}

/// Threshold samples into bits
///
/// # Arguments
/// - in_channel: Samples to compare
/// - out_channel: Receives one bit per sample
/// - threshold: Value samples are compared with
/// - method: Decides whether samples above or below the threshold are set
pub fn threshold(
    in_channel: &[u8], out_channel: &mut [bool], threshold: u8, method: ThresholdMethod
) {
    for (out, sample) in out_channel.iter_mut().zip(in_channel) {
        *out = method.is_set(*sample, threshold);
    }
}

fn bitmap_format(format: PnmFormat) -> PnmFormat {
    PnmFormat::from_parts(PixelModel::Bitmap, format.encoding())
}

/// Create a bitmap from a greyscale image
///
/// With [`ThresholdMethod::Binary`] a pixel is set when its intensity
/// is above `max_value/2`. Sample encoding is kept.
pub fn greyscale_to_bitmap(
    image: &GreyImage, method: ThresholdMethod
) -> Result<BitmapImage, ImageErrors> {
    let limit = image.max_value() / 2;
    let grid = image.grid().map(|x| method.is_set(x, limit));

    BitmapImage::from_grid(grid, bitmap_format(image.format()))
}

/// Create a bitmap from a color image
///
/// The average of the three channels is compared with `max_value/2`
pub fn color_to_bitmap(
    image: &ColorImage, method: ThresholdMethod
) -> Result<BitmapImage, ImageErrors> {
    let limit = image.max_value() / 2;
    let grid = image.grid().map(|x: Rgb| method.is_set(x.average(), limit));

    BitmapImage::from_grid(grid, bitmap_format(image.format()))
}
