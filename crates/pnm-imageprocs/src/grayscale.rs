/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Convert color images to greyscale
use pnm_core::format::{PixelModel, PnmFormat};
use pnm_core::pixel::Rgb;
use pnm_image::errors::ImageErrors;
use pnm_image::image::{ColorImage, GreyImage, Image};
use pnm_image::traits::OperationsTrait;

/// Convert a color image to greyscale
///
/// Each pixel becomes the truncated average of its channels,
/// the maximum value and sample encoding are kept, so a `P6` image
/// becomes `P5` and a `P3` image becomes `P2`.
#[derive(Default, Copy, Clone, Debug)]
pub struct ToGreyscale;

impl ToGreyscale {
    #[must_use]
    pub fn new() -> ToGreyscale {
        Self
    }
}

impl OperationsTrait for ToGreyscale {
    fn name(&self) -> &'static str {
        "To greyscale"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let grey = match image {
            Image::Color(color) => color_to_greyscale(color)?,
            _ => return Err(ImageErrors::UnsupportedModel(self.name(), image.model()))
        };
        *image = grey.into();

        Ok(())
    }

    fn supported_models(&self) -> &'static [PixelModel] {
        &[PixelModel::Color]
    }
}

/// Convert RGB pixels to greyscale, `floor((r+g+b)/3)`
pub fn rgb_to_grayscale(in_image: &[Rgb], out_image: &mut [u8]) {
    for (out, pixel) in out_image.iter_mut().zip(in_image) {
        *out = pixel.average();
    }
}

/// Create a greyscale image from a color image
///
/// The source image is left untouched
pub fn color_to_greyscale(image: &ColorImage) -> Result<GreyImage, ImageErrors> {
    let format = PnmFormat::from_parts(PixelModel::Greyscale, image.format().encoding());
    let grid = image.grid().map(|pixel| pixel.average());

    GreyImage::from_grid(grid, format, image.max_value())
}
