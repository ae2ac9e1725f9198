/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Change the maximum value of an image
use pnm_core::format::PixelModel;
use pnm_core::pixel::Rgb;
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

/// Remap every sample proportionally to a new maximum value
///
/// A sample `v` becomes `v * new_max / old_max`, truncated, and
/// `new_max` is recorded as the image's maximum.
#[derive(Copy, Clone, Debug)]
pub struct RescaleMaxValue {
    new_max: u8
}

impl RescaleMaxValue {
    /// Create a new rescale operation
    ///
    /// # Arguments
    /// - new_max: The new maximum value, must be at least 1
    #[must_use]
    pub fn new(new_max: u8) -> RescaleMaxValue {
        RescaleMaxValue { new_max }
    }
}

impl OperationsTrait for RescaleMaxValue {
    fn name(&self) -> &'static str {
        "Rescale max value"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        match image {
            Image::Greyscale(image) => {
                let old_max = image.max_value();
                rescale(image.grid_mut().as_mut_slice(), old_max, self.new_max)?;
                image.set_max_value(self.new_max)?;
            }
            Image::Color(image) => {
                let old_max = image.max_value();
                rescale_rgb(image.grid_mut().as_mut_slice(), old_max, self.new_max)?;
                image.set_max_value(self.new_max)?;
            }
            Image::Bitmap(_) => {
                return Err(ImageErrors::UnsupportedModel(
                    self.name(),
                    PixelModel::Bitmap
                ))
            }
        }
        Ok(())
    }

    fn supported_models(&self) -> &'static [PixelModel] {
        &[PixelModel::Greyscale, PixelModel::Color]
    }
}

#[inline]
fn rescale_sample(value: u8, old_max: u8, new_max: u8) -> u8 {
    let scaled = u16::from(value) * u16::from(new_max) / u16::from(old_max);
    // only samples above old_max can overflow
    scaled.min(u16::from(u8::MAX)) as u8
}

fn check_max_values(old_max: u8, new_max: u8) -> Result<(), ImageErrors> {
    if old_max == 0 {
        return Err(ImageErrors::InvalidMaxValue(old_max));
    }
    if new_max == 0 {
        return Err(ImageErrors::InvalidMaxValue(new_max));
    }
    Ok(())
}

/// Rescale samples from `old_max` to `new_max`
///
/// # Errors
/// Either maximum value is zero, no pixel is touched in that case
pub fn rescale(in_image: &mut [u8], old_max: u8, new_max: u8) -> Result<(), ImageErrors> {
    check_max_values(old_max, new_max)?;

    for x in in_image.iter_mut() {
        *x = rescale_sample(*x, old_max, new_max);
    }
    Ok(())
}

/// Rescale every channel from `old_max` to `new_max`, see [`rescale`]
pub fn rescale_rgb(in_image: &mut [Rgb], old_max: u8, new_max: u8) -> Result<(), ImageErrors> {
    check_max_values(old_max, new_max)?;

    for pixel in in_image.iter_mut() {
        pixel.r = rescale_sample(pixel.r, old_max, new_max);
        pixel.g = rescale_sample(pixel.g, old_max, new_max);
        pixel.b = rescale_sample(pixel.b, old_max, new_max);
    }
    Ok(())
}
