/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Invert filter
use pnm_core::pixel::Rgb;
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

/// Invert an image's pixels
///
/// Bitmap pixels are negated, greyscale and color samples
/// are reflected around the image's maximum value.
#[derive(Default, Copy, Clone, Debug)]
pub struct Invert;

impl Invert {
    /// Create a new invert operation
    #[must_use]
    pub fn new() -> Invert {
        Self
    }
}

impl OperationsTrait for Invert {
    fn name(&self) -> &'static str {
        "Invert"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        match image {
            Image::Bitmap(image) => invert_bits(image.grid_mut().as_mut_slice()),
            Image::Greyscale(image) => {
                let max_value = image.max_value();
                invert(image.grid_mut().as_mut_slice(), max_value);
            }
            Image::Color(image) => {
                let max_value = image.max_value();
                invert_rgb(image.grid_mut().as_mut_slice(), max_value);
            }
        }
        Ok(())
    }
}

/// Negate every bit
pub fn invert_bits(in_image: &mut [bool]) {
    in_image.iter_mut().for_each(|x| *x = !*x);
}

/// Invert a pixel
///
/// The formula for inverting a pixel
/// is `pixel[x,y] = max_value-pixel[x,y]`
///
/// Pixels larger than `max_value` become zero.
pub fn invert(in_image: &mut [u8], max_value: u8) {
    in_image
        .iter_mut()
        .for_each(|x| *x = max_value.saturating_sub(*x));
}

/// Invert each channel of a color pixel, see [`invert`]
pub fn invert_rgb(in_image: &mut [Rgb], max_value: u8) {
    for pixel in in_image.iter_mut() {
        pixel.r = max_value.saturating_sub(pixel.r);
        pixel.g = max_value.saturating_sub(pixel.g);
        pixel.b = max_value.saturating_sub(pixel.b);
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use pnm_core::pixel::Rgb;

    use crate::invert::{invert, invert_bits, invert_rgb};

    #[test]
    fn invert_relative_to_max() {
        let mut pixels = [0, 40, 100];
        invert(&mut pixels, 100);

        assert_eq!(pixels, [100, 60, 0]);
    }

    #[test]
    fn invert_at_255_matches_fixed_inversion() {
        let mut pixels = vec![0_u8; 256];
        nanorand::WyRand::new().fill(&mut pixels);

        let expected: Vec<u8> = pixels.iter().map(|x| 255 - x).collect();
        invert(&mut pixels, 255);

        assert_eq!(pixels, expected);
    }

    #[test]
    fn invert_twice_restores_with_small_max() {
        let mut rand = nanorand::WyRand::new();
        let original: Vec<Rgb> = (0..100)
            .map(|_| {
                Rgb::new(
                    rand.generate_range(0_u8..=15),
                    rand.generate_range(0_u8..=15),
                    rand.generate_range(0_u8..=15)
                )
            })
            .collect();

        let mut pixels = original.clone();
        invert_rgb(&mut pixels, 15);
        invert_rgb(&mut pixels, 15);

        assert_eq!(pixels, original);
    }

    #[test]
    fn invert_bits_twice_restores() {
        let mut pixels = [true, false, false, true];
        invert_bits(&mut pixels);

        assert_eq!(pixels, [false, true, true, false]);

        invert_bits(&mut pixels);
        assert_eq!(pixels, [true, false, false, true]);
    }
}
