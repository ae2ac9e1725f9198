/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Main image representations
//!
//! An image owns exactly one pixel grid plus the header metadata
//! needed to write it back in the same Netpbm variant it came from.
//!
//! There are three concrete images, one per pixel model, and the [`Image`]
//! enum which wraps any of them.
use pnm_core::format::{PixelModel, PnmFormat, SampleEncoding};
use pnm_core::grid::PixelGrid;
use pnm_core::pixel::{PixelValue, Rgb};

use crate::errors::ImageErrors;

fn check_format(format: PnmFormat, model: PixelModel) -> Result<(), ImageErrors> {
    if format.model() != model {
        return Err(ImageErrors::FormatMismatch(format, model));
    }
    Ok(())
}

fn check_max_value(max_value: u8) -> Result<(), ImageErrors> {
    if max_value == 0 {
        return Err(ImageErrors::InvalidMaxValue(max_value));
    }
    Ok(())
}

fn check_samples(mut samples: impl Iterator<Item = u8>, max_value: u8) -> Result<(), ImageErrors> {
    match samples.find(|x| *x > max_value) {
        Some(sample) => Err(ImageErrors::SampleExceedsMax(sample, max_value)),
        None => Ok(())
    }
}

/// A black and white image, stored as `P1` or `P4`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BitmapImage {
    grid:   PixelGrid<bool>,
    format: PnmFormat
}

impl BitmapImage {
    /// Create a new bitmap with every pixel cleared
    pub fn new(width: usize, height: usize, format: PnmFormat) -> Result<BitmapImage, ImageErrors> {
        BitmapImage::from_grid(PixelGrid::new(width, height, false), format)
    }

    pub fn from_grid(grid: PixelGrid<bool>, format: PnmFormat) -> Result<BitmapImage, ImageErrors> {
        check_format(format, PixelModel::Bitmap)?;

        Ok(BitmapImage { grid, format })
    }

    pub const fn format(&self) -> PnmFormat {
        self.format
    }

    pub const fn size(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn get(&self, x: usize, y: usize) -> Result<bool, ImageErrors> {
        Ok(self.grid.get(x, y)?)
    }

    pub fn set(&mut self, x: usize, y: usize, value: bool) -> Result<(), ImageErrors> {
        Ok(self.grid.set(x, y, value)?)
    }

    pub const fn grid(&self) -> &PixelGrid<bool> {
        &self.grid
    }

    /// Mutable access to the pixels
    ///
    /// Any boolean is a valid bitmap pixel, so no invariant can be broken here
    pub fn grid_mut(&mut self) -> &mut PixelGrid<bool> {
        &mut self.grid
    }

    /// Replace the pixels, the new grid may have different dimensions
    pub fn set_grid(&mut self, grid: PixelGrid<bool>) {
        self.grid = grid;
    }

    pub fn into_grid(self) -> PixelGrid<bool> {
        self.grid
    }
}

/// A single channel image with a declared maximum value, stored as `P2` or `P5`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GreyImage {
    grid:      PixelGrid<u8>,
    format:    PnmFormat,
    max_value: u8
}

impl GreyImage {
    /// Create a new greyscale image with every pixel set to zero
    pub fn new(
        width: usize, height: usize, format: PnmFormat, max_value: u8
    ) -> Result<GreyImage, ImageErrors> {
        GreyImage::from_grid(PixelGrid::new(width, height, 0), format, max_value)
    }

    /// Create an image from existing pixels
    ///
    /// # Errors
    /// - The format is not `P2` or `P5`
    /// - `max_value` is zero
    /// - A pixel is larger than `max_value`
    pub fn from_grid(
        grid: PixelGrid<u8>, format: PnmFormat, max_value: u8
    ) -> Result<GreyImage, ImageErrors> {
        check_format(format, PixelModel::Greyscale)?;
        check_max_value(max_value)?;
        check_samples(grid.as_slice().iter().copied(), max_value)?;

        Ok(GreyImage {
            grid,
            format,
            max_value
        })
    }

    pub const fn format(&self) -> PnmFormat {
        self.format
    }

    pub const fn max_value(&self) -> u8 {
        self.max_value
    }

    /// Change the declared maximum value without touching pixels
    ///
    /// Fails if any pixel is above the new maximum, rescale the pixels
    /// first when lowering the maximum.
    pub fn set_max_value(&mut self, max_value: u8) -> Result<(), ImageErrors> {
        check_max_value(max_value)?;
        check_samples(self.grid.as_slice().iter().copied(), max_value)?;

        self.max_value = max_value;
        Ok(())
    }

    pub const fn size(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn get(&self, x: usize, y: usize) -> Result<u8, ImageErrors> {
        Ok(self.grid.get(x, y)?)
    }

    pub fn set(&mut self, x: usize, y: usize, value: u8) -> Result<(), ImageErrors> {
        check_samples(core::iter::once(value), self.max_value)?;

        Ok(self.grid.set(x, y, value)?)
    }

    pub const fn grid(&self) -> &PixelGrid<u8> {
        &self.grid
    }

    /// Mutable access to the pixels
    ///
    /// Callers must keep every pixel at or below [`max_value`](Self::max_value)
    pub fn grid_mut(&mut self) -> &mut PixelGrid<u8> {
        &mut self.grid
    }

    /// Replace the pixels, the new grid may have different dimensions
    pub fn set_grid(&mut self, grid: PixelGrid<u8>) -> Result<(), ImageErrors> {
        check_samples(grid.as_slice().iter().copied(), self.max_value)?;

        self.grid = grid;
        Ok(())
    }

    pub fn into_grid(self) -> PixelGrid<u8> {
        self.grid
    }
}

/// An RGB image with a declared maximum channel value, stored as `P3` or `P6`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColorImage {
    grid:      PixelGrid<Rgb>,
    format:    PnmFormat,
    max_value: u8
}

impl ColorImage {
    /// Create a new color image with every pixel black
    pub fn new(
        width: usize, height: usize, format: PnmFormat, max_value: u8
    ) -> Result<ColorImage, ImageErrors> {
        ColorImage::from_grid(PixelGrid::new(width, height, Rgb::default()), format, max_value)
    }

    /// Create an image from existing pixels
    ///
    /// # Errors
    /// - The format is not `P3` or `P6`
    /// - `max_value` is zero
    /// - A channel is larger than `max_value`
    pub fn from_grid(
        grid: PixelGrid<Rgb>, format: PnmFormat, max_value: u8
    ) -> Result<ColorImage, ImageErrors> {
        check_format(format, PixelModel::Color)?;
        check_max_value(max_value)?;
        check_samples(grid.as_slice().iter().map(Rgb::max_channel), max_value)?;

        Ok(ColorImage {
            grid,
            format,
            max_value
        })
    }

    pub const fn format(&self) -> PnmFormat {
        self.format
    }

    pub const fn max_value(&self) -> u8 {
        self.max_value
    }

    /// Change the declared maximum value without touching pixels
    ///
    /// Fails if any channel is above the new maximum
    pub fn set_max_value(&mut self, max_value: u8) -> Result<(), ImageErrors> {
        check_max_value(max_value)?;
        check_samples(self.grid.as_slice().iter().map(Rgb::max_channel), max_value)?;

        self.max_value = max_value;
        Ok(())
    }

    pub const fn size(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Rgb, ImageErrors> {
        Ok(self.grid.get(x, y)?)
    }

    pub fn set(&mut self, x: usize, y: usize, value: Rgb) -> Result<(), ImageErrors> {
        check_samples(core::iter::once(value.max_channel()), self.max_value)?;

        Ok(self.grid.set(x, y, value)?)
    }

    pub const fn grid(&self) -> &PixelGrid<Rgb> {
        &self.grid
    }

    /// Mutable access to the pixels
    ///
    /// Callers must keep every channel at or below [`max_value`](Self::max_value)
    pub fn grid_mut(&mut self) -> &mut PixelGrid<Rgb> {
        &mut self.grid
    }

    /// Replace the pixels, the new grid may have different dimensions
    pub fn set_grid(&mut self, grid: PixelGrid<Rgb>) -> Result<(), ImageErrors> {
        check_samples(grid.as_slice().iter().map(Rgb::max_channel), self.max_value)?;

        self.grid = grid;
        Ok(())
    }

    pub fn into_grid(self) -> PixelGrid<Rgb> {
        self.grid
    }
}

/// Represents a single image of any pixel model
///
/// Operations mutate the contained image in place, conversions
/// replace it with an image of another model.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Image {
    Bitmap(BitmapImage),
    Greyscale(GreyImage),
    Color(ColorImage)
}

impl Image {
    /// Return the pixel model of the image
    pub const fn model(&self) -> PixelModel {
        match self {
            Image::Bitmap(_) => PixelModel::Bitmap,
            Image::Greyscale(_) => PixelModel::Greyscale,
            Image::Color(_) => PixelModel::Color
        }
    }

    /// Return the Netpbm variant the image will be encoded as
    pub const fn format(&self) -> PnmFormat {
        match self {
            Image::Bitmap(image) => image.format(),
            Image::Greyscale(image) => image.format(),
            Image::Color(image) => image.format()
        }
    }

    /// Change the variant the image is encoded as
    ///
    /// Only the sample encoding can change, i.e `P2` to `P5` and back,
    /// a format of another pixel model is an error.
    pub fn set_format(&mut self, format: PnmFormat) -> Result<(), ImageErrors> {
        check_format(format, self.model())?;

        match self {
            Image::Bitmap(image) => image.format = format,
            Image::Greyscale(image) => image.format = format,
            Image::Color(image) => image.format = format
        }
        Ok(())
    }

    /// Switch between the ASCII and binary variant of the current model
    pub fn set_encoding(&mut self, encoding: SampleEncoding) {
        let format = self.format().with_encoding(encoding);

        match self {
            Image::Bitmap(image) => image.format = format,
            Image::Greyscale(image) => image.format = format,
            Image::Color(image) => image.format = format
        }
    }

    /// Return the maximum sample value or `None` for bitmaps
    pub const fn max_value(&self) -> Option<u8> {
        match self {
            Image::Bitmap(_) => None,
            Image::Greyscale(image) => Some(image.max_value()),
            Image::Color(image) => Some(image.max_value())
        }
    }

    /// Return the image dimensions as `(width, height)`
    pub const fn size(&self) -> (usize, usize) {
        match self {
            Image::Bitmap(image) => image.size(),
            Image::Greyscale(image) => image.size(),
            Image::Color(image) => image.size()
        }
    }

    /// Read the pixel at `(x, y)`
    ///
    /// # Errors
    /// Coordinates outside the image
    pub fn get(&self, x: usize, y: usize) -> Result<PixelValue, ImageErrors> {
        let value = match self {
            Image::Bitmap(image) => PixelValue::Bit(image.get(x, y)?),
            Image::Greyscale(image) => PixelValue::Grey(image.get(x, y)?),
            Image::Color(image) => PixelValue::Rgb(image.get(x, y)?)
        };
        Ok(value)
    }

    /// Write `value` to the pixel at `(x, y)`
    ///
    /// # Errors
    /// - Coordinates outside the image
    /// - `value` is of another pixel model than the image
    /// - `value` exceeds the image's maximum value
    pub fn set(&mut self, x: usize, y: usize, value: PixelValue) -> Result<(), ImageErrors> {
        match (self, value) {
            (Image::Bitmap(image), PixelValue::Bit(bit)) => image.set(x, y, bit),
            (Image::Greyscale(image), PixelValue::Grey(grey)) => image.set(x, y, grey),
            (Image::Color(image), PixelValue::Rgb(rgb)) => image.set(x, y, rgb),
            (image, value) => Err(ImageErrors::ModelMismatch(image.model(), value.model()))
        }
    }

    /// Check that `value` can be stored in this image
    pub fn check_value(&self, value: PixelValue) -> Result<(), ImageErrors> {
        if value.model() != self.model() {
            return Err(ImageErrors::ModelMismatch(self.model(), value.model()));
        }
        if let Some(max_value) = self.max_value() {
            check_samples(core::iter::once(value.max_sample()), max_value)?;
        }
        Ok(())
    }
}

impl From<BitmapImage> for Image {
    fn from(image: BitmapImage) -> Self {
        Image::Bitmap(image)
    }
}

impl From<GreyImage> for Image {
    fn from(image: GreyImage) -> Self {
        Image::Greyscale(image)
    }
}

impl From<ColorImage> for Image {
    fn from(image: ColorImage) -> Self {
        Image::Color(image)
    }
}

#[cfg(test)]
mod tests {
    use pnm_core::format::{PnmFormat, SampleEncoding};
    use pnm_core::grid::PixelGrid;
    use pnm_core::pixel::{PixelValue, Rgb};

    use crate::errors::ImageErrors;
    use crate::image::{BitmapImage, ColorImage, GreyImage, Image};

    #[test]
    fn constructors_reject_wrong_format() {
        assert!(matches!(
            BitmapImage::new(2, 2, PnmFormat::P2),
            Err(ImageErrors::FormatMismatch(PnmFormat::P2, _))
        ));
        assert!(GreyImage::new(2, 2, PnmFormat::P6, 255).is_err());
        assert!(ColorImage::new(2, 2, PnmFormat::P1, 255).is_err());
    }

    #[test]
    fn constructors_reject_zero_max() {
        assert!(matches!(
            GreyImage::new(2, 2, PnmFormat::P2, 0),
            Err(ImageErrors::InvalidMaxValue(0))
        ));
        assert!(ColorImage::new(2, 2, PnmFormat::P3, 0).is_err());
    }

    #[test]
    fn from_grid_rejects_samples_above_max() {
        let grid = PixelGrid::from_vec(2, 1, vec![3, 16]).unwrap();

        assert!(matches!(
            GreyImage::from_grid(grid, PnmFormat::P5, 15),
            Err(ImageErrors::SampleExceedsMax(16, 15))
        ));

        let grid = PixelGrid::new(1, 1, Rgb::new(0, 0, 200));
        assert!(ColorImage::from_grid(grid, PnmFormat::P6, 100).is_err());
    }

    #[test]
    fn get_and_set_through_image() {
        let mut image = Image::from(GreyImage::new(3, 2, PnmFormat::P2, 100).unwrap());

        image.set(2, 1, PixelValue::Grey(42)).unwrap();

        assert_eq!(image.get(2, 1).unwrap(), PixelValue::Grey(42));
        assert_eq!(image.get(0, 0).unwrap(), PixelValue::Grey(0));
        assert_eq!(image.size(), (3, 2));
    }

    #[test]
    fn set_rejects_out_of_bounds() {
        let mut image = Image::from(BitmapImage::new(3, 2, PnmFormat::P1).unwrap());

        assert!(matches!(
            image.set(3, 0, PixelValue::Bit(true)),
            Err(ImageErrors::GridErrors(_))
        ));
        assert!(image.get(0, 2).is_err());
    }

    #[test]
    fn set_rejects_wrong_model_and_large_values() {
        let mut image = Image::from(ColorImage::new(1, 1, PnmFormat::P3, 100).unwrap());

        assert!(matches!(
            image.set(0, 0, PixelValue::Grey(1)),
            Err(ImageErrors::ModelMismatch(_, _))
        ));
        assert!(matches!(
            image.set(0, 0, PixelValue::Rgb(Rgb::new(1, 101, 1))),
            Err(ImageErrors::SampleExceedsMax(101, 100))
        ));
        // failed writes leave the image untouched
        assert_eq!(image.get(0, 0).unwrap(), PixelValue::Rgb(Rgb::default()));
    }

    #[test]
    fn set_format_keeps_model() {
        let mut image = Image::from(GreyImage::new(1, 1, PnmFormat::P2, 255).unwrap());

        image.set_format(PnmFormat::P5).unwrap();
        assert_eq!(image.format(), PnmFormat::P5);

        assert!(image.set_format(PnmFormat::P6).is_err());
        assert_eq!(image.format(), PnmFormat::P5);

        image.set_encoding(SampleEncoding::Ascii);
        assert_eq!(image.format(), PnmFormat::P2);
    }

    #[test]
    fn lowering_max_value_checks_pixels() {
        let mut image = GreyImage::new(2, 1, PnmFormat::P2, 255).unwrap();
        image.set(1, 0, 200).unwrap();

        assert!(image.set_max_value(100).is_err());
        assert_eq!(image.max_value(), 255);

        image.set(1, 0, 50).unwrap();
        image.set_max_value(100).unwrap();
        assert_eq!(image.max_value(), 100);
    }

    #[test]
    fn bitmaps_have_no_max_value() {
        let image = Image::from(BitmapImage::new(1, 1, PnmFormat::P4).unwrap());

        assert_eq!(image.max_value(), None);
        assert!(image.check_value(PixelValue::Bit(true)).is_ok());
        assert!(image.check_value(PixelValue::Grey(1)).is_err());
    }
}
