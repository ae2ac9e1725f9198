/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel and coordinate types
use crate::format::PixelModel;

/// A red, green and blue sample triple
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// Largest of the three channels
    pub fn max_channel(&self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    /// Truncating average of the three channels, `floor((r+g+b)/3)`
    pub fn average(&self) -> u8 {
        let sum = u16::from(self.r) + u16::from(self.g) + u16::from(self.b);
        // max sum is 765, so the quotient always fits
        (sum / 3) as u8
    }
}

/// An integer drawing coordinate
///
/// Coordinates are signed so shapes may extend past the image edges,
/// raster routines clip whatever falls outside.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Point {
        Point { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}

/// A single pixel value of any of the three pixel models
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PixelValue {
    Bit(bool),
    Grey(u8),
    Rgb(Rgb)
}

impl PixelValue {
    /// The pixel model this value belongs to
    pub const fn model(&self) -> PixelModel {
        match self {
            Self::Bit(_) => PixelModel::Bitmap,
            Self::Grey(_) => PixelModel::Greyscale,
            Self::Rgb(_) => PixelModel::Color
        }
    }

    /// Largest sample stored in this value, bits count as 0 or 1
    pub fn max_sample(&self) -> u8 {
        match self {
            Self::Bit(bit) => u8::from(*bit),
            Self::Grey(value) => *value,
            Self::Rgb(rgb) => rgb.max_channel()
        }
    }
}

impl From<bool> for PixelValue {
    fn from(value: bool) -> Self {
        PixelValue::Bit(value)
    }
}

impl From<u8> for PixelValue {
    fn from(value: u8) -> Self {
        PixelValue::Grey(value)
    }
}

impl From<Rgb> for PixelValue {
    fn from(value: Rgb) -> Self {
        PixelValue::Rgb(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_truncates() {
        assert_eq!(Rgb::new(0, 0, 0).average(), 0);
        assert_eq!(Rgb::new(255, 255, 255).average(), 255);
        assert_eq!(Rgb::new(255, 0, 0).average(), 85);
        assert_eq!(Rgb::new(1, 1, 0).average(), 0);
    }

    #[test]
    fn value_models() {
        assert_eq!(PixelValue::from(true).model(), PixelModel::Bitmap);
        assert_eq!(PixelValue::from(7_u8).max_sample(), 7);
        assert_eq!(PixelValue::from(Rgb::new(1, 9, 3)).max_sample(), 9);
    }
}
