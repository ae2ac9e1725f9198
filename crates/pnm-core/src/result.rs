/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoding results for images
use crate::format::PixelModel;
use crate::grid::PixelGrid;
use crate::pixel::Rgb;

/// A simple enum that can hold decode
/// results of the three pixel models
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DecodingResult {
    Bitmap(PixelGrid<bool>),
    Greyscale(PixelGrid<u8>),
    Color(PixelGrid<Rgb>)
}

impl DecodingResult {
    pub const fn model(&self) -> PixelModel {
        match self {
            Self::Bitmap(_) => PixelModel::Bitmap,
            Self::Greyscale(_) => PixelModel::Greyscale,
            Self::Color(_) => PixelModel::Color
        }
    }

    /// Get grid dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        match self {
            Self::Bitmap(grid) => grid.dimensions(),
            Self::Greyscale(grid) => grid.dimensions(),
            Self::Color(grid) => grid.dimensions()
        }
    }

    /// Return the contents if the result holds a bitmap grid
    pub fn into_bitmap(self) -> Option<PixelGrid<bool>> {
        match self {
            Self::Bitmap(grid) => Some(grid),
            _ => None
        }
    }

    /// Return the contents if the result holds a greyscale grid
    pub fn into_greyscale(self) -> Option<PixelGrid<u8>> {
        match self {
            Self::Greyscale(grid) => Some(grid),
            _ => None
        }
    }

    /// Return the contents if the result holds a color grid
    pub fn into_color(self) -> Option<PixelGrid<Rgb>> {
        match self {
            Self::Color(grid) => Some(grid),
            _ => None
        }
    }
}
