/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Netpbm format tags
//!
//! Each of the three pixel models comes in an ASCII ("plain") and a binary ("raw")
//! variant, giving six magic numbers in total.
use core::fmt::{Display, Formatter};

/// The kind of value stored per pixel
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PixelModel {
    /// One bit per pixel, `true` means the bit is set
    Bitmap,
    /// One intensity byte per pixel
    Greyscale,
    /// A red, green and blue byte per pixel
    Color
}

impl PixelModel {
    /// Number of samples stored for a single pixel
    ///
    /// E.g. Color returns 3 since it contains R,G and B samples
    pub const fn num_components(&self) -> usize {
        match self {
            Self::Bitmap | Self::Greyscale => 1,
            Self::Color => 3
        }
    }

    /// Whether the header carries a maximum value line for this model
    pub const fn has_max_value(&self) -> bool {
        !matches!(self, Self::Bitmap)
    }
}

/// How samples are laid out in the file body
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SampleEncoding {
    /// Whitespace separated decimal text
    Ascii,
    /// Raw bytes, bit packed for bitmaps
    Binary
}

/// One of the six Netpbm magic numbers
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PnmFormat {
    /// ASCII bitmap
    P1,
    /// ASCII greyscale
    P2,
    /// ASCII color
    P3,
    /// Binary bitmap
    P4,
    /// Binary greyscale
    P5,
    /// Binary color
    P6
}

impl PnmFormat {
    /// All formats in magic number order
    pub const ALL: [PnmFormat; 6] = [
        PnmFormat::P1,
        PnmFormat::P2,
        PnmFormat::P3,
        PnmFormat::P4,
        PnmFormat::P5,
        PnmFormat::P6
    ];

    /// Parse a two byte magic number, e.g `b"P6"`
    ///
    /// Returns `None` for anything outside `P1..=P6`
    pub fn from_magic(magic: &[u8]) -> Option<PnmFormat> {
        match magic {
            b"P1" => Some(Self::P1),
            b"P2" => Some(Self::P2),
            b"P3" => Some(Self::P3),
            b"P4" => Some(Self::P4),
            b"P5" => Some(Self::P5),
            b"P6" => Some(Self::P6),
            _ => None
        }
    }

    /// The magic number as written in the file header
    pub const fn magic(&self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
            Self::P5 => "P5",
            Self::P6 => "P6"
        }
    }

    pub const fn model(&self) -> PixelModel {
        match self {
            Self::P1 | Self::P4 => PixelModel::Bitmap,
            Self::P2 | Self::P5 => PixelModel::Greyscale,
            Self::P3 | Self::P6 => PixelModel::Color
        }
    }

    pub const fn encoding(&self) -> SampleEncoding {
        match self {
            Self::P1 | Self::P2 | Self::P3 => SampleEncoding::Ascii,
            Self::P4 | Self::P5 | Self::P6 => SampleEncoding::Binary
        }
    }

    /// Build the format tag for a pixel model stored with a given encoding
    pub const fn from_parts(model: PixelModel, encoding: SampleEncoding) -> PnmFormat {
        match (model, encoding) {
            (PixelModel::Bitmap, SampleEncoding::Ascii) => Self::P1,
            (PixelModel::Greyscale, SampleEncoding::Ascii) => Self::P2,
            (PixelModel::Color, SampleEncoding::Ascii) => Self::P3,
            (PixelModel::Bitmap, SampleEncoding::Binary) => Self::P4,
            (PixelModel::Greyscale, SampleEncoding::Binary) => Self::P5,
            (PixelModel::Color, SampleEncoding::Binary) => Self::P6
        }
    }

    /// Return the same pixel model stored with another encoding
    pub const fn with_encoding(&self, encoding: SampleEncoding) -> PnmFormat {
        Self::from_parts(self.model(), encoding)
    }
}

impl Display for PnmFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.magic())
    }
}
