/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};
use std::io;

use pnm_codec::{PnmDecodeErrors, PnmEncodeErrors};
use pnm_core::format::{PixelModel, PnmFormat};
use pnm_core::grid::GridError;

/// All possible image errors that can occur.
///
/// This is the grandfather of image errors and contains
/// all decoding, processing and encoding errors possible
#[non_exhaustive]
pub enum ImageErrors {
    DecodeErrors(PnmDecodeErrors),
    EncodeErrors(PnmEncodeErrors),
    /// Pixel access outside the image or a badly sized buffer
    GridErrors(GridError),
    IoErrors(io::Error),
    /// A format tag was paired with pixels of another model
    FormatMismatch(PnmFormat, PixelModel),
    /// A pixel value of one model was used with an image of another
    ///
    /// # Arguments
    /// - 1st argument is the model of the image
    /// - 2nd argument is the model of the value
    ModelMismatch(PixelModel, PixelModel),
    /// A maximum value of zero
    InvalidMaxValue(u8),
    /// A sample larger than the image's maximum value
    ///
    /// # Arguments
    /// - 1st argument is the sample
    /// - 2nd argument is the maximum value
    SampleExceedsMax(u8, u8),
    /// The operation cannot run on images of this pixel model
    UnsupportedModel(&'static str, PixelModel),
    GenericStatic(&'static str),
    Generic(String)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeErrors(err) => {
                writeln!(f, "Decoding failed: {err:?}")
            }
            Self::EncodeErrors(err) => {
                writeln!(f, "Encoding failed: {err:?}")
            }
            Self::GridErrors(err) => {
                writeln!(f, "{err:?}")
            }
            Self::IoErrors(err) => {
                writeln!(f, "I/O error {err}")
            }
            Self::FormatMismatch(format, model) => {
                writeln!(
                    f,
                    "Format {format} stores {:?} pixels but the image has {model:?} pixels",
                    format.model()
                )
            }
            Self::ModelMismatch(image, value) => {
                writeln!(
                    f,
                    "Cannot use a {value:?} pixel value with a {image:?} image"
                )
            }
            Self::InvalidMaxValue(value) => {
                writeln!(f, "Invalid maximum value {value}, it must be at least 1")
            }
            Self::SampleExceedsMax(sample, max) => {
                writeln!(f, "Sample {sample} exceeds the maximum value {max}")
            }
            Self::UnsupportedModel(operation, model) => {
                writeln!(
                    f,
                    "The operation {operation} does not support {model:?} images"
                )
            }
            Self::GenericStatic(err) => {
                writeln!(f, "{err}")
            }
            Self::Generic(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for ImageErrors {}

impl From<PnmDecodeErrors> for ImageErrors {
    fn from(from: PnmDecodeErrors) -> Self {
        ImageErrors::DecodeErrors(from)
    }
}

impl From<PnmEncodeErrors> for ImageErrors {
    fn from(from: PnmEncodeErrors) -> Self {
        ImageErrors::EncodeErrors(from)
    }
}

impl From<GridError> for ImageErrors {
    fn from(from: GridError) -> Self {
        ImageErrors::GridErrors(from)
    }
}

impl From<io::Error> for ImageErrors {
    fn from(from: io::Error) -> Self {
        ImageErrors::IoErrors(from)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(from: &'static str) -> Self {
        ImageErrors::GenericStatic(from)
    }
}

impl From<String> for ImageErrors {
    fn from(from: String) -> Self {
        ImageErrors::Generic(from)
    }
}
