/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding and encoding
use std::fmt::{Debug, Display, Formatter};
use std::io;

use pnm_core::format::{PixelModel, PnmFormat};
use pnm_core::grid::GridError;

/// Possible errors that may occur during decoding
#[non_exhaustive]
pub enum PnmDecodeErrors {
    /// The stream does not start with one of `P1` to `P6`
    InvalidMagic(String),
    /// A header token is missing or not an unsigned integer
    ///
    /// # Arguments
    /// - 1st argument is the header field being read
    /// - 2nd argument is the byte offset where reading failed
    InvalidHeader(&'static str, usize),
    /// Width or height is zero
    ZeroDimensions(usize, usize),
    /// Too large dimensions for a given width or height
    ///
    /// # Arguments
    /// - 1st argument is the dimension name
    /// - 2nd argument is the configured limit
    /// - 3rd argument is the value found
    LargeDimensions(&'static str, usize, usize),
    /// The header declares a maximum value of zero
    InvalidMaxValue(usize),
    /// The header declares a maximum value that does not fit a byte
    UnsupportedMaxValue(usize),
    /// The body has fewer samples than the dimensions require
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes or samples expected
    /// - 2nd argument is the number actually found
    TruncatedBody(usize, usize),
    /// A body sample is malformed or exceeds the maximum value
    ///
    /// # Arguments
    /// - 1st argument is the byte offset of the sample
    /// - 2nd argument describes the problem
    InvalidSample(usize, String),
    /// Bytes remain after the pixel body, only reported in strict mode
    TrailingData(usize),
    /// Reading the input stream failed
    IoErrors(io::Error),
    GridErrors(GridError)
}

impl Debug for PnmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMagic(magic) => {
                writeln!(
                    f,
                    "Invalid magic number `{magic}`, expected one of P1, P2, P3, P4, P5 or P6"
                )
            }
            Self::InvalidHeader(field, position) => {
                writeln!(
                    f,
                    "Invalid header, could not read {field} at byte offset {position}"
                )
            }
            Self::ZeroDimensions(width, height) => {
                writeln!(f, "Zero sized image, dimensions are {width}x{height}")
            }
            Self::LargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large {dimension}, expected a value less than {expected} but found {found}"
                )
            }
            Self::InvalidMaxValue(value) => {
                writeln!(f, "Invalid maximum value {value}, it must be at least 1")
            }
            Self::UnsupportedMaxValue(value) => {
                writeln!(
                    f,
                    "Unsupported maximum value {value}, only values up to 255 are supported"
                )
            }
            Self::TruncatedBody(expected, found) => {
                writeln!(
                    f,
                    "Truncated pixel body, expected {expected} samples but found {found}"
                )
            }
            Self::InvalidSample(position, reason) => {
                writeln!(f, "Invalid sample at byte offset {position}: {reason}")
            }
            Self::TrailingData(count) => {
                writeln!(f, "{count} unexpected bytes after the pixel body")
            }
            Self::IoErrors(err) => {
                writeln!(f, "I/O error {err}")
            }
            Self::GridErrors(err) => {
                writeln!(f, "{err:?}")
            }
        }
    }
}

impl Display for PnmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PnmDecodeErrors {}

impl From<io::Error> for PnmDecodeErrors {
    fn from(err: io::Error) -> Self {
        PnmDecodeErrors::IoErrors(err)
    }
}

impl From<GridError> for PnmDecodeErrors {
    fn from(err: GridError) -> Self {
        PnmDecodeErrors::GridErrors(err)
    }
}

/// Errors occurring during encoding
#[non_exhaustive]
pub enum PnmEncodeErrors {
    /// The format tag describes another pixel model than the pixels handed in
    ///
    /// # Arguments
    /// - 1st argument is the format requested
    /// - 2nd argument is the pixel model of the data
    FormatMismatch(PnmFormat, PixelModel),
    /// Maximum value outside `1..=255`
    InvalidMaxValue(u8),
    /// A sample is larger than the declared maximum value
    SampleExceedsMax(u8, u8),
    IoErrors(io::Error)
}

impl Debug for PnmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FormatMismatch(format, model) => {
                writeln!(
                    f,
                    "Cannot encode {model:?} pixels as {format}, which stores {:?} pixels",
                    format.model()
                )
            }
            Self::InvalidMaxValue(value) => {
                writeln!(f, "Invalid maximum value {value}, it must be at least 1")
            }
            Self::SampleExceedsMax(sample, max) => {
                writeln!(f, "Sample {sample} exceeds the maximum value {max}")
            }
            Self::IoErrors(err) => {
                writeln!(f, "I/O error {err}")
            }
        }
    }
}

impl Display for PnmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PnmEncodeErrors {}

impl From<io::Error> for PnmEncodeErrors {
    fn from(err: io::Error) -> Self {
        PnmEncodeErrors::IoErrors(err)
    }
}
