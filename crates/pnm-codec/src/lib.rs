/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A Netpbm decoder and encoder
//!
//! This crate contains a decoder and encoder for the six classic
//! Netpbm variants
//!
//! | Magic | Pixel model | Body |
//! |-------|-------------|------|
//! | `P1`  | bitmap      | ASCII `0`/`1` |
//! | `P2`  | greyscale   | ASCII decimal |
//! | `P3`  | color       | ASCII decimal, R G B per pixel |
//! | `P4`  | bitmap      | bit packed, MSB first, rows padded to bytes |
//! | `P5`  | greyscale   | one byte per pixel |
//! | `P6`  | color       | three bytes per pixel |
//!
//! Maximum values above 255 (16 bit samples) are not supported.
//!
//! # Example
//! - Decoding a plain bitmap
//! ```
//! use pnm_codec::PnmDecoder;
//! let mut decoder = PnmDecoder::new(b"P1\n2 1\n1 0\n");
//! let pixels = decoder.decode().unwrap().into_bitmap().unwrap();
//! assert_eq!(pixels.as_slice(), &[true, false]);
//! ```
//!
//! - Encoding it again
//! ```
//! use pnm_codec::PnmEncoder;
//! use pnm_codec::pnm_core::format::PnmFormat;
//! use pnm_codec::pnm_core::grid::PixelGrid;
//!
//! let pixels = PixelGrid::from_vec(2, 1, vec![true, false]).unwrap();
//! let mut output = vec![];
//!
//! PnmEncoder::new(&mut output).encode_bitmap(&pixels, PnmFormat::P1).unwrap();
//! assert_eq!(output, b"P1\n2 1\n1 0\n");
//! ```
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use pnm_core;

mod decoder;
mod encoder;
mod errors;
