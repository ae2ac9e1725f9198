/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Netpbm images and the operations they support
//!
//! This crate provides the [`Image`](image::Image) type which holds a bitmap,
//! greyscale or color image, and the glue needed to decode it from and
//! encode it to any of the `P1` to `P6` formats.
//!
//! Image processing routines live in `pnm-imageprocs`, they implement
//! [`OperationsTrait`](traits::OperationsTrait) and run through
//! [`execute`](traits::OperationsTrait::execute).
//!
//! # Example
//! ```
//! use pnm_image::image::Image;
//! use pnm_image::pnm_core::options::DecoderOptions;
//! use pnm_image::pnm_core::pixel::PixelValue;
//!
//! let mut image = Image::decode_bytes(b"P1\n2 1\n0 1\n", DecoderOptions::default()).unwrap();
//! image.set(0, 0, PixelValue::Bit(true)).unwrap();
//!
//! assert_eq!(image.write_to_vec().unwrap(), b"P1\n2 1\n1 1\n".to_vec());
//! ```
#![forbid(unsafe_code)]

pub use pnm_codec;
pub use pnm_core;

pub mod codecs;
pub mod errors;
pub mod image;
mod serde;
pub mod traits;
