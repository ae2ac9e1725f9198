/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `pnm-image`
//!
//! This implements the transforms, model conversions and drawing
//! routines supported on Netpbm images.
//!
//! Each routine comes in two flavours, a free function working on a
//! [`PixelGrid`](pnm_core::grid::PixelGrid) or slice of pixels, and a struct
//! implementing the `OperationsTrait` defined by pnm-image.
//!
//! # Example
//! - Mirror an image horizontally
//! ```
//! use pnm_image::image::Image;
//! use pnm_image::traits::OperationsTrait;
//! use pnm_core::options::DecoderOptions;
//! use pnm_imageprocs::flip::Flip;
//!
//! let mut image = Image::decode_bytes(b"P1\n3 1\n1 1 0\n", DecoderOptions::default()).unwrap();
//! // execute the filter
//! Flip::new().execute(&mut image).unwrap();
//!
//! assert_eq!(image.write_to_vec().unwrap(), b"P1\n3 1\n0 1 1\n".to_vec());
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

pub mod draw;
pub mod flip;
pub mod flop;
pub mod grayscale;
pub mod invert;
pub mod rescale;
pub mod rotate;
pub mod threshold;
