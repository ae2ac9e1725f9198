/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by all pnm crates
//!
//! This crate provides the primitives shared by the Netpbm
//! decoder, encoder and the image processing routines
//!
//! It currently contains
//!
//! - A bytestream reader used to tokenize headers and read bodies
//! - Format tags for the six Netpbm variants (`P1` to `P6`)
//! - The [`PixelGrid`](grid::PixelGrid) container and pixel types
//! - Image decoder and encoder options
//! - A simple enum type to hold image decoding results.
//!
//! This library is `#[no_std]` with `alloc` feature needed for defining `Vec`
//! which we need for storing decoded  bytes.
//!
//!
//! # Features
//!  - `std`: Implements `std::error::Error` for error types.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
//!  - `log`: Routes the crate's logging macros to the `log` crate
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bytestream;
pub mod format;
pub mod grid;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod options;
pub mod pixel;
pub mod result;
pub mod serde;

#[cfg(feature = "log")]
pub use ::log;
