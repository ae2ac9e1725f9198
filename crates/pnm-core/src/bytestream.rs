/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple bytestream reader
//!
//! Netpbm headers are whitespace separated ASCII tokens followed by either an
//! ASCII or a raw binary body, so the decoder needs a cursor that can read single
//! bytes, look one byte ahead, step back and hand out the remaining body as a slice.
pub use reader::{ByteIoError, ByteReader};

mod reader;
