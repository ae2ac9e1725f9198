/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pnm_codec::pnm_core::options::DecoderOptions;
use pnm_codec::{PnmDecodeErrors, PnmDecoder};

fn decode_err(data: &[u8]) -> PnmDecodeErrors {
    PnmDecoder::new(data).decode().unwrap_err()
}

#[test]
fn empty() {
    assert!(matches!(decode_err(b""), PnmDecodeErrors::InvalidMagic(_)));
}

#[test]
fn unknown_magic() {
    let err = decode_err(b"P7\n1 1\n255\n0");
    assert!(matches!(err, PnmDecodeErrors::InvalidMagic(ref x) if x == "P7"));

    let err = decode_err(b"P12 1\n1");
    assert!(matches!(err, PnmDecodeErrors::InvalidMagic(ref x) if x == "P12"));
}

#[test]
fn missing_height() {
    let err = decode_err(b"P1\n4\n");
    assert!(matches!(err, PnmDecodeErrors::InvalidHeader("height", 5)));
}

#[test]
fn non_numeric_width() {
    let err = decode_err(b"P2\nfour 4\n255\n");
    assert!(matches!(err, PnmDecodeErrors::InvalidHeader("width", 3)));
}

#[test]
fn missing_max_value() {
    let err = decode_err(b"P3\n1 1\n");
    assert!(matches!(err, PnmDecodeErrors::InvalidHeader("maximum value", _)));
}

#[test]
fn zero_and_wide_max_values() {
    assert!(matches!(
        decode_err(b"P5\n1 1\n0\n\x00"),
        PnmDecodeErrors::InvalidMaxValue(0)
    ));
    assert!(matches!(
        decode_err(b"P5\n1 1\n65535\n\x00\x00"),
        PnmDecodeErrors::UnsupportedMaxValue(65535)
    ));
}

#[test]
fn zero_dimensions() {
    assert!(matches!(
        decode_err(b"P1\n0 3\n"),
        PnmDecodeErrors::ZeroDimensions(0, 3)
    ));
}

#[test]
fn too_large_dimensions() {
    let options = DecoderOptions::default().set_max_height(10);
    let err = PnmDecoder::new_with_options(options, b"P4\n1 11\n")
        .decode()
        .unwrap_err();

    assert!(matches!(
        err,
        PnmDecodeErrors::LargeDimensions("height", 10, 11)
    ));
}

#[test]
fn truncated_ascii_bitmap() {
    let err = decode_err(b"P1\n2 2\n1 0\n1\n");
    assert!(matches!(err, PnmDecodeErrors::TruncatedBody(4, 3)));
}

#[test]
fn truncated_binary_bodies() {
    assert!(matches!(
        decode_err(b"P4\n9 2\n\x00\x00\x00"),
        PnmDecodeErrors::TruncatedBody(4, 3)
    ));
    assert!(matches!(
        decode_err(b"P5\n2 2\n255\n\x00\x00\x00"),
        PnmDecodeErrors::TruncatedBody(4, 3)
    ));
    assert!(matches!(
        decode_err(b"P6\n1 1\n255\n\x00\x00"),
        PnmDecodeErrors::TruncatedBody(3, 2)
    ));
}

#[test]
fn truncated_ascii_color() {
    let err = decode_err(b"P3\n2 1\n255\n1 2 3 4 5");
    assert!(matches!(err, PnmDecodeErrors::TruncatedBody(6, 5)));
}

#[test]
fn bad_ascii_samples() {
    let err = decode_err(b"P1\n2 1\n1 2\n");
    assert!(matches!(err, PnmDecodeErrors::InvalidSample(9, _)));

    let err = decode_err(b"P2\n2 1\n255\n1 x\n");
    assert!(matches!(err, PnmDecodeErrors::InvalidSample(13, _)));
}

#[test]
fn samples_above_max_value() {
    let err = decode_err(b"P2\n1 1\n15\n16\n");
    assert!(matches!(err, PnmDecodeErrors::InvalidSample(10, _)));

    let err = decode_err(b"P6\n1 1\n15\n\x01\x02\x10");
    assert!(matches!(err, PnmDecodeErrors::InvalidSample(12, _)));
}

#[test]
fn binary_body_needs_separator() {
    let err = decode_err(b"P5\n1 1\n255\x00");
    assert!(matches!(
        err,
        PnmDecodeErrors::InvalidHeader("whitespace before pixel data", 10)
    ));
}

#[test]
fn trailing_data() {
    let data = b"P5\n1 1\n255\n\x07GARBAGE";

    // tolerated by default
    let grid = PnmDecoder::new(data)
        .decode()
        .unwrap()
        .into_greyscale()
        .unwrap();
    assert_eq!(grid.as_slice(), &[7]);

    let options = DecoderOptions::default().set_strict_mode(true);
    let err = PnmDecoder::new_with_options(options, data)
        .decode()
        .unwrap_err();
    assert!(matches!(err, PnmDecodeErrors::TrailingData(7)));
}

#[test]
fn trailing_whitespace_and_comments_in_ascii_are_fine() {
    let options = DecoderOptions::default().set_strict_mode(true);
    let grid = PnmDecoder::new_with_options(options, b"P1\n1 1\n1\n\n# done\n")
        .decode()
        .unwrap()
        .into_bitmap()
        .unwrap();

    assert_eq!(grid.as_slice(), &[true]);
}
