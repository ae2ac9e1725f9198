/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pnm_codec::pnm_core::format::PnmFormat;
use pnm_codec::pnm_core::result::DecodingResult;
use pnm_codec::{PnmDecoder, PnmEncoder};

/// Decode `data`, encode it again in the same variant and check the
/// second decode gives the same header and pixels
fn round_trip(data: &[u8]) -> Vec<u8> {
    let mut decoder = PnmDecoder::new(data);
    let pixels = decoder.decode().unwrap();
    let header = decoder.get_header().unwrap();

    let mut output = Vec::new();
    let mut encoder = PnmEncoder::new(&mut output);

    let result = match &pixels {
        DecodingResult::Bitmap(grid) => encoder.encode_bitmap(grid, header.format),
        DecodingResult::Greyscale(grid) => {
            encoder.encode_greyscale(grid, header.format, header.max_value.unwrap())
        }
        DecodingResult::Color(grid) => {
            encoder.encode_color(grid, header.format, header.max_value.unwrap())
        }
    };
    result.unwrap();

    let mut second = PnmDecoder::new(&output);
    assert_eq!(second.decode().unwrap(), pixels);
    assert_eq!(second.get_header(), Some(header));

    output
}

#[test]
fn plain_bitmap() {
    let output = round_trip(b"P1\n# made by hand\n4 2\n1 0 1 0\n0101\n");
    assert_eq!(output, b"P1\n4 2\n1 0 1 0\n0 1 0 1\n");
}

#[test]
fn raw_bitmap() {
    let output = round_trip(b"P4\n11 2\n\xff\xe0\x00\x20");
    assert_eq!(output, b"P4\n11 2\n\xff\xe0\x00\x20");
}

#[test]
fn plain_greyscale() {
    let output = round_trip(b"P2\n3 2\n100\n0 50 100\n\n  7 8   9\n");
    assert_eq!(output, b"P2\n3 2\n100\n0 50 100\n7 8 9\n");
}

#[test]
fn raw_greyscale() {
    round_trip(b"P5\n2 2\n255\n\x00\x7f\x80\xff");
}

#[test]
fn plain_color() {
    let output = round_trip(b"P3\n2 1\n255\n255 0 0   0 255 0\n");
    assert_eq!(output, b"P3\n2 1\n255\n255 0 0 0 255 0\n");
}

#[test]
fn raw_color() {
    round_trip(b"P6 1 2 200\n\x01\x02\x03\xc8\xc7\xc6");
}

#[test]
fn all_formats_produce_the_right_model() {
    let inputs: [(&[u8], PnmFormat); 6] = [
        (b"P1 1 1 1", PnmFormat::P1),
        (b"P2 1 1 9 9", PnmFormat::P2),
        (b"P3 1 1 9 1 2 3", PnmFormat::P3),
        (b"P4 1 1\n\x80", PnmFormat::P4),
        (b"P5 1 1 9\n\x09", PnmFormat::P5),
        (b"P6 1 1 9\n\x01\x02\x03", PnmFormat::P6)
    ];

    for (data, format) in inputs {
        let mut decoder = PnmDecoder::new(data);
        let pixels = decoder.decode().unwrap();

        assert_eq!(decoder.get_format(), Some(format));
        assert_eq!(pixels.model(), format.model());
        assert_eq!(pixels.dimensions(), (1, 1));
    }
}
