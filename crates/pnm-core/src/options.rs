/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder and encoder options
//!
//! All decoders and encoders in the pnm crates share these options, so the same
//! `DecoderOptions` can be reused across many decodes.
use crate::format::SampleEncoding;

/// Decoder options
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:   usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height:  usize,
    /// Treat recoverable irregularities as errors
    ///
    /// When set to false, irregularities such as trailing bytes
    /// after the pixel body are logged and ignored.
    ///
    /// - Default value: false
    strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:   1 << 14,
            max_height:  1 << 14,
            strict_mode: false
        }
    }
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should reject irregular
    /// but otherwise decodable input
    #[must_use]
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}

/// Encoder options
#[derive(Debug, Copy, Clone, Default)]
pub struct EncoderOptions {
    /// Force ASCII or binary output instead of the
    /// variant recorded on the image.
    ///
    /// - Default value: `None`, keep the image's variant
    encoding: Option<SampleEncoding>
}

impl EncoderOptions {
    pub const fn get_encoding(&self) -> Option<SampleEncoding> {
        self.encoding
    }

    /// Write the body with `encoding` regardless of the image's own variant
    #[must_use]
    pub fn set_encoding(mut self, encoding: SampleEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }
}
