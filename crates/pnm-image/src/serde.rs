/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde-support")]
//! Serialize image information
//!
//! Only the header is serialized, pixels are left out.
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::image::Image;

impl Serialize for Image {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let (width, height) = self.size();

        let mut state = serializer.serialize_struct("Image", 5)?;

        state.serialize_field("format", &self.format())?;
        state.serialize_field("model", &self.model())?;
        state.serialize_field("width", &width)?;
        state.serialize_field("height", &height)?;
        state.serialize_field("max_value", &self.max_value())?;

        state.end()
    }
}
