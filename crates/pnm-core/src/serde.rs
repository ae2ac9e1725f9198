#![cfg(feature = "serde")]

use alloc::format;

use serde::ser::*;

use crate::format::{PixelModel, PnmFormat, SampleEncoding};
use crate::pixel::{Point, Rgb};

impl Serialize for PnmFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // format serialization is simply the magic number
        serializer.serialize_str(self.magic())
    }
}

impl Serialize for PixelModel {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for SampleEncoding {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Rgb", 3)?;
        state.serialize_field("r", &self.r)?;
        state.serialize_field("g", &self.g)?;
        state.serialize_field("b", &self.b)?;
        state.end()
    }
}

impl Serialize for Point {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Point", 2)?;
        state.serialize_field("x", &self.x)?;
        state.serialize_field("y", &self.y)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::format::{PixelModel, PnmFormat};
    use crate::pixel::Rgb;

    #[test]
    fn serialize_tags() {
        assert_eq!(serde_json::to_string(&PnmFormat::P5).unwrap(), "\"P5\"");
        assert_eq!(
            serde_json::to_string(&PixelModel::Greyscale).unwrap(),
            "\"Greyscale\""
        );
        assert_eq!(
            serde_json::to_string(&Rgb::new(1, 2, 3)).unwrap(),
            "{\"r\":1,\"g\":2,\"b\":3}"
        );
    }
}
