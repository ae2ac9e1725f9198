/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits implemented by image operations
use pnm_core::format::PixelModel;
use pnm_core::log::trace;

use crate::errors::ImageErrors;
use crate::image::Image;

/// All pixel models, for operations that work on any image
pub const ALL_MODELS: &[PixelModel] =
    &[PixelModel::Bitmap, PixelModel::Greyscale, PixelModel::Color];

/// The trait all image operations implement
///
/// An operation modifies an image in place, conversions swap
/// the image for one of another pixel model.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Carry out the operation
    ///
    /// This is called by [`execute`](Self::execute) after the image's
    /// pixel model has been checked, prefer calling that.
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Pixel models this operation can handle
    fn supported_models(&self) -> &'static [PixelModel] {
        ALL_MODELS
    }

    /// Run the operation on `image`
    ///
    /// # Errors
    /// - The image's pixel model isn't in [`supported_models`](Self::supported_models)
    /// - Any error the operation itself returns
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let model = image.model();

        if !self.supported_models().contains(&model) {
            return Err(ImageErrors::UnsupportedModel(self.name(), model));
        }
        trace!("Running {} on a {:?} image", self.name(), model);

        self.execute_impl(image)
    }
}

impl Image {
    /// Run a series of operations, stopping at the first error
    pub fn execute_ops(&mut self, operations: &[&dyn OperationsTrait]) -> Result<(), ImageErrors> {
        for operation in operations {
            operation.execute(self)?;
        }
        Ok(())
    }
}
