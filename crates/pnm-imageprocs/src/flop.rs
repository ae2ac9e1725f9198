/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Flop filter: Create a vertical mirror image by reflecting
//! the pixels around the central x-axis.
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

/// Flop an image
///
/// ```text
///
///old image     new image
/// ┌─────────┐   ┌──────────┐
/// │a b c d e│   │f g h i j │
/// │f g h i j│   │a b c d e │
/// └─────────┘   └──────────┘
/// ```
#[derive(Default, Copy, Clone, Debug)]
pub struct Flop;

impl Flop {
    /// Create a new flop operation
    #[must_use]
    pub fn new() -> Flop {
        Self
    }
}

impl OperationsTrait for Flop {
    fn name(&self) -> &'static str {
        "Flop"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, _) = image.size();

        match image {
            Image::Bitmap(image) => flop(image.grid_mut().as_mut_slice(), width),
            Image::Greyscale(image) => flop(image.grid_mut().as_mut_slice(), width),
            Image::Color(image) => flop(image.grid_mut().as_mut_slice(), width)
        }
        Ok(())
    }
}

/// Flop an image, swapping row `i` with row `height-1-i`
pub fn flop<T: Copy>(channel: &mut [T], width: usize) {
    if width == 0 {
        return;
    }
    // Simply split the image in half
    // on one end read from the start to the halfway point
    // on the other end read from the end to the halfway point
    let height = channel.len() / width;
    let (top, bottom) = channel.split_at_mut((height / 2) * width);

    for (t, b) in top
        .chunks_exact_mut(width)
        .zip(bottom.rchunks_exact_mut(width))
    {
        t.swap_with_slice(b);
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::flop::flop;

    #[test]
    fn flop_reverses_row_order() {
        let mut pixels = [1, 2, 3, 4, 5, 6];
        flop(&mut pixels, 2);

        assert_eq!(pixels, [5, 6, 3, 4, 1, 2]);
    }

    #[test]
    fn flop_twice_is_identity() {
        let mut pixels = vec![0_u8; 12 * 9];
        nanorand::WyRand::new().fill(&mut pixels);

        let original = pixels.clone();

        flop(&mut pixels, 12);
        flop(&mut pixels, 12);
        assert_eq!(pixels, original);
    }
}
