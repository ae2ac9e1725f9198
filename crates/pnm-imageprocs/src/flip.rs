/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Flip filter: Create a horizontal mirror image by reflecting pixels
//! around the central y-axis
//!
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

/// Flip an image
///
///```text
///old image     new image
///┌─────────┐   ┌──────────┐
///│a b c d e│   │e d c b a │
///│f g h i j│   │j i h g f │
///└─────────┘   └──────────┘
///```
#[derive(Default, Copy, Clone, Debug)]
pub struct Flip;

impl Flip {
    /// Create a new flip operation
    #[must_use]
    pub fn new() -> Flip {
        Self
    }
}

impl OperationsTrait for Flip {
    fn name(&self) -> &'static str {
        "Flip"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, _) = image.size();

        match image {
            Image::Bitmap(image) => flip(image.grid_mut().as_mut_slice(), width),
            Image::Greyscale(image) => flip(image.grid_mut().as_mut_slice(), width),
            Image::Color(image) => flip(image.grid_mut().as_mut_slice(), width)
        }
        Ok(())
    }
}

/// Flip an image, swapping column `j` with column `width-1-j` in every row
///
/// `in_out_image` holds the pixels row by row, each row being `width` pixels long.
pub fn flip<T: Copy>(in_out_image: &mut [T], width: usize) {
    if width == 0 {
        return;
    }
    assert_eq!(
        in_out_image.len() % width,
        0,
        "Width does not evenly divide image"
    );

    for width_chunks in in_out_image.chunks_exact_mut(width) {
        let (left_to_right, right_to_left) = width_chunks.split_at_mut(width / 2);

        // iterate and swap, the middle pixel of odd rows stays in place
        for (ltr, rtl) in left_to_right.iter_mut().zip(right_to_left.iter_mut().rev()) {
            std::mem::swap(ltr, rtl);
        }
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::flip::flip;

    #[test]
    fn flip_reverses_rows() {
        let mut pixels = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        flip(&mut pixels, 5);

        assert_eq!(pixels, [5, 4, 3, 2, 1, 10, 9, 8, 7, 6]);
    }

    #[test]
    fn flip_twice_is_identity() {
        let mut pixels = vec![0_u8; 33 * 7];
        nanorand::WyRand::new().fill(&mut pixels);

        let original = pixels.clone();

        flip(&mut pixels, 33);
        assert_ne!(pixels, original);
        flip(&mut pixels, 33);
        assert_eq!(pixels, original);
    }

    #[test]
    fn flip_single_column_is_noop() {
        let mut pixels = [true, false, true];
        flip(&mut pixels, 1);

        assert_eq!(pixels, [true, false, true]);
    }
}
