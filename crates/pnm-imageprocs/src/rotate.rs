/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Rotate an image by 90 degrees clockwise
use pnm_core::grid::{GridError, PixelGrid};
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

/// Rotate an image 90 degrees clockwise
///
/// Width and height of the image are swapped
///
/// ```text
/// [1,2,3]    [7,4,1]
/// [4,5,6] -> [8,5,2]
/// [7,8,9]    [9,6,3]
/// ```
#[derive(Default, Copy, Clone, Debug)]
pub struct Rotate90;

impl Rotate90 {
    #[must_use]
    pub fn new() -> Rotate90 {
        Self
    }
}

impl OperationsTrait for Rotate90 {
    fn name(&self) -> &'static str {
        "Rotate 90"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        match image {
            Image::Bitmap(image) => {
                let rotated = rotate_90_grid(image.grid())?;
                image.set_grid(rotated);
            }
            Image::Greyscale(image) => {
                let rotated = rotate_90_grid(image.grid())?;
                image.set_grid(rotated)?;
            }
            Image::Color(image) => {
                let rotated = rotate_90_grid(image.grid())?;
                image.set_grid(rotated)?;
            }
        }
        Ok(())
    }
}

/// Rotate a grid 90 degrees clockwise into a new grid
pub fn rotate_90_grid<T: Copy>(grid: &PixelGrid<T>) -> Result<PixelGrid<T>, GridError> {
    let (width, height) = grid.dimensions();

    let mut out_image = grid.as_slice().to_vec();
    rotate_90(grid.as_slice(), &mut out_image, width, height);

    PixelGrid::from_vec(height, width, out_image)
}

/// Rotate an image 90 degrees clockwise
///
/// The pixel at `(x, y)` in `in_image` ends up at `(height-1-y, x)`
/// in `out_image`, whose rows are `height` pixels long.
///
/// # Panics
/// If either buffer isn't `width*height` pixels long
pub fn rotate_90<T: Copy>(in_image: &[T], out_image: &mut [T], width: usize, height: usize) {
    assert_eq!(in_image.len(), width * height);
    assert_eq!(out_image.len(), width * height);

    if width == 0 || height == 0 {
        return;
    }
    // The lower pixel becomes the top most pixel
    //
    // Each output row is an input column read from bottom to top
    for (x, out_row) in out_image.chunks_exact_mut(height).enumerate() {
        for (out_pixel, in_row) in out_row.iter_mut().zip(in_image.chunks_exact(width).rev()) {
            *out_pixel = in_row[x];
        }
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use pnm_core::grid::PixelGrid;

    use crate::rotate::{rotate_90, rotate_90_grid};

    #[test]
    fn rotate_square() {
        let input = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut output = [0; 9];

        rotate_90(&input, &mut output, 3, 3);

        assert_eq!(output, [7, 4, 1, 8, 5, 2, 9, 6, 3]);
    }

    #[test]
    fn rotate_swaps_dimensions() {
        // 3 wide, 2 tall
        let grid = PixelGrid::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let rotated = rotate_90_grid(&grid).unwrap();

        assert_eq!(rotated.dimensions(), (2, 3));
        assert_eq!(rotated.as_slice(), &[4, 1, 5, 2, 6, 3]);

        // (x, y) moves to (height-1-y, x)
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(grid.get(x, y).unwrap(), rotated.get(2 - 1 - y, x).unwrap());
            }
        }
    }

    #[test]
    fn four_rotations_restore_image() {
        let mut pixels = vec![0_u8; 13 * 5];
        nanorand::WyRand::new().fill(&mut pixels);

        let original = PixelGrid::from_vec(13, 5, pixels).unwrap();
        let mut grid = original.clone();

        for _ in 0..4 {
            grid = rotate_90_grid(&grid).unwrap();
        }
        assert_eq!(grid, original);
    }
}
