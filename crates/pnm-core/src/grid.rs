/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A rectangular, row-major pixel container
//!
//! The grid is stored as one flat buffer of `width * height` pixels,
//! pixel `(x, y)` lives at index `y * width + x`.
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Debug, Display, Formatter};

/// Errors from pixel grid access and construction
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum GridError {
    /// A coordinate fell outside `[0,width) x [0,height)`
    OutOfBounds {
        x:      usize,
        y:      usize,
        width:  usize,
        height: usize
    },
    /// Buffer length does not match `width * height`
    ///
    /// # Arguments
    /// - 1st argument is the expected length
    /// - 2nd argument is the length found
    DimensionMismatch(usize, usize)
}

impl Debug for GridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::OutOfBounds {
                x,
                y,
                width,
                height
            } => {
                writeln!(
                    f,
                    "Coordinate ({x},{y}) is outside of image with dimensions {width}x{height}"
                )
            }
            GridError::DimensionMismatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} pixels but found {found}"
                )
            }
        }
    }
}

impl Display for GridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

/// A `width x height` grid of pixels of type `T`
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct PixelGrid<T> {
    width:  usize,
    height: usize,
    data:   Vec<T>
}

impl<T: Copy> PixelGrid<T> {
    /// Create a grid with every pixel set to `fill`
    pub fn new(width: usize, height: usize, fill: T) -> PixelGrid<T> {
        PixelGrid {
            width,
            height,
            data: vec![fill; width * height]
        }
    }

    /// Wrap an existing row-major buffer
    ///
    /// # Errors
    /// If `data.len()` is not `width * height`
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<PixelGrid<T>, GridError> {
        let expected = width
            .checked_mul(height)
            .ok_or(GridError::DimensionMismatch(usize::MAX, data.len()))?;

        if expected != data.len() {
            return Err(GridError::DimensionMismatch(expected, data.len()));
        }
        Ok(PixelGrid {
            width,
            height,
            data
        })
    }

    /// Get grid dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height
            });
        }
        Ok(y * self.width + x)
    }

    /// Read the pixel at `(x, y)`
    ///
    /// # Errors
    /// If the coordinate is outside the grid
    pub fn get(&self, x: usize, y: usize) -> Result<T, GridError> {
        let index = self.index(x, y)?;
        Ok(self.data[index])
    }

    /// Overwrite the pixel at `(x, y)`
    ///
    /// # Errors
    /// If the coordinate is outside the grid
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<(), GridError> {
        let index = self.index(x, y)?;
        self.data[index] = value;
        Ok(())
    }

    /// Write a pixel at a signed coordinate, silently dropping
    /// writes that fall outside the grid.
    ///
    /// Returns whether the pixel was written
    #[inline]
    pub fn put_clipped(&mut self, x: i64, y: i64, value: T) -> bool {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return false;
        };
        if x >= self.width || y >= self.height {
            return false;
        }
        self.data[y * self.width + x] = value;
        true
    }

    /// Return row `y`, or `None` if the row doesn't exist
    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y >= self.height {
            return None;
        }
        self.data.get(y * self.width..(y + 1) * self.width)
    }

    /// Iterate over rows from top to bottom
    ///
    /// A grid with zero width yields no rows
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.width.max(1))
    }

    /// Iterate mutably over rows from top to bottom
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.data.chunks_exact_mut(self.width.max(1))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the grid returning the row-major buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Build a new grid of the same dimensions by mapping every pixel
    pub fn map<U: Copy, F: Fn(T) -> U>(&self, func: F) -> PixelGrid<U> {
        PixelGrid {
            width:  self.width,
            height: self.height,
            data:   self.data.iter().map(|x| func(*x)).collect()
        }
    }
}

impl<T: Debug> Debug for PixelGrid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixelGrid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("data", &self.data)
            .finish()
    }
}
