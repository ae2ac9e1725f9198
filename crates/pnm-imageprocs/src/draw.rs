/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Draw shapes onto images
//!
//! The free functions work on any [`PixelGrid`], coordinates are signed
//! and anything falling outside the grid is silently dropped.
//!
//! [`Draw`] wraps a [`Shape`] and a color into an operation that can
//! run on an [`Image`].
use pnm_core::grid::PixelGrid;
use pnm_core::pixel::{PixelValue, Point};
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

pub use crate::draw::circle::{circle, filled_circle, CircleMethod, MAX_RING_RADIUS};
pub use crate::draw::line::{filled_rectangle, line, rectangle};
pub use crate::draw::polygon::{filled_polygon, filled_triangle, polygon, triangle, TriangleFill};

mod circle;
mod line;
mod polygon;

/// A shape that can be drawn
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Line {
        from: Point,
        to:   Point
    },
    Rectangle {
        origin: Point,
        width:  i64,
        height: i64,
        filled: bool
    },
    Circle {
        center: Point,
        radius: i64,
        filled: bool,
        method: CircleMethod
    },
    /// A triangle, `fill` is `None` for an outline
    Triangle {
        vertices: [Point; 3],
        fill:     Option<TriangleFill>
    },
    Polygon {
        points: Vec<Point>,
        filled: bool
    }
}

impl Shape {
    /// Rasterize this shape onto `grid`
    pub fn draw<T: Copy>(&self, grid: &mut PixelGrid<T>, color: T) {
        match self {
            Shape::Line { from, to } => line(grid, *from, *to, color),
            Shape::Rectangle {
                origin,
                width,
                height,
                filled
            } => {
                if *filled {
                    filled_rectangle(grid, *origin, *width, *height, color);
                } else {
                    rectangle(grid, *origin, *width, *height, color);
                }
            }
            Shape::Circle {
                center,
                radius,
                filled,
                method
            } => {
                if *filled {
                    filled_circle(grid, *center, *radius, color, *method);
                } else {
                    circle(grid, *center, *radius, color, *method);
                }
            }
            Shape::Triangle { vertices, fill } => {
                let [a, b, c] = *vertices;

                match fill {
                    Some(method) => filled_triangle(grid, a, b, c, color, *method),
                    None => triangle(grid, a, b, c, color)
                }
            }
            Shape::Polygon { points, filled } => {
                if *filled {
                    filled_polygon(grid, points, color);
                } else {
                    polygon(grid, points, color);
                }
            }
        }
    }
}

/// Draw a shape onto an image
///
/// The color must be of the image's pixel model and
/// not exceed its maximum value.
#[derive(Clone, Debug)]
pub struct Draw {
    shape: Shape,
    color: PixelValue
}

impl Draw {
    /// Create a new draw operation
    ///
    /// # Arguments
    /// - shape: The shape to draw
    /// - color: Value written to every pixel the shape covers
    #[must_use]
    pub fn new(shape: Shape, color: PixelValue) -> Draw {
        Draw { shape, color }
    }
}

impl OperationsTrait for Draw {
    fn name(&self) -> &'static str {
        "Draw"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        image.check_value(self.color)?;

        match (image, self.color) {
            (Image::Bitmap(image), PixelValue::Bit(color)) => {
                self.shape.draw(image.grid_mut(), color);
            }
            (Image::Greyscale(image), PixelValue::Grey(color)) => {
                self.shape.draw(image.grid_mut(), color);
            }
            (Image::Color(image), PixelValue::Rgb(color)) => {
                self.shape.draw(image.grid_mut(), color);
            }
            (image, color) => return Err(ImageErrors::ModelMismatch(image.model(), color.model()))
        }
        Ok(())
    }
}
