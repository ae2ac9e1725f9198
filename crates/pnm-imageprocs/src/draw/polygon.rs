/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Triangles and polygons
use pnm_core::grid::PixelGrid;
use pnm_core::pixel::Point;

use crate::draw::line::{line, span};

/// How triangles are filled
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum TriangleFill {
    /// Draw lines from the third vertex to a point walking from the
    /// first vertex to the second one, one unit per axis per step.
    ///
    /// Thin triangles may be left with gaps. The work grows with the
    /// distance from the first to the second vertex.
    #[default]
    Sweep,
    /// Exact scanline fill, see [`filled_polygon`]
    Scanline
}

/// Whether the bounding box of `points` lies outside the grid
fn misses_grid<T: Copy>(grid: &PixelGrid<T>, points: &[Point]) -> bool {
    let (width, height) = grid.dimensions();
    let (width, height) = (width as i64, height as i64);

    points.iter().all(|p| p.x < 0)
        || points.iter().all(|p| p.y < 0)
        || points.iter().all(|p| p.x >= width)
        || points.iter().all(|p| p.y >= height)
}

/// Draw the outline of the triangle `a`, `b`, `c`
pub fn triangle<T: Copy>(grid: &mut PixelGrid<T>, a: Point, b: Point, c: Point, color: T) {
    line(grid, a, b, color);
    line(grid, b, c, color);
    line(grid, c, a, color);
}

/// Draw a filled triangle
pub fn filled_triangle<T: Copy>(
    grid: &mut PixelGrid<T>, a: Point, b: Point, c: Point, color: T, method: TriangleFill
) {
    match method {
        TriangleFill::Sweep => {
            if misses_grid(grid, &[a, b, c]) {
                return;
            }
            let mut current = a;

            while current != b {
                line(grid, c, current, color);

                current.x += b.x.cmp(&current.x) as i64;
                current.y += b.y.cmp(&current.y) as i64;
            }
            line(grid, c, current, color);
        }
        TriangleFill::Scanline => filled_polygon(grid, &[a, b, c], color)
    }
}

/// Draw a closed polygon outline
///
/// Consecutive points are joined and the last point is joined
/// back to the first one. No points draws nothing.
pub fn polygon<T: Copy>(grid: &mut PixelGrid<T>, points: &[Point], color: T) {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return;
    };
    for pair in points.windows(2) {
        line(grid, pair[0], pair[1], color);
    }
    line(grid, *last, *first, color);
}

/// Draw a filled polygon
///
/// Uses the even-odd rule, each row is sampled at integer
/// coordinates and the outline is drawn on top so the filled
/// shape covers everything [`polygon`] draws.
pub fn filled_polygon<T: Copy>(grid: &mut PixelGrid<T>, points: &[Point], color: T) {
    if points.is_empty() {
        return;
    }
    let (_, height) = grid.dimensions();

    let min_y = points.iter().map(|p| p.y).min().unwrap_or(0).max(0);
    let max_y = points
        .iter()
        .map(|p| p.y)
        .max()
        .unwrap_or(0)
        .min(height as i64 - 1);

    let mut crossings: Vec<f64> = Vec::with_capacity(points.len());

    for y in min_y..=max_y {
        crossings.clear();

        for (i, p) in points.iter().enumerate() {
            let q = points[(i + 1) % points.len()];

            // half open, a vertex shared by two edges is only counted once
            if (p.y <= y) != (q.y <= y) {
                let rise = (i128::from(y) - i128::from(p.y)) as f64;
                let run = (i128::from(q.x) - i128::from(p.x)) as f64;
                let fall = (i128::from(q.y) - i128::from(p.y)) as f64;

                crossings.push(p.x as f64 + rise * run / fall);
            }
        }
        crossings.sort_by(f64::total_cmp);

        for pair in crossings.chunks_exact(2) {
            let start = pair[0].ceil() as i64;
            let end = pair[1].floor() as i64;

            if start <= end {
                span(grid, start, end, y, color);
            }
        }
    }
    polygon(grid, points, color);
}
