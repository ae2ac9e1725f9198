/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Circles
use pnm_core::grid::PixelGrid;
use pnm_core::pixel::Point;

use crate::draw::line::span;

/// Radius factor used by [`CircleMethod::Ring`]
const RING_SCALE: f64 = 0.85;
/// Accepted distance from the scaled radius for [`CircleMethod::Ring`]
const RING_TOLERANCE: f64 = 0.5;

/// How circles are rasterized
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum CircleMethod {
    /// Plot pixels whose distance from the center is within `0.5`
    /// of `0.85 * radius`.
    ///
    /// The circle drawn is smaller than `radius`.
    /// Filled circles are drawn as concentric rings from `radius` down to zero.
    /// Rings larger than [`MAX_RING_RADIUS`] draw nothing.
    #[default]
    Ring,
    /// Exact midpoint circle of the requested radius,
    /// filled circles are drawn as horizontal spans.
    Midpoint
}

/// Largest radius drawn by [`CircleMethod::Ring`], distances past it are not
/// exact in `f64`
pub const MAX_RING_RADIUS: i64 = 1 << 52;

/// Draw the outline of a circle
///
/// A negative radius draws nothing
pub fn circle<T: Copy>(
    grid: &mut PixelGrid<T>, center: Point, radius: i64, color: T, method: CircleMethod
) {
    if radius < 0 {
        return;
    }
    match method {
        CircleMethod::Ring => ring(grid, center, radius, color),
        CircleMethod::Midpoint => midpoint(grid, center, radius, color)
    }
}

/// Draw a filled circle
pub fn filled_circle<T: Copy>(
    grid: &mut PixelGrid<T>, center: Point, radius: i64, color: T, method: CircleMethod
) {
    if radius < 0 {
        return;
    }
    match method {
        CircleMethod::Ring => {
            let Some((smallest, largest)) = visible_rings(grid, center) else {
                return;
            };
            for r in (smallest..=largest.min(radius)).rev() {
                ring(grid, center, r, color);
            }
        }
        CircleMethod::Midpoint => filled_midpoint(grid, center, radius, color)
    }
}

/// Offset of `center` from the closest and furthest pixel of `0..size`
fn axis_offsets(center: i64, size: usize) -> (f64, f64) {
    let center = i128::from(center);
    let last = size as i128 - 1;

    let nearest = (center.clamp(0, last) - center).abs();
    let furthest = center.abs().max((center - last).abs());

    (nearest as f64, furthest as f64)
}

/// Radii whose ring may touch the grid
fn visible_rings<T: Copy>(grid: &PixelGrid<T>, center: Point) -> Option<(i64, i64)> {
    let (width, height) = grid.dimensions();

    if width == 0 || height == 0 {
        return None;
    }
    let (near_x, far_x) = axis_offsets(center.x, width);
    let (near_y, far_y) = axis_offsets(center.y, height);

    let nearest = near_x.hypot(near_y);
    let furthest = far_x.hypot(far_y);

    // a ring of radius r touches distances within RING_TOLERANCE of r * RING_SCALE,
    // one extra radius on each side absorbs rounding
    let smallest = ((nearest - RING_TOLERANCE) / RING_SCALE).floor() as i64 - 1;
    let largest = (((furthest + RING_TOLERANCE) / RING_SCALE).ceil() as i64).saturating_add(1);

    Some((smallest.max(0), largest))
}

fn ring<T: Copy>(grid: &mut PixelGrid<T>, center: Point, radius: i64, color: T) {
    if radius > MAX_RING_RADIUS {
        return;
    }
    let (width, height) = grid.dimensions();
    let target = radius as f64 * RING_SCALE;

    let (cx, cy) = (i128::from(center.x), i128::from(center.y));
    let reach = i128::from(radius) + 1;

    // every plotted pixel is closer than radius + 1 to the center
    let start_x = (cx - reach).max(0);
    let end_x = (cx + reach).min(width as i128 - 1);
    let start_y = (cy - reach).max(0);
    let end_y = (cy + reach).min(height as i128 - 1);

    for y in start_y..=end_y {
        for x in start_x..=end_x {
            let dx = (x - cx) as f64;
            let dy = (y - cy) as f64;
            let distance = (dx * dx + dy * dy).sqrt();

            if (distance - target).abs() < RING_TOLERANCE {
                grid.put_clipped(x as i64, y as i64, color);
            }
        }
    }
}

/// Integer square root
fn isqrt(value: u128) -> u128 {
    if value < 2 {
        return value;
    }
    let estimate = ((value as f64).sqrt() as u128).max(1);
    // one step from any estimate lands at or above the root,
    // the following ones decrease onto it
    let mut root = (estimate + value / estimate) / 2;

    loop {
        let next = (root + value / root) / 2;

        if next >= root {
            return root;
        }
        root = next;
    }
}

/// Column offset of the midpoint circle at row offset `y`
///
/// The smallest `x` with `x * (x + 1) >= radius^2 - y^2`, that is the
/// pixel whose right neighbour's midpoint lies outside the circle.
fn midpoint_x(radius: u128, y: u128) -> u128 {
    let value = radius * radius - y * y;
    let root = isqrt(value);

    if root * (root + 1) >= value {
        root
    } else {
        root + 1
    }
}

/// Plot at a position that may be outside the `i64` range
fn plot<T: Copy>(grid: &mut PixelGrid<T>, x: i128, y: i128, color: T) {
    if let (Ok(x), Ok(y)) = (i64::try_from(x), i64::try_from(y)) {
        grid.put_clipped(x, y, color);
    }
}

/// Clamp to `i64`, positions past it are off the grid either way
fn saturate(value: i128) -> i64 {
    value.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

fn midpoint<T: Copy>(grid: &mut PixelGrid<T>, center: Point, radius: i64, color: T) {
    let (width, height) = grid.dimensions();
    let (cx, cy) = (i128::from(center.x), i128::from(center.y));
    let r: u128 = radius.unsigned_abs().into();

    // one octant is walked with y from zero while y <= x, a pixel can only
    // land on the grid when y is the offset of one of its rows or columns
    let rows = (0..height as i128).map(|row| row - cy);
    let columns = (0..width as i128).map(|column| column - cx);

    for offset in rows.chain(columns) {
        let y = offset.unsigned_abs();

        if y > r {
            continue;
        }
        let x = midpoint_x(r, y);

        if x < y {
            continue;
        }
        let (x, y) = (x as i128, y as i128);

        for (px, py) in [
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y)
        ] {
            plot(grid, cx + px, cy + py, color);
        }
    }
}

fn filled_midpoint<T: Copy>(grid: &mut PixelGrid<T>, center: Point, radius: i64, color: T) {
    let (_, height) = grid.dimensions();
    let (cx, cy) = (i128::from(center.x), i128::from(center.y));
    let r: u128 = radius.unsigned_abs().into();

    for row in 0..height as i64 {
        let d = (i128::from(row) - cy).unsigned_abs();

        if d > r {
            continue;
        }
        let x = midpoint_x(r, d);

        let half_width = if x >= d {
            // the row is walked directly
            x
        } else {
            // the row is reached through a column offset of d, spanning up
            // to the last octant row whose column offset is still d
            let last = isqrt(r * r - d * d + d - 1);

            if midpoint_x(r, last) != d {
                continue;
            }
            last
        };
        let half_width = half_width as i128;

        span(grid, saturate(cx - half_width), saturate(cx + half_width), row, color);
    }
}

#[cfg(test)]
mod tests {
    use pnm_core::grid::PixelGrid;
    use pnm_core::pixel::Point;

    use crate::draw::circle::{circle, filled_circle, isqrt, midpoint_x, CircleMethod};

    fn count(grid: &PixelGrid<bool>) -> usize {
        grid.as_slice().iter().filter(|x| **x).count()
    }

    #[test]
    fn ring_of_radius_zero_is_the_center() {
        let mut grid = PixelGrid::new(5, 5, false);
        circle(&mut grid, Point::new(2, 2), 0, true, CircleMethod::Ring);

        assert_eq!(count(&grid), 1);
        assert!(grid.get(2, 2).unwrap());
    }

    #[test]
    fn ring_is_scaled() {
        let mut grid = PixelGrid::new(21, 21, false);
        circle(&mut grid, Point::new(10, 10), 10, true, CircleMethod::Ring);

        // 0.85 * 10 = 8.5, pixels 8 or 9 away along an axis are exactly 0.5 off
        assert!(!grid.get(10, 2).unwrap());
        assert!(!grid.get(20, 10).unwrap());
        assert!(!grid.get(10, 10).unwrap());
        assert!(!grid.get(19, 10).unwrap());
        // 8.06 away
        assert!(grid.get(18, 11).unwrap());
    }

    #[test]
    fn midpoint_hits_the_axes() {
        let mut grid = PixelGrid::new(21, 21, false);
        circle(&mut grid, Point::new(10, 10), 7, true, CircleMethod::Midpoint);

        assert!(grid.get(17, 10).unwrap());
        assert!(grid.get(3, 10).unwrap());
        assert!(grid.get(10, 17).unwrap());
        assert!(grid.get(10, 3).unwrap());
        assert!(!grid.get(10, 10).unwrap());
    }

    #[test]
    fn filled_midpoint_covers_outline() {
        let mut outline = PixelGrid::new(30, 30, false);
        let mut filled = PixelGrid::new(30, 30, false);

        circle(&mut outline, Point::new(15, 15), 9, true, CircleMethod::Midpoint);
        filled_circle(&mut filled, Point::new(15, 15), 9, true, CircleMethod::Midpoint);

        for (o, f) in outline.as_slice().iter().zip(filled.as_slice()) {
            assert!(!o || *f);
        }
        assert!(filled.get(15, 15).unwrap());
        assert!(count(&filled) > count(&outline));
    }

    #[test]
    fn filled_ring_includes_center() {
        let mut grid = PixelGrid::new(11, 11, false);
        filled_circle(&mut grid, Point::new(5, 5), 4, true, CircleMethod::Ring);

        assert!(grid.get(5, 5).unwrap());
        assert!(grid.get(5, 2).unwrap());
    }

    #[test]
    fn circle_outside_is_clipped() {
        let mut grid = PixelGrid::new(5, 5, false);

        circle(&mut grid, Point::new(-50, -50), 10, true, CircleMethod::Ring);
        filled_circle(&mut grid, Point::new(100, 2), 20, true, CircleMethod::Midpoint);
        circle(&mut grid, Point::new(2, 2), -3, true, CircleMethod::Midpoint);

        assert_eq!(count(&grid), 0);
    }

    #[test]
    fn integer_square_root() {
        for value in 0..2000_u128 {
            let root = isqrt(value);
            assert!(root * root <= value && (root + 1) * (root + 1) > value, "{value}");
        }
        let big = u128::from(u64::MAX);
        assert_eq!(isqrt(big * big), big);
        assert_eq!(isqrt(big * big - 1), big - 1);
    }

    #[test]
    fn midpoint_offsets_follow_the_walk() {
        // the incremental midpoint walk for radius 10
        let radius = 10_i64;
        let (mut x, mut y, mut err) = (radius, 0_i64, 1 - radius);

        while x >= y {
            assert_eq!(midpoint_x(radius as u128, y as u128), x as u128, "y = {y}");
            y += 1;

            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    #[test]
    fn huge_radius_does_not_overflow() {
        let mut grid = PixelGrid::new(6, 6, false);

        circle(&mut grid, Point::new(0, 0), i64::MAX, true, CircleMethod::Ring);
        circle(&mut grid, Point::new(0, 0), i64::MAX, true, CircleMethod::Midpoint);
        circle(&mut grid, Point::new(i64::MIN, i64::MAX), i64::MAX, true, CircleMethod::Ring);
        filled_circle(&mut grid, Point::new(i64::MAX, 3), 7, true, CircleMethod::Ring);
        assert_eq!(count(&grid), 0);

        filled_circle(&mut grid, Point::new(2, 2), i64::MAX, true, CircleMethod::Midpoint);
        assert_eq!(count(&grid), 36);

        let mut grid = PixelGrid::new(6, 6, false);
        filled_circle(&mut grid, Point::new(2, 2), i64::MAX, true, CircleMethod::Ring);
        assert_eq!(count(&grid), 36);
    }

    #[test]
    fn large_midpoint_arc_through_grid() {
        // the bottom of the circle passes through row 2
        let radius = (1_i64 << 40) + 2;
        let mut grid = PixelGrid::new(6, 6, false);
        circle(&mut grid, Point::new(0, -(1 << 40)), radius, true, CircleMethod::Midpoint);

        for y in 0..6 {
            let row = grid.row(y).unwrap();
            assert_eq!(row, &[y == 2; 6], "row {y}");
        }
    }
}
