/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Lines and rectangles
use pnm_core::grid::PixelGrid;
use pnm_core::pixel::Point;

/// Whether a segment lies completely on one outer side of the grid
fn outside<T: Copy>(grid: &PixelGrid<T>, from: Point, to: Point) -> bool {
    let (width, height) = grid.dimensions();
    let (width, height) = (width as i64, height as i64);

    (from.x < 0 && to.x < 0)
        || (from.y < 0 && to.y < 0)
        || (from.x >= width && to.x >= width)
        || (from.y >= height && to.y >= height)
}

/// Range of steps `k` in `0..=len` for which `start + sign * k` lies
/// in `0..size`
fn visible_steps(start: i64, sign: i64, len: u64, size: usize) -> Option<(u64, u64)> {
    let start = i128::from(start);
    let last = size as i128 - 1;

    let (lo, hi) = match sign {
        1 => (-start, last - start),
        -1 => (start - last, start),
        _ => (0, 0)
    };
    let lo = lo.max(0);
    let hi = hi.min(i128::from(len));

    (lo <= hi).then_some((lo as u64, hi as u64))
}

/// Steps taken along the shorter axis after `k` steps along the longer one
///
/// This is `floor((2 * k * minor + major - 1) / (2 * major))`, the
/// position Bresenham's error term reaches after `k` steps.
fn minor_steps(k: u64, major: u64, minor: u64) -> u64 {
    if major == 0 {
        return 0;
    }
    let (k, major, minor) = (u128::from(k), u128::from(major), u128::from(minor));
    // k * minor fits, doubling it may not
    let product = k * minor;
    let (quotient, remainder) = (product / major, product % major);

    (quotient + (2 * remainder + major - 1) / (2 * major)) as u64
}

/// Draw a line from `from` to `to`, both ends included
///
/// Uses Bresenham's algorithm, the line is a single 8-connected
/// path. Pixels outside the grid are skipped, only the steps that
/// land on the grid are visited.
pub fn line<T: Copy>(grid: &mut PixelGrid<T>, from: Point, to: Point, color: T) {
    if outside(grid, from, to) {
        return;
    }
    let (width, height) = grid.dimensions();

    let dx = from.x.abs_diff(to.x);
    let dy = from.y.abs_diff(to.y);
    let sx = to.x.cmp(&from.x) as i64;
    let sy = to.y.cmp(&from.y) as i64;

    let x_major = dx >= dy;

    let (major_start, major_sign, major, size) = if x_major {
        (from.x, sx, dx, width)
    } else {
        (from.y, sy, dy, height)
    };
    let (minor_start, minor_sign, minor) = if x_major {
        (from.y, sy, dy)
    } else {
        (from.x, sx, dx)
    };

    let Some((first, last)) = visible_steps(major_start, major_sign, major, size) else {
        return;
    };

    for k in first..=last {
        let along = i128::from(major_start) + i128::from(major_sign) * i128::from(k);
        let across = i128::from(minor_start)
            + i128::from(minor_sign) * i128::from(minor_steps(k, major, minor));

        // both stay between the end points
        let (x, y) = if x_major { (along, across) } else { (across, along) };

        grid.put_clipped(x as i64, y as i64, color);
    }
}

/// Fill row `y` from `x0` to `x1`, both ends included
pub(crate) fn span<T: Copy>(grid: &mut PixelGrid<T>, x0: i64, x1: i64, y: i64, color: T) {
    let (width, height) = grid.dimensions();

    if y < 0 || y >= height as i64 {
        return;
    }
    let start = x0.min(x1).max(0);
    let end = x0.max(x1).min(width as i64 - 1);

    for x in start..=end {
        grid.put_clipped(x, y, color);
    }
}

/// Draw the outline of a rectangle
///
/// The corners are `origin`, `origin + (width, 0)`, `origin + (0, height)`
/// and `origin + (width, height)`, so the outline covers `width+1`
/// columns and `height+1` rows. Corners past the `i64` range saturate.
pub fn rectangle<T: Copy>(
    grid: &mut PixelGrid<T>, origin: Point, width: i64, height: i64, color: T
) {
    let right = origin.x.saturating_add(width);
    let bottom = origin.y.saturating_add(height);

    let top_right = Point::new(right, origin.y);
    let bottom_left = Point::new(origin.x, bottom);
    let bottom_right = Point::new(right, bottom);

    line(grid, origin, top_right, color);
    line(grid, top_right, bottom_right, color);
    line(grid, bottom_right, bottom_left, color);
    line(grid, bottom_left, origin, color);
}

/// Draw a filled rectangle
///
/// Fills exactly the area enclosed by [`rectangle`] with the same
/// arguments, outline included.
pub fn filled_rectangle<T: Copy>(
    grid: &mut PixelGrid<T>, origin: Point, width: i64, height: i64, color: T
) {
    let (_, grid_height) = grid.dimensions();

    let right = origin.x.saturating_add(width);
    let bottom = origin.y.saturating_add(height);

    let top = origin.y.min(bottom).max(0);
    let bottom = origin.y.max(bottom).min(grid_height as i64 - 1);

    for y in top..=bottom {
        span(grid, origin.x, right, y, color);
    }
}
