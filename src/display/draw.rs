//! Drawing primitives over a [`PixelView`]
//!
//! Everything here writes through [`PixelView::set`], so off-view pixels are
//! dropped one at a time instead of being clipped up front.

use super::pixel_buffer::PixelView;
use crate::color::offset_color;

/// Draw a line using Bresenham's algorithm, both endpoints included.
///
/// Every point on the 8-connected path is attempted, including the ones that
/// fall outside the view.
pub fn line(view: &PixelView<'_>, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    // i64 keeps 2 * err from overflowing on extreme coordinates
    let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        view.set(x as i32, y as i32, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > dy {
            err += dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

/// Fill the rectangle `[x, x + w) x [y, y + h)`; non-positive sizes draw nothing
pub fn fill(view: &PixelView<'_>, x: i32, y: i32, w: i32, h: i32, color: u32) {
    for row in 0..h {
        for col in 0..w {
            view.set(x.saturating_add(col), y.saturating_add(row), color);
        }
    }
}

/// Add `delta` to the red, green and blue channel of every pixel, clamping
/// each channel to 0..=255
pub fn add(view: &PixelView<'_>, delta: i32) {
    let (w, h) = (view.width() as i32, view.height() as i32);
    for y in 0..h {
        for x in 0..w {
            view.set(x, y, offset_color(view.get(x, y), delta));
        }
    }
}
