//! Host-facing entry points
//!
//! These keep the parameter order and the 1-based coordinates that scripts
//! calling into the engine already use. Each call wraps the handles it is
//! given as packed `width` x `height` views, shifts coordinates to 0-based
//! and hands off to [`crate::display`]. Wrapping is the only thing that can
//! fail; everything off-buffer is silently clipped.

use log::trace;

use crate::color::pack_color;
use crate::display::{self, Pixbuf};
use crate::error::Result;

#[inline]
fn zero_based(coord: i32) -> i32 {
    coord.saturating_sub(1)
}

/// Set pixel (x, y) to (r, g, b)
pub fn set(
    buffer: &Pixbuf<'_>,
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    r: i32,
    g: i32,
    b: i32,
) -> Result<()> {
    trace!("set {}x{} at ({}, {})", width, height, x, y);
    let view = buffer.view(width, height)?;
    view.set(zero_based(x), zero_based(y), pack_color(r, g, b));
    Ok(())
}

/// Read pixel (x, y) as a packed color, 0 when off-buffer
pub fn get(buffer: &Pixbuf<'_>, width: u32, height: u32, x: i32, y: i32) -> Result<u32> {
    let view = buffer.view(width, height)?;
    Ok(view.get(zero_based(x), zero_based(y)))
}

/// Draw a line from (x0, y0) to (x1, y1), both ends included
pub fn line(
    buffer: &Pixbuf<'_>,
    width: u32,
    height: u32,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    r: i32,
    g: i32,
    b: i32,
) -> Result<()> {
    trace!("line {}x{} ({}, {}) -> ({}, {})", width, height, x0, y0, x1, y1);
    let view = buffer.view(width, height)?;
    display::line(
        &view,
        zero_based(x0),
        zero_based(y0),
        zero_based(x1),
        zero_based(y1),
        pack_color(r, g, b),
    );
    Ok(())
}

/// Add `delta` to every channel of every pixel
pub fn add(buffer: &Pixbuf<'_>, width: u32, height: u32, delta: i32) -> Result<()> {
    trace!("add {}x{} delta {}", width, height, delta);
    let view = buffer.view(width, height)?;
    display::add(&view, delta);
    Ok(())
}

/// Fill the `w` x `h` rectangle whose top-left pixel is (x, y)
pub fn fill(
    buffer: &Pixbuf<'_>,
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    r: i32,
    g: i32,
    b: i32,
) -> Result<()> {
    trace!("fill {}x{} ({}, {}) {}x{}", width, height, x, y, w, h);
    let view = buffer.view(width, height)?;
    display::fill(&view, zero_based(x), zero_based(y), w, h, pack_color(r, g, b));
    Ok(())
}

/// Copy the `w` x `h` region at (x, y) of `src` to (dx, dy) of `dst`.
/// `src` and `dst` may be the same buffer.
pub fn blit(
    src: &Pixbuf<'_>,
    src_w: u32,
    src_h: u32,
    dst: &Pixbuf<'_>,
    dst_w: u32,
    dst_h: u32,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    dx: i32,
    dy: i32,
) -> Result<()> {
    trace!("blit ({}, {}) {}x{} -> ({}, {})", x, y, w, h, dx, dy);
    let src_view = src.view(src_w, src_h)?;
    let dst_view = dst.view(dst_w, dst_h)?;
    display::blit(
        &src_view,
        &dst_view,
        zero_based(x),
        zero_based(y),
        w,
        h,
        zero_based(dx),
        zero_based(dy),
    );
    Ok(())
}

/// Paint (r, g, b) into `dst` wherever the mask region is non-zero
pub fn blit_color(
    mask: &Pixbuf<'_>,
    mask_w: u32,
    mask_h: u32,
    dst: &Pixbuf<'_>,
    dst_w: u32,
    dst_h: u32,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    dx: i32,
    dy: i32,
    r: i32,
    g: i32,
    b: i32,
) -> Result<()> {
    trace!("blit_color ({}, {}) {}x{} -> ({}, {})", x, y, w, h, dx, dy);
    let mask_view = mask.view(mask_w, mask_h)?;
    let dst_view = dst.view(dst_w, dst_h)?;
    display::blit_color(
        &mask_view,
        &dst_view,
        zero_based(x),
        zero_based(y),
        w,
        h,
        zero_based(dx),
        zero_based(dy),
        pack_color(r, g, b),
    );
    Ok(())
}

/// Copy source pixels into `dst` wherever `mask` is non-zero; `mask` must
/// have the same size as `src`
pub fn blit_mask(
    src: &Pixbuf<'_>,
    src_w: u32,
    src_h: u32,
    dst: &Pixbuf<'_>,
    dst_w: u32,
    dst_h: u32,
    mask: &Pixbuf<'_>,
    mask_w: u32,
    mask_h: u32,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    dx: i32,
    dy: i32,
) -> Result<()> {
    trace!("blit_mask ({}, {}) {}x{} -> ({}, {})", x, y, w, h, dx, dy);
    let src_view = src.view(src_w, src_h)?;
    let dst_view = dst.view(dst_w, dst_h)?;
    let mask_view = mask.view(mask_w, mask_h)?;
    display::blit_mask(
        &src_view,
        &dst_view,
        &mask_view,
        zero_based(x),
        zero_based(y),
        w,
        h,
        zero_based(dx),
        zero_based(dy),
    );
    Ok(())
}
