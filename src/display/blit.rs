//! Region compositing: clipped copies between views
//!
//! All blits share one clipping protocol. The requested source rectangle is
//! clipped against the source bounds and the destination rectangle against
//! the destination bounds; both clips are moved back to offsets from their
//! request origin and intersected, because each side can shrink the region
//! on a different edge. Only that final rectangle is safe to read and write
//! at the same time.

use log::{debug, warn};

use super::pixel_buffer::PixelView;
use crate::geometry::Rect;

/// Result of clipping a blit request: where to read, where to write, how much
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlitRegion {
    /// Top-left of the transferable rectangle in source coordinates
    pub src_x: i32,
    pub src_y: i32,
    /// Top-left of the transferable rectangle in destination coordinates
    pub dst_x: i32,
    pub dst_y: i32,
    pub w: i32,
    pub h: i32,
}

/// Clip a `w` x `h` transfer from (x, y) in `src_bounds` to (dx, dy) in
/// `dst_bounds`. Returns `None` when nothing is left to transfer.
pub fn clip_blit(
    src_bounds: Rect,
    dst_bounds: Rect,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    dx: i32,
    dy: i32,
) -> Option<BlitRegion> {
    let src_clip = Rect::new(x, y, w, h).intersect(&src_bounds);
    let dst_clip = Rect::new(dx, dy, w, h).intersect(&dst_bounds);

    let clip = src_clip
        .translate(x.saturating_neg(), y.saturating_neg())
        .intersect(&dst_clip.translate(dx.saturating_neg(), dy.saturating_neg()));
    if clip.is_empty() {
        return None;
    }

    Some(BlitRegion {
        src_x: x.saturating_add(clip.x),
        src_y: y.saturating_add(clip.y),
        dst_x: dx.saturating_add(clip.x),
        dst_y: dy.saturating_add(clip.y),
        w: clip.w,
        h: clip.h,
    })
}

/// Visit every (x, y) of a `w` x `h` area, bottom-right first when
/// `descending` is set
fn for_each_pixel(w: i32, h: i32, descending: bool, mut f: impl FnMut(i32, i32)) {
    if descending {
        for y in (0..h).rev() {
            for x in (0..w).rev() {
                f(x, y);
            }
        }
    } else {
        for y in 0..h {
            for x in 0..w {
                f(x, y);
            }
        }
    }
}

/// A source that starts before an overlapping destination has to be read
/// back to front, or its tail is overwritten before it is copied.
fn copy_descending(src: &PixelView<'_>, dst: &PixelView<'_>) -> bool {
    src.overlaps(dst) && src.byte_range().start < dst.byte_range().start
}

/// Copy every pixel of `src` into `dst`.
///
/// Both views must have the same size; a mismatch copies nothing. Views over
/// the same storage may overlap, the traversal order is picked so no source
/// pixel is read after it was overwritten.
pub fn copy(src: &PixelView<'_>, dst: &PixelView<'_>) {
    if src.width() != dst.width() || src.height() != dst.height() {
        warn!(
            "copy: size mismatch {}x{} -> {}x{}, skipping",
            src.width(),
            src.height(),
            dst.width(),
            dst.height()
        );
        return;
    }

    let descending = copy_descending(src, dst);
    for_each_pixel(
        dst.width() as i32,
        dst.height() as i32,
        descending,
        |x, y| dst.set(x, y, src.get(x, y)),
    );
}

/// Copy a `w` x `h` region at (x, y) of `src` to (dx, dy) of `dst`
pub fn blit(
    src: &PixelView<'_>,
    dst: &PixelView<'_>,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    dx: i32,
    dy: i32,
) {
    let Some(region) = clip_blit(src.bounds(), dst.bounds(), x, y, w, h, dx, dy) else {
        debug!("blit: ({x}, {y}, {w}, {h}) -> ({dx}, {dy}) clipped away");
        return;
    };
    let src_cut = src.cut(region.src_x, region.src_y, region.w, region.h);
    let dst_cut = dst.cut(region.dst_x, region.dst_y, region.w, region.h);
    copy(&src_cut, &dst_cut);
}

/// Paint `color` into `dst` wherever the mask region at (x, y) is non-zero.
/// Zero mask pixels leave the destination untouched.
pub fn blit_color(
    mask: &PixelView<'_>,
    dst: &PixelView<'_>,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    dx: i32,
    dy: i32,
    color: u32,
) {
    let Some(region) = clip_blit(mask.bounds(), dst.bounds(), x, y, w, h, dx, dy) else {
        debug!("blit_color: ({x}, {y}, {w}, {h}) -> ({dx}, {dy}) clipped away");
        return;
    };
    let mask_cut = mask.cut(region.src_x, region.src_y, region.w, region.h);
    let dst_cut = dst.cut(region.dst_x, region.dst_y, region.w, region.h);

    let descending = copy_descending(&mask_cut, &dst_cut);
    for_each_pixel(region.w, region.h, descending, |px, py| {
        if mask_cut.get(px, py) != 0 {
            dst_cut.set(px, py, color);
        }
    });
}

/// Copy source pixels into `dst` wherever `mask` is non-zero.
///
/// `mask` is addressed with the source's coordinates and must match its size;
/// a mismatch blits nothing. The mask may have any pixel width.
///
/// Either the source or the mask may share storage with `dst`; traversal runs
/// back to front if either of them starts before an overlapping destination.
/// A source and a mask overlapping `dst` from opposite sides have no safe
/// order and give unspecified results.
pub fn blit_mask(
    src: &PixelView<'_>,
    dst: &PixelView<'_>,
    mask: &PixelView<'_>,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    dx: i32,
    dy: i32,
) {
    if mask.width() != src.width() || mask.height() != src.height() {
        warn!(
            "blit_mask: mask {}x{} does not match source {}x{}, skipping",
            mask.width(),
            mask.height(),
            src.width(),
            src.height()
        );
        return;
    }
    let Some(region) = clip_blit(src.bounds(), dst.bounds(), x, y, w, h, dx, dy) else {
        debug!("blit_mask: ({x}, {y}, {w}, {h}) -> ({dx}, {dy}) clipped away");
        return;
    };
    let src_cut = src.cut(region.src_x, region.src_y, region.w, region.h);
    let mask_cut = mask.cut(region.src_x, region.src_y, region.w, region.h);
    let dst_cut = dst.cut(region.dst_x, region.dst_y, region.w, region.h);

    let descending =
        copy_descending(&src_cut, &dst_cut) || copy_descending(&mask_cut, &dst_cut);
    for_each_pixel(region.w, region.h, descending, |px, py| {
        if mask_cut.get(px, py) != 0 {
            dst_cut.set(px, py, src_cut.get(px, py));
        }
    });
}
