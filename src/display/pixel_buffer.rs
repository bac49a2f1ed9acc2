use std::cell::Cell;
use std::fmt;
use std::ops::Range;

use crate::error::{PixmodError, Result};
use crate::geometry::Rect;

// ============================================================================
// Pixel Width
// ============================================================================

/// Bytes occupied by one pixel in the backing storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PixelWidth {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl PixelWidth {
    #[inline]
    pub const fn bytes(self) -> usize {
        self as usize
    }

    /// Bits of a packed color that survive a write at this width
    #[inline]
    pub const fn color_mask(self) -> u32 {
        match self {
            Self::One => 0xFF,
            Self::Two => 0xFFFF,
            Self::Three => 0xFF_FFFF,
            Self::Four => 0xFFFF_FFFF,
        }
    }
}

impl TryFrom<u8> for PixelWidth {
    type Error = PixmodError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(PixmodError::UnsupportedPixelWidth(other)),
        }
    }
}

impl From<PixelWidth> for u8 {
    fn from(width: PixelWidth) -> Self {
        width as u8
    }
}

// ============================================================================
// Pixbuf
// ============================================================================

/// Handle to externally owned pixel storage.
///
/// Takes the exclusive borrow of the bytes once and hands out any number of
/// [`PixelView`]s over them. Views may alias each other (a cut of a view, the
/// source and destination of a self-blit); writes go through `Cell`, so the
/// handle and its views are confined to one thread.
#[derive(Clone, Copy)]
pub struct Pixbuf<'a> {
    cells: &'a [Cell<u8>],
    pixel_width: PixelWidth,
}

impl<'a> Pixbuf<'a> {
    pub fn new(data: &'a mut [u8], pixel_width: PixelWidth) -> Self {
        Self {
            cells: Cell::from_mut(data).as_slice_of_cells(),
            pixel_width,
        }
    }

    #[inline]
    pub fn pixel_width(&self) -> PixelWidth {
        self.pixel_width
    }

    /// Capacity of the backing storage in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of whole pixels the storage can hold
    #[inline]
    pub fn npix(&self) -> usize {
        self.cells.len() / self.pixel_width.bytes()
    }

    /// Describe a `width` x `height` window starting `offset` pixels into the
    /// storage. A `stride` of 0 means rows are packed (`width * pixel_width`).
    ///
    /// Fails if the stride cannot hold a row or if the footprint
    /// `stride * (height - 1) + width * pixel_width` reaches past the storage.
    pub fn wrap(
        &self,
        width: u32,
        height: u32,
        offset: usize,
        stride: usize,
    ) -> Result<PixelView<'a>> {
        let pw = self.pixel_width.bytes();
        let row_bytes = (width as usize)
            .checked_mul(pw)
            .ok_or(PixmodError::InvalidDimensions)?;
        let stride = if stride == 0 { row_bytes } else { stride };
        if height > 1 && stride < row_bytes {
            return Err(PixmodError::StrideTooSmall { stride, row_bytes });
        }

        let origin = offset.checked_mul(pw).ok_or(PixmodError::InvalidDimensions)?;
        let footprint =
            footprint(width, height, stride, pw).ok_or(PixmodError::InvalidDimensions)?;
        let required = origin
            .checked_add(footprint)
            .ok_or(PixmodError::InvalidDimensions)?;
        if required > self.cells.len() {
            return Err(PixmodError::InsufficientCapacity {
                required,
                available: self.cells.len(),
            });
        }

        Ok(PixelView {
            cells: self.cells,
            pixel_width: self.pixel_width,
            width,
            height,
            stride,
            origin,
        })
    }

    /// Packed view starting at the first byte of the storage
    pub fn view(&self, width: u32, height: u32) -> Result<PixelView<'a>> {
        self.wrap(width, height, 0, 0)
    }
}

impl fmt::Debug for Pixbuf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pixbuf")
            .field("len", &self.cells.len())
            .field("pixel_width", &self.pixel_width)
            .finish()
    }
}

fn footprint(width: u32, height: u32, stride: usize, pw: usize) -> Option<usize> {
    if width == 0 || height == 0 {
        return Some(0);
    }
    let last_row = stride.checked_mul(height as usize - 1)?;
    last_row.checked_add(width as usize * pw)
}

// ============================================================================
// PixelView
// ============================================================================

/// Rectangular window over [`Pixbuf`] storage.
///
/// The view never owns pixels: it records where pixel (0, 0) lives (`origin`,
/// a byte index), how far apart rows are (`stride`), and its logical size.
/// Construction through [`Pixbuf::wrap`] or [`PixelView::cut`] guarantees the
/// whole footprint lies inside the storage, so addressing never goes out of
/// bounds.
#[derive(Clone, Copy)]
pub struct PixelView<'a> {
    cells: &'a [Cell<u8>],
    pixel_width: PixelWidth,
    width: u32,
    height: u32,
    stride: usize,
    origin: usize,
}

impl<'a> PixelView<'a> {
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes between the starts of consecutive rows
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn pixel_width(&self) -> PixelWidth {
        self.pixel_width
    }

    /// Byte index of pixel (0, 0) inside the backing storage
    #[inline]
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// The view's own extent as a rectangle at (0, 0)
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::bounds(self.width, self.height)
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height
    }

    /// Calculate byte index of pixel (x, y); caller has checked bounds
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        self.origin + y as usize * self.stride + x as usize * self.pixel_width.bytes()
    }

    #[inline]
    fn pixel_cells(&self, x: u32, y: u32) -> &'a [Cell<u8>] {
        let idx = self.pixel_index(x, y);
        &self.cells[idx..idx + self.pixel_width.bytes()]
    }

    /// Read the packed color at (x, y), little-endian over `pixel_width` bytes.
    /// Out-of-bounds reads return 0.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> u32 {
        if !self.in_bounds(x, y) {
            return 0;
        }
        let mut bytes = [0u8; 4];
        for (byte, cell) in bytes.iter_mut().zip(self.pixel_cells(x as u32, y as u32)) {
            *byte = cell.get();
        }
        u32::from_le_bytes(bytes)
    }

    /// Write `color` at (x, y), keeping only the low `pixel_width` bytes.
    /// Out-of-bounds writes are dropped.
    #[inline]
    pub fn set(&self, x: i32, y: i32, color: u32) {
        if !self.in_bounds(x, y) {
            return;
        }
        for (cell, byte) in self
            .pixel_cells(x as u32, y as u32)
            .iter()
            .zip(color.to_le_bytes())
        {
            cell.set(byte);
        }
    }

    /// Sub-view of `w` x `h` pixels at (x, y), sharing this view's storage
    /// and stride.
    ///
    /// # Panics
    /// Panics if the rectangle is empty or not fully inside the view; callers
    /// clip first.
    pub fn cut(&self, x: i32, y: i32, w: i32, h: i32) -> PixelView<'a> {
        assert!(
            x >= 0 && y >= 0 && w > 0 && h > 0,
            "cut ({}, {}, {}, {}) must have a non-negative origin and positive size",
            x,
            y,
            w,
            h
        );
        assert!(
            x as u64 + w as u64 <= self.width as u64 && y as u64 + h as u64 <= self.height as u64,
            "cut ({}, {}, {}, {}) exceeds view of {}x{}",
            x,
            y,
            w,
            h,
            self.width,
            self.height
        );
        PixelView {
            cells: self.cells,
            pixel_width: self.pixel_width,
            width: w as u32,
            height: h as u32,
            stride: self.stride,
            origin: self.pixel_index(x as u32, y as u32),
        }
    }

    /// [`cut`](Self::cut) taking a rectangle
    pub fn cut_rect(&self, rect: Rect) -> PixelView<'a> {
        self.cut(rect.x, rect.y, rect.w, rect.h)
    }

    /// Byte indices from pixel (0, 0) through the last byte of the last row
    pub fn byte_range(&self) -> Range<usize> {
        // wrap/cut already proved this fits in the storage
        let len = footprint(self.width, self.height, self.stride, self.pixel_width.bytes())
            .unwrap_or(0);
        self.origin..self.origin + len
    }

    /// True if both views address the same storage
    #[inline]
    pub fn shares_storage(&self, other: &PixelView<'_>) -> bool {
        std::ptr::eq(self.cells, other.cells)
    }

    /// True if the byte ranges of two views over the same storage intersect
    pub fn overlaps(&self, other: &PixelView<'_>) -> bool {
        if !self.shares_storage(other) {
            return false;
        }
        let a = self.byte_range();
        let b = other.byte_range();
        !a.is_empty() && !b.is_empty() && a.start < b.end && b.start < a.end
    }
}

impl fmt::Debug for PixelView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelView")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .field("pixel_width", &self.pixel_width)
            .field("origin", &self.origin)
            .finish()
    }
}
