//! Integer rectangle math used for clipping

/// Axis-aligned rectangle in pixel coordinates.
///
/// A rectangle with `w <= 0` or `h <= 0` is empty; intersections may
/// produce such rectangles and callers treat them as "nothing to do".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle anchored at the origin, covering a `width` x `height` buffer
    pub fn bounds(width: u32, height: u32) -> Self {
        Self::new(0, 0, saturate(width), saturate(height))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Overlap of two rectangles; may be empty (negative extents included)
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(
            x,
            y,
            narrow(right - i64::from(x)),
            narrow(bottom - i64::from(y)),
        )
    }

    /// Same extent, origin moved by (dx, dy)
    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.w,
            self.h,
        )
    }

    /// Check if a point is inside this rectangle
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        x >= i64::from(self.x) && x < self.right() && y >= i64::from(self.y) && y < self.bottom()
    }

    // Edges are computed in i64 so huge requests near i32::MAX cannot wrap.
    #[inline]
    fn right(&self) -> i64 {
        self.x as i64 + self.w as i64
    }

    #[inline]
    fn bottom(&self) -> i64 {
        self.y as i64 + self.h as i64
    }
}

/// Free-function form of [`Rect::intersect`]
pub fn intersect(r1: &Rect, r2: &Rect) -> Rect {
    r1.intersect(r2)
}

fn saturate(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn narrow(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_overlapping() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 3, 10, 10);
        assert_eq!(a.intersect(&b), Rect::new(5, 3, 5, 7));
        assert_eq!(intersect(&b, &a), Rect::new(5, 3, 5, 7));
    }

    #[test]
    fn test_intersect_contained() {
        let outer = Rect::new(0, 0, 20, 20);
        let inner = Rect::new(4, 6, 3, 2);
        assert_eq!(outer.intersect(&inner), inner);
    }

    #[test]
    fn test_intersect_disjoint_is_empty() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(10, 0, 4, 4);
        let r = a.intersect(&b);
        assert!(r.is_empty());
        assert_eq!(r.w, -6);

        let touching = a.intersect(&Rect::new(4, 0, 4, 4));
        assert_eq!(touching.w, 0);
        assert!(touching.is_empty());
    }

    #[test]
    fn test_empty_rects() {
        assert!(Rect::new(0, 0, 0, 5).is_empty());
        assert!(Rect::new(0, 0, 5, -1).is_empty());
        assert!(!Rect::new(-3, -3, 1, 1).is_empty());
    }

    #[test]
    fn test_translate_and_contains() {
        let r = Rect::new(1, 2, 3, 4).translate(-1, -2);
        assert_eq!(r, Rect::new(0, 0, 3, 4));
        assert!(r.contains(0, 0));
        assert!(r.contains(2, 3));
        assert!(!r.contains(3, 0));
        assert!(!r.contains(0, 4));
        assert!(!r.contains(-1, 0));
    }

    #[test]
    fn test_bounds_saturates_large_dimensions() {
        assert_eq!(Rect::bounds(4, 3), Rect::new(0, 0, 4, 3));
        assert_eq!(Rect::bounds(u32::MAX, 1).w, i32::MAX);
    }

    #[test]
    fn test_intersect_extents_from_wide_edges() {
        // Right edge 3 + 4 = 7 against 5; left edge max(3, -2) = 3
        let r = Rect::new(3, -1, 4, 4).intersect(&Rect::new(-2, 1, 7, 2));
        assert_eq!(r, Rect::new(3, 1, 2, 2));
        let far = Rect::new(i32::MIN, 0, 1, 1).intersect(&Rect::new(i32::MAX, 0, 1, 1));
        assert_eq!(far.x, i32::MAX);
        assert_eq!(far.w, i32::MIN);
    }

    #[test]
    fn test_intersect_does_not_wrap_near_limits() {
        let a = Rect::new(i32::MAX - 1, 0, i32::MAX, 1);
        let b = Rect::new(0, 0, i32::MAX, 1);
        let r = a.intersect(&b);
        assert_eq!(r.x, i32::MAX - 1);
        assert_eq!(r.w, 1);
    }
}
