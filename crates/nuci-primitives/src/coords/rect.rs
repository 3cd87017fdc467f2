use bytemuck::{Pod, Zeroable};

use super::{Point2D, Size2D};

/// Integer rectangle anchored at its top-left corner (`+Y` down).
///
/// Invariants:
/// - `right() == x + width`, `bottom() == y + height`
/// - width and height are never normalised; a negative size gives
///   `right() < left()` or `bottom() < top()`, and every query keeps using
///   the raw edges.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rectangle2D {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle2D {
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub const fn from_point_size(location: Point2D, size: Size2D) -> Self {
        Self::new(location.x, location.y, size.width, size.height)
    }

    /// Spans from `start` to `end`; the size is `end - start` and may be negative.
    #[inline]
    pub const fn from_points(start: Point2D, end: Point2D) -> Self {
        Self::new(start.x, start.y, end.x - start.x, end.y - start.y)
    }

    /// Anchored at the origin.
    #[inline]
    pub const fn from_size(size: Size2D) -> Self {
        Self::from_point_size(Point2D::EMPTY, size)
    }

    #[inline]
    pub const fn location(self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    #[inline]
    pub const fn size(self) -> Size2D {
        Size2D::new(self.width, self.height)
    }

    #[inline]
    pub const fn with_location(self, location: Point2D) -> Self {
        Self::from_point_size(location, self.size())
    }

    #[inline]
    pub const fn with_size(self, size: Size2D) -> Self {
        Self::from_point_size(self.location(), size)
    }

    /// True only when location and size are all zero.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.x == 0 && self.y == 0 && self.width == 0 && self.height == 0
    }

    #[inline]
    pub const fn equals_parts(self, x: i32, y: i32, width: i32, height: i32) -> bool {
        self.x == x && self.y == y && self.width == width && self.height == height
    }
}

// ── Edges and corners ─────────────────────────────────────────────────────

impl Rectangle2D {
    #[inline]
    pub const fn left(self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub const fn top(self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// Midpoint, with each half-extent truncated toward zero.
    #[inline]
    pub const fn centre(self) -> Point2D {
        Point2D::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    #[inline]
    pub const fn top_left(self) -> Point2D {
        self.location()
    }

    #[inline]
    pub const fn top_right(self) -> Point2D {
        Point2D::new(self.right(), self.top())
    }

    #[inline]
    pub const fn bottom_left(self) -> Point2D {
        Point2D::new(self.left(), self.bottom())
    }

    #[inline]
    pub const fn bottom_right(self) -> Point2D {
        Point2D::new(self.right(), self.bottom())
    }

    /// Top-left, top-right, bottom-right, bottom-left.
    #[inline]
    pub const fn corners(self) -> [Point2D; 4] {
        [self.top_left(), self.top_right(), self.bottom_right(), self.bottom_left()]
    }
}

// ── Containment ───────────────────────────────────────────────────────────

impl Rectangle2D {
    /// Closed containment: both edges are inclusive.
    ///
    /// Uses the raw edges, so a rectangle with negative width or height
    /// contains no point at all.
    #[inline]
    pub const fn contains_coords(self, x: i32, y: i32) -> bool {
        self.left() <= x && self.right() >= x && self.top() <= y && self.bottom() >= y
    }

    #[inline]
    pub const fn contains(self, point: Point2D) -> bool {
        self.contains_coords(point.x, point.y)
    }

    /// True when both the top-left and bottom-right corners of `other` are inside.
    #[inline]
    pub const fn contains_rect(self, other: Rectangle2D) -> bool {
        self.contains(other.top_left()) && self.contains(other.bottom_right())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: i32, y: i32, w: i32, h: i32) -> Rectangle2D {
        Rectangle2D::new(x, y, w, h)
    }

    fn p(x: i32, y: i32) -> Point2D {
        Point2D::new(x, y)
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn from_point_size() {
        let rect = Rectangle2D::from_point_size(p(1, 2), Size2D::new(3, 4));
        assert_eq!(rect, r(1, 2, 3, 4));
        assert_eq!(rect.location(), p(1, 2));
        assert_eq!(rect.size(), Size2D::new(3, 4));
    }

    #[test]
    fn from_points_subtracts() {
        assert_eq!(Rectangle2D::from_points(p(2, 3), p(10, 7)), r(2, 3, 8, 4));
        // Reversed points are not normalised.
        assert_eq!(Rectangle2D::from_points(p(10, 7), p(2, 3)), r(10, 7, -8, -4));
    }

    #[test]
    fn from_size_is_at_origin() {
        assert_eq!(Rectangle2D::from_size(Size2D::new(5, 6)), r(0, 0, 5, 6));
    }

    #[test]
    fn with_location_and_size() {
        let rect = r(1, 2, 3, 4);
        assert_eq!(rect.with_location(p(9, 9)), r(9, 9, 3, 4));
        assert_eq!(rect.with_size(Size2D::new(7, 8)), r(1, 2, 7, 8));
    }

    #[test]
    fn is_empty_requires_every_field_zero() {
        assert!(Rectangle2D::EMPTY.is_empty());
        assert!(!r(0, 0, 0, 1).is_empty());
        assert!(!r(1, 0, 0, 0).is_empty());
    }

    #[test]
    fn equals_parts_is_componentwise() {
        assert!(r(1, 2, 3, 4).equals_parts(1, 2, 3, 4));
        assert!(!r(1, 2, 3, 4).equals_parts(1, 2, 4, 3));
        assert_ne!(r(1, 2, 3, 4), r(1, 2, 4, 3));
    }

    // ── edges and corners ─────────────────────────────────────────────────

    #[test]
    fn edges() {
        let rect = r(10, 20, 30, 40);
        assert_eq!(rect.left(), 10);
        assert_eq!(rect.right(), 40);
        assert_eq!(rect.top(), 20);
        assert_eq!(rect.bottom(), 60);
    }

    #[test]
    fn corners() {
        let rect = r(10, 20, 30, 40);
        assert_eq!(rect.top_left(), p(10, 20));
        assert_eq!(rect.top_right(), p(40, 20));
        assert_eq!(rect.bottom_left(), p(10, 60));
        assert_eq!(rect.bottom_right(), p(40, 60));
        assert_eq!(rect.corners(), [p(10, 20), p(40, 20), p(40, 60), p(10, 60)]);
    }

    #[test]
    fn centre_truncates() {
        assert_eq!(r(0, 0, 10, 10).centre(), p(5, 5));
        assert_eq!(r(1, 1, 5, 3).centre(), p(3, 2));
        assert_eq!(r(0, 0, -5, -5).centre(), p(-2, -2));
    }

    #[test]
    fn negative_size_keeps_raw_edges() {
        let rect = r(10, 10, -4, -6);
        assert_eq!(rect.right(), 6);
        assert_eq!(rect.bottom(), 4);
        assert!(rect.right() < rect.left());
        assert!(rect.bottom() < rect.top());
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0, 0, 10, 10).contains(p(5, 5)));
    }

    #[test]
    fn contains_edges_inclusive() {
        let rect = r(0, 0, 10, 10);
        assert!(rect.contains(p(0, 0)));
        assert!(rect.contains(p(10, 10)));
        assert!(rect.contains_coords(10, 0));
    }

    #[test]
    fn contains_outside() {
        let rect = r(0, 0, 10, 10);
        assert!(!rect.contains(p(-1, 5)));
        assert!(!rect.contains(p(5, -1)));
        assert!(!rect.contains(p(11, 5)));
        assert!(!rect.contains(p(5, 11)));
    }

    #[test]
    fn contains_own_corners() {
        for rect in [r(0, 0, 10, 10), r(-5, 3, 1, 0), r(7, 7, 0, 0)] {
            for corner in rect.corners() {
                assert!(rect.contains(corner), "{rect:?} should contain {corner:?}");
            }
        }
    }

    #[test]
    fn contains_itself() {
        for rect in [r(0, 0, 10, 10), r(-5, -5, 3, 8), Rectangle2D::EMPTY] {
            assert!(rect.contains_rect(rect));
        }
    }

    #[test]
    fn contains_rect_nested_and_overlapping() {
        let outer = r(0, 0, 100, 100);
        assert!(outer.contains_rect(r(10, 10, 20, 20)));
        assert!(!outer.contains_rect(r(90, 90, 20, 20)));
        assert!(!r(10, 10, 20, 20).contains_rect(outer));
    }

    #[test]
    fn negative_size_contains_nothing() {
        // left=10 > right=6, so no x satisfies both bounds.
        let rect = r(10, 10, -4, -6);
        assert!(!rect.contains(p(8, 8)));
        assert!(!rect.contains(rect.top_left()));
        assert!(!rect.contains_rect(rect));
    }
}
