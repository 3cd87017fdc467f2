use bytemuck::{Pod, Zeroable};

use super::ops::{impl_componentwise_ops, impl_float_hash};
use super::{Point2D, Point3D, Size2D, SizeF2D};

/// Floating-point 2D position.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct PointF2D {
    pub x: f32,
    pub y: f32,
}

impl PointF2D {
    pub const EMPTY: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Point2D> for PointF2D {
    #[inline]
    fn from(p: Point2D) -> Self {
        Self::new(p.x as f32, p.y as f32)
    }
}

impl From<SizeF2D> for PointF2D {
    #[inline]
    fn from(s: SizeF2D) -> Self {
        Self::new(s.width, s.height)
    }
}

impl From<Size2D> for PointF2D {
    #[inline]
    fn from(s: Size2D) -> Self {
        Self::new(s.width as f32, s.height as f32)
    }
}

impl_componentwise_ops!(PointF2D { x, y }, f32);
impl_float_hash!(PointF2D { x, y });

/// Floating-point 3D position.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct PointF3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PointF3D {
    pub const EMPTY: Self = Self::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Lifts a 2D point to depth `z`. Accepts either point flavour.
    #[inline]
    pub fn from_point2d(point: impl Into<PointF2D>, z: f32) -> Self {
        let p = point.into();
        Self::new(p.x, p.y, z)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<Point3D> for PointF3D {
    #[inline]
    fn from(p: Point3D) -> Self {
        Self::new(p.x as f32, p.y as f32, p.z as f32)
    }
}

impl_componentwise_ops!(PointF3D { x, y, z }, f32);
impl_float_hash!(PointF3D { x, y, z });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::ops::hash_of;

    #[test]
    fn pointf2d_from_integer_types() {
        assert_eq!(PointF2D::from(Point2D::new(3, -4)), PointF2D::new(3.0, -4.0));
        assert_eq!(PointF2D::from(Size2D::new(5, 6)), PointF2D::new(5.0, 6.0));
        assert_eq!(PointF2D::from(SizeF2D::new(1.5, 2.5)), PointF2D::new(1.5, 2.5));
    }

    #[test]
    fn pointf2d_ops() {
        let a = PointF2D::new(3.0, 4.0);
        let b = PointF2D::new(1.5, 2.0);
        assert_eq!(a + b, PointF2D::new(4.5, 6.0));
        assert_eq!(a - b, PointF2D::new(1.5, 2.0));
        assert_eq!(a * b, PointF2D::new(4.5, 8.0));
        assert_eq!(a / b, PointF2D::new(2.0, 2.0));
        assert_eq!(a * 0.5, PointF2D::new(1.5, 2.0));
        assert_eq!(a / 2.0, PointF2D::new(1.5, 2.0));
    }

    #[test]
    fn pointf2d_divide_by_zero_is_infinite() {
        let p = PointF2D::new(1.0, -1.0) / 0.0;
        assert_eq!(p, PointF2D::new(f32::INFINITY, f32::NEG_INFINITY));
        assert!(!p.is_finite());
    }

    #[test]
    fn pointf2d_signed_zero_hashes_alike() {
        let a = PointF2D::new(0.0, 1.0);
        let b = PointF2D::new(-0.0, 1.0);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn pointf3d_scalar_ops_cover_every_axis() {
        let p = PointF3D::new(1.0, 2.0, 3.0);
        assert_eq!(p * 2.0, PointF3D::new(2.0, 4.0, 6.0));
        assert_eq!(p / 2.0, PointF3D::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn pointf3d_conversions() {
        assert_eq!(PointF3D::from(Point3D::new(1, 2, 3)), PointF3D::new(1.0, 2.0, 3.0));
        assert_eq!(PointF3D::from_point2d(Point2D::new(1, 2), 0.5), PointF3D::new(1.0, 2.0, 0.5));
        assert_eq!(PointF3D::from_point2d(PointF2D::new(0.25, 2.0), 3.0), PointF3D::new(0.25, 2.0, 3.0));
    }

    #[test]
    fn pointf3d_empty() {
        assert!(PointF3D::EMPTY.is_empty());
        assert!(!PointF3D::new(0.0, 0.0, 0.1).is_empty());
    }
}
