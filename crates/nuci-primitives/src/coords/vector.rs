use bytemuck::{Pod, Zeroable};

use super::Point2D;
use super::ops::{impl_componentwise_ops, impl_float_hash};

/// 2D direction or displacement.
///
/// Same arithmetic shape as [`PointF2D`](super::PointF2D), different meaning.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);

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

impl From<Point2D> for Vector2D {
    #[inline]
    fn from(p: Point2D) -> Self {
        Self::new(p.x as f32, p.y as f32)
    }
}

impl_componentwise_ops!(Vector2D { x, y }, f32);
impl_float_hash!(Vector2D { x, y });

/// 3D direction or displacement.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vector3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3D {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
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

impl_componentwise_ops!(Vector3D { x, y, z }, f32);
impl_float_hash!(Vector3D { x, y, z });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::ops::hash_of;

    #[test]
    fn vector2d_ops() {
        let a = Vector2D::new(2.0, 8.0);
        assert_eq!(a + Vector2D::ONE, Vector2D::new(3.0, 9.0));
        assert_eq!(a - Vector2D::ONE, Vector2D::new(1.0, 7.0));
        assert_eq!(a * Vector2D::new(0.5, 0.25), Vector2D::new(1.0, 2.0));
        assert_eq!(a / Vector2D::new(2.0, 4.0), Vector2D::new(1.0, 2.0));
        assert_eq!(a * 2.0, Vector2D::new(4.0, 16.0));
        assert_eq!(a / 2.0, Vector2D::new(1.0, 4.0));
        assert_eq!(-a, Vector2D::new(-2.0, -8.0));
    }

    #[test]
    fn vector2d_from_point() {
        assert_eq!(Vector2D::from(Point2D::new(-1, 5)), Vector2D::new(-1.0, 5.0));
    }

    #[test]
    fn vector2d_zero_over_zero_is_nan() {
        let v = Vector2D::ZERO / 0.0;
        assert!(v.x.is_nan() && v.y.is_nan());
        assert!(!v.is_finite());
        assert_ne!(v, v);
    }

    #[test]
    fn vector3d_ops() {
        let a = Vector3D::new(1.0, 2.0, 3.0);
        assert_eq!(a + Vector3D::ONE, Vector3D::new(2.0, 3.0, 4.0));
        assert_eq!(a - a, Vector3D::ZERO);
        assert_eq!(a * a, Vector3D::new(1.0, 4.0, 9.0));
        assert_eq!(a / a, Vector3D::ONE);
        assert_eq!(a * 2.0, Vector3D::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn vector3d_empty_checks_depth() {
        assert!(Vector3D::ZERO.is_empty());
        assert!(!Vector3D::new(0.0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn vector3d_equal_values_hash_equal() {
        assert_eq!(hash_of(&Vector3D::new(1.0, 2.0, 3.0)), hash_of(&Vector3D::new(1.0, 2.0, 3.0)));
    }
}
