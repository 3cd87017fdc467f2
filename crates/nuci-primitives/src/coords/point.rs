use bytemuck::{Pod, Zeroable};

use super::Size2D;
use super::ops::impl_componentwise_ops;

/// Integer 2D position.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub const EMPTY: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl From<Size2D> for Point2D {
    #[inline]
    fn from(size: Size2D) -> Self {
        Self::new(size.width, size.height)
    }
}

impl_componentwise_ops!(Point2D { x, y }, i32);

/// Integer 3D position.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Point3D {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3D {
    pub const EMPTY: Self = Self::new(0, 0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Lifts a 2D point to depth `z`.
    #[inline]
    pub const fn from_point2d(point: Point2D, z: i32) -> Self {
        Self::new(point.x, point.y, z)
    }

    /// Drops the depth.
    #[inline]
    pub const fn xy(self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.x == 0 && self.y == 0 && self.z == 0
    }
}

impl_componentwise_ops!(Point3D { x, y, z }, i32);
