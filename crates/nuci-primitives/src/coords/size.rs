use core::ops::{Div, Mul};

use bytemuck::{Pod, Zeroable};

use super::ops::{impl_componentwise_ops, impl_float_hash};
use super::{Point2D, PointF2D};

/// Integer width and height. Negative values are allowed and kept as-is.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Size2D {
    pub width: i32,
    pub height: i32,
}

impl Size2D {
    pub const EMPTY: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn square(side: i32) -> Self {
        Self::new(side, side)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// `width * height`, computed in `f64` so it cannot overflow.
    #[inline]
    pub fn area(self) -> f64 {
        f64::from(self.width) * f64::from(self.height)
    }

    /// `2 * (width + height)`, computed in `f64`.
    #[inline]
    pub fn perimeter(self) -> f64 {
        2.0 * (f64::from(self.width) + f64::from(self.height))
    }
}

impl From<Point2D> for Size2D {
    #[inline]
    fn from(p: Point2D) -> Self {
        Self::new(p.x, p.y)
    }
}

impl_componentwise_ops!(Size2D { width, height }, i32);

/// Scales each axis independently, then truncates toward zero.
///
/// `10 * 2.51` gives `25`, not `26`.
impl Mul<Scale2D> for Size2D {
    type Output = Size2D;
    #[inline]
    fn mul(self, scale: Scale2D) -> Size2D {
        Size2D::new(
            (self.width as f32 * scale.horizontal) as i32,
            (self.height as f32 * scale.vertical) as i32,
        )
    }
}

/// Divides each axis independently, then truncates toward zero.
impl Div<Scale2D> for Size2D {
    type Output = Size2D;
    #[inline]
    fn div(self, scale: Scale2D) -> Size2D {
        Size2D::new(
            (self.width as f32 / scale.horizontal) as i32,
            (self.height as f32 / scale.vertical) as i32,
        )
    }
}

/// Floating-point width and height.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct SizeF2D {
    pub width: f32,
    pub height: f32,
}

impl SizeF2D {
    pub const EMPTY: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    #[inline]
    pub fn area(self) -> f64 {
        f64::from(self.width) * f64::from(self.height)
    }

    #[inline]
    pub fn perimeter(self) -> f64 {
        2.0 * (f64::from(self.width) + f64::from(self.height))
    }
}

impl From<Size2D> for SizeF2D {
    #[inline]
    fn from(s: Size2D) -> Self {
        Self::new(s.width as f32, s.height as f32)
    }
}

impl From<PointF2D> for SizeF2D {
    #[inline]
    fn from(p: PointF2D) -> Self {
        Self::new(p.x, p.y)
    }
}

impl_componentwise_ops!(SizeF2D { width, height }, f32);
impl_float_hash!(SizeF2D { width, height });

impl Mul<Scale2D> for SizeF2D {
    type Output = SizeF2D;
    #[inline]
    fn mul(self, scale: Scale2D) -> SizeF2D {
        SizeF2D::new(self.width * scale.horizontal, self.height * scale.vertical)
    }
}

impl Div<Scale2D> for SizeF2D {
    type Output = SizeF2D;
    #[inline]
    fn div(self, scale: Scale2D) -> SizeF2D {
        SizeF2D::new(self.width / scale.horizontal, self.height / scale.vertical)
    }
}

/// Per-axis scale factors.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Scale2D {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Scale2D {
    /// Identity scale.
    pub const ONE: Self = Self::new(1.0, 1.0);

    #[inline]
    pub const fn new(horizontal: f32, vertical: f32) -> Self {
        Self { horizontal, vertical }
    }

    #[inline]
    pub const fn uniform(factor: f32) -> Self {
        Self::new(factor, factor)
    }
}

impl Default for Scale2D {
    #[inline]
    fn default() -> Self {
        Self::ONE
    }
}

impl_float_hash!(Scale2D { horizontal, vertical });
