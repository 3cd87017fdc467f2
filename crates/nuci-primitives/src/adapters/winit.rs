//! Conversions to and from `winit::dpi` types.
//!
//! Physical (pixel) types map to the integer primitives, logical types map to
//! the float primitives. A rectangle maps to the position/size pair winit uses
//! for window geometry.

use winit::dpi::{LogicalPosition, LogicalSize, PhysicalPosition, PhysicalSize};

use crate::coords::{Point2D, PointF2D, Rectangle2D, Size2D, SizeF2D};

impl From<Point2D> for PhysicalPosition<i32> {
    #[inline]
    fn from(p: Point2D) -> Self {
        PhysicalPosition::new(p.x, p.y)
    }
}

impl From<PhysicalPosition<i32>> for Point2D {
    #[inline]
    fn from(p: PhysicalPosition<i32>) -> Self {
        Point2D::new(p.x, p.y)
    }
}

impl From<PointF2D> for LogicalPosition<f32> {
    #[inline]
    fn from(p: PointF2D) -> Self {
        LogicalPosition::new(p.x, p.y)
    }
}

impl From<LogicalPosition<f32>> for PointF2D {
    #[inline]
    fn from(p: LogicalPosition<f32>) -> Self {
        PointF2D::new(p.x, p.y)
    }
}

impl From<Size2D> for PhysicalSize<i32> {
    #[inline]
    fn from(s: Size2D) -> Self {
        PhysicalSize::new(s.width, s.height)
    }
}

impl From<PhysicalSize<i32>> for Size2D {
    #[inline]
    fn from(s: PhysicalSize<i32>) -> Self {
        Size2D::new(s.width, s.height)
    }
}

impl From<SizeF2D> for LogicalSize<f32> {
    #[inline]
    fn from(s: SizeF2D) -> Self {
        LogicalSize::new(s.width, s.height)
    }
}

impl From<LogicalSize<f32>> for SizeF2D {
    #[inline]
    fn from(s: LogicalSize<f32>) -> Self {
        SizeF2D::new(s.width, s.height)
    }
}

impl From<Rectangle2D> for (PhysicalPosition<i32>, PhysicalSize<i32>) {
    #[inline]
    fn from(r: Rectangle2D) -> Self {
        (r.location().into(), r.size().into())
    }
}

impl From<(PhysicalPosition<i32>, PhysicalSize<i32>)> for Rectangle2D {
    #[inline]
    fn from((position, size): (PhysicalPosition<i32>, PhysicalSize<i32>)) -> Self {
        Rectangle2D::from_point_size(position.into(), size.into())
    }
}

/// Cursor positions arrive as `f64`; each axis is truncated toward zero.
#[inline]
pub fn point2d_from_cursor(p: PhysicalPosition<f64>) -> Point2D {
    Point2D::new(p.x as i32, p.y as i32)
}
