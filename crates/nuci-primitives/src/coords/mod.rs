//! Coordinate and geometry value types.
//!
//! Canonical space:
//! - origin top-left
//! - +X right, +Y down
//!
//! Integer types (`Point2D`, `Point3D`, `Size2D`, `Rectangle2D`) hash and
//! compare exactly. Floating types follow IEEE equality; their `Hash` treats
//! `0.0` and `-0.0` as the same value.

mod ops;
mod point;
mod point_f;
mod rect;
mod size;
mod vector;

pub use point::{Point2D, Point3D};
pub use point_f::{PointF2D, PointF3D};
pub use rect::Rectangle2D;
pub use size::{Scale2D, Size2D, SizeF2D};
pub use vector::{Vector2D, Vector3D};
