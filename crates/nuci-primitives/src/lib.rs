//! Colour and geometry primitives.
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`paint`]    | [`Colour`], hexadecimal and packed ARGB codecs, named catalogue  |
//! | [`coords`]   | integer and float points, vectors, sizes, scales, rectangles    |
//! | [`adapters`] | host framework conversions (`mint`, `winit`, `wgpu` features)   |
//! | [`logging`]  | `env_logger` setup shared by binaries and tests                  |
//!
//! ```
//! use nuci_primitives::{Colour, Point2D, Rectangle2D, Scale2D, Size2D};
//!
//! let c = Colour::from_hex("#F0F")?;
//! assert_eq!(c, Colour::rgb(255, 0, 255));
//! assert_eq!(c.to_hex(), "#FF00FF");
//! assert_eq!(c.to_argb(), 0xFFFF_00FF_u32 as i32);
//!
//! let size = Size2D::new(10, 20) * Scale2D::new(2.51, 1.0);
//! assert_eq!(size, Size2D::new(25, 20));
//!
//! let r = Rectangle2D::from_point_size(Point2D::new(0, 0), size);
//! assert!(r.contains(Point2D::new(25, 20)));
//! # Ok::<(), nuci_primitives::ColourParseError>(())
//! ```

pub mod adapters;
pub mod coords;
pub mod logging;
pub mod paint;

pub use coords::{
    Point2D, Point3D, PointF2D, PointF3D, Rectangle2D, Scale2D, Size2D, SizeF2D, Vector2D,
    Vector3D,
};
pub use paint::{Colour, ColourParseError, ColourParseErrorKind};
