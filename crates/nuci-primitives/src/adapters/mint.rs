//! Conversions to and from [`mint`] interop types.
//!
//! Lossless pairs are `From` impls in both directions. Float-to-integer
//! mappings truncate and are named functions.

use crate::coords::{Point2D, Point3D, PointF2D, PointF3D, Scale2D, Size2D, Vector2D, Vector3D};

macro_rules! bridge {
    ($ours:ty, $theirs:ty, { $($a:ident <-> $b:ident),+ }) => {
        impl From<$ours> for $theirs {
            #[inline]
            fn from(v: $ours) -> Self {
                Self { $($b: v.$a),+ }
            }
        }

        impl From<$theirs> for $ours {
            #[inline]
            fn from(v: $theirs) -> Self {
                Self { $($a: v.$b),+ }
            }
        }
    };
}

bridge!(Point2D, mint::Point2<i32>, { x <-> x, y <-> y });
bridge!(PointF2D, mint::Point2<f32>, { x <-> x, y <-> y });
bridge!(Point3D, mint::Point3<i32>, { x <-> x, y <-> y, z <-> z });
bridge!(PointF3D, mint::Point3<f32>, { x <-> x, y <-> y, z <-> z });
bridge!(Vector2D, mint::Vector2<f32>, { x <-> x, y <-> y });
bridge!(Vector3D, mint::Vector3<f32>, { x <-> x, y <-> y, z <-> z });
bridge!(Size2D, mint::Vector2<i32>, { width <-> x, height <-> y });
bridge!(Scale2D, mint::Vector2<f32>, { horizontal <-> x, vertical <-> y });

/// Truncates each component toward zero.
#[inline]
pub fn point2d_from_vector(v: mint::Vector2<f32>) -> Point2D {
    Point2D::new(v.x as i32, v.y as i32)
}

#[inline]
pub fn vector_from_point2d(p: Point2D) -> mint::Vector2<f32> {
    mint::Vector2 { x: p.x as f32, y: p.y as f32 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_round_trip() {
        let p = Point2D::new(-3, 7);
        let m: mint::Point2<i32> = p.into();
        assert_eq!((m.x, m.y), (-3, 7));
        assert_eq!(Point2D::from(m), p);

        let q = PointF3D::new(0.5, 1.5, -2.5);
        let m: mint::Point3<f32> = q.into();
        assert_eq!(PointF3D::from(m), q);
    }

    #[test]
    fn size_maps_to_vector_axes() {
        let m: mint::Vector2<i32> = Size2D::new(640, 480).into();
        assert_eq!((m.x, m.y), (640, 480));
        assert_eq!(Size2D::from(m), Size2D::new(640, 480));
    }

    #[test]
    fn scale_and_vector_share_the_mint_type() {
        let m = mint::Vector2 { x: 2.0_f32, y: 0.5 };
        assert_eq!(Scale2D::from(m), Scale2D::new(2.0, 0.5));
        assert_eq!(Vector2D::from(m), Vector2D::new(2.0, 0.5));
    }

    #[test]
    fn vector_to_point_truncates() {
        assert_eq!(point2d_from_vector(mint::Vector2 { x: 2.9, y: -2.9 }), Point2D::new(2, -2));
        let v = vector_from_point2d(Point2D::new(4, -1));
        assert_eq!((v.x, v.y), (4.0, -1.0));
    }
}
