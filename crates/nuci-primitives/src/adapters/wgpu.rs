//! Conversions to and from `wgpu` types.
//!
//! `wgpu::Color` holds straight `f64` channels in `[0, 1]`; no colour-space
//! conversion is applied either way.

use crate::coords::Size2D;
use crate::paint::Colour;

impl From<Colour> for wgpu::Color {
    #[inline]
    fn from(c: Colour) -> Self {
        let unit = |v: u8| f64::from(v) / 255.0;
        wgpu::Color { r: unit(c.r), g: unit(c.g), b: unit(c.b), a: unit(c.a) }
    }
}

/// Quantises each channel to a byte.
///
/// Channels are clamped to `[0, 1]` and rounded to the nearest byte, so any
/// colour converted with `From<Colour>` comes back unchanged. NaN maps to 0.
pub fn colour_from_wgpu(c: wgpu::Color) -> Colour {
    let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Colour::rgba(byte(c.r), byte(c.g), byte(c.b), byte(c.a))
}

/// Single-layer extent; negative sides become 0.
#[inline]
pub fn extent_from_size(size: Size2D) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: size.width.max(0) as u32,
        height: size.height.max(0) as u32,
        depth_or_array_layers: 1,
    }
}

/// Drops the depth; sides above `i32::MAX` saturate.
#[inline]
pub fn size_from_extent(extent: wgpu::Extent3d) -> Size2D {
    let side = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
    Size2D::new(side(extent.width), side(extent.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colour_maps_to_unit_range() {
        let c: wgpu::Color = Colour::rgba(255, 0, 51, 255).into();
        assert_eq!((c.r, c.g, c.a), (1.0, 0.0, 1.0));
        assert!((c.b - 0.2).abs() < 1e-12);
    }

    #[test]
    fn colour_round_trips_through_wgpu() {
        for v in 0u8..=255 {
            let c = Colour::rgba(v, 255 - v, v / 2, v);
            assert_eq!(colour_from_wgpu(c.into()), c);
        }
    }

    #[test]
    fn out_of_range_channels_clamp() {
        let c = colour_from_wgpu(wgpu::Color { r: 2.0, g: -1.0, b: f64::NAN, a: 0.5 });
        assert_eq!(c, Colour::rgba(255, 0, 0, 128));
    }

    #[test]
    fn extent_conversions() {
        let e = extent_from_size(Size2D::new(640, -1));
        assert_eq!((e.width, e.height, e.depth_or_array_layers), (640, 0, 1));
        let back = size_from_extent(wgpu::Extent3d { width: u32::MAX, height: 7, depth_or_array_layers: 3 });
        assert_eq!(back, Size2D::new(i32::MAX, 7));
    }
}
