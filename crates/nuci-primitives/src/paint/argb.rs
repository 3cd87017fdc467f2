//! Packed 32-bit ARGB words: `(A << 24) | (R << 16) | (G << 8) | B`.
//!
//! Parameter order differs between entry points and is kept that way:
//! - [`Colour::rgba`] takes `r, g, b, a`
//! - [`from_argb_parts`] takes `a, r, g, b`
//! - [`pack_rgba`] takes `r, g, b, a`

use super::Colour;

/// Packs `colour` into a signed ARGB word.
#[inline]
pub fn to_argb(colour: Colour) -> i32 {
    // Colour is laid out A, R, G, B, which is the big-endian byte order of the word.
    i32::from_be_bytes(bytemuck::cast(colour))
}

/// Unpacks a signed ARGB word. Every `i32` is a valid colour.
#[inline]
pub fn from_argb(argb: i32) -> Colour {
    bytemuck::cast(argb.to_be_bytes())
}

/// Builds a colour from alpha-first components.
#[inline]
pub const fn from_argb_parts(a: u8, r: u8, g: u8, b: u8) -> Colour {
    Colour::rgba(r, g, b, a)
}

/// Builds an opaque colour.
#[inline]
pub const fn from_rgb_parts(r: u8, g: u8, b: u8) -> Colour {
    Colour::rgb(r, g, b)
}

/// Packs components given red first and alpha last.
#[inline]
pub fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> i32 {
    to_argb(Colour::rgba(r, g, b, a))
}

/// Packs opaque components.
#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> i32 {
    pack_rgba(r, g, b, u8::MAX)
}
