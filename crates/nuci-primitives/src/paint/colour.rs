use core::ops::Mul;
use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};

use super::{ColourParseError, argb, hex, named};

/// Straight-alpha colour with four 8-bit channels.
///
/// Invariant:
/// - fields are laid out `a, r, g, b`, so the byte view of a colour (see
///   [`bytemuck::bytes_of`]) is its big-endian ARGB word.
///
/// Equality and hashing cover all four channels. Operations never mutate;
/// they return new values.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Colour {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Colour {
    /// Opaque black.
    #[inline]
    fn default() -> Self {
        Self::BLACK
    }
}

// ── Construction ──────────────────────────────────────────────────────────

impl Colour {
    /// Opaque colour; alpha is 255.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: u8::MAX, r, g, b }
    }

    /// Colour with explicit alpha, given last.
    ///
    /// Note that [`argb::from_argb_parts`] takes alpha *first*.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Opaque colour from integers, each truncated modulo 256 (`256` -> `0`, `-1` -> `255`).
    #[inline]
    pub const fn wrapping_rgb(r: i32, g: i32, b: i32) -> Self {
        Self::rgb(r as u8, g as u8, b as u8)
    }

    /// Like [`wrapping_rgb`](Self::wrapping_rgb) with an explicit alpha, given last.
    #[inline]
    pub const fn wrapping_rgba(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self::rgba(r as u8, g as u8, b as u8, a as u8)
    }

    /// Straight-alpha `[r, g, b, a]` bytes, as produced by `#rrggbbaa` style sources.
    #[inline]
    pub const fn from_rgba_bytes([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }

    #[inline]
    pub const fn to_rgba_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

// ── Codec delegation ──────────────────────────────────────────────────────

impl Colour {
    /// See [`hex::decode`].
    #[inline]
    pub fn from_hex(s: &str) -> Result<Self, ColourParseError> {
        hex::decode(s)
    }

    /// See [`hex::encode`].
    #[inline]
    pub fn to_hex(self) -> String {
        hex::encode(self)
    }

    #[inline]
    pub fn from_argb(argb: i32) -> Self {
        argb::from_argb(argb)
    }

    #[inline]
    pub fn to_argb(self) -> i32 {
        argb::to_argb(self)
    }

    /// Catalogue lookup, see [`named::lookup`].
    #[inline]
    pub fn from_name(name: &str) -> Option<Self> {
        named::lookup(name)
    }

    /// Catalogue name of this exact colour, if it has one.
    #[inline]
    pub fn name(self) -> Option<&'static str> {
        named::name_of(self)
    }
}

// ── Derivations ───────────────────────────────────────────────────────────

impl Colour {
    /// Grey at the truncated mean of R, G and B. Alpha is kept.
    pub fn to_monochrome_average(self) -> Self {
        let sum = u16::from(self.r) + u16::from(self.g) + u16::from(self.b);
        // sum <= 765, so the mean fits a byte.
        let v = (sum / 3) as u8;
        Self::rgba(v, v, v, self.a)
    }

    /// Grey at the brightest of R, G and B. Alpha is kept.
    pub fn to_monochrome_light(self) -> Self {
        let v = self.r.max(self.g).max(self.b);
        Self::rgba(v, v, v, self.a)
    }

    /// Grey at the darkest of R, G and B. Alpha is kept.
    pub fn to_monochrome_dark(self) -> Self {
        let v = self.r.min(self.g).min(self.b);
        Self::rgba(v, v, v, self.a)
    }

    /// True when each of R, G and B differs by at most `tolerance`. Alpha is ignored.
    pub fn is_similar_to(self, other: Colour, tolerance: u32) -> bool {
        u32::from(self.r.abs_diff(other.r)) <= tolerance
            && u32::from(self.g.abs_diff(other.g)) <= tolerance
            && u32::from(self.b.abs_diff(other.b)) <= tolerance
    }

    /// Scales all four channels, alpha included, by `factor`.
    ///
    /// Each product is clamped to `[0, 255]` and then truncated, channel by
    /// channel. Never fails: `factor <= 0` gives `(0, 0, 0, 0)` and a NaN
    /// factor is treated as zero.
    pub fn multiply(self, factor: f32) -> Self {
        let scale = |c: u8| (f32::from(c) * factor).clamp(0.0, 255.0) as u8;
        Self {
            a: scale(self.a),
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }
}

// ── Equality helpers ──────────────────────────────────────────────────────

impl Colour {
    /// Compares against a hexadecimal string.
    ///
    /// The string is decoded first; a malformed string is an error, not `false`.
    pub fn equals_hex(self, hex: &str) -> Result<bool, ColourParseError> {
        Ok(self == hex::decode(hex)?)
    }

    /// Compares against components given alpha first.
    #[inline]
    pub fn equals_argb(self, a: u8, r: u8, g: u8, b: u8) -> bool {
        self == argb::from_argb_parts(a, r, g, b)
    }

    /// Compares against an opaque colour.
    #[inline]
    pub fn equals_rgb(self, r: u8, g: u8, b: u8) -> bool {
        self == Self::rgb(r, g, b)
    }
}

// ── Trait impls ───────────────────────────────────────────────────────────

impl Mul<f32> for Colour {
    type Output = Colour;
    #[inline]
    fn mul(self, rhs: f32) -> Colour {
        self.multiply(rhs)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(*self))
    }
}

impl FromStr for Colour {
    type Err = ColourParseError;
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex::decode(s)
    }
}

impl From<i32> for Colour {
    #[inline]
    fn from(argb: i32) -> Self {
        argb::from_argb(argb)
    }
}

impl From<Colour> for i32 {
    #[inline]
    fn from(colour: Colour) -> Self {
        argb::to_argb(colour)
    }
}
