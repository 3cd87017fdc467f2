//! Colour model shared by every consumer of the crate.
//!
//! Scope:
//! - colour representation (straight-alpha ARGB bytes)
//! - hexadecimal and packed ARGB codecs
//! - the predefined colour catalogue
//!
//! Geometry types remain in `coords`.

pub mod argb;
mod colour;
mod error;
pub mod hex;
pub mod named;

pub use colour::Colour;
pub use error::{ColourParseError, ColourParseErrorKind};
pub use named::{NAMED_COLOURS, NamedColour, Palette};
