//! Hexadecimal colour strings.
//!
//! Accepted forms, each with or without one leading `#`:
//!
//! | Digits | Layout     | Alpha        |
//! |--------|------------|--------------|
//! | 3      | `RGB`      | forced `FF`  |
//! | 4      | `ARGB`     | first digit  |
//! | 6      | `RRGGBB`   | forced `FF`  |
//! | 8      | `AARRGGBB` | first pair   |
//!
//! Short forms duplicate each digit (`F` becomes `FF`). Digits are case-insensitive.
//! Encoding always produces uppercase `#RRGGBB`, or `#AARRGGBB` when alpha is not 255.

use super::{Colour, ColourParseError};

/// Encodes `colour` as `#RRGGBB` when opaque, otherwise `#AARRGGBB`.
pub fn encode(colour: Colour) -> String {
    let Colour { a, r, g, b } = colour;
    if a == u8::MAX {
        format!("#{r:02X}{g:02X}{b:02X}")
    } else {
        format!("#{a:02X}{r:02X}{g:02X}{b:02X}")
    }
}

/// Decodes a hexadecimal colour string.
///
/// Rules are checked in this order:
/// 1. at most one leading `#` is stripped; any other `#` is a format error
/// 2. the digit count must be 3, 4, 6 or 8, otherwise a length error
/// 3. every digit must be `0-9a-fA-F`, otherwise a format error
pub fn decode(input: &str) -> Result<Colour, ColourParseError> {
    let (offset, digits) = match input.strip_prefix('#') {
        Some(rest) => (1, rest),
        None => (0, input),
    };

    if let Some(pos) = digits.chars().position(|c| c == '#') {
        return Err(reject(ColourParseError::InvalidFormat {
            input: input.to_owned(),
            position: offset + pos,
            found: '#',
        }));
    }

    let count = digits.chars().count();
    if !matches!(count, 3 | 4 | 6 | 8) {
        return Err(reject(ColourParseError::InvalidLength {
            input: input.to_owned(),
            digits: count,
        }));
    }

    let mut nibbles = [0u8; 8];
    for (i, c) in digits.chars().enumerate() {
        match c.to_digit(16) {
            // to_digit(16) is always < 16.
            Some(v) => nibbles[i] = v as u8,
            None => {
                return Err(reject(ColourParseError::InvalidFormat {
                    input: input.to_owned(),
                    position: offset + i,
                    found: c,
                }));
            }
        }
    }

    let n = &nibbles;
    Ok(match count {
        3 => Colour::rgb(short(n[0]), short(n[1]), short(n[2])),
        4 => Colour::rgba(short(n[1]), short(n[2]), short(n[3]), short(n[0])),
        6 => Colour::rgb(long(n[0], n[1]), long(n[2], n[3]), long(n[4], n[5])),
        _ => Colour::rgba(long(n[2], n[3]), long(n[4], n[5]), long(n[6], n[7]), long(n[0], n[1])),
    })
}

/// A single digit duplicated into a byte: `0xF` -> `0xFF`.
#[inline]
fn short(nibble: u8) -> u8 {
    nibble << 4 | nibble
}

#[inline]
fn long(high: u8, low: u8) -> u8 {
    high << 4 | low
}

fn reject(err: ColourParseError) -> ColourParseError {
    log::trace!("rejected hexadecimal colour ({:?}): {err}", err.kind());
    err
}
