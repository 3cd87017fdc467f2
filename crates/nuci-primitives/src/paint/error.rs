/// Which decoding rule a hexadecimal colour broke.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ColourParseErrorKind {
    /// A repeated `#` or a character that is not a hex digit.
    Format,
    /// The digit count is not one of 3, 4, 6 or 8.
    Length,
}

/// Error returned when decoding a hexadecimal colour string.
///
/// The two variants are distinct so that callers can tell a malformed digit
/// apart from a string of the wrong size.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ColourParseError {
    /// A second `#`, or a non-hex character among the digits.
    ///
    /// `position` is the char index within the original input.
    #[error("hexadecimal colour {input:?} is malformed: unexpected {found:?} at position {position}")]
    InvalidFormat {
        input: String,
        position: usize,
        found: char,
    },

    /// The number of digits (after stripping one leading `#`) is not 3, 4, 6 or 8.
    #[error("hexadecimal colour {input:?} has {digits} digits, expected 3, 4, 6 or 8")]
    InvalidLength { input: String, digits: usize },
}

impl ColourParseError {
    #[inline]
    pub fn kind(&self) -> ColourParseErrorKind {
        match self {
            Self::InvalidFormat { .. } => ColourParseErrorKind::Format,
            Self::InvalidLength { .. } => ColourParseErrorKind::Length,
        }
    }

    /// The string that failed to decode.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat { input, .. } | Self::InvalidLength { input, .. } => input,
        }
    }
}
