use std::{error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No digits after the optional sign.
    Empty,
    /// A symbol that is not a digit of the requested radix.
    InvalidDigit,
}

/// Error returned by [`BigInt::from_str_radix`](crate::BigInt::from_str_radix).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBigIntError {
    kind: ParseErrorKind,
    position: usize,
}

impl ParseBigIntError {
    pub(crate) fn empty(position: usize) -> Self {
        ParseBigIntError { kind: ParseErrorKind::Empty, position }
    }
    pub(crate) fn invalid_digit(position: usize) -> Self {
        ParseBigIntError { kind: ParseErrorKind::InvalidDigit, position }
    }
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
    /// Byte offset in the parsed text where the problem was found.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::Empty => write!(f, "cannot parse integer from empty string"),
            ParseErrorKind::InvalidDigit => write!(f, "invalid digit found at position {}", self.position),
        }
    }
}

impl error::Error for ParseBigIntError {}
