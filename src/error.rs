//! Error types for address parsing and family construction.

use std::fmt;

/// Errors that can occur when parsing an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is empty or contains only whitespace
    Empty,
    /// The family selector does not name a known family
    UnknownFamily {
        /// The selector that was supplied
        selector: String,
    },
    /// A strict family received the wrong number of fields
    FieldCountMismatch {
        /// Field count the family requires
        expected: usize,
        /// Field count found in the input
        actual: usize,
    },
    /// More fields than the family allows, regardless of strictness
    TooManyFields {
        /// Maximum field count
        max: usize,
        /// Field count found in the input
        actual: usize,
    },
    /// A segment is not a valid integer in the family's base
    InvalidSegment {
        /// The trimmed segment text
        segment: String,
        /// Index of the segment
        index: usize,
        /// Reason for invalidity
        reason: SegmentError,
    },
    /// A segment parsed to a negative value
    NegativeSegment {
        /// The trimmed segment text
        segment: String,
        /// Index of the segment
        index: usize,
    },
    /// A segment exceeds the family's ceiling
    SegmentOverflow {
        /// The trimmed segment text
        segment: String,
        /// Index of the segment
        index: usize,
        /// Largest allowed value (inclusive): the ceiling or the bit-width
        /// limit, whichever is lower
        max: u64,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse address '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::Empty => write!(f, "input is empty"),
            ParseErrorKind::UnknownFamily { selector } => {
                write!(f, "unknown address family '{selector}'; expected ipv4 or ipv6")
            }
            ParseErrorKind::FieldCountMismatch { expected, actual } => {
                write!(f, "expected exactly {expected} fields, found {actual}")
            }
            ParseErrorKind::TooManyFields { max, actual } => {
                write!(f, "expected no more than {max} fields, found {actual}")
            }
            ParseErrorKind::InvalidSegment {
                segment,
                index,
                reason,
            } => {
                write!(f, "invalid segment '{segment}' at index {index}: {reason}")
            }
            ParseErrorKind::NegativeSegment { segment, index } => {
                write!(
                    f,
                    "segment '{segment}' at index {index} is negative; only values >= 0 are allowed"
                )
            }
            ParseErrorKind::SegmentOverflow {
                segment,
                index,
                max,
            } => {
                write!(f, "segment '{segment}' at index {index} overflows maximum {max}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Reasons a single segment fails to parse as an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// Segment is blank and the family does not pad blanks with zero
    Blank,
    /// Segment contains a character that is not a digit in the family's base
    InvalidDigit {
        /// The invalid character
        char: char,
        /// Position in the trimmed segment
        position: usize,
    },
    /// Segment is only a sign with no digits
    MissingDigits,
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "segment cannot be blank"),
            Self::InvalidDigit { char, position } => {
                write!(f, "invalid digit '{char}' at position {position}")
            }
            Self::MissingDigits => write!(f, "sign without digits"),
        }
    }
}

impl std::error::Error for SegmentError {}

/// Errors for custom [`AddressFamily`](crate::AddressFamily) construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// Numeric base outside the supported radix range
    InvalidBase {
        /// The rejected base
        base: u32,
    },
    /// Segment bit width outside the supported range
    InvalidBitWidth {
        /// The rejected width
        width: u32,
    },
    /// Field count of zero
    ZeroFieldCount,
    /// Delimiter would be ambiguous with segment text
    InvalidDelimiter {
        /// The rejected delimiter
        delimiter: char,
    },
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBase { base } => {
                write!(f, "numeric base {base} is outside the supported range 2..=36")
            }
            Self::InvalidBitWidth { width } => {
                write!(f, "segment bit width {width} is outside the supported range 2..=64")
            }
            Self::ZeroFieldCount => write!(f, "field count must be at least 1"),
            Self::InvalidDelimiter { delimiter } => {
                write!(
                    f,
                    "delimiter {delimiter:?} is whitespace, a sign, or a digit of the numeric base"
                )
            }
        }
    }
}

impl std::error::Error for BuilderError {}
