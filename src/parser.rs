//! Tokenizing and validating address text against a family.

use tracing::{debug, trace};

use crate::address::ParsedAddress;
use crate::error::{ParseError, ParseErrorKind, SegmentError};
use crate::family::{AddressFamily, FamilyKind};

/// A segment literal before any range check: sign plus unsigned magnitude.
///
/// Magnitudes past `u64::MAX` saturate, which is beyond every bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Literal {
    negative: bool,
    magnitude: u64,
}

impl Literal {
    /// Reads an optionally signed integer in `base`.
    fn read(text: &str, base: u32) -> Result<Self, SegmentError> {
        let (negative, digits, offset) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..], 1),
            Some(b'+') => (false, &text[1..], 1),
            _ => (false, text, 0),
        };

        if digits.is_empty() {
            return Err(SegmentError::MissingDigits);
        }

        let mut magnitude: u64 = 0;
        for (i, c) in digits.chars().enumerate() {
            let Some(d) = c.to_digit(base) else {
                return Err(SegmentError::InvalidDigit {
                    char: c,
                    position: i + offset,
                });
            };
            magnitude = magnitude
                .saturating_mul(u64::from(base))
                .saturating_add(u64::from(d));
        }

        Ok(Self {
            negative,
            magnitude,
        })
    }

    /// Returns true if the literal is representable as a signed integer of `width` bits.
    const fn fits(self, width: u32) -> bool {
        if self.negative {
            self.magnitude <= 1u64 << (width - 1)
        } else {
            self.magnitude <= max_positive(width)
        }
    }
}

/// Largest positive value of a signed integer `width` bits wide.
const fn max_positive(width: u32) -> u64 {
    (1u64 << (width - 1)) - 1
}

impl ParsedAddress {
    /// Parses `text` under the rules of `family`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The text is empty or only whitespace
    /// - A strict family sees a field count other than its expected count
    /// - The field count exceeds the family's expected count
    /// - A segment is blank (and the family does not pad blanks) or is not an
    ///   integer in the family's base
    /// - A segment is negative
    /// - A segment exceeds the family's bit width or ceiling
    ///
    /// Parsing stops at the first invalid segment.
    pub fn parse(text: &str, family: &AddressFamily) -> Result<Self, ParseError> {
        match parse_segments(text, family) {
            Ok(segments) => {
                trace!(
                    input = text,
                    delimiter = %family.delimiter(),
                    segments = ?segments,
                    "parsed address"
                );
                Ok(Self::new(text, segments))
            }
            Err(kind) => {
                debug!(input = text, error = ?kind, "rejected address");
                Err(ParseError::new(text, kind))
            }
        }
    }
}

/// Parses `text` with a preset or custom family.
///
/// Accepts anything convertible into an [`AddressFamily`], including a
/// [`FamilyKind`].
///
/// # Errors
///
/// See [`ParsedAddress::parse`].
///
/// # Examples
///
/// ```
/// use ipvx::{AddressFamily, FamilyKind, parse};
///
/// let a = parse("192.168.1.100", FamilyKind::Ipv4).unwrap();
/// let b = parse("0192.0168.01.0100", AddressFamily::IPV4).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse(text: &str, family: impl Into<AddressFamily>) -> Result<ParsedAddress, ParseError> {
    ParsedAddress::parse(text, &family.into())
}

/// Parses `text` with the preset named by a numeric selector
/// ([`IPV4`](crate::IPV4) or [`IPV6`](crate::IPV6)).
///
/// # Errors
///
/// Returns `ParseError` with [`ParseErrorKind::UnknownFamily`] if the
/// selector names no family, otherwise see [`ParsedAddress::parse`].
///
/// # Examples
///
/// ```
/// use ipvx::{IPV4, ParseErrorKind, parse_selector};
///
/// assert!(parse_selector("8.8.8.8", IPV4).is_ok());
/// let err = parse_selector("8.8.8.8", 0).unwrap_err();
/// assert!(matches!(err.kind, ParseErrorKind::UnknownFamily { .. }));
/// ```
pub fn parse_selector(text: &str, selector: u32) -> Result<ParsedAddress, ParseError> {
    let Some(kind) = FamilyKind::from_selector(selector) else {
        debug!(input = text, selector, "unknown address family selector");
        return Err(ParseError::new(text, ParseErrorKind::UnknownFamily {
            selector: selector.to_string(),
        }));
    };
    ParsedAddress::parse(text, &kind.family())
}

fn parse_segments(text: &str, family: &AddressFamily) -> Result<Vec<u64>, ParseErrorKind> {
    if text.trim().is_empty() {
        return Err(ParseErrorKind::Empty);
    }

    let fields: Vec<&str> = text.split(family.delimiter()).collect();
    let expected = family.field_count();

    if family.strict_field_count() && fields.len() != expected {
        return Err(ParseErrorKind::FieldCountMismatch {
            expected,
            actual: fields.len(),
        });
    }

    // Applies to non-strict families too.
    if fields.len() > expected {
        return Err(ParseErrorKind::TooManyFields {
            max: expected,
            actual: fields.len(),
        });
    }

    let mut segments = Vec::with_capacity(fields.len());
    for (index, field) in fields.iter().enumerate() {
        segments.push(parse_segment(field, index, family)?);
    }
    Ok(segments)
}

fn parse_segment(field: &str, index: usize, family: &AddressFamily) -> Result<u64, ParseErrorKind> {
    let segment = field.trim();

    if segment.is_empty() {
        if family.pads_blank_segments() {
            return Ok(0);
        }
        return Err(ParseErrorKind::InvalidSegment {
            segment: segment.to_string(),
            index,
            reason: SegmentError::Blank,
        });
    }

    let literal = Literal::read(segment, family.numeric_base()).map_err(|reason| {
        ParseErrorKind::InvalidSegment {
            segment: segment.to_string(),
            index,
            reason,
        }
    })?;

    if literal.negative && literal.magnitude != 0 {
        return Err(ParseErrorKind::NegativeSegment {
            segment: segment.to_string(),
            index,
        });
    }

    // Bit width bounds the parse; the ceiling is the final check in case the
    // width is configured wider than the family's range.
    let width = family.segment_bit_width();
    if !literal.fits(width) || literal.magnitude > family.max_segment() {
        return Err(ParseErrorKind::SegmentOverflow {
            segment: segment.to_string(),
            index,
            max: family.max_segment().min(max_positive(width)),
        });
    }

    Ok(literal.magnitude)
}
