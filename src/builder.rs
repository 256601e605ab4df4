//! Builder for custom [`AddressFamily`] configurations.

use crate::constants::{
    IPV4_BASE, IPV4_MAX_SEGMENT, IPV4_SEGMENT_BIT_WIDTH, MAX_NUMERIC_BASE, MAX_SEGMENT_BIT_WIDTH,
    MIN_NUMERIC_BASE, MIN_SEGMENT_BIT_WIDTH,
};
use crate::error::BuilderError;
use crate::family::AddressFamily;

/// A builder for families describing other fixed-arity delimited numeric formats.
///
/// Defaults mirror a strict decimal family with one 8-bit field; every
/// setter is chainable and validation happens once, in [`build`](Self::build).
///
/// # Examples
///
/// ```
/// use ipvx::AddressFamily;
///
/// // MAC-48: six hex octets separated by ':'
/// let mac = AddressFamily::builder(':')
///     .numeric_base(16)
///     .segment_bit_width(8 + 1)
///     .field_count(6)
///     .max_segment(0xff)
///     .build()
///     .unwrap();
///
/// let addr = mac.parse("00:1A:2b:3C:4d:5E").unwrap();
/// assert_eq!(addr.segments(), &[0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressFamilyBuilder {
    delimiter: char,
    numeric_base: u32,
    segment_bit_width: u32,
    field_count: usize,
    max_segment: u64,
    strict_field_count: bool,
    pad_blank_segments: bool,
}

impl AddressFamilyBuilder {
    /// Creates a builder for a family split on `delimiter`.
    #[must_use]
    pub const fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            numeric_base: IPV4_BASE,
            segment_bit_width: IPV4_SEGMENT_BIT_WIDTH,
            field_count: 1,
            max_segment: IPV4_MAX_SEGMENT,
            strict_field_count: true,
            pad_blank_segments: false,
        }
    }

    /// Sets the radix segments are parsed in (2 to 36).
    #[must_use]
    pub const fn numeric_base(mut self, base: u32) -> Self {
        self.numeric_base = base;
        self
    }

    /// Sets the signed bit width bounding each segment parse, sign bit included.
    #[must_use]
    pub const fn segment_bit_width(mut self, width: u32) -> Self {
        self.segment_bit_width = width;
        self
    }

    /// Sets the canonical number of segments.
    #[must_use]
    pub const fn field_count(mut self, count: usize) -> Self {
        self.field_count = count;
        self
    }

    /// Sets the largest valid segment value (inclusive).
    #[must_use]
    pub const fn max_segment(mut self, max: u64) -> Self {
        self.max_segment = max;
        self
    }

    /// Requires the field count to match exactly when `strict` is true.
    #[must_use]
    pub const fn strict_field_count(mut self, strict: bool) -> Self {
        self.strict_field_count = strict;
        self
    }

    /// Reads blank segments as zero when `pad` is true.
    #[must_use]
    pub const fn pad_blank_segments(mut self, pad: bool) -> Self {
        self.pad_blank_segments = pad;
        self
    }

    /// Validates the configuration and returns the family.
    ///
    /// # Errors
    ///
    /// Returns `BuilderError` if:
    /// - The numeric base is outside 2 to 36
    /// - The segment bit width is outside 2 to 64
    /// - The field count is zero
    /// - The delimiter is whitespace, a sign, or a digit of the numeric base
    pub fn build(self) -> Result<AddressFamily, BuilderError> {
        if !(MIN_NUMERIC_BASE..=MAX_NUMERIC_BASE).contains(&self.numeric_base) {
            return Err(BuilderError::InvalidBase {
                base: self.numeric_base,
            });
        }

        if !(MIN_SEGMENT_BIT_WIDTH..=MAX_SEGMENT_BIT_WIDTH).contains(&self.segment_bit_width) {
            return Err(BuilderError::InvalidBitWidth {
                width: self.segment_bit_width,
            });
        }

        if self.field_count == 0 {
            return Err(BuilderError::ZeroFieldCount);
        }

        let d = self.delimiter;
        if d.is_whitespace() || matches!(d, '+' | '-') || d.is_digit(self.numeric_base) {
            return Err(BuilderError::InvalidDelimiter { delimiter: d });
        }

        Ok(AddressFamily::from_parts(
            self.delimiter,
            self.numeric_base,
            self.segment_bit_width,
            self.field_count,
            self.max_segment,
            self.strict_field_count,
            self.pad_blank_segments,
        ))
    }
}
