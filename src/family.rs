//! Address family configuration and the built-in presets.

use std::fmt;
use std::str::FromStr;

use crate::address::ParsedAddress;
use crate::builder::AddressFamilyBuilder;
use crate::constants::{
    IPV4, IPV4_BASE, IPV4_DELIMITER, IPV4_FIELD_COUNT, IPV4_MAX_SEGMENT, IPV4_SEGMENT_BIT_WIDTH,
    IPV6, IPV6_BASE, IPV6_DELIMITER, IPV6_FIELD_COUNT, IPV6_MAX_SEGMENT, IPV6_SEGMENT_BIT_WIDTH,
};
use crate::error::{ParseError, ParseErrorKind};

/// The rules governing how one address family's text is tokenized and validated.
///
/// A family is an immutable value: the two presets are associated constants,
/// and custom families are produced by [`AddressFamily::builder`].
///
/// # Examples
///
/// ```
/// use ipvx::AddressFamily;
///
/// let v4 = AddressFamily::IPV4;
/// assert_eq!(v4.delimiter(), '.');
/// assert_eq!(v4.field_count(), 4);
/// assert!(v4.strict_field_count());
///
/// let addr = v4.parse("192.168.1.100").unwrap();
/// assert_eq!(addr.segments(), &[192, 168, 1, 100]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AddressFamily {
    delimiter: char,
    numeric_base: u32,
    segment_bit_width: u32,
    field_count: usize,
    /// Final sanity ceiling applied after the bit-width bounded parse
    max_segment: u64,
    strict_field_count: bool,
    pad_blank_segments: bool,
}

impl AddressFamily {
    /// IPv4 dotted-decimal: exactly four base-10 fields, each `0..=255`.
    pub const IPV4: Self = Self {
        delimiter: IPV4_DELIMITER,
        numeric_base: IPV4_BASE,
        segment_bit_width: IPV4_SEGMENT_BIT_WIDTH,
        field_count: IPV4_FIELD_COUNT,
        max_segment: IPV4_MAX_SEGMENT,
        strict_field_count: true,
        pad_blank_segments: false,
    };

    /// IPv6 colon-hex: up to eight base-16 fields, each `0..=0xffff`,
    /// blank fields read as zero.
    pub const IPV6: Self = Self {
        delimiter: IPV6_DELIMITER,
        numeric_base: IPV6_BASE,
        segment_bit_width: IPV6_SEGMENT_BIT_WIDTH,
        field_count: IPV6_FIELD_COUNT,
        max_segment: IPV6_MAX_SEGMENT,
        strict_field_count: false,
        pad_blank_segments: true,
    };

    /// Starts a builder for a custom family split on `delimiter`.
    #[must_use]
    pub const fn builder(delimiter: char) -> AddressFamilyBuilder {
        AddressFamilyBuilder::new(delimiter)
    }

    #[allow(clippy::fn_params_excessive_bools)]
    pub(crate) const fn from_parts(
        delimiter: char,
        numeric_base: u32,
        segment_bit_width: u32,
        field_count: usize,
        max_segment: u64,
        strict_field_count: bool,
        pad_blank_segments: bool,
    ) -> Self {
        Self {
            delimiter,
            numeric_base,
            segment_bit_width,
            field_count,
            max_segment,
            strict_field_count,
            pad_blank_segments,
        }
    }

    /// Returns the character separating segments.
    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Returns the radix segments are parsed in.
    #[must_use]
    pub const fn numeric_base(&self) -> u32 {
        self.numeric_base
    }

    /// Returns the signed bit width bounding the segment parse.
    #[must_use]
    pub const fn segment_bit_width(&self) -> u32 {
        self.segment_bit_width
    }

    /// Returns the canonical number of segments of a complete address.
    #[must_use]
    pub const fn field_count(&self) -> usize {
        self.field_count
    }

    /// Returns the largest valid segment value (inclusive).
    #[must_use]
    pub const fn max_segment(&self) -> u64 {
        self.max_segment
    }

    /// Returns true if the field count must match exactly.
    #[must_use]
    pub const fn strict_field_count(&self) -> bool {
        self.strict_field_count
    }

    /// Returns true if blank segments are read as zero.
    #[must_use]
    pub const fn pads_blank_segments(&self) -> bool {
        self.pad_blank_segments
    }

    /// Parses `text` under this family's rules.
    ///
    /// # Errors
    ///
    /// See [`ParsedAddress::parse`].
    pub fn parse(&self, text: &str) -> Result<ParsedAddress, ParseError> {
        ParsedAddress::parse(text, self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AddressFamily {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            delimiter: char,
            numeric_base: u32,
            segment_bit_width: u32,
            field_count: usize,
            max_segment: u64,
            strict_field_count: bool,
            pad_blank_segments: bool,
        }

        let raw = <Raw as serde::Deserialize>::deserialize(deserializer)?;
        AddressFamily::builder(raw.delimiter)
            .numeric_base(raw.numeric_base)
            .segment_bit_width(raw.segment_bit_width)
            .field_count(raw.field_count)
            .max_segment(raw.max_segment)
            .strict_field_count(raw.strict_field_count)
            .pad_blank_segments(raw.pad_blank_segments)
            .build()
            .map_err(serde::de::Error::custom)
    }
}

/// Selects one of the built-in families.
///
/// # Examples
///
/// ```
/// use ipvx::{AddressFamily, FamilyKind, IPV6};
///
/// let kind: FamilyKind = "IPv6".parse().unwrap();
/// assert_eq!(kind, FamilyKind::Ipv6);
/// assert_eq!(FamilyKind::try_from(IPV6).unwrap().family(), AddressFamily::IPV6);
/// assert!(FamilyKind::try_from(0u32).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyKind {
    /// IPv4 dotted-decimal
    Ipv4,
    /// IPv6 colon-hex
    Ipv6,
}

impl FamilyKind {
    /// Resolves a numeric selector ([`IPV4`] or [`IPV6`]).
    #[must_use]
    pub const fn from_selector(selector: u32) -> Option<Self> {
        match selector {
            IPV4 => Some(Self::Ipv4),
            IPV6 => Some(Self::Ipv6),
            _ => None,
        }
    }

    /// Returns the numeric selector for this kind.
    #[must_use]
    pub const fn selector(self) -> u32 {
        match self {
            Self::Ipv4 => IPV4,
            Self::Ipv6 => IPV6,
        }
    }

    /// Returns the preset family for this kind.
    #[must_use]
    pub const fn family(self) -> AddressFamily {
        match self {
            Self::Ipv4 => AddressFamily::IPV4,
            Self::Ipv6 => AddressFamily::IPV6,
        }
    }

    /// Returns the lowercase family name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
        }
    }
}

impl fmt::Display for FamilyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FamilyKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ipv4") {
            Ok(Self::Ipv4)
        } else if s.eq_ignore_ascii_case("ipv6") {
            Ok(Self::Ipv6)
        } else {
            Err(ParseError::new(s, ParseErrorKind::UnknownFamily {
                selector: s.to_string(),
            }))
        }
    }
}

impl TryFrom<u32> for FamilyKind {
    type Error = ParseError;

    fn try_from(selector: u32) -> Result<Self, Self::Error> {
        Self::from_selector(selector).ok_or_else(|| {
            let selector = selector.to_string();
            ParseError::new(&selector, ParseErrorKind::UnknownFamily { selector: selector.clone() })
        })
    }
}

impl From<FamilyKind> for AddressFamily {
    fn from(kind: FamilyKind) -> Self {
        kind.family()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FamilyKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FamilyKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_preset() {
        let f = AddressFamily::IPV4;
        assert_eq!(f.delimiter(), '.');
        assert_eq!(f.numeric_base(), 10);
        assert_eq!(f.segment_bit_width(), 9);
        assert_eq!(f.field_count(), 4);
        assert_eq!(f.max_segment(), 255);
        assert!(f.strict_field_count());
        assert!(!f.pads_blank_segments());
    }

    #[test]
    fn ipv6_preset() {
        let f = AddressFamily::IPV6;
        assert_eq!(f.delimiter(), ':');
        assert_eq!(f.numeric_base(), 16);
        assert_eq!(f.segment_bit_width(), 17);
        assert_eq!(f.field_count(), 8);
        assert_eq!(f.max_segment(), 65535);
        assert!(!f.strict_field_count());
        assert!(f.pads_blank_segments());
    }

    #[test]
    fn selectors_resolve() {
        assert_eq!(FamilyKind::from_selector(IPV4), Some(FamilyKind::Ipv4));
        assert_eq!(FamilyKind::from_selector(IPV6), Some(FamilyKind::Ipv6));
        assert_eq!(FamilyKind::from_selector(0), None);
        assert_eq!(FamilyKind::from_selector(IPV4 | IPV6), None);
        assert_eq!(FamilyKind::Ipv6.selector(), 2);
    }

    #[test]
    fn unknown_selector_fails() {
        let err = FamilyKind::try_from(7u32).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownFamily {
            selector: "7".to_string()
        });
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("ipv4".parse::<FamilyKind>().unwrap(), FamilyKind::Ipv4);
        assert_eq!("IPV6".parse::<FamilyKind>().unwrap(), FamilyKind::Ipv6);
        assert!(matches!(
            "ipv5".parse::<FamilyKind>(),
            Err(ParseError {
                kind: ParseErrorKind::UnknownFamily { .. },
                ..
            })
        ));
    }

    #[test]
    fn kind_display_round_trips() {
        for kind in [FamilyKind::Ipv4, FamilyKind::Ipv6] {
            assert_eq!(kind.to_string().parse::<FamilyKind>().unwrap(), kind);
            assert_eq!(AddressFamily::from(kind), kind.family());
        }
    }
}
