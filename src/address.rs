//! Parsed address type.

use std::fmt;

/// A validated address: the original text plus its numeric segments.
///
/// A `ParsedAddress` carries no reference to the family that produced it,
/// so addresses from different families can be compared directly (such
/// comparisons are usually false).
///
/// Equality follows positional zero-padding: a shorter segment sequence
/// compares as if extended with trailing zeros. That relation is reflexive
/// and symmetric but not transitive, so the type implements `PartialEq` only.
///
/// # Examples
///
/// ```
/// use ipvx::{AddressFamily, ParsedAddress};
///
/// let a = ParsedAddress::parse("2001:4860:4860::8888", &AddressFamily::IPV6).unwrap();
/// let b = ParsedAddress::parse("2001:4860:4860:0000:8888", &AddressFamily::IPV6).unwrap();
/// assert_eq!(a.segments(), &[0x2001, 0x4860, 0x4860, 0, 0x8888]);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParsedAddress {
    /// Exact input text
    text: String,
    segments: Vec<u64>,
}

impl ParsedAddress {
    pub(crate) fn new(text: &str, segments: Vec<u64>) -> Self {
        Self {
            text: text.to_string(),
            segments,
        }
    }

    /// Returns the exact text the address was parsed from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the segment values in order.
    #[must_use]
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    /// Returns the segment at `index`, if present.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<u64> {
        self.segments.get(index).copied()
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if there are no segments; never the case for a parsed address.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for ParsedAddress {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::AddressFamily;

    #[test]
    fn accessors() {
        let addr = ParsedAddress::parse("10.0.0.1", &AddressFamily::IPV4).unwrap();
        assert_eq!(addr.text(), "10.0.0.1");
        assert_eq!(addr.len(), 4);
        assert!(!addr.is_empty());
        assert_eq!(addr.segment(3), Some(1));
        assert_eq!(addr.segment(4), None);
    }

    #[test]
    fn display_is_original_text() {
        let text = "  fe80 ::1";
        let addr = ParsedAddress::parse(text, &AddressFamily::IPV6).unwrap();
        assert_eq!(addr.to_string(), text);
        assert_eq!(addr.as_ref(), text);
    }
}
