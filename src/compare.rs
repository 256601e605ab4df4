//! Positional equality between parsed addresses.
//!
//! Missing trailing segments compare as zero, so an abbreviated address
//! equals its zero-padded full form. This is not RFC 4291 `::` expansion:
//! the comparator does not know where an omitted run of zeros sat, only
//! that positions past the shorter sequence must be zero.

use tracing::trace;

use crate::address::ParsedAddress;

/// Returns true if `a` and `b` denote the same address under positional
/// zero-padding. An absent `b` is never equal.
///
/// # Examples
///
/// ```
/// use ipvx::{FamilyKind, equal, parse};
///
/// let short = parse("fdfe::0ffe", FamilyKind::Ipv6).unwrap();
/// let long = parse("fdfe::0ffe::", FamilyKind::Ipv6).unwrap();
/// assert!(equal(&short, Some(&long)));
/// assert!(!equal(&short, None));
/// ```
#[must_use]
pub fn equal(a: &ParsedAddress, b: Option<&ParsedAddress>) -> bool {
    let Some(b) = b else {
        return false;
    };

    if a.text() == b.text() {
        trace!(text = a.text(), "identical address text");
        return true;
    }

    let (lhs, rhs) = (a.segments(), b.segments());

    for (i, &v) in lhs.iter().enumerate() {
        let matches = match rhs.get(i) {
            Some(&w) => v == w,
            None => v == 0,
        };
        if !matches {
            trace!(lhs = a.text(), rhs = b.text(), index = i, "segment mismatch");
            return false;
        }
    }

    // Only runs when `b` is the longer side.
    if let Some(i) = rhs.iter().skip(lhs.len()).position(|&w| w != 0) {
        trace!(lhs = a.text(), rhs = b.text(), index = lhs.len() + i, "segment mismatch");
        return false;
    }

    true
}

impl ParsedAddress {
    /// Returns true if `other` is present and equal under positional zero-padding.
    ///
    /// See [`equal`].
    #[must_use]
    pub fn equals(&self, other: Option<&Self>) -> bool {
        equal(self, other)
    }
}

impl PartialEq for ParsedAddress {
    fn eq(&self, other: &Self) -> bool {
        equal(self, Some(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::AddressFamily;

    fn v4(text: &str) -> ParsedAddress {
        ParsedAddress::parse(text, &AddressFamily::IPV4).unwrap()
    }

    fn v6(text: &str) -> ParsedAddress {
        ParsedAddress::parse(text, &AddressFamily::IPV6).unwrap()
    }

    #[test]
    fn absent_is_unequal() {
        assert!(!v4("8.8.8.8").equals(None));
    }

    #[test]
    fn reflexive() {
        let a = v6("2001:4860:4860::8888");
        assert!(a.equals(Some(&a)));
        assert_eq!(a, a.clone());
    }

    #[test]
    fn ipv4_leading_zeros_equal() {
        let pairs = [
            ("10.0.0.0", "0000010.0.00000.0"),
            ("192.168.0.10", "0192.0168.0.00010"),
            ("8.8.8.8", "0008.0008.08.8"),
            ("8.8.4.4", "000008.000008.000004.000004"),
        ];
        for (first, last) in pairs {
            assert_eq!(v4(first), v4(last), "{first} vs {last}");
        }
    }

    #[test]
    fn ipv4_mismatch() {
        let pairs = [
            ("192.168.127.83", "129.168.127.83"),
            ("8.8.8.8", "0080.0008.08.80"),
            ("8.08.04.004", "08.08.04.040"),
        ];
        for (first, last) in pairs {
            assert_ne!(v4(first), v4(last), "{first} vs {last}");
        }
    }

    #[test]
    fn ipv6_padding_equal() {
        let pairs = [
            (
                "fce6:d1ad:ca44:9625:e589:3806:248:8591",
                "fce6:d1ad:ca44:9625:e589:3806:0248:8591",
            ),
            ("2001:0DBB:AC10:FE01:0000:0000:0000:0000", "002001:0DBB:AC10:00FE01"),
            ("2001:4860:4860::8888", "2001:4860:4860:0000:8888"),
            ("2001:4860:4860::8844", "2001:4860:4860:0000:8844"),
            ("dfe::", "0dfe:0000:0000:0000:0000:0000:0000:0000"),
            ("fdfe::0ffe", "fdfe::0ffe::"),
            ("2001::eef1", "2001::eef1::"),
        ];
        for (first, last) in pairs {
            assert_eq!(v6(first), v6(last), "{first} vs {last}");
            assert_eq!(v6(last), v6(first), "{last} vs {first}");
        }
    }

    #[test]
    fn ipv6_mismatch() {
        let pairs = [
            (
                "fce6:d1ad:ca44:e589:3806:9625:248:8591",
                "fce6:d1ad:ca44:9625:e589:3806:0248:8591",
            ),
            ("2001:0DBB:AC10:FE01:0000:0000:0000", "002001:0000:0DBB:AC10:00FE01"),
        ];
        for (first, last) in pairs {
            assert_ne!(v6(first), v6(last), "{first} vs {last}");
            assert_ne!(v6(last), v6(first), "{last} vs {first}");
        }
    }

    #[test]
    fn longer_side_nonzero_tail_is_unequal() {
        assert_ne!(v6("1:2"), v6("1:2:0:3"));
        assert_ne!(v6("1:2:0:3"), v6("1:2"));
    }

    #[test]
    fn zero_run_position_is_not_tracked() {
        // RFC 4291 reads "1::2" as 1:0:0:0:0:0:0:2; positional padding does not.
        assert_ne!(v6("1::2"), v6("1:0:0:0:0:0:0:2"));
    }

    #[test]
    fn families_can_be_mixed() {
        // Same segment values from different families compare equal.
        assert_eq!(v4("1.2.3.4"), v6("1:2:3:4"));
        assert_ne!(v4("10.0.0.1"), v6("10:0:0:1"));
    }
}
