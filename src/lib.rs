//! Parser and comparator for fixed-arity numeric address text.
//!
//! This crate turns IPv4 dotted-decimal and IPv6 colon-hex text into a
//! sequence of numeric segments, and compares two parsed addresses for
//! logical equality under positional zero-padding.
//!
//! # Quick Start
//!
//! ```rust
//! use ipvx::{FamilyKind, parse};
//!
//! let v4 = parse("192.168.1.100", FamilyKind::Ipv4).unwrap();
//! assert_eq!(v4.segments(), &[192, 168, 1, 100]);
//!
//! // Blank IPv6 fields read as zero, and missing trailing fields compare as zero.
//! let a = parse("2001:4860:4860::8888", FamilyKind::Ipv6).unwrap();
//! let b = parse("2001:4860:4860:0000:8888", FamilyKind::Ipv6).unwrap();
//! assert_eq!(a, b);
//! ```
//!
//! # Families
//!
//! | Family | Delimiter | Base | Fields | Segment range | Blank fields |
//! |--------|-----------|------|--------|---------------|--------------|
//! | IPv4 | `.` | 10 | exactly 4 | `0..=255` | rejected |
//! | IPv6 | `:` | 16 | 1 to 8 | `0..=65535` | read as zero |
//!
//! Surrounding whitespace in each field is ignored. Custom families for
//! other delimited numeric formats are built with [`AddressFamily::builder`].
//!
//! # Equality
//!
//! Two addresses are equal if their text is identical, or if their segments
//! match position by position with the longer side's extra segments all
//! zero. This approximates IPv6 `::` compression without locating the
//! omitted run, so `1::2` does not equal `1:0:0:0:0:0:0:2`.
//!
//! # Logging
//!
//! Parse outcomes are emitted through [`tracing`] at `trace` (accepted) and
//! `debug` (rejected) levels. No subscriber is installed by this crate.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod address;
mod builder;
mod compare;
mod constants;
mod error;
mod family;
#[cfg(kani)]
mod kani_impls;
mod parser;
pub mod prelude;

pub use address::ParsedAddress;
pub use builder::AddressFamilyBuilder;
pub use compare::equal;
pub use constants::{
    IPV4, IPV4_BASE, IPV4_DELIMITER, IPV4_FIELD_COUNT, IPV4_MAX_SEGMENT, IPV4_SEGMENT_BIT_WIDTH,
    IPV6, IPV6_BASE, IPV6_DELIMITER, IPV6_FIELD_COUNT, IPV6_MAX_SEGMENT, IPV6_SEGMENT_BIT_WIDTH,
};
pub use error::{BuilderError, ParseError, ParseErrorKind, SegmentError};
pub use family::{AddressFamily, FamilyKind};
pub use parser::{parse, parse_selector};
