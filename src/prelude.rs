//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use ipvx::prelude::*;
//!
//! let addr = parse("10.0.0.1", FamilyKind::Ipv4).unwrap();
//! assert!(equal(&addr, Some(&addr)));
//! ```

pub use crate::{
    // Core types
    AddressFamily, AddressFamilyBuilder, FamilyKind, ParsedAddress,
    // Operations
    equal, parse, parse_selector,
    // Errors
    BuilderError, ParseError, ParseErrorKind, SegmentError,
    // Selectors
    IPV4, IPV6,
};
