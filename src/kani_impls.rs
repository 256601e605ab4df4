//! Kani proof harnesses for parser and comparator properties.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{AddressFamily, ParsedAddress, equal};

/// Characters that exercise every branch of the IPv6 segment parser.
const IPV6_CHARS: &[u8] = b"0123456789abcdefABCDEF:+- .x";

/// Characters that exercise every branch of the IPv4 segment parser.
const IPV4_CHARS: &[u8] = b"0123456789.+- :a";

/// Build a bounded string over `alphabet`.
fn arbitrary_text(alphabet: &[u8], max_len: usize) -> String {
    let len: usize = kani::any();
    let len = len % (max_len + 1);
    (0..len)
        .map(|_| {
            let idx: usize = kani::any();
            alphabet[idx % alphabet.len()] as char
        })
        .collect()
}

/// Build a bounded segment list with values no larger than `max`.
fn arbitrary_address(max: u64, max_len: usize) -> ParsedAddress {
    let len: usize = kani::any();
    let len = 1 + (len % max_len);
    let segments: Vec<u64> = (0..len)
        .map(|_| {
            let v: u64 = kani::any();
            v % (max + 1)
        })
        .collect();
    let text: String = (0..len).map(|i| if i == 0 { "x" } else { ":x" }).collect();
    ParsedAddress::new(&text, segments)
}

#[kani::proof]
#[kani::unwind(10)]
fn parse_ipv4_never_panics() {
    let text = arbitrary_text(IPV4_CHARS, 8);
    if let Ok(addr) = ParsedAddress::parse(&text, &AddressFamily::IPV4) {
        assert_eq!(addr.len(), 4);
        assert!(addr.segments().iter().all(|&v| v <= 0xff));
    }
}

#[kani::proof]
#[kani::unwind(10)]
fn parse_ipv6_never_panics() {
    let text = arbitrary_text(IPV6_CHARS, 8);
    if let Ok(addr) = ParsedAddress::parse(&text, &AddressFamily::IPV6) {
        assert!(!addr.is_empty() && addr.len() <= 8);
        assert!(addr.segments().iter().all(|&v| v <= 0xffff));
    }
}

#[kani::proof]
#[kani::unwind(6)]
fn equality_is_reflexive() {
    let a = arbitrary_address(0xffff, 4);
    assert!(equal(&a, Some(&a)));
}

#[kani::proof]
#[kani::unwind(6)]
fn equality_is_symmetric() {
    let a = arbitrary_address(3, 4);
    let b = arbitrary_address(3, 4);
    assert_eq!(equal(&a, Some(&b)), equal(&b, Some(&a)));
}
