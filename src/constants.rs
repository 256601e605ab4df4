//! Constants for the built-in address families.

/// Numeric selector for the IPv4 family.
pub const IPV4: u32 = 1;

/// Numeric selector for the IPv6 family.
pub const IPV6: u32 = 1 << 1;

/// Segment delimiter of IPv4 dotted-decimal text.
pub const IPV4_DELIMITER: char = '.';

/// Numeric base of an IPv4 segment.
pub const IPV4_BASE: u32 = 10;

/// Number of segments in a complete IPv4 address.
pub const IPV4_FIELD_COUNT: usize = 4;

/// Largest valid IPv4 segment value (inclusive).
pub const IPV4_MAX_SEGMENT: u64 = 0xff;

/// Parse width of an IPv4 segment: 8 value bits plus the sign bit.
pub const IPV4_SEGMENT_BIT_WIDTH: u32 = 8 + 1;

/// Segment delimiter of IPv6 colon-hex text.
pub const IPV6_DELIMITER: char = ':';

/// Numeric base of an IPv6 segment.
pub const IPV6_BASE: u32 = 16;

/// Number of segments in a complete IPv6 address.
pub const IPV6_FIELD_COUNT: usize = 8;

/// Largest valid IPv6 segment value (inclusive).
pub const IPV6_MAX_SEGMENT: u64 = 0xffff;

/// Parse width of an IPv6 segment: 16 value bits plus the sign bit.
pub const IPV6_SEGMENT_BIT_WIDTH: u32 = 16 + 1;

/// Smallest radix accepted for a custom family.
pub const MIN_NUMERIC_BASE: u32 = 2;

/// Largest radix accepted for a custom family.
pub const MAX_NUMERIC_BASE: u32 = 36;

/// Smallest segment bit width (one value bit plus the sign bit).
pub const MIN_SEGMENT_BIT_WIDTH: u32 = 2;

/// Largest segment bit width; segments are parsed as `i64`.
pub const MAX_SEGMENT_BIT_WIDTH: u32 = 64;
