//! Effective prefix resolution.
//!
//! An explicit CIDR wins when it is a well-formed value in 0-32. Anything
//! else falls back silently to the legacy class default inferred from the
//! address's first octet. The fallback is a heuristic default, not a
//! validity check; whether to warn about a discarded explicit value is the
//! caller's call.

use crate::models::MAX_LENGTH;

/// Parse explicit CIDR text, accepting integers in 0-32.
fn parse_cidr(text: &str) -> Option<u8> {
    text.trim().parse::<u8>().ok().filter(|v| *v <= MAX_LENGTH)
}

/// Check that CIDR text is an integer in 0-32.
pub fn is_valid_cidr(text: &str) -> bool {
    parse_cidr(text).is_some()
}

/// Legacy class-based default prefix for an address, from its first octet.
pub fn class_default(first_octet: u32) -> u8 {
    if first_octet < 128 {
        8 // Class A
    } else if first_octet < 192 {
        16 // Class B
    } else {
        24 // Class C
    }
}

/// Resolve the effective prefix length for `address`.
///
/// The explicit text wins when present and valid; otherwise the class
/// default is inferred, including when the explicit text was merely
/// malformed or out of range.
pub fn resolve_prefix(explicit: Option<&str>, address: &str) -> u8 {
    if let Some(prefix) = explicit.and_then(parse_cidr) {
        return prefix;
    }
    let first_octet = address
        .split('.')
        .next()
        .and_then(|octet| octet.parse::<u32>().ok())
        .unwrap_or(0);

    class_default(first_octet)
}
