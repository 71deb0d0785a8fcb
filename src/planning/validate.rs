//! Input validation for the planner pipeline.

use crate::error::{PlanError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ADDRESS_RE: Regex = Regex::new(r"^(\d{1,3}\.){3}\d{1,3}$").expect("Invalid Regex");
}

/// Check that a string has the dotted-quad shape `d.d.d.d` with 1-3 digit
/// groups.
///
/// This is a format check only. Octet values above 255 still pass; they
/// are caught later, when the network itself is built.
pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_RE.is_match(address)
}

/// Parse count text as a non-negative integer.
///
/// Accepts only non-empty, all-digit strings, so signed and fractional
/// forms are rejected before integer parsing.
pub fn parse_count(text: &str) -> Result<u64> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(PlanError::InvalidCount(text.to_string()));
    }
    text.parse::<u64>()
        .map_err(|_| PlanError::InvalidCount(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_address() {
        assert!(is_valid_address("192.168.1.1"));
        assert!(is_valid_address("1.2.3.4"));
        assert!(is_valid_address("10.0.0.255"));
        assert!(is_valid_address("091.001.010.100"));
    }

    #[test]
    fn test_is_valid_address_ignores_octet_range() {
        // Format check only: out-of-range octets are accepted here.
        assert!(is_valid_address("999.999.999.999"));
        assert!(is_valid_address("256.0.0.1"));
    }

    #[test]
    fn test_is_valid_address_rejects_malformed() {
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("1.2.3"));
        assert!(!is_valid_address("1.2.3.4.5"));
        assert!(!is_valid_address("1234.1.1.1"));
        assert!(!is_valid_address("1.2.3."));
        assert!(!is_valid_address(".1.2.3.4"));
        assert!(!is_valid_address("a.b.c.d"));
        assert!(!is_valid_address("1.2.3.-4"));
        assert!(!is_valid_address(" 1.2.3.4"));
        assert!(!is_valid_address("1.2.3.4 "));
        assert!(!is_valid_address("1,2,3,4"));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("0").unwrap(), 0);
        assert_eq!(parse_count("42").unwrap(), 42);
        assert_eq!(parse_count("007").unwrap(), 7);
        assert_eq!(parse_count("4294967296").unwrap(), 4294967296);
    }

    #[test]
    fn test_parse_count_rejects_non_digits() {
        assert!(parse_count("").is_err());
        assert!(parse_count("-3").is_err());
        assert!(parse_count("+3").is_err());
        assert!(parse_count("3.5").is_err());
        assert!(parse_count("abc").is_err());
        assert!(parse_count(" 5").is_err());
        assert!(parse_count("5 ").is_err());
    }

    #[test]
    fn test_parse_count_rejects_overflow() {
        // 20 digits, past u64::MAX
        assert!(parse_count("99999999999999999999").is_err());
    }
}
