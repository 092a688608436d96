//! Bitwise and arithmetic operations on address strings
//!
//! Every function takes and returns dotted-decimal strings. Arithmetic is
//! done on the `u32` form and formatted once. Increment and decrement wrap
//! around the address space.

use crate::{format_address, parse_address, Result};

/// Bitwise complement of an address
///
/// ```
/// assert_eq!(ripv4_core::not("0.0.255.255").unwrap(), "255.255.0.0");
/// ```
pub fn not(addr: &str) -> Result<String> {
    Ok(format_address(!parse_address(addr)?))
}

/// Bitwise OR of two addresses
///
/// ```
/// assert_eq!(ripv4_core::or("0.0.1.1", "1.1.0.0").unwrap(), "1.1.1.1");
/// ```
pub fn or(a: &str, b: &str) -> Result<String> {
    let a = parse_address(a)?;
    let b = parse_address(b)?;
    Ok(format_address(a | b))
}

/// Bitwise XOR of two addresses
///
/// ```
/// assert_eq!(
///     ripv4_core::xor("0.255.255.255", "192.255.255.255").unwrap(),
///     "192.0.0.0"
/// );
/// ```
pub fn xor(a: &str, b: &str) -> Result<String> {
    let a = parse_address(a)?;
    let b = parse_address(b)?;
    Ok(format_address(a ^ b))
}

/// The address after `addr`
///
/// ```
/// assert_eq!(ripv4_core::next("192.168.0.1").unwrap(), "192.168.0.2");
/// ```
pub fn next(addr: &str) -> Result<String> {
    Ok(format_address(parse_address(addr)?.wrapping_add(1)))
}

/// The address before `addr`
///
/// ```
/// assert_eq!(ripv4_core::prev("192.168.0.1").unwrap(), "192.168.0.0");
/// ```
pub fn prev(addr: &str) -> Result<String> {
    Ok(format_address(parse_address(addr)?.wrapping_sub(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormatError;

    const SAMPLES: [&str; 6] = [
        "0.0.0.0",
        "1.2.3.4",
        "10.0.0.255",
        "172.16.254.1",
        "192.168.0.1",
        "255.255.255.255",
    ];

    #[test]
    fn test_not() {
        assert_eq!(not("0.0.255.255").unwrap(), "255.255.0.0");
        assert_eq!(not("0.0.0.0").unwrap(), "255.255.255.255");
        assert_eq!(not("255.255.255.0").unwrap(), "0.0.0.255");
    }

    #[test]
    fn test_not_involution() {
        for addr in SAMPLES {
            assert_eq!(not(&not(addr).unwrap()).unwrap(), addr);
        }
    }

    #[test]
    fn test_or() {
        assert_eq!(or("0.0.1.1", "1.1.0.0").unwrap(), "1.1.1.1");
        assert_eq!(or("192.168.0.0", "0.0.0.255").unwrap(), "192.168.0.255");
    }

    #[test]
    fn test_xor() {
        assert_eq!(xor("0.255.255.255", "192.255.255.255").unwrap(), "192.0.0.0");
        assert_eq!(xor("0.0.0.255", "192.168.0.255").unwrap(), "192.168.0.0");
    }

    #[test]
    fn test_or_xor_identities() {
        for a in SAMPLES {
            assert_eq!(or(a, a).unwrap(), a);
            assert_eq!(xor(a, a).unwrap(), "0.0.0.0");
            for b in SAMPLES {
                assert_eq!(or(a, b).unwrap(), or(b, a).unwrap());
                assert_eq!(xor(a, b).unwrap(), xor(b, a).unwrap());
            }
        }
    }

    #[test]
    fn test_next_prev() {
        assert_eq!(next("192.168.0.1").unwrap(), "192.168.0.2");
        assert_eq!(next("192.168.0.255").unwrap(), "192.168.1.0");
        assert_eq!(prev("192.168.0.1").unwrap(), "192.168.0.0");
        assert_eq!(prev("192.168.1.0").unwrap(), "192.168.0.255");
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(next("255.255.255.255").unwrap(), "0.0.0.0");
        assert_eq!(prev("0.0.0.0").unwrap(), "255.255.255.255");
    }

    #[test]
    fn test_errors_propagate() {
        assert_eq!(not("1.2.3"), Err(FormatError::FieldCount(3)));
        assert_eq!(next("a.b.c.d"), Err(FormatError::BadOctet("a".to_string())));
        assert!(prev("").is_err());
        assert!(or("1.2.3.4", "1.2.3.256").is_err());
        assert!(xor("1.2.3", "1.2.3.4").is_err());
    }

    #[test]
    fn test_left_operand_error_first() {
        assert_eq!(
            or("x.0.0.0", "1.2.3").unwrap_err(),
            FormatError::BadOctet("x".to_string())
        );
    }
}
