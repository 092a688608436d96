//! Core types and conversions for RIPv4 (Rust IPv4 utilities)
//!
//! This crate provides the foundations used throughout the RIPv4 workspace:
//! - [`parse_address`] / [`format_address`] - dotted-decimal <-> `u32`
//! - [`Ipv4`] - address value type
//! - [`FormatError`] - the single error type
//! - [`ops`] - NOT/OR/XOR and increment/decrement on address strings
//!
//! ```
//! use ripv4_core::{format_address, parse_address};
//!
//! assert_eq!(parse_address("192.168.0.1").unwrap(), 3232235521);
//! assert_eq!(format_address(3232235521), "192.168.0.1");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod ops;

pub use ops::{next, not, or, prev, xor};

/// Longest dotted-decimal address, `255.255.255.255`
pub const MAX_ADDRESS_LEN: usize = 15;

/// Error types for address and block parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Input longer than any valid form
    #[error("Input too long: {len} bytes (max {max})")]
    TooLong { len: usize, max: usize },

    /// Address did not have exactly four fields
    #[error("Requires 4 octets, got {0}")]
    FieldCount(usize),

    /// Field was not a decimal number in 0-255
    #[error("Bad octet: {0:?}")]
    BadOctet(String),

    /// Block was not of the form address/bitmask
    #[error("Invalid block: {0:?} (expected x.x.x.x/bitmask)")]
    InvalidBlock(String),

    /// Bitmask was not a decimal number
    #[error("Invalid bitmask: {0:?}")]
    InvalidBitmask(String),

    /// Bitmask outside the accepted range
    #[error("Bitmask out of range: {bitmask} (must be 0-{max})")]
    BitmaskOutOfRange { bitmask: u64, max: u8 },
}

/// Result type alias for RIPv4 operations
pub type Result<T> = std::result::Result<T, FormatError>;

/// Parse a dotted-decimal address into its `u32` value
///
/// Octets are packed big-endian. Each field must be plain ASCII digits
/// in 0-255; signs and surrounding whitespace are rejected.
///
/// # Examples
///
/// ```
/// use ripv4_core::parse_address;
///
/// assert_eq!(parse_address("10.0.0.1").unwrap(), 0x0A000001);
/// assert!(parse_address("1.2.3").is_err());
/// ```
pub fn parse_address(addr: &str) -> Result<u32> {
    if addr.len() > MAX_ADDRESS_LEN {
        return Err(FormatError::TooLong {
            len: addr.len(),
            max: MAX_ADDRESS_LEN,
        });
    }

    let octets: Vec<&str> = addr.split('.').collect();
    if octets.len() != 4 {
        return Err(FormatError::FieldCount(octets.len()));
    }

    let mut result = 0u32;
    for (i, octet_str) in octets.iter().enumerate() {
        result |= (parse_octet(octet_str)? as u32) << (24 - i * 8);
    }

    Ok(result)
}

fn parse_octet(field: &str) -> Result<u8> {
    // u8::from_str would accept a leading '+'
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::BadOctet(field.to_string()));
    }
    field
        .parse()
        .map_err(|_| FormatError::BadOctet(field.to_string()))
}

/// Format a `u32` as a dotted-decimal address
///
/// ```
/// use ripv4_core::format_address;
///
/// assert_eq!(format_address(0), "0.0.0.0");
/// assert_eq!(format_address(u32::MAX), "255.255.255.255");
/// ```
pub fn format_address(addr: u32) -> String {
    Ipv4(addr).to_string()
}

/// IPv4 address value
///
/// Thin wrapper over the `u32` form with dotted-decimal `Display` and
/// `FromStr`.
///
/// # Examples
///
/// ```
/// use ripv4_core::Ipv4;
///
/// let ip: Ipv4 = "192.168.0.1".parse().unwrap();
/// assert_eq!(ip, Ipv4(0xC0A80001));
/// assert_eq!(ip.to_string(), "192.168.0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ipv4(pub u32);

impl Ipv4 {
    /// The four octets, most significant first
    pub fn octets(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

impl FromStr for Ipv4 {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        parse_address(s).map(Ipv4)
    }
}

impl From<u32> for Ipv4 {
    fn from(value: u32) -> Self {
        Ipv4(value)
    }
}

impl From<Ipv4> for u32 {
    fn from(value: Ipv4) -> Self {
        value.0
    }
}
