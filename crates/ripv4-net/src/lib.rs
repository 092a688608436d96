//! Network block metadata from CIDR notation
//!
//! Derives everything that describes one `address/bitmask` block:
//! - Mask and hostmask
//! - Broadcast address
//! - First and last usable host
//! - Usable host count
//!
//! # Examples
//!
//! ```
//! use ripv4_net::network;
//!
//! let net = network("192.168.0.0/24").unwrap();
//! assert_eq!(net.mask(), "255.255.255.0");
//! assert_eq!(net.broadcast(), "192.168.0.255");
//! assert_eq!(net.first(), "192.168.0.1");
//! assert_eq!(net.last(), "192.168.0.254");
//! assert_eq!(net.size(), 254);
//! ```

use ripv4_core::{format_address, next, not, or, parse_address, prev, xor};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use ripv4_core::{FormatError, Result};

mod config;

pub use config::NetworkConfig;

/// Longest accepted block, `255.255.255.255/32`
pub const MAX_BLOCK_LEN: usize = 18;

/// Metadata for one CIDR block
///
/// `address` is kept exactly as given; it is not normalized to the
/// network base. Every other field is derived from it and the bitmask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInfo {
    address: String,
    bitmask: u8,
    mask: String,
    hostmask: String,
    broadcast: String,
    first: String,
    last: String,
    size: u32,
}

impl NetworkInfo {
    /// Address as given in the block
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Prefix length
    pub fn bitmask(&self) -> u8 {
        self.bitmask
    }

    /// Network mask
    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// Complement of the mask
    pub fn hostmask(&self) -> &str {
        &self.hostmask
    }

    /// Broadcast address
    pub fn broadcast(&self) -> &str {
        &self.broadcast
    }

    /// First usable host (network base + 1)
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Last usable host (broadcast - 1)
    pub fn last(&self) -> &str {
        &self.last
    }

    /// Usable host count
    ///
    /// Computed with wrapping `u32` arithmetic, so `/31` yields 0.
    pub fn size(&self) -> u32 {
        self.size
    }
}

impl fmt::Display for NetworkInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.bitmask)
    }
}

/// Derive block metadata using the default [`NetworkConfig`]
///
/// # Arguments
///
/// * `block` - CIDR string (e.g., "192.168.0.0/24")
///
/// # Examples
///
/// ```
/// use ripv4_net::network;
///
/// assert!(network("10.0.0.0/8").is_ok());
/// assert!(network("1.2.3.4").is_err());
/// assert!(network("1.2.3.4/32").is_err());
/// ```
pub fn network(block: &str) -> Result<NetworkInfo> {
    network_with(block, &NetworkConfig::default())
}

/// Derive block metadata
///
/// Each field is computed from the ones before it, and the first failure
/// is returned unchanged.
///
/// ```
/// use ripv4_net::{network_with, NetworkConfig};
///
/// let net = network_with("10.1.2.3/32", &NetworkConfig::with_host_block()).unwrap();
/// assert_eq!(net.mask(), "255.255.255.255");
/// assert_eq!(net.broadcast(), "10.1.2.3");
/// ```
pub fn network_with(block: &str, config: &NetworkConfig) -> Result<NetworkInfo> {
    if block.len() > MAX_BLOCK_LEN {
        return Err(FormatError::TooLong {
            len: block.len(),
            max: MAX_BLOCK_LEN,
        });
    }

    let parts: Vec<&str> = block.split('/').collect();
    if parts.len() != 2 {
        return Err(FormatError::InvalidBlock(block.to_string()));
    }

    let address = parts[0];
    let bitmask = parse_bitmask(parts[1], config)?;
    if bitmask == 32 {
        tracing::debug!(block, "accepting /32 host block");
    }

    let mask = format_address(prefix_mask(bitmask));
    let hostmask = not(&mask)?;
    let broadcast = or(address, &hostmask)?;
    let first = next(&xor(&hostmask, &broadcast)?)?;
    let last = prev(&broadcast)?;
    let size = parse_address(&last)?
        .wrapping_sub(parse_address(&first)?)
        .wrapping_add(1);

    tracing::trace!(block, %mask, %broadcast, %first, %last, size, "derived network");

    Ok(NetworkInfo {
        address: address.to_string(),
        bitmask,
        mask,
        hostmask,
        broadcast,
        first,
        last,
        size,
    })
}

fn parse_bitmask(field: &str, config: &NetworkConfig) -> Result<u8> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::InvalidBitmask(field.to_string()));
    }
    let bitmask: u64 = field
        .parse()
        .map_err(|_| FormatError::InvalidBitmask(field.to_string()))?;

    let max = config.max_bitmask();
    if bitmask > max as u64 {
        return Err(FormatError::BitmaskOutOfRange { bitmask, max });
    }

    Ok(bitmask as u8)
}

/// Top `bitmask` bits set, the rest clear
fn prefix_mask(bitmask: u8) -> u32 {
    // u32 >> 32 overflows
    if bitmask == 0 {
        0
    } else {
        u32::MAX << (32 - bitmask)
    }
}
