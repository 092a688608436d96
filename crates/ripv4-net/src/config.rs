//! Block parsing configuration

use serde::{Deserialize, Serialize};

/// Options for [`network_with`](crate::network_with)
///
/// Defaults reject `/32`, matching the established bitmask range of 0-31.
///
/// # Examples
///
/// ```
/// use ripv4_net::NetworkConfig;
///
/// let config: NetworkConfig = serde_json::from_str(r#"{"allow_host_block":true}"#).unwrap();
/// assert_eq!(config.max_bitmask(), 32);
/// assert_eq!(NetworkConfig::default().max_bitmask(), 31);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Accept single-host `/32` blocks
    pub allow_host_block: bool,
}

impl NetworkConfig {
    /// Config that accepts `/32`
    pub fn with_host_block() -> Self {
        Self {
            allow_host_block: true,
        }
    }

    /// Largest bitmask accepted under this config
    pub fn max_bitmask(&self) -> u8 {
        if self.allow_host_block {
            32
        } else {
            31
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NetworkConfig::default();
        assert!(!config.allow_host_block);
        assert_eq!(config.max_bitmask(), 31);
    }

    #[test]
    fn test_host_block_config() {
        assert_eq!(NetworkConfig::with_host_block().max_bitmask(), 32);
    }

    #[test]
    fn test_config_deserialization() {
        let config: NetworkConfig = serde_json::from_str("{}").expect("deserialization failed");
        assert_eq!(config, NetworkConfig::default());

        let config: NetworkConfig =
            serde_json::from_str(r#"{"allow_host_block":true}"#).expect("deserialization failed");
        assert!(config.allow_host_block);
    }
}
