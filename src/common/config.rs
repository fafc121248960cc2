//! # Configuration Utilities
//!
//! TOML configuration shared by the client and server binaries. Both
//! roles need the same two values, an IPv4 literal and a port: the
//! address to bind (server) or the remote target (client).

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

/// Load a TOML configuration file and deserialize it into the specified
/// type.
pub fn load_config<T>(path: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Top-level configuration for either binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub endpoint: EndpointInfo,
}

/// The endpoint address table.
///
/// The port is carried as `u32` so out-of-range values in a config file
/// survive parsing and are rejected by validation with a proper
/// diagnostic instead of a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointInfo {
    /// Dotted-decimal IPv4 literal (e.g. "127.0.0.1")
    pub address: String,
    /// Port in the range 1-65535
    pub port: u32,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointInfo {
                address: "127.0.0.1".to_string(),
                port: 8080,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_points_at_local_8080() {
        let config = EndpointConfig::default();
        assert_eq!(config.endpoint.address, "127.0.0.1");
        assert_eq!(config.endpoint.port, 8080);
    }

    #[test]
    fn loads_an_endpoint_table_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[endpoint]\naddress = \"10.0.0.7\"\nport = 9999").unwrap();

        let config: EndpointConfig = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.endpoint.address, "10.0.0.7");
        assert_eq!(config.endpoint.port, 9999);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_config::<EndpointConfig>("config/does-not-exist.toml").is_err());
    }
}
