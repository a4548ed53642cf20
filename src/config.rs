//! Server configuration from environment variables.

use std::env;
use std::net::SocketAddr;

use anyhow::Context;

/// Server configuration loaded from environment variables.
///
/// # Environment Variables
/// - `HOST` (optional, default: 0.0.0.0): Bind address
/// - `PORT` (optional, default: 8080): Bind port
///
/// The log level is read separately from `RUST_LOG` when tracing is
/// initialized in the binary. The CORS origin is a fixed allow-list entry in
/// the router and is deliberately not configurable here.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Load the configuration from the environment, falling back to
    /// defaults for unset or unparseable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    /// Resolve the bind address.
    ///
    /// # Errors
    /// Returns an error if host and port do not form a valid socket address.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_binds_all_interfaces() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn socket_addr_resolves() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };
        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn socket_addr_rejects_bad_host() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            port: 3000,
        };
        assert!(config.socket_addr().is_err());
    }
}
