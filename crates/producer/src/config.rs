//! Application configuration loaded from environment variables.

use std::net::SocketAddr;

use crate::error::ServerError;

const DEFAULT_BIND: &str = "0.0.0.0:8082";

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — listen address, either `host:port` or `:port` (default: `"0.0.0.0:8082"`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST")
                .ok()
                .filter(|h| !h.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BIND.to_string()),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Returns the bind address string.
    ///
    /// A bare `:port` listens on every interface.
    pub fn addr(&self) -> String {
        let host = self.host.trim();
        match host.strip_prefix(':') {
            Some(port) => format!("0.0.0.0:{port}"),
            None => host.to_string(),
        }
    }

    /// Resolves [`Config::addr`], looking up host names such as `localhost`.
    pub async fn resolve_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = self.addr();
        let mut resolved = match tokio::net::lookup_host(addr.clone()).await {
            Ok(resolved) => resolved,
            Err(source) => return Err(ServerError::InvalidAddress { addr, source }),
        };

        resolved.next().ok_or_else(|| ServerError::InvalidAddress {
            source: std::io::Error::other("host resolved to no addresses"),
            addr,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_BIND.to_string(),
            log_level: "info".to_string(),
        }
    }
}
