//! Startup configuration
//!
//! Every tunable is read from the environment exactly once, when a service
//! boots, and then carried around as plain values. Each concern reads the
//! variables under its own prefix (`SERVER_`, `DATABASE_`, `JWT_`,
//! `PAGINATION_`).

use config::{Config, ConfigError, Environment};
use serde::{Deserialize, de::DeserializeOwned};

/// Deserialize the environment variables starting with `{prefix}_` into `T`.
///
/// `DATABASE_MAX_CONNECTIONS` becomes the key `max_connections` under the
/// `DATABASE` prefix. Values that look like numbers or booleans are parsed
/// as such.
pub fn load<T: DeserializeOwned>(prefix: &str) -> Result<T, ConfigError> {
    build(prefix, true)
}

/// Like [`load`], but every value starts out as the exact string found in
/// the environment. Use it for secrets, where `0123` must not become `123`.
/// Numeric fields still deserialize from their string form.
pub fn load_verbatim<T: DeserializeOwned>(prefix: &str) -> Result<T, ConfigError> {
    build(prefix, false)
}

fn build<T: DeserializeOwned>(prefix: &str, try_parsing: bool) -> Result<T, ConfigError> {
    Config::builder()
        .add_source(
            Environment::with_prefix(prefix)
                .prefix_separator("_")
                .try_parsing(try_parsing),
        )
        .build()?
        .try_deserialize()
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind, falls back to the service's own default
    pub port: Option<u16>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    ///
    /// # Environment Variables
    /// - `SERVER_HOST`: Interface to bind (default: "0.0.0.0")
    /// - `SERVER_PORT`: Port to bind (default: service specific)
    pub fn from_env() -> Result<Self, ConfigError> {
        load("SERVER")
    }

    /// Socket address to bind, using `default_port` when none was configured
    pub fn bind_address(&self, default_port: u16) -> String {
        format!("{}:{}", self.host, self.port.unwrap_or(default_port))
    }
}
