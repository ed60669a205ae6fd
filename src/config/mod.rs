//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `TUNESCOUT_*` environment
//! variables. The API key has no default: the service refuses to start
//! without a shared secret.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;

/// Default catalog search base URL used when `TUNESCOUT_CATALOG_URL` is not set.
pub const DEFAULT_CATALOG_URL: &str = "https://saavn.dev/api";

/// Default oracle model id used when `TUNESCOUT_ORACLE_MODEL` is not set.
pub const DEFAULT_ORACLE_MODEL: &str = "gemini-2.0-flash";

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `TUNESCOUT_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Shared secret expected in the `x-api-key` header. Required.
    pub api_key: String,

    /// Catalog search service base URL.
    pub catalog_url: String,

    /// Model id the oracle calls are routed to.
    pub oracle_model: String,

    /// Per-search catalog request timeout, in seconds. Default: `10`.
    pub catalog_timeout_secs: u64,
}

impl Config {
    const ENV_PORT: &'static str = "TUNESCOUT_PORT";
    const ENV_BIND_ADDR: &'static str = "TUNESCOUT_BIND_ADDR";
    const ENV_API_KEY: &'static str = "TUNESCOUT_API_KEY";
    const ENV_CATALOG_URL: &'static str = "TUNESCOUT_CATALOG_URL";
    const ENV_ORACLE_MODEL: &'static str = "TUNESCOUT_ORACLE_MODEL";
    const ENV_CATALOG_TIMEOUT_SECS: &'static str = "TUNESCOUT_CATALOG_TIMEOUT_SECS";

    /// Loads configuration from environment variables (falling back to
    /// defaults for everything but the API key).
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = Self::parse_port_from_env(8080)?;
        let bind_addr =
            Self::parse_bind_addr_from_env(IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)))?;
        let api_key = env::var(Self::ENV_API_KEY).map_err(|_| ConfigError::MissingEnvVar {
            name: Self::ENV_API_KEY,
        })?;
        let catalog_url =
            Self::parse_string_from_env(Self::ENV_CATALOG_URL, DEFAULT_CATALOG_URL.to_string());
        let oracle_model =
            Self::parse_string_from_env(Self::ENV_ORACLE_MODEL, DEFAULT_ORACLE_MODEL.to_string());
        let catalog_timeout_secs = Self::parse_u64_from_env(Self::ENV_CATALOG_TIMEOUT_SECS, 10);

        Ok(Self {
            port,
            bind_addr,
            api_key,
            catalog_url,
            oracle_model,
            catalog_timeout_secs,
        })
    }

    /// Validates basic invariants that `from_env` cannot catch per-field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }

        if !self.catalog_url.starts_with("http://") && !self.catalog_url.starts_with("https://") {
            return Err(ConfigError::InvalidCatalogUrl {
                value: self.catalog_url.clone(),
            });
        }

        if self.catalog_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
