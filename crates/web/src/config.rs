//! Web server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `PHILAGRI_HOST` - Bind address (default: 127.0.0.1)
//! - `PHILAGRI_PORT` - Listen port (default: 3000)
//! - `PHILAGRI_BASE_URL` - Public URL (default: <http://localhost:3000>);
//!   an `https` URL marks cookies `Secure`
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate, 0.0 to 1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0 to 1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use url::Url;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Web application configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL
    pub base_url: Url,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    pub sentry_environment: Option<String>,
    pub sentry_sample_rate: f32,
    pub sentry_traces_sample_rate: f32,
}

impl WebConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let host = parse_var("PHILAGRI_HOST", &env_or("PHILAGRI_HOST", DEFAULT_HOST))?;
        let port = parse_var("PHILAGRI_PORT", &env_or("PHILAGRI_PORT", DEFAULT_PORT))?;
        let base_url: Url =
            parse_var("PHILAGRI_BASE_URL", &env_or("PHILAGRI_BASE_URL", DEFAULT_BASE_URL))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEnvVar(
                "PHILAGRI_BASE_URL".to_string(),
                format!("unsupported scheme {}", base_url.scheme()),
            ));
        }

        let sentry_sample_rate = parse_rate("SENTRY_SAMPLE_RATE", lookup("SENTRY_SAMPLE_RATE"), 1.0)?;
        let sentry_traces_sample_rate = parse_rate(
            "SENTRY_TRACES_SAMPLE_RATE",
            lookup("SENTRY_TRACES_SAMPLE_RATE"),
            0.0,
        )?;

        Ok(Self {
            host,
            port,
            base_url,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should carry the `Secure` flag.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.scheme() == "https"
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

fn parse_rate(key: &str, value: Option<String>, default: f32) -> Result<f32, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };
    let rate: f32 = parse_var(key, &value)?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("{rate} is outside 0.0..=1.0"),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<WebConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        WebConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.base_url.as_str(), "http://localhost:3000/");
        assert!(!config.is_secure());
        assert!(config.sentry_dsn.is_none());
        assert!((config.sentry_sample_rate - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PHILAGRI_HOST", "0.0.0.0"),
            ("PHILAGRI_PORT", "8080"),
            ("PHILAGRI_BASE_URL", "https://philagri.example"),
            ("SENTRY_TRACES_SAMPLE_RATE", "0.25"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert!(config.is_secure());
        assert!((config.sentry_traces_sample_rate - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("PHILAGRI_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "PHILAGRI_PORT"));
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(load(&[("PHILAGRI_BASE_URL", "not a url")]).is_err());
        assert!(load(&[("PHILAGRI_BASE_URL", "ftp://files.example")]).is_err());
    }

    #[test]
    fn test_sample_rate_out_of_range() {
        assert!(load(&[("SENTRY_SAMPLE_RATE", "1.5")]).is_err());
    }

    #[test]
    fn test_empty_dsn_is_ignored() {
        assert!(load(&[("SENTRY_DSN", "")]).unwrap().sentry_dsn.is_none());
    }
}
