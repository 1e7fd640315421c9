//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CAFE_API_BASE_URL` - Base URL of the café backend REST API
//!
//! ## Optional
//! - `CAFE_STORAGE_PATH` - Path of the local persistence file
//!   (default: digital-cafe.json)
//! - `CAFE_REQUEST_TIMEOUT_SECS` - Per-request timeout in seconds
//!   (default: 30)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_STORAGE_PATH: &str = "digital-cafe.json";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client application configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API. Always ends with `/` so relative
    /// endpoint paths join onto it rather than replacing the last segment.
    pub api_base_url: Url,
    /// Where cart and session state is persisted between runs
    pub storage_path: PathBuf,
    /// Timeout applied to every backend request
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = parse_base_url(&get_required_env("CAFE_API_BASE_URL")?)?;
        let storage_path =
            PathBuf::from(get_env_or_default("CAFE_STORAGE_PATH", DEFAULT_STORAGE_PATH));
        let timeout_secs = get_env_or_default(
            "CAFE_REQUEST_TIMEOUT_SECS",
            &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("CAFE_REQUEST_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

        Ok(Self {
            api_base_url,
            storage_path,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Parse the base URL, normalizing to a trailing slash.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized)
        .map_err(|e| ConfigError::InvalidEnvVar("CAFE_API_BASE_URL".to_string(), e.to_string()))
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url_appends_trailing_slash() {
        let url = parse_base_url("http://localhost:8080/api").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/");
        // joining keeps the last path segment instead of replacing it
        assert_eq!(
            url.join("orders").unwrap().as_str(),
            "http://localhost:8080/api/orders"
        );
    }

    #[test]
    fn test_parse_base_url_keeps_existing_slash() {
        let url = parse_base_url("http://localhost:8080/api/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/");
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));
    }

    // env::set_var mutates process state, so everything env-related runs in
    // one sequential test.
    #[test]
    #[allow(unsafe_code)]
    fn test_from_env() {
        // SAFETY: tests in this module are the only writers of these vars
        unsafe {
            std::env::set_var("CAFE_API_BASE_URL", "http://localhost:8080/api");
            std::env::remove_var("CAFE_STORAGE_PATH");
            std::env::remove_var("CAFE_REQUEST_TIMEOUT_SECS");
        }
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_base_url.as_str(), "http://localhost:8080/api/");
        assert_eq!(config.storage_path, PathBuf::from(DEFAULT_STORAGE_PATH));
        assert_eq!(config.request_timeout, Duration::from_secs(30));

        // SAFETY: as above
        unsafe {
            std::env::set_var("CAFE_STORAGE_PATH", "/tmp/cafe-state.json");
            std::env::set_var("CAFE_REQUEST_TIMEOUT_SECS", "5");
        }
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.storage_path, PathBuf::from("/tmp/cafe-state.json"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }
}
