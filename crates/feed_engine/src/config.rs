//! Remote API configuration.
//!
//! Built once at process start (normally via [`ApiConfig::from_env`]) and
//! passed by reference to [`crate::ApiClient`]. Nothing in the engine reads
//! the environment after that.

use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_CACHE_REVALIDATE_SECS: u64 = 3_600;

pub const BASE_URL_VAR: &str = "RICK_MORTY_API_URL";
pub const TIMEOUT_VAR: &str = "API_TIMEOUT";
pub const CACHE_REVALIDATE_VAR: &str = "CACHE_REVALIDATE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
    #[error("invalid base url {url:?}: {reason}")]
    BaseUrl { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Bound on each individual network call.
    pub timeout: Duration,
    /// How long a fetched response may be served from the local cache.
    /// Zero disables caching.
    pub cache_revalidate: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            cache_revalidate: Duration::from_secs(DEFAULT_CACHE_REVALIDATE_SECS),
        }
    }
}

impl ApiConfig {
    /// Reads `RICK_MORTY_API_URL`, `API_TIMEOUT` (ms) and `CACHE_REVALIDATE` (s).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ApiConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = match lookup(BASE_URL_VAR) {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => defaults.base_url,
        };
        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => Duration::from_millis(parse_number(TIMEOUT_VAR, &raw)?),
            None => defaults.timeout,
        };
        let cache_revalidate = match lookup(CACHE_REVALIDATE_VAR) {
            Some(raw) => Duration::from_secs(parse_number(CACHE_REVALIDATE_VAR, &raw)?),
            None => defaults.cache_revalidate,
        };

        Self::new(base_url, timeout, cache_revalidate)
    }

    /// Validates the base URL and strips trailing slashes.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        cache_revalidate: Duration,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|err| ConfigError::BaseUrl {
            url: base_url.clone(),
            reason: err.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::BaseUrl {
                url: base_url,
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }
        if timeout.is_zero() {
            return Err(ConfigError::Invalid {
                var: TIMEOUT_VAR,
                value: "0".to_string(),
            });
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            timeout,
            cache_revalidate,
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn parse_number(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: raw.to_string(),
    })
}
