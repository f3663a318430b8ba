//! ==============================================================================
//! config.rs - client configuration
//! ==============================================================================
//!
//! purpose:
//!     the backend address and log level. both are fixed at compile time:
//!     the dashboard runs in the browser, so there is no process environment
//!     to read at startup. set PLAYGROUND_API_BASE / PLAYGROUND_LOG when
//!     building to override the defaults.
//!
//! ==============================================================================

use log::LevelFilter;
use url::Url;

use crate::error::ClientError;

/// default rate-limited api deployment
pub const DEFAULT_API_BASE: &str = "https://rate-limiter-pomz.onrender.com/api";

/// path receiving rate limit configuration
pub const CONFIGURE_PATH: &str = "/urls";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// base address without trailing slash
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base: String = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            log_level: LevelFilter::Info,
        }
    }

    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// configuration baked in by the build
    pub fn from_build_env() -> Self {
        let base = option_env!("PLAYGROUND_API_BASE").unwrap_or(DEFAULT_API_BASE);
        let level = option_env!("PLAYGROUND_LOG")
            .and_then(|v| v.parse().ok())
            .unwrap_or(LevelFilter::Info);
        Self::new(base).with_log_level(level)
    }

    /// `{api_base}{path}` as a validated url
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        let raw = format!("{}{}", self.api_base, path);
        Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{} ({})", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("http://localhost:3000/api/");
        assert_eq!(config.api_base, "http://localhost:3000/api");
    }

    #[test]
    fn test_endpoint_joins_path() {
        let config = ClientConfig::default();
        let url = config.endpoint(CONFIGURE_PATH).unwrap();
        assert_eq!(url.as_str(), "https://rate-limiter-pomz.onrender.com/api/urls");
    }

    #[test]
    fn test_bad_base_is_reported() {
        let config = ClientConfig::new("not a url");
        assert!(matches!(config.endpoint("/trivia"), Err(ClientError::InvalidUrl(_))));
    }
}
