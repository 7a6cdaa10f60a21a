//! Application configuration. API endpoint, timeouts.

use serde::Deserialize;

/// Default per-request timeout in seconds. Overridable via
/// MAIL_TRIAGE_REQUEST_TIMEOUT_SECS so a hung backend cannot wedge a
/// submission indefinitely.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Base URL of the classification API. Read from MAIL_TRIAGE_API_BASE_URL.
    /// When unset, the mock classifier is used.
    pub api_base_url: Option<String>,

    /// Per-request timeout in seconds. Read from MAIL_TRIAGE_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("MAIL_TRIAGE"));
        if let Ok(path) = std::env::var("MAIL_TRIAGE_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the API base URL if configured. Reads from config or
    /// MAIL_TRIAGE_API_BASE_URL env.
    pub fn api_base_url(&self) -> Option<String> {
        self.api_base_url
            .clone()
            .or_else(|| std::env::var("MAIL_TRIAGE_API_BASE_URL").ok())
    }

    /// Returns true if a real backend is configured (base URL present).
    pub fn is_api_configured(&self) -> bool {
        self.api_base_url().is_some()
    }

    /// Returns the request timeout in seconds. Defaults to 30 if unset.
    pub fn request_timeout_secs_or_default(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_defaults_when_unset() {
        let cfg = AppConfig::default();
        assert_eq!(
            cfg.request_timeout_secs_or_default(),
            DEFAULT_REQUEST_TIMEOUT_SECS
        );

        let cfg = AppConfig {
            api_base_url: None,
            request_timeout_secs: Some(5),
        };
        assert_eq!(cfg.request_timeout_secs_or_default(), 5);
    }
}
