//! Backend endpoint configuration.

use std::time::Duration;
use url::Url;

use crate::error::{Error, Result};

pub const ENV_BACKEND_URL: &str = "FILM_BACKEND_URL";
pub const ENV_BACKEND_API_KEY: &str = "FILM_BACKEND_API_KEY";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the hosted backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://abc.supabase.co`. The REST prefix
    /// (`/rest/v1`) is appended per request.
    pub base_url: String,
    /// API key, passed through opaquely as `apikey` and bearer headers.
    pub api_key: String,
    pub timeout: Duration,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("invalid backend url '{base_url}': {e}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Read configuration from `FILM_BACKEND_URL` / `FILM_BACKEND_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(ENV_BACKEND_URL)
            .map_err(|_| Error::Config(format!("{ENV_BACKEND_URL} is not set")))?;
        let api_key = std::env::var(ENV_BACKEND_API_KEY)
            .map_err(|_| Error::Config(format!("{ENV_BACKEND_API_KEY} is not set")))?;
        Self::new(base_url, api_key)
    }

    /// REST endpoint for a table, e.g. `{base}/rest/v1/film_collection`.
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_url_appends_rest_prefix() {
        let cfg = BackendConfig::new("https://abc.supabase.co", "key").unwrap();
        assert_eq!(
            cfg.table_url("film_collection"),
            "https://abc.supabase.co/rest/v1/film_collection"
        );
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let cfg = BackendConfig::new("https://abc.supabase.co/", "key").unwrap();
        assert_eq!(cfg.base_url, "https://abc.supabase.co");
    }

    #[test]
    fn invalid_url_is_rejected() {
        let err = BackendConfig::new("not a url", "key").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn from_env_requires_both_variables() {
        // env is process-global, so all branches live in one test
        std::env::remove_var(ENV_BACKEND_URL);
        std::env::remove_var(ENV_BACKEND_API_KEY);
        let err = BackendConfig::from_env().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains(ENV_BACKEND_URL));

        std::env::set_var(ENV_BACKEND_URL, "https://abc.supabase.co");
        let err = BackendConfig::from_env().unwrap_err();
        assert!(err.to_string().contains(ENV_BACKEND_API_KEY));

        std::env::set_var(ENV_BACKEND_API_KEY, "service-key");
        let cfg = BackendConfig::from_env().unwrap();
        assert_eq!(cfg.base_url, "https://abc.supabase.co");
        assert_eq!(cfg.api_key, "service-key");

        std::env::remove_var(ENV_BACKEND_URL);
        std::env::remove_var(ENV_BACKEND_API_KEY);
    }
}
