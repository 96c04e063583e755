//! API endpoint configuration.
//!
//! One value: the base URL of the notes API. Native builds read `API_BASE_URL`
//! from the environment (after loading a `.env` file if present). Browser builds
//! have no process environment, so the value is captured when the wasm bundle is
//! compiled. Both fall back to [`DEFAULT_API_BASE_URL`].

use url::Url;

use crate::errors::ConfigError;

pub const API_BASE_URL_VAR: &str = "API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Where the notes API lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: Url,
}

impl ApiConfig {
    /// Parse and validate a base URL. Trailing slashes are insignificant.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let url = Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(Self { base_url: url }),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }

    /// Load from `API_BASE_URL`, defaulting to [`DEFAULT_API_BASE_URL`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(&base_url_from_env())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_BASE_URL).expect("default API base URL is valid"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn base_url_from_env() -> String {
    dotenvy::dotenv().ok();
    std::env::var(API_BASE_URL_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

#[cfg(target_arch = "wasm32")]
fn base_url_from_env() -> String {
    option_env!("API_BASE_URL")
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .to_string()
}
