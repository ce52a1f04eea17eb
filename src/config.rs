//! Client configuration resolved at build time.
//!
//! The wasm bundle has no process environment at runtime, so values are read
//! with `option_env!` when the crate is compiled and validated on startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";

/// Errors produced while validating configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The API base URL is neither empty nor an absolute http(s) URL.
    #[error("invalid AUTH_APP_API_BASE_URL: {0}")]
    InvalidBaseUrl(String),

    /// The storage key for the session token is blank.
    #[error("AUTH_APP_TOKEN_KEY must not be empty")]
    EmptyStorageKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin the `/api/*` paths are appended to. Empty means same origin.
    pub api_base_url: String,
    /// `localStorage` key holding the raw session token.
    pub token_storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build typed config from variables captured at compile time.
    ///
    /// Optional:
    /// - `AUTH_APP_API_BASE_URL`: default `http://localhost:3001`
    /// - `AUTH_APP_TOKEN_KEY`: default `token`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either value fails validation.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("AUTH_APP_API_BASE_URL"), option_env!("AUTH_APP_TOKEN_KEY"))
    }

    /// Like [`ClientConfig::from_build_env`], but logs and falls back to
    /// defaults instead of failing.
    pub fn resolve() -> Self {
        Self::from_build_env().unwrap_or_else(|e| {
            log::warn!("config: {e}; using defaults");
            Self::default()
        })
    }

    /// Validate raw values. `None` selects the default for that field.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either value fails validation.
    pub fn from_values(api_base_url: Option<&str>, token_storage_key: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = parse_base_url(api_base_url.unwrap_or(DEFAULT_API_BASE_URL))?;
        let token_storage_key = token_storage_key.unwrap_or(DEFAULT_TOKEN_STORAGE_KEY).trim();
        if token_storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(Self { api_base_url, token_storage_key: token_storage_key.to_owned() })
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() || trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_owned())
    } else {
        Err(ConfigError::InvalidBaseUrl(raw.to_owned()))
    }
}
