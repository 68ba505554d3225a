//! Explicit session handed to every client and controller at construction.

use reqwest::Url;

use crate::{config::Config, error::config::ConfigError};

/// Connection details for the current signed-in user.
///
/// Replaces any process-wide auth singleton: whoever builds an
/// [`ApiClient`](crate::api::ApiClient) passes the session in.
#[derive(Debug, Clone)]
pub struct Session {
    base_url: Url,
    auth_token: Option<String>,
}

impl Session {
    /// Creates a session against `api_url`, which must be an absolute http(s) URL.
    pub fn new(api_url: &str, auth_token: Option<String>) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidApiUrl {
            url: api_url.to_string(),
            reason,
        };

        let base_url = Url::parse(api_url).map_err(|e| invalid(e.to_string()))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", base_url.scheme())));
        }
        if base_url.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_string()));
        }

        Ok(Self {
            base_url,
            auth_token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Self::new(&config.api_url, config.api_token.clone())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Returns a copy of this session carrying `token`, e.g. after sign-in.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }
}
