//! Configuration types for the back office client.
//!
//! # Overview
//!
//! - [`ClientConfig`]: The configuration struct passed to
//!   [`ResourceClient::new`](crate::ResourceClient::new)
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`BaseUrl`]: A validated API root URL
//!
//! There is no process-wide base URL: every client is built from an explicit
//! configuration value.
//!
//! # Example
//!
//! ```rust
//! use backoffice_client::{ClientConfig, BaseUrl};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("http://127.0.0.1:5000/api").unwrap())
//!     .user_agent_prefix("StoreFront/2.1")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "http://127.0.0.1:5000/api");
//! ```

mod newtypes;

pub use newtypes::BaseUrl;

use crate::error::ConfigError;

/// Base URL used by [`ClientConfig::local`] and as the `from_env` fallback.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// Environment variable read by [`ClientConfig::from_env`].
pub const BASE_URL_ENV: &str = "BACKOFFICE_API_URL";

/// Configuration for a [`ResourceClient`](crate::ResourceClient).
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Configuration pointing at the default local development server.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the default URL is statically valid.
    pub fn local() -> Result<Self, ConfigError> {
        Self::builder().base_url(BaseUrl::new(DEFAULT_BASE_URL)?).build()
    }

    /// Reads the base URL from `BACKOFFICE_API_URL`, falling back to
    /// [`DEFAULT_BASE_URL`] when the variable is unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the variable holds an invalid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        tracing::debug!("Using back office API at {}", raw);
        Self::builder().base_url(BaseUrl::new(raw)?).build()
    }

    /// Returns the API root URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// `base_url` is required; `user_agent_prefix` defaults to `None`.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API root URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        Ok(ClientConfig {
            base_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_base_url() {
        let result = ClientConfigBuilder::new().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_url" })
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let config = ClientConfig::builder()
            .base_url(BaseUrl::new("http://localhost:5000/api").unwrap())
            .build()
            .unwrap();

        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_local_uses_default_base_url() {
        let config = ClientConfig::local().unwrap();
        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_builder_with_user_agent_prefix() {
        let config = ClientConfig::builder()
            .base_url(BaseUrl::new("http://localhost:5000/api").unwrap())
            .user_agent_prefix("Kiosk/1.0")
            .build()
            .unwrap();

        assert_eq!(config.user_agent_prefix(), Some("Kiosk/1.0"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClientConfig>();
    }
}
