//! Configuration types for the Flare SDK.
//!
//! - [`FlareConfig`]: The configuration struct holding all SDK settings
//! - [`FlareConfigBuilder`]: A builder for constructing [`FlareConfig`] instances
//! - [`BaseUrl`]: The validated URL of the Flare server
//!
//! # Example
//!
//! ```rust
//! use flare_sdk::{BaseUrl, FlareConfig};
//!
//! let config = FlareConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:1234").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::BaseUrl;

use crate::error::ConfigError;

/// Environment variable holding the server base URL.
pub const BASE_URL_VAR: &str = "FLARE_BASE_URL";

/// Environment variable holding an optional user agent prefix.
pub const USER_AGENT_PREFIX_VAR: &str = "FLARE_USER_AGENT_PREFIX";

/// Configuration for the Flare SDK.
///
/// `FlareConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct FlareConfig {
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl FlareConfig {
    /// Creates a new builder for constructing a `FlareConfig`.
    #[must_use]
    pub fn builder() -> FlareConfigBuilder {
        FlareConfigBuilder::new()
    }

    /// Loads the configuration from the process environment.
    ///
    /// Reads `FLARE_BASE_URL` (required) and `FLARE_USER_AGENT_PREFIX`
    /// (optional).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvironmentVariable`] if `FLARE_BASE_URL`
    /// is unset, or a [`BaseUrl`] validation error if its value is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(BASE_URL_VAR).ok_or(ConfigError::MissingEnvironmentVariable {
            name: BASE_URL_VAR,
        })?;

        let mut builder = Self::builder().base_url(BaseUrl::new(base_url)?);
        if let Some(prefix) = lookup(USER_AGENT_PREFIX_VAR).filter(|p| !p.trim().is_empty()) {
            builder = builder.user_agent_prefix(prefix);
        }
        builder.build()
    }

    /// Returns the base URL.
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

// Verify FlareConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FlareConfig>();
};

/// Builder for constructing [`FlareConfig`] instances.
///
/// `base_url` is required; `user_agent_prefix` defaults to `None`.
#[derive(Debug, Default)]
pub struct FlareConfigBuilder {
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl FlareConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL (required).
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

    /// Builds the [`FlareConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set.
    pub fn build(self) -> Result<FlareConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        Ok(FlareConfig {
            base_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
