//! Configuration types for the ShipStation API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with ShipStation.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ShipStationConfig`]: The main configuration struct holding all SDK settings
//! - [`ShipStationConfigBuilder`]: A builder for constructing [`ShipStationConfig`] instances
//! - [`ApiKey`]: A validated API key newtype
//! - [`ApiSecret`]: A validated API secret newtype with masked debug output
//! - [`HostUrl`]: A validated API host URL override
//!
//! # Example
//!
//! ```rust
//! use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret};
//!
//! let config = ShipStationConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_secret(ApiSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiSecret, HostUrl};

use crate::error::ConfigError;

/// The production API base URI used when no host override is configured.
pub const DEFAULT_API_HOST: &str = "https://ssapi.shipstation.com";

/// Configuration for the ShipStation API SDK.
///
/// This struct holds all configuration needed for SDK operations: the API
/// credentials used for HTTP Basic authentication and optional overrides
/// for the API host and User-Agent header.
///
/// # Thread Safety
///
/// `ShipStationConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret, HostUrl};
///
/// let config = ShipStationConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .api_secret(ApiSecret::new("your-secret").unwrap())
///     .host(HostUrl::new("https://staging.example.com").unwrap())
///     .build()
///     .unwrap();
///
/// assert!(config.host().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct ShipStationConfig {
    api_key: ApiKey,
    api_secret: ApiSecret,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShipStationConfig {
    /// Creates a new builder for constructing a `ShipStationConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret};
    ///
    /// let config = ShipStationConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .api_secret(ApiSecret::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> ShipStationConfigBuilder {
        ShipStationConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API secret.
    #[must_use]
    pub const fn api_secret(&self) -> &ApiSecret {
        &self.api_secret
    }

    /// Returns the host URL override, if configured.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ShipStationConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShipStationConfig>();
};

/// Builder for constructing [`ShipStationConfig`] instances.
///
/// This builder provides a fluent API for configuring the SDK. Required fields
/// are `api_key` and `api_secret`. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `host`: `None` (requests go to the production API)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret};
///
/// let config = ShipStationConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .api_secret(ApiSecret::new("secret").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ShipStationConfigBuilder {
    api_key: Option<ApiKey>,
    api_secret: Option<ApiSecret>,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShipStationConfigBuilder {
    /// Creates a new builder with all fields unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the API secret (required).
    #[must_use]
    pub fn api_secret(mut self, api_secret: ApiSecret) -> Self {
        self.api_secret = Some(api_secret);
        self
    }

    /// Sets an API host override.
    ///
    /// Use this to point the client at a staging environment or a local
    /// mock server instead of the production API.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets a prefix for the User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `api_secret` was not set.
    pub fn build(self) -> Result<ShipStationConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let api_secret = self.api_secret.ok_or(ConfigError::MissingRequiredField {
            field: "api_secret",
        })?;

        Ok(ShipStationConfig {
            api_key,
            api_secret,
            host: self.host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> ApiKey {
        ApiKey::new("test-key").unwrap()
    }

    fn test_secret() -> ApiSecret {
        ApiSecret::new("test-secret").unwrap()
    }

    #[test]
    fn test_builder_with_required_fields_succeeds() {
        let config = ShipStationConfig::builder()
            .api_key(test_key())
            .api_secret(test_secret())
            .build()
            .unwrap();

        assert_eq!(config.api_key().as_ref(), "test-key");
        assert_eq!(config.api_secret().as_ref(), "test-secret");
        assert!(config.host().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_missing_api_key_fails() {
        let result = ShipStationConfig::builder().api_secret(test_secret()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_missing_api_secret_fails() {
        let result = ShipStationConfig::builder().api_key(test_key()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "api_secret"
            })
        ));
    }

    #[test]
    fn test_builder_with_host_override() {
        let config = ShipStationConfig::builder()
            .api_key(test_key())
            .api_secret(test_secret())
            .host(HostUrl::new("http://localhost:9000").unwrap())
            .build()
            .unwrap();

        assert_eq!(
            config.host().map(AsRef::as_ref),
            Some("http://localhost:9000")
        );
    }

    #[test]
    fn test_builder_with_user_agent_prefix() {
        let config = ShipStationConfig::builder()
            .api_key(test_key())
            .api_secret(test_secret())
            .user_agent_prefix("MyApp/2.1")
            .build()
            .unwrap();

        assert_eq!(config.user_agent_prefix(), Some("MyApp/2.1"));
    }

    #[test]
    fn test_config_debug_masks_secret() {
        let config = ShipStationConfig::builder()
            .api_key(test_key())
            .api_secret(test_secret())
            .build()
            .unwrap();

        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("test-secret"));
    }

    #[test]
    fn test_config_is_clone_send_sync() {
        fn assert_clone_send_sync<T: Clone + Send + Sync>() {}
        assert_clone_send_sync::<ShipStationConfig>();
    }
}
