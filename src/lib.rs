//! # ShipStation API Rust SDK
//!
//! A Rust SDK for the ShipStation API stores endpoints, providing type-safe
//! configuration, HTTP Basic authentication, and typed clients for managing
//! connected sales-channel integrations.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ShipStationConfig`] and [`ShipStationConfigBuilder`]
//! - Validated newtypes for API credentials and host values
//! - An async HTTP client with Basic authentication and rate-limit header parsing
//! - A typed [`rest::resources::Stores`] client for the `stores` resource family
//! - Semantic error types mapping HTTP failures to [`rest::ResourceError`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret, RestClient};
//!
//! // Create configuration using the builder pattern
//! let config = ShipStationConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_secret(ApiSecret::new("your-api-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config);
//! ```
//!
//! ## Working with Stores
//!
//! ```rust,ignore
//! use shipstation_api::rest::resources::{Stores, StoreListParams};
//!
//! let stores = Stores::new(&client);
//!
//! // Fetch one store
//! let store = stores.get(12345).await?;
//!
//! // List stores, including inactive ones
//! let listed = stores
//!     .list(Some(StoreListParams {
//!         show_inactive: true,
//!         marketplace_id: None,
//!     }))
//!     .await?;
//!
//! // Update a store (full-replace: send every field)
//! let mut store = stores.get(12345).await?;
//! store.store_name = Some("Renamed Storefront".to_string());
//! let updated = stores.update(12345, &store).await?;
//!
//! // Trigger refreshes and check progress
//! let accepted = stores.refresh_all().await?;
//! let status = stores.refresh_status(12345).await?;
//!
//! // Deactivate and reactivate
//! stores.deactivate(12345).await?;
//! stores.reactivate(12345).await?;
//! ```
//!
//! ## Error Handling
//!
//! Resource operations return [`rest::ResourceError`], which maps HTTP
//! failures to semantic variants: 404 to `NotFound`, other 4xx to
//! `ValidationFailed`, 5xx to `Service`, schema mismatches to `Decode`, and
//! network failures to `Http`. Nothing is retried or suppressed. A decoded
//! `success: false` from an action endpoint is a normal `Ok(false)` result,
//! not an error.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with an async runtime such as Tokio
//! - **Stateless calls**: Every operation is a single independent request

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    ApiKey, ApiSecret, HostUrl, ShipStationConfig, ShipStationConfigBuilder, DEFAULT_API_HOST,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, RateLimit, RestClient, RestError,
};

// Re-export resource layer types
pub use rest::ResourceError;
