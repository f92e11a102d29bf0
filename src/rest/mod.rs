//! REST resource layer for the ShipStation API.
//!
//! This module provides the typed resource clients built on top of
//! [`RestClient`](crate::clients::RestClient):
//!
//! - **[`resources::Stores`]**: the `stores` endpoint family (fetch, update,
//!   list, refresh, marketplace catalog, deactivate/reactivate)
//! - **[`ResourceError`]**: semantic error types for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret, RestClient};
//! use shipstation_api::rest::resources::Stores;
//!
//! let config = ShipStationConfig::builder()
//!     .api_key(ApiKey::new("key").unwrap())
//!     .api_secret(ApiSecret::new("secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config);
//! let stores = Stores::new(&client);
//!
//! let all = stores.list(None).await?;
//! println!("{} stores connected", all.len());
//! ```

mod errors;

pub mod resources;

pub use errors::ResourceError;
