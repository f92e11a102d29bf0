//! HTTP client types for ShipStation API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! authenticated requests to the ShipStation API. It handles request and
//! response processing and rate-limit header parsing.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT)
//! - [`DataType`]: Content types for request bodies
//! - [`rest::RestClient`]: Higher-level REST API client
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret};
//! use shipstation_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let config = ShipStationConfig::builder()
//!     .api_key(ApiKey::new("key").unwrap())
//!     .api_secret(ApiSecret::new("secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "stores")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};

// Re-export REST client types at the clients module level
pub use rest::{RestClient, RestError};
