//! REST client implementation for the ShipStation API.
//!
//! This module provides the [`RestClient`] type for making REST API requests
//! with automatic path normalization.

use crate::clients::rest::RestError;
use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::ShipStationConfig;

/// REST API client for the ShipStation API.
///
/// Provides convenient methods (`get`, `post`, `put`) for making REST API
/// requests with automatic path normalization. Resource clients such as
/// [`Stores`](crate::rest::resources::Stores) borrow a `RestClient` and
/// translate typed operations into these verb calls.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret, RestClient};
///
/// let config = ShipStationConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .api_secret(ApiSecret::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// let client = RestClient::new(&config);
///
/// // GET request
/// let response = client.get("stores", None).await?;
///
/// // POST request with body
/// let body = serde_json::json!({"storeId": 42});
/// let response = client.post("stores/deactivate", body, None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the given configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret, RestClient};
    ///
    /// let config = ShipStationConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .api_secret(ApiSecret::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = RestClient::new(&config);
    /// ```
    #[must_use]
    pub fn new(config: &ShipStationConfig) -> Self {
        let http_client = HttpClient::new(config);

        tracing::debug!(base_uri = %http_client.base_uri(), "created REST client");

        Self { http_client }
    }

    /// Returns the base URI requests are issued against.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.http_client.base_uri()
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST API path (e.g., "stores", "stores/123")
    /// * `query` - Optional ordered query parameters
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid (e.g., empty).
    /// Returns [`RestError::Http`] for transport-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<Vec<(String, String)>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST API path (e.g., "stores/refreshstore")
    /// * `body` - The JSON body to send
    /// * `query` - Optional ordered query parameters
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for transport-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<Vec<(String, String)>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PUT request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST API path (e.g., "stores/123")
    /// * `body` - The JSON body to send
    /// * `query` - Optional ordered query parameters
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for transport-level errors.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<Vec<(String, String)>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<Vec<(String, String)>>,
    ) -> Result<HttpResponse, RestError> {
        // Normalize the path
        let normalized_path = normalize_path(path)?;

        // Build the request
        let mut builder = HttpRequest::builder(method, normalized_path);

        // Add body if present
        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        // Add query parameters if present
        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        // Build and send the request
        let request = builder.build().map_err(HttpError::from)?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Normalizes a REST API path.
///
/// This function:
/// 1. Strips leading `/` characters
/// 2. Returns an error for empty paths
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(normalize_path("stores")?, "stores");
/// assert_eq!(normalize_path("/stores")?, "stores");
/// assert_eq!(normalize_path("/stores/123")?, "stores/123");
/// ```
fn normalize_path(path: &str) -> Result<String, RestError> {
    // Strip leading slashes
    let path = path.trim_start_matches('/');

    // Check for empty path
    if path.is_empty() {
        return Err(RestError::InvalidPath {
            path: String::new(),
        });
    }

    Ok(path.to_string())
}
