//! HTTP client for ShipStation API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the ShipStation API.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{ShipStationConfig, DEFAULT_API_HOST};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the ShipStation API.
///
/// The client handles:
/// - Base URI selection (production host or configured override)
/// - Default headers including User-Agent and HTTP Basic authentication
/// - Request validation and response parsing
///
/// The client performs no retries and treats every received response as a
/// result: non-2xx status codes are returned to the caller, not raised here.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret};
/// use shipstation_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = ShipStationConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .api_secret(ApiSecret::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "stores")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://ssapi.shipstation.com`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// The base URI is the configured host override when present, otherwise
    /// the production API host. Credentials from the configuration are
    /// encoded into an HTTP Basic `Authorization` header sent on every
    /// request.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &ShipStationConfig) -> Self {
        let base_uri = config
            .host()
            .map_or_else(|| DEFAULT_API_HOST.to_string(), |host| host.as_ref().to_string());

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}ShipStation API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        // Encode credentials for HTTP Basic authentication
        let credentials = format!(
            "{}:{}",
            config.api_key().as_ref(),
            config.api_secret().as_ref()
        );
        let authorization = format!("Basic {}", BASE64.encode(credentials));

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Authorization".to_string(), authorization);

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the ShipStation API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction
    /// - Header merging
    /// - Response parsing
    ///
    /// Every received HTTP response is returned as `Ok`, including non-2xx
    /// statuses; status-code interpretation belongs to the resource layer.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Validate request first
        request.verify()?;

        // Build full URL
        let url = format!("{}/{}", self.base_uri, request.path);

        // Merge headers
        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        // Build the reqwest request
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
        };

        // Add headers
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        // Add query params, preserving their order
        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        // Add body
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            "sending request"
        );

        // Send request
        let res = req_builder.send().await?;

        // Parse response
        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        // Parse body as JSON; non-JSON bodies are preserved for error reporting
        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        let response = HttpResponse::new(code, res_headers, body);

        if let Some(rate_limit) = response.rate_limit {
            if rate_limit.remaining == 0 {
                tracing::warn!(
                    reset_seconds = rate_limit.reset_seconds,
                    "rate limit window exhausted; subsequent requests may be rejected"
                );
            }
        }

        Ok(response)
    }

    /// Parses response headers into a lower-cased `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
