//! HTTP response types for the ShipStation API SDK.
//!
//! This module provides the [`HttpResponse`] type and related types for
//! parsing and accessing API response data.

use std::collections::HashMap;

/// Rate limit information parsed from the `X-Rate-Limit-*` response headers.
///
/// ShipStation reports the per-window request quota on every response:
/// `X-Rate-Limit-Limit` (window size), `X-Rate-Limit-Remaining` (requests
/// left in the window), and `X-Rate-Limit-Reset` (seconds until the window
/// resets). The SDK parses these for observability only; it never waits or
/// retries on them.
///
/// # Example
///
/// ```rust
/// use shipstation_api::clients::RateLimit;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-rate-limit-limit".to_string(), vec!["40".to_string()]);
/// headers.insert("x-rate-limit-remaining".to_string(), vec!["39".to_string()]);
/// headers.insert("x-rate-limit-reset".to_string(), vec!["28".to_string()]);
///
/// let limit = RateLimit::from_headers(&headers).unwrap();
/// assert_eq!(limit.limit, 40);
/// assert_eq!(limit.remaining, 39);
/// assert_eq!(limit.reset_seconds, 28);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// The maximum number of requests allowed in the current window.
    pub limit: u32,
    /// The number of requests remaining in the current window.
    pub remaining: u32,
    /// Seconds until the current window resets.
    pub reset_seconds: u64,
}

impl RateLimit {
    /// Parses rate limit information from lower-cased response headers.
    ///
    /// Returns `None` unless all three `X-Rate-Limit-*` headers are present
    /// and parse as integers.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let value = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .map(String::as_str)
        };

        let limit = value("x-rate-limit-limit")?.parse().ok()?;
        let remaining = value("x-rate-limit-remaining")?.parse().ok()?;
        let reset_seconds = value("x-rate-limit-reset")?.parse().ok()?;

        Some(Self {
            limit,
            remaining,
            reset_seconds,
        })
    }
}

/// An HTTP response from the ShipStation API.
///
/// Contains the response status code, headers, body, and the parsed
/// rate-limit headers. Responses are returned for every received status
/// code; mapping non-2xx codes to semantic errors happens at the resource
/// layer, which has the body and resource context available.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lower-cased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Rate limit information (from the `X-Rate-Limit-*` headers).
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with automatic header parsing.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let rate_limit = RateLimit::from_headers(&headers);

        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

// Verify response types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RateLimit>();
    assert_send_sync::<HttpResponse>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rate_limit_headers(
        limit: &str,
        remaining: &str,
        reset: &str,
    ) -> HashMap<String, Vec<String>> {
        let mut headers = HashMap::new();
        headers.insert("x-rate-limit-limit".to_string(), vec![limit.to_string()]);
        headers.insert(
            "x-rate-limit-remaining".to_string(),
            vec![remaining.to_string()],
        );
        headers.insert("x-rate-limit-reset".to_string(), vec![reset.to_string()]);
        headers
    }

    #[test]
    fn test_rate_limit_parses_all_three_headers() {
        let headers = rate_limit_headers("40", "12", "31");
        let limit = RateLimit::from_headers(&headers).unwrap();

        assert_eq!(limit.limit, 40);
        assert_eq!(limit.remaining, 12);
        assert_eq!(limit.reset_seconds, 31);
    }

    #[test]
    fn test_rate_limit_missing_header_returns_none() {
        let mut headers = rate_limit_headers("40", "12", "31");
        headers.remove("x-rate-limit-reset");

        assert!(RateLimit::from_headers(&headers).is_none());
    }

    #[test]
    fn test_rate_limit_unparseable_value_returns_none() {
        let headers = rate_limit_headers("forty", "12", "31");

        assert!(RateLimit::from_headers(&headers).is_none());
    }

    #[test]
    fn test_response_is_ok_for_2xx_only() {
        let ok = HttpResponse::new(200, HashMap::new(), json!({}));
        assert!(ok.is_ok());

        let created = HttpResponse::new(204, HashMap::new(), json!({}));
        assert!(created.is_ok());

        let not_found = HttpResponse::new(404, HashMap::new(), json!({}));
        assert!(!not_found.is_ok());

        let server_error = HttpResponse::new(500, HashMap::new(), json!({}));
        assert!(!server_error.is_ok());
    }

    #[test]
    fn test_response_parses_rate_limit_on_construction() {
        let headers = rate_limit_headers("40", "0", "60");
        let response = HttpResponse::new(200, headers, json!({}));

        let limit = response.rate_limit.unwrap();
        assert_eq!(limit.remaining, 0);
    }

    #[test]
    fn test_request_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-12345".to_string()]);

        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.request_id(), Some("req-12345"));

        let response_without = HttpResponse::new(200, HashMap::new(), json!({}));
        assert!(response_without.request_id().is_none());
    }
}
