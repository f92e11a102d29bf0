//! Resource-specific error types for REST API operations.
//!
//! This module contains error types for REST resource operations, extending
//! the transport-level errors with resource-specific semantics.
//!
//! # Error Handling
//!
//! The SDK maps HTTP status codes to semantic error variants:
//!
//! - **404**: [`ResourceError::NotFound`] - Resource doesn't exist
//! - **Other 4xx**: [`ResourceError::ValidationFailed`] - The API rejected the request
//! - **5xx**: [`ResourceError::Service`] - Server-side failure
//!
//! A response body that does not match the expected schema surfaces as
//! [`ResourceError::Decode`]. Network and request-validation failures are
//! wrapped in [`ResourceError::Http`]. Nothing is retried or suppressed.
//!
//! # Example
//!
//! ```rust,ignore
//! use shipstation_api::rest::ResourceError;
//!
//! match stores.get(12345).await {
//!     Ok(store) => println!("Found: {:?}", store.store_name),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{} with id {} not found", resource, id);
//!     }
//!     Err(ResourceError::ValidationFailed { message, .. }) => {
//!         println!("rejected: {}", message);
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use crate::clients::{HttpError, RestError};
use thiserror::Error;

/// Error type for REST resource operations.
///
/// This enum provides semantic error types for resource operations,
/// mapping HTTP error codes to meaningful variants while preserving
/// the request ID for debugging.
///
/// # Example
///
/// ```rust
/// use shipstation_api::rest::ResourceError;
///
/// let error = ResourceError::NotFound {
///     resource: "Store",
///     id: "12345".to_string(),
/// };
/// assert!(error.to_string().contains("Store"));
/// assert!(error.to_string().contains("12345"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    ///
    /// This error is returned when attempting to fetch or update a resource
    /// that doesn't exist.
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "Store").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// The API rejected the request (HTTP 4xx other than 404).
    ///
    /// This error is returned when the API rejects an operation, typically
    /// because the payload is malformed or violates a server-side rule.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// The error message reported by the API.
        message: String,
        /// The request ID for debugging (from the X-Request-Id header).
        request_id: Option<String>,
    },

    /// The API reported a server-side failure (HTTP 5xx).
    #[error("Service error {code}: {message}")]
    Service {
        /// The HTTP status code of the response.
        code: u16,
        /// The error message reported by the API.
        message: String,
        /// The request ID for debugging (from the X-Request-Id header).
        request_id: Option<String>,
    },

    /// The response body does not match the expected schema.
    #[error("Failed to decode {resource} response: {source}")]
    Decode {
        /// The type name of the resource being decoded.
        resource: &'static str,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
        /// The request ID for debugging (from the X-Request-Id header).
        request_id: Option<String>,
    },

    /// A transport-level error occurred (network failure or invalid request).
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred (e.g., path normalization failure).
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Creates a `ResourceError` from a non-2xx HTTP response.
    ///
    /// Maps HTTP status codes to semantic error variants:
    /// - 404 -> `NotFound`
    /// - Other 4xx -> `ValidationFailed` (message extracted from the body)
    /// - 5xx -> `Service`
    ///
    /// # Arguments
    ///
    /// * `code` - The HTTP status code
    /// * `body` - The response body as JSON
    /// * `resource` - The resource type name (e.g., "Store")
    /// * `id` - The resource ID (if applicable)
    /// * `request_id` - The X-Request-Id header value
    ///
    /// # Example
    ///
    /// ```rust
    /// use shipstation_api::rest::ResourceError;
    /// use serde_json::json;
    ///
    /// let error = ResourceError::from_http_response(
    ///     404,
    ///     &json!({"Message": "Not found"}),
    ///     "Store",
    ///     Some("12345"),
    ///     Some("req-123"),
    /// );
    /// assert!(matches!(error, ResourceError::NotFound { .. }));
    /// ```
    #[must_use]
    pub fn from_http_response(
        code: u16,
        body: &serde_json::Value,
        resource: &'static str,
        id: Option<&str>,
        request_id: Option<&str>,
    ) -> Self {
        match code {
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            400..=499 => Self::ValidationFailed {
                message: extract_error_message(body),
                request_id: request_id.map(ToString::to_string),
            },
            _ => Self::Service {
                code,
                message: extract_error_message(body),
                request_id: request_id.map(ToString::to_string),
            },
        }
    }

    /// Returns the request ID if available.
    ///
    /// Useful for debugging and error reporting.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { request_id, .. }
            | Self::Service { request_id, .. }
            | Self::Decode { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }
}

/// Extracts a human-readable error message from an API error body.
///
/// ShipStation reports errors in several shapes depending on the failure:
/// ```json
/// {"ExceptionMessage": "...", "ExceptionType": "..."}
/// {"Message": "Authorization has been denied for this request."}
/// {"message": "..."}
/// ```
///
/// Unrecognized bodies are returned verbatim as serialized JSON.
fn extract_error_message(body: &serde_json::Value) -> String {
    for key in ["ExceptionMessage", "Message", "message"] {
        if let Some(message) = body.get(key).and_then(serde_json::Value::as_str) {
            return message.to_string();
        }
    }

    body.to_string()
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_found_error_formats_message_with_resource_and_id() {
        let error = ResourceError::NotFound {
            resource: "Store",
            id: "123456".to_string(),
        };
        let message = error.to_string();

        assert!(message.contains("Store"));
        assert!(message.contains("123456"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_from_http_response_maps_404_to_not_found() {
        let error = ResourceError::from_http_response(
            404,
            &json!({"Message": "Not found"}),
            "Store",
            Some("123"),
            Some("req-123"),
        );

        assert!(matches!(
            error,
            ResourceError::NotFound { resource: "Store", id } if id == "123"
        ));
    }

    #[test]
    fn test_from_http_response_maps_other_4xx_to_validation_failed() {
        let body = json!({
            "ExceptionMessage": "storeId is required",
            "ExceptionType": "ArgumentException"
        });

        let error = ResourceError::from_http_response(400, &body, "Store", None, Some("req-456"));

        if let ResourceError::ValidationFailed {
            message,
            request_id,
        } = error
        {
            assert_eq!(message, "storeId is required");
            assert_eq!(request_id, Some("req-456".to_string()));
        } else {
            panic!("Expected ValidationFailed variant");
        }
    }

    #[test]
    fn test_from_http_response_maps_401_to_validation_failed() {
        let body = json!({"Message": "Authorization has been denied for this request."});

        let error = ResourceError::from_http_response(401, &body, "Store", None, None);

        assert!(matches!(
            error,
            ResourceError::ValidationFailed { message, .. }
                if message.contains("Authorization has been denied")
        ));
    }

    #[test]
    fn test_from_http_response_maps_5xx_to_service() {
        let error = ResourceError::from_http_response(
            500,
            &json!({"Message": "Internal error"}),
            "Store",
            None,
            Some("req-789"),
        );

        assert!(matches!(
            error,
            ResourceError::Service { code: 500, message, .. } if message == "Internal error"
        ));
    }

    #[test]
    fn test_extract_error_message_prefers_exception_message() {
        let body = json!({
            "ExceptionMessage": "the detail",
            "Message": "the summary"
        });

        assert_eq!(extract_error_message(&body), "the detail");
    }

    #[test]
    fn test_extract_error_message_falls_back_to_raw_body() {
        let body = json!({"unexpected": "shape"});

        assert_eq!(extract_error_message(&body), r#"{"unexpected":"shape"}"#);
    }

    #[test]
    fn test_request_id_extraction() {
        let error = ResourceError::ValidationFailed {
            message: "bad payload".to_string(),
            request_id: Some("req-abc".to_string()),
        };
        assert_eq!(error.request_id(), Some("req-abc"));

        let error = ResourceError::NotFound {
            resource: "Store",
            id: "123".to_string(),
        };
        assert_eq!(error.request_id(), None);
    }

    #[test]
    fn test_decode_error_preserves_source() {
        let source = serde_json::from_str::<u64>("\"not a number\"").unwrap_err();
        let error = ResourceError::Decode {
            resource: "Store",
            source,
            request_id: None,
        };

        let message = error.to_string();
        assert!(message.contains("Failed to decode Store response"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_all_error_variants_implement_std_error() {
        let not_found: &dyn std::error::Error = &ResourceError::NotFound {
            resource: "Store",
            id: "123".to_string(),
        };
        let _ = not_found;

        let validation: &dyn std::error::Error = &ResourceError::ValidationFailed {
            message: "test".to_string(),
            request_id: None,
        };
        let _ = validation;

        let service: &dyn std::error::Error = &ResourceError::Service {
            code: 503,
            message: "unavailable".to_string(),
            request_id: None,
        };
        let _ = service;
    }
}
