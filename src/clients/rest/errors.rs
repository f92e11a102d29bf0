//! REST-specific error types for the ShipStation API SDK.
//!
//! This module contains error types for REST API operations: invalid paths
//! and wrapped HTTP errors.

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// This enum provides specific error types for REST API operations,
/// wrapping HTTP errors and adding REST-specific error cases.
///
/// # Example
///
/// ```rust
/// use shipstation_api::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is invalid.
    ///
    /// This error is returned when a path fails validation, such as
    /// when it is empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    ///
    /// This variant wraps [`HttpError`] for unified error handling.
    #[error(transparent)]
    Http(#[from] HttpError),
}
