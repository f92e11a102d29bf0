//! REST client for the ShipStation API.
//!
//! This module provides the REST API client with path normalization and
//! verb helpers used by the typed resource clients.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
