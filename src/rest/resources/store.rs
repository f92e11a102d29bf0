//! Store resource implementation.
//!
//! This module provides the [`Store`] resource and the [`Stores`] client for
//! the `stores` endpoint family: fetching, updating, and listing connected
//! sales-channel integrations, querying and triggering order-data refreshes,
//! listing the marketplace catalog, and deactivating or reactivating stores.
//!
//! # Example
//!
//! ```rust,ignore
//! use shipstation_api::rest::resources::Stores;
//!
//! let stores = Stores::new(&client);
//!
//! // Fetch a single store
//! let store = stores.get(12345).await?;
//! println!("Store: {}", store.store_name.as_deref().unwrap_or(""));
//!
//! // Trigger a refresh for every connected store
//! let accepted = stores.refresh_all().await?;
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::clients::{HttpResponse, RestClient};
use crate::rest::resources::{Marketplace, SuccessResponse};
use crate::rest::ResourceError;

/// A connected sales-channel integration.
///
/// Stores are created by connecting a sales channel on the platform, so
/// every store carries a server-assigned identifier. The record is owned by
/// the remote service; the client never mutates local copies beyond
/// constructing update requests from them.
///
/// # Full-Replace Updates
///
/// Updates are full-replace: [`Stores::update`] serializes **every** field,
/// `null`s included. Callers must send the complete record, unchanged fields
/// and all, or the remote service may null them out.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// The unique identifier of the store.
    pub store_id: u64,

    /// The display name of the store.
    pub store_name: Option<String>,

    /// The identifier of the marketplace this store is connected to.
    pub marketplace_id: Option<u64>,

    /// The display name of the connected marketplace.
    pub marketplace_name: Option<String>,

    /// The account name used on the connected channel.
    pub account_name: Option<String>,

    /// The contact email address for the store.
    pub email: Option<String>,

    /// The URL of the channel integration endpoint.
    pub integration_url: Option<String>,

    /// Whether the store is active.
    #[serde(default)]
    pub active: bool,

    /// The company name configured on the store.
    pub company_name: Option<String>,

    /// The phone number configured on the store.
    pub phone: Option<String>,

    /// The publicly displayed email address.
    pub public_email: Option<String>,

    /// The store's website URL.
    pub website: Option<String>,

    /// When order data was last refreshed.
    pub refresh_date: Option<NaiveDateTime>,

    /// When a refresh was last attempted.
    pub last_refresh_attempt: Option<NaiveDateTime>,

    /// When the store was connected.
    pub create_date: Option<NaiveDateTime>,

    /// When the store configuration was last modified.
    pub modify_date: Option<NaiveDateTime>,

    /// Whether the platform refreshes this store automatically.
    #[serde(default)]
    pub auto_refresh: bool,
}

/// Parameters for listing stores.
///
/// The query string is built in a fixed order: `showInactive` is appended
/// only when `true`, then `marketplaceId` when set. With neither set, no
/// query string is appended at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreListParams {
    /// Include inactive stores in the listing.
    pub show_inactive: bool,
    /// Restrict the listing to stores on the given marketplace.
    pub marketplace_id: Option<u64>,
}

impl StoreListParams {
    /// Converts the parameters to ordered query pairs.
    #[must_use]
    pub fn to_query(self) -> Vec<(String, String)> {
        let mut query = Vec::new();

        if self.show_inactive {
            query.push(("showInactive".to_string(), "true".to_string()));
        }
        if let Some(marketplace_id) = self.marketplace_id {
            query.push(("marketplaceId".to_string(), marketplace_id.to_string()));
        }

        query
    }
}

/// Status snapshot of an in-progress or completed store data refresh.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoreRefreshStatus {
    /// The identifier of the store being refreshed.
    pub store_id: u64,

    /// The numeric refresh state reported by the platform.
    pub refresh_status_id: Option<u64>,

    /// A human-readable description of the refresh state, set while a
    /// refresh is in progress.
    pub refresh_status: Option<String>,

    /// When a refresh was last attempted.
    pub last_refresh_attempt: Option<NaiveDate>,

    /// When order data was last refreshed.
    pub refresh_date: Option<NaiveDate>,
}

/// Request payload for the `stores/refreshstore` endpoint.
///
/// With both fields unset this serializes to `{}`, which asks the platform
/// to refresh every connected store. With a `store_id` and no
/// `refresh_date`, the platform falls back to the store's last recorded
/// refresh date.
#[derive(Debug, Clone, Copy, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshStoreRequest {
    /// The store to refresh; all stores when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<u64>,

    /// Refresh order data starting from this date (ISO-8601 calendar date).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_date: Option<NaiveDate>,
}

/// Request payload for the `stores/deactivate` endpoint.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeactivateStoreRequest {
    /// The store to deactivate.
    pub store_id: u64,
}

/// Request payload for the `stores/reactivate` endpoint.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReactivateStoreRequest {
    /// The store to reactivate.
    pub store_id: u64,
}

/// Typed client for the `stores` resource family.
///
/// `Stores` borrows a [`RestClient`] and translates typed method calls into
/// HTTP requests against the `stores` paths. Every call is stateless and
/// independent: the client holds no mutable state, so concurrent calls from
/// multiple tasks are safe, bounded only by the transport's connection pool.
/// Dropping an in-flight future simply aborts the request.
///
/// # Example
///
/// ```rust,ignore
/// use shipstation_api::rest::resources::{Stores, StoreListParams};
///
/// let stores = Stores::new(&client);
///
/// // List active stores on a marketplace
/// let listed = stores
///     .list(Some(StoreListParams {
///         show_inactive: false,
///         marketplace_id: Some(7),
///     }))
///     .await?;
///
/// for store in &listed {
///     println!("{}: {:?}", store.store_id, store.store_name);
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Stores<'a> {
    client: &'a RestClient,
}

// Verify Stores is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Stores<'static>>();
};

impl<'a> Stores<'a> {
    const NAME: &'static str = "Store";

    /// Creates a stores client backed by the given REST client.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Fetches a single store by ID.
    ///
    /// Sends a GET request to `stores/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no store matches the ID,
    /// [`ResourceError::Decode`] if the response body does not match the
    /// expected schema, and [`ResourceError::Http`] on transport failure.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let store = stores.get(12345).await?;
    /// assert_eq!(store.store_id, 12345);
    /// ```
    pub async fn get(&self, store_id: u64) -> Result<Store, ResourceError> {
        let path = format!("stores/{store_id}");

        let response = self.client.get(&path, None).await?;
        ensure_ok(&response, Self::NAME, Some(&store_id.to_string()))?;

        decode(&response, Self::NAME)
    }

    /// Updates a store.
    ///
    /// Sends a PUT request to `stores/{id}` with the full serialized store
    /// as the body. There is no partial-update support: every field is sent,
    /// `null`s included, because the remote service may null out omitted
    /// fields.
    ///
    /// # Returns
    ///
    /// The updated store as confirmed by the remote service, which is
    /// authoritative and may differ from the submitted record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no store matches the ID,
    /// [`ResourceError::ValidationFailed`] if the remote service rejects the
    /// payload, [`ResourceError::Decode`] on schema mismatch, and
    /// [`ResourceError::Http`] on transport failure.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut store = stores.get(12345).await?;
    /// store.store_name = Some("Renamed Storefront".to_string());
    /// let updated = stores.update(12345, &store).await?;
    /// ```
    pub async fn update(&self, store_id: u64, store: &Store) -> Result<Store, ResourceError> {
        let path = format!("stores/{store_id}");
        let body = to_body(store)?;

        let response = self.client.put(&path, body, None).await?;
        ensure_ok(&response, Self::NAME, Some(&store_id.to_string()))?;

        decode(&response, Self::NAME)
    }

    /// Lists connected stores.
    ///
    /// Sends a GET request to `stores`, with a query string built from the
    /// parameters when any are set. The order of the returned sequence is
    /// whatever the server returned; it is not guaranteed stable across
    /// calls.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] on schema mismatch and
    /// [`ResourceError::Http`] on transport failure.
    pub async fn list(&self, params: Option<StoreListParams>) -> Result<Vec<Store>, ResourceError> {
        let query = params
            .map(StoreListParams::to_query)
            .filter(|q| !q.is_empty());

        let response = self.client.get("stores", query).await?;
        ensure_ok(&response, Self::NAME, None)?;

        decode(&response, Self::NAME)
    }

    /// Retrieves the refresh status of a store.
    ///
    /// Sends a GET request to `stores/getrefreshstatus?storeId={id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] on schema mismatch and
    /// [`ResourceError::Http`] on transport failure.
    pub async fn refresh_status(
        &self,
        store_id: u64,
    ) -> Result<StoreRefreshStatus, ResourceError> {
        let query = vec![("storeId".to_string(), store_id.to_string())];

        let response = self
            .client
            .get("stores/getrefreshstatus", Some(query))
            .await?;
        ensure_ok(&response, "StoreRefreshStatus", Some(&store_id.to_string()))?;

        decode(&response, "StoreRefreshStatus")
    }

    /// Triggers a refresh of every connected store.
    ///
    /// Sends a POST request to `stores/refreshstore` with an empty JSON
    /// object body. Returns the success flag from the platform's
    /// [`SuccessResponse`]; `false` means the platform declined to start a
    /// refresh, not that the request failed.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the remote service
    /// rejects the request and [`ResourceError::Http`] on transport failure.
    pub async fn refresh_all(&self) -> Result<bool, ResourceError> {
        self.post_refresh(RefreshStoreRequest::default()).await
    }

    /// Triggers a refresh of a single store.
    ///
    /// Sends a POST request to `stores/refreshstore` with a
    /// [`RefreshStoreRequest`] body. When `refresh_date` is `None` the field
    /// is omitted and the platform falls back to the store's last recorded
    /// refresh date.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the remote service
    /// rejects the request and [`ResourceError::Http`] on transport failure.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use chrono::NaiveDate;
    ///
    /// let since = NaiveDate::from_ymd_opt(2024, 6, 1);
    /// let accepted = stores.refresh(12345, since).await?;
    /// ```
    pub async fn refresh(
        &self,
        store_id: u64,
        refresh_date: Option<NaiveDate>,
    ) -> Result<bool, ResourceError> {
        self.post_refresh(RefreshStoreRequest {
            store_id: Some(store_id),
            refresh_date,
        })
        .await
    }

    /// Lists the marketplaces the platform supports integrating with.
    ///
    /// Sends a GET request to `stores/marketplaces`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] on schema mismatch and
    /// [`ResourceError::Http`] on transport failure.
    pub async fn marketplaces(&self) -> Result<Vec<Marketplace>, ResourceError> {
        let response = self.client.get("stores/marketplaces", None).await?;
        ensure_ok(&response, "Marketplace", None)?;

        decode(&response, "Marketplace")
    }

    /// Deactivates a store.
    ///
    /// Sends a POST request to `stores/deactivate` with a
    /// [`DeactivateStoreRequest`] body and returns the success flag.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the remote service
    /// rejects the request and [`ResourceError::Http`] on transport failure.
    pub async fn deactivate(&self, store_id: u64) -> Result<bool, ResourceError> {
        let body = to_body(&DeactivateStoreRequest { store_id })?;

        let response = self.client.post("stores/deactivate", body, None).await?;
        ensure_ok(&response, Self::NAME, Some(&store_id.to_string()))?;

        let result: SuccessResponse = decode(&response, Self::NAME)?;
        Ok(result.success)
    }

    /// Reactivates a previously deactivated store.
    ///
    /// Sends a POST request to `stores/reactivate` with a
    /// [`ReactivateStoreRequest`] body and returns the success flag. Stores
    /// are active by default server-side; this purely reverses a prior
    /// deactivation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the remote service
    /// rejects the request and [`ResourceError::Http`] on transport failure.
    pub async fn reactivate(&self, store_id: u64) -> Result<bool, ResourceError> {
        let body = to_body(&ReactivateStoreRequest { store_id })?;

        let response = self.client.post("stores/reactivate", body, None).await?;
        ensure_ok(&response, Self::NAME, Some(&store_id.to_string()))?;

        let result: SuccessResponse = decode(&response, Self::NAME)?;
        Ok(result.success)
    }

    /// Shared POST path for the two refresh forms.
    async fn post_refresh(&self, request: RefreshStoreRequest) -> Result<bool, ResourceError> {
        let id = request.store_id.map(|id| id.to_string());
        let body = to_body(&request)?;

        let response = self.client.post("stores/refreshstore", body, None).await?;
        ensure_ok(&response, Self::NAME, id.as_deref())?;

        let result: SuccessResponse = decode(&response, Self::NAME)?;
        Ok(result.success)
    }
}

/// Maps a non-2xx response to the matching [`ResourceError`].
fn ensure_ok(
    response: &HttpResponse,
    resource: &'static str,
    id: Option<&str>,
) -> Result<(), ResourceError> {
    if response.is_ok() {
        Ok(())
    } else {
        Err(ResourceError::from_http_response(
            response.code,
            &response.body,
            resource,
            id,
            response.request_id(),
        ))
    }
}

/// Deserializes a response body into the expected type.
fn decode<T: DeserializeOwned>(
    response: &HttpResponse,
    resource: &'static str,
) -> Result<T, ResourceError> {
    serde_json::from_value(response.body.clone()).map_err(|source| ResourceError::Decode {
        resource,
        source,
        request_id: response.request_id().map(ToString::to_string),
    })
}

/// Serializes a request payload into a JSON body.
fn to_body<T: Serialize>(payload: &T) -> Result<serde_json::Value, ResourceError> {
    serde_json::to_value(payload).map_err(|e| ResourceError::ValidationFailed {
        message: format!("Failed to serialize request body: {e}"),
        request_id: None,
    })
}
