//! Typed resource clients and models for the ShipStation API.
//!
//! Each resource lives in its own module; the `stores` endpoint family is
//! served by [`Stores`] together with its request payloads and models.

mod marketplace;
mod store;
mod success;

pub use marketplace::Marketplace;
pub use store::{
    DeactivateStoreRequest, ReactivateStoreRequest, RefreshStoreRequest, Store, StoreListParams,
    StoreRefreshStatus, Stores,
};
pub use success::SuccessResponse;
