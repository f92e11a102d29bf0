//! Marketplace resource model.

use serde::{Deserialize, Serialize};

/// A sales channel the platform supports integrating with.
///
/// Marketplaces form a static, read-only catalog. Each entry describes an
/// integratable channel and the capabilities the integration supports.
///
/// # Example
///
/// ```rust,ignore
/// use shipstation_api::rest::resources::Stores;
///
/// let marketplaces = Stores::new(&client).marketplaces().await?;
/// for marketplace in &marketplaces {
///     println!("{}: {:?}", marketplace.marketplace_id, marketplace.name);
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Marketplace {
    /// The unique identifier of the marketplace.
    pub marketplace_id: u64,

    /// The display name of the marketplace.
    pub name: Option<String>,

    /// Whether stores on this marketplace support order refreshes.
    #[serde(default)]
    pub can_refresh: bool,

    /// Whether the marketplace supports custom field mappings.
    #[serde(default)]
    pub supports_custom_mappings: bool,

    /// Whether the marketplace supports custom order statuses.
    #[serde(default)]
    pub supports_custom_statuses: bool,

    /// Whether shipments can be confirmed back to the marketplace.
    #[serde(default)]
    pub can_confirm_shipments: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marketplace_deserializes_from_api_response() {
        let json_str = r#"{
            "name": "Acme Commerce",
            "marketplaceId": 29,
            "canRefresh": true,
            "supportsCustomMappings": true,
            "supportsCustomStatuses": false,
            "canConfirmShipments": true
        }"#;

        let marketplace: Marketplace = serde_json::from_str(json_str).unwrap();

        assert_eq!(marketplace.marketplace_id, 29);
        assert_eq!(marketplace.name.as_deref(), Some("Acme Commerce"));
        assert!(marketplace.can_refresh);
        assert!(marketplace.supports_custom_mappings);
        assert!(!marketplace.supports_custom_statuses);
        assert!(marketplace.can_confirm_shipments);
    }

    #[test]
    fn test_marketplace_capability_flags_default_to_false() {
        let json_str = r#"{"marketplaceId": 3, "name": "Bare"}"#;

        let marketplace: Marketplace = serde_json::from_str(json_str).unwrap();

        assert!(!marketplace.can_refresh);
        assert!(!marketplace.supports_custom_mappings);
        assert!(!marketplace.supports_custom_statuses);
        assert!(!marketplace.can_confirm_shipments);
    }
}
