//! Success-flag response wrapper for action endpoints.

use serde::{Deserialize, Serialize};

/// A minimal wrapper carrying a boolean success indicator.
///
/// Fire-and-forget action endpoints (refresh, deactivate, reactivate) answer
/// with this shape instead of a resource body. A decoded `success == false`
/// is a normal business outcome, not an error: the request was accepted and
/// answered, the action simply did not take effect. Callers must inspect the
/// flag explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse {
    /// Whether the requested action took effect.
    pub success: bool,

    /// An optional human-readable message accompanying the result.
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_deserializes_with_message() {
        let json_str = r#"{"success": true, "message": "Store refresh has been initiated."}"#;

        let response: SuccessResponse = serde_json::from_str(json_str).unwrap();

        assert!(response.success);
        assert_eq!(
            response.message.as_deref(),
            Some("Store refresh has been initiated.")
        );
    }

    #[test]
    fn test_success_response_deserializes_without_message() {
        let json_str = r#"{"success": false}"#;

        let response: SuccessResponse = serde_json::from_str(json_str).unwrap();

        assert!(!response.success);
        assert!(response.message.is_none());
    }
}
