//! JSON bodies exchanged with clients.

use serde::{Deserialize, Serialize};

/// Confirmation body returned by successful roster changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn signed_up(email: &str, activity: &str) -> Self {
        Self {
            message: format!("Signed up {} for {}", email, activity),
        }
    }

    pub fn unregistered(email: &str, activity: &str) -> Self {
        Self {
            message: format!("Unregistered {} from {}", email, activity),
        }
    }
}

/// Error body: `{"detail": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Query string carried by the signup and unregister endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_wording() {
        let signed = MessageResponse::signed_up("new@x.edu", "Soccer");
        assert_eq!(signed.message, "Signed up new@x.edu for Soccer");

        let gone = MessageResponse::unregistered("new@x.edu", "Soccer");
        assert_eq!(gone.message, "Unregistered new@x.edu from Soccer");
    }

    #[test]
    fn test_error_detail_shape() {
        let body = serde_json::to_value(ErrorDetail::new("Activity not found")).unwrap();
        assert_eq!(body, serde_json::json!({ "detail": "Activity not found" }));
    }
}
