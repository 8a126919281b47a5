// API request and response types

use serde::{Deserialize, Serialize};

/// Request body for POST /messages
///
/// Both fields decode as optional so the handler can report a missing field
/// explicitly instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMessage {
    pub body: Option<String>,
    pub username: Option<String>,
}

/// Request body for PATCH /messages/{id}
///
/// An absent body field means there is nothing to update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagePatch {
    pub body: Option<String>,
}

/// Error envelope for all non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Confirmation payload for DELETE /messages/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl DeleteConfirmation {
    pub fn for_id(id: i64) -> Self {
        Self {
            message: format!("Message with id {} has been deleted", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_deserialization() {
        let json = r#"{"body":"Hello","username":"liza"}"#;
        let request: NewMessage = serde_json::from_str(json).unwrap();
        assert_eq!(request.body.as_deref(), Some("Hello"));
        assert_eq!(request.username.as_deref(), Some("liza"));
    }

    #[test]
    fn test_new_message_missing_username() {
        let json = r#"{"body":"Hello"}"#;
        let request: NewMessage = serde_json::from_str(json).unwrap();
        assert_eq!(request.body.as_deref(), Some("Hello"));
        assert!(request.username.is_none());
    }

    #[test]
    fn test_new_message_empty_object() {
        let request: NewMessage = serde_json::from_str("{}").unwrap();
        assert!(request.body.is_none());
        assert!(request.username.is_none());
    }

    #[test]
    fn test_message_patch_deserialization() {
        let patch: MessagePatch = serde_json::from_str(r#"{"body":"Hi"}"#).unwrap();
        assert_eq!(patch.body.as_deref(), Some("Hi"));
    }

    #[test]
    fn test_message_patch_without_body_field() {
        let patch: MessagePatch = serde_json::from_str("{}").unwrap();
        assert!(patch.body.is_none());
    }

    #[test]
    fn test_message_patch_default() {
        let patch = MessagePatch::default();
        assert!(patch.body.is_none());
    }

    #[test]
    fn test_error_body_serialization() {
        let body = ErrorBody::new("Message not found");
        let serialized = serde_json::to_string(&body).unwrap();
        assert_eq!(serialized, r#"{"error":"Message not found"}"#);
    }

    #[test]
    fn test_delete_confirmation_text() {
        let confirmation = DeleteConfirmation::for_id(42);
        let serialized = serde_json::to_string(&confirmation).unwrap();
        assert_eq!(
            serialized,
            r#"{"message":"Message with id 42 has been deleted"}"#
        );
    }
}
