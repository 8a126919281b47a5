use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message row read from the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Database-assigned identifier, unique and never reused
    pub id: i64,

    /// Message text, mutable via partial update
    pub body: String,

    /// Author name, immutable after creation
    pub username: String,

    /// Set by the database when the row is inserted
    pub created_at: DateTime<Utc>,

    /// Refreshed by the database when the body is updated
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a message
///
/// Each updatable field is either present with a value or absent. Absent
/// fields are left unchanged by `update_message`. Only the body is
/// updatable; the author is fixed at creation time.
///
/// # Example
///
/// ```
/// use msgboard::store::MessageUpdate;
///
/// let update = MessageUpdate::new().with_body("edited text");
/// assert!(!update.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageUpdate {
    /// Replacement message text
    pub body: Option<String>,
}

impl MessageUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the replacement body (builder pattern)
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// True when no fields are present
    pub fn is_empty(&self) -> bool {
        self.body.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_update_builder() {
        let update = MessageUpdate::new().with_body("new text");
        assert_eq!(update.body, Some("new text".to_string()));
        assert!(!update.is_empty());
    }

    #[test]
    fn test_message_update_empty() {
        let update = MessageUpdate::new();
        assert!(update.body.is_none());
        assert!(update.is_empty());
    }

    #[test]
    fn test_message_serialization_shape() {
        let message = Message {
            id: 7,
            body: "Hello".to_string(),
            username: "liza".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let serialized = serde_json::to_string(&message).unwrap();
        let value: serde_json::Value = serde_json::from_str(&serialized).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["body"], "Hello");
        assert_eq!(value["username"], "liza");
        assert!(value.get("created_at").is_some());
        assert!(value.get("updated_at").is_some());
    }

    #[test]
    fn test_message_round_trip() {
        let message = Message {
            id: 1,
            body: "text".to_string(),
            username: "sam".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let serialized = serde_json::to_string(&message).unwrap();
        let deserialized: Message = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, message);
    }
}
