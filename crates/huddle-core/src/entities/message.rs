use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A chat message posted in a project.
///
/// Without a recipient the message belongs to the project's group channel.
/// With one, it belongs to the private thread between sender and recipient.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub project_id: String,
    pub sender_id: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
}

impl ChatMessage {
    #[must_use]
    pub const fn is_group(&self) -> bool {
        self.recipient_id.is_none()
    }

    /// Whether this message is part of the private thread between `a` and `b`,
    /// in either direction.
    #[must_use]
    pub fn in_thread(&self, a: &str, b: &str) -> bool {
        let Some(recipient) = self.recipient_id.as_deref() else {
            return false;
        };
        (self.sender_id == a && recipient == b) || (self.sender_id == b && recipient == a)
    }
}
