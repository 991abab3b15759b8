//! Conversation message types.

use serde::{Deserialize, Serialize};

/// Represents the sender of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the assistant.
    Assistant,
}

/// A single line in a conversation log.
///
/// Messages are immutable once created: the log only ever appends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique within the conversation, monotonically increasing in
    /// append order.
    pub id: u64,
    /// The message text.
    pub text: String,
    /// Who sent the message.
    pub role: MessageRole,
    /// Timestamp when the message was created (ISO 8601 format).
    pub timestamp: String,
}
