//! Append-only conversation log.

use serde::{Deserialize, Serialize};

use super::message::{Message, MessageRole};

/// The ordered message history of one conversation session.
///
/// The log is strictly append-only: no message is mutated or removed
/// once created. Ids are assigned monotonically in append order, which
/// also corresponds to non-decreasing timestamp order. The whole log
/// lives and dies with its session; nothing persists across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationLog {
    /// Messages in append order.
    messages: Vec<Message>,
    /// Id handed to the next appended message.
    next_id: u64,
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a message and returns a reference to it.
    ///
    /// This is the only way the log changes.
    pub fn append(&mut self, role: MessageRole, text: &str) -> &Message {
        let message = Message {
            id: self.next_id,
            text: text.to_string(),
            role,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        self.next_id += 1;
        self.messages.push(message);
        // Safe to unwrap because we just pushed an element
        self.messages.last().unwrap()
    }

    /// Returns the messages in append order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the most recently appended message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns the number of messages in the log.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log_is_empty() {
        let log = ConversationLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.last().is_none());
    }

    #[test]
    fn test_append_assigns_increasing_ids() {
        let mut log = ConversationLog::new();

        log.append(MessageRole::Assistant, "hello");
        log.append(MessageRole::User, "hi");
        log.append(MessageRole::Assistant, "again");

        let ids: Vec<u64> = log.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_append_preserves_order_and_content() {
        let mut log = ConversationLog::new();

        log.append(MessageRole::User, "first");
        log.append(MessageRole::Assistant, "second");

        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[0].text, "first");
        assert_eq!(log.messages()[0].role, MessageRole::User);
        assert_eq!(log.messages()[1].text, "second");
        assert_eq!(log.messages()[1].role, MessageRole::Assistant);
        assert_eq!(log.last().unwrap().text, "second");
    }

    #[test]
    fn test_timestamps_are_non_decreasing() {
        let mut log = ConversationLog::new();
        for i in 0..5 {
            log.append(MessageRole::User, &format!("message {}", i));
        }
        let timestamps: Vec<&str> = log.messages().iter().map(|m| m.timestamp.as_str()).collect();
        for pair in timestamps.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }
}
