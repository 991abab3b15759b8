//! Per-session conversation engine.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use super::log::ConversationLog;
use super::message::{Message, MessageRole};
use super::recording::RecordingState;
use crate::catalog::Product;
use crate::intensity::IntensityLevel;

/// Default delay before the simulated assistant reply is appended.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(500);

/// Owns the message log and the simulated reply protocol for one
/// conversation session.
///
/// Accepted user messages are appended synchronously; each one
/// schedules an independent deferred task that appends a canned echo
/// reply after a fixed delay. Because every reply task sleeps the same
/// fixed delay and tasks are spawned in send order, replies are
/// delivered in send order: for two sends A before B, A's reply is
/// appended before B's.
///
/// The engine is shared behind `Arc`; all mutable state sits behind
/// async locks.
pub struct ConversationEngine {
    /// Unique id of this conversation session (UUID format).
    id: String,
    /// Append-only message history, shared with reply tasks.
    log: Arc<Mutex<ConversationLog>>,
    /// Currently selected intensity level. Configuration only: the
    /// reply template does not read it yet.
    intensity: Mutex<IntensityLevel>,
    /// Voice-record toggle. Inert.
    recording: Mutex<RecordingState>,
    /// Fixed delay applied to every scheduled reply.
    reply_delay: Duration,
    /// Handles of scheduled replies that may not have fired yet.
    /// Aborted on shutdown so nothing appends to a torn-down log.
    pending_replies: Mutex<Vec<JoinHandle<()>>>,
}

impl ConversationEngine {
    /// Creates an engine whose log is seeded with the opening
    /// assistant message about `product`.
    pub fn new(product: &Product, intensity: IntensityLevel, reply_delay: Duration) -> Self {
        let mut log = ConversationLog::new();
        log.append(
            MessageRole::Assistant,
            &format!(
                "Look, I know you're thinking about getting the {}, but I really think you \
                 should reconsider. Do you actually need another device to track your steps? \
                 You already have your phone for that.",
                product.name
            ),
        );

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            log: Arc::new(Mutex::new(log)),
            intensity: Mutex::new(intensity),
            recording: Mutex::new(RecordingState::Idle),
            reply_delay,
            pending_replies: Mutex::new(Vec::new()),
        }
    }

    /// Returns the session id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Submits a user message.
    ///
    /// Input whose trimmed form is empty is rejected: no message is
    /// appended, no reply is scheduled, no error is surfaced.
    ///
    /// On acceptance the user message is appended immediately, and one
    /// deferred task is scheduled to append the assistant's placeholder
    /// echo after the fixed delay.
    ///
    /// # Returns
    ///
    /// - `Some(message)`: the appended user message
    /// - `None`: the input was rejected
    pub async fn send_user_message(&self, text: &str) -> Option<Message> {
        if text.trim().is_empty() {
            return None;
        }

        let user_message = {
            let mut log = self.log.lock().await;
            log.append(MessageRole::User, text).clone()
        };

        let log = Arc::clone(&self.log);
        let echoed = text.to_string();
        let delay = self.reply_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut log = log.lock().await;
            log.append(
                MessageRole::Assistant,
                &format!(
                    "I received your message: \"{}\". This is a placeholder response.",
                    echoed
                ),
            );
        });

        let mut pending = self.pending_replies.lock().await;
        pending.retain(|reply| !reply.is_finished());
        pending.push(handle);
        drop(pending);

        tracing::debug!(
            session_id = %self.id,
            message_id = user_message.id,
            "user message accepted, reply scheduled"
        );

        Some(user_message)
    }

    /// Returns a snapshot of the message history in append order.
    pub async fn messages(&self) -> Vec<Message> {
        self.log.lock().await.messages().to_vec()
    }

    /// Returns the number of messages currently in the log.
    pub async fn message_count(&self) -> usize {
        self.log.lock().await.len()
    }

    /// Selects the intensity level for this session.
    pub async fn select_intensity(&self, level: IntensityLevel) {
        *self.intensity.lock().await = level;
    }

    /// Returns the currently selected intensity level.
    pub async fn intensity(&self) -> IntensityLevel {
        *self.intensity.lock().await
    }

    /// Flips the voice-record toggle and returns the new state.
    ///
    /// Recording start/stop are unimplemented stubs; the toggle has no
    /// effect beyond its own state.
    pub async fn toggle_recording(&self) -> RecordingState {
        let mut recording = self.recording.lock().await;
        *recording = recording.toggled();
        *recording
    }

    /// Returns the current voice-record toggle state.
    pub async fn recording(&self) -> RecordingState {
        *self.recording.lock().await
    }

    /// Tears the session down, cancelling replies that have not fired.
    ///
    /// A reply scheduled before shutdown and not yet delivered is
    /// silently dropped rather than appended to a disposed log.
    pub async fn shutdown(&self) {
        let mut pending = self.pending_replies.lock().await;
        let cancelled = pending.len();
        for reply in pending.drain(..) {
            reply.abort();
        }
        if cancelled > 0 {
            tracing::debug!(
                session_id = %self.id,
                cancelled,
                "conversation shut down with scheduled replies outstanding"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::featured_product;

    // Short delay so tests stay fast; the protocol is delay-agnostic.
    const TEST_DELAY: Duration = Duration::from_millis(50);

    fn test_engine() -> ConversationEngine {
        ConversationEngine::new(&featured_product(), IntensityLevel::default(), TEST_DELAY)
    }

    async fn wait_for_replies() {
        tokio::time::sleep(TEST_DELAY * 3).await;
    }

    #[tokio::test]
    async fn test_log_is_seeded_with_opening_message() {
        let engine = test_engine();
        let messages = engine.messages().await;

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, MessageRole::Assistant);
        assert_eq!(messages[0].id, 1);
        assert!(messages[0].text.contains("Apple Watch Series 9"));
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected() {
        let engine = test_engine();

        assert!(engine.send_user_message("").await.is_none());
        assert!(engine.send_user_message("   ").await.is_none());
        assert!(engine.send_user_message("\n\t").await.is_none());

        wait_for_replies().await;
        assert_eq!(engine.message_count().await, 1);
    }

    #[tokio::test]
    async fn test_send_appends_then_echoes() {
        let engine = test_engine();

        let sent = engine.send_user_message("Buy it anyway").await.unwrap();
        assert_eq!(sent.role, MessageRole::User);
        assert_eq!(sent.text, "Buy it anyway");

        // User message lands synchronously, reply has not fired yet
        let messages = engine.messages().await;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, MessageRole::User);
        assert_eq!(messages[1].text, "Buy it anyway");

        wait_for_replies().await;

        let messages = engine.messages().await;
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].role, MessageRole::Assistant);
        assert_eq!(
            messages[2].text,
            "I received your message: \"Buy it anyway\". This is a placeholder response."
        );
    }

    #[tokio::test]
    async fn test_ids_are_strictly_increasing() {
        let engine = test_engine();

        engine.send_user_message("one").await.unwrap();
        engine.send_user_message("two").await.unwrap();
        wait_for_replies().await;

        let messages = engine.messages().await;
        let ids: Vec<u64> = messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_rapid_sends_reply_in_send_order() {
        let engine = test_engine();

        engine.send_user_message("first").await.unwrap();
        engine.send_user_message("second").await.unwrap();
        engine.send_user_message("third").await.unwrap();

        assert_eq!(engine.message_count().await, 4);

        wait_for_replies().await;

        let messages = engine.messages().await;
        assert_eq!(messages.len(), 7);
        // Each reply echoes its own triggering text, in send order
        for (reply, sent) in messages[4..].iter().zip(["first", "second", "third"]) {
            assert_eq!(reply.role, MessageRole::Assistant);
            assert_eq!(
                reply.text,
                format!(
                    "I received your message: \"{}\". This is a placeholder response.",
                    sent
                )
            );
        }
    }

    #[tokio::test]
    async fn test_shutdown_cancels_pending_replies() {
        let engine = test_engine();

        engine.send_user_message("too late").await.unwrap();
        engine.shutdown().await;

        wait_for_replies().await;
        assert_eq!(engine.message_count().await, 2);
    }

    #[tokio::test]
    async fn test_intensity_selection() {
        let engine = test_engine();
        assert_eq!(engine.intensity().await, IntensityLevel::StubbornFriend);

        engine
            .select_intensity(IntensityLevel::HardcoreSteelmanning)
            .await;
        assert_eq!(
            engine.intensity().await,
            IntensityLevel::HardcoreSteelmanning
        );

        // Selection never touches the log
        assert_eq!(engine.message_count().await, 1);
    }

    #[tokio::test]
    async fn test_recording_toggle_is_inert() {
        let engine = test_engine();
        assert_eq!(engine.recording().await, RecordingState::Idle);

        assert_eq!(engine.toggle_recording().await, RecordingState::Recording);
        assert_eq!(engine.toggle_recording().await, RecordingState::Idle);

        assert_eq!(engine.message_count().await, 1);
    }
}
