//! Conversation domain module.
//!
//! One conversation session owns an append-only message log and the
//! simulated reply protocol: every accepted user message schedules one
//! delayed assistant reply echoing it back.
//!
//! # Module Structure
//!
//! - `message`: Message types (`MessageRole`, `Message`)
//! - `log`: Append-only message log (`ConversationLog`)
//! - `recording`: Voice-record toggle state (`RecordingState`)
//! - `engine`: Per-session engine (`ConversationEngine`)

mod engine;
mod log;
mod message;
mod recording;

// Re-export public API
pub use engine::{ConversationEngine, DEFAULT_REPLY_DELAY};
pub use log::ConversationLog;
pub use message::{Message, MessageRole};
pub use recording::RecordingState;
