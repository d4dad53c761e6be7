//! Conversation tracking for the helpline support assistant.
//!
//! This crate provides:
//!
//! - **Message model**: Immutable user/assistant messages with timestamps
//! - **Conversation store**: In-memory, append-only conversation histories
//!   keyed by conversation ID

pub mod error;
pub mod message;
pub mod store;

pub use error::StoreError;
pub use message::{Message, MessageRole};
pub use store::{Conversation, ConversationStore};
