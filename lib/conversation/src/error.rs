//! Error types for the conversation crate.

use helpline_core::ConversationId;
use std::fmt;

/// Errors from conversation store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Conversation not found.
    NotFound { id: ConversationId },
    /// Storage operation failed.
    StorageFailed { reason: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "conversation not found: {id}"),
            Self::StorageFailed { reason } => {
                write!(f, "conversation storage failed: {reason}")
            }
        }
    }
}

impl std::error::Error for StoreError {}
