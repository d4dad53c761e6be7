//! Error types for the agent crate.

use helpline_conversation::StoreError;
use std::fmt;

/// Errors from agent operations.
///
/// The agent never swallows failures; anything unexpected propagates to the
/// caller, which owns the user-visible fallback message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// The conversation store failed.
    Store(StoreError),
    /// The shared random source is unusable.
    RandomSourceFailed { reason: String },
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::RandomSourceFailed { reason } => {
                write!(f, "random source failed: {reason}")
            }
        }
    }
}

impl std::error::Error for AgentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::RandomSourceFailed { .. } => None,
        }
    }
}

impl From<StoreError> for AgentError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}
