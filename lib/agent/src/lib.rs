//! Rule-based support agent for the helpline platform.
//!
//! This crate provides:
//!
//! - **Intent classifier**: Ordered keyword rules mapping message text to
//!   an intent and a static confidence score
//! - **Knowledge base**: Canned responses per intent
//! - **Response selector**: Uniform random choice with conversation-depth
//!   continuity prefixes
//! - **Agent**: The orchestrator tying classification, selection, and the
//!   conversation store together per incoming message

pub mod agent;
pub mod error;
pub mod intent;
pub mod knowledge;
pub mod responder;

pub use agent::{AgentReply, SupportAgent};
pub use error::AgentError;
pub use intent::{Intent, IntentClassifier, IntentResult};
pub use knowledge::KnowledgeBase;
pub use responder::ResponseSelector;
