//! Core domain types for the helpline customer-support assistant.
//!
//! This crate provides the identifier types shared by the conversation
//! store, the agent, and the HTTP server.

pub mod id;

pub use id::{ConversationId, MessageId, ParseIdError, UserId};
