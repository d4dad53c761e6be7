//! The support agent.
//!
//! Orchestrates one incoming message: ensure the conversation exists,
//! record the user message, classify it, select a response, record the
//! assistant message, and report the outcome.

use crate::error::AgentError;
use crate::intent::{Intent, IntentClassifier};
use crate::responder::ResponseSelector;
use helpline_conversation::{Conversation, ConversationStore, Message};
use helpline_core::{ConversationId, UserId};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::sync::Mutex;

/// The outcome of processing one user message.
#[derive(Debug, Clone, Serialize)]
pub struct AgentReply {
    /// The selected response text.
    pub response: String,
    /// The detected intent.
    pub intent: Intent,
    /// The rule's static confidence score.
    pub confidence: f32,
}

/// Rule-based customer-support agent.
///
/// Owns the conversation store, the classifier, the selector, and the
/// random source; one agent instance serves a whole process, and tests
/// build their own.
pub struct SupportAgent {
    store: ConversationStore,
    classifier: IntentClassifier,
    selector: ResponseSelector,
    rng: Mutex<StdRng>,
}

impl Default for SupportAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl SupportAgent {
    /// Creates an agent with an entropy-seeded random source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates an agent with an explicit random source, letting tests pin
    /// response selection.
    #[must_use]
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            store: ConversationStore::new(),
            classifier: IntentClassifier::new(),
            selector: ResponseSelector::new(),
            rng: Mutex::new(rng),
        }
    }

    /// Processes one user message and returns the assistant's reply.
    ///
    /// Creates the conversation on first contact (recording `user_id` if
    /// given), then appends exactly two messages: the user's raw text and
    /// the selected response. The continuity check in the selector sees the
    /// history depth with the user message already counted.
    pub fn process_message(
        &self,
        conversation_id: &ConversationId,
        text: &str,
        user_id: Option<UserId>,
    ) -> Result<AgentReply, AgentError> {
        tracing::info!(conversation_id = %conversation_id, "processing message");

        self.store.get_or_create(conversation_id, user_id)?;
        let history_len = self.store.append(conversation_id, Message::user(text))?;

        let result = self.classifier.classify(text);
        tracing::debug!(
            intent = %result.intent,
            confidence = result.confidence,
            "intent detected"
        );

        let response = {
            let mut rng = self.rng.lock().map_err(|_| AgentError::RandomSourceFailed {
                reason: "rng lock poisoned".to_string(),
            })?;
            self.selector
                .select_response(result.intent, history_len, &mut *rng)
        };

        self.store
            .append(conversation_id, Message::assistant(response.clone()))?;

        Ok(AgentReply {
            response,
            intent: result.intent,
            confidence: result.confidence,
        })
    }

    /// Returns the message history for a conversation, empty if unknown.
    pub fn history(&self, conversation_id: &ConversationId) -> Result<Vec<Message>, AgentError> {
        let conversation = self.store.get(conversation_id)?;
        Ok(conversation.map(|c| c.messages).unwrap_or_default())
    }

    /// Returns a snapshot of a conversation, if present.
    pub fn conversation(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Option<Conversation>, AgentError> {
        Ok(self.store.get(conversation_id)?)
    }

    /// Deletes a conversation. Returns true if one existed.
    pub fn delete_conversation(&self, conversation_id: &ConversationId) -> Result<bool, AgentError> {
        Ok(self.store.delete(conversation_id)?)
    }

    /// Returns snapshots of every tracked conversation.
    pub fn conversations(&self) -> Result<Vec<Conversation>, AgentError> {
        Ok(self.store.list_all()?)
    }
}
