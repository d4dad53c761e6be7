//! Response selection.
//!
//! Picks one canned response uniformly at random, prefixing a continuity
//! phrase once the conversation is deep enough. The random source is
//! supplied by the caller so tests can pin the choice.

use crate::intent::Intent;
use crate::knowledge::KnowledgeBase;
use rand::Rng;

/// Continuity phrases for ongoing conversations. The empty entry keeps a
/// quarter of ongoing responses unprefixed.
pub const CONTINUITY_PREFIXES: &[&str] = &["I see. ", "Understood. ", "Got it. ", ""];

/// A conversation counts as ongoing once its history is deeper than this,
/// with the user message currently being answered already counted.
const CONTINUITY_THRESHOLD: usize = 2;

/// Chooses responses from the knowledge base.
pub struct ResponseSelector {
    knowledge: KnowledgeBase,
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSelector {
    /// Creates a selector over the standard knowledge base.
    #[must_use]
    pub fn new() -> Self {
        Self {
            knowledge: KnowledgeBase::new(),
        }
    }

    /// Selects a response for `intent`.
    ///
    /// `history_len` is the conversation depth at selection time. Pure
    /// function of its inputs and the supplied random source.
    pub fn select_response<R: Rng>(
        &self,
        intent: Intent,
        history_len: usize,
        rng: &mut R,
    ) -> String {
        let candidates = self.knowledge.responses_for(intent);
        let base = candidates[rng.gen_range(0..candidates.len())];

        if history_len > CONTINUITY_THRESHOLD {
            let prefix = CONTINUITY_PREFIXES[rng.gen_range(0..CONTINUITY_PREFIXES.len())];
            format!("{prefix}{base}")
        } else {
            base.to_string()
        }
    }
}
