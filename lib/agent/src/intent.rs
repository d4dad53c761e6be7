//! Intent classification using ordered keyword rules.
//!
//! Classification is pure substring matching over the lower-cased message.
//! Rules are evaluated in a fixed order and the first match wins; the order
//! is the tie-break policy (a message containing both "hello" and "bill"
//! classifies as a greeting).

use serde::{Deserialize, Serialize};
use std::fmt;

/// The purpose of a user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Greeting (hello, hi, good morning, ...).
    Greeting,
    /// General request for help.
    Support,
    /// Billing, payments, refunds.
    Billing,
    /// Errors, bugs, things not working.
    Technical,
    /// Questions about products and services.
    ProductInfo,
    /// Dissatisfaction or anger.
    Complaint,
    /// Suggestions and feature requests.
    Feedback,
    /// Closing the conversation.
    Farewell,
    /// Nothing matched.
    Unknown,
}

impl Intent {
    /// Returns the stable label for the intent.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Support => "support",
            Intent::Billing => "billing",
            Intent::Technical => "technical",
            Intent::ProductInfo => "product_info",
            Intent::Complaint => "complaint",
            Intent::Feedback => "feedback",
            Intent::Farewell => "farewell",
            Intent::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of intent classification.
///
/// The confidence is a static per-rule constant in `[0, 1]`, not derived
/// from match strength; it is informational only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntentResult {
    /// Detected intent.
    pub intent: Intent,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
}

/// A single keyword rule in the classification table.
struct IntentRule {
    intent: Intent,
    confidence: f32,
    keywords: &'static [&'static str],
    /// Messages at or above this many characters never match the rule.
    max_chars: Option<usize>,
}

impl IntentRule {
    /// Tests the rule against an already lower-cased message.
    fn matches(&self, text: &str) -> bool {
        if let Some(max) = self.max_chars {
            if text.chars().count() >= max {
                return false;
            }
        }
        self.keywords.iter().any(|keyword| text.contains(keyword))
    }
}

/// Farewells only apply to short messages; longer ones that merely say
/// "thanks" in passing keep their real intent.
const FAREWELL_MAX_CHARS: usize = 50;

const UNKNOWN_CONFIDENCE: f32 = 0.5;

/// The classification table, evaluated top to bottom, first match wins.
const RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Greeting,
        confidence: 0.9,
        keywords: &[
            "hello",
            "hi",
            "hey",
            "greetings",
            "good morning",
            "good afternoon",
            "good evening",
        ],
        max_chars: None,
    },
    IntentRule {
        intent: Intent::Farewell,
        confidence: 0.85,
        keywords: &["bye", "goodbye", "see you", "thanks", "thank you", "that's all"],
        max_chars: Some(FAREWELL_MAX_CHARS),
    },
    IntentRule {
        intent: Intent::Billing,
        confidence: 0.88,
        keywords: &[
            "bill",
            "invoice",
            "payment",
            "charge",
            "refund",
            "subscription",
            "pricing",
            "cost",
        ],
        max_chars: None,
    },
    IntentRule {
        intent: Intent::Technical,
        confidence: 0.87,
        keywords: &[
            "error",
            "bug",
            "not working",
            "broken",
            "crash",
            "issue",
            "problem",
            "technical",
            "fix",
        ],
        max_chars: None,
    },
    IntentRule {
        intent: Intent::Complaint,
        confidence: 0.9,
        keywords: &[
            "complaint",
            "disappointed",
            "unhappy",
            "frustrated",
            "angry",
            "terrible",
            "awful",
            "worst",
        ],
        max_chars: None,
    },
    IntentRule {
        intent: Intent::Feedback,
        confidence: 0.86,
        keywords: &["feedback", "suggestion", "recommend", "improve", "feature request"],
        max_chars: None,
    },
    IntentRule {
        intent: Intent::ProductInfo,
        confidence: 0.82,
        keywords: &[
            "product",
            "service",
            "feature",
            "what is",
            "tell me about",
            "information",
            "details",
        ],
        max_chars: None,
    },
    IntentRule {
        intent: Intent::Support,
        confidence: 0.8,
        keywords: &["help", "support", "assist", "need", "how to", "can you", "question"],
        max_chars: None,
    },
];

/// Intent classifier over the ordered rule table.
pub struct IntentClassifier {
    rules: &'static [IntentRule],
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Creates a classifier with the standard rule table.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    /// Classifies the intent of a message.
    ///
    /// No side effects; a message matching no rule classifies as unknown.
    #[must_use]
    pub fn classify(&self, text: &str) -> IntentResult {
        let lowered = text.to_lowercase();

        for rule in self.rules {
            if rule.matches(&lowered) {
                return IntentResult {
                    intent: rule.intent,
                    confidence: rule.confidence,
                };
            }
        }

        IntentResult {
            intent: Intent::Unknown,
            confidence: UNKNOWN_CONFIDENCE,
        }
    }
}
