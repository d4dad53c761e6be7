//! Canned response knowledge base.
//!
//! A static mapping from intent to candidate responses, built once at
//! startup and never mutated.

use crate::intent::Intent;
use std::collections::HashMap;

const GREETING_RESPONSES: &[&str] = &[
    "Hello! Welcome to our customer care service. How can I assist you today?",
    "Hi there! I'm here to help. What can I do for you?",
    "Greetings! How may I help you today?",
    "Welcome! I'm your customer care assistant. What brings you here today?",
];

const SUPPORT_RESPONSES: &[&str] = &[
    "I'd be happy to help you with that. Could you please provide more details about the issue you're experiencing?",
    "I understand you need support. Let me assist you with that. Can you describe the problem in more detail?",
    "I'm here to help resolve your issue. Please share more information so I can provide the best solution.",
    "Thank you for reaching out. I'll do my best to help. What specific support do you need?",
];

const BILLING_RESPONSES: &[&str] = &[
    "I can help you with billing inquiries. What specific billing question do you have?",
    "For billing matters, I'm here to assist. Could you please specify your billing concern?",
    "I understand you have a billing question. Let me help you with that. What would you like to know?",
    "Regarding billing, I can provide information about payments, invoices, and charges. What do you need help with?",
];

const TECHNICAL_RESPONSES: &[&str] = &[
    "I can assist with technical issues. What technical problem are you experiencing?",
    "Let me help you troubleshoot this technical issue. Can you describe what's happening?",
    "I'm here to help with technical support. Please provide details about the technical difficulty you're facing.",
    "For technical assistance, I'll need some information. What seems to be the technical problem?",
];

const PRODUCT_INFO_RESPONSES: &[&str] = &[
    "I'd be happy to provide information about our products and services. What would you like to know?",
    "I can help you learn more about our offerings. Which product or service are you interested in?",
    "Let me share information about our products. What specific details are you looking for?",
    "I'm here to answer your questions about our products and services. How can I help?",
];

const COMPLAINT_RESPONSES: &[&str] = &[
    "I sincerely apologize for any inconvenience. Your feedback is important to us. Please tell me more about your concern.",
    "I'm sorry to hear about your experience. I want to help resolve this. Can you provide more details?",
    "Thank you for bringing this to our attention. I apologize for the issue. Let me see how I can help.",
    "I understand your frustration and I'm here to help. Please share more details so I can address your concern properly.",
];

const FEEDBACK_RESPONSES: &[&str] = &[
    "Thank you for your feedback! We truly appreciate your input. Is there anything specific you'd like to share?",
    "We value your feedback! Please tell me more about your experience.",
    "Your feedback helps us improve. Thank you for taking the time to share. What would you like to tell us?",
    "I appreciate you sharing your thoughts. Your feedback is important to us. Please continue.",
];

const FAREWELL_RESPONSES: &[&str] = &[
    "Thank you for contacting us! Have a great day!",
    "You're welcome! Feel free to reach out anytime. Take care!",
    "Glad I could help! Don't hesitate to contact us again if you need anything.",
    "Thank you for chatting with us. Have a wonderful day!",
];

const UNKNOWN_RESPONSES: &[&str] = &[
    "I'm not quite sure I understand. Could you please rephrase or provide more details?",
    "I want to make sure I help you correctly. Could you elaborate on what you need?",
    "I'm here to help, but I need a bit more information. Can you explain what you're looking for?",
    "Let me make sure I understand your request. Could you provide more context?",
];

/// Static mapping from intent to candidate responses.
pub struct KnowledgeBase {
    responses: HashMap<Intent, &'static [&'static str]>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeBase {
    /// Builds the knowledge base with the standard response lists.
    #[must_use]
    pub fn new() -> Self {
        let mut responses: HashMap<Intent, &'static [&'static str]> = HashMap::new();
        responses.insert(Intent::Greeting, GREETING_RESPONSES);
        responses.insert(Intent::Support, SUPPORT_RESPONSES);
        responses.insert(Intent::Billing, BILLING_RESPONSES);
        responses.insert(Intent::Technical, TECHNICAL_RESPONSES);
        responses.insert(Intent::ProductInfo, PRODUCT_INFO_RESPONSES);
        responses.insert(Intent::Complaint, COMPLAINT_RESPONSES);
        responses.insert(Intent::Feedback, FEEDBACK_RESPONSES);
        responses.insert(Intent::Farewell, FAREWELL_RESPONSES);
        responses.insert(Intent::Unknown, UNKNOWN_RESPONSES);

        Self { responses }
    }

    /// Returns the candidate responses for an intent.
    ///
    /// Intents without an entry fall back to the unknown list.
    #[must_use]
    pub fn responses_for(&self, intent: Intent) -> &'static [&'static str] {
        self.responses
            .get(&intent)
            .copied()
            .unwrap_or(UNKNOWN_RESPONSES)
    }
}
