//! API error mapping.
//!
//! Domain errors become HTTP status codes with a generic JSON body; the
//! details of internal failures only reach the log.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use helpline_agent::AgentError;
use helpline_conversation::StoreError;
use helpline_core::ConversationId;
use serde::Serialize;

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// User-visible error message.
    pub error: String,
    /// When the error was produced.
    pub timestamp: DateTime<Utc>,
}

/// API request errors.
#[derive(Debug)]
pub enum ApiError {
    /// The request body failed validation before reaching the core.
    InvalidInput { reason: &'static str },
    /// The referenced conversation does not exist.
    ConversationNotFound { id: ConversationId },
    /// Anything unexpected from the core.
    Internal { details: String },
}

impl From<AgentError> for ApiError {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::Store(StoreError::NotFound { id }) => Self::ConversationNotFound { id },
            other => Self::Internal {
                details: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidInput { reason } => (StatusCode::BAD_REQUEST, reason.to_string()),
            Self::ConversationNotFound { .. } => {
                (StatusCode::NOT_FOUND, "Conversation not found".to_string())
            }
            Self::Internal { details } => {
                tracing::error!("internal error: {}", details);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred while processing your message".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                error: message,
                timestamp: Utc::now(),
            }),
        )
            .into_response()
    }
}
