//! Chat API routes.
//!
//! The JSON surface over the support agent: send a message, fetch history,
//! clear a conversation, list all conversations, health check.

use crate::error::ApiError;
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use helpline_agent::{Intent, SupportAgent};
use helpline_conversation::{Conversation, Message};
use helpline_core::{ConversationId, UserId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for the chat routes.
pub struct AppState {
    /// The support agent serving this process.
    pub agent: SupportAgent,
}

impl AppState {
    /// Creates the application state around an agent.
    #[must_use]
    pub fn new(agent: SupportAgent) -> Self {
        Self { agent }
    }
}

/// Request body for `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's message text.
    pub message: String,
    /// Existing conversation to continue; a fresh ID is generated if absent.
    #[serde(default)]
    pub conversation_id: Option<ConversationId>,
    /// Caller-supplied user identifier.
    #[serde(default)]
    pub user_id: Option<UserId>,
}

/// Response body for `POST /api/chat`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The assistant's reply.
    pub message: String,
    /// The conversation the exchange was recorded in.
    pub conversation_id: ConversationId,
    /// When the reply was produced.
    pub timestamp: DateTime<Utc>,
    /// Detected intent.
    pub intent: Intent,
    /// The intent rule's confidence score.
    pub confidence: f32,
}

/// Response body for `GET /api/chat/history/{conversation_id}`.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub conversation_id: ConversationId,
    pub messages: Vec<Message>,
    pub timestamp: DateTime<Utc>,
}

/// Response body for `DELETE /api/chat/{conversation_id}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub conversation_id: ConversationId,
    pub timestamp: DateTime<Utc>,
}

/// Response body for `GET /api/chat/conversations`.
#[derive(Debug, Serialize)]
pub struct ConversationsResponse {
    pub conversations: Vec<Conversation>,
    pub count: usize,
    pub timestamp: DateTime<Utc>,
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub service: &'static str,
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/chat", post(send_message))
        .route("/api/chat/history/{conversation_id}", get(history))
        .route("/api/chat/conversations", get(list_conversations))
        .route("/api/chat/{conversation_id}", delete(remove_conversation))
        .fallback(fallback)
        .with_state(state)
}

/// Processes one user message and returns the assistant's reply.
async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    // Reject empty input here; the core never sees it.
    if request.message.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            reason: "Message is required",
        });
    }

    let conversation_id = request
        .conversation_id
        .unwrap_or_else(ConversationId::generate);

    let reply = state
        .agent
        .process_message(&conversation_id, &request.message, request.user_id)?;

    Ok(Json(ChatResponse {
        message: reply.response,
        conversation_id,
        timestamp: Utc::now(),
        intent: reply.intent,
        confidence: reply.confidence,
    }))
}

/// Returns the ordered message history; empty for unknown conversations.
async fn history(
    State(state): State<Arc<AppState>>,
    Path(conversation_id): Path<String>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let conversation_id = ConversationId::from(conversation_id);
    let messages = state.agent.history(&conversation_id)?;

    Ok(Json(HistoryResponse {
        conversation_id,
        messages,
        timestamp: Utc::now(),
    }))
}

/// Clears a conversation.
async fn remove_conversation(
    State(state): State<Arc<AppState>>,
    Path(conversation_id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let conversation_id = ConversationId::from(conversation_id);

    if state.agent.delete_conversation(&conversation_id)? {
        Ok(Json(DeleteResponse {
            message: "Conversation cleared successfully",
            conversation_id,
            timestamp: Utc::now(),
        }))
    } else {
        Err(ApiError::ConversationNotFound {
            id: conversation_id,
        })
    }
}

/// Lists every tracked conversation.
async fn list_conversations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ConversationsResponse>, ApiError> {
    let conversations = state.agent.conversations()?;
    let count = conversations.len();

    Ok(Json(ConversationsResponse {
        conversations,
        count,
        timestamp: Utc::now(),
    }))
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        service: "helpline",
    })
}

/// JSON 404 for unknown paths.
async fn fallback(uri: Uri) -> impl IntoResponse {
    #[derive(Serialize)]
    struct NotFoundBody {
        error: &'static str,
        path: String,
        timestamp: DateTime<Utc>,
    }

    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            error: "Endpoint not found",
            path: uri.path().to_string(),
            timestamp: Utc::now(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use tower::ServiceExt;

    fn test_router() -> Router {
        router(Arc::new(AppState::new(SupportAgent::new())))
    }

    fn post_chat(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("parse json")
    }

    #[tokio::test]
    async fn chat_roundtrip() {
        let app = test_router();

        let response = app
            .oneshot(post_chat(serde_json::json!({
                "message": "hello there",
                "conversation_id": "c1"
            })))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["conversation_id"], "c1");
        assert_eq!(body["intent"], "greeting");
        let confidence = body["confidence"].as_f64().expect("confidence");
        assert!((confidence - 0.9).abs() < 1e-3);
        assert!(!body["message"].as_str().expect("message").is_empty());
    }

    #[tokio::test]
    async fn chat_generates_conversation_id_when_missing() {
        let app = test_router();

        let response = app
            .oneshot(post_chat(serde_json::json!({ "message": "hello" })))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let id = body["conversation_id"].as_str().expect("conversation_id");
        assert!(id.starts_with("conv_"));
    }

    #[tokio::test]
    async fn empty_message_is_rejected() {
        let app = test_router();

        let response = app
            .oneshot(post_chat(serde_json::json!({ "message": "   " })))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Message is required");
    }

    #[tokio::test]
    async fn history_returns_recorded_messages() {
        let app = test_router();

        app.clone()
            .oneshot(post_chat(serde_json::json!({
                "message": "I was charged twice",
                "conversation_id": "c1"
            })))
            .await
            .expect("response");

        let response = app
            .oneshot(get_request("/api/chat/history/c1"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["conversation_id"], "c1");
        let messages = body["messages"].as_array().expect("messages");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[0]["content"], "I was charged twice");
        assert_eq!(messages[1]["role"], "assistant");
    }

    #[tokio::test]
    async fn history_of_unknown_conversation_is_empty() {
        let app = test_router();

        let response = app
            .oneshot(get_request("/api/chat/history/missing"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["messages"].as_array().expect("messages").len(), 0);
    }

    #[tokio::test]
    async fn delete_clears_conversation() {
        let app = test_router();

        app.clone()
            .oneshot(post_chat(serde_json::json!({
                "message": "hello",
                "conversation_id": "c1"
            })))
            .await
            .expect("response");

        let delete_request = Request::builder()
            .method("DELETE")
            .uri("/api/chat/c1")
            .body(Body::empty())
            .expect("request");
        let response = app.clone().oneshot(delete_request).await.expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Conversation cleared successfully");

        // Deleting again reports not found
        let delete_request = Request::builder()
            .method("DELETE")
            .uri("/api/chat/c1")
            .body(Body::empty())
            .expect("request");
        let response = app.oneshot(delete_request).await.expect("response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Conversation not found");
    }

    #[tokio::test]
    async fn conversations_lists_all() {
        let app = test_router();

        for id in ["c1", "c2"] {
            app.clone()
                .oneshot(post_chat(serde_json::json!({
                    "message": "hello",
                    "conversation_id": id
                })))
                .await
                .expect("response");
        }

        let response = app
            .oneshot(get_request("/api/chat/conversations"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["count"], 2);
        assert_eq!(body["conversations"].as_array().expect("conversations").len(), 2);
    }

    #[tokio::test]
    async fn health_check() {
        let app = test_router();

        let response = app.oneshot(get_request("/health")).await.expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "helpline");
    }

    #[tokio::test]
    async fn unknown_route_gets_json_404() {
        let app = test_router();

        let response = app.oneshot(get_request("/nope")).await.expect("response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Endpoint not found");
        assert_eq!(body["path"], "/nope");
    }
}
