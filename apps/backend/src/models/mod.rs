//! Request and response types for the HTTP API.
//!
//! Session snapshots arrive as raw JSON values and go through
//! [`SessionState::from_snapshot`] so a malformed snapshot can never fail
//! deserialization of the whole request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// Re-export shared types from tutor-core
pub use tutor_core::session::{ChatMessage, ChatRole, SessionState};

/// POST /api/chat request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub session_state: Option<Value>,
}

/// POST /api/chat and /api/start_review response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    pub session_state: SessionState,
}

/// POST /api/start_review request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartReviewRequest {
    #[serde(default)]
    pub words: Vec<String>,
    #[serde(default)]
    pub session_state: Option<Value>,
}

/// POST /api/next_question request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextQuestionRequest {
    #[serde(default)]
    pub session_state: Option<Value>,
}

/// POST /api/next_question response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextQuestionResponse {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub celebration: Option<bool>,
    pub session_state: SessionState,
}

/// POST /api/speak request
#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// POST /api/stt response
#[derive(Debug, Serialize)]
pub struct SttResponse {
    pub text: String,
}

/// GET /api/health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}
