//! Chat endpoint: pronunciation attempts and free conversation

use axum::{extract::State, Json};
use tutor_core::dialogue::{self, Turn};
use tutor_core::session::SessionState;

use crate::error::{ApiError, Result};
use crate::models::{ChatRequest, ChatResponse};
use crate::AppState;

/// POST /api/chat
///
/// Routes the message through the dialogue core: in quiz mode awaiting a
/// pronunciation the answer is judged locally and the completion
/// collaborator is never called; otherwise the message joins the history
/// and the collaborator produces the reply.
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let message = payload
        .message
        .filter(|message| !message.is_empty())
        .ok_or_else(|| ApiError::BadRequest("message is required".to_string()))?;

    let mut session = SessionState::from_snapshot(payload.session_state.as_ref());

    let turn = dialogue::begin_turn(&message, &mut session, &mut rand::thread_rng());
    let response = match turn {
        Turn::QuizFeedback(feedback) => feedback,
        Turn::Chat(messages) => {
            let reply = state.openai.chat(&messages).await?;
            dialogue::complete_chat_turn(&reply, &mut session);
            reply
        }
    };

    Ok(Json(ChatResponse {
        response,
        session_state: session,
    }))
}
