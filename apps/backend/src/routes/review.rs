//! Review quiz endpoints

use axum::Json;
use tutor_core::{quiz, session::SessionState};

use crate::error::Result;
use crate::models::{ChatResponse, NextQuestionRequest, NextQuestionResponse, StartReviewRequest};

/// POST /api/start_review
///
/// An empty word list is accepted; the first next_question call then
/// reports completion straight away.
pub async fn start_review(
    Json(payload): Json<StartReviewRequest>,
) -> Result<Json<ChatResponse>> {
    let mut session = SessionState::from_snapshot(payload.session_state.as_ref());
    let response = quiz::start_review(payload.words, &mut session);

    Ok(Json(ChatResponse {
        response,
        session_state: session,
    }))
}

/// POST /api/next_question
pub async fn next_question(
    Json(payload): Json<NextQuestionRequest>,
) -> Result<Json<NextQuestionResponse>> {
    let mut session = SessionState::from_snapshot(payload.session_state.as_ref());
    let question = quiz::next_question(&mut session);

    Ok(Json(NextQuestionResponse {
        question: question.prompt,
        target_word: question.target_word,
        celebration: question.celebration.then_some(true),
        session_state: session,
    }))
}
