//! Voice endpoints: text-to-speech and speech-to-text

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{SpeakRequest, SttResponse};
use crate::AppState;

/// POST /api/speak
///
/// Returns MP3 audio. Short-lived caching is allowed since the same
/// prompt text repeats often during a review.
pub async fn speak(
    State(state): State<AppState>,
    Json(payload): Json<SpeakRequest>,
) -> Result<Response> {
    let text = payload
        .text
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ApiError::BadRequest("text is required".to_string()))?;

    let audio = state.openai.speak(&text).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "audio/mpeg"),
            (header::CACHE_CONTROL, "public, max-age=300"),
        ],
        audio,
    )
        .into_response())
}

/// POST /api/stt
///
/// Accepts a multipart form with an `audio` part and returns the
/// transcription; an unrecognized recording yields an empty string.
pub async fn stt(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SttResponse>> {
    let mut audio: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::BadRequest(format!("invalid multipart form: {err}")))?
    {
        if field.name() == Some("audio") {
            let filename = field
                .file_name()
                .unwrap_or("audio.webm")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|err| ApiError::BadRequest(format!("failed to read audio: {err}")))?;
            audio = Some((bytes.to_vec(), filename));
            break;
        }
    }

    let (bytes, filename) =
        audio.ok_or_else(|| ApiError::BadRequest("audio file is required".to_string()))?;

    let text = state.openai.transcribe(bytes, &filename).await?;

    Ok(Json(SttResponse { text }))
}
