//! Client for the OpenAI-compatible collaborator services: chat completion,
//! text-to-speech, and speech-to-text.
//!
//! The core only depends on the request/response contracts here; swap the
//! base URL to point at any compatible provider. Failures surface to the
//! caller unmodified — no retries, no fabricated fallback content.

use std::time::Duration;

use bytes::Bytes;
use serde::Deserialize;
use thiserror::Error;

use tutor_core::session::ChatMessage;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT_MS: u64 = 60_000;

const CHAT_MODEL: &str = "gpt-4o-mini";
const CHAT_TEMPERATURE: f64 = 0.7;
const CHAT_MAX_TOKENS: u32 = 300;
const TTS_MODEL: &str = "tts-1";
const TTS_VOICE: &str = "nova";
const STT_MODEL: &str = "whisper-1";
const STT_LANGUAGE: &str = "en";

/// Errors from the collaborator services.
#[derive(Debug, Error)]
pub enum OpenAiError {
    #[error("not configured: {0}")]
    NotConfigured(&'static str),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("completion returned no choices")]
    EmptyChoices,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct Transcription {
    #[serde(default)]
    text: String,
}

/// HTTP client for the completion, TTS, and STT collaborators.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(DEFAULT_TIMEOUT_MS))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Read `OPENAI_API_KEY` and optional `OPENAI_BASE_URL` from the
    /// environment. A missing key is not fatal at startup; the quiz flow
    /// works without a collaborator, and chat/voice calls fail with a
    /// descriptive error.
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(api_key, base_url)
    }

    fn api_key(&self) -> Result<&str, OpenAiError> {
        self.api_key
            .as_deref()
            .ok_or(OpenAiError::NotConfigured("OPENAI_API_KEY"))
    }

    /// Request one assistant message for the given prompt messages.
    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<String, OpenAiError> {
        let api_key = self.api_key()?;
        let payload = serde_json::json!({
            "model": CHAT_MODEL,
            "messages": messages,
            "temperature": CHAT_TEMPERATURE,
            "max_tokens": CHAT_MAX_TOKENS,
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;
        let response = check_status(response).await?;

        let completion: ChatCompletion = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(OpenAiError::EmptyChoices)
    }

    /// Synthesize speech for `text`. Returns MP3 bytes.
    pub async fn speak(&self, text: &str) -> Result<Bytes, OpenAiError> {
        let api_key = self.api_key()?;
        let payload = serde_json::json!({
            "model": TTS_MODEL,
            "voice": TTS_VOICE,
            "input": text,
            "response_format": "mp3",
        });

        let response = self
            .client
            .post(format!("{}/audio/speech", self.base_url))
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;
        let response = check_status(response).await?;

        Ok(response.bytes().await?)
    }

    /// Transcribe recorded audio. An unrecognized recording yields an
    /// empty string, not an error.
    pub async fn transcribe(
        &self,
        audio: Vec<u8>,
        filename: &str,
    ) -> Result<String, OpenAiError> {
        let api_key = self.api_key()?;

        let part = reqwest::multipart::Part::bytes(audio).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", STT_MODEL)
            .text("language", STT_LANGUAGE);

        let response = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(api_key)
            .multipart(form)
            .send()
            .await?;
        let response = check_status(response).await?;

        let transcription: Transcription = response.json().await?;
        Ok(transcription.text)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, OpenAiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::warn!(%status, "collaborator request failed");
    Err(OpenAiError::Status { status, body })
}
