//! Common test utilities for integration tests.
//!
//! The quiz flow is fully local, so most tests run without any
//! collaborator. The client is built without an API key; tests that need
//! a real completion service are `#[ignore]`d.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use serde_json::{json, Value};

use emma_tutor_backend::services::openai::OpenAiClient;
use emma_tutor_backend::{router, AppState};

/// Test context wrapping the application router.
pub struct TestContext {
    state: AppState,
}

impl TestContext {
    /// Create a context with no collaborator configured.
    pub fn new() -> Self {
        let state = AppState {
            openai: Arc::new(OpenAiClient::new(None, "http://localhost:9")),
        };
        Self { state }
    }

    /// Create a context from the environment (for `#[ignore]`d tests that
    /// talk to a real collaborator).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let state = AppState {
            openai: Arc::new(OpenAiClient::from_env()),
        };
        Self { state }
    }

    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("failed to build test server")
    }
}

/// Session snapshot mid-quiz, awaiting a pronunciation of the word at
/// `index`.
pub fn awaiting_pronunciation(words: &[&str], index: usize) -> Value {
    json!({
        "conversationHistory": [],
        "todayVocabulary": words,
        "currentQuizIndex": index,
        "quizMode": true,
        "waitingForPronunciation": true,
    })
}
