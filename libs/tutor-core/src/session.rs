//! Session state round-tripped between client and server on every request.
//!
//! The server keeps nothing: the client sends its last snapshot with each
//! request and stores the one it gets back. Snapshots are untrusted input,
//! so rehydration coerces every field individually and repairs invariants
//! instead of failing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum number of conversation entries retained; oldest are dropped first.
pub const HISTORY_CAP: usize = 20;

/// Role of a conversation entry.
///
/// `System` never appears in stored history; it exists so the persona
/// instruction can be serialized alongside history when building a
/// completion prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One conversation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// A learner's progress through one tutoring session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub conversation_history: Vec<ChatMessage>,
    pub today_vocabulary: Vec<String>,
    pub current_quiz_index: usize,
    pub quiz_mode: bool,
    pub waiting_for_pronunciation: bool,
}

impl SessionState {
    /// Rebuild a session from a client-supplied snapshot.
    ///
    /// Every field is coerced independently; anything missing or of the
    /// wrong type falls back to its default. History entries with an
    /// unknown role (including `system` — the persona prompt is owned by
    /// the server) or non-string content are dropped.
    pub fn from_snapshot(snapshot: Option<&Value>) -> Self {
        let mut state = Self::default();

        let Some(snapshot) = snapshot else {
            return state;
        };

        if let Some(entries) = snapshot.get("conversationHistory").and_then(Value::as_array) {
            state.conversation_history = entries
                .iter()
                .filter_map(|entry| {
                    let role = match entry.get("role").and_then(Value::as_str) {
                        Some("user") => ChatRole::User,
                        Some("assistant") => ChatRole::Assistant,
                        _ => return None,
                    };
                    let content = entry.get("content").and_then(Value::as_str)?;
                    Some(ChatMessage::new(role, content))
                })
                .collect();
        }

        if let Some(words) = snapshot.get("todayVocabulary").and_then(Value::as_array) {
            state.today_vocabulary = words
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect();
        }

        if let Some(index) = snapshot.get("currentQuizIndex").and_then(Value::as_u64) {
            state.current_quiz_index = index as usize;
        }

        state.quiz_mode = snapshot
            .get("quizMode")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        state.waiting_for_pronunciation = snapshot
            .get("waitingForPronunciation")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        state.normalize();
        state
    }

    /// Repair structural invariants after rehydration or mutation.
    ///
    /// - `current_quiz_index` is clamped to `0..=len(today_vocabulary)`
    /// - `waiting_for_pronunciation` requires quiz mode and a word left
    ///   to practice
    /// - history keeps only the most recent [`HISTORY_CAP`] entries
    pub fn normalize(&mut self) {
        if self.current_quiz_index > self.today_vocabulary.len() {
            self.current_quiz_index = self.today_vocabulary.len();
        }

        if self.waiting_for_pronunciation
            && !(self.quiz_mode && self.current_quiz_index < self.today_vocabulary.len())
        {
            self.waiting_for_pronunciation = false;
        }

        self.truncate_history();
    }

    /// Append a conversation entry, dropping the oldest past the cap.
    pub fn push_message(&mut self, role: ChatRole, content: impl Into<String>) {
        self.conversation_history.push(ChatMessage::new(role, content));
        self.truncate_history();
    }

    fn truncate_history(&mut self) {
        let len = self.conversation_history.len();
        if len > HISTORY_CAP {
            self.conversation_history.drain(..len - HISTORY_CAP);
        }
    }
}
