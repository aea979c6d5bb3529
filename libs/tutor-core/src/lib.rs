//! Core tutoring library shared by the backend.
//!
//! Provides:
//! - Levenshtein-based similarity scoring for pronunciation answers
//! - Serializable session state with untrusted-snapshot normalization
//! - The review quiz state machine
//! - Dialogue routing between quiz answers and free conversation

pub mod dialogue;
pub mod quiz;
pub mod session;
pub mod similarity;

pub use dialogue::{begin_turn, complete_chat_turn, prompt_messages, Turn, SYSTEM_PROMPT};
pub use quiz::{evaluate_answer, next_question, start_review, Question, CORRECT_THRESHOLD};
pub use session::{ChatMessage, ChatRole, SessionState, HISTORY_CAP};
pub use similarity::{levenshtein_distance, similarity};
