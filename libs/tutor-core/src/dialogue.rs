//! Turn routing between pronunciation practice and free conversation.
//!
//! The completion call itself is the backend's job; everything decidable
//! without I/O — which path a message takes, history bookkeeping, prompt
//! assembly — happens here so it stays testable.

use rand::Rng;

use crate::quiz;
use crate::session::{ChatMessage, ChatRole, SessionState};

/// Persona instruction sent with every completion request. Owned by the
/// server; never accepted from a client snapshot.
pub const SYSTEM_PROMPT: &str = "\
You are Emma, a kind and encouraging English AI tutor for elementary school students.

Personality:
- Always speak in a positive, encouraging tone
- Never scold a student for mistakes; encourage them to try again
- Use simple English suited to elementary school students
- Use emoji where it fits (😊, 👏, 🌟 and so on)

Main roles:
1. Help review today's words and sentences
2. Guide pronunciation practice and give feedback
3. Be a partner for free English conversation
4. Answer questions about learning English

Style: warm, friendly, and patient.";

/// Outcome of routing one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// The message was a pronunciation attempt; here is the feedback.
    /// The free-chat path is skipped entirely.
    QuizFeedback(String),
    /// The message is free conversation; send these messages (persona
    /// first, then the full history) to the completion collaborator.
    Chat(Vec<ChatMessage>),
}

/// Route an inbound learner message.
///
/// In quiz mode while awaiting a pronunciation the message is judged as an
/// answer attempt. Otherwise it is appended to history (capped) and a
/// completion prompt is assembled.
pub fn begin_turn(message: &str, state: &mut SessionState, rng: &mut impl Rng) -> Turn {
    if state.quiz_mode && state.waiting_for_pronunciation {
        return Turn::QuizFeedback(quiz::evaluate_answer(message, state, rng));
    }

    state.push_message(ChatRole::User, message);
    Turn::Chat(prompt_messages(state))
}

/// Persona instruction followed by the full conversation history.
pub fn prompt_messages(state: &SessionState) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(state.conversation_history.len() + 1);
    messages.push(ChatMessage::new(ChatRole::System, SYSTEM_PROMPT));
    messages.extend(state.conversation_history.iter().cloned());
    messages
}

/// Record the collaborator's reply after a free-chat turn.
pub fn complete_chat_turn(reply: &str, state: &mut SessionState) {
    state.push_message(ChatRole::Assistant, reply);
}
