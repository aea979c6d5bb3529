//! Review quiz state machine.
//!
//! A session moves through four shapes: idle (no quiz), awaiting the next
//! question, awaiting a pronunciation attempt, and complete. Starting a
//! review installs the word list; [`next_question`] presents the word at
//! the cursor (or celebrates completion); [`evaluate_answer`] judges an
//! attempt and only then advances the cursor.

use rand::Rng;

use crate::session::SessionState;
use crate::similarity::similarity;

/// Minimum similarity for a pronunciation attempt to count as correct.
pub const CORRECT_THRESHOLD: f64 = 0.7;

/// Reply when an answer arrives outside pronunciation practice.
pub const NOT_IN_PRACTICE_MODE: &str = "We're not practicing pronunciation right now! 😊";

/// A quiz prompt produced by [`next_question`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    /// Word the learner should say next; absent on completion.
    pub target_word: Option<String>,
    /// True exactly once, when the review finishes.
    pub celebration: bool,
}

/// Begin a review over `words`, replacing any previous vocabulary.
///
/// Words are trimmed and empties dropped; an empty list is accepted and
/// simply completes on the first [`next_question`]. Returns a summary of
/// the review ahead.
pub fn start_review(words: Vec<String>, state: &mut SessionState) -> String {
    state.today_vocabulary = words
        .into_iter()
        .map(|word| word.trim().to_string())
        .filter(|word| !word.is_empty())
        .collect();
    state.current_quiz_index = 0;
    state.quiz_mode = true;
    state.waiting_for_pronunciation = false;

    format!(
        "📚 Let's start today's review!\n\n\
         Today's words: {}\n\n\
         We'll practice {} words in total! 🌟\n\
         Here comes the first question! 💪",
        state.today_vocabulary.join(", "),
        state.today_vocabulary.len()
    )
}

/// Present the word at the cursor, or celebrate if none remain.
///
/// Never advances the cursor; only a correct answer does that.
pub fn next_question(state: &mut SessionState) -> Question {
    let Some(word) = state.today_vocabulary.get(state.current_quiz_index) else {
        state.quiz_mode = false;
        state.waiting_for_pronunciation = false;

        let prompt = format!(
            "🎉 Wow! You finished the whole review!\n\n\
             You practiced all {} words!\n\
             That's amazing! 👏✨\n\n\
             Review like this every day and your English will grow and grow! 💪\n\n\
             🌟 Shall we chat freely in English now?\n\
             🌟 Ask me anything you're curious about!",
            state.today_vocabulary.len()
        );
        return Question {
            prompt,
            target_word: None,
            celebration: true,
        };
    };

    let word = word.clone();
    let prompt = format!(
        "🎯 Question {}\n\n\
         Try saying '{}' out loud!\n\n\
         Listen to Emma's pronunciation first 👂",
        state.current_quiz_index + 1,
        word
    );
    state.waiting_for_pronunciation = true;

    Question {
        prompt,
        target_word: Some(word),
        celebration: false,
    }
}

/// Judge a pronunciation attempt against the current word.
///
/// Correct when the case-folded strings are similar enough, or when either
/// contains the other — a deliberately permissive fallback so a short word
/// spoken inside a longer phrase still passes. A correct answer advances
/// the cursor and leaves quiz mode awaiting the next question; a wrong one
/// leaves the session unchanged so the learner can retry.
pub fn evaluate_answer(spoken: &str, state: &mut SessionState, rng: &mut impl Rng) -> String {
    if !state.waiting_for_pronunciation {
        return NOT_IN_PRACTICE_MODE.to_string();
    }

    let Some(word) = state.today_vocabulary.get(state.current_quiz_index).cloned() else {
        // Unreachable after normalize(), but never index blindly into
        // client-driven data.
        state.waiting_for_pronunciation = false;
        return NOT_IN_PRACTICE_MODE.to_string();
    };

    let target = word.to_lowercase();
    let answer = spoken.to_lowercase().trim().to_string();

    let score = similarity(&target, &answer);
    let correct = score >= CORRECT_THRESHOLD || target.contains(&answer) || answer.contains(&target);

    if correct {
        state.current_quiz_index += 1;
        state.waiting_for_pronunciation = false;
        praise(&word, rng.gen_range(0..3))
    } else {
        encourage(&word, rng.gen_range(0..3))
    }
}

fn praise(word: &str, pick: usize) -> String {
    match pick {
        0 => format!("Great job! 👏 Your pronunciation of '{word}' sounds wonderful!"),
        1 => format!("Perfect! 🌟 You said '{word}' really well!"),
        _ => format!("Amazing! 💪 Your '{word}' sounds just like a native speaker!"),
    }
}

fn encourage(word: &str, pick: usize) -> String {
    match pick {
        0 => format!("So close! Shall we try saying '{word}' one more time? 😊"),
        1 => format!("Almost there! Say '{word}' again, nice and slowly! 💪"),
        _ => format!("That's okay! Want to give '{word}' one more try? 🌟"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_start_review_normalizes_words() {
        let mut state = SessionState::default();
        let words = vec![
            "apple".to_string(),
            " ".to_string(),
            "banana ".to_string(),
            String::new(),
        ];
        let reply = start_review(words, &mut state);

        assert_eq!(state.today_vocabulary, vec!["apple", "banana"]);
        assert_eq!(state.current_quiz_index, 0);
        assert!(state.quiz_mode);
        assert!(!state.waiting_for_pronunciation);
        assert!(reply.contains("apple, banana"));
        assert!(reply.contains("2 words"));
    }

    #[test]
    fn test_start_review_empty_vocabulary_completes_immediately() {
        let mut state = SessionState::default();
        start_review(vec![" ".to_string()], &mut state);
        assert!(state.today_vocabulary.is_empty());

        let question = next_question(&mut state);
        assert!(question.celebration);
        assert_eq!(question.target_word, None);
        assert!(!state.quiz_mode);
    }

    #[test]
    fn test_next_question_presents_word_without_advancing() {
        let mut state = SessionState::default();
        start_review(vec!["apple".to_string()], &mut state);

        let question = next_question(&mut state);
        assert_eq!(question.target_word.as_deref(), Some("apple"));
        assert!(!question.celebration);
        assert!(question.prompt.contains("Question 1"));
        assert!(question.prompt.contains("'apple'"));
        assert_eq!(state.current_quiz_index, 0);
        assert!(state.waiting_for_pronunciation);
    }

    #[test]
    fn test_evaluate_answer_outside_practice_mode() {
        let mut state = SessionState::default();
        let before = state.clone();

        let reply = evaluate_answer("apple", &mut state, &mut rng());
        assert_eq!(reply, NOT_IN_PRACTICE_MODE);
        assert_eq!(state, before);
    }

    #[test]
    fn test_evaluate_answer_exact_match_advances() {
        let mut state = SessionState::default();
        start_review(vec!["apple".to_string()], &mut state);
        next_question(&mut state);

        let reply = evaluate_answer("apple", &mut state, &mut rng());
        assert!(reply.contains("'apple'"));
        assert_eq!(state.current_quiz_index, 1);
        assert!(!state.waiting_for_pronunciation);
    }

    #[test]
    fn test_evaluate_answer_wrong_leaves_state() {
        let mut state = SessionState::default();
        start_review(vec!["apple".to_string()], &mut state);
        next_question(&mut state);

        let reply = evaluate_answer("xyz", &mut state, &mut rng());
        assert!(reply.contains("'apple'"));
        assert_eq!(state.current_quiz_index, 0);
        assert!(state.waiting_for_pronunciation);
    }

    #[test]
    fn test_evaluate_answer_case_folded_and_trimmed() {
        let mut state = SessionState::default();
        start_review(vec!["Apple".to_string()], &mut state);
        next_question(&mut state);

        evaluate_answer("  APPLE  ", &mut state, &mut rng());
        assert_eq!(state.current_quiz_index, 1);
    }

    #[test]
    fn test_evaluate_answer_substring_fallback() {
        // "cat" inside a longer phrase scores well below the threshold,
        // but the containment check passes it anyway.
        let mut state = SessionState::default();
        start_review(vec!["cat".to_string()], &mut state);
        next_question(&mut state);

        assert!(similarity("cat", "i said the cat word") < CORRECT_THRESHOLD);
        evaluate_answer("i said the cat word", &mut state, &mut rng());
        assert_eq!(state.current_quiz_index, 1);
    }

    #[test]
    fn test_evaluate_answer_near_miss_passes_threshold() {
        let mut state = SessionState::default();
        start_review(vec!["banana".to_string()], &mut state);
        next_question(&mut state);

        // one substitution over six characters
        evaluate_answer("banena", &mut state, &mut rng());
        assert_eq!(state.current_quiz_index, 1);
    }

    #[test]
    fn test_seeded_rng_gives_exact_feedback() {
        let mut state = SessionState::default();
        start_review(vec!["apple".to_string()], &mut state);
        next_question(&mut state);

        let mut seeded = ChaCha8Rng::seed_from_u64(7);
        let pick = seeded.gen_range(0..3usize);
        let expected = match pick {
            0 => "Great job! 👏 Your pronunciation of 'apple' sounds wonderful!",
            1 => "Perfect! 🌟 You said 'apple' really well!",
            _ => "Amazing! 💪 Your 'apple' sounds just like a native speaker!",
        };

        let reply = evaluate_answer("apple", &mut state, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(reply, expected);
    }

    #[test]
    fn test_full_review_scenario() {
        let mut state = SessionState::default();
        let mut rng = rng();
        start_review(vec!["apple".to_string(), "happy".to_string()], &mut state);

        let q1 = next_question(&mut state);
        assert_eq!(q1.target_word.as_deref(), Some("apple"));
        assert_eq!(state.current_quiz_index, 0);

        evaluate_answer("apple", &mut state, &mut rng);
        assert_eq!(state.current_quiz_index, 1);

        let q2 = next_question(&mut state);
        assert_eq!(q2.target_word.as_deref(), Some("happy"));

        evaluate_answer("happy", &mut state, &mut rng);
        assert_eq!(state.current_quiz_index, 2);

        let done = next_question(&mut state);
        assert!(done.celebration);
        assert!(!state.quiz_mode);
        assert!(!state.waiting_for_pronunciation);
        assert!(done.prompt.contains("all 2 words"));
    }
}
