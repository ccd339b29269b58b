//! Evaluate command
//!
//! Scores a single guess against an answer, outside of any game.

use crate::core::{Evaluation, Word};
use anyhow::{Result, bail};

/// Result of evaluating one guess
#[derive(Debug, Clone)]
pub struct EvaluateResult {
    pub guess: Word,
    pub answer: Word,
    pub evaluation: Evaluation,
}

/// Evaluate `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is empty or the normalized lengths differ.
pub fn evaluate_words(guess: &str, answer: &str) -> Result<EvaluateResult> {
    let guess = Word::new(guess);
    let answer = Word::new(answer);

    if guess.is_empty() || answer.is_empty() {
        bail!("Both guess and answer must contain letters");
    }
    if guess.len() != answer.len() {
        bail!(
            "Guess '{}' has {} letters but answer '{}' has {}",
            guess.raw(),
            guess.len(),
            answer.raw(),
            answer.len()
        );
    }

    let evaluation = Evaluation::calculate(&guess, &answer);
    Ok(EvaluateResult {
        guess,
        answer,
        evaluation,
    })
}
