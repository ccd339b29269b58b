//! Guess evaluation
//!
//! An evaluation is the per-letter feedback for one guess against one answer:
//! - Absent (letter not in word)
//! - Present (letter in word, wrong position)
//! - Correct (letter in correct position)

use super::Word;
use serde::Serialize;
use std::fmt;

/// Feedback for a single letter
///
/// Totally ordered `Unused < Absent < Present < Correct`; aggregation keeps the
/// highest status ever seen for a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterStatus {
    #[default]
    Unused,
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Emoji square for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Unused => '⬜',
        }
    }
}

/// Per-letter feedback for one guess against one answer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Evaluation(Vec<LetterStatus>);

impl Evaluation {
    /// Score `guess` against `answer`
    ///
    /// Implements the duplicate-letter rules: a guess never receives more
    /// `Present`/`Correct` marks for a letter than the answer contains.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (correct); the unmatched answer letters
    ///    form the remaining pool
    /// 2. Second pass: mark present-but-misplaced letters, consuming one
    ///    occurrence from the pool each time; everything else is absent
    ///
    /// # Examples
    /// ```
    /// use wordle_stages::core::{Evaluation, LetterStatus, Word};
    ///
    /// let evaluation = Evaluation::calculate(&Word::new("casa"), &Word::new("maçã"));
    /// assert_eq!(
    ///     evaluation.statuses(),
    ///     &[
    ///         LetterStatus::Present,
    ///         LetterStatus::Correct,
    ///         LetterStatus::Absent,
    ///         LetterStatus::Correct,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess_letters = guess.letters();
        let answer_letters = answer.letters();
        let mut result = vec![LetterStatus::Absent; guess_letters.len()];
        let mut remaining = rustc_hash::FxHashMap::<char, u8>::default();

        // First pass: exact matches, unmatched answer letters go to the pool
        for (i, &answer_letter) in answer_letters.iter().enumerate() {
            if guess_letters.get(i) == Some(&answer_letter) {
                result[i] = LetterStatus::Correct;
            } else {
                *remaining.entry(answer_letter).or_insert(0) += 1;
            }
        }

        // Second pass: misplaced letters consume the pool left to right
        for (i, letter) in guess_letters.iter().enumerate() {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(letter)
                && *count > 0
            {
                result[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// All statuses, one per guess letter
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    /// Status at a position
    #[inline]
    #[must_use]
    pub fn status(&self, position: usize) -> Option<LetterStatus> {
        self.0.get(position).copied()
    }

    /// Status of the final letter
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<LetterStatus> {
        self.0.last().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Count the letters with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert to an emoji string like "🟨🟩⬛🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

/// Evaluate raw guess text against raw answer text
///
/// Convenience over [`Evaluation::calculate`] that normalizes both sides.
#[must_use]
pub fn evaluate(guess: &str, answer: &str) -> Evaluation {
    Evaluation::calculate(&Word::new(guess), &Word::new(answer))
}
