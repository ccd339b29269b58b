//! Boards and the per-stage attempt ledger

use super::Rejection;
use crate::core::{Evaluation, Word};
use crate::wordlists::{Dictionary, WordEntry};
use serde::Serialize;

/// One target word within a stage
#[derive(Debug, Clone, Serialize)]
pub struct Board {
    answer: WordEntry,
    #[serde(skip)]
    word: Word,
    solved: bool,
}

impl Board {
    #[must_use]
    pub fn new(answer: WordEntry) -> Self {
        let word = Word::new(answer.word.as_str());
        Self {
            answer,
            word,
            solved: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &WordEntry {
        &self.answer
    }

    /// The normalized answer
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.answer.hint
    }

    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }
}

/// Evaluation of an attempt against one board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardEvaluation {
    pub board: usize,
    pub evaluation: Evaluation,
}

/// One accepted guess and its evaluations
///
/// Holds one evaluation per board that was unsolved when the guess was
/// submitted, in board order.
#[derive(Debug, Clone, Serialize)]
pub struct Attempt {
    guess: Word,
    evaluations: Vec<BoardEvaluation>,
}

impl Attempt {
    /// Build an attempt from already computed evaluations, e.g. for replays
    #[must_use]
    pub const fn new(guess: Word, evaluations: Vec<BoardEvaluation>) -> Self {
        Self { guess, evaluations }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub fn evaluations(&self) -> &[BoardEvaluation] {
        &self.evaluations
    }

    /// Evaluation for a board, `None` if that board was already solved
    #[must_use]
    pub fn evaluation_for(&self, board: usize) -> Option<&Evaluation> {
        self.evaluations
            .iter()
            .find(|e| e.board == board)
            .map(|e| &e.evaluation)
    }
}

/// Outcome of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Boards solved by this guess
    pub solved: Vec<usize>,
}

/// Guesses made in the current stage
///
/// Enforces the stage rules; a rejected submission leaves both the ledger and
/// the boards untouched.
#[derive(Debug, Clone, Serialize)]
pub struct AttemptLedger {
    attempts: Vec<Attempt>,
    #[serde(skip)]
    word_length: usize,
    max_tries: usize,
}

impl AttemptLedger {
    #[must_use]
    pub const fn new(word_length: usize, max_tries: usize) -> Self {
        Self {
            attempts: Vec::new(),
            word_length,
            max_tries,
        }
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn max_tries(&self) -> usize {
        self.max_tries
    }

    /// Attempts left before the stage is exhausted
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.max_tries.saturating_sub(self.attempts.len())
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.attempts.len() >= self.max_tries
    }

    /// The stage is over once every board is solved or attempts ran out
    #[must_use]
    pub fn is_over(&self, boards: &[Board]) -> bool {
        self.is_exhausted() || boards.iter().all(Board::is_solved)
    }

    /// Check whether a normalized guess was already tried
    #[must_use]
    pub fn has_tried(&self, guess: &Word) -> bool {
        self.attempts.iter().any(|a| a.guess == *guess)
    }

    /// Validate, evaluate and record a guess
    ///
    /// Checks run in a fixed order: stage over, length, dictionary membership,
    /// then duplicates.
    ///
    /// # Errors
    /// Returns the first violated rule as a [`Rejection`].
    pub fn submit(
        &mut self,
        guess_raw: &str,
        boards: &mut [Board],
        dictionary: &Dictionary,
    ) -> Result<Submission, Rejection> {
        if self.is_over(boards) {
            return Err(Rejection::StageOver);
        }

        let guess = Word::new(guess_raw);
        if guess.len() != self.word_length {
            return Err(Rejection::InvalidLength {
                expected: self.word_length,
                found: guess.len(),
            });
        }
        if !dictionary.contains(guess.text()) {
            return Err(Rejection::UnknownWord(guess.raw().to_string()));
        }
        if self.has_tried(&guess) {
            return Err(Rejection::DuplicateGuess(guess.raw().to_string()));
        }

        let mut evaluations = Vec::with_capacity(boards.len());
        let mut solved = Vec::new();

        for (index, board) in boards.iter_mut().enumerate() {
            if board.solved {
                continue;
            }
            evaluations.push(BoardEvaluation {
                board: index,
                evaluation: Evaluation::calculate(&guess, &board.word),
            });
            if board.word == guess {
                board.solved = true;
                solved.push(index);
            }
        }

        log::debug!(
            "attempt {}/{}: '{}' solved {solved:?}",
            self.attempts.len() + 1,
            self.max_tries,
            guess.text()
        );
        self.attempts.push(Attempt { guess, evaluations });

        Ok(Submission { solved })
    }
}
