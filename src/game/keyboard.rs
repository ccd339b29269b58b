//! Keyboard status aggregation
//!
//! Reduces every evaluation of a stage into one status per letter, keeping the
//! highest status observed. Always recomputed from the full attempt history.

use super::Attempt;
use crate::core::LetterStatus;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Standard key rows for display
pub const ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Aggregated per-letter status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Keyboard {
    statuses: FxHashMap<char, LetterStatus>,
}

impl Keyboard {
    /// Aggregate all evaluations of all attempts
    ///
    /// # Examples
    /// ```
    /// use wordle_stages::core::LetterStatus;
    /// use wordle_stages::game::Keyboard;
    ///
    /// let keyboard = Keyboard::aggregate(&[]);
    /// assert!(keyboard.is_empty());
    /// assert_eq!(keyboard.status('a'), LetterStatus::Unused);
    /// ```
    #[must_use]
    pub fn aggregate(attempts: &[Attempt]) -> Self {
        let mut statuses: FxHashMap<char, LetterStatus> = FxHashMap::default();

        for attempt in attempts {
            let letters = attempt.guess().letters();
            for board in attempt.evaluations() {
                for (&letter, &status) in letters.iter().zip(board.evaluation.statuses()) {
                    let entry = statuses.entry(letter).or_default();
                    *entry = (*entry).max(status);
                }
            }
        }

        Self { statuses }
    }

    /// Status of a letter, `Unused` if never typed
    #[must_use]
    pub fn status(&self, letter: char) -> LetterStatus {
        self.statuses.get(&letter).copied().unwrap_or_default()
    }

    /// Letters typed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Typed letters and their statuses, sorted by letter
    #[must_use]
    pub fn sorted(&self) -> Vec<(char, LetterStatus)> {
        let mut entries: Vec<_> = self.statuses.iter().map(|(&c, &s)| (c, s)).collect();
        entries.sort_unstable_by_key(|&(c, _)| c);
        entries
    }
}
