//! Game configuration

use crate::wordlists::DEFAULT_DRAW_BUDGET;
use std::time::Duration;

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Attempts per stage, shared by every board
pub const MAX_TRIES: usize = 6;

/// Delay before a finished stage starts the next one
pub const ADVANCE_DELAY: Duration = Duration::from_millis(2500);

/// Tunables for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_tries: usize,
    pub advance_delay: Duration,
    /// Random draws spent looking for distinct answers in multi-board stages
    pub draw_budget: usize,
    /// Fixed RNG seed for reproducible games; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: WORD_LENGTH,
            max_tries: MAX_TRIES,
            advance_delay: ADVANCE_DELAY,
            draw_budget: DEFAULT_DRAW_BUDGET,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the attempts per stage; at least one attempt is always allowed
    #[must_use]
    pub const fn with_max_tries(mut self, max_tries: usize) -> Self {
        self.max_tries = if max_tries == 0 { 1 } else { max_tries };
        self
    }

    #[must_use]
    pub const fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    #[must_use]
    pub const fn with_advance_delay(mut self, advance_delay: Duration) -> Self {
        self.advance_delay = advance_delay;
        self
    }
}
