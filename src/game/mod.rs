//! Stage-based game engine
//!
//! A stage is one or more boards played with a shared attempt stream. The
//! [`Game`] controller owns the current stage and moves between modes; the
//! [`AttemptLedger`] validates and records guesses; the [`Keyboard`] reduces
//! evaluations to one status per letter.

mod config;
mod error;
mod keyboard;
mod ledger;
mod message;
mod stage;

pub use config::{ADVANCE_DELAY, GameConfig, MAX_TRIES, WORD_LENGTH};
pub use error::{GameError, Rejection};
pub use keyboard::{Keyboard, ROWS};
pub use ledger::{Attempt, AttemptLedger, Board, BoardEvaluation, Submission};
pub use message::Message;
pub use stage::{Game, Mode, Outcome, PendingStart, Phase, Snapshot, StageState};
