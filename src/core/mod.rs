//! Core domain types for the guessing game
//!
//! Pure, dependency-light building blocks: text normalization, words, and
//! guess evaluation. Everything here is deterministic and side-effect free.

mod evaluation;
mod normalize;
mod word;

pub use evaluation::{Evaluation, LetterStatus, evaluate};
pub use normalize::normalize;
pub use word::Word;
