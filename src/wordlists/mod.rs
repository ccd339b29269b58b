//! Word lists and the answer dictionary
//!
//! Provides the embedded word list compiled into the binary, loaders for
//! external lists, and the [`Dictionary`] used to pick answers and accept guesses.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{DEFAULT_DRAW_BUDGET, Dictionary, DictionaryError, WordEntry};
pub use embedded::{WORDS, WORDS_COUNT};
