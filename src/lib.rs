//! Word Stages
//!
//! A word-guessing game engine that cycles through stages of one, two and four
//! simultaneous boards sharing a single attempt stream.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_stages::core::{LetterStatus, evaluate};
//!
//! // Accents and case are ignored
//! let evaluation = evaluate("Avião", "aviao");
//! assert!(evaluation.is_solved());
//!
//! // Repeated letters are only credited as often as the answer has them
//! let evaluation = evaluate("carta", "prato");
//! assert_eq!(evaluation.status(4), Some(LetterStatus::Absent));
//! ```

// Core domain types
pub mod core;

// Word lists and the dictionary
pub mod wordlists;

// Game engine
pub mod game;

// Score persistence
pub mod score;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
