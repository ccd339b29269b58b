//! Normalized word representation
//!
//! A Word keeps the text as typed alongside its normalized letters, which are
//! what every comparison and evaluation works on.

use super::normalize;
use serde::Serialize;
use std::fmt;

/// A word as entered, with its canonical letter sequence
///
/// Equality only looks at the normalized letters, so "Maçã" == "maca".
#[derive(Debug, Clone, Serialize)]
pub struct Word {
    raw: String,
    text: String,
    #[serde(skip)]
    letters: Vec<char>,
}

impl Word {
    /// Create a new Word from any text
    ///
    /// Never fails: length and membership checks belong to the caller.
    ///
    /// # Examples
    /// ```
    /// use wordle_stages::core::Word;
    ///
    /// let word = Word::new(" Avião ");
    /// assert_eq!(word.text(), "aviao");
    /// assert_eq!(word.raw(), "Avião");
    /// assert_eq!(word.len(), 5);
    /// ```
    pub fn new(raw: impl Into<String>) -> Self {
        let raw: String = raw.into().trim().to_string();
        let text = normalize(&raw);
        let letters = text.chars().collect();

        Self { raw, text, letters }
    }

    /// The word as the player typed it (trimmed)
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized word
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Normalized letters, one per position
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of normalized letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letter at a position, if any
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.letters.get(position).copied()
    }

    /// Last letter of the word, if any
    #[inline]
    #[must_use]
    pub fn last_letter(&self) -> Option<char> {
        self.letters.last().copied()
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
