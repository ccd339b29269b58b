//! Text canonicalization
//!
//! Every comparison in the game (guess vs answer, guess vs dictionary, guess vs
//! earlier guesses) goes through [`normalize`], so "Maçã", "maca" and " MACA "
//! are the same word.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Canonicalize text for comparison
///
/// Trims surrounding whitespace, lowercases, decomposes accented characters
/// (NFD) and drops the combining marks, leaving the base letters.
///
/// # Examples
/// ```
/// use wordle_stages::core::normalize;
///
/// assert_eq!(normalize("  Maçã "), "maca");
/// assert_eq!(normalize("ÓRGÃO"), "orgao");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .collect()
}
