//! Answer dictionary
//!
//! Maps normalized words to their entries for O(1) guess validation and keeps
//! the ordered source list for random answer selection.

use super::WORDS;
use crate::core::normalize;
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Random draws attempted before `pick_random_distinct` allows duplicates
pub const DEFAULT_DRAW_BUDGET: usize = 2000;

/// A dictionary word and the hint shown for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(default)]
    pub hint: String,
    /// Related terms; a guess overlapping one of them is "close"
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            hint: hint.into(),
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tags<T: Into<String>>(mut self, tags: impl IntoIterator<Item = T>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a guess contains one of the tags or is contained in one
    ///
    /// Both sides are normalized; empty tags and empty guesses never match.
    #[must_use]
    pub fn is_close(&self, guess: &str) -> bool {
        let guess = normalize(guess);
        if guess.is_empty() {
            return false;
        }
        self.tags.iter().map(|t| normalize(t)).any(|tag| {
            !tag.is_empty() && (guess.contains(tag.as_str()) || tag.contains(guess.as_str()))
        })
    }

    /// The normalized word
    #[must_use]
    pub fn normalized(&self) -> String {
        normalize(&self.word)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
    #[error("Nenhuma palavra disponível no dicionário.")]
    Empty,
}

/// Validated set of answer words
///
/// Built once and never mutated. Entries that do not normalize to exactly
/// `word_length` characters are dropped at construction.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<WordEntry>,
    index: FxHashMap<String, usize>,
    word_length: usize,
}

impl Dictionary {
    /// Build a dictionary from entries, keeping only words of `word_length`
    ///
    /// When two entries normalize to the same word, the first one wins the lookup.
    pub fn new(entries: impl IntoIterator<Item = WordEntry>, word_length: usize) -> Self {
        let mut kept = Vec::new();
        let mut index = FxHashMap::default();

        for entry in entries {
            let key = entry.normalized();
            if key.chars().count() != word_length {
                log::debug!("skipping '{}': not {word_length} letters", entry.word);
                continue;
            }
            index.entry(key).or_insert(kept.len());
            kept.push(entry);
        }

        Self {
            entries: kept,
            index,
            word_length,
        }
    }

    /// Dictionary over the embedded word list
    #[must_use]
    pub fn embedded(word_length: usize) -> Self {
        Self::new(super::loader::entries_from_slice(WORDS), word_length)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Letter count every word in this dictionary has
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Entries in source order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Look up the entry for a word (case/accent-insensitive)
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.index.get(&normalize(word)).map(|&i| &self.entries[i])
    }

    /// Check if a word is a known answer candidate (case/accent-insensitive)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(&normalize(word))
    }

    /// Uniformly pick one entry
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no entries are loaded.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&WordEntry, DictionaryError> {
        if self.entries.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(&self.entries[rng.random_range(0..self.entries.len())])
    }

    /// Pick `n` entries with pairwise-distinct words where possible
    ///
    /// Draws at random up to `budget` times, skipping words already picked. If the
    /// budget runs out first (e.g. the dictionary has fewer than `n` distinct
    /// words), the rest is padded with random picks that may repeat.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no entries are loaded.
    pub fn pick_random_distinct<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n: usize,
        budget: usize,
    ) -> Result<Vec<WordEntry>, DictionaryError> {
        if self.entries.is_empty() {
            return Err(DictionaryError::Empty);
        }

        let mut picked = Vec::with_capacity(n);
        let mut seen = FxHashSet::default();
        let mut draws = 0;

        while picked.len() < n && draws < budget {
            draws += 1;
            let entry = self.pick_random(rng)?;
            if seen.insert(entry.normalized()) {
                picked.push(entry.clone());
            }
        }

        if picked.len() < n {
            log::debug!(
                "only {} distinct words after {draws} draws, padding {} with repeats",
                picked.len(),
                n - picked.len()
            );
        }
        while picked.len() < n {
            picked.push(self.pick_random(rng)?.clone());
        }

        Ok(picked)
    }
}
