//! Word list loading utilities
//!
//! Loads `{word, hint}` lists from JSON or tab-separated files, or converts the
//! embedded constant.

use super::WordEntry;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON word list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Accepted JSON layouts: `{"items": [...]}` or a bare array
#[derive(Deserialize)]
#[serde(untagged)]
enum WordFile {
    Wrapped { items: Vec<WordEntry> },
    Plain(Vec<WordEntry>),
}

/// Load entries from a file
///
/// Files ending in `.json` are parsed as JSON, anything else as one
/// `word<TAB>hint` entry per line.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the JSON is malformed.
///
/// # Examples
/// ```no_run
/// use wordle_stages::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("assets/words.json").unwrap();
/// println!("Loaded {} words", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<WordEntry>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_json(&content)
    } else {
        Ok(parse_tsv(&content))
    }
}

/// Parse a JSON word list
///
/// # Errors
///
/// Returns an error if the JSON does not match either accepted layout.
pub fn parse_json(content: &str) -> Result<Vec<WordEntry>, LoadError> {
    let file: WordFile = serde_json::from_str(content)?;
    Ok(match file {
        WordFile::Wrapped { items } | WordFile::Plain(items) => items,
    })
}

/// Parse a tab-separated word list, skipping blank lines and `#` comments
///
/// Columns are word, hint and comma-separated tags; the last two are optional.
#[must_use]
pub fn parse_tsv(content: &str) -> Vec<WordEntry> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let mut fields = line.split('\t');
            let word = fields.next().unwrap_or_default().trim();
            let hint = fields.next().unwrap_or_default().trim();
            let tags = fields
                .next()
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty());
            WordEntry::new(word, hint).with_tags(tags)
        })
        .collect()
}

/// Convert an embedded `(word, hint)` slice to entries
///
/// # Examples
/// ```
/// use wordle_stages::wordlists::loader::entries_from_slice;
/// use wordle_stages::wordlists::WORDS;
///
/// let entries = entries_from_slice(WORDS);
/// assert_eq!(entries.len(), WORDS.len());
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[(&str, &str)]) -> Vec<WordEntry> {
    slice
        .iter()
        .map(|&(word, hint)| WordEntry::new(word, hint))
        .collect()
}
