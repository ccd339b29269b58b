//! Formatting utilities for terminal output

use crate::core::LetterStatus;
use crate::game::{Keyboard, ROWS};
use colored::{ColoredString, Colorize};

/// Color a single letter tile by status
#[must_use]
pub fn letter_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {} ", letter.to_uppercase());
    match status {
        LetterStatus::Correct => tile.black().on_green().bold(),
        LetterStatus::Present => tile.black().on_yellow().bold(),
        LetterStatus::Absent => tile.white().on_bright_black(),
        LetterStatus::Unused => tile.normal(),
    }
}

/// Format a guess as a row of colored tiles
///
/// Letters without a status are shown as `Unused`.
#[must_use]
pub fn colored_guess(letters: &[char], statuses: &[LetterStatus]) -> String {
    letters
        .iter()
        .enumerate()
        .map(|(i, &letter)| {
            letter_tile(letter, statuses.get(i).copied().unwrap_or_default()).to_string()
        })
        .collect()
}

/// Format the keyboard as three indented rows of colored keys
#[must_use]
pub fn keyboard_rows(keyboard: &Keyboard) -> Vec<String> {
    ROWS.iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|c| letter_tile(c, keyboard.status(c)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Size of the word bank, as shown next to the game title
#[must_use]
pub fn word_bank(count: usize) -> String {
    match count {
        0 => "Sem palavras no banco".to_string(),
        1 => "1 palavra no banco".to_string(),
        n => format!("{n} palavras no banco"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn colored_guess_uppercases_tiles() {
        plain();
        let row = colored_guess(
            &['t', 'e', 'm', 'p', 'o'],
            &[
                LetterStatus::Absent,
                LetterStatus::Absent,
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Correct,
            ],
        );
        assert_eq!(row, " T  E  M  P  O ");
    }

    #[test]
    fn colored_guess_pads_missing_statuses() {
        plain();
        assert_eq!(colored_guess(&['a', 'b'], &[]), " A  B ");
    }

    #[test]
    fn keyboard_has_three_indented_rows() {
        plain();
        let rows = keyboard_rows(&Keyboard::default());
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with(" Q "));
        assert!(rows[1].starts_with("   A "));
        assert!(rows[2].starts_with("     Z "));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn word_bank_counts() {
        assert_eq!(word_bank(0), "Sem palavras no banco");
        assert_eq!(word_bank(1), "1 palavra no banco");
        assert_eq!(word_bank(72), "72 palavras no banco");
    }
}
