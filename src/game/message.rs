//! Player-facing messages
//!
//! The game hands out [`Message`] values; presentations match on them or use
//! the `Display` text (Portuguese, like the word list).

use super::{Mode, Rejection};
use crate::core::LetterStatus;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A new stage began
    StageStarted { mode: Mode },
    /// Every board was solved; `next` is the mode of the upcoming stage
    StageCleared { next: Mode },
    /// Attempts ran out; the answers of the unsolved boards
    Revealed { answers: Vec<String> },
    /// Feedback on the last letter of the latest guess for one board
    Hint {
        board: usize,
        letter: char,
        status: LetterStatus,
        /// The guess overlaps one of the board's tags
        close: bool,
    },
    Rejected(Rejection),
}

impl Message {
    /// Whether this message reports a problem with the player's input
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StageStarted { mode } => write!(f, "Nova rodada: {mode}. Boa sorte!"),
            Self::StageCleared { next } => {
                write!(f, "Parabéns, você acertou! Próxima rodada: {next}.")
            }
            Self::Revealed { answers } => {
                let upper: Vec<String> = answers.iter().map(|a| a.to_uppercase()).collect();
                if upper.len() == 1 {
                    write!(f, "Não foi dessa vez. A palavra era {}.", upper[0])
                } else {
                    write!(f, "Não foi dessa vez. As palavras eram {}.", upper.join(", "))
                }
            }
            Self::Hint {
                letter,
                status,
                close,
                ..
            } => {
                let letter = letter.to_uppercase();
                match status {
                    LetterStatus::Correct => write!(f, "A letra “{letter}” está na posição certa.")?,
                    LetterStatus::Present => {
                        write!(f, "A letra “{letter}” existe, mas em outra posição.")?;
                    }
                    LetterStatus::Absent | LetterStatus::Unused => {
                        write!(f, "A letra “{letter}” não está na palavra.")?;
                    }
                }
                if *close {
                    write!(f, " Você está perto!")?;
                }
                Ok(())
            }
            Self::Rejected(rejection) => write!(f, "{rejection}"),
        }
    }
}
