//! Rejections and errors surfaced by the game
//!
//! Every variant is recoverable: the game stays consistent and continuable.

use crate::wordlists::DictionaryError;

/// Why a submitted guess was not accepted
///
/// Returned as a value from submission; the stage is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("{}", invalid_length_text(.expected, .found))]
    InvalidLength { expected: usize, found: usize },
    #[error("Palavra “{0}” não reconhecida.")]
    UnknownWord(String),
    #[error("Você já tentou “{0}”. Tente uma palavra diferente.")]
    DuplicateGuess(String),
    #[error("A rodada terminou.")]
    StageOver,
    #[error("Aguarde a revelação da tentativa anterior.")]
    Busy,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // thiserror passes fields by reference
fn invalid_length_text(expected: &usize, found: &usize) -> String {
    if *found == 0 {
        "Digite uma tentativa.".to_string()
    } else {
        format!("A palavra deve ter {expected} letras (tem {found}).")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_guess_asks_for_input() {
        let rejection = Rejection::InvalidLength {
            expected: 5,
            found: 0,
        };
        assert_eq!(rejection.to_string(), "Digite uma tentativa.");
    }

    #[test]
    fn wrong_length_names_expected_count() {
        let rejection = Rejection::InvalidLength {
            expected: 5,
            found: 3,
        };
        assert_eq!(rejection.to_string(), "A palavra deve ter 5 letras (tem 3).");
    }

    #[test]
    fn duplicate_names_the_word() {
        let text = Rejection::DuplicateGuess("Praia".to_string()).to_string();
        assert!(text.contains("Praia"));
    }

    #[test]
    fn empty_dictionary_message() {
        let error = GameError::from(DictionaryError::Empty);
        assert_eq!(error.to_string(), "Nenhuma palavra disponível no dicionário.");
    }
}
