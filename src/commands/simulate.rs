//! Simulate command
//!
//! Plays many seeded games in parallel with a bot that keeps, per board, only
//! the answers consistent with every evaluation seen so far.

use crate::core::{Evaluation, Word};
use crate::game::{Game, GameConfig, Mode, Outcome, StageState};
use crate::score::MemoryStore;
use crate::wordlists::Dictionary;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Parameters for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    pub mode: Mode,
    /// Seed of the first game; game `i` uses `seed + i`
    pub seed: u64,
    pub game: GameConfig,
    pub show_progress: bool,
}

/// Outcome of one simulated stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub won: bool,
    pub attempts: usize,
    pub boards_solved: usize,
}

/// Aggregated simulation statistics
#[derive(Debug)]
pub struct SimulationResult {
    pub mode: Mode,
    pub games: usize,
    pub wins: usize,
    pub boards_solved: usize,
    /// Attempts needed, for won games only
    pub distribution: FxHashMap<usize, usize>,
    pub max_tries: usize,
    pub average_attempts: f64,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64 * 100.0
        }
    }
}

/// Run `config.games` independent games of `config.mode`
///
/// # Errors
///
/// Returns an error if the dictionary is empty.
pub fn run_simulation(dictionary: &Dictionary, config: &SimulationConfig) -> Result<SimulationResult> {
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb.set_message(format!("{}", config.mode));
        pb
    } else {
        ProgressBar::hidden()
    };

    let records: Vec<GameRecord> = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let seed = config.seed.wrapping_add(i as u64);
            let record = play_game(dictionary, config.mode, config.game.clone().with_seed(seed));
            pb.inc(1);
            record
        })
        .collect::<Result<_>>()?;

    pb.finish_with_message("Complete!");

    let wins = records.iter().filter(|r| r.won).count();
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for record in records.iter().filter(|r| r.won) {
        *distribution.entry(record.attempts).or_insert(0) += 1;
    }
    let total_attempts: usize = records.iter().filter(|r| r.won).map(|r| r.attempts).sum();

    let result = SimulationResult {
        mode: config.mode,
        games: records.len(),
        wins,
        boards_solved: records.iter().map(|r| r.boards_solved).sum(),
        distribution,
        max_tries: config.game.max_tries,
        average_attempts: if wins > 0 {
            total_attempts as f64 / wins as f64
        } else {
            0.0
        },
        duration: start.elapsed(),
    };
    log::info!(
        "simulated {} games of {:?}: {} wins",
        result.games,
        result.mode,
        result.wins
    );

    Ok(result)
}

/// Play one stage of `mode` to completion
///
/// # Errors
///
/// Returns an error if the dictionary is empty.
pub fn play_game(dictionary: &Dictionary, mode: Mode, config: GameConfig) -> Result<GameRecord> {
    let mut bot_rng = StdRng::seed_from_u64(config.seed.unwrap_or_default() ^ 0x5eed);
    let mut game = Game::with_dictionary(dictionary.clone(), MemoryStore::new(), config)?;
    game.restart(mode)?;

    let words: Vec<Word> = dictionary
        .entries()
        .iter()
        .map(|e| Word::new(e.word.as_str()))
        .collect();

    loop {
        let Some(guess) = choose_guess(game.state(), &words, &mut bot_rng) else {
            break;
        };

        let outcome = game.submit_guess(guess.raw())?;
        game.reveal_complete();

        if !matches!(outcome, Outcome::Continue { .. }) {
            break;
        }
    }

    let stage = game.state();
    Ok(GameRecord {
        won: stage.all_solved(),
        attempts: stage.attempts().len(),
        boards_solved: stage.boards().iter().filter(|b| b.is_solved()).count(),
    })
}

/// Pick a guess from the unsolved board with the fewest candidates
fn choose_guess<'w, R: rand::Rng + ?Sized>(
    stage: &StageState,
    words: &'w [Word],
    rng: &mut R,
) -> Option<&'w Word> {
    let tried = |w: &Word| stage.ledger().has_tried(w);

    stage
        .boards()
        .iter()
        .enumerate()
        .filter(|(_, b)| !b.is_solved())
        .map(|(index, _)| {
            filter_candidates(stage, index, words)
                .into_iter()
                .filter(|&w| !tried(w))
                .collect::<Vec<_>>()
        })
        .filter(|candidates| !candidates.is_empty())
        .min_by_key(Vec::len)
        .and_then(|candidates| candidates.choose(rng).copied())
        .or_else(|| words.iter().find(|&w| !tried(w)))
}

/// Words consistent with every evaluation recorded for a board
fn filter_candidates<'w>(stage: &StageState, board: usize, words: &'w [Word]) -> Vec<&'w Word> {
    words
        .iter()
        .filter(|&candidate| {
            stage.attempts().iter().all(|attempt| {
                attempt.evaluation_for(board).is_none_or(|observed| {
                    Evaluation::calculate(attempt.guess(), candidate) == *observed
                })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(games: usize, mode: Mode) -> SimulationConfig {
        SimulationConfig {
            games,
            mode,
            seed: 7,
            game: GameConfig::default(),
            show_progress: false,
        }
    }

    #[test]
    fn single_game_is_deterministic_under_seed() {
        let dictionary = Dictionary::embedded(5);
        let a = play_game(&dictionary, Mode::Duo, GameConfig::default().with_seed(5)).unwrap();
        let b = play_game(&dictionary, Mode::Duo, GameConfig::default().with_seed(5)).unwrap();
        assert_eq!(a, b);
        assert!(a.attempts >= 1 && a.attempts <= 6);
    }

    #[test]
    fn tiny_dictionary_is_always_won() {
        let dictionary = Dictionary::new(
            [crate::wordlists::WordEntry::new("praia", "")],
            5,
        );
        let record = play_game(&dictionary, Mode::Single, GameConfig::default().with_seed(1)).unwrap();
        assert_eq!(
            record,
            GameRecord {
                won: true,
                attempts: 1,
                boards_solved: 1
            }
        );
    }

    #[test]
    fn simulation_distribution_sums_to_wins() {
        let dictionary = Dictionary::embedded(5);
        let result = run_simulation(&dictionary, &config(20, Mode::Single)).unwrap();

        assert_eq!(result.games, 20);
        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.wins);
        for &attempts in result.distribution.keys() {
            assert!((1..=6).contains(&attempts));
        }
        assert!(result.boards_solved >= result.wins);
    }

    #[test]
    fn bot_solves_most_single_stages() {
        let dictionary = Dictionary::embedded(5);
        let result = run_simulation(&dictionary, &config(30, Mode::Single)).unwrap();
        assert!(result.win_rate() > 50.0, "win rate {}", result.win_rate());
    }

    #[test]
    fn candidates_shrink_with_evaluations() {
        let dictionary = Dictionary::embedded(5);
        let words: Vec<Word> = dictionary
            .entries()
            .iter()
            .map(|e| Word::new(e.word.as_str()))
            .collect();
        let mut game =
            Game::with_dictionary(dictionary.clone(), MemoryStore::new(), GameConfig::default().with_seed(3))
                .unwrap();
        let answer = game.state().boards()[0].word().clone();

        assert_eq!(filter_candidates(game.state(), 0, &words).len(), words.len());

        let guess = words.iter().find(|w| **w != answer).unwrap();
        game.submit_guess(guess.raw()).unwrap();

        let remaining = filter_candidates(game.state(), 0, &words);
        assert!(remaining.len() < words.len());
        assert!(remaining.contains(&&answer));
        assert!(!remaining.contains(&guess));
    }

    #[test]
    fn empty_simulation() {
        let dictionary = Dictionary::embedded(5);
        let result = run_simulation(&dictionary, &config(0, Mode::Quartet)).unwrap();
        assert_eq!(result.games, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
    }
}
