//! Word Stages - CLI
//!
//! Word-guessing game with one, two and four simultaneous boards, playable in
//! a TUI or a plain line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_stages::{
    commands::{SimulationConfig, evaluate_words, run_simple, run_simulation},
    game::{Game, GameConfig, MAX_TRIES, Mode, WORD_LENGTH},
    output::{print_evaluate_result, print_simulation_result},
    score::{FileStore, MemoryStore, ScoreStore},
    wordlists::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_stages",
    about = "Word guessing game with single, duo and quartet stages",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (.json or word<TAB>hint lines); defaults to the embedded list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = WORD_LENGTH)]
    word_length: usize,

    /// Attempts per stage, shared by all boards
    #[arg(
        short = 't',
        long,
        global = true,
        default_value_t = MAX_TRIES,
        value_parser = parse_tries
    )]
    max_tries: usize,

    /// Fixed random seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Score file; defaults to the platform data directory
    #[arg(long, global = true)]
    score_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Evaluate one guess against an answer
    Evaluate {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },

    /// Let a bot play many games and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Boards per stage: 1, 2 or 4
        #[arg(short = 'm', long, default_value = "1", value_parser = parse_mode)]
        mode: Mode,
    },
}

fn parse_mode(value: &str) -> Result<Mode, String> {
    value
        .parse()
        .ok()
        .and_then(Mode::from_board_count)
        .ok_or_else(|| format!("'{value}' is not a board count (use 1, 2 or 4)"))
}

fn parse_tries(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("at least one attempt is required".to_string()),
        Ok(tries) => Ok(tries),
        Err(e) => Err(format!("'{value}' is not a number of attempts: {e}")),
    }
}

impl Cli {
    fn config(&self) -> GameConfig {
        let config = GameConfig::default()
            .with_word_length(self.word_length)
            .with_max_tries(self.max_tries);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// Load the dictionary selected by `-w`
    fn dictionary(&self) -> Result<Dictionary> {
        let dictionary = match &self.wordlist {
            Some(path) => {
                let entries = load_from_file(path)
                    .with_context(|| format!("loading word list {}", path.display()))?;
                Dictionary::new(entries, self.word_length)
            }
            None => Dictionary::embedded(self.word_length),
        };
        log::info!(
            "dictionary: {} words of {} letters",
            dictionary.len(),
            self.word_length
        );
        Ok(dictionary)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);

    match &command {
        Commands::Evaluate { guess, answer } => {
            let result = evaluate_words(guess, answer)?;
            print_evaluate_result(&result);
            Ok(())
        }
        Commands::Simulate { count, mode } => run_simulate_command(&cli, *count, *mode),
        Commands::Play | Commands::Simple => {
            let store = match &cli.score_file {
                Some(path) => Some(FileStore::new(path)),
                None => FileStore::open_default()
                    .inspect_err(|e| log::warn!("score will not be saved: {e}"))
                    .ok(),
            };
            match store {
                Some(store) => run_game_command(&cli, &command, store),
                None => run_game_command(&cli, &command, MemoryStore::new()),
            }
        }
    }
}

fn run_game_command<S: ScoreStore>(cli: &Cli, command: &Commands, store: S) -> Result<()> {
    let mut game = Game::with_dictionary(cli.dictionary()?, store, cli.config())?;

    match command {
        Commands::Simple => run_simple(&mut game),
        _ => {
            use wordle_stages::interactive::{App, run_tui};
            run_tui(App::new(game))
        }
    }
}

fn run_simulate_command(cli: &Cli, count: usize, mode: Mode) -> Result<()> {
    let dictionary = cli.dictionary()?;
    println!(
        "Simulating {count} games of {mode} over {} words...",
        dictionary.len()
    );

    let config = SimulationConfig {
        games: count,
        mode,
        seed: cli.seed.unwrap_or_else(rand::random),
        game: cli.config(),
        show_progress: true,
    };
    let result = run_simulation(&dictionary, &config)?;
    print_simulation_result(&result);
    Ok(())
}
