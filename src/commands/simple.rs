//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI. Every line is either a guess or a
//! `:command`; reveals are instant and finished stages advance right away.

use crate::game::{Game, Mode, Outcome};
use crate::output::{print_message, print_stage};
use crate::score::ScoreStore;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    Continue,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error on I/O failure reading input, or if a new stage cannot be
/// drawn from the dictionary.
pub fn run_simple<S: ScoreStore>(game: &mut Game<S>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Termo, Dueto e Quarteto                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Digite uma palavra e pressione Enter.");
    println!("Comandos: :restart [1|2|4], :reset, :state, :help, :quit\n");

    print_stage(game);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", ">".bright_cyan().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        if handle_line(game, &line?)? == LineAction::Quit {
            break;
        }
    }

    println!("\n👋 Até a próxima!\n");
    Ok(())
}

/// Apply one input line to the game
///
/// # Errors
///
/// Returns an error if a new stage cannot be drawn or the state cannot be
/// serialized.
pub fn handle_line<S: ScoreStore>(game: &mut Game<S>, line: &str) -> Result<LineAction> {
    let line = line.trim();

    if let Some(command) = line.strip_prefix(':') {
        return handle_command(game, command);
    }

    match game.submit_guess(line) {
        Ok(outcome) => {
            game.reveal_complete();
            print_stage(game);
            if !matches!(outcome, Outcome::Continue { .. }) {
                game.advance_now()?;
                print_stage(game);
            }
        }
        Err(_) => {
            if let Some(message) = game.message() {
                print_message(message);
            }
        }
    }

    Ok(LineAction::Continue)
}

fn handle_command<S: ScoreStore>(game: &mut Game<S>, command: &str) -> Result<LineAction> {
    let mut parts = command.split_whitespace();

    match parts.next().unwrap_or_default() {
        "quit" | "q" | "exit" => return Ok(LineAction::Quit),
        "restart" | "r" => {
            let mode = match parts.next() {
                None => Some(game.state().mode()),
                Some(arg) => arg.parse().ok().and_then(Mode::from_board_count),
            };
            if let Some(mode) = mode {
                game.restart(mode)?;
                print_stage(game);
            } else {
                println!("{}", "Use :restart 1, :restart 2 ou :restart 4".red());
            }
        }
        "reset" => {
            game.reset_score()?;
            println!("{}", "Pontuação zerada.".yellow());
            print_stage(game);
        }
        "state" => {
            println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
        }
        "help" | "h" => {
            println!("Comandos: :restart [1|2|4], :reset, :state, :help, :quit");
        }
        other => {
            println!("{}", format!("Comando desconhecido: {other}").red());
        }
    }

    Ok(LineAction::Continue)
}
