//! Display functions for the CLI

use super::formatters::{colored_guess, create_progress_bar, keyboard_rows, word_bank};
use crate::commands::{EvaluateResult, SimulationResult};
use crate::game::{Game, Message};
use crate::score::ScoreStore;
use colored::Colorize;

/// Print every board of the current stage, then keyboard, score and message
pub fn print_stage<S: ScoreStore>(game: &Game<S>) {
    let stage = game.state();
    let ledger = stage.ledger();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{}  |  Tentativas: {}/{}  |  Pontos: {}",
        stage.mode().to_string().bright_cyan().bold(),
        ledger.len(),
        ledger.max_tries(),
        game.score().to_string().bright_yellow().bold()
    );
    println!("{}", word_bank(game.dictionary().len()).bright_black());
    println!("{}", "─".repeat(60).cyan());

    for (index, board) in stage.boards().iter().enumerate() {
        let status = if board.is_solved() {
            "✓".green().bold()
        } else {
            "…".bright_black()
        };
        println!("\n  Palavra {} {status}  Dica: {}", index + 1, board.hint().italic());

        for attempt in stage.attempts() {
            // Boards drop out of later attempts once solved
            if let Some(evaluation) = attempt.evaluation_for(index) {
                println!(
                    "    {}",
                    colored_guess(attempt.guess().letters(), evaluation.statuses())
                );
            }
        }
        if stage.is_over() && !board.is_solved() {
            println!("    {}", board.answer().word.to_uppercase().red().bold());
        }
    }

    println!();
    for row in keyboard_rows(game.keyboard()) {
        println!("  {row}");
    }

    if let Some(message) = game.message() {
        print_message(message);
    }
}

/// Print the current player-facing message
pub fn print_message(message: &Message) {
    let text = message.to_string();
    let styled = match message {
        Message::Rejected(_) => text.red(),
        Message::StageCleared { .. } => text.green().bold(),
        Message::Revealed { .. } | Message::Hint { close: true, .. } => text.yellow().bold(),
        Message::StageStarted { .. } | Message::Hint { .. } => text.bright_white(),
    };
    println!("\n{styled}\n");
}

/// Print a single evaluation
pub fn print_evaluate_result(result: &EvaluateResult) {
    println!(
        "\n{} → {}",
        result.guess.raw().to_uppercase().bright_white().bold(),
        result.answer.raw().to_uppercase().bright_yellow().bold()
    );
    println!(
        "  {}",
        colored_guess(result.guess.letters(), result.evaluation.statuses())
    );
    println!("  {}\n", result.evaluation.to_emoji());
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Mode:             {}", result.mode);
    println!("   Games played:     {}", result.games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!("   Boards solved:    {}", result.boards_solved);
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts).green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.wins == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(1);
    for attempts in 1..=result.max_tries {
        let count = result.distribution.get(&attempts).copied().unwrap_or(0);
        let pct = count as f64 / result.wins as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {attempts}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
