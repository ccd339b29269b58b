//! TUI rendering with ratatui
//!
//! Boards side by side, the keyboard below them, then the current message.

use super::app::App;
use crate::core::LetterStatus;
use crate::game::{Board, Message, ROWS, StageState};
use crate::output::formatters::word_bank;
use crate::score::ScoreStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: ScoreStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Boards
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Message
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_boards(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_message(f, app, chunks[3]);
    render_help(f, chunks[4]);
}

const fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::new()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::new()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Unused => Style::new().fg(Color::White),
    }
}

fn tile(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_uppercase()), style)
}

fn render_header<S: ScoreStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let stage = app.game.state();
    let title = Line::from(vec![
        Span::styled(
            stage.mode().to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "   Tentativas: {}/{}   ",
            stage.ledger().len(),
            stage.ledger().max_tries()
        )),
        Span::styled(
            format!("Pontos: {}", app.game.score()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   {}", word_bank(app.game.dictionary().len())),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(title).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_boards<S: ScoreStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let stage = app.game.state();
    let count = stage.boards().len().max(1) as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); count as usize])
        .split(area);

    for (index, (board, column)) in stage.boards().iter().zip(columns.iter()).enumerate() {
        render_board(f, app, stage, index, board, *column);
    }
}

fn render_board<S: ScoreStore>(
    f: &mut Frame,
    app: &App<S>,
    stage: &StageState,
    index: usize,
    board: &Board,
    area: Rect,
) {
    let attempts = stage.attempts();
    let last = attempts.len().saturating_sub(1);
    let mut lines: Vec<Line> = Vec::new();

    for (row, attempt) in attempts.iter().enumerate() {
        // Solved boards stop receiving evaluations
        let Some(evaluation) = attempt.evaluation_for(index) else {
            continue;
        };
        let revealed = if row == last {
            app.revealed_letters()
        } else {
            None
        };

        let spans: Vec<Span> = attempt
            .guess()
            .letters()
            .iter()
            .enumerate()
            .map(|(i, &letter)| {
                let status = match revealed {
                    Some(shown) if i >= shown => LetterStatus::Unused,
                    _ => evaluation.status(i).unwrap_or_default(),
                };
                tile(letter, status_style(status))
            })
            .collect();
        lines.push(Line::from(spans));
    }

    if !board.is_solved() && !stage.is_over() {
        let typed: Vec<char> = crate::core::normalize(app.game.input()).chars().collect();
        let spans: Vec<Span> = (0..app.game.config().word_length)
            .map(|i| match typed.get(i) {
                Some(&letter) => tile(letter, Style::default().fg(Color::Yellow)),
                None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            })
            .collect();
        lines.push(Line::from(spans));
    }

    if stage.is_over() && !board.is_solved() {
        lines.push(Line::from(Span::styled(
            board.answer().word.to_uppercase(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Dica: {}", board.hint()),
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC),
    )));

    let (title, color) = if board.is_solved() {
        (format!(" Palavra {} ✓ ", index + 1), Color::Green)
    } else {
        (format!(" Palavra {} ", index + 1), Color::White)
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, area);
}

fn render_keyboard<S: ScoreStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let keyboard = app.keyboard();
    let lines: Vec<Line> = ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .map(|c| tile(c, status_style(keyboard.status(c))))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Teclado "));
    f.render_widget(paragraph, area);
}

fn render_message<S: ScoreStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    // Hold the hint back until the row is fully revealed
    let message = if app.reveal.is_some() {
        None
    } else {
        app.game.message()
    };

    let style = match message {
        Some(Message::Rejected(_)) => Style::default().fg(Color::Red),
        Some(Message::StageCleared { .. }) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Message::Revealed { .. } | Message::Hint { close: true, .. }) => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::White),
    };
    let text = message.map(ToString::to_string).unwrap_or_default();

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(paragraph, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Enter: Enviar | Backspace: Apagar | 1/2/4: Nova rodada | 0: Zerar pontos | Esc: Sair",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
