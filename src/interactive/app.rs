//! TUI application state and logic

use crate::game::{Game, GameError, Keyboard, Mode};
use crate::score::ScoreStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::borrow::Cow;
use std::io;
use std::time::{Duration, Instant};

/// Time to flip one letter tile
pub const REVEAL_STEP: Duration = Duration::from_millis(250);

/// Event poll interval
const FRAME: Duration = Duration::from_millis(50);

/// Application state
pub struct App<S: ScoreStore> {
    pub game: Game<S>,
    /// Time spent revealing the latest attempt, `None` when no reveal runs
    pub reveal: Option<Duration>,
    pub should_quit: bool,
}

impl<S: ScoreStore> App<S> {
    #[must_use]
    pub const fn new(game: Game<S>) -> Self {
        Self {
            game,
            reveal: None,
            should_quit: false,
        }
    }

    /// Total time for a full row to be revealed
    #[must_use]
    pub fn reveal_duration(&self) -> Duration {
        REVEAL_STEP * self.game.config().word_length as u32
    }

    /// Letters of the latest attempt already flipped, `None` if all are visible
    #[must_use]
    pub fn revealed_letters(&self) -> Option<usize> {
        self.reveal
            .map(|elapsed| (elapsed.as_millis() / REVEAL_STEP.as_millis()) as usize)
    }

    /// Keyboard as far as the player has seen it
    ///
    /// The attempt being revealed does not color any key until its reveal ends.
    #[must_use]
    pub fn keyboard(&self) -> Cow<'_, Keyboard> {
        if self.reveal.is_none() {
            return Cow::Borrowed(self.game.keyboard());
        }
        let attempts = self.game.state().attempts();
        let shown = attempts.len().saturating_sub(1);
        Cow::Owned(Keyboard::aggregate(&attempts[..shown]))
    }

    /// Advance reveal and stage timers
    ///
    /// # Errors
    ///
    /// Returns an error if a scheduled stage cannot draw its answers.
    pub fn update(&mut self, elapsed: Duration) -> Result<(), GameError> {
        let full = self.reveal_duration();
        if let Some(reveal) = self.reveal.as_mut() {
            *reveal += elapsed;
            if *reveal >= full {
                self.reveal = None;
                self.game.reveal_complete();
            }
        }

        if self.game.tick(elapsed)? {
            self.reveal = None;
        }
        Ok(())
    }

    /// Handle one key press
    ///
    /// # Errors
    ///
    /// Returns an error if a new stage cannot draw its answers.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), GameError> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('1') => self.restart(Mode::Single)?,
            KeyCode::Char('2') => self.restart(Mode::Duo)?,
            KeyCode::Char('4') => self.restart(Mode::Quartet)?,
            KeyCode::Char('0') => {
                self.game.reset_score()?;
                self.reveal = None;
            }
            KeyCode::Char(c) => {
                self.game.push_letter(c);
            }
            KeyCode::Backspace => {
                self.game.backspace();
            }
            KeyCode::Enter => {
                if self.game.submit_input().is_ok() {
                    self.reveal = Some(Duration::ZERO);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn restart(&mut self, mode: Mode) -> Result<(), GameError> {
        self.game.restart(mode)?;
        self.reveal = None;
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: ScoreStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: ScoreStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    let mut last = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(FRAME)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key)?;
        }

        let now = Instant::now();
        app.update(now - last)?;
        last = now;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Phase};
    use crate::score::MemoryStore;
    use crate::wordlists::WordEntry;

    fn app() -> App<MemoryStore> {
        let entries = ["praia", "livro", "tempo", "campo", "festa", "carta"]
            .iter()
            .map(|&w| WordEntry::new(w, "dica"));
        let game =
            Game::new(entries, MemoryStore::new(), GameConfig::default().with_seed(8)).unwrap();
        App::new(game)
    }

    fn press(app: &mut App<MemoryStore>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_word(app: &mut App<MemoryStore>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn answer(app: &App<MemoryStore>) -> String {
        app.game.state().boards()[0].answer().word.clone()
    }

    #[test]
    fn typing_fills_input() {
        let mut app = app();
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.game.input(), "p");
    }

    #[test]
    fn accepted_guess_starts_reveal() {
        let mut app = app();
        let answer = answer(&app);
        let wrong = if answer == "praia" { "livro" } else { "praia" };

        type_word(&mut app, wrong);

        assert_eq!(app.revealed_letters(), Some(0));
        assert!(app.game.is_busy());

        app.update(REVEAL_STEP * 2).unwrap();
        assert_eq!(app.revealed_letters(), Some(2));

        app.update(REVEAL_STEP * 3).unwrap();
        assert_eq!(app.revealed_letters(), None);
        assert!(!app.game.is_busy());
    }

    #[test]
    fn reveal_finishes_across_small_updates() {
        let mut app = app();
        let answer = answer(&app);
        let wrong = if answer == "praia" { "livro" } else { "praia" };
        type_word(&mut app, wrong);

        for _ in 0..5 {
            app.update(REVEAL_STEP).unwrap();
        }

        assert!(app.reveal.is_none());
        assert!(!app.game.is_busy());
    }

    #[test]
    fn keyboard_waits_for_reveal() {
        let mut app = app();
        let answer = answer(&app);
        let wrong = if answer == "praia" { "livro" } else { "praia" };
        type_word(&mut app, wrong);

        assert!(app.keyboard().is_empty());
        assert!(!app.game.keyboard().is_empty());

        app.update(app.reveal_duration()).unwrap();
        assert_eq!(app.keyboard().len(), app.game.keyboard().len());
        assert!(!app.keyboard().is_empty());
    }

    #[test]
    fn rejected_guess_does_not_reveal() {
        let mut app = app();
        type_word(&mut app, "mar");
        assert!(app.reveal.is_none());
        assert_eq!(app.game.input(), "mar");
    }

    #[test]
    fn win_advances_after_delay() {
        let mut app = app();
        let answer = answer(&app);
        type_word(&mut app, &answer);
        assert_eq!(app.game.state().phase(), Phase::Over);

        app.update(app.reveal_duration()).unwrap();
        assert_eq!(app.game.state().mode(), Mode::Single);

        app.update(app.game.config().advance_delay).unwrap();
        assert_eq!(app.game.state().mode(), Mode::Duo);
        assert_eq!(app.game.score(), 1);
    }

    #[test]
    fn digit_keys_restart_and_reset() {
        let mut app = app();

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.game.state().mode(), Mode::Quartet);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.game.state().mode(), Mode::Duo);
        press(&mut app, KeyCode::Char('0'));
        assert_eq!(app.game.state().mode(), Mode::Single);
        assert!(app.game.input().is_empty());
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.should_quit);
        assert!(app.game.input().is_empty());
    }
}
