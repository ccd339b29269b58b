//! Stage controller
//!
//! Runs one stage at a time: one or more boards sharing a single attempt
//! stream. Winning a stage advances the mode (1 → 2 → 4 → 1 boards); running
//! out of attempts replays the same mode. The next stage starts after a delay
//! that the presentation drives through [`Game::tick`].
//!
//! Everything happens on the caller's thread: one submission is fully applied
//! (evaluation, ledger, score, end-of-stage check) before the next is accepted,
//! and a reveal in progress blocks new submissions until
//! [`Game::reveal_complete`] is called.

use super::{
    AttemptLedger, Board, GameConfig, GameError, Keyboard, Message, Rejection,
};
use crate::core::normalize;
use crate::score::{ScoreLedger, ScoreStore};
use crate::wordlists::{Dictionary, WordEntry};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Number of simultaneous boards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Single,
    Duo,
    Quartet,
}

impl Mode {
    #[must_use]
    pub const fn board_count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Duo => 2,
            Self::Quartet => 4,
        }
    }

    /// Mode reached by winning a stage in this mode
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Single => Self::Duo,
            Self::Duo => Self::Quartet,
            Self::Quartet => Self::Single,
        }
    }

    #[must_use]
    pub const fn from_board_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::Single),
            2 => Some(Self::Duo),
            4 => Some(Self::Quartet),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "Termo (1 palavra)"),
            Self::Duo => write!(f, "Dueto (2 palavras)"),
            Self::Quartet => write!(f, "Quarteto (4 palavras)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    InProgress,
    Over,
}

/// Snapshot of the current stage
#[derive(Debug, Clone, Serialize)]
pub struct StageState {
    mode: Mode,
    boards: Vec<Board>,
    #[serde(flatten)]
    ledger: AttemptLedger,
    phase: Phase,
}

impl StageState {
    fn new(mode: Mode, answers: Vec<WordEntry>, config: &GameConfig) -> Self {
        Self {
            mode,
            boards: answers.into_iter().map(Board::new).collect(),
            ledger: AttemptLedger::new(config.word_length, config.max_tries),
            phase: Phase::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[super::Attempt] {
        self.ledger.attempts()
    }

    #[inline]
    #[must_use]
    pub const fn ledger(&self) -> &AttemptLedger {
        &self.ledger
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    #[must_use]
    pub fn all_solved(&self) -> bool {
        self.boards.iter().all(Board::is_solved)
    }

    /// Answers of the boards not solved yet
    #[must_use]
    pub fn unsolved_answers(&self) -> Vec<String> {
        self.boards
            .iter()
            .filter(|b| !b.is_solved())
            .map(|b| b.answer().word.clone())
            .collect()
    }
}

/// A stage start scheduled after the current one ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingStart {
    pub mode: Mode,
    pub remaining: Duration,
}

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The stage goes on
    Continue { solved: Vec<usize> },
    /// Every board is solved; `next` starts after the advance delay
    Cleared { solved: Vec<usize>, next: Mode },
    /// Attempts ran out; the same mode restarts after the advance delay
    Exhausted { answers: Vec<String> },
}

/// Serializable view of everything a presentation shows
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub stage: &'a StageState,
    pub keyboard: &'a Keyboard,
    pub score: u32,
    pub input: &'a str,
    pub message: Option<String>,
    pub busy: bool,
}

/// The stage controller
pub struct Game<S: ScoreStore> {
    config: GameConfig,
    dictionary: Dictionary,
    rng: StdRng,
    stage: StageState,
    keyboard: Keyboard,
    score: ScoreLedger<S>,
    input: String,
    message: Option<Message>,
    busy: bool,
    pending: Option<PendingStart>,
}

impl<S: ScoreStore> Game<S> {
    /// Create a game over a list of entries and start a single-board stage
    ///
    /// # Errors
    /// Returns `GameError::Dictionary` if no entry has `config.word_length` letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_stages::game::{Game, GameConfig, Mode};
    /// use wordle_stages::score::MemoryStore;
    /// use wordle_stages::wordlists::WordEntry;
    ///
    /// let entries = vec![WordEntry::new("praia", "Areia e mar")];
    /// let mut game = Game::new(entries, MemoryStore::new(), GameConfig::default()).unwrap();
    ///
    /// assert_eq!(game.state().mode(), Mode::Single);
    /// game.submit_guess("PRAIA").unwrap();
    /// assert_eq!(game.score(), 1);
    /// ```
    pub fn new(
        entries: impl IntoIterator<Item = WordEntry>,
        store: S,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        let dictionary = Dictionary::new(entries, config.word_length);
        Self::with_dictionary(dictionary, store, config)
    }

    /// Create a game over a prepared dictionary
    ///
    /// The dictionary's word length overrides `config.word_length`, and
    /// `config.max_tries` is raised to at least one.
    ///
    /// # Errors
    /// Returns `GameError::Dictionary` if the dictionary is empty.
    pub fn with_dictionary(
        dictionary: Dictionary,
        store: S,
        mut config: GameConfig,
    ) -> Result<Self, GameError> {
        config.word_length = dictionary.word_length();
        config.max_tries = config.max_tries.max(1);
        let mut rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let answers = draw_answers(&dictionary, &mut rng, &config, Mode::Single)?;
        let stage = StageState::new(Mode::Single, answers, &config);
        log::info!(
            "game ready: {} words, {} letters, {} tries",
            dictionary.len(),
            config.word_length,
            config.max_tries
        );

        Ok(Self {
            config,
            dictionary,
            rng,
            stage,
            keyboard: Keyboard::default(),
            score: ScoreLedger::open(store),
            input: String::new(),
            message: Some(Message::StageStarted { mode: Mode::Single }),
            busy: false,
            pending: None,
        })
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &StageState {
        &self.stage
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    #[inline]
    #[must_use]
    pub const fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score.get()
    }

    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[inline]
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    #[inline]
    #[must_use]
    pub const fn pending_start(&self) -> Option<&PendingStart> {
        self.pending.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            stage: &self.stage,
            keyboard: &self.keyboard,
            score: self.score(),
            input: &self.input,
            message: self.message.as_ref().map(ToString::to_string),
            busy: self.busy,
        }
    }

    /// Submit a guess for every unsolved board
    ///
    /// Checks run in a fixed order: stage over, busy, length, dictionary
    /// membership, duplicate guess. On rejection nothing changes except the
    /// current message.
    ///
    /// # Errors
    /// Returns the [`Rejection`] explaining why the guess was not accepted.
    pub fn submit_guess(&mut self, text: &str) -> Result<Outcome, Rejection> {
        let result = self.try_submit(text);
        if let Err(rejection) = &result {
            log::debug!("guess '{text}' rejected: {rejection:?}");
            self.message = Some(Message::Rejected(rejection.clone()));
        }
        result
    }

    fn try_submit(&mut self, text: &str) -> Result<Outcome, Rejection> {
        if self.stage.is_over() {
            return Err(Rejection::StageOver);
        }
        if self.busy {
            return Err(Rejection::Busy);
        }

        let submission =
            self.stage
                .ledger
                .submit(text, &mut self.stage.boards, &self.dictionary)?;

        self.busy = true;
        self.input.clear();
        self.keyboard = Keyboard::aggregate(self.stage.attempts());
        self.score.increment(submission.solved.len() as u32);

        if self.stage.all_solved() {
            let next = self.stage.mode.next();
            self.stage.phase = Phase::Over;
            self.message = Some(Message::StageCleared { next });
            self.schedule(next);
            log::info!(
                "stage cleared in {} attempts, next mode {next:?}",
                self.stage.ledger.len()
            );
            return Ok(Outcome::Cleared {
                solved: submission.solved,
                next,
            });
        }

        if self.stage.ledger.is_exhausted() {
            let answers = self.stage.unsolved_answers();
            self.stage.phase = Phase::Over;
            self.message = Some(Message::Revealed {
                answers: answers.clone(),
            });
            self.schedule(self.stage.mode);
            log::info!("stage lost, unsolved: {answers:?}");
            return Ok(Outcome::Exhausted { answers });
        }

        self.message = self.hint();
        Ok(Outcome::Continue {
            solved: submission.solved,
        })
    }

    /// Last-letter hint for the first unsolved board (board 0 as a fallback)
    fn hint(&self) -> Option<Message> {
        let board = self
            .stage
            .boards
            .iter()
            .position(|b| !b.is_solved())
            .unwrap_or(0);
        let attempt = self.stage.attempts().last()?;
        let letter = attempt.guess().last_letter()?;
        let status = attempt.evaluation_for(board)?.last()?;
        let close = self.stage.boards[board]
            .answer()
            .is_close(attempt.guess().text());

        Some(Message::Hint {
            board,
            letter,
            status,
            close,
        })
    }

    fn schedule(&mut self, mode: Mode) {
        self.pending = Some(PendingStart {
            mode,
            remaining: self.config.advance_delay,
        });
    }

    /// Mark the reveal of the last submission as finished
    pub fn reveal_complete(&mut self) {
        self.busy = false;
    }

    /// Advance the scheduled stage start by `elapsed`
    ///
    /// Returns `true` if a new stage was started.
    ///
    /// # Errors
    /// Returns `GameError::Dictionary` if no answers can be drawn.
    pub fn tick(&mut self, elapsed: Duration) -> Result<bool, GameError> {
        let Some(pending) = self.pending.as_mut() else {
            return Ok(false);
        };

        if elapsed < pending.remaining {
            pending.remaining -= elapsed;
            return Ok(false);
        }

        let mode = pending.mode;
        self.start(mode)?;
        Ok(true)
    }

    /// Start the scheduled stage right away, skipping the remaining delay
    ///
    /// # Errors
    /// Returns `GameError::Dictionary` if no answers can be drawn.
    pub fn advance_now(&mut self) -> Result<bool, GameError> {
        match self.pending {
            Some(pending) => self.tick(pending.remaining),
            None => Ok(false),
        }
    }

    /// Discard the current stage and start a new one in `mode`
    ///
    /// Cancels any scheduled start; the score is kept.
    ///
    /// # Errors
    /// Returns `GameError::Dictionary` if no answers can be drawn.
    pub fn restart(&mut self, mode: Mode) -> Result<(), GameError> {
        log::info!("restart requested: {mode:?}");
        self.start(mode)
    }

    /// Set the score to 0 and restart with a single board
    ///
    /// # Errors
    /// Returns `GameError::Dictionary` if no answers can be drawn.
    pub fn reset_score(&mut self) -> Result<(), GameError> {
        self.score.reset();
        self.restart(Mode::Single)
    }

    fn start(&mut self, mode: Mode) -> Result<(), GameError> {
        let answers = draw_answers(&self.dictionary, &mut self.rng, &self.config, mode)?;

        self.stage = StageState::new(mode, answers, &self.config);
        self.keyboard = Keyboard::default();
        self.input.clear();
        self.busy = false;
        self.pending = None;
        self.message = Some(Message::StageStarted { mode });
        log::info!("stage started: {mode:?}");

        Ok(())
    }

    /// Append a letter to the pending guess
    ///
    /// Ignored once the guess has `word_length` letters, for non-alphabetic
    /// characters, or while the stage is over or busy. Returns whether the
    /// letter was taken.
    pub fn push_letter(&mut self, letter: char) -> bool {
        if self.stage.is_over() || self.busy || !letter.is_alphabetic() {
            return false;
        }
        if normalize(&self.input).chars().count() >= self.config.word_length {
            return false;
        }
        self.input.push(letter);
        true
    }

    /// Remove the last typed letter
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the pending guess
    ///
    /// The input is cleared only when the guess is accepted.
    ///
    /// # Errors
    /// Returns the [`Rejection`] explaining why the guess was not accepted.
    pub fn submit_input(&mut self) -> Result<Outcome, Rejection> {
        let text = self.input.clone();
        self.submit_guess(&text)
    }
}

fn draw_answers(
    dictionary: &Dictionary,
    rng: &mut StdRng,
    config: &GameConfig,
    mode: Mode,
) -> Result<Vec<WordEntry>, GameError> {
    Ok(dictionary.pick_random_distinct(rng, mode.board_count(), config.draw_budget)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterStatus, evaluate};
    use crate::score::MemoryStore;
    use crate::wordlists::DictionaryError;

    const WORDS: [&str; 10] = [
        "praia", "livro", "tempo", "campo", "festa", "carta", "porta", "nuvem", "verde", "folha",
    ];

    fn game() -> Game<MemoryStore> {
        game_with(GameConfig::default().with_seed(11))
    }

    fn game_with(config: GameConfig) -> Game<MemoryStore> {
        let entries = WORDS.iter().map(|&w| WordEntry::new(w, format!("dica de {w}")));
        Game::new(entries, MemoryStore::new(), config).unwrap()
    }

    fn answers(game: &Game<MemoryStore>) -> Vec<String> {
        game.state()
            .boards()
            .iter()
            .map(|b| b.answer().word.clone())
            .collect()
    }

    fn wrong_guesses(game: &Game<MemoryStore>) -> Vec<&'static str> {
        let answers = answers(game);
        WORDS
            .iter()
            .copied()
            .filter(|w| !answers.iter().any(|a| a == w))
            .collect()
    }

    /// Solve every board of the current stage
    fn win_stage(game: &mut Game<MemoryStore>) -> Outcome {
        loop {
            let next = game
                .state()
                .boards()
                .iter()
                .find(|b| !b.is_solved())
                .map(|b| b.answer().word.clone())
                .expect("stage already solved");
            let outcome = game.submit_guess(&next).unwrap();
            game.reveal_complete();
            if !matches!(outcome, Outcome::Continue { .. }) {
                return outcome;
            }
        }
    }

    #[test]
    fn mode_progression_cycles() {
        assert_eq!(Mode::Single.next(), Mode::Duo);
        assert_eq!(Mode::Duo.next(), Mode::Quartet);
        assert_eq!(Mode::Quartet.next(), Mode::Single);
        assert_eq!(Mode::from_board_count(4), Some(Mode::Quartet));
        assert_eq!(Mode::from_board_count(3), None);
    }

    #[test]
    fn new_game_starts_single_board() {
        let game = game();

        assert_eq!(game.state().mode(), Mode::Single);
        assert_eq!(game.state().boards().len(), 1);
        assert_eq!(game.state().phase(), Phase::InProgress);
        assert!(game.state().attempts().is_empty());
        assert_eq!(game.score(), 0);
        assert_eq!(
            game.message(),
            Some(&Message::StageStarted { mode: Mode::Single })
        );
    }

    #[test]
    fn empty_dictionary_cannot_start() {
        let result = Game::new(
            vec![WordEntry::new("mar", "curta demais")],
            MemoryStore::new(),
            GameConfig::default(),
        );
        assert!(matches!(
            result,
            Err(GameError::Dictionary(DictionaryError::Empty))
        ));
    }

    #[test]
    fn same_seed_draws_same_answers() {
        let a = game_with(GameConfig::default().with_seed(99));
        let b = game_with(GameConfig::default().with_seed(99));
        assert_eq!(answers(&a), answers(&b));
    }

    #[test]
    fn duplicate_guess_rejected() {
        let mut game = game();
        let guess = wrong_guesses(&game)[0];

        game.submit_guess(guess).unwrap();
        game.reveal_complete();
        let result = game.submit_guess(&guess.to_uppercase());

        assert_eq!(
            result,
            Err(Rejection::DuplicateGuess(guess.to_uppercase()))
        );
        assert_eq!(game.state().attempts().len(), 1);
        assert!(game.message().is_some_and(Message::is_rejection));
    }

    #[test]
    fn unknown_and_short_words_rejected() {
        let mut game = game();

        assert_eq!(
            game.submit_guess("xyzzy"),
            Err(Rejection::UnknownWord("xyzzy".to_string()))
        );
        assert_eq!(
            game.submit_guess("mar"),
            Err(Rejection::InvalidLength {
                expected: 5,
                found: 3
            })
        );
        assert!(game.state().attempts().is_empty());
    }

    #[test]
    fn busy_until_reveal_complete() {
        let mut game = game();
        let guesses = wrong_guesses(&game);

        game.submit_guess(guesses[0]).unwrap();
        assert!(game.is_busy());
        assert_eq!(game.submit_guess(guesses[1]), Err(Rejection::Busy));
        assert_eq!(game.state().attempts().len(), 1);

        game.reveal_complete();
        assert!(game.submit_guess(guesses[1]).is_ok());
        assert_eq!(game.state().attempts().len(), 2);
    }

    #[test]
    fn duo_partial_solve_scores_one_and_continues() {
        let mut game = game();
        game.restart(Mode::Duo).unwrap();
        let answers = answers(&game);
        assert_eq!(answers.len(), 2);
        assert_ne!(answers[0], answers[1]);

        let outcome = game.submit_guess(&answers[0]).unwrap();

        assert_eq!(outcome, Outcome::Continue { solved: vec![0] });
        assert!(game.state().boards()[0].is_solved());
        assert!(!game.state().boards()[1].is_solved());
        assert_eq!(game.score(), 1);
        assert_eq!(game.state().phase(), Phase::InProgress);
        assert!(game.pending_start().is_none());
    }

    #[test]
    fn hint_reports_last_letter_of_first_unsolved_board() {
        let mut game = game();
        let answer = answers(&game)[0].clone();
        let guess = wrong_guesses(&game)[0];

        game.submit_guess(guess).unwrap();

        let expected = evaluate(guess, &answer).last().unwrap();
        assert_eq!(
            game.message(),
            Some(&Message::Hint {
                board: 0,
                letter: guess.chars().last().unwrap(),
                status: expected,
                close: false,
            })
        );
    }

    #[test]
    fn hint_flags_guess_close_to_a_tag() {
        let entries = WORDS.iter().map(|&w| {
            WordEntry::new(w, format!("dica de {w}")).with_tags(["livro", "tempo"])
        });
        let mut game =
            Game::new(entries, MemoryStore::new(), GameConfig::default().with_seed(11)).unwrap();
        let wrong = wrong_guesses(&game);
        let tagged = wrong.iter().copied().find(|w| ["livro", "tempo"].contains(w)).unwrap();
        let untagged = wrong.iter().copied().find(|w| !["livro", "tempo"].contains(w)).unwrap();

        game.submit_guess(untagged).unwrap();
        game.reveal_complete();
        assert!(matches!(game.message(), Some(Message::Hint { close: false, .. })));

        game.submit_guess(tagged).unwrap();
        assert!(matches!(game.message(), Some(Message::Hint { close: true, .. })));
        assert!(game.message().unwrap().to_string().ends_with("Você está perto!"));
    }

    #[test]
    fn hint_targets_remaining_board_after_partial_solve() {
        let mut game = game();
        game.restart(Mode::Duo).unwrap();
        let answers = answers(&game);

        game.submit_guess(&answers[0]).unwrap();

        // The solved guess is evaluated against board 1, its last letter hinted
        let expected = evaluate(&answers[0], &answers[1]).last().unwrap();
        match game.message() {
            Some(Message::Hint { board, status, .. }) => {
                assert_eq!(*board, 1);
                assert_eq!(*status, expected);
            }
            other => panic!("expected hint, got {other:?}"),
        }
    }

    #[test]
    fn exhausting_attempts_reveals_unsolved_answers() {
        let mut game = game();
        game.restart(Mode::Duo).unwrap();
        let answers = answers(&game);
        let wrong = wrong_guesses(&game);

        // Solve board 1, then burn the remaining attempts
        game.submit_guess(&answers[1]).unwrap();
        game.reveal_complete();

        let mut last = None;
        for guess in wrong.iter().take(5) {
            last = Some(game.submit_guess(guess).unwrap());
            game.reveal_complete();
        }

        assert_eq!(
            last,
            Some(Outcome::Exhausted {
                answers: vec![answers[0].clone()]
            })
        );
        assert!(game.state().is_over());
        assert_eq!(game.state().attempts().len(), 6);
        assert_eq!(
            game.message(),
            Some(&Message::Revealed {
                answers: vec![answers[0].clone()]
            })
        );
        assert_eq!(game.submit_guess(wrong[5]), Err(Rejection::StageOver));
    }

    #[test]
    fn exhausted_stage_restarts_same_mode_after_delay() {
        let mut game = game_with(GameConfig::default().with_seed(3).with_max_tries(2));
        game.restart(Mode::Duo).unwrap();
        let wrong = wrong_guesses(&game);

        game.submit_guess(wrong[0]).unwrap();
        game.reveal_complete();
        let outcome = game.submit_guess(wrong[1]).unwrap();
        assert!(matches!(outcome, Outcome::Exhausted { ref answers } if answers.len() == 2));

        assert_eq!(game.pending_start().map(|p| p.mode), Some(Mode::Duo));
        assert!(game.tick(ADVANCE).unwrap());
        assert_eq!(game.state().mode(), Mode::Duo);
        assert!(game.state().attempts().is_empty());
    }

    const ADVANCE: Duration = super::super::config::ADVANCE_DELAY;

    #[test]
    fn full_cycle_progression() {
        let mut game = game();

        for (mode, next) in [
            (Mode::Single, Mode::Duo),
            (Mode::Duo, Mode::Quartet),
            (Mode::Quartet, Mode::Single),
        ] {
            assert_eq!(game.state().mode(), mode);
            assert_eq!(game.state().boards().len(), mode.board_count());

            let outcome = win_stage(&mut game);
            assert!(matches!(outcome, Outcome::Cleared { next: n, .. } if n == next));
            assert_eq!(game.message(), Some(&Message::StageCleared { next }));

            assert!(game.tick(ADVANCE).unwrap());
        }

        assert_eq!(game.state().mode(), Mode::Single);
        assert_eq!(game.score(), 1 + 2 + 4);
    }

    #[test]
    fn auto_advance_waits_for_delay() {
        let mut game = game();
        win_stage(&mut game);

        assert!(!game.tick(Duration::from_millis(1000)).unwrap());
        assert_eq!(
            game.pending_start().map(|p| p.remaining),
            Some(ADVANCE - Duration::from_millis(1000))
        );
        assert!(!game.tick(Duration::from_millis(1000)).unwrap());
        assert!(game.tick(Duration::from_millis(1000)).unwrap());
        assert_eq!(game.state().mode(), Mode::Duo);
        assert!(game.pending_start().is_none());
    }

    #[test]
    fn custom_advance_delay_is_scheduled() {
        let delay = Duration::from_millis(400);
        let mut game = game_with(GameConfig::default().with_seed(11).with_advance_delay(delay));
        win_stage(&mut game);

        assert_eq!(
            game.pending_start(),
            Some(&PendingStart {
                mode: Mode::Duo,
                remaining: delay
            })
        );
        assert!(game.tick(delay).unwrap());
    }

    #[test]
    fn zero_tries_still_allows_one_attempt() {
        let config = GameConfig {
            max_tries: 0,
            ..GameConfig::default().with_seed(11)
        };
        let mut game = game_with(config);
        assert_eq!(game.config().max_tries, 1);
        assert_eq!(game.state().ledger().max_tries(), 1);

        let guess = wrong_guesses(&game)[0];
        let outcome = game.submit_guess(guess).unwrap();
        game.reveal_complete();

        assert!(matches!(outcome, Outcome::Exhausted { .. }));
        assert_eq!(game.state().phase(), Phase::Over);
        assert!(game.pending_start().is_some());
        assert!(game.tick(ADVANCE).unwrap());
        assert_eq!(game.state().mode(), Mode::Single);
        assert!(game.state().attempts().is_empty());
    }

    #[test]
    fn restart_cancels_pending_advance() {
        let mut game = game();
        win_stage(&mut game);
        assert!(game.pending_start().is_some());

        game.restart(Mode::Single).unwrap();

        assert!(game.pending_start().is_none());
        assert!(!game.tick(ADVANCE * 10).unwrap());
        assert_eq!(game.state().mode(), Mode::Single);
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn advance_now_skips_delay() {
        let mut game = game();
        assert!(!game.advance_now().unwrap());

        win_stage(&mut game);
        assert!(game.advance_now().unwrap());
        assert_eq!(game.state().mode(), Mode::Duo);
    }

    #[test]
    fn reset_score_returns_to_single() {
        let mut game = game();
        win_stage(&mut game);
        game.advance_now().unwrap();
        assert_eq!(game.state().mode(), Mode::Duo);
        assert_eq!(game.score(), 1);

        game.reset_score().unwrap();

        assert_eq!(game.score(), 0);
        assert_eq!(game.state().mode(), Mode::Single);
    }

    #[test]
    fn input_buffer_accumulates_and_clears_on_accept() {
        let mut game = game();
        let guess = wrong_guesses(&game)[0];

        for c in guess.chars() {
            assert!(game.push_letter(c));
        }
        assert!(!game.push_letter('x'));
        assert!(!game.push_letter('1'));
        assert_eq!(game.input(), guess);

        game.backspace();
        assert_eq!(game.input().len(), 4);
        assert!(matches!(
            game.submit_input(),
            Err(Rejection::InvalidLength { found: 4, .. })
        ));
        assert_eq!(game.input().len(), 4);

        game.push_letter(guess.chars().last().unwrap());
        assert!(game.submit_input().is_ok());
        assert_eq!(game.input(), "");
        assert!(!game.push_letter('a'), "busy while revealing");
    }

    #[test]
    fn accented_input_counts_base_letters() {
        let mut game = game();
        for c in "avião".chars() {
            assert!(game.push_letter(c));
        }
        assert!(!game.push_letter('s'));
    }

    #[test]
    fn keyboard_tracks_attempts() {
        let mut game = game();
        let answer = answers(&game)[0].clone();

        game.submit_guess(&answer).unwrap();

        for letter in answer.chars() {
            assert_eq!(game.keyboard().status(letter), LetterStatus::Correct);
        }
        game.advance_now().unwrap();
        assert!(game.keyboard().is_empty());
    }

    #[test]
    fn snapshot_serializes_stage() {
        let mut game = game();
        let guess = wrong_guesses(&game)[0];
        game.submit_guess(guess).unwrap();

        let json = serde_json::to_value(game.snapshot()).unwrap();

        assert_eq!(json["stage"]["mode"], "single");
        assert_eq!(json["stage"]["phase"], "in_progress");
        assert_eq!(json["stage"]["attempts"][0]["guess"]["text"], guess);
        assert_eq!(json["busy"], true);
        assert_eq!(json["score"], 0);
    }
}
