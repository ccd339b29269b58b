//! Interactive terminal UI
//!
//! ratatui front end: the app owns the [`Game`](crate::game::Game) and drives
//! its reveal and auto-advance timers from the event loop.

mod app;
mod rendering;

pub use app::{App, REVEAL_STEP, run_tui};
