//! Interactive TUI interface
//!
//! Terminal UI built on ratatui and crossterm: shows the suggestion, the
//! remaining candidates and the game history while the player types the
//! colors from the real game.

mod app;
mod rendering;

pub use app::{App, GuessInfo, HistoryEntry, InputMode, Message, MessageStyle, Statistics, run_tui};
