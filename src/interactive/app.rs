//! TUI application state and logic

use crate::core::{Feedback, Word};
use crate::solver::{Recommendation, Recommender, RecommenderKind};
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
use std::io;
use tracing::warn;

/// Messages kept in the side panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub recommender: RecommenderKind<'a>,
    pub words: &'a [Word],
    pub history: Vec<HistoryEntry>,
    pub current_guess: Option<GuessInfo>,
    /// Full recommendation list for the current turn
    pub recommendations: Vec<Recommendation>,
    /// Survivors, refreshed after every change to the knowledge
    pub candidates: Vec<&'a Word>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_word: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualWord,
    WinCelebration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub guess: Word,
    pub feedback: Feedback,
    pub score: Option<f64>,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// The word the player is about to enter feedback for
#[derive(Debug, Clone, PartialEq)]
pub struct GuessInfo {
    pub word: Word,
    /// Mean words left after this guess; `None` when the strategy has no measure
    pub score: Option<f64>,
    pub worst_case: Option<usize>,
    /// Typed by the player rather than suggested
    pub manual: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index is the number of guesses; 7 collects longer games
    pub guess_distribution: [usize; 8],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(recommender: RecommenderKind<'a>, words: &'a [Word]) -> Self {
        let mut app = Self {
            recommender,
            words,
            history: Vec::new(),
            current_guess: None,
            recommendations: Vec::new(),
            candidates: Vec::new(),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
            manual_word: String::new(),
        };
        app.add_message(
            &format!("Welcome! Suggestions use the {} strategy.", app.recommender.name()),
            MessageStyle::Info,
        );
        app.add_message(
            "Enter the colors the game showed (e.g. 'BYBBG')",
            MessageStyle::Info,
        );
        app.refresh_candidates();
        app
    }

    fn refresh_candidates(&mut self) {
        self.candidates = self.recommender.survivors();
    }

    /// Worst case for `word`, when the strategy can measure it
    fn worst_case_of(&mut self, word: &Word) -> Option<usize> {
        match &mut self.recommender {
            RecommenderKind::BranchAndBound(inner) => Some(inner.score_guess(word).worst_case),
            RecommenderKind::Baseline(_) => None,
        }
    }

    pub fn compute_suggestion(&mut self) {
        self.recommendations = self.recommender.recommend();

        if let Some(best) = self.recommendations.first().cloned() {
            let worst_case = self.worst_case_of(&best.word);
            let score = match self.recommender {
                RecommenderKind::BranchAndBound(_) => Some(best.score),
                RecommenderKind::Baseline(_) => None,
            };
            self.current_guess = Some(GuessInfo {
                word: best.word,
                score,
                worst_case,
                manual: false,
            });
        } else {
            self.current_guess = None;
            self.add_message("No candidates remain! Press 'u' to undo.", MessageStyle::Error);
        }
    }

    /// Apply the colors shown for the current guess
    pub fn handle_feedback(&mut self, input: &str) {
        let feedback = match Feedback::parse(input) {
            Ok(feedback) => feedback,
            Err(e) => {
                self.add_message(&format!("Invalid colors: {e}"), MessageStyle::Error);
                return;
            }
        };
        let Some(guess) = self.current_guess.clone() else {
            self.add_message("No guess to score. Press 'n' for a new game.", MessageStyle::Error);
            return;
        };

        let candidates_before = self.candidates.len();

        if let Err(conflict) = self.recommender.add_knowledge(&guess.word, &feedback) {
            warn!(%conflict, "discarded contradictory feedback");
            self.add_message(&format!("Rejected: {conflict}"), MessageStyle::Error);
            return;
        }

        if feedback.is_solved() {
            self.history.push(HistoryEntry {
                guess: guess.word,
                feedback,
                score: guess.score,
                candidates_before,
                candidates_after: 1,
            });
            self.record_win();
            self.input_buffer.clear();
            return;
        }

        self.refresh_candidates();
        let candidates_after = self.candidates.len();
        self.history.push(HistoryEntry {
            guess: guess.word,
            feedback,
            score: guess.score,
            candidates_before,
            candidates_after,
        });
        self.input_buffer.clear();

        if candidates_after == 0 {
            self.current_guess = None;
            self.recommendations.clear();
            self.add_message(
                "No candidates remain - colors may be wrong. Press 'u' to undo.",
                MessageStyle::Error,
            );
        } else {
            self.compute_suggestion();
            self.add_message(
                &format!("{candidates_after} candidates remaining"),
                MessageStyle::Info,
            );
        }
    }

    fn record_win(&mut self) {
        let guess_count = self.history.len();
        self.stats.games_won += 1;
        self.stats.total_games += 1;
        self.stats.guess_distribution[guess_count.min(7)] += 1;
        self.input_mode = InputMode::WinCelebration;

        let verdict = match guess_count {
            1 => "first try",
            2 => "two guesses",
            3 => "three guesses",
            4 => "four guesses",
            5 => "five guesses",
            6 => "six guesses, just in time",
            _ => "more than six guesses",
        };
        self.add_message(&format!("🎉 Solved: {verdict}!"), MessageStyle::Success);
        self.add_message("'n' starts a new game, 'q' quits.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        // An abandoned game counts as played but not won
        if !self.history.is_empty() && self.input_mode != InputMode::WinCelebration {
            self.stats.total_games += 1;
        }
        self.recommender.reset();
        self.history.clear();
        self.current_guess = None;
        self.input_buffer.clear();
        self.manual_word.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.refresh_candidates();
        self.add_message("New game started!", MessageStyle::Info);
        self.compute_suggestion();
    }

    /// Drop the last guess by replaying the rest into a fresh game
    pub fn undo_last(&mut self) {
        if self.history.pop().is_none() {
            self.add_message("Nothing to undo!", MessageStyle::Error);
            return;
        }

        self.recommender.reset();
        let recommender = &mut self.recommender;
        let replayed = self
            .history
            .iter()
            .try_for_each(|entry| recommender.add_knowledge(&entry.guess, &entry.feedback));

        if let Err(conflict) = replayed {
            self.add_message(&format!("Replay failed: {conflict}"), MessageStyle::Error);
        }
        self.input_mode = InputMode::Feedback;
        self.refresh_candidates();
        self.compute_suggestion();
        self.add_message("Undone!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Replace the suggestion with the word typed in manual mode
    pub fn use_manual_word(&mut self) {
        let word = match Word::new(self.manual_word.as_str()) {
            Ok(word) => word,
            Err(e) => {
                self.add_message(&format!("Invalid word: {e}"), MessageStyle::Error);
                return;
            }
        };
        if !self.words.contains(&word) {
            self.add_message(
                &format!("Word '{}' not in the word list!", word.text().to_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        let measured = match &mut self.recommender {
            RecommenderKind::BranchAndBound(inner) => Some(inner.score_guess(&word)),
            RecommenderKind::Baseline(_) => None,
        };

        if let (Some(measured), Some(suggested)) = (
            measured,
            self.current_guess.as_ref().and_then(|guess| guess.score),
        ) && measured.mean > suggested
        {
            self.add_message(
                &format!(
                    "Note: suggestion leaves {suggested:.2} on average ({:.2} fewer)",
                    measured.mean - suggested
                ),
                MessageStyle::Info,
            );
        }

        let text = match measured {
            Some(measured) => format!(
                "Using: {} (mean {:.2}, worst {})",
                word.text().to_uppercase(),
                measured.mean,
                measured.worst_case
            ),
            None => format!("Using: {}", word.text().to_uppercase()),
        };
        self.add_message(&text, MessageStyle::Success);

        self.current_guess = Some(GuessInfo {
            word,
            score: measured.map(|m| m.mean),
            worst_case: measured.map(|m| m.worst_case),
            manual: true,
        });
        self.input_mode = InputMode::Feedback;
        self.manual_word.clear();
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Feedback => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                KeyCode::Tab => {
                    if !self.candidates.is_empty() {
                        self.input_mode = InputMode::ManualWord;
                        self.add_message("Enter the word you played (5 letters)", MessageStyle::Info);
                    }
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    let input = self.input_buffer.clone();
                    self.handle_feedback(&input);
                }
                _ => {}
            },
            InputMode::ManualWord => match key.code {
                KeyCode::Esc => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_word.clear();
                    self.add_message("Cancelled manual word entry", MessageStyle::Info);
                }
                KeyCode::Tab => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_word.clear();
                }
                KeyCode::Char(c) => {
                    if self.manual_word.len() < 5 && c.is_ascii_alphabetic() {
                        self.manual_word.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.manual_word.pop();
                }
                KeyCode::Enter => {
                    if self.manual_word.len() == 5 {
                        self.use_manual_word();
                    } else {
                        self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
                    }
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.compute_suggestion();

    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
