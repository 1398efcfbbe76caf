//! Simple interactive CLI mode
//!
//! Line-based advisor without TUI: prints recommendations, then reads the
//! word that was actually played and the colors the game showed for it.

use crate::core::{Feedback, Word};
use crate::error::Result;
use crate::output::format_recommendations;
use crate::output::formatters::colored_tiles;
use crate::solver::Recommender;
use std::io::{BufRead, Write};
use tracing::warn;

/// What the player asked for at a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    NewGame,
    Undo,
    Text(String),
}

impl Input {
    fn parse(line: &str) -> Self {
        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::NewGame,
            "undo" | "u" => Self::Undo,
            _ => Self::Text(line.to_owned()),
        }
    }
}

/// Run the simple interactive mode until the player quits or input ends
///
/// Feedback that contradicts earlier rounds is reported and discarded; the
/// game state is left as it was.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<'a, R, I, O>(recommender: &mut R, mut input: I, mut output: O) -> Result<()>
where
    R: Recommender<'a>,
    I: BufRead,
    O: Write,
{
    writeln!(output, "This program helps you solve Wordle puzzles.")?;
    writeln!(output, "After each guess, enter the word you played and its colors:")?;
    writeln!(output, "  G = green, Y = yellow, B = grey (e.g. BYBBG)")?;
    writeln!(output, "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess")?;

    let mut history: Vec<(Word, Feedback)> = Vec::new();

    'game: loop {
        let recommendations = recommender.recommend();

        writeln!(output)?;
        if recommendations.is_empty() {
            writeln!(output, "No candidates remain. Type 'undo' or 'new'.")?;
        } else {
            let remaining = recommender.survivors().len();
            writeln!(output, "{remaining} candidates remaining")?;
            writeln!(output, "{}", format_recommendations(&recommendations))?;
        }

        // Word prompt
        let word = loop {
            let Some(line) = prompt(&mut input, &mut output, "Enter word")? else {
                return Ok(());
            };
            match Input::parse(&line) {
                Input::Quit => return Ok(()),
                Input::NewGame => {
                    new_game(recommender, &mut history);
                    writeln!(output, "New game started.")?;
                    continue 'game;
                }
                Input::Undo => {
                    undo(recommender, &mut history, &mut output)?;
                    continue 'game;
                }
                Input::Text(text) => match Word::new(text) {
                    Ok(word) => break word,
                    Err(e) => writeln!(output, "Invalid word: {e}")?,
                },
            }
        };

        // Color prompt
        let feedback = loop {
            let Some(line) = prompt(&mut input, &mut output, "Enter colors (G, Y, B)")? else {
                return Ok(());
            };
            match Input::parse(&line) {
                Input::Quit => return Ok(()),
                Input::NewGame => {
                    new_game(recommender, &mut history);
                    writeln!(output, "New game started.")?;
                    continue 'game;
                }
                Input::Undo => {
                    undo(recommender, &mut history, &mut output)?;
                    continue 'game;
                }
                Input::Text(text) => match Feedback::parse(&text) {
                    Ok(feedback) => break feedback,
                    Err(e) => writeln!(output, "Invalid colors: {e}")?,
                },
            }
        };

        if let Err(conflict) = recommender.add_knowledge(&word, &feedback) {
            warn!(%conflict, "discarded contradictory feedback");
            writeln!(output, "Rejected: {conflict}")?;
            continue;
        }
        history.push((word, feedback));

        if feedback.is_solved() {
            writeln!(output, "\nSolved in {} guesses!", history.len())?;
            for (played, feedback) in &history {
                writeln!(output, "  {} {}", colored_tiles(played.text(), feedback), feedback.to_emoji())?;
            }
            new_game(recommender, &mut history);
            writeln!(output, "New game started.")?;
        }
    }
}

fn new_game<'a, R: Recommender<'a>>(recommender: &mut R, history: &mut Vec<(Word, Feedback)>) {
    history.clear();
    recommender.reset();
}

/// Drop the last accepted guess by replaying the rest into a fresh game
fn undo<'a, R: Recommender<'a>>(
    recommender: &mut R,
    history: &mut Vec<(Word, Feedback)>,
    output: &mut impl Write,
) -> Result<()> {
    let Some((word, _)) = history.pop() else {
        writeln!(output, "Nothing to undo.")?;
        return Ok(());
    };

    recommender.reset();
    history
        .iter()
        .try_for_each(|(played, feedback)| recommender.add_knowledge(played, feedback))?;
    writeln!(output, "Undid {word}.")?;
    Ok(())
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt(input: &mut impl BufRead, output: &mut impl Write, label: &str) -> Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::BaselineRecommender;
    use crate::wordlists::loader::words_from_slice;

    fn run(words: &[Word], script: &str) -> String {
        colored::control::set_override(false);
        let mut recommender = BaselineRecommender::new(words);
        let mut output = Vec::new();
        run_simple(&mut recommender, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn pool() -> Vec<Word> {
        words_from_slice(&["abbey", "trust", "exalt", "pleat"])
    }

    #[test]
    fn input_commands_are_case_insensitive() {
        assert_eq!(Input::parse("QUIT"), Input::Quit);
        assert_eq!(Input::parse("n"), Input::NewGame);
        assert_eq!(Input::parse("Undo"), Input::Undo);
        assert_eq!(Input::parse("crane"), Input::Text("crane".to_string()));
    }

    #[test]
    fn feedback_narrows_recommendations() {
        let output = run(&pool(), "trust\nBBBBG\nquit\n");

        assert!(output.contains("4 candidates remaining"));
        assert!(output.contains("2 candidates remaining"));
        assert!(output.contains("recommendation: exalt    score: 1.00"));
    }

    #[test]
    fn conflicting_feedback_is_rejected_and_state_kept() {
        let output = run(&pool(), "trust\nBBBBG\npleas\nBBBBG\n");

        assert!(output.contains("Rejected: cannot add 's' as correct at index 4"));
        // Still two candidates after the rejection
        assert_eq!(output.matches("2 candidates remaining").count(), 2);
    }

    #[test]
    fn undo_replays_remaining_history() {
        let output = run(&pool(), "trust\nBBBBG\nundo\n");

        assert!(output.contains("Undid trust."));
        assert_eq!(output.matches("4 candidates remaining").count(), 2);
    }

    #[test]
    fn solved_feedback_starts_new_game() {
        let output = run(&pool(), "pleat\nGGGGG\n");

        assert!(output.contains("Solved in 1 guesses!"));
        assert!(output.contains("New game started."));
        assert_eq!(output.matches("4 candidates remaining").count(), 2);
    }

    #[test]
    fn contradictory_win_is_rejected() {
        let output = run(&pool(), "trust\nBBBBG\npleas\nGGGGG\n");

        assert!(output.contains("Rejected: cannot add 's' as correct at index 4"));
        assert!(!output.contains("Solved"));
        assert_eq!(output.matches("2 candidates remaining").count(), 2);
    }

    #[test]
    fn invalid_input_is_reported() {
        let output = run(&pool(), "tru\ntrust\nBBXBB\nBBBBG\n");

        assert!(output.contains("Invalid word"));
        assert!(output.contains("Invalid colors"));
        assert!(output.contains("2 candidates remaining"));
    }

    #[test]
    fn nothing_to_undo_at_start() {
        let output = run(&pool(), "u\n");
        assert!(output.contains("Nothing to undo."));
    }
}
