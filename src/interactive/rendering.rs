//! Screen layout for the advisor TUI

use super::app::{App, GuessInfo, InputMode, MessageStyle};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Candidates listed by name before the panel switches to a count
const CANDIDATES_SHOWN: usize = 12;

/// History rows shown, newest first
const HISTORY_SHOWN: usize = 6;

/// Width of the elimination bar in the suggestion panel
const BAR_WIDTH: usize = 18;

/// Draw the whole screen
pub fn ui(f: &mut Frame, app: &App) {
    let [title, body, input, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(f.area());

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(body);
    let [suggestion, history] =
        Layout::vertical([Constraint::Length(8), Constraint::Min(3)]).areas(left);
    let [candidates, space, messages] = Layout::vertical([
        Constraint::Min(4),
        Constraint::Length(3),
        Constraint::Length(7),
    ])
    .areas(right);

    draw_title(f, title);
    draw_suggestion(f, app, suggestion);
    draw_history(f, app, history);
    draw_candidates(f, app, candidates);
    draw_search_space(f, app, space);
    draw_messages(f, app, messages);
    draw_input(f, app, input);
    draw_status(f, app, status);
}

fn panel(title: &str) -> Block<'_> {
    Block::bordered()
        .title(format!(" {title} "))
        .border_type(BorderType::Rounded)
}

fn draw_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("🎯 WORDLE ADVISOR")
        .bold()
        .cyan()
        .alignment(Alignment::Center)
        .block(Block::bordered().border_type(BorderType::Thick).cyan());
    f.render_widget(title, area);
}

fn suggestion_lines(guess: &GuessInfo, candidates: usize) -> Vec<Line<'static>> {
    let heading = if guess.manual { "Playing" } else { "Suggested" };
    let mut lines = vec![Line::from(vec![
        Span::raw(format!("{heading:<11}")),
        Span::styled(
            guess.word.text().to_uppercase(),
            Style::new().yellow().add_modifier(Modifier::BOLD),
        ),
    ])];

    if let Some(score) = guess.score {
        lines.push(Line::from(format!(
            "Eliminates [{}]",
            elimination_bar(score, candidates)
        )));
        lines.push(Line::from(format!("Expected   {score:.2} left")));
    }
    if let Some(worst) = guess.worst_case {
        lines.push(Line::from(format!("Worst      {worst} left")));
    }
    lines
}

/// Bar filled by the share of `candidates` a guess is expected to remove
fn elimination_bar(expected_left: f64, candidates: usize) -> String {
    let kept = if candidates == 0 {
        1.0
    } else {
        expected_left / candidates as f64
    };
    let filled = ((1.0 - kept) * BAR_WIDTH as f64).clamp(0.0, BAR_WIDTH as f64) as usize;
    "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled)
}

fn draw_suggestion(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = match &app.current_guess {
        Some(guess) => suggestion_lines(guess, app.candidates.len()),
        None => vec![Line::from("No suggestion available").dark_gray()],
    };

    let others: Vec<String> = app
        .recommendations
        .iter()
        .skip(1)
        .map(|r| r.word.text().to_uppercase())
        .collect();
    if !others.is_empty() {
        lines.push(Line::from(format!("Also       {}", others.join(" "))));
    }

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel("Guess")),
        area,
    );
}

fn draw_history(f: &mut Frame, app: &App, area: Rect) {
    let turns = app.history.len();
    let rows: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .rev()
        .take(HISTORY_SHOWN)
        .map(|(turn, entry)| {
            let score = entry
                .score
                .map_or_else(String::new, |score| format!(" ({score:.1})"));
            ListItem::new(format!(
                "{}. {} {}{score}  {} → {}",
                turn + 1,
                entry.guess.text().to_uppercase(),
                entry.feedback.to_emoji(),
                entry.candidates_before,
                entry.candidates_after,
            ))
        })
        .collect();

    let title = format!("History ({turns})");
    f.render_widget(List::new(rows).block(panel(&title)), area);
}

fn draw_candidates(f: &mut Frame, app: &App, area: Rect) {
    let count = app.candidates.len();

    let lines: Vec<Line> = match count {
        0 => vec![Line::from("No candidates remain").red()],
        1..=CANDIDATES_SHOWN => app
            .candidates
            .iter()
            .map(|word| Line::from(word.text().to_uppercase()).green())
            .collect(),
        _ => vec![
            Line::from(format!("{count} words still possible")),
            Line::from(
                app.candidates
                    .iter()
                    .take(CANDIDATES_SHOWN)
                    .map(|word| word.text())
                    .collect::<Vec<_>>()
                    .join(" "),
            )
            .dark_gray(),
        ],
    };

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("Candidates")),
        area,
    );
}

fn draw_search_space(f: &mut Frame, app: &App, area: Rect) {
    let total = app.words.len();
    let remaining = app.candidates.len();

    let gauge = Gauge::default()
        .block(panel("Eliminated"))
        .gauge_style(Style::new().cyan())
        .percent(eliminated_percent(total, remaining))
        .label(format!("{remaining}/{total} remain"));
    f.render_widget(gauge, area);
}

fn eliminated_percent(total: usize, remaining: usize) -> u16 {
    if total == 0 {
        return 0;
    }
    let eliminated = total.saturating_sub(remaining);
    (eliminated * 100 / total).min(100) as u16
}

fn draw_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|message| {
            let color = match message.style {
                MessageStyle::Info => Color::White,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            ListItem::new(message.text.as_str()).style(Style::new().fg(color))
        })
        .collect();

    f.render_widget(List::new(items).block(panel("Messages")), area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let (prompt, text, color) = match app.input_mode {
        InputMode::Feedback => (
            "Colors for the guess: G green, Y yellow, B grey",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualWord => (
            "Word you played instead (ESC cancels)",
            app.manual_word.as_str(),
            Color::Cyan,
        ),
        InputMode::WinCelebration => ("🎉 Solved! 'n' new game, 'q' quit", "", Color::Green),
    };

    let input = Paragraph::new(text).bold().fg(color).block(
        Block::bordered()
            .title(format!(" {prompt} "))
            .border_type(BorderType::Double)
            .fg(color),
    );
    f.render_widget(input, area);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let keys = match app.input_mode {
        InputMode::WinCelebration => "n new · q quit",
        InputMode::Feedback | InputMode::ManualWord => {
            "Enter submit · TAB word · u undo · n new · q quit"
        }
    };

    let status = Line::from(vec![
        Span::raw(format!(" {} ", app.recommender.name())).black().on_cyan(),
        Span::raw(format!(
            "  Candidates: {}  Games: {}  Won: {:.0}%  ",
            app.candidates.len(),
            app.stats.total_games,
            app.stats.win_rate()
        )),
        Span::raw(keys).dark_gray(),
    ]);
    f.render_widget(Paragraph::new(status), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{RecommenderKind, SearchConfig};
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn eliminated_percent_bounds() {
        assert_eq!(eliminated_percent(0, 0), 0);
        assert_eq!(eliminated_percent(4, 4), 0);
        assert_eq!(eliminated_percent(4, 1), 75);
        assert_eq!(eliminated_percent(4, 0), 100);
    }

    #[test]
    fn elimination_bar_scales_with_expected_left() {
        assert_eq!(elimination_bar(10.0, 10), "░".repeat(BAR_WIDTH));
        assert_eq!(elimination_bar(0.0, 10), "█".repeat(BAR_WIDTH));
        assert_eq!(elimination_bar(5.0, 10).chars().filter(|&c| c == '█').count(), 9);
    }

    #[test]
    fn draws_suggestion_and_candidates() {
        let words = words_from_slice(&["abbey", "trust", "exalt", "pleat"]);
        let recommender = RecommenderKind::from_name("baseline", &words, SearchConfig::default());
        let mut app = App::new(recommender, &words);
        app.compute_suggestion();

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("ABBEY"));
        assert!(screen.contains("PLEAT"));
        assert!(screen.contains("Candidates: 4"));
    }
}
