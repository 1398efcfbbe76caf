//! Display functions for command results

use super::formatters::{colored_tiles, create_progress_bar};
use crate::commands::{AnalysisResult, SolveResult};
use crate::solver::Recommendation;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_tiles(&step.word, &step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            match step.score {
                Some(score) => println!("  Score:      {score:.2} expected remaining"),
                None => println!("  Score:      forced first word"),
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let total = result.total_candidates as f64;
    let bar = create_progress_bar(total - result.mean_remaining, total, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Eliminated:  [{}] {}",
        bar.green(),
        format!("{:.2} remain on average", result.mean_remaining).bright_yellow()
    );
    println!("   Worst case:  {} candidates remain", result.worst_case);

    match result.rank {
        Some(rank) => println!("   Rank:        #{rank} of {}", result.total_candidates),
        None => println!("   Rank:        not a candidate answer"),
    }

    if let Some(best) = &result.best {
        println!(
            "   Best guess:  {} ({:.2})",
            best.word.text().to_uppercase().green().bold(),
            best.score
        );
    }
}

/// Format recommendations one per line, best first
#[must_use]
pub fn format_recommendations(recommendations: &[Recommendation]) -> String {
    recommendations
        .iter()
        .map(|r| format!("recommendation: {}    score: {:.2}", r.word, r.score))
        .collect::<Vec<_>>()
        .join("\n")
}
