//! Wordle Advisor - CLI
//!
//! Guess recommender with TUI and line-based modes, plus solve, analyze and
//! batch statistics commands.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use tracing::info;
use wordle_advisor::{
    commands::{
        SolveConfig, StatsConfig, analyze_word, install_opening, print_statistics, run_simple,
        run_stats, select_answers, solve_word,
    },
    core::Word,
    logging::init_logging,
    output::{print_analysis_result, print_solve_result},
    solver::{Recommendation, RecommenderKind, SearchConfig, SearchMode},
    wordlists::{EMBEDDED_LIST, answers_opening, select_wordlist},
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Wordle guess recommender using a constraint engine and branch-and-bound search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: branch-and-bound (default, alias exhaustive) or baseline (alias first5)
    #[arg(short, long, global = true, default_value = "branch-and-bound")]
    strategy: String,

    /// Wordlist: 'answers' (default, embedded list) or path to file
    #[arg(short = 'w', long, global = true, default_value = EMBEDDED_LIST)]
    wordlist: String,

    /// Score candidate guesses on all cores
    #[arg(short, long, global = true)]
    parallel: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive advisor without TUI)
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and scores per turn
        #[arg(long)]
        details: bool,
    },

    /// Score a word as a guess against the whole list
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Play every answer and report guess statistics
    Stats {
        /// Only the first N answers
        #[arg(short, long)]
        limit: Option<usize>,

        /// A random sample of N answers
        #[arg(long)]
        sample: Option<usize>,

        /// Force the first guess of every game
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    let command = cli.command.take().unwrap_or(Commands::Play);

    // stderr output would scribble over the TUI unless asked for
    if !matches!(command, Commands::Play) || cli.verbose > 0 {
        init_logging(cli.verbose);
    }

    let words = select_wordlist(&cli.wordlist)
        .with_context(|| format!("failed to load word list '{}'", cli.wordlist))?;
    info!(source = %cli.wordlist, count = words.len(), "word list ready");

    let config = search_config(&cli);

    match command {
        Commands::Play => run_play_command(&cli.strategy, &words, config),
        Commands::Simple => run_simple_command(&cli.strategy, &words, config),
        Commands::Solve { word, details } => {
            run_solve_command(&cli.strategy, &word, details, &words, config)
        }
        Commands::Analyze { word } => run_analyze_command(&word, &words, config),
        Commands::Stats {
            limit,
            sample,
            first_word,
        } => {
            let stats_config = StatsConfig {
                limit,
                sample,
                first_word,
            };
            run_stats_command(&cli.strategy, &stats_config, &words, config)
        }
    }
}

/// Search settings from the global flags
///
/// The embedded list ships with a precomputed opening; custom lists search
/// for theirs on the first turn.
fn search_config(cli: &Cli) -> SearchConfig {
    let config = SearchConfig::new().with_mode(SearchMode::from_flag(cli.parallel));
    if cli.wordlist == EMBEDDED_LIST {
        config.with_opening(answers_opening())
    } else {
        config
    }
}

fn run_play_command(strategy: &str, words: &[Word], config: SearchConfig) -> Result<()> {
    use wordle_advisor::interactive::{App, run_tui};

    let recommender = RecommenderKind::from_name(strategy, words, config);
    run_tui(App::new(recommender, words))
}

fn run_simple_command(strategy: &str, words: &[Word], config: SearchConfig) -> Result<()> {
    let mut recommender = RecommenderKind::from_name(strategy, words, config);
    let stdin = io::stdin();
    run_simple(&mut recommender, stdin.lock(), io::stdout()).context("interactive session failed")
}

fn run_solve_command(
    strategy: &str,
    word: &str,
    details: bool,
    words: &[Word],
    config: SearchConfig,
) -> Result<()> {
    let mut recommender = RecommenderKind::from_name(strategy, words, config);
    let result = solve_word(&SolveConfig::new(word.to_string()), &mut recommender)
        .with_context(|| format!("cannot solve '{word}'"))?;

    print_solve_result(&result, details);
    Ok(())
}

fn run_analyze_command(word: &str, words: &[Word], config: SearchConfig) -> Result<()> {
    let result =
        analyze_word(word, words, config).with_context(|| format!("cannot analyze '{word}'"))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_stats_command(
    strategy: &str,
    stats_config: &StatsConfig,
    words: &[Word],
    config: SearchConfig,
) -> Result<()> {
    let mut recommender = RecommenderKind::from_name(strategy, words, config);
    let answers = select_answers(words, stats_config, &mut rand::rng());

    println!("\n{}", "═".repeat(70));
    println!(" Wordle Advisor Simulation ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} answers", answers.len());
    println!("Strategy: {}", recommender.name());
    if let Some(word) = &stats_config.first_word {
        println!("Forced first word: {word}");
    } else if let Some(opening) =
        installed_opening(&recommender).or_else(|| install_opening(&mut recommender))
    {
        println!("Opening: {opening}");
    }
    println!();

    let stats = run_stats(&mut recommender, &answers, stats_config.first_word.as_deref())
        .context("simulation failed")?;
    print_statistics(&stats);
    Ok(())
}

fn installed_opening(recommender: &RecommenderKind<'_>) -> Option<Recommendation> {
    match recommender {
        RecommenderKind::BranchAndBound(inner) => inner.config().opening.clone(),
        RecommenderKind::Baseline(_) => None,
    }
}
