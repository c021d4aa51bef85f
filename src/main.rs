//! Wordle brute-force solver - CLI
//!
//! Play Wordle or Absurdle, solve and simulate with a chosen strategy, review
//! games, and search for ways to beat the adversary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use wordle_bruteforce::{
    adversary::PathSearchConfig,
    commands::{
        analyze_game, analyze_guesses, find_paths, precompute_opening, run_absurdle, run_assist,
        run_play, run_simulation, solve_word,
    },
    core::Word,
    output::{
        print_game_analysis, print_opening, print_paths, print_simulation_summary,
        print_solve_result,
    },
    solver::{Solver, StrategyKind, StrategyType, workers::init_worker_pool},
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_bruteforce",
    about = "Brute-force Wordle solver and Absurdle adversary",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Words accepted as guesses
    #[arg(short, long, global = true, value_enum, default_value_t = WordList::All)]
    guesses: WordList,

    /// Load guesses from a newline-delimited file instead
    #[arg(long, global = true, conflicts_with = "guesses")]
    guesses_file: Option<PathBuf>,

    /// Words that can be the answer
    #[arg(short, long, global = true, value_enum, default_value_t = WordList::Cheat)]
    answers: WordList,

    /// Guess selection strategy
    #[arg(short, long, global = true, value_enum, default_value_t = StrategyKind::BruteForce)]
    strategy: StrategyKind,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Report how long the command took
    #[arg(long, global = true)]
    timing: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play Wordle against a hidden answer (default)
    Play {
        /// Fix the answer instead of drawing one at random
        #[arg(long)]
        answer: Option<String>,

        /// Review the game against the solver afterwards
        #[arg(long)]
        review: bool,
    },

    /// Get suggestions for a game played elsewhere
    Assist,

    /// Let the solver play against a known answer
    Solve {
        /// The answer to solve for
        answer: String,
    },

    /// Play every answer and report the guess histogram
    Simulate {
        /// Only play the first N answers
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Review a finished game turn by turn
    Analyze {
        /// The answer of the game
        answer: String,

        /// Guesses in the order they were played
        #[arg(required = true, value_name = "GUESS")]
        played: Vec<String>,
    },

    /// Find the best opening for the current word lists
    Precompute,

    /// Play Absurdle against the adversary
    Absurdle,

    /// Search for guess sequences that beat the adversary
    Paths {
        /// Paths kept between rounds
        #[arg(long, default_value_t = PathSearchConfig::default().width)]
        width: usize,

        /// Maximum guesses per path
        #[arg(long, default_value_t = PathSearchConfig::default().depth)]
        depth: usize,

        /// Stop after this many winning paths
        #[arg(long, default_value_t = PathSearchConfig::default().max_wins)]
        wins: usize,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Resolve the guess and answer lists from the command line
fn load_wordlists(cli: &Cli) -> Result<(Vec<Word>, Vec<Word>)> {
    let guesses = match &cli.guesses_file {
        Some(path) => load_from_file(path)?,
        None => cli.guesses.words(),
    };
    Ok((guesses, cli.answers.words()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let workers = init_worker_pool().context("failed to start worker pool")?;
    log::debug!("Scoring on {workers} worker threads");

    let (guesses, answers) = load_wordlists(&cli)?;
    // A custom guess file has no precomputed opening
    let opening_list = cli.guesses_file.is_none().then_some(cli.guesses);
    let solver = Solver::new(
        StrategyType::new(cli.strategy, opening_list),
        &guesses,
        &answers,
    );

    let start = Instant::now();
    let command = cli.command.unwrap_or(Commands::Play {
        answer: None,
        review: false,
    });
    let mut stdin = io::stdin().lock();

    match command {
        Commands::Play { answer, review } => {
            let answer = answer.as_deref().map(Word::new).transpose()?;
            let game = run_play(answer, &guesses, &answers, &mut stdin)?;
            if review {
                print_game_analysis(&analyze_game(&game, &solver));
            }
        }
        Commands::Assist => {
            run_assist(&solver, &mut stdin)?;
        }
        Commands::Solve { answer } => {
            let result = solve_word(&answer, &solver)?;
            print_solve_result(&result, cli.verbose > 0);
        }
        Commands::Simulate { limit } => {
            let summary = run_simulation(&solver, limit, true)?;
            print_simulation_summary(&summary);
        }
        Commands::Analyze { answer, played } => {
            let analysis = analyze_guesses(&answer, &played, &solver)?;
            print_game_analysis(&analysis);
        }
        Commands::Precompute => {
            let (word, score) = precompute_opening(&guesses, &answers, true)?;
            print_opening(word, score, answers.len(), start.elapsed());
        }
        Commands::Absurdle => {
            run_absurdle(&guesses, &answers, &mut stdin)?;
        }
        Commands::Paths { width, depth, wins } => {
            let config = PathSearchConfig {
                width,
                depth,
                max_wins: wins,
            };
            let result = find_paths(&guesses, &answers, &config);
            print_paths(&result.paths, result.elapsed);
        }
    }

    if cli.timing {
        eprintln!("Elapsed: {:.3}s", start.elapsed().as_secs_f64());
    }
    Ok(())
}
