//! Command implementations

pub mod absurdle;
pub mod analyze;
pub mod assist;
pub mod paths;
pub mod play;
pub mod precompute;
pub mod simulate;
pub mod solve;

pub use absurdle::run_absurdle;
pub use analyze::{GameAnalysis, TurnAnalysis, analyze_game, analyze_guesses};
pub use assist::{AssistOutcome, run_assist};
pub use paths::{PathsResult, find_paths};
pub use play::run_play;
pub use precompute::precompute_opening;
pub use simulate::{SimulationSummary, run_simulation};
pub use solve::{GuessStep, SolveResult, solve_word};

use std::io::{self, BufRead, Write};

/// Prompt and read one trimmed line, `None` at end of input
fn read_line(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
