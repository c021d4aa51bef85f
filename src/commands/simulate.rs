//! Simulate every answer - whole-list solver evaluation
//!
//! Runs the solver against each answer word and collects the guess histogram.

use crate::core::Word;
use crate::game::MAX_GUESSES;
use crate::solver::{SimulationReport, Solver, Strategy};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Statistics from simulating a batch of games
#[derive(Debug)]
pub struct SimulationSummary {
    pub report: SimulationReport,
    pub total_time: Duration,
    /// How often each word was played first
    pub first_guesses: FxHashMap<Word, usize>,
}

impl SimulationSummary {
    /// Won games that took five or more guesses, hardest first
    #[must_use]
    pub fn hardest(&self, limit: usize) -> Vec<(Word, usize)> {
        let mut hardest: Vec<(Word, usize)> = self
            .report
            .histogram()
            .into_iter()
            .rev()
            .filter(|&(score, _)| (5..=MAX_GUESSES).contains(&score))
            .flat_map(|(score, _)| self.report.words(score).iter().map(move |&w| (w, score)))
            .collect();
        hardest.truncate(limit);
        hardest
    }
}

/// Play every answer (or the first `limit`) and time the run
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid.
pub fn run_simulation<S: Strategy>(
    solver: &Solver<S>,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<SimulationSummary> {
    let answers = solver.answers();
    let to_play = &answers[..limit.unwrap_or(answers.len()).min(answers.len())];

    let pb = if show_progress {
        let pb = ProgressBar::new(to_play.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut report = SimulationReport::default();
    let mut first_guesses: FxHashMap<Word, usize> = FxHashMap::default();
    let start = Instant::now();

    for (idx, &answer) in to_play.iter().enumerate() {
        let game = solver.play_game(answer);
        if let Some(first) = game.clues().first() {
            *first_guesses.entry(first.word()).or_insert(0) += 1;
        }
        report.record(answer, game.score());

        if idx % 10 == 0 {
            pb.set_message(format!("Avg: {:.2}", report.average_guesses()));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    Ok(SimulationSummary {
        report,
        total_time: start.elapsed(),
        first_guesses,
    })
}
