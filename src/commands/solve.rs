//! Word solving command
//!
//! Plays the solver against a known answer and records each step.

use crate::core::{Word, WordEval};
use crate::solver::{Solver, Strategy};
use anyhow::{Result, bail};

/// Result of solving a word
pub struct SolveResult {
    pub answer: Word,
    pub success: bool,
    pub steps: Vec<GuessStep>,
}

/// A single guess in the solution, with the pool it acted on
pub struct GuessStep {
    pub clue: WordEval,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `answer` using the given solver
///
/// # Errors
///
/// Returns an error if the answer is not a valid word or is missing from the
/// solver's answer list.
pub fn solve_word<S: Strategy>(answer: &str, solver: &Solver<S>) -> Result<SolveResult> {
    let answer = Word::new(answer)?;
    if !solver.answers().contains(&answer) {
        bail!("'{answer}' is not in the answer list");
    }

    let game = solver.play_game(answer);
    let mut steps = Vec::with_capacity(game.clues().len());
    let mut candidates_before = solver.answers().len();

    for turn in 1..=game.clues().len() {
        let candidates_after = solver.candidates(&game.clues()[..turn]).len();
        steps.push(GuessStep {
            clue: game.clues()[turn - 1],
            candidates_before,
            candidates_after,
        });
        candidates_before = candidates_after;
    }

    Ok(SolveResult {
        answer,
        success: game.victory(),
        steps,
    })
}
