//! Brute-force guess scoring
//!
//! A guess scores by how many candidates it would eliminate, summed over every
//! candidate taken as the hypothetical answer.

mod calculator;
mod selector;

pub use calculator::{score_guess, score_guess_naive};
pub use selector::{likely_guesses, select_best_guess};
