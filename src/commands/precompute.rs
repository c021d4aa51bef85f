//! Opening precompute
//!
//! Scores the whole guess universe against the whole answer pool. This is the
//! expensive first-turn search whose result `WordList::opening` caches.

use crate::core::Word;
use crate::solver::brute_force::select_best_guess;
use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

const CHUNK_SIZE: usize = 256;

/// Best opening guess and its score
///
/// Guesses are scored in chunks so progress can be reported; ties keep the
/// earlier guess, matching a single scan over the whole list.
///
/// # Errors
///
/// Returns an error if the answer pool is empty or the progress bar template
/// is invalid.
pub fn precompute_opening(
    guesses: &[Word],
    answers: &[Word],
    show_progress: bool,
) -> Result<(Word, usize)> {
    if answers.is_empty() {
        bail!("cannot precompute an opening without answers");
    }

    let pb = if show_progress {
        let pb = ProgressBar::new(guesses.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} guesses | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut best: Option<(Word, usize)> = None;
    for chunk in guesses.chunks(CHUNK_SIZE) {
        if let Some((word, score)) = select_best_guess(chunk, answers)
            && best.is_none_or(|(_, top)| score > top)
        {
            best = Some((word, score));
            pb.set_message(format!("best: {word} ({score})"));
        }
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    let (word, score) = match best {
        Some(best) => best,
        None => (answers[0], 0),
    };
    info!("Best opening {word} scores {score} over {} answers", answers.len());
    Ok((word, score))
}
