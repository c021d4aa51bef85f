//! Absurdle path search command

use crate::adversary::{PathSearchConfig, SearchPath, best_paths};
use crate::core::Word;
use log::info;
use std::time::{Duration, Instant};

/// Winning paths and how long the search took
pub struct PathsResult {
    pub paths: Vec<SearchPath>,
    pub elapsed: Duration,
}

/// Run the beam search and time it
#[must_use]
pub fn find_paths(guesses: &[Word], answers: &[Word], config: &PathSearchConfig) -> PathsResult {
    info!(
        "Searching {} guesses over {} answers (width {}, depth {}, wins {})",
        guesses.len(),
        answers.len(),
        config.width,
        config.depth,
        config.max_wins
    );
    let start = Instant::now();
    let paths = best_paths(guesses, answers, config);
    PathsResult {
        paths,
        elapsed: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn returns_paths_from_search() {
        let words = words_from_slice(&["abcde", "fghij"]);
        let config = PathSearchConfig::default();

        let result = find_paths(&words, &words, &config);
        assert_eq!(result.paths, best_paths(&words, &words, &config));
        assert!(!result.paths.is_empty());
    }
}
