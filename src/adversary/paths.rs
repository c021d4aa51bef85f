//! Beam search for guess sequences that beat the adversary
//!
//! Each round extends every retained path by every guess, lets the adversary
//! answer, and keeps only the `width` children with the fewest survivors.
//! Children whose pool is empty are wins. The search is greedy: it reports
//! wins found inside the beam and can miss shorter sequences outside it.

use super::antagonize::{antagonize, worst_feedback};
use crate::core::{Word, WordEval};
use log::{debug, info};
use rayon::prelude::*;

/// Beam search limits
#[derive(Debug, Clone, Copy)]
pub struct PathSearchConfig {
    /// Paths kept between rounds
    pub width: usize,
    /// Maximum number of guesses per path
    pub depth: usize,
    /// Stop once at least this many wins are found
    pub max_wins: usize,
}

impl Default for PathSearchConfig {
    fn default() -> Self {
        Self {
            width: 20,
            depth: 4,
            max_wins: 1,
        }
    }
}

/// A sequence of adversarial evaluations and the candidates it leaves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    clues: Vec<WordEval>,
    remaining: Vec<Word>,
}

impl SearchPath {
    /// Empty path over the full answer pool
    #[must_use]
    pub fn root(answers: &[Word]) -> Self {
        Self {
            clues: Vec::new(),
            remaining: answers.to_vec(),
        }
    }

    /// New path with `guess` appended and answered by the adversary
    #[must_use]
    pub fn extend(&self, guess: Word) -> Self {
        let (clue, remaining) = antagonize(guess, &self.remaining);
        let mut clues = self.clues.clone();
        clues.push(clue);
        Self { clues, remaining }
    }

    #[must_use]
    pub fn clues(&self) -> &[WordEval] {
        &self.clues
    }

    #[must_use]
    pub fn remaining(&self) -> &[Word] {
        &self.remaining
    }

    /// The adversary conceded: no candidate is left
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Unmaterialised child: parent index, guess, and surviving pool size
struct Child {
    parent: usize,
    guess: Word,
    kept: usize,
}

/// Search for guess sequences that force the adversary to concede
///
/// Returns the winning paths found, in the order they were found.
#[must_use]
pub fn best_paths(guesses: &[Word], answers: &[Word], config: &PathSearchConfig) -> Vec<SearchPath> {
    let mut beam = vec![SearchPath::root(answers)];
    let mut wins = Vec::new();

    for depth in 1..=config.depth {
        if beam.is_empty() || wins.len() >= config.max_wins {
            break;
        }

        let mut children: Vec<Child> = beam
            .par_iter()
            .enumerate()
            .flat_map_iter(|(parent, path)| {
                guesses.iter().map(move |&guess| Child {
                    parent,
                    guess,
                    kept: worst_feedback(guess, path.remaining()).1,
                })
            })
            .collect();
        debug!("Depth {depth}: scored {} children", children.len());

        children.sort_by_key(|child| child.kept);
        children.truncate(config.width);

        let (won, open): (Vec<SearchPath>, Vec<SearchPath>) = children
            .iter()
            .map(|child| beam[child.parent].extend(child.guess))
            .partition(SearchPath::is_win);

        if let Some(best) = open.first() {
            info!(
                "Depth {depth}: {} wins, best open path leaves {}",
                won.len(),
                best.remaining().len()
            );
        } else {
            info!("Depth {depth}: {} wins, no open paths", won.len());
        }

        wins.extend(won);
        beam = open;
    }

    wins
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn extend_does_not_touch_parent() {
        let answers = words(&["slate", "plate", "crate"]);
        let root = SearchPath::root(&answers);
        let child = root.extend(Word::new("crane").unwrap());

        assert!(root.clues().is_empty());
        assert_eq!(root.remaining(), answers);
        assert_eq!(child.clues().len(), 1);
        assert_eq!(child.remaining(), words(&["slate", "plate"]));
    }

    #[test]
    fn single_answer_is_won_in_one() {
        let answers = words(&["crane"]);
        let guesses = words(&["slate", "crane"]);
        let wins = best_paths(&guesses, &answers, &PathSearchConfig::default());

        assert_eq!(wins.len(), 1);
        assert_eq!(wins[0].clues().len(), 1);
        assert!(wins[0].clues()[0].correct());
    }

    #[test]
    fn distinct_letters_are_won_in_two() {
        // Each guess shares no letter with the other answers, so the first
        // guess is dodged and the second one is forced
        let answers = words(&["abcde", "fghij"]);
        let guesses = answers.clone();
        let config = PathSearchConfig {
            width: 10,
            depth: 3,
            max_wins: 1,
        };
        let wins = best_paths(&guesses, &answers, &config);

        assert!(!wins.is_empty());
        for win in &wins {
            assert_eq!(win.clues().len(), 2);
            assert!(win.is_win());
            assert!(win.clues().last().unwrap().correct());
        }
    }

    #[test]
    fn depth_limit_stops_search() {
        let answers = words(&["abcde", "fghij", "klmno"]);
        let guesses = answers.clone();
        let config = PathSearchConfig {
            width: 10,
            depth: 1,
            max_wins: 1,
        };
        assert!(best_paths(&guesses, &answers, &config).is_empty());
    }

    #[test]
    fn zero_width_finds_nothing() {
        let answers = words(&["crane"]);
        let config = PathSearchConfig {
            width: 0,
            depth: 4,
            max_wins: 1,
        };
        assert!(best_paths(&answers, &answers, &config).is_empty());
    }

    #[test]
    fn wins_end_in_concession() {
        let answers = words(&["slate", "plate", "crate", "grate", "irate"]);
        let guesses = words(&["crane", "slate", "plate", "crate", "grate", "irate", "spill"]);
        let config = PathSearchConfig {
            width: 30,
            depth: 4,
            max_wins: 3,
        };

        let wins = best_paths(&guesses, &answers, &config);
        assert!(!wins.is_empty());
        for win in &wins {
            let last = win.clues().last().unwrap();
            assert!(last.correct());
            assert!(answers.contains(&last.word()));
        }
    }
}
