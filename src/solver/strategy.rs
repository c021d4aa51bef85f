//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::brute_force::{likely_guesses, select_best_guess};
use crate::core::{Word, WordEval};
use crate::wordlists::WordList;
use clap::ValueEnum;
use log::debug;

/// A strategy for picking the next guess
pub trait Strategy {
    /// Pick a guess from `guess_pool` given the remaining `candidates` and the
    /// clues seen so far
    ///
    /// Returns `None` when no consistent answer remains; the game is then lost.
    fn select_guess(
        &self,
        guess_pool: &[Word],
        candidates: &[Word],
        clues: &[WordEval],
    ) -> Option<Word>;
}

/// Strategy names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    /// Guess the remaining candidates in list order
    InOrder,
    /// Fixed openers, then remaining candidates in order
    Scripted,
    /// Exhaustive elimination scoring
    BruteForce,
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    InOrder(InOrder),
    Scripted(ScriptedOpenings),
    BruteForce(BruteForce),
}

impl Strategy for StrategyType {
    fn select_guess(
        &self,
        guess_pool: &[Word],
        candidates: &[Word],
        clues: &[WordEval],
    ) -> Option<Word> {
        match self {
            Self::InOrder(s) => s.select_guess(guess_pool, candidates, clues),
            Self::Scripted(s) => s.select_guess(guess_pool, candidates, clues),
            Self::BruteForce(s) => s.select_guess(guess_pool, candidates, clues),
        }
    }
}

impl StrategyType {
    /// Build the named strategy for a guess list
    ///
    /// The guess list decides which precomputed opening brute force uses.
    #[must_use]
    pub fn new(kind: StrategyKind, guesses: Option<WordList>) -> Self {
        match kind {
            StrategyKind::InOrder => Self::InOrder(InOrder),
            StrategyKind::Scripted => Self::Scripted(ScriptedOpenings::default()),
            StrategyKind::BruteForce => Self::BruteForce(
                guesses.map_or_else(BruteForce::default, BruteForce::for_list),
            ),
        }
    }
}

/// Guess the first remaining candidate
pub struct InOrder;

impl Strategy for InOrder {
    fn select_guess(&self, _: &[Word], candidates: &[Word], _: &[WordEval]) -> Option<Word> {
        candidates.first().copied()
    }
}

/// Play a fixed list of openers, then guess candidates in order
///
/// Stops following the script as soon as two or fewer candidates remain.
pub struct ScriptedOpenings {
    openers: Vec<Word>,
}

impl ScriptedOpenings {
    #[must_use]
    pub const fn new(openers: Vec<Word>) -> Self {
        Self { openers }
    }
}

impl Default for ScriptedOpenings {
    /// siren, octal, dumpy: fifteen distinct letters
    fn default() -> Self {
        Self::new(
            ["siren", "octal", "dumpy"]
                .iter()
                .filter_map(|w| Word::new(w).ok())
                .collect(),
        )
    }
}

impl Strategy for ScriptedOpenings {
    fn select_guess(&self, _: &[Word], candidates: &[Word], clues: &[WordEval]) -> Option<Word> {
        match candidates {
            [] => None,
            [first] | [first, _] => Some(*first),
            [first, ..] => Some(self.openers.get(clues.len()).copied().unwrap_or(*first)),
        }
    }
}

/// Tunables for brute-force selection
#[derive(Debug, Clone, Copy)]
pub struct BruteForceConfig {
    /// Above this many candidates only letter-disjoint guesses are scored
    pub threshold: usize,
}

impl Default for BruteForceConfig {
    fn default() -> Self {
        Self { threshold: 100 }
    }
}

/// Pick the guess that eliminates the most candidates over all hypothetical
/// answers
pub struct BruteForce {
    opening: Option<Word>,
    config: BruteForceConfig,
}

impl BruteForce {
    #[must_use]
    pub const fn new(opening: Option<Word>, config: BruteForceConfig) -> Self {
        Self { opening, config }
    }

    /// Brute force with the precomputed opening for `guesses`
    #[must_use]
    pub fn for_list(guesses: WordList) -> Self {
        Self::new(
            Word::new(guesses.opening()).ok(),
            BruteForceConfig::default(),
        )
    }

    #[must_use]
    pub const fn opening(&self) -> Option<Word> {
        self.opening
    }
}

impl Default for BruteForce {
    /// No precomputed opening: the first turn is scored like any other
    fn default() -> Self {
        Self::new(None, BruteForceConfig::default())
    }
}

impl Strategy for BruteForce {
    fn select_guess(
        &self,
        guess_pool: &[Word],
        candidates: &[Word],
        clues: &[WordEval],
    ) -> Option<Word> {
        match candidates {
            [] => return None,
            [first] | [first, _] => return Some(*first),
            _ => {}
        }

        if clues.is_empty() {
            if let Some(opening) = self.opening.filter(|w| guess_pool.contains(w)) {
                return Some(opening);
            }
            debug!("No precomputed opening in guess pool, scoring first turn");
        }

        let (best, score) = if candidates.len() > self.config.threshold {
            let likely = likely_guesses(guess_pool, clues);
            debug!(
                "{} candidates, scoring {} letter-disjoint guesses",
                candidates.len(),
                likely.len()
            );
            if likely.is_empty() {
                select_best_guess(guess_pool, candidates)?
            } else {
                select_best_guess(&likely, candidates)?
            }
        } else {
            select_best_guess(guess_pool, candidates)?
        };

        debug!("Brute force picked {best} (score {score})");
        Some(best)
    }
}
