//! Main Wordle solver interface

use super::strategy::Strategy;
use crate::core::{Word, WordEval, prune_words};
use crate::game::{FAILED_SCORE, Game};
use log::{debug, warn};
use std::collections::BTreeMap;

/// Main Wordle solver
///
/// Coordinates the solving process using a given strategy.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    guesses: &'a [Word],
    answers: &'a [Word],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and word lists
    ///
    /// # Parameters
    /// - `strategy`: The guess selection strategy to use
    /// - `guesses`: All valid guessable words
    /// - `answers`: Words that can be answers, in list order
    pub const fn new(strategy: S, guesses: &'a [Word], answers: &'a [Word]) -> Self {
        Self {
            strategy,
            guesses,
            answers,
        }
    }

    #[must_use]
    pub const fn guesses(&self) -> &'a [Word] {
        self.guesses
    }

    #[must_use]
    pub const fn answers(&self) -> &'a [Word] {
        self.answers
    }

    /// Answers still consistent with every clue, in list order
    #[must_use]
    pub fn candidates(&self, clues: &[WordEval]) -> Vec<Word> {
        prune_words(self.answers, clues)
    }

    /// Next guess for a game with the given clue history
    ///
    /// Returns `None` if no answer is consistent with the clues.
    #[must_use]
    pub fn next_guess(&self, clues: &[WordEval]) -> Option<Word> {
        let candidates = self.candidates(clues);
        self.strategy
            .select_guess(self.guesses, &candidates, clues)
    }

    /// Play one game to completion against `answer`
    ///
    /// The game stops early, as a loss, when the strategy runs out of
    /// candidates or proposes a word outside the guess list.
    #[must_use]
    pub fn play_game(&self, answer: Word) -> Game<'a> {
        let mut game = Game::with_clues(answer, Vec::new(), self.guesses);
        let mut candidates = self.answers.to_vec();

        while game.running() {
            let Some(guess) = self
                .strategy
                .select_guess(self.guesses, &candidates, game.clues())
            else {
                warn!("No candidates left for {answer}");
                break;
            };
            if game.make_guess(guess).is_none() {
                warn!("Strategy proposed {guess}, which is not a valid guess");
                break;
            }
            candidates = prune_words(&candidates, game.clues());
        }

        debug!("{answer}: {} guesses, won = {}", game.clues().len(), game.victory());
        game
    }

    /// Guesses needed to find `answer`, or `FAILED_SCORE` if not found
    #[must_use]
    pub fn simulate_game(&self, answer: Word) -> usize {
        self.play_game(answer).score()
    }

    /// Play every word in `answers` and bucket them by score
    #[must_use]
    pub fn simulate_all_games(&self, answers: &[Word]) -> SimulationReport {
        let mut report = SimulationReport::default();
        for &answer in answers {
            report.record(answer, self.simulate_game(answer));
        }
        report
    }
}

/// Outcome of simulating many games, bucketed by guesses used
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationReport {
    results: BTreeMap<usize, Vec<Word>>,
}

impl SimulationReport {
    pub fn record(&mut self, answer: Word, score: usize) {
        self.results.entry(score).or_default().push(answer);
    }

    /// Answers that took `score` guesses, in the order they were played
    #[must_use]
    pub fn words(&self, score: usize) -> &[Word] {
        self.results.get(&score).map_or(&[], Vec::as_slice)
    }

    /// `(score, count)` pairs in ascending score order
    #[must_use]
    pub fn histogram(&self) -> Vec<(usize, usize)> {
        self.results
            .iter()
            .map(|(&score, words)| (score, words.len()))
            .collect()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.results.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn failures(&self) -> &[Word] {
        self.words(FAILED_SCORE)
    }

    #[must_use]
    pub fn wins(&self) -> usize {
        self.total() - self.failures().len()
    }

    /// Mean guesses over won games, 0.0 if none were won
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        let wins = self.wins();
        if wins == 0 {
            return 0.0;
        }
        let guesses: usize = self
            .results
            .iter()
            .filter(|&(&score, _)| score != FAILED_SCORE)
            .map(|(&score, words)| score * words.len())
            .sum();
        guesses as f64 / wins as f64
    }
}
