//! Wordle game session
//!
//! Tracks a hidden answer and the evaluations handed out so far. Solvers read
//! the clue history but never mutate a game except through `make_guess`.

use crate::core::{Word, WordEval};
use rand::prelude::IndexedRandom;
use std::fmt;

/// Number of guesses allowed per game
pub const MAX_GUESSES: usize = 6;

/// Score recorded for a game that was not won
pub const FAILED_SCORE: usize = MAX_GUESSES + 1;

/// A single game against a fixed answer
#[derive(Debug, Clone)]
pub struct Game<'a> {
    answer: Word,
    clues: Vec<WordEval>,
    guesses: &'a [Word],
}

impl<'a> Game<'a> {
    /// Start a game
    ///
    /// When `answer` is `None`, one is drawn at random from `answers`.
    /// Returns `None` only if no answer is given and `answers` is empty.
    #[must_use]
    pub fn begin(answer: Option<Word>, guesses: &'a [Word], answers: &[Word]) -> Option<Self> {
        let answer = match answer {
            Some(answer) => answer,
            None => *answers.choose(&mut rand::rng())?,
        };
        Some(Self::with_clues(answer, Vec::new(), guesses))
    }

    /// Resume a game from an existing clue history
    #[must_use]
    pub const fn with_clues(answer: Word, clues: Vec<WordEval>, guesses: &'a [Word]) -> Self {
        Self {
            answer,
            clues,
            guesses,
        }
    }

    /// Play a guess
    ///
    /// Returns `None` without touching the history if the game is over or the
    /// word is not in the guess list.
    pub fn make_guess(&mut self, guess: Word) -> Option<WordEval> {
        if !self.running() || !self.guesses.contains(&guess) {
            return None;
        }
        let clue = WordEval::from_guess(guess, &self.answer);
        self.clues.push(clue);
        Some(clue)
    }

    #[must_use]
    pub const fn answer(&self) -> Word {
        self.answer
    }

    /// Evaluations handed out so far, oldest first
    #[must_use]
    pub fn clues(&self) -> &[WordEval] {
        &self.clues
    }

    #[must_use]
    pub fn victory(&self) -> bool {
        self.clues.last().is_some_and(WordEval::correct)
    }

    #[must_use]
    pub fn running(&self) -> bool {
        !self.victory() && self.clues.len() < MAX_GUESSES
    }

    /// Guesses used if won, `FAILED_SCORE` otherwise
    #[must_use]
    pub fn score(&self) -> usize {
        if self.victory() {
            self.clues.len()
        } else {
            FAILED_SCORE
        }
    }
}

impl fmt::Display for Game<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wordle")?;
        write!(f, "------")?;
        for clue in &self.clues {
            write!(f, "\n{clue}")?;
        }
        Ok(())
    }
}
