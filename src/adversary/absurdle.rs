//! Adversarial game session
//!
//! There is no hidden answer: every guess is answered with the least helpful
//! feedback still consistent with the history. The player wins once the
//! adversary runs out of candidates and has to concede.

use super::antagonize::antagonize;
use crate::core::{Word, WordEval};
use log::debug;
use std::fmt;

/// An Absurdle game in progress
#[derive(Debug, Clone)]
pub struct Absurdle<'a> {
    guesses: &'a [Word],
    remaining: Vec<Word>,
    clues: Vec<WordEval>,
}

impl<'a> Absurdle<'a> {
    #[must_use]
    pub fn new(guesses: &'a [Word], answers: &[Word]) -> Self {
        Self {
            guesses,
            remaining: answers.to_vec(),
            clues: Vec::new(),
        }
    }

    /// Play a guess and get the adversary's evaluation
    ///
    /// Returns `None` if the game is already won or the word is not in the
    /// guess list.
    pub fn make_guess(&mut self, guess: Word) -> Option<WordEval> {
        if !self.running() || !self.guesses.contains(&guess) {
            return None;
        }
        let (clue, remaining) = antagonize(guess, &self.remaining);
        debug!("{guess}: {} -> {} candidates", self.remaining.len(), remaining.len());
        self.remaining = remaining;
        self.clues.push(clue);
        Some(clue)
    }

    /// Candidates the adversary can still claim as the answer
    #[must_use]
    pub fn remaining(&self) -> &[Word] {
        &self.remaining
    }

    #[must_use]
    pub fn clues(&self) -> &[WordEval] {
        &self.clues
    }

    #[must_use]
    pub fn victory(&self) -> bool {
        self.clues.last().is_some_and(WordEval::correct)
    }

    /// No turn limit: the game runs until the adversary concedes
    #[must_use]
    pub fn running(&self) -> bool {
        !self.victory()
    }
}

impl fmt::Display for Absurdle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Absurdle")?;
        write!(f, "--------")?;
        for clue in &self.clues {
            write!(f, "\n{clue}")?;
        }
        Ok(())
    }
}
