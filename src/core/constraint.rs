//! Compiled candidate filters
//!
//! `WordEval::allows` branches on the feedback kind at every position. A
//! `Constraint` regroups the same checks once per evaluation so filtering a
//! large pool is a handful of byte compares and mask tests per word.

use super::evaluation::{LetterEval, WordEval};
use super::word::{Word, letter_bit};

/// Precomputed form of [`WordEval::allows`]
#[derive(Debug, Clone)]
pub struct Constraint {
    /// (position, letter) that must match exactly
    good: Vec<(usize, u8)>,
    /// (position, letter) that must not match but must occur elsewhere
    moved: Vec<(usize, u8)>,
    /// Letters that must not occur at all
    wrong_mask: u32,
}

impl Constraint {
    #[must_use]
    pub fn compile(eval: &WordEval) -> Self {
        let mut good = Vec::new();
        let mut moved = Vec::new();
        let mut wrong_mask = 0;

        let word = eval.word();
        for (i, letter_eval) in eval.letters().iter().enumerate() {
            let letter = word.char_at(i);
            match letter_eval {
                LetterEval::Good => good.push((i, letter)),
                LetterEval::Moved => moved.push((i, letter)),
                LetterEval::Wrong => wrong_mask |= letter_bit(letter),
            }
        }

        Self {
            good,
            moved,
            wrong_mask,
        }
    }

    /// Same answer as `WordEval::allows` for the compiled evaluation
    #[inline]
    #[must_use]
    pub fn allows(&self, candidate: &Word) -> bool {
        candidate.letter_mask() & self.wrong_mask == 0
            && self
                .good
                .iter()
                .all(|&(i, letter)| candidate.char_at(i) == letter)
            && self
                .moved
                .iter()
                .all(|&(i, letter)| candidate.char_at(i) != letter && candidate.has_letter(letter))
    }
}

/// Keep the words allowed by every evaluation, in their original order
///
/// # Examples
/// ```
/// use wordle_bruteforce::core::{Word, WordEval, prune_words};
///
/// let words: Vec<Word> = ["adieu", "crane", "fresh"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let clue = WordEval::from_guess(words[1], &words[2]);
///
/// let remaining = prune_words(&words, &[clue]);
/// assert_eq!(remaining, vec![words[2]]);
/// ```
#[must_use]
pub fn prune_words(words: &[Word], clues: &[WordEval]) -> Vec<Word> {
    let constraints: Vec<Constraint> = clues.iter().map(Constraint::compile).collect();
    words
        .iter()
        .filter(|word| constraints.iter().all(|c| c.allows(word)))
        .copied()
        .collect()
}

/// Number of words in `words` that `constraint` rejects
#[must_use]
pub fn count_rejected(words: &[Word], constraint: &Constraint) -> usize {
    words.iter().filter(|word| !constraint.allows(word)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluation::ALL_FEEDBACK;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    const SAMPLE: &[&str] = &[
        "adieu", "crane", "fresh", "geese", "siren", "octal", "dumpy", "react", "trace", "eerie",
        "llama", "aabbb",
    ];

    #[test]
    fn compiled_matches_direct_predicate_for_every_feedback() {
        let pool = words(SAMPLE);
        for guess in &pool {
            for feedback in &ALL_FEEDBACK {
                let eval = WordEval::new(*guess, *feedback);
                let constraint = Constraint::compile(&eval);
                for candidate in &pool {
                    assert_eq!(
                        constraint.allows(candidate),
                        eval.allows(candidate),
                        "{guess} {} {candidate}",
                        feedback.to_emoji()
                    );
                }
            }
        }
    }

    #[test]
    fn prune_keeps_source_order() {
        let pool = words(&["trace", "react", "crate", "caret"]);
        let clue = WordEval::new(Word::new("zzzzz").unwrap(), "-----".parse().unwrap());
        assert_eq!(prune_words(&pool, &[clue]), pool);
    }

    #[test]
    fn prune_without_clues_is_identity() {
        let pool = words(SAMPLE);
        assert_eq!(prune_words(&pool, &[]), pool);
    }

    #[test]
    fn prune_is_idempotent() {
        let pool = words(SAMPLE);
        let clues = [WordEval::from_guess(pool[1], &pool[7])];
        let once = prune_words(&pool, &clues);
        assert_eq!(prune_words(&once, &clues), once);
    }

    #[test]
    fn more_clues_never_grow_pool() {
        let pool = words(SAMPLE);
        let answer = pool[7];
        let first = WordEval::from_guess(pool[0], &answer);
        let second = WordEval::from_guess(pool[4], &answer);

        let narrow = prune_words(&pool, &[first, second]);
        let wide = prune_words(&pool, &[first]);
        assert!(narrow.iter().all(|w| wide.contains(w)));
        assert!(narrow.contains(&answer));
    }

    #[test]
    fn count_rejected_matches_prune() {
        let pool = words(SAMPLE);
        let eval = WordEval::from_guess(pool[1], &pool[8]);
        let kept = prune_words(&pool, &[eval]).len();
        assert_eq!(count_rejected(&pool, &Constraint::compile(&eval)), pool.len() - kept);
    }
}
