//! Least helpful feedback for a guess
//!
//! Instead of evaluating a guess against a hidden answer, the adversary picks
//! whichever of the 243 feedback patterns leaves the most candidates alive.

use crate::core::{ALL_FEEDBACK, FEEDBACK_COUNT, Feedback, Word, WordEval, prune_words};

/// How many candidates each feedback pattern would allow, by pattern index
///
/// A candidate is allowed by exactly one pattern for a given guess (the one it
/// would produce as the answer), so one pass over the pool fills the table.
#[must_use]
pub fn survivor_counts(guess: &Word, pool: &[Word]) -> [usize; FEEDBACK_COUNT] {
    let mut counts = [0usize; FEEDBACK_COUNT];
    for candidate in pool {
        counts[Feedback::calculate(guess, candidate).index()] += 1;
    }
    counts
}

/// The adversary's feedback for `guess` and how many candidates it keeps
///
/// Picks the pattern allowing the most candidates; on ties the pattern that
/// comes first in enumeration order wins. A pool holding only the guessed word
/// forces a concession: all `Good`, nothing left.
#[must_use]
pub fn worst_feedback(guess: Word, pool: &[Word]) -> (WordEval, usize) {
    if let [only] = pool
        && *only == guess
    {
        return (WordEval::new(guess, Feedback::PERFECT), 0);
    }

    let counts = survivor_counts(&guess, pool);
    let mut best = 0;
    for (index, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = index;
        }
    }

    (WordEval::new(guess, ALL_FEEDBACK[best]), counts[best])
}

/// Give the least helpful hint possible
///
/// Returns the chosen evaluation and the candidates it leaves, in pool order.
///
/// # Examples
/// ```
/// use wordle_bruteforce::adversary::antagonize;
/// use wordle_bruteforce::core::Word;
///
/// let pool = vec![Word::new("abcde").unwrap()];
/// let (eval, remaining) = antagonize(pool[0], &pool);
///
/// assert!(eval.correct());
/// assert!(remaining.is_empty());
/// ```
#[must_use]
pub fn antagonize(guess: Word, pool: &[Word]) -> (WordEval, Vec<Word>) {
    let (eval, kept) = worst_feedback(guess, pool);
    if kept == 0 {
        return (eval, Vec::new());
    }
    (eval, prune_words(pool, &[eval]))
}
