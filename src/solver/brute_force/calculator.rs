//! Elimination score for a single guess

use crate::core::{Constraint, FEEDBACK_COUNT, Feedback, Word, WordEval, count_rejected};

/// Score `guess` against `pool`
///
/// For each hypothetical answer in the pool, count the pool members its
/// evaluation would reject, and sum. A hypothetical whose evaluation would
/// reject the entire pool contributes nothing.
///
/// Every candidate is allowed by exactly one feedback pattern for a given
/// guess, namely the one it would itself produce. The candidates surviving a
/// hypothetical's evaluation are therefore the ones sharing its pattern, so a
/// single pass bucketing the pool by pattern gives every elimination count.
///
/// # Examples
/// ```
/// use wordle_bruteforce::core::Word;
/// use wordle_bruteforce::solver::brute_force::score_guess;
///
/// let pool: Vec<Word> = ["slate", "plate", "crate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// // "crane" separates crate from the other two
/// let score = score_guess(&Word::new("crane").unwrap(), &pool);
/// assert_eq!(score, 4);
/// ```
#[must_use]
pub fn score_guess(guess: &Word, pool: &[Word]) -> usize {
    let total = pool.len();
    let patterns: Vec<usize> = pool
        .iter()
        .map(|candidate| Feedback::calculate(guess, candidate).index())
        .collect();

    let mut survivors = [0usize; FEEDBACK_COUNT];
    for &pattern in &patterns {
        survivors[pattern] += 1;
    }

    patterns
        .iter()
        .map(|&pattern| total - survivors[pattern])
        .filter(|&eliminated| eliminated < total)
        .sum()
}

/// Same score as `score_guess`, filtering the pool once per hypothetical
///
/// Quadratic in the pool size; used to cross-check the bucketed version.
#[must_use]
pub fn score_guess_naive(guess: &Word, pool: &[Word]) -> usize {
    let total = pool.len();
    pool.iter()
        .map(|possibility| {
            let eval = WordEval::from_guess(*guess, possibility);
            count_rejected(pool, &Constraint::compile(&eval))
        })
        .filter(|&eliminated| eliminated < total)
        .sum()
}
