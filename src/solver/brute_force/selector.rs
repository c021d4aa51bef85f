//! Parallel brute-force guess selection

use super::calculator::score_guess;
use crate::core::{Word, WordEval};
use rayon::prelude::*;

/// Score every word in `guess_pool` against `candidates` and keep the best
///
/// Scores are computed in parallel and may finish in any order; the reduction
/// compares input positions so the earliest of several tied guesses wins, as in
/// a sequential scan. If no guess scores above zero the first candidate is
/// returned with score 0.
///
/// Returns `None` when `candidates` is empty.
///
/// # Examples
/// ```
/// use wordle_bruteforce::core::Word;
/// use wordle_bruteforce::solver::brute_force::select_best_guess;
///
/// let guesses: Vec<Word> = ["zzzzz", "abcxx"].iter().map(|w| Word::new(w).unwrap()).collect();
/// let candidates: Vec<Word> = ["aaaaa", "bbbbb", "ccccc"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let (best, score) = select_best_guess(&guesses, &candidates).unwrap();
/// assert_eq!(best.to_string(), "abcxx");
/// assert_eq!(score, 6);
/// ```
#[must_use]
pub fn select_best_guess(guess_pool: &[Word], candidates: &[Word]) -> Option<(Word, usize)> {
    let fallback = *candidates.first()?;

    let best = guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| (index, *guess, score_guess(guess, candidates)))
        .reduce_with(|a, b| {
            if b.2 > a.2 || (b.2 == a.2 && b.0 < a.0) {
                b
            } else {
                a
            }
        });

    match best {
        Some((_, word, score)) if score > 0 => Some((word, score)),
        _ => Some((fallback, 0)),
    }
}

/// Guesses sharing no letter with anything guessed so far
///
/// With no clues this is the whole guess pool.
#[must_use]
pub fn likely_guesses(guess_pool: &[Word], clues: &[WordEval]) -> Vec<Word> {
    let used = clues
        .iter()
        .fold(0u32, |mask, clue| mask | clue.word().letter_mask());
    guess_pool
        .iter()
        .filter(|guess| guess.letter_mask() & used == 0)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn selects_highest_score() {
        let guesses = words(&["zzzzz", "qwert", "abcxx"]);
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);

        let (best, score) = select_best_guess(&guesses, &candidates).unwrap();
        assert_eq!(best.to_string(), "abcxx");
        assert_eq!(score, 6);
    }

    #[test]
    fn first_of_tied_guesses_wins() {
        // Every guess but zzzzz splits all three candidates apart
        let guesses = words(&["zzzzz", "abcxx", "abcyy", "cbaxx"]);
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);

        for _ in 0..20 {
            let (best, _) = select_best_guess(&guesses, &candidates).unwrap();
            assert_eq!(best.to_string(), "abcxx");
        }
    }

    #[test]
    fn zero_scores_fall_back_to_first_candidate() {
        let guesses = words(&["zzzzz", "yyyyy"]);
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);

        let (best, score) = select_best_guess(&guesses, &candidates).unwrap();
        assert_eq!(best.to_string(), "aaaaa");
        assert_eq!(score, 0);
    }

    #[test]
    fn empty_candidates_give_none() {
        let guesses = words(&["crane"]);
        assert!(select_best_guess(&guesses, &[]).is_none());
    }

    #[test]
    fn empty_guess_pool_falls_back() {
        let candidates = words(&["crane", "slate"]);
        let (best, _) = select_best_guess(&[], &candidates).unwrap();
        assert_eq!(best.to_string(), "crane");
    }

    #[test]
    fn likely_guesses_avoid_used_letters() {
        let pool = words(&["siren", "octal", "dumpy", "crane", "lucky"]);
        let clues = [WordEval::from_guess(pool[0], &pool[3])];

        let likely = likely_guesses(&pool, &clues);
        assert_eq!(likely, words(&["octal", "dumpy", "lucky"]));
    }

    #[test]
    fn likely_guesses_without_clues_is_everything() {
        let pool = words(&["siren", "octal"]);
        assert_eq!(likely_guesses(&pool, &[]), pool);
    }
}
