//! Properties of the feedback model, pruning, scoring and the adversary,
//! checked over random samples of the built-in word lists.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use wordle_bruteforce::adversary::{antagonize, survivor_counts, worst_feedback};
use wordle_bruteforce::core::{ALL_FEEDBACK, Feedback, LetterEval, Word, WordEval, prune_words};
use wordle_bruteforce::game::Game;
use wordle_bruteforce::solver::brute_force::score_guess;
use wordle_bruteforce::solver::{BruteForce, InOrder, Solver, Strategy};
use wordle_bruteforce::wordlists::WordList;

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn sample(words: &[Word], count: usize, rng: &mut StdRng) -> Vec<Word> {
    words.choose_multiple(rng, count).copied().collect()
}

#[test]
fn correct_exactly_when_guess_is_answer() {
    let words = WordList::Cheat.words();
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..500 {
        let guess = *words.choose(&mut rng).unwrap();
        let answer = *words.choose(&mut rng).unwrap();
        let clue = WordEval::from_guess(guess, &answer);
        assert_eq!(clue.correct(), guess == answer, "{guess} vs {answer}");
    }
    for &w in &words {
        assert!(WordEval::from_guess(w, &w).correct());
    }
}

#[test]
fn answer_survives_its_own_evaluation() {
    let guesses = WordList::All.words();
    let answers = WordList::Cheat.words();
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..2000 {
        let guess = *guesses.choose(&mut rng).unwrap();
        let answer = *answers.choose(&mut rng).unwrap();
        assert!(WordEval::from_guess(guess, &answer).allows(&answer));
    }
}

#[test]
fn pruning_is_idempotent_and_monotonic() {
    let guesses = WordList::All.words();
    let answers = WordList::Sgb.words();
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..50 {
        let answer = *answers.choose(&mut rng).unwrap();
        let clues: Vec<WordEval> = sample(&guesses, 3, &mut rng)
            .into_iter()
            .map(|g| WordEval::from_guess(g, &answer))
            .collect();

        let once = prune_words(&answers, &clues);
        assert_eq!(prune_words(&once, &clues), once);
        assert!(once.contains(&answer));

        let fewer = prune_words(&answers, &clues[..1]);
        assert!(once.iter().all(|w| fewer.contains(w)));
    }
}

#[test]
fn score_is_bounded() {
    let guesses = WordList::All.words();
    let answers = WordList::Cheat.words();
    let mut rng = StdRng::seed_from_u64(4);

    for size in [1, 2, 3, 10, 40] {
        let pool = sample(&answers, size, &mut rng);
        for guess in sample(&guesses, 20, &mut rng) {
            assert!(score_guess(&guess, &pool) <= (size - 1) * size);
        }
    }
}

#[test]
fn adversary_keeps_the_largest_group() {
    let guesses = WordList::All.words();
    let answers = WordList::Cheat.words();
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..20 {
        let pool = sample(&answers, 60, &mut rng);
        let guess = *guesses.choose(&mut rng).unwrap();
        let (clue, kept) = worst_feedback(guess, &pool);

        for &feedback in &ALL_FEEDBACK {
            let allowed = prune_words(&pool, &[WordEval::new(guess, feedback)]).len();
            assert!(kept >= allowed);
        }
        let (_, remaining) = antagonize(guess, &pool);
        assert_eq!(remaining.len(), kept);
        assert!(remaining.iter().all(|w| clue.allows(w)));
        assert_eq!(survivor_counts(&guess, &pool).iter().sum::<usize>(), pool.len());
    }
}

#[test]
fn guessing_the_answer_from_the_pool() {
    let words = [word("adieu"), word("crane"), word("fresh")];
    let mut game = Game::begin(Some(word("crane")), &words, &words).unwrap();

    let clue = game.make_guess(word("crane")).unwrap();
    assert_eq!(clue.feedback(), Feedback::PERFECT);
    assert!(clue.correct());
    assert!(game.victory());
}

#[test]
fn adversary_concedes_a_lone_correct_guess() {
    let pool = [word("abcde")];
    let (clue, remaining) = antagonize(word("abcde"), &pool);
    assert_eq!(clue.feedback(), Feedback::PERFECT);
    assert!(remaining.is_empty());
}

#[test]
fn repeated_letters_all_marked_moved() {
    let clue = WordEval::from_guess(word("aabbb"), &word("xyzaw"));
    assert_eq!(
        clue.letters(),
        &[
            LetterEval::Moved,
            LetterEval::Moved,
            LetterEval::Wrong,
            LetterEval::Wrong,
            LetterEval::Wrong
        ]
    );
}

#[test]
fn brute_force_solves_cheat_answers() {
    let guesses = WordList::All.words();
    let answers = WordList::Cheat.words();
    let solver = Solver::new(BruteForce::for_list(WordList::All), &guesses, &answers);

    let report = solver.simulate_all_games(&answers[..60]);
    assert_eq!(report.total(), 60);
    assert_eq!(report.histogram(), vec![(2, 6), (3, 52), (4, 2)]);
    assert!(report.failures().is_empty());
}

#[test]
fn strategies_run_dry_on_contradictions() {
    let words = [word("adieu"), word("crane")];
    let clues = [
        WordEval::new(word("adieu"), Feedback::PERFECT),
        WordEval::new(word("crane"), Feedback::PERFECT),
    ];
    let candidates = prune_words(&words, &clues);

    assert!(candidates.is_empty());
    assert_eq!(InOrder.select_guess(&words, &candidates, &clues), None);
    assert_eq!(BruteForce::default().select_guess(&words, &candidates, &clues), None);
}
