//! Assisted solving
//!
//! The solver suggests guesses for a game played elsewhere; the user types
//! back the feedback each guess received.

use super::read_line;
use crate::core::{Feedback, WordEval};
use crate::output::formatters::word_list;
use crate::output::print_board;
use crate::solver::{Solver, Strategy};
use anyhow::Result;
use colored::Colorize;
use std::io::BufRead;

/// How an assisted session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistOutcome {
    Solved(Vec<WordEval>),
    /// The feedback contradicted every candidate
    NoCandidates(Vec<WordEval>),
    Quit,
}

/// Suggest guesses until the user reports a win, quits, or input ends
///
/// # Errors
///
/// Returns an error on an I/O error reading input.
pub fn run_assist<S: Strategy>(solver: &Solver<S>, input: &mut impl BufRead) -> Result<AssistOutcome> {
    println!("\n{}", "Wordle Assistant".bright_cyan().bold());
    println!("After each suggested guess, enter the feedback:");
    println!("  G/g/🟩 placed, Y/y/🟨 elsewhere, -/_/⬜ absent, or 'win'");
    println!("Commands: 'undo' to take back a guess, 'quit' to exit\n");

    let mut clues: Vec<WordEval> = Vec::new();

    loop {
        let candidates = solver.candidates(&clues);
        let Some(guess) = solver.next_guess(&clues) else {
            println!("{}", "No candidates remain! The feedback may be incorrect.".red());
            return Ok(AssistOutcome::NoCandidates(clues));
        };

        println!("{}", "─".repeat(60));
        println!("Turn {}: {} candidates remaining", clues.len() + 1, candidates.len());
        println!(
            "Suggested guess: {}",
            guess.to_string().to_uppercase().bright_yellow().bold()
        );
        if candidates.len() <= 10 {
            println!("Candidates: {}", word_list(&candidates, 10));
        }

        let feedback = loop {
            let Some(line) = read_line(input, "Feedback")? else {
                return Ok(AssistOutcome::Quit);
            };
            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Ok(AssistOutcome::Quit),
                "undo" | "u" => {
                    if clues.pop().is_none() {
                        println!("Nothing to undo!");
                        continue;
                    }
                    break None;
                }
                "win" | "correct" | "solved" => break Some(Feedback::PERFECT),
                _ => match line.parse::<Feedback>() {
                    Ok(feedback) => break Some(feedback),
                    Err(e) => println!("{}", e.red()),
                },
            }
        };

        if let Some(feedback) = feedback {
            clues.push(WordEval::new(guess, feedback));
            print_board(&clues);
            if feedback.is_perfect() {
                println!(
                    "{}",
                    format!("🎉 Solved in {}!", clues.len()).green().bold()
                );
                return Ok(AssistOutcome::Solved(clues));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterEval, Word};
    use crate::solver::InOrder;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn follows_feedback_to_win() {
        let words = words_from_slice(&["adieu", "crane", "fresh", "siren", "octal"]);
        let solver = Solver::new(InOrder, &words, &words);
        // adieu against siren, then siren is the only word left
        let feedback = WordEval::from_guess(word("adieu"), &word("siren")).feedback();
        let text: String = feedback
            .letters()
            .iter()
            .map(|l| match l {
                LetterEval::Good => 'G',
                LetterEval::Moved => 'Y',
                LetterEval::Wrong => '-',
            })
            .collect();
        let mut input = Cursor::new(format!("bogus\n{text}\nwin\n"));

        let AssistOutcome::Solved(clues) = run_assist(&solver, &mut input).unwrap() else {
            panic!("expected a win");
        };
        assert_eq!(clues.len(), 2);
        assert_eq!(clues[1].word(), word("siren"));
    }

    #[test]
    fn contradictory_feedback_runs_dry() {
        let words = words_from_slice(&["adieu", "crane"]);
        let solver = Solver::new(InOrder, &words, &words);
        let mut input = Cursor::new("GGGG-\n");

        assert!(matches!(
            run_assist(&solver, &mut input).unwrap(),
            AssistOutcome::NoCandidates(_)
        ));
    }

    #[test]
    fn undo_and_quit() {
        let words = words_from_slice(&["adieu", "crane"]);
        let solver = Solver::new(InOrder, &words, &words);
        let mut input = Cursor::new("undo\nY--Y-\nundo\nquit\n");

        assert_eq!(run_assist(&solver, &mut input).unwrap(), AssistOutcome::Quit);
    }
}
