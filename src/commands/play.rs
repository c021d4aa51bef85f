//! Interactive Wordle
//!
//! The player guesses a hidden answer; each guess is shown as coloured tiles.

use super::read_line;
use crate::core::Word;
use crate::game::{Game, MAX_GUESSES};
use crate::output::print_board;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::BufRead;

/// Play one game, reading guesses from `input`
///
/// Returns the finished game, or the game so far if input ends early.
///
/// # Errors
///
/// Returns an error if no answer is given and the answer list is empty, or on
/// an I/O error reading input.
pub fn run_play<'a>(
    answer: Option<Word>,
    guesses: &'a [Word],
    answers: &[Word],
    input: &mut impl BufRead,
) -> Result<Game<'a>> {
    let mut game = Game::begin(answer, guesses, answers).context("answer list is empty")?;

    println!("\n{}", "Wordle".bright_cyan().bold());
    println!("Guess the {} word in {MAX_GUESSES} tries. Type 'quit' to give up.\n", "five-letter".bold());

    while game.running() {
        let Some(line) = read_line(input, &format!("Guess {}", game.clues().len() + 1))? else {
            break;
        };
        if matches!(line.as_str(), "quit" | "q" | "exit") {
            break;
        }

        match Word::new(&line) {
            Ok(guess) => {
                if game.make_guess(guess).is_none() {
                    println!("{}", format!("\"{guess}\" is not in the word list").red());
                    continue;
                }
                println!();
                print_board(game.clues());
                println!();
            }
            Err(e) => println!("{}", e.to_string().red()),
        }
    }

    if game.victory() {
        println!(
            "{}",
            format!("🎉 Solved in {}!", game.clues().len()).green().bold()
        );
    }
    println!(
        "Answer was {}",
        game.answer().to_string().to_uppercase().bright_yellow().bold()
    );
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn plays_until_solved() {
        let words = words_from_slice(&["adieu", "crane", "fresh"]);
        let mut input = Cursor::new("adieu\nnotaword\nzzzzz\ncrane\nfresh\n");

        let game = run_play(Some(word("crane")), &words, &words, &mut input).unwrap();
        assert!(game.victory());
        assert_eq!(game.clues().len(), 2);
    }

    #[test]
    fn quit_ends_early() {
        let words = words_from_slice(&["adieu", "crane"]);
        let mut input = Cursor::new("adieu\nquit\ncrane\n");

        let game = run_play(Some(word("crane")), &words, &words, &mut input).unwrap();
        assert!(!game.victory());
        assert_eq!(game.clues().len(), 1);
    }

    #[test]
    fn end_of_input_ends_game() {
        let words = words_from_slice(&["adieu", "crane"]);
        let mut input = Cursor::new("");

        let game = run_play(None, &words, &words, &mut input).unwrap();
        assert!(game.clues().is_empty());
        assert!(words.contains(&game.answer()));
    }
}
