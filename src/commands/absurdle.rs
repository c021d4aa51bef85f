//! Interactive Absurdle
//!
//! Like Wordle, but the answer keeps moving to dodge every guess.

use super::read_line;
use crate::adversary::Absurdle;
use crate::core::Word;
use crate::output::formatters::{guesses_noun, word_list};
use crate::output::print_board;
use anyhow::Result;
use colored::Colorize;
use std::io::BufRead;

/// Play against the adversary until it concedes or input ends
///
/// # Errors
///
/// Returns an error on an I/O error reading input.
pub fn run_absurdle<'a>(
    guesses: &'a [Word],
    answers: &[Word],
    input: &mut impl BufRead,
) -> Result<Absurdle<'a>> {
    let mut game = Absurdle::new(guesses, answers);

    println!("\n{}", "Absurdle".bright_magenta().bold());
    println!("Every guess gets the least helpful answer possible. Type 'quit' to give up.\n");

    while game.running() {
        let prompt = format!("Guess {} ({} left)", game.clues().len() + 1, game.remaining().len());
        let Some(line) = read_line(input, &prompt)? else {
            break;
        };
        match line.as_str() {
            "quit" | "q" | "exit" => break,
            "hint" => {
                println!("Still possible: {}", word_list(game.remaining(), 10));
                continue;
            }
            _ => {}
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
        let count = game.clues().len();
        println!(
            "{}",
            format!("🎉 Cornered it in {count} {}!", guesses_noun(count))
                .green()
                .bold()
        );
    } else if !game.remaining().is_empty() {
        println!("It could still have been {}", word_list(game.remaining(), 10));
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    #[test]
    fn cornering_wins() {
        let words = words_from_slice(&["abcde", "fghij"]);
        let mut input = Cursor::new("hint\nabcde\nzzzzz\nfghij\n");

        let game = run_absurdle(&words, &words, &mut input).unwrap();
        assert!(game.victory());
        assert_eq!(game.clues().len(), 2);
    }

    #[test]
    fn quitting_leaves_candidates() {
        let words = words_from_slice(&["abcde", "fghij"]);
        let mut input = Cursor::new("abcde\nquit\n");

        let game = run_absurdle(&words, &words, &mut input).unwrap();
        assert!(!game.victory());
        assert_eq!(game.remaining().len(), 1);
    }
}
