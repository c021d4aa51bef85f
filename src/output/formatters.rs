//! Formatting utilities for terminal output

use crate::core::{LetterEval, Word, WordEval};
use colored::{ColoredString, Colorize};

/// Colour one evaluated letter: green if placed, yellow if moved, dim if absent
#[must_use]
pub fn color_letter(letter: u8, eval: LetterEval) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match eval {
        LetterEval::Good => text.black().on_green().bold(),
        LetterEval::Moved => text.black().on_yellow().bold(),
        LetterEval::Wrong => text.bright_black(),
    }
}

/// A guess rendered as coloured tiles
#[must_use]
pub fn format_clue(clue: &WordEval) -> String {
    clue.word()
        .chars()
        .iter()
        .zip(clue.letters())
        .map(|(&letter, &eval)| color_letter(letter, eval).to_string())
        .collect()
}

/// Words joined for display, quoted, at most `limit` of them
#[must_use]
pub fn word_list(words: &[Word], limit: usize) -> String {
    let shown: Vec<String> = words.iter().take(limit).map(|w| format!("\"{w}\"")).collect();
    let mut text = shown.join(", ");
    if words.len() > limit {
        text.push_str(&format!(" and {} more", words.len() - limit));
    }
    text
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "guess" or "guesses"
#[must_use]
pub const fn guesses_noun(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}
