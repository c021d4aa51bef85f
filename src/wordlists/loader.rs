//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use anyhow::{Context, Result, bail};
use log::warn;
use std::fs;
use std::path::Path;

/// Load a newline-delimited word list from a file
///
/// Blank lines are skipped; lines that are not five ASCII letters are logged
/// and skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read or yields no words.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    let words = parse_lines(&content);
    if words.is_empty() {
        bail!("Word list {} contains no valid words", path.display());
    }
    Ok(words)
}

fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("Skipping '{line}': {e}");
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_bruteforce::wordlists::loader::words_from_slice;
/// use wordle_bruteforce::wordlists::CHEATER;
///
/// let words = words_from_slice(CHEATER);
/// assert_eq!(words.len(), CHEATER.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
