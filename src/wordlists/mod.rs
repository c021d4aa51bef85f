//! Word lists for Wordle solving
//!
//! Named lists are embedded in the binary; `WordList` maps a list identity to
//! its words and to the opening guess precomputed for it.

mod embedded;
pub mod loader;

pub use embedded::{CHEATER, CHEATER_COUNT, DICTIONARY, DICTIONARY_COUNT, SGB, SGB_COUNT};

use crate::core::Word;
use clap::ValueEnum;
use std::fmt;

/// Identity of a built-in word list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum WordList {
    /// Full dictionary of five-letter words
    All,
    /// Stanford GraphBase list
    Sgb,
    /// Curated list of likely answers
    Cheat,
}

impl WordList {
    /// Raw words of this list, in file order
    #[must_use]
    pub const fn raw(self) -> &'static [&'static str] {
        match self {
            Self::All => DICTIONARY,
            Self::Sgb => SGB,
            Self::Cheat => CHEATER,
        }
    }

    /// Parsed words of this list, in file order
    #[must_use]
    pub fn words(self) -> Vec<Word> {
        loader::words_from_slice(self.raw())
    }

    /// Best brute-force opening when this list is the guess universe
    ///
    /// Precomputed with `precompute` against every answer list; the winner
    /// depends only on the guess universe.
    #[must_use]
    pub const fn opening(self) -> &'static str {
        match self {
            Self::All | Self::Sgb => "raise",
            Self::Cheat => "arise",
        }
    }
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Sgb => "sgb",
            Self::Cheat => "cheat",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
        assert_eq!(SGB.len(), SGB_COUNT);
        assert_eq!(CHEATER.len(), CHEATER_COUNT);
    }

    #[test]
    fn all_lists_are_valid_words() {
        for list in [WordList::All, WordList::Sgb, WordList::Cheat] {
            assert_eq!(list.words().len(), list.raw().len(), "{list}");
        }
    }

    #[test]
    fn openings_are_in_their_lists() {
        for list in [WordList::All, WordList::Sgb, WordList::Cheat] {
            assert!(list.raw().contains(&list.opening()), "{list}");
        }
    }

    #[test]
    fn dictionary_contains_other_lists() {
        let all: std::collections::HashSet<_> = DICTIONARY.iter().collect();
        for word in SGB.iter().chain(CHEATER) {
            assert!(all.contains(word), "{word} missing from dictionary");
        }
    }

    #[test]
    fn scripted_openers_available() {
        for word in ["siren", "octal", "dumpy"] {
            assert!(DICTIONARY.contains(&word));
        }
    }
}
