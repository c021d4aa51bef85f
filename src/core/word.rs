//! Five-letter word representation
//!
//! A `Word` stores its letters as bytes plus a bitmask of which letters occur,
//! so "does this letter appear anywhere" is a single AND.

use std::fmt;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A five-letter lowercase word
///
/// Cheap to copy: candidate pools are plain `Vec<Word>` and pruning builds new
/// vectors rather than borrowing from the source list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    chars: [u8; WORD_LEN],
    letters: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_bruteforce::core::Word;
    ///
    /// let word = Word::new("Siren").unwrap();
    /// assert_eq!(word.to_string(), "siren");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = text.to_lowercase();

        if text.len() != WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let mut chars = [0u8; WORD_LEN];
        for (slot, byte) in chars.iter_mut().zip(text.bytes()) {
            if !byte.is_ascii_lowercase() {
                return Err(WordError::InvalidCharacters);
            }
            *slot = byte;
        }

        Ok(Self::from_bytes(chars))
    }

    /// Build a word from bytes already known to be lowercase ASCII letters
    const fn from_bytes(chars: [u8; WORD_LEN]) -> Self {
        let mut letters = 0u32;
        let mut i = 0;
        while i < WORD_LEN {
            letters |= letter_bit(chars[i]);
            i += 1;
        }
        Self { chars, letters }
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Bitmask of the letters in this word (bit 0 = 'a')
    #[inline]
    #[must_use]
    pub const fn letter_mask(&self) -> u32 {
        self.letters
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.letters & letter_bit(letter) != 0
    }

    /// True if the two words have no letter in common
    #[inline]
    #[must_use]
    pub const fn is_disjoint(&self, other: &Self) -> bool {
        self.letters & other.letters == 0
    }
}

/// Mask bit for a lowercase ASCII letter
#[inline]
#[must_use]
pub const fn letter_bit(letter: u8) -> u32 {
    1 << (letter.wrapping_sub(b'a') % 32)
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &ch in &self.chars {
            write!(f, "{}", char::from(ch))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.to_string(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.to_string(), "crane");
        assert_eq!(Word::new("CrAnE").unwrap(), word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), b'c');
        assert_eq!(word.char_at(4), b'e');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'c'));
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
        assert!(!word.has_letter(b'b'));
    }

    #[test]
    fn letter_mask_collapses_duplicates() {
        let speed = Word::new("speed").unwrap();
        assert_eq!(speed.letter_mask().count_ones(), 4);

        let aaaaa = Word::new("aaaaa").unwrap();
        assert_eq!(aaaaa.letter_mask(), 1);
    }

    #[test]
    fn disjoint_words() {
        let siren = Word::new("siren").unwrap();
        let octal = Word::new("octal").unwrap();
        let crane = Word::new("crane").unwrap();

        assert!(siren.is_disjoint(&octal));
        assert!(!siren.is_disjoint(&crane));
    }

    #[test]
    fn word_parse() {
        let word: Word = "dumpy".parse().unwrap();
        assert_eq!(format!("{word}"), "dumpy");
    }
}
