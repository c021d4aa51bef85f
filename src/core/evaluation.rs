//! Per-letter feedback and word evaluations
//!
//! Feedback here is deliberately not multiplicity-aware: a guessed letter is
//! `Moved` whenever it occurs anywhere in the answer at another position, even
//! if that occurrence is already accounted for by another guessed copy. The
//! precomputed openings and the adversary are tuned against this rule.
//!
//! A `Feedback` is also addressable by index (0-242). Index order matches the
//! order in which the adversary enumerates the feedback space: position 0 is
//! the most significant base-3 digit and `Wrong` < `Moved` < `Good`, so index 0
//! is all `Wrong` and index 242 is all `Good`.

use super::word::{WORD_LEN, Word};
use std::fmt;

/// Number of distinct feedback patterns (3^5)
pub const FEEDBACK_COUNT: usize = 243;

/// Evaluation of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterEval {
    /// Letter does not occur in the answer
    Wrong,
    /// Letter occurs in the answer at a different position
    Moved,
    /// Letter is at this exact position in the answer
    Good,
}

impl LetterEval {
    const ALL: [Self; 3] = [Self::Wrong, Self::Moved, Self::Good];

    const fn digit(self) -> usize {
        match self {
            Self::Wrong => 0,
            Self::Moved => 1,
            Self::Good => 2,
        }
    }
}

/// Feedback for a whole guess: one `LetterEval` per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterEval; WORD_LEN]);

/// Every feedback pattern in enumeration order, built at compile time
pub static ALL_FEEDBACK: [Feedback; FEEDBACK_COUNT] = build_feedback_space();

const fn build_feedback_space() -> [Feedback; FEEDBACK_COUNT] {
    let mut table = [Feedback::PERFECT; FEEDBACK_COUNT];
    let mut index = 0;
    while index < FEEDBACK_COUNT {
        table[index] = Feedback::from_index(index);
        index += 1;
    }
    table
}

impl Feedback {
    /// All letters `Good`
    pub const PERFECT: Self = Self([LetterEval::Good; WORD_LEN]);

    #[must_use]
    pub const fn new(letters: [LetterEval; WORD_LEN]) -> Self {
        Self(letters)
    }

    /// Decode a feedback index (0-242)
    ///
    /// Out-of-range indices wrap modulo 243.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        let mut letters = [LetterEval::Wrong; WORD_LEN];
        let mut rest = index % FEEDBACK_COUNT;
        let mut pos = WORD_LEN;
        while pos > 0 {
            pos -= 1;
            letters[pos] = LetterEval::ALL[rest % 3];
            rest /= 3;
        }
        Self(letters)
    }

    /// Position of this pattern in `ALL_FEEDBACK`
    #[must_use]
    pub const fn index(self) -> usize {
        let mut index = 0;
        let mut pos = 0;
        while pos < WORD_LEN {
            index = index * 3 + self.0[pos].digit();
            pos += 1;
        }
        index
    }

    /// Feedback observed when guessing `guess` and the answer is `answer`
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut letters = [LetterEval::Wrong; WORD_LEN];
        for (i, slot) in letters.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == answer.char_at(i) {
                *slot = LetterEval::Good;
            } else if answer.has_letter(letter) {
                *slot = LetterEval::Moved;
            }
        }
        Self(letters)
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterEval; WORD_LEN] {
        &self.0
    }

    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Render as emoji squares
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|eval| match eval {
                LetterEval::Good => '🟩',
                LetterEval::Moved => '🟨',
                LetterEval::Wrong => '⬜',
            })
            .collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    /// Parse a pattern like "GY-G-" or "🟩🟨⬜🟩⬜"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LEN {
            return Err(format!("Feedback must have 5 marks, got {}", chars.len()));
        }

        let mut letters = [LetterEval::Wrong; WORD_LEN];
        for (slot, ch) in letters.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => LetterEval::Good,
                'Y' | 'y' | '🟨' => LetterEval::Moved,
                '-' | '_' | '⬜' => LetterEval::Wrong,
                _ => return Err(format!("Invalid feedback mark '{ch}' in {s}")),
            };
        }
        Ok(Self(letters))
    }
}

/// A guess paired with the feedback it received
///
/// `correct` is derived from the feedback on construction and cannot be set
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordEval {
    word: Word,
    feedback: Feedback,
    correct: bool,
}

impl WordEval {
    #[must_use]
    pub fn new(word: Word, feedback: Feedback) -> Self {
        Self {
            word,
            feedback,
            correct: feedback.is_perfect(),
        }
    }

    /// Evaluate `guess` against the hidden `answer`
    ///
    /// # Examples
    /// ```
    /// use wordle_bruteforce::core::{LetterEval, Word, WordEval};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("react").unwrap();
    /// let eval = WordEval::from_guess(guess, &answer);
    ///
    /// assert_eq!(eval.letters()[0], LetterEval::Moved);
    /// assert_eq!(eval.letters()[3], LetterEval::Wrong);
    /// assert!(!eval.correct());
    /// ```
    #[must_use]
    pub fn from_guess(guess: Word, answer: &Word) -> Self {
        Self::new(guess, Feedback::calculate(&guess, answer))
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> Word {
        self.word
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterEval; WORD_LEN] {
        self.feedback.letters()
    }

    #[inline]
    #[must_use]
    pub const fn correct(&self) -> bool {
        self.correct
    }

    /// Is `candidate` still consistent with this evaluation?
    ///
    /// Checks positions in order and stops at the first failure. For filtering
    /// many candidates against the same evaluation, compile a
    /// [`Constraint`](super::Constraint) instead.
    #[must_use]
    pub fn allows(&self, candidate: &Word) -> bool {
        self.letters().iter().enumerate().all(|(i, eval)| {
            let letter = self.word.char_at(i);
            match eval {
                LetterEval::Good => candidate.char_at(i) == letter,
                LetterEval::Moved => {
                    candidate.char_at(i) != letter && candidate.has_letter(letter)
                }
                LetterEval::Wrong => !candidate.has_letter(letter),
            }
        })
    }
}

impl fmt::Display for WordEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (&letter, eval) in self.word.chars().iter().zip(self.letters()) {
            let letter = char::from(letter);
            match eval {
                LetterEval::Wrong => write!(f, " {letter} ")?,
                LetterEval::Moved => write!(f, ":{letter}:")?,
                LetterEval::Good => write!(f, "|{letter}|")?,
            }
        }
        Ok(())
    }
}
