//! Core domain types for Wordle
//!
//! Words, per-letter feedback, and the consistency predicate used to narrow a
//! candidate pool. Everything here is pure and has no external dependencies.

mod constraint;
mod evaluation;
mod word;

pub use constraint::{Constraint, count_rejected, prune_words};
pub use evaluation::{ALL_FEEDBACK, FEEDBACK_COUNT, Feedback, LetterEval, WordEval};
pub use word::{WORD_LEN, Word, WordError};
