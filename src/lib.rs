//! Wordle brute-force solver
//!
//! Feedback model, candidate pruning and exhaustive guess scoring for Wordle,
//! plus an adversary that answers every guess as unhelpfully as it can.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_bruteforce::core::{Word, WordEval};
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("react").unwrap();
//!
//! let clue = WordEval::from_guess(guess, &answer);
//! assert_eq!(clue.to_string(), ":c::r:|a| n :e:");
//! assert!(clue.allows(&answer));
//! ```

// Core domain types
pub mod core;

// Game session
pub mod game;

// Guess selection and simulation
pub mod solver;

// Adversarial feedback and path search
pub mod adversary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
