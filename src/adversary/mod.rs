//! Adversarial play
//!
//! - `antagonize`: feedback that keeps as many candidates alive as possible
//! - `paths`: beam search for guess sequences that force a concession
//! - `absurdle`: interactive session against the adversary

pub mod absurdle;
pub mod antagonize;
pub mod paths;

pub use absurdle::Absurdle;
pub use antagonize::{antagonize, survivor_counts, worst_feedback};
pub use paths::{PathSearchConfig, SearchPath, best_paths};
