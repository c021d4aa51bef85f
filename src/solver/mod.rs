//! Wordle solving algorithms
//!
//! Strategies pick the next guess; the `Solver` drives games with them.

pub mod brute_force;
mod engine;
pub mod strategy;
pub mod workers;

pub use engine::{SimulationReport, Solver};
pub use strategy::{
    BruteForce, BruteForceConfig, InOrder, ScriptedOpenings, Strategy, StrategyKind, StrategyType,
};
