//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_game_analysis, print_opening, print_paths, print_simulation_summary,
    print_solve_result,
};
