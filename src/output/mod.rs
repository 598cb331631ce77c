//! Terminal output formatting
//!
//! Colored boards, keyboard hints and command summaries.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_daily, print_evaluation, print_game_result, print_keyboard,
    print_response, print_simulation, print_stats, print_validation,
};
