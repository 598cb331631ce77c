//! Core domain types for the game
//!
//! Words, guess evaluation and keyboard aggregation. Everything here is pure:
//! no I/O, no clocks, no randomness.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, GuessRecord, Verdict};
pub use keyboard::KeyboardState;
pub use word::{WORD_LENGTH, Word, WordError};
