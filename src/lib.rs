//! WordPop
//!
//! A Wordle-style word game engine: guess evaluation with duplicate-letter
//! handling, deterministic daily word selection, scoring, and game sessions
//! with timed and blind variants.
//!
//! # Quick Start
//!
//! ```rust
//! use wordpop::core::{Feedback, Verdict, Word};
//!
//! let guess = Word::new("speed").unwrap();
//! let target = Word::new("abide").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &target);
//! assert_eq!(feedback.verdicts()[2], Verdict::Present);
//! assert_eq!(feedback.verdicts()[3], Verdict::Absent);
//! assert_eq!(feedback.to_emoji(), "⬜⬜🟨⬜🟨");
//! ```

// Core domain types
pub mod core;

// Word lists, category pools and caching
pub mod wordlists;

// Dictionary and answer filtering
pub mod corpus;

// Daily and random target selection
pub mod selection;

pub mod scoring;

pub mod config;

// Game state machine
pub mod session;

// Results persistence and statistics
pub mod stats;

// JSON request handling
pub mod api;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod logging;
