//! Word lists for the game
//!
//! Embedded lists compiled into the binary, file loaders for custom lists, and
//! the themed category pools.

pub mod cache;
pub mod categories;
mod embedded;
pub mod loader;

pub use cache::{CacheEntry, TtlCache};
pub use categories::{CategoryLibrary, CategorySource, DEFAULT_CATEGORY};
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT, CHALLENGE, CHALLENGE_COUNT};
