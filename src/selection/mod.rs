//! Target word selection
//!
//! Four ways to pick a target:
//! - `random`: uniform draw from the answer pool
//! - `daily`: date-keyed draw from the answer pool
//! - `daily-challenge`: date-keyed draw from the challenge pool
//! - `category`: uniform draw from a themed pool

mod daily;

pub use daily::{daily_index, date_key, dated_key, string_hash, today_key};

use crate::core::Word;
use crate::corpus::{CorpusError, WordCorpus};
use crate::wordlists::{CategoryLibrary, DEFAULT_CATEGORY};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Uniform index in `[0, pool_size)` from the thread RNG
///
/// Returns `None` for an empty pool.
#[must_use]
pub fn random_index(pool_size: usize) -> Option<usize> {
    random_index_with(&mut rand::rng(), pool_size)
}

/// Uniform index from a caller-supplied RNG
#[must_use]
pub fn random_index_with<R: Rng>(rng: &mut R, pool_size: usize) -> Option<usize> {
    (pool_size > 0).then(|| rng.random_range(0..pool_size))
}

/// How a game's target is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    #[default]
    Random,
    Daily,
    DailyChallenge,
    Category,
}

impl GameMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Daily => "daily",
            Self::DailyChallenge => "daily-challenge",
            Self::Category => "category",
        }
    }

    /// Modes whose target is shared by every player on the same day
    #[must_use]
    pub const fn is_daily(self) -> bool {
        matches!(self, Self::Daily | Self::DailyChallenge)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game mode '{0}'")]
pub struct UnknownMode(pub String);

impl FromStr for GameMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "daily" => Ok(Self::Daily),
            "daily-challenge" | "challenge" => Ok(Self::DailyChallenge),
            "category" => Ok(Self::Category),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

/// A chosen target and how it was chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub word: Word,
    pub mode: GameMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Picks targets from a corpus and a category library
#[derive(Debug, Clone)]
pub struct WordSelector {
    categories: CategoryLibrary,
}

impl WordSelector {
    #[must_use]
    pub const fn new(categories: CategoryLibrary) -> Self {
        Self { categories }
    }

    #[must_use]
    pub const fn categories(&self) -> &CategoryLibrary {
        &self.categories
    }

    pub const fn categories_mut(&mut self) -> &mut CategoryLibrary {
        &mut self.categories
    }

    /// Pick a target using the thread RNG for non-daily modes
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::EmptyPool` when the pool for `mode` has no words.
    pub fn select(
        &mut self,
        corpus: &WordCorpus,
        mode: GameMode,
        category: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Selection, CorpusError> {
        self.select_with(&mut rand::rng(), corpus, mode, category, now)
    }

    /// Pick a target with a caller-supplied RNG
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::EmptyPool` when the pool for `mode` has no words.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeDelta, TimeZone, Utc};
    /// use rand::SeedableRng;
    /// use wordpop::corpus::WordCorpus;
    /// use wordpop::selection::{GameMode, WordSelector};
    /// use wordpop::wordlists::CategoryLibrary;
    ///
    /// let corpus = WordCorpus::embedded();
    /// let mut selector = WordSelector::new(CategoryLibrary::built_in(TimeDelta::hours(24)));
    /// let now = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    ///
    /// let a = selector.select_with(&mut rng, &corpus, GameMode::Daily, None, now).unwrap();
    /// let b = selector.select_with(&mut rng, &corpus, GameMode::Daily, None, now).unwrap();
    /// assert_eq!(a.word, b.word);
    /// ```
    pub fn select_with<R: Rng>(
        &mut self,
        rng: &mut R,
        corpus: &WordCorpus,
        mode: GameMode,
        category: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Selection, CorpusError> {
        let (word, category) = match mode {
            GameMode::Random => {
                let pool = corpus.answer_pool();
                let i = random_index_with(rng, pool.len())
                    .ok_or(CorpusError::EmptyPool("answer"))?;
                (pool[i], None)
            }
            GameMode::Daily => {
                let pool = corpus.answer_pool();
                let i = daily_index(&today_key(now), pool.len())
                    .ok_or(CorpusError::EmptyPool("answer"))?;
                (pool[i], None)
            }
            GameMode::DailyChallenge => {
                let pool = corpus.challenge_pool();
                let i = daily_index(&today_key(now), pool.len())
                    .ok_or(CorpusError::EmptyPool("challenge"))?;
                (pool[i], None)
            }
            GameMode::Category => {
                let name = self
                    .categories
                    .resolve(category.unwrap_or(DEFAULT_CATEGORY));
                let pool = self.categories.pool(&name, corpus, now);
                let i = random_index_with(rng, pool.len())
                    .ok_or(CorpusError::EmptyPool("category"))?;
                (pool[i], Some(name))
            }
        };

        log::debug!("Selected {word} for {mode} mode");
        Ok(Selection {
            word,
            mode,
            category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn selector() -> WordSelector {
        WordSelector::new(CategoryLibrary::built_in(TimeDelta::hours(24)))
    }

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, 8, 30, 0).unwrap()
    }

    #[test]
    fn random_index_bounds() {
        assert_eq!(random_index(0), None);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let i = random_index_with(&mut rng, 5).unwrap();
            assert!(i < 5);
        }
        assert_eq!(random_index(1), Some(0));
    }

    #[test]
    fn game_mode_parses_and_prints() {
        for mode in [
            GameMode::Random,
            GameMode::Daily,
            GameMode::DailyChallenge,
            GameMode::Category,
        ] {
            assert_eq!(mode.as_str().parse::<GameMode>(), Ok(mode));
        }
        assert_eq!(
            "weekly".parse::<GameMode>(),
            Err(UnknownMode("weekly".to_string()))
        );
        assert_eq!(
            serde_json::to_value(GameMode::DailyChallenge).unwrap(),
            "daily-challenge"
        );
    }

    #[test]
    fn daily_matches_index_into_answer_pool() {
        let corpus = WordCorpus::embedded();
        let mut selector = selector();
        let pool = corpus.answer_pool();
        let expected = pool[daily_index("2024-01-15", pool.len()).unwrap()];

        let selection = selector
            .select(&corpus, GameMode::Daily, None, at(15))
            .unwrap();
        assert_eq!(selection.word, expected);
        assert_eq!(selection.category, None);
    }

    #[test]
    fn daily_is_stable_within_a_day() {
        let corpus = WordCorpus::embedded();
        let mut selector = selector();
        let morning = selector
            .select(&corpus, GameMode::DailyChallenge, None, at(15))
            .unwrap();
        let evening = selector
            .select(
                &corpus,
                GameMode::DailyChallenge,
                None,
                at(15) + TimeDelta::hours(12),
            )
            .unwrap();
        assert_eq!(morning.word, evening.word);
        assert!(corpus.challenge_pool().contains(&morning.word));
    }

    #[test]
    fn category_draws_from_named_pool() {
        let corpus = WordCorpus::embedded();
        let mut selector = selector();
        let mut rng = StdRng::seed_from_u64(11);

        let selection = selector
            .select_with(&mut rng, &corpus, GameMode::Category, Some("Colors"), at(2))
            .unwrap();
        assert_eq!(selection.category.as_deref(), Some("colors"));
        let colors = crate::wordlists::categories::built_in_words("colors").unwrap();
        assert!(colors.contains(&selection.word.text()));
    }

    #[test]
    fn unknown_category_uses_default() {
        let corpus = WordCorpus::embedded();
        let mut selector = selector();
        let selection = selector
            .select(&corpus, GameMode::Category, Some("sports"), at(2))
            .unwrap();
        assert_eq!(selection.category.as_deref(), Some(DEFAULT_CATEGORY));
    }

    #[test]
    fn empty_pool_is_error() {
        let corpus = WordCorpus::new(Vec::new(), Vec::new());
        let mut selector = selector();
        assert!(matches!(
            selector.select(&corpus, GameMode::Random, None, at(1)),
            Err(CorpusError::EmptyPool("answer"))
        ));
        assert!(matches!(
            selector.select(&corpus, GameMode::DailyChallenge, None, at(1)),
            Err(CorpusError::EmptyPool("challenge"))
        ));
    }

    #[test]
    fn selection_serializes_word_and_mode() {
        let selection = Selection {
            word: Word::new("house").unwrap(),
            mode: GameMode::Daily,
            category: None,
        };
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json, serde_json::json!({"word": "HOUSE", "mode": "daily"}));
    }
}
