//! Themed word pools for category games
//!
//! Pools come from the built-in lists or from a directory of `<category>.txt`
//! files that override them. Loaded pools are kept in a [`TtlCache`] and reloaded
//! once stale, so edits to the files are picked up without a restart.

use super::cache::TtlCache;
use super::loader::load_from_file;
use crate::core::Word;
use crate::corpus::WordCorpus;
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Category used when a requested name is unknown
pub const DEFAULT_CATEGORY: &str = "nature";

/// Built-in category pools
pub const BUILT_IN_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "nature",
        &[
            "OCEAN", "RIVER", "BEACH", "FIELD", "PLANT", "STONE", "CLOUD", "STORM", "WOODS",
            "GRASS", "WATER", "EARTH", "WINDS", "WAVES", "BLOOM", "FRESH", "SUNNY",
        ],
    ),
    (
        "emotions",
        &[
            "HAPPY", "BRAVE", "PROUD", "LOVED", "EAGER", "MERRY", "SWEET", "SMILE", "PEACE",
            "GRACE", "CHARM", "TRUST", "PRIDE", "DREAM", "HOPES", "BLISS", "CHEER",
        ],
    ),
    (
        "actions",
        &[
            "DANCE", "CLIMB", "WRITE", "PAINT", "BUILD", "LEARN", "TEACH", "LAUGH", "REACH",
            "SWIFT", "SPEED", "FLASH", "SPARK", "SHINE", "GLIDE", "DRIFT", "FLOAT",
        ],
    ),
    (
        "colors",
        &[
            "GREEN", "WHITE", "BLACK", "CORAL", "AMBER", "ROUGE", "IVORY", "AZURE", "EBONY",
            "LIGHT", "SHADE",
        ],
    ),
    (
        "tech",
        &[
            "CYBER", "PIXEL", "BYTES", "NODES", "VIRAL", "CLOUD", "SMART", "CODED", "LINKS",
            "FEEDS", "TREND", "BLEND", "MERGE",
        ],
    ),
    (
        "fantasy",
        &[
            "MAGIC", "SPELL", "CHARM", "FAIRY", "QUEST", "REALM", "MYTHS", "ROYAL", "CROWN",
            "VALOR", "HONOR", "GLORY",
        ],
    ),
    (
        "objects",
        &[
            "CHAIR", "TABLE", "BOOKS", "PHONE", "WATCH", "LIGHT", "MUSIC", "GLASS", "PAPER",
            "TOOLS",
        ],
    ),
];

/// Built-in words for a category name (case-insensitive)
#[must_use]
pub fn built_in_words(name: &str) -> Option<&'static [&'static str]> {
    BUILT_IN_CATEGORIES
        .iter()
        .find(|(category, _)| category.eq_ignore_ascii_case(name))
        .map(|(_, words)| *words)
}

/// Where category pools are read from
#[derive(Debug, Clone)]
pub enum CategorySource {
    BuiltIn,
    /// `<dir>/<category>.txt`, falling back to the built-in list when missing
    Directory(PathBuf),
}

/// Freshness report for one cached category
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCacheStats {
    pub category: String,
    pub word_count: usize,
    pub last_updated: DateTime<Utc>,
    pub is_valid: bool,
}

/// Loads, filters and caches category pools
#[derive(Debug, Clone)]
pub struct CategoryLibrary {
    source: CategorySource,
    cache: TtlCache<String, Vec<Word>>,
}

impl CategoryLibrary {
    #[must_use]
    pub fn new(source: CategorySource, ttl: TimeDelta) -> Self {
        Self {
            source,
            cache: TtlCache::new(ttl),
        }
    }

    #[must_use]
    pub fn built_in(ttl: TimeDelta) -> Self {
        Self::new(CategorySource::BuiltIn, ttl)
    }

    /// Names of the available categories
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = BUILT_IN_CATEGORIES
            .iter()
            .map(|(name, _)| (*name).to_string())
            .collect();

        if let CategorySource::Directory(dir) = &self.source
            && let Ok(entries) = std::fs::read_dir(dir)
        {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "txt")
                    && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                {
                    let stem = stem.to_lowercase();
                    if !names.contains(&stem) {
                        names.push(stem);
                    }
                }
            }
        }

        names
    }

    /// Canonical category name, or the default category when unknown
    #[must_use]
    pub fn resolve(&self, name: &str) -> String {
        let lower = name.trim().to_lowercase();
        if self.names().contains(&lower) {
            lower
        } else {
            log::warn!("Unknown category '{name}', using {DEFAULT_CATEGORY}");
            DEFAULT_CATEGORY.to_string()
        }
    }

    /// Pool for `name`, loading it when missing or stale
    pub fn pool(&mut self, name: &str, corpus: &WordCorpus, now: DateTime<Utc>) -> &[Word] {
        let key = self.resolve(name);
        if !self.cache.is_fresh(&key, now) {
            let words = self.load(&key, corpus);
            self.cache.insert(key.clone(), words, now);
        }
        self.cache.get_fresh(&key, now).map_or(&[], Vec::as_slice)
    }

    /// Reload `name` regardless of freshness
    pub fn refresh(&mut self, name: &str, corpus: &WordCorpus, now: DateTime<Utc>) -> usize {
        let key = self.resolve(name);
        let words = self.load(&key, corpus);
        let count = words.len();
        self.cache.insert(key, words, now);
        count
    }

    /// Per-category cache report
    #[must_use]
    pub fn cache_stats(&self, now: DateTime<Utc>) -> Vec<CategoryCacheStats> {
        let mut stats: Vec<_> = self
            .cache
            .iter()
            .map(|(category, entry)| CategoryCacheStats {
                category: category.clone(),
                word_count: entry.value.len(),
                last_updated: entry.inserted_at,
                is_valid: entry.is_fresh(now, self.cache.ttl()),
            })
            .collect();
        stats.sort_by(|a, b| a.category.cmp(&b.category));
        stats
    }

    fn load(&self, category: &str, corpus: &WordCorpus) -> Vec<Word> {
        let words = match &self.source {
            CategorySource::Directory(dir) => {
                let path = dir.join(format!("{category}.txt"));
                let playable = match load_from_file(&path) {
                    Ok(words) => Self::playable(category, words, corpus),
                    Err(e) => {
                        log::warn!("Could not read {}: {e}", path.display());
                        Vec::new()
                    }
                };
                if playable.is_empty() {
                    log::warn!("No playable words in {}, using built-in words", path.display());
                    Self::playable(category, Self::built_in_pool(category), corpus)
                } else {
                    playable
                }
            }
            CategorySource::BuiltIn => {
                Self::playable(category, Self::built_in_pool(category), corpus)
            }
        };

        log::debug!("Loaded category '{category}' with {} words", words.len());
        words
    }

    /// Deduplicated words a player could actually type in
    fn playable(category: &str, raw: Vec<Word>, corpus: &WordCorpus) -> Vec<Word> {
        let mut words: Vec<Word> = Vec::with_capacity(raw.len());
        for word in raw {
            if !corpus.accepts_guess(&word) {
                log::warn!("Dropping '{word}' from category '{category}': not a valid guess");
                continue;
            }
            if !words.contains(&word) {
                words.push(word);
            }
        }
        words
    }

    fn built_in_pool(category: &str) -> Vec<Word> {
        let words = built_in_words(category)
            .or_else(|| built_in_words(DEFAULT_CATEGORY))
            .unwrap_or_default();
        super::loader::words_from_slice(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn corpus() -> WordCorpus {
        WordCorpus::embedded()
    }

    #[test]
    fn built_in_categories_are_five_letters() {
        for (name, words) in BUILT_IN_CATEGORIES {
            for word in *words {
                assert!(Word::new(word).is_ok(), "{name}: {word}");
            }
        }
    }

    #[test]
    fn built_in_words_is_case_insensitive() {
        assert!(built_in_words("TECH").is_some());
        assert!(built_in_words("sports").is_none());
    }

    #[test]
    fn unknown_category_falls_back_to_default() {
        let library = CategoryLibrary::built_in(TimeDelta::hours(24));
        assert_eq!(library.resolve("sports"), DEFAULT_CATEGORY);
        assert_eq!(library.resolve(" Fantasy "), "fantasy");
    }

    #[test]
    fn pool_is_cached_until_stale() {
        let corpus = corpus();
        let mut library = CategoryLibrary::built_in(TimeDelta::hours(24));

        let size = library.pool("tech", &corpus, now()).len();
        assert_eq!(size, 13);

        let stats = library.cache_stats(now() + TimeDelta::hours(25));
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].category, "tech");
        assert!(!stats[0].is_valid);

        // Asking again after expiry reloads and refreshes the timestamp
        let later = now() + TimeDelta::hours(25);
        library.pool("tech", &corpus, later);
        assert!(library.cache_stats(later)[0].is_valid);
    }

    #[test]
    fn pool_skips_blocklisted_words() {
        let corpus = corpus().with_blocklist(words_from_slice(&["PIXEL"]));
        let mut library = CategoryLibrary::built_in(TimeDelta::hours(1));

        let pool = library.pool("tech", &corpus, now());
        assert!(!pool.contains(&Word::new("pixel").unwrap()));
        assert_eq!(pool.len(), 12);
    }

    #[test]
    fn directory_source_overrides_and_falls_back() {
        let dir = std::env::temp_dir().join("wordpop_category_dir");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("tech.txt"), "robot\nlaser\n").unwrap();
        std::fs::write(dir.join("sports.txt"), "pitch\nscore\ncatch\n").unwrap();

        let corpus = corpus();
        let source = CategorySource::Directory(dir.clone());
        let mut library = CategoryLibrary::new(source, TimeDelta::hours(1));

        assert_eq!(library.pool("tech", &corpus, now()).len(), 2);
        assert_eq!(library.pool("sports", &corpus, now()).len(), 3);
        // No file for colors: built-in list
        assert_eq!(library.pool("colors", &corpus, now()).len(), 11);
        assert!(library.names().contains(&"sports".to_string()));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn directory_words_must_be_guessable() {
        let dir = std::env::temp_dir().join("wordpop_category_unguessable");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("tech.txt"), "robot\nqwzxk\nlaser\nrobot\n").unwrap();

        let corpus = corpus();
        let source = CategorySource::Directory(dir.clone());
        let mut library = CategoryLibrary::new(source, TimeDelta::hours(1));

        let pool = library.pool("tech", &corpus, now()).to_vec();
        let texts: Vec<_> = pool.iter().map(Word::text).collect();
        assert_eq!(texts, ["ROBOT", "LASER"]);
        assert!(pool.iter().all(|w| corpus.accepts_guess(w)));

        // A file with nothing playable falls back to the built-in list
        std::fs::write(dir.join("tech.txt"), "qwzxk\nzzzzq\n").unwrap();
        assert_eq!(library.refresh("tech", &corpus, now()), 13);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn refresh_reloads_immediately() {
        let corpus = corpus();
        let mut library = CategoryLibrary::built_in(TimeDelta::hours(1));
        assert_eq!(library.refresh("objects", &corpus, now()), 10);
        assert_eq!(library.cache_stats(now())[0].word_count, 10);
    }
}
