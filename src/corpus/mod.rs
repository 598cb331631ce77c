//! Word corpus: answers, valid guesses and moderation lists
//!
//! The corpus answers two questions: may a player guess this word, and may it be
//! chosen as a target. Allowlisted words always pass, blocklisted words never do
//! (unless also allowlisted), and everything else falls back to list membership
//! plus, for answers, the structural filters in [`filters`].

pub mod filters;
pub mod settings;

pub use settings::FilterSettings;

use crate::core::Word;
use crate::wordlists::loader::{load_frequency_file, load_from_file, words_from_slice};
use crate::wordlists::{ALLOWED, ANSWERS, CHALLENGE};
use rustc_hash::{FxHashMap, FxHashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Rank given to words missing from the frequency table (fully common)
pub const DEFAULT_FREQUENCY_RANK: u32 = 10;

/// Errors raised while assembling a corpus
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid filter settings: {0}")]
    Settings(#[from] serde_json::Error),
    #[error("the {0} pool is empty")]
    EmptyPool(&'static str),
}

/// All word lists used by one game host
#[derive(Debug, Clone, Default)]
pub struct WordCorpus {
    answers: Vec<Word>,
    answer_set: FxHashSet<Word>,
    challenge: Vec<Word>,
    guesses: FxHashSet<Word>,
    blocklist: FxHashSet<Word>,
    allowlist: FxHashSet<Word>,
    frequency: FxHashMap<Word, u32>,
    require_vowel: bool,
    min_frequency: u32,
}

impl WordCorpus {
    /// Build a corpus from answers and extra guesses
    ///
    /// Answers are always valid guesses, so they are merged into the guess set.
    #[must_use]
    pub fn new(
        answers: impl IntoIterator<Item = Word>,
        guesses: impl IntoIterator<Item = Word>,
    ) -> Self {
        let mut corpus = Self {
            require_vowel: true,
            ..Self::default()
        };
        corpus.merge_guesses(guesses);
        corpus.merge_answers(answers);
        corpus
    }

    /// Corpus built from the lists compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use wordpop::corpus::WordCorpus;
    ///
    /// let corpus = WordCorpus::embedded();
    /// assert!(corpus.is_valid_guess("house"));
    /// assert!(!corpus.is_valid_guess("xxxxx"));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
            .with_challenge(words_from_slice(CHALLENGE))
    }

    #[must_use]
    pub fn with_challenge(mut self, words: impl IntoIterator<Item = Word>) -> Self {
        let words: Vec<Word> = words.into_iter().collect();
        self.merge_guesses(words.iter().copied());
        for word in words {
            if !self.challenge.contains(&word) {
                self.challenge.push(word);
            }
        }
        self
    }

    #[must_use]
    pub fn with_blocklist(mut self, words: impl IntoIterator<Item = Word>) -> Self {
        self.blocklist.extend(words);
        self
    }

    #[must_use]
    pub fn with_allowlist(mut self, words: impl IntoIterator<Item = Word>) -> Self {
        self.allowlist.extend(words);
        self
    }

    #[must_use]
    pub fn with_frequency(mut self, table: FxHashMap<Word, u32>) -> Self {
        self.frequency = table;
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: &FilterSettings) -> Self {
        self.apply_settings(settings);
        self
    }

    /// Replace moderation lists and answer rules with `settings`
    ///
    /// Entries that are not valid 5-letter words are skipped.
    pub fn apply_settings(&mut self, settings: &FilterSettings) {
        self.blocklist = parse_list(&settings.blocklist, "blocklist");
        self.allowlist = parse_list(&settings.allowlist, "allowlist");
        self.require_vowel = settings.require_vowel;
        self.min_frequency = settings.effective_threshold();
    }

    /// Whether a raw player input may be guessed
    ///
    /// Input is trimmed and uppercased first; anything that is not five ASCII
    /// letters is rejected.
    #[must_use]
    pub fn is_valid_guess(&self, text: &str) -> bool {
        Word::new(text.trim()).is_ok_and(|word| self.accepts_guess(&word))
    }

    /// Whether a normalized word may be guessed
    #[must_use]
    pub fn accepts_guess(&self, word: &Word) -> bool {
        if self.allowlist.contains(word) {
            return true;
        }
        if self.blocklist.contains(word) {
            return false;
        }
        self.guesses.contains(word)
    }

    /// Blocklisted and not rescued by the allowlist
    #[must_use]
    pub fn is_excluded(&self, word: &Word) -> bool {
        self.blocklist.contains(word) && !self.allowlist.contains(word)
    }

    /// Whether `word` may be chosen as a target
    #[must_use]
    pub fn is_answer_candidate(&self, word: &Word) -> bool {
        if self.allowlist.contains(word) {
            return true;
        }
        if self.blocklist.contains(word) || !self.answer_set.contains(word) {
            return false;
        }
        (!self.require_vowel || filters::meets_vowel_requirement(word))
            && !filters::has_problematic_pattern(word)
    }

    /// Frequency rank of `word`, defaulting to [`DEFAULT_FREQUENCY_RANK`]
    #[must_use]
    pub fn frequency_of(&self, word: &Word) -> u32 {
        self.frequency
            .get(word)
            .copied()
            .unwrap_or(DEFAULT_FREQUENCY_RANK)
    }

    /// Answer candidates at or above `threshold`, plus the allowlist
    ///
    /// Answer-list order first, then allowlist entries not already included,
    /// sorted.
    #[must_use]
    pub fn filtered_answers(&self, threshold: u32) -> Vec<Word> {
        let mut pool: Vec<Word> = self
            .answers
            .iter()
            .filter(|w| self.is_answer_candidate(w) && self.frequency_of(w) >= threshold)
            .copied()
            .collect();

        let seen: FxHashSet<Word> = pool.iter().copied().collect();
        let mut extra: Vec<Word> = self
            .allowlist
            .iter()
            .filter(|w| !seen.contains(*w))
            .copied()
            .collect();
        extra.sort_unstable();
        pool.extend(extra);
        pool
    }

    /// Answers under the current settings' frequency threshold
    #[must_use]
    pub fn answer_pool(&self) -> Vec<Word> {
        self.filtered_answers(self.min_frequency)
    }

    /// Daily-challenge words that are not excluded
    #[must_use]
    pub fn challenge_pool(&self) -> Vec<Word> {
        self.challenge
            .iter()
            .filter(|w| !self.is_excluded(w))
            .copied()
            .collect()
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    /// Add words to the guess set, returning how many were new
    pub fn merge_guesses(&mut self, words: impl IntoIterator<Item = Word>) -> usize {
        let before = self.guesses.len();
        self.guesses.extend(words);
        self.guesses.len() - before
    }

    /// Add words to the answer list (and guess set), returning how many were new
    pub fn merge_answers(&mut self, words: impl IntoIterator<Item = Word>) -> usize {
        let mut added = 0;
        for word in words {
            self.guesses.insert(word);
            if self.answer_set.insert(word) {
                self.answers.push(word);
                added += 1;
            }
        }
        added
    }
}

fn parse_list(entries: &[String], name: &str) -> FxHashSet<Word> {
    entries
        .iter()
        .filter_map(|entry| match Word::new(entry.trim()) {
            Ok(word) => Some(word),
            Err(e) => {
                log::warn!("Skipping {name} entry '{entry}': {e}");
                None
            }
        })
        .collect()
}

/// Base guess list selection for the `--wordlist` flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Wordlist {
    /// Every allowed word is a valid guess
    #[default]
    All,
    /// Only answers may be guessed
    AnswersOnly,
    /// Guesses come from a file
    File(PathBuf),
}

impl FromStr for Wordlist {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "all" => Self::All,
            "answers" => Self::AnswersOnly,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

/// Files a host assembles its corpus from
#[derive(Debug, Clone, Default)]
pub struct CorpusSources {
    pub wordlist: Wordlist,
    pub custom_words: Option<PathBuf>,
    pub frequency: Option<PathBuf>,
    pub settings: Option<PathBuf>,
}

impl CorpusSources {
    /// Assemble the corpus
    ///
    /// # Errors
    ///
    /// Returns `CorpusError` if a named file cannot be read, the settings are
    /// malformed, or the resulting answer pool is empty.
    pub fn load(&self) -> Result<WordCorpus, CorpusError> {
        let answers = words_from_slice(ANSWERS);
        let guesses = match &self.wordlist {
            Wordlist::All => words_from_slice(ALLOWED),
            Wordlist::AnswersOnly => answers.clone(),
            Wordlist::File(path) => read_words(path)?,
        };

        let mut corpus =
            WordCorpus::new(answers, guesses).with_challenge(words_from_slice(CHALLENGE));

        if let Some(path) = &self.custom_words {
            let added = corpus.merge_answers(read_words(path)?);
            log::info!("Merged {added} custom answers");
        }

        if let Some(path) = &self.frequency {
            let table = load_frequency_file(path).map_err(|source| CorpusError::Io {
                path: path.clone(),
                source,
            })?;
            corpus = corpus.with_frequency(table);
        }

        let settings = match &self.settings {
            Some(path) => FilterSettings::load(path)?,
            None => FilterSettings::default(),
        };
        corpus.apply_settings(&settings);

        if corpus.answer_pool().is_empty() {
            return Err(CorpusError::EmptyPool("answer"));
        }

        log::info!(
            "Corpus ready: {} answers, {} guesses",
            corpus.answers().len(),
            corpus.guess_count()
        );
        Ok(corpus)
    }
}

fn read_words(path: &Path) -> Result<Vec<Word>, CorpusError> {
    load_from_file(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })
}
