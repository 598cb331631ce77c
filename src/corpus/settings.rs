//! Word filter settings
//!
//! Read from a JSON file with camelCase keys, for example:
//!
//! ```json
//! {
//!   "blocklist": ["SLURS"],
//!   "allowlist": ["NYMPH"],
//!   "minAnswerFrequency": 6,
//!   "useFrequencyFilter": true,
//!   "requireVowel": true
//! }
//! ```
//!
//! Missing keys take their defaults.

use super::CorpusError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Words that break the structural rules but make fine answers
pub const DEFAULT_ALLOWLIST: &[&str] = &[
    "NYMPH", "GYPSY", "LYMPH", "PSYCH", "STYLE", "TYPAL", "SYLPH",
];

/// Default minimum frequency rank for answers
pub const DEFAULT_MIN_ANSWER_FREQUENCY: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSettings {
    pub blocklist: Vec<String>,
    pub allowlist: Vec<String>,
    pub min_answer_frequency: u32,
    pub use_frequency_filter: bool,
    pub require_vowel: bool,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            blocklist: Vec::new(),
            allowlist: DEFAULT_ALLOWLIST.iter().map(|w| (*w).to_string()).collect(),
            min_answer_frequency: DEFAULT_MIN_ANSWER_FREQUENCY,
            use_frequency_filter: true,
            require_vowel: true,
        }
    }
}

impl FilterSettings {
    /// Parse settings from JSON text
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Settings` if the JSON is malformed.
    ///
    /// # Examples
    /// ```
    /// use wordpop::corpus::FilterSettings;
    ///
    /// let settings = FilterSettings::from_json(r#"{"blocklist": ["crane"]}"#).unwrap();
    /// assert_eq!(settings.blocklist, ["crane"]);
    /// assert_eq!(settings.min_answer_frequency, 6);
    /// ```
    pub fn from_json(text: &str) -> Result<Self, CorpusError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load settings from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Io` if the file cannot be read, or
    /// `CorpusError::Settings` if it is not valid settings JSON.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&text)?;
        log::info!(
            "Loaded filter settings from {} ({} blocked, {} allowed)",
            path.display(),
            settings.blocklist.len(),
            settings.allowlist.len()
        );
        Ok(settings)
    }

    /// Frequency threshold in effect, or 0 when the filter is off
    #[must_use]
    pub const fn effective_threshold(&self) -> u32 {
        if self.use_frequency_filter {
            self.min_answer_frequency
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_allowlist() {
        let settings = FilterSettings::default();
        assert_eq!(settings.allowlist.len(), DEFAULT_ALLOWLIST.len());
        assert!(settings.blocklist.is_empty());
        assert!(settings.require_vowel);
        assert_eq!(settings.effective_threshold(), 6);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings =
            FilterSettings::from_json(r#"{"minAnswerFrequency": 3, "useFrequencyFilter": false}"#)
                .unwrap();
        assert_eq!(settings.min_answer_frequency, 3);
        assert_eq!(settings.effective_threshold(), 0);
        assert_eq!(settings.allowlist.len(), DEFAULT_ALLOWLIST.len());
    }

    #[test]
    fn malformed_json_is_error() {
        assert!(matches!(
            FilterSettings::from_json("{not json"),
            Err(CorpusError::Settings(_))
        ));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(FilterSettings::default()).unwrap();
        assert_eq!(json["minAnswerFrequency"], 6);
        assert_eq!(json["requireVowel"], true);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("wordpop_missing_settings.json");
        let _ = fs::remove_file(&path);
        assert!(matches!(
            FilterSettings::load(&path),
            Err(CorpusError::Io { .. })
        ));
    }
}
