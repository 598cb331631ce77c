//! Validate command
//!
//! Reports how the corpus treats each word: guessable, answer candidate, rank.

use crate::core::Word;
use crate::corpus::WordCorpus;
use crate::corpus::filters::{has_problematic_pattern, meets_vowel_requirement};

/// How the corpus sees one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub input: String,
    /// `None` when the input is not a 5-letter word at all
    pub word: Option<Word>,
    pub valid_guess: bool,
    pub answer_candidate: bool,
    pub vowel_ok: bool,
    pub problematic: bool,
    pub frequency: Option<u32>,
}

/// Check every input word against the corpus
#[must_use]
pub fn validate_words(inputs: &[String], corpus: &WordCorpus) -> Vec<ValidationReport> {
    inputs
        .iter()
        .map(|input| {
            let word = Word::new(input.trim()).ok();
            ValidationReport {
                input: input.clone(),
                word,
                valid_guess: corpus.is_valid_guess(input),
                answer_candidate: word.is_some_and(|w| corpus.is_answer_candidate(&w)),
                vowel_ok: word.is_some_and(|w| meets_vowel_requirement(&w)),
                problematic: word.is_some_and(|w| has_problematic_pattern(&w)),
                frequency: word.map(|w| corpus.frequency_of(&w)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_each_input() {
        let corpus = WordCorpus::embedded();
        let inputs = vec!["house".to_string(), "audio".to_string(), "xx".to_string()];
        let reports = validate_words(&inputs, &corpus);

        assert_eq!(reports.len(), 3);
        assert!(reports[0].valid_guess);
        assert!(reports[0].answer_candidate);

        assert!(reports[1].valid_guess);
        assert!(reports[1].problematic);
        assert!(!reports[1].answer_candidate);

        assert_eq!(reports[2].word, None);
        assert!(!reports[2].valid_guess);
        assert_eq!(reports[2].frequency, None);
    }
}
