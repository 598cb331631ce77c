//! Word list loading utilities
//!
//! Reads newline-delimited word files and frequency files with one `WORD,RANK`
//! or `WORD RANK` pair per line. Invalid lines are logged and skipped, never
//! fatal: custom lists are hand-edited.

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Parse newline-delimited words, skipping blanks, comments and invalid entries
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                log::warn!("Skipping word list line '{line}': {e}");
                None
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordpop::wordlists::loader::load_from_file;
///
/// let words = load_from_file("custom_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path.as_ref())?;
    let words = parse_words(&content);
    log::info!(
        "Loaded {} words from {}",
        words.len(),
        path.as_ref().display()
    );
    Ok(words)
}

/// Parse a frequency table with one `WORD,RANK` or `WORD RANK` pair per line
///
/// Lines whose word or rank does not parse are logged and skipped.
#[must_use]
pub fn parse_frequency(content: &str) -> FxHashMap<Word, u32> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let pair = frequency_pair(line);
            if pair.is_none() {
                log::warn!("Skipping frequency line '{line}'");
            }
            pair
        })
        .collect()
}

fn frequency_pair(line: &str) -> Option<(Word, u32)> {
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let word = Word::new(parts.next()?).ok()?;
    let rank = parts.next()?.parse().ok()?;
    Some((word, rank))
}

/// Load a frequency table from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_frequency_file<P: AsRef<Path>>(path: P) -> io::Result<FxHashMap<Word, u32>> {
    let content = fs::read_to_string(path.as_ref())?;
    let table = parse_frequency(&content);
    log::info!(
        "Loaded {} frequency ranks from {}",
        table.len(),
        path.as_ref().display()
    );
    Ok(table)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordpop::wordlists::loader::words_from_slice;
/// use wordpop::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
