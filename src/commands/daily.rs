//! Daily command
//!
//! Shows which word each daily pool yields for a date.

use crate::core::Word;
use crate::corpus::WordCorpus;
use crate::selection::{daily_index, date_key};
use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;

/// One pool's pick for the day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPick {
    pub pool: &'static str,
    pub index: usize,
    pub pool_size: usize,
    pub word: Word,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyReport {
    pub date_key: String,
    pub picks: Vec<DailyPick>,
}

/// Parse a `YYYY-MM-DD` argument
///
/// # Errors
///
/// Returns an error if the text is not a calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{text}', expected YYYY-MM-DD"))
}

/// Daily and daily-challenge picks for `date`
///
/// # Errors
///
/// Returns an error if either pool is empty.
pub fn daily_report(date: NaiveDate, corpus: &WordCorpus) -> Result<DailyReport> {
    let key = date_key(date);
    let pools = [
        ("daily", corpus.answer_pool()),
        ("daily-challenge", corpus.challenge_pool()),
    ];

    let picks = pools
        .into_iter()
        .map(|(pool, words)| {
            let index = daily_index(&key, words.len())
                .ok_or_else(|| anyhow!("The {pool} pool is empty"))?;
            Ok(DailyPick {
                pool,
                index,
                pool_size: words.len(),
                word: words[index],
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(DailyReport {
        date_key: key,
        picks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_deterministic() {
        let corpus = WordCorpus::embedded();
        let date = parse_date("2024-01-01").unwrap();
        let a = daily_report(date, &corpus).unwrap();
        let b = daily_report(date, &corpus).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.date_key, "2024-01-01");
        assert_eq!(a.picks.len(), 2);
        assert!(a.picks.iter().all(|p| p.index < p.pool_size));
    }

    #[test]
    fn bad_date_is_error() {
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("01/02/2024").is_err());
    }
}
