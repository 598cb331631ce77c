//! Date-keyed deterministic selection
//!
//! Every player who asks on the same UTC day gets the same index. The index comes
//! from a 32-bit polynomial string hash of the `YYYY-MM-DD` key, so the choice is
//! stable across runs, machines and implementations that use the same hash.

use chrono::{DateTime, NaiveDate, Utc};

/// 32-bit polynomial hash: `hash = hash * 31 + code_unit`, wrapping
///
/// Code units are UTF-16, so non-ASCII keys hash the same way a browser would.
#[must_use]
pub fn string_hash(key: &str) -> i32 {
    key.encode_utf16().fold(0i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    })
}

/// `|hash| mod pool_size`, computed in 64 bits so `i32::MIN` is safe
fn fold_index(hash: i32, pool_size: usize) -> usize {
    let magnitude = i64::from(hash).unsigned_abs();
    (magnitude % pool_size as u64) as usize
}

/// Deterministic index into a pool of `pool_size` words
///
/// Returns `None` for an empty pool.
///
/// # Examples
/// ```
/// use wordpop::selection::daily_index;
///
/// assert_eq!(daily_index("2024-01-15", 240), Some(237));
/// assert_eq!(daily_index("2024-01-15", 0), None);
/// ```
#[must_use]
pub fn daily_index(date_key: &str, pool_size: usize) -> Option<usize> {
    (pool_size > 0).then(|| fold_index(string_hash(date_key), pool_size))
}

/// `YYYY-MM-DD`, zero-padded
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Date key for the UTC day containing `now`
#[must_use]
pub fn today_key(now: DateTime<Utc>) -> String {
    date_key(now.date_naive())
}

/// Date key with a suffix, for selections that must differ from the plain key
#[must_use]
pub fn dated_key(date: NaiveDate, suffix: &str) -> String {
    format!("{}-{suffix}", date_key(date))
}
