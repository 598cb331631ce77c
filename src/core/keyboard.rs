//! Keyboard hint aggregation
//!
//! Folds every guess of a session into the best verdict known for each letter.
//! A letter only ever moves up: unknown → Absent → Present → Correct.

use super::feedback::{GuessRecord, Verdict};
use serde::Serialize;

const ALPHABET_SIZE: usize = 26;

/// Best-known verdict per letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: [Option<Verdict>; ALPHABET_SIZE],
}

fn slot(letter: u8) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| usize::from(upper - b'A'))
}

impl KeyboardState {
    /// Replay a full guess history
    ///
    /// # Examples
    /// ```
    /// use wordpop::core::{GuessRecord, KeyboardState, Verdict, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let history = [
    ///     GuessRecord::evaluate(Word::new("slate").unwrap(), &target),
    ///     GuessRecord::evaluate(Word::new("crane").unwrap(), &target),
    /// ];
    /// let keyboard = KeyboardState::fold(&history);
    ///
    /// assert_eq!(keyboard.get('S'), Some(Verdict::Absent));
    /// assert_eq!(keyboard.get('C'), Some(Verdict::Correct));
    /// assert_eq!(keyboard.get('Q'), None);
    /// ```
    #[must_use]
    pub fn fold(history: &[GuessRecord]) -> Self {
        let mut state = Self::default();
        for record in history {
            state.record(record);
        }
        state
    }

    /// Fold one more guess into the state
    pub fn record(&mut self, record: &GuessRecord) {
        for (letter, verdict) in record.tiles() {
            if let Some(i) = slot(letter) {
                self.keys[i] = self.keys[i].max(Some(verdict));
            }
        }
    }

    /// Best verdict seen for `letter`, or `None` if it was never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Verdict> {
        u8::try_from(letter)
            .ok()
            .and_then(slot)
            .and_then(|i| self.keys[i])
    }

    /// Letters with a known verdict, alphabetically
    pub fn known(&self) -> impl Iterator<Item = (char, Verdict)> + '_ {
        self.keys
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| ((b'A' + i as u8) as char, v)))
    }

    /// True when no letter of `self` is ranked below the same letter in `earlier`
    #[must_use]
    pub fn dominates(&self, earlier: &Self) -> bool {
        self.keys
            .iter()
            .zip(earlier.keys.iter())
            .all(|(now, before)| now >= before)
    }
}

impl Serialize for KeyboardState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let known: Vec<_> = self.known().collect();
        let mut map = serializer.serialize_map(Some(known.len()))?;
        for (letter, verdict) in known {
            map.serialize_entry(&letter, &verdict)?;
        }
        map.end()
    }
}
