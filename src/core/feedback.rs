//! Guess evaluation and per-position feedback
//!
//! Each position of a guess receives one verdict:
//! - `Absent`  = letter not in the target (or all its occurrences already used)
//! - `Present` = letter in the target, wrong position
//! - `Correct` = letter in the correct position
//!
//! Duplicate letters follow the reference game exactly: a letter never earns more
//! `Correct`/`Present` marks than it has occurrences in the target, exact matches
//! are claimed first, and the remaining occurrences go to the leftmost guesses.

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Verdict for a single board position
///
/// Ordered by how much it reveals: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Single-character code used in text feedback (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Colored square used in share strings
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// The five verdicts produced by one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    /// Create feedback from explicit verdicts
    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// Evaluate `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches `Correct` and remove them from the target's letter pool
    /// 2. Second pass, left to right: mark `Present` while the pool still holds the letter
    /// 3. Everything else is `Absent`
    ///
    /// # Examples
    /// ```
    /// use wordpop::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("sassy").unwrap();
    /// let target = Word::new("soaps").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// // Only two S's in SOAPS: one Correct, one Present, the third S is Absent
    /// assert_eq!(feedback.to_string(), "GYY--");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        let mut available = target.letter_counts();

        // First pass: exact position matches
        for (i, verdict) in verdicts.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if letter == target.letter_at(i) {
                *verdict = Verdict::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but an unclaimed occurrence remains
        for (i, verdict) in verdicts.iter_mut().enumerate() {
            if *verdict == Verdict::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                *verdict = Verdict::Present;
                *count -= 1;
            }
        }

        Self(verdicts)
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// The verdicts in board order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Count positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        let mut chars = s.chars();

        for slot in &mut verdicts {
            *slot = match chars.next()? {
                'G' | 'g' | '🟩' => Verdict::Correct,
                'Y' | 'y' | '🟨' => Verdict::Present,
                '-' | '_' | '⬜' => Verdict::Absent,
                _ => return None,
            };
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(verdicts))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl Index<usize> for Feedback {
    type Output = Verdict;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            write!(f, "{}", verdict.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

/// One submitted guess together with its evaluation
///
/// Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    word: Word,
    feedback: Feedback,
}

impl GuessRecord {
    /// Evaluate `guess` against `target` and keep both
    #[must_use]
    pub fn evaluate(guess: Word, target: &Word) -> Self {
        Self {
            word: guess,
            feedback: Feedback::evaluate(&guess, target),
        }
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Letters paired with their verdicts, in board order
    pub fn tiles(&self) -> impl Iterator<Item = (u8, Verdict)> + '_ {
        self.word
            .letters()
            .iter()
            .copied()
            .zip(self.feedback.verdicts().iter().copied())
    }
}
