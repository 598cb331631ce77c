//! One game from first guess to win or loss
//!
//! A `Session` owns the target, the guess history and the keyboard state. It is
//! a small state machine:
//!
//! ```text
//! Playing --correct guess--------> Won
//! Playing --sixth wrong guess----> Lost(OutOfAttempts)
//! Playing --time_expire (timed)--> Lost(TimeExpired)
//! any     --reset----------------> Playing
//! ```
//!
//! The session never reads a clock. Callers pass `now` in, and for timed games
//! the host drives the countdown through [`Session::remaining_secs`] and
//! [`Session::time_expire`].

mod outcome;

pub use outcome::{GameResult, LossReason, ModeFlags, Outcome};

use crate::config::{MAX_ATTEMPTS, TIMED_LIMIT_SECS};
use crate::core::{GuessRecord, KeyboardState, Word, WordError};
use crate::corpus::WordCorpus;
use crate::scoring::ScoreLimits;
use chrono::{DateTime, Utc};

/// Why a guess was refused; the session is unchanged
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessRejection {
    #[error("Guess must be 5 letters long: {0}")]
    WrongLength(#[from] WordError),
    #[error("{0} is not in the word list")]
    NotInDictionary(Word),
    #[error("The game is already over")]
    GameOver,
}

/// Operation not allowed in the session's current state
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("Session is not timed")]
    NotTimed,
    #[error("Session has already finished")]
    AlreadyFinished,
}

/// What an accepted guess produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub record: GuessRecord,
    /// Present when this guess ended the game
    pub result: Option<GameResult>,
}

#[derive(Debug, Clone)]
pub struct Session {
    target: Word,
    history: Vec<GuessRecord>,
    keyboard: KeyboardState,
    started_at: DateTime<Utc>,
    modes: ModeFlags,
    outcome: Outcome,
    max_attempts: usize,
    timed_limit_secs: u64,
}

impl Session {
    /// Start a game against `target`
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use wordpop::core::Word;
    /// use wordpop::corpus::WordCorpus;
    /// use wordpop::session::{ModeFlags, Outcome, Session};
    ///
    /// let corpus = WordCorpus::embedded();
    /// let now = Utc::now();
    /// let mut session = Session::new(Word::new("crane").unwrap(), ModeFlags::default(), now);
    ///
    /// session.submit_guess(&corpus, "slate", now).unwrap();
    /// let turn = session.submit_guess(&corpus, "crane", now).unwrap();
    ///
    /// assert_eq!(session.outcome(), Outcome::Won { attempts: 2 });
    /// assert_eq!(turn.result.unwrap().points, 850);
    /// ```
    #[must_use]
    pub fn new(target: Word, modes: ModeFlags, now: DateTime<Utc>) -> Self {
        Self {
            target,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            keyboard: KeyboardState::default(),
            started_at: now,
            modes,
            outcome: Outcome::Playing,
            max_attempts: MAX_ATTEMPTS,
            timed_limit_secs: TIMED_LIMIT_SECS,
        }
    }

    /// Override the attempt count and timed-game length
    #[must_use]
    pub fn with_limits(mut self, max_attempts: usize, timed_limit_secs: u64) -> Self {
        self.max_attempts = max_attempts.max(1);
        self.timed_limit_secs = timed_limit_secs;
        self
    }

    /// Submit a raw guess
    ///
    /// # Errors
    ///
    /// Returns a `GuessRejection` and leaves the session untouched if the game
    /// is over, the input is not five letters, or the word is not a valid guess.
    pub fn submit_guess(
        &mut self,
        corpus: &WordCorpus,
        candidate: &str,
        now: DateTime<Utc>,
    ) -> Result<Turn, GuessRejection> {
        if self.outcome.is_terminal() {
            return Err(GuessRejection::GameOver);
        }

        let guess = Word::new(candidate.trim())?;
        if !corpus.accepts_guess(&guess) {
            return Err(GuessRejection::NotInDictionary(guess));
        }

        let record = GuessRecord::evaluate(guess, &self.target);
        log::debug!("{guess} -> {}", record.feedback());
        self.keyboard.record(&record);
        self.history.push(record);

        let attempts = self.history.len();
        if guess == self.target {
            self.outcome = Outcome::Won { attempts };
        } else if attempts >= self.max_attempts {
            self.outcome = Outcome::Lost {
                reason: LossReason::OutOfAttempts,
            };
        }

        let result = self.outcome.is_terminal().then(|| self.result(now));
        if let Some(result) = &result {
            log::info!(
                "Game over: {} in {} attempts, {} points",
                if result.is_win { "won" } else { "lost" },
                result.attempts,
                result.points
            );
        }

        Ok(Turn { record, result })
    }

    /// End a timed game whose clock ran out
    ///
    /// # Errors
    ///
    /// Returns `StateError::NotTimed` for untimed sessions and
    /// `StateError::AlreadyFinished` once the game is over. Neither changes state.
    pub fn time_expire(&mut self, now: DateTime<Utc>) -> Result<GameResult, StateError> {
        if !self.modes.timed {
            return Err(StateError::NotTimed);
        }
        if self.outcome.is_terminal() {
            return Err(StateError::AlreadyFinished);
        }

        self.outcome = Outcome::Lost {
            reason: LossReason::TimeExpired,
        };
        log::info!("Time expired after {} guesses", self.history.len());
        Ok(self.result(now))
    }

    /// Start over against a new target, keeping the mode flags
    pub fn reset(&mut self, target: Word, now: DateTime<Utc>) {
        self.target = target;
        self.history.clear();
        self.keyboard = KeyboardState::default();
        self.started_at = now;
        self.outcome = Outcome::Playing;
    }

    /// Whole seconds since the session started
    #[must_use]
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u64 {
        u64::try_from(now.signed_duration_since(self.started_at).num_seconds()).unwrap_or(0)
    }

    /// Seconds left in a timed game, `None` when untimed
    #[must_use]
    pub fn remaining_secs(&self, now: DateTime<Utc>) -> Option<u64> {
        self.modes
            .timed
            .then(|| self.timed_limit_secs.saturating_sub(self.elapsed_secs(now)))
    }

    /// True when a timed game has used up its clock but is still playing
    #[must_use]
    pub fn is_time_up(&self, now: DateTime<Utc>) -> bool {
        !self.outcome.is_terminal() && self.remaining_secs(now) == Some(0)
    }

    /// Keyboard hints, withheld in blind mode until the game ends
    #[must_use]
    pub fn keyboard_hints(&self) -> Option<&KeyboardState> {
        (!self.modes.blind || self.outcome.is_terminal()).then_some(&self.keyboard)
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Row the next guess goes into
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn modes(&self) -> ModeFlags {
        self.modes
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Emoji grid of the guesses so far, one row per line
    #[must_use]
    pub fn share_grid(&self) -> String {
        self.history
            .iter()
            .map(|r| r.feedback().to_emoji())
            .collect::<Vec<_>>()
            .join("\n")
    }

    const fn score_limits(&self) -> ScoreLimits {
        ScoreLimits {
            max_attempts: self.max_attempts,
            time_limit_secs: self.timed_limit_secs,
        }
    }

    fn result(&self, now: DateTime<Utc>) -> GameResult {
        let is_win = matches!(self.outcome, Outcome::Won { .. });
        let attempts = self.history.len();
        let time_elapsed = self.elapsed_secs(now);
        GameResult {
            word: self.target,
            attempts,
            time_elapsed,
            points: self
                .score_limits()
                .points(is_win, attempts, time_elapsed, self.modes.timed),
            is_win,
            is_challenge_mode: self.modes.timed,
        }
    }
}
