//! Game configuration
//!
//! Rules every session shares, plus host policy knobs that sit outside the core
//! engine.

use crate::core::Word;
use crate::session::{ModeFlags, Session};
use chrono::{DateTime, TimeDelta, Utc};

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Length of a timed game, in seconds
pub const TIMED_LIMIT_SECS: u64 = 180;

/// Host-level settings for running games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    pub timed_limit_secs: u64,
    /// How long a loaded category pool stays fresh
    pub category_ttl: TimeDelta,
    /// Points awarded for a loss; the scoring engine itself gives zero
    pub consolation_points: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            timed_limit_secs: TIMED_LIMIT_SECS,
            category_ttl: TimeDelta::hours(24),
            consolation_points: 0,
        }
    }
}

impl GameConfig {
    /// Start a session under these limits
    #[must_use]
    pub fn new_session(&self, target: Word, modes: ModeFlags, now: DateTime<Utc>) -> Session {
        Session::new(target, modes, now).with_limits(self.max_attempts, self.timed_limit_secs)
    }

    /// Points recorded for a finished game under this host's policy
    #[must_use]
    pub const fn recorded_points(&self, won: bool, engine_points: u32) -> u32 {
        if won {
            engine_points
        } else {
            self.consolation_points
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.timed_limit_secs, 180);
        assert_eq!(config.category_ttl, TimeDelta::hours(24));
        assert_eq!(config.consolation_points, 0);
    }

    #[test]
    fn consolation_applies_to_losses_only() {
        let config = GameConfig {
            consolation_points: 25,
            ..GameConfig::default()
        };
        assert_eq!(config.recorded_points(false, 0), 25);
        assert_eq!(config.recorded_points(true, 850), 850);
    }

    #[test]
    fn sessions_use_configured_limits() {
        let config = GameConfig {
            max_attempts: 4,
            timed_limit_secs: 60,
            ..GameConfig::default()
        };
        let now = Utc::now();
        let session = config.new_session(Word::new("house").unwrap(), ModeFlags::timed(), now);
        assert_eq!(session.max_attempts(), 4);
        assert_eq!(session.remaining_secs(now), Some(60));
    }
}
