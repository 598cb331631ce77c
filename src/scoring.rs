//! Points for a finished game
//!
//! Fewer attempts score more. Timed games get a 1.5x multiplier plus two points
//! for every second left on the clock.

use crate::config::{MAX_ATTEMPTS, TIMED_LIMIT_SECS};

/// Base points for a first-guess win
pub const MAX_BASE_POINTS: u32 = 1000;

/// Base points never drop below this
pub const MIN_BASE_POINTS: u32 = 100;

/// Points lost per extra attempt
pub const ATTEMPT_PENALTY: u32 = 150;

/// Bonus per second remaining in a timed game
pub const TIME_BONUS_PER_SEC: u32 = 2;

/// Attempt cap and clock length a game is scored against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreLimits {
    pub max_attempts: usize,
    pub time_limit_secs: u64,
}

impl ScoreLimits {
    /// Six attempts and a three-minute clock
    pub const STANDARD: Self = Self {
        max_attempts: MAX_ATTEMPTS,
        time_limit_secs: TIMED_LIMIT_SECS,
    };

    /// Base points for a win in `attempts` guesses
    ///
    /// `attempts` outside `1..=max_attempts` is clamped into range.
    #[must_use]
    pub fn base_points(&self, attempts: usize) -> u32 {
        let extra = attempts.clamp(1, self.max_attempts.max(1)) - 1;
        let penalty = u32::try_from(extra)
            .unwrap_or(u32::MAX)
            .saturating_mul(ATTEMPT_PENALTY);
        MAX_BASE_POINTS
            .saturating_sub(penalty)
            .max(MIN_BASE_POINTS)
    }

    /// Points for a win
    ///
    /// # Examples
    /// ```
    /// use wordpop::scoring::ScoreLimits;
    ///
    /// let sprint = ScoreLimits { max_attempts: 6, time_limit_secs: 60 };
    /// // 1000 * 1.5 + (60 - 20) * 2
    /// assert_eq!(sprint.score(1, 20, true), 1580);
    /// ```
    #[must_use]
    pub fn score(&self, attempts: usize, elapsed_secs: u64, timed: bool) -> u32 {
        let base = self.base_points(attempts);
        if !timed {
            return base;
        }

        // Base is a multiple of 50, so the 1.5x factor is exact
        let multiplied = base * 3 / 2;
        let remaining = self.time_limit_secs.saturating_sub(elapsed_secs);
        let bonus = u32::try_from(remaining)
            .unwrap_or(u32::MAX)
            .saturating_mul(TIME_BONUS_PER_SEC);
        multiplied.saturating_add(bonus)
    }

    /// [`Self::score`] on a win, zero on a loss
    #[must_use]
    pub fn points(&self, won: bool, attempts: usize, elapsed_secs: u64, timed: bool) -> u32 {
        if won {
            self.score(attempts, elapsed_secs, timed)
        } else {
            0
        }
    }
}

impl Default for ScoreLimits {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Base points for a win in `attempts` guesses under the standard limits
#[must_use]
pub fn base_points(attempts: usize) -> u32 {
    ScoreLimits::STANDARD.base_points(attempts)
}

/// Points for a win under the standard limits
///
/// `attempts` outside `1..=6` is clamped into range.
///
/// # Examples
/// ```
/// use wordpop::scoring::score;
///
/// assert_eq!(score(1, 0, false), 1000);
/// assert_eq!(score(3, 40, false), 700);
/// // 700 * 1.5 + (180 - 40) * 2
/// assert_eq!(score(3, 40, true), 1330);
/// ```
#[must_use]
pub fn score(attempts: usize, elapsed_secs: u64, timed: bool) -> u32 {
    ScoreLimits::STANDARD.score(attempts, elapsed_secs, timed)
}

/// Points for any finished game: [`score`] on a win, zero on a loss
#[must_use]
pub fn points(won: bool, attempts: usize, elapsed_secs: u64, timed: bool) -> u32 {
    ScoreLimits::STANDARD.points(won, attempts, elapsed_secs, timed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_points_table() {
        let table: Vec<u32> = (1..=6).map(base_points).collect();
        assert_eq!(table, [1000, 850, 700, 550, 400, 250]);
    }

    #[test]
    fn fewer_attempts_score_more() {
        for attempts in 1..MAX_ATTEMPTS {
            assert!(score(attempts, 0, false) > score(attempts + 1, 0, false));
            assert!(score(attempts, 30, true) > score(attempts + 1, 30, true));
        }
    }

    #[test]
    fn timed_never_scores_less() {
        for attempts in 1..=MAX_ATTEMPTS {
            for elapsed in [0, 1, 90, 179, 180, 500] {
                assert!(score(attempts, elapsed, true) >= score(attempts, elapsed, false));
            }
        }
    }

    #[test]
    fn time_bonus_stops_at_limit() {
        assert_eq!(score(1, 0, true), 1500 + 360);
        assert_eq!(score(1, 180, true), 1500);
        assert_eq!(score(1, 10_000, true), 1500);
        assert_eq!(score(6, 179, true), 375 + 2);
    }

    #[test]
    fn out_of_range_attempts_are_clamped() {
        assert_eq!(score(0, 0, false), 1000);
        assert_eq!(score(9, 0, false), 250);
    }

    #[test]
    fn losses_score_zero() {
        assert_eq!(points(false, 6, 10, true), 0);
        assert_eq!(points(true, 2, 10, false), 850);
    }

    #[test]
    fn shorter_clock_shrinks_the_time_bonus() {
        let sprint = ScoreLimits {
            max_attempts: MAX_ATTEMPTS,
            time_limit_secs: 60,
        };
        assert_eq!(sprint.score(1, 20, true), 1500 + 80);
        assert_eq!(sprint.score(1, 60, true), 1500);
        assert_eq!(sprint.score(3, 20, false), 700);
        assert!(sprint.score(1, 20, true) < score(1, 20, true));
    }

    #[test]
    fn extra_attempts_floor_at_minimum() {
        let long = ScoreLimits {
            max_attempts: 8,
            time_limit_secs: TIMED_LIMIT_SECS,
        };
        assert_eq!(long.base_points(6), 250);
        assert_eq!(long.base_points(7), MIN_BASE_POINTS);
        assert_eq!(long.base_points(8), MIN_BASE_POINTS);
        assert_eq!(long.points(false, 8, 0, true), 0);
        assert_eq!(ScoreLimits::default(), ScoreLimits::STANDARD);
    }
}
