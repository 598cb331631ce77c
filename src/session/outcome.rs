//! Session modes, outcomes and finished-game results

use crate::core::Word;
use serde::{Deserialize, Serialize};

/// Independent switches that change how a session plays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeFlags {
    /// Countdown clock; a timed win earns bonus points
    pub timed: bool,
    /// Target is the shared date-keyed word
    pub daily: bool,
    /// No keyboard hints until the game ends
    pub blind: bool,
}

impl ModeFlags {
    #[must_use]
    pub const fn timed() -> Self {
        Self {
            timed: true,
            daily: false,
            blind: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LossReason {
    OutOfAttempts,
    TimeExpired,
}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Outcome {
    Playing,
    Won { attempts: usize },
    Lost { reason: LossReason },
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Summary of one finished game, as stored and sent over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub word: Word,
    pub attempts: usize,
    /// Seconds from session start to the final guess
    pub time_elapsed: u64,
    pub points: u32,
    pub is_win: bool,
    pub is_challenge_mode: bool,
}
