//! Evaluate command
//!
//! Replays a list of guesses against a known target through a real session, so
//! dictionary checks, keyboard hints and scoring all apply.

use crate::core::{GuessRecord, KeyboardState, Word};
use crate::corpus::WordCorpus;
use crate::session::{GameResult, ModeFlags, Outcome, Session};
use anyhow::{Context, Result};
use chrono::{DateTime, TimeDelta, Utc};

/// What to replay
pub struct EvaluateConfig {
    pub target: String,
    pub guesses: Vec<String>,
    pub timed: bool,
    /// Seconds the whole game took, for timed scoring
    pub elapsed_secs: u64,
}

/// Result of replaying a game
pub struct EvaluateResult {
    pub target: Word,
    pub records: Vec<GuessRecord>,
    pub keyboard: KeyboardState,
    pub outcome: Outcome,
    pub result: Option<GameResult>,
    pub share: String,
}

/// Replay `config.guesses` against `config.target`
///
/// Guesses past the end of the game are ignored.
///
/// # Errors
///
/// Returns an error if the target is not a valid word or any guess is rejected.
pub fn evaluate_game(
    config: &EvaluateConfig,
    corpus: &WordCorpus,
    now: DateTime<Utc>,
) -> Result<EvaluateResult> {
    let target = Word::new(&config.target)
        .with_context(|| format!("Invalid target word '{}'", config.target))?;

    let modes = ModeFlags {
        timed: config.timed,
        ..ModeFlags::default()
    };
    let mut session = Session::new(target, modes, now);
    let finished_at = now + TimeDelta::seconds(i64::try_from(config.elapsed_secs).unwrap_or(0));

    let mut result = None;
    for guess in &config.guesses {
        if session.outcome().is_terminal() {
            log::warn!("Ignoring '{guess}': game already over");
            continue;
        }
        let turn = session
            .submit_guess(corpus, guess, finished_at)
            .with_context(|| format!("Guess '{guess}' rejected"))?;
        result = turn.result;
    }

    Ok(EvaluateResult {
        target,
        records: session.history().to_vec(),
        keyboard: KeyboardState::fold(session.history()),
        outcome: session.outcome(),
        result,
        share: session.share_grid(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 2, 2, 2, 2).unwrap()
    }

    fn config(target: &str, guesses: &[&str]) -> EvaluateConfig {
        EvaluateConfig {
            target: target.to_string(),
            guesses: guesses.iter().map(ToString::to_string).collect(),
            timed: false,
            elapsed_secs: 0,
        }
    }

    #[test]
    fn replays_to_a_win() {
        let corpus = WordCorpus::embedded();
        let result = evaluate_game(&config("crane", &["slate", "crane"]), &corpus, now()).unwrap();

        assert_eq!(result.outcome, Outcome::Won { attempts: 2 });
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.keyboard.get('C'), Some(Verdict::Correct));
        assert_eq!(result.result.unwrap().points, 850);
    }

    #[test]
    fn unfinished_game_has_no_result() {
        let corpus = WordCorpus::embedded();
        let result = evaluate_game(&config("house", &["crane"]), &corpus, now()).unwrap();
        assert_eq!(result.outcome, Outcome::Playing);
        assert!(result.result.is_none());
    }

    #[test]
    fn extra_guesses_after_win_are_ignored() {
        let corpus = WordCorpus::embedded();
        let result =
            evaluate_game(&config("house", &["house", "crane"]), &corpus, now()).unwrap();
        assert_eq!(result.records.len(), 1);
    }

    #[test]
    fn timed_replay_scores_bonus() {
        let corpus = WordCorpus::embedded();
        let mut cfg = config("crane", &["crane"]);
        cfg.timed = true;
        cfg.elapsed_secs = 30;
        let result = evaluate_game(&cfg, &corpus, now()).unwrap();
        assert_eq!(result.result.unwrap().points, 1500 + 150 * 2);
    }

    #[test]
    fn bad_input_is_error() {
        let corpus = WordCorpus::embedded();
        assert!(evaluate_game(&config("cranes", &["crane"]), &corpus, now()).is_err());
        assert!(evaluate_game(&config("crane", &["qqqqq"]), &corpus, now()).is_err());
    }
}
