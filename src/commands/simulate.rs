//! Simulate command
//!
//! Plays many independent games in parallel with a simple player that always
//! guesses a word consistent with the feedback so far. Useful for checking the
//! answer pool and the scoring curve.

use crate::config::MAX_ATTEMPTS;
use crate::core::{Feedback, Word};
use crate::corpus::WordCorpus;
use crate::selection::random_index_with;
use crate::session::{GameResult, ModeFlags, Session};
use anyhow::{Result, bail};
use chrono::{DateTime, TimeDelta, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Simulated thinking time per guess
const SECS_PER_GUESS: i64 = 20;

pub struct SimulateConfig {
    pub games: usize,
    pub seed: u64,
    /// Fixed opening guess; otherwise the player picks at random
    pub first_guess: Option<String>,
    pub timed: bool,
}

/// Aggregate over all simulated games
#[derive(Debug)]
pub struct SimulationSummary {
    pub games: usize,
    pub wins: usize,
    /// Wins by attempt count; index 0 is a first-guess win
    pub distribution: [usize; MAX_ATTEMPTS],
    pub average_attempts: f64,
    pub win_rate: f64,
    pub total_points: u64,
    pub min_points: u32,
    pub max_points: u32,
    pub average_points: f64,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play one game with the consistent-guess player
fn play_one(
    corpus: &WordCorpus,
    pool: &[Word],
    target: Word,
    first_guess: Option<Word>,
    timed: bool,
    rng: &mut StdRng,
    start: DateTime<Utc>,
) -> Option<GameResult> {
    let modes = ModeFlags {
        timed,
        ..ModeFlags::default()
    };
    let mut session = Session::new(target, modes, start);
    let mut candidates: Vec<Word> = pool.to_vec();
    let mut clock = start;

    loop {
        clock += TimeDelta::seconds(SECS_PER_GUESS);
        let guess = match first_guess {
            Some(word) if session.current_row() == 0 => word,
            _ => candidates[random_index_with(rng, candidates.len())?],
        };

        let turn = match session.submit_guess(corpus, guess.text(), clock) {
            Ok(turn) => turn,
            Err(e) => {
                log::warn!("Simulated guess {guess} rejected: {e}");
                return None;
            }
        };
        if turn.result.is_some() {
            return turn.result;
        }

        let feedback = *turn.record.feedback();
        candidates.retain(|c| Feedback::evaluate(&guess, c) == feedback);
    }
}

/// Run `config.games` games in parallel
///
/// Each game gets its own RNG seeded from `config.seed` and its index, so a run
/// is reproducible for a given seed.
///
/// # Errors
///
/// Returns an error if the answer pool is empty or the first guess is not a
/// valid guess.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_simulation(config: &SimulateConfig, corpus: &WordCorpus) -> Result<SimulationSummary> {
    let pool = corpus.answer_pool();
    if pool.is_empty() {
        bail!("The answer pool is empty");
    }

    let first_guess = match &config.first_guess {
        Some(text) => {
            let word = Word::new(text)?;
            if !corpus.accepts_guess(&word) {
                bail!("First guess {word} is not in the word list");
            }
            Some(word)
        }
        None => None,
    };

    println!("🎯 Simulating {} games...", config.games);

    let pb = ProgressBar::new(config.games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );

    let start = Utc::now();
    let timer = Instant::now();

    let results: Vec<GameResult> = (0..config.games)
        .into_par_iter()
        .filter_map(|i| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let target = pool[random_index_with(&mut rng, pool.len())?];
            let result = play_one(
                corpus,
                &pool,
                target,
                first_guess,
                config.timed,
                &mut rng,
                start,
            );
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("done");

    Ok(summarize(&results, timer.elapsed()))
}

/// Fold finished games into a summary
#[must_use]
pub fn summarize(results: &[GameResult], duration: Duration) -> SimulationSummary {
    let games = results.len();
    let mut distribution = [0usize; MAX_ATTEMPTS];
    let mut wins = 0;
    let mut win_attempts = 0;

    for result in results.iter().filter(|r| r.is_win) {
        wins += 1;
        win_attempts += result.attempts;
        if let Some(slot) = result
            .attempts
            .checked_sub(1)
            .and_then(|i| distribution.get_mut(i))
        {
            *slot += 1;
        }
    }

    let total_points: u64 = results.iter().map(|r| u64::from(r.points)).sum();
    let ratio = |num: f64, den: usize| if den == 0 { 0.0 } else { num / den as f64 };

    SimulationSummary {
        games,
        wins,
        distribution,
        average_attempts: ratio(win_attempts as f64, wins),
        win_rate: ratio(wins as f64 * 100.0, games),
        total_points,
        min_points: results.iter().map(|r| r.points).min().unwrap_or(0),
        max_points: results.iter().map(|r| r.points).max().unwrap_or(0),
        average_points: ratio(total_points as f64, games),
        duration,
        games_per_second: games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(games: usize) -> SimulateConfig {
        SimulateConfig {
            games,
            seed: 42,
            first_guess: Some("slate".to_string()),
            timed: false,
        }
    }

    #[test]
    fn player_always_finishes() {
        let corpus = WordCorpus::embedded();
        let summary = run_simulation(&config(40), &corpus).unwrap();
        assert_eq!(summary.games, 40);
        assert_eq!(summary.distribution.iter().sum::<usize>(), summary.wins);
        assert!(summary.max_points <= 1000);
    }

    #[test]
    fn same_seed_same_outcome() {
        let corpus = WordCorpus::embedded();
        let a = run_simulation(&config(25), &corpus).unwrap();
        let b = run_simulation(&config(25), &corpus).unwrap();
        assert_eq!(a.distribution, b.distribution);
        assert_eq!(a.total_points, b.total_points);
    }

    #[test]
    fn invalid_first_guess_is_error() {
        let corpus = WordCorpus::embedded();
        let mut cfg = config(1);
        cfg.first_guess = Some("qqqqq".to_string());
        assert!(run_simulation(&cfg, &corpus).is_err());
    }

    #[test]
    fn summarize_counts() {
        let word = Word::new("house").unwrap();
        let game = |is_win, attempts, points| GameResult {
            word,
            attempts,
            time_elapsed: 0,
            points,
            is_win,
            is_challenge_mode: false,
        };
        let summary = summarize(
            &[game(true, 2, 850), game(true, 4, 550), game(false, 6, 0)],
            Duration::from_secs(1),
        );
        assert_eq!(summary.wins, 2);
        assert_eq!(summary.distribution, [0, 1, 0, 1, 0, 0]);
        assert!((summary.average_attempts - 3.0).abs() < f64::EPSILON);
        assert_eq!(summary.min_points, 0);
        assert_eq!(summary.max_points, 850);
        assert_eq!(summary.total_points, 1400);
    }
}
