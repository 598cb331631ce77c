//! Interactive play mode
//!
//! Text-based game loop: type guesses, see colored feedback and keyboard hints.
//! Finished games go to the results store.

use crate::config::GameConfig;
use crate::corpus::WordCorpus;
use crate::output::{print_board, print_game_result, print_keyboard, print_stats};
use crate::selection::{GameMode, WordSelector};
use crate::session::{GameResult, ModeFlags, Session};
use crate::stats::ResultStore;
use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use std::io::{self, Write};

/// How the player wants to play
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub mode: GameMode,
    pub category: Option<String>,
    pub timed: bool,
    pub blind: bool,
}

impl PlayOptions {
    #[must_use]
    pub const fn mode_flags(&self) -> ModeFlags {
        ModeFlags {
            timed: self.timed,
            daily: self.mode.is_daily(),
            blind: self.blind,
        }
    }
}

enum Command {
    Quit,
    New,
    Guess(String),
}

fn parse_command(input: &str) -> Command {
    match input.trim().to_lowercase().as_str() {
        "quit" | "exit" | "q" => Command::Quit,
        "new" => Command::New,
        _ => Command::Guess(input.trim().to_string()),
    }
}

/// Run the interactive game loop
///
/// # Errors
///
/// Returns an error if no target can be selected, stdin/stdout fail, or the
/// results store cannot be written.
pub fn run_play<S: ResultStore>(
    corpus: &WordCorpus,
    selector: &mut WordSelector,
    store: &mut S,
    options: &PlayOptions,
    config: &GameConfig,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                         W O R D P O P                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Guess the {} word in {} tries.",
        options.mode.to_string().bright_cyan(),
        config.max_attempts
    );
    if options.timed {
        println!("⏱  Timed: {} seconds on the clock.", config.timed_limit_secs);
    }
    if options.blind {
        println!("🙈 Blind: no keyboard hints until the game ends.");
    }
    println!("Commands: 'quit' to exit, 'new' for a new word\n");

    let mut session = new_session(corpus, selector, options, config)?;

    loop {
        if session.is_time_up(Utc::now()) {
            let result = session.time_expire(Utc::now())?;
            println!("\n{}", "⏰ Time's up!".red().bold());
            if !finish_game(&session, result, store, config)? {
                return Ok(());
            }
            session = new_session(corpus, selector, options, config)?;
            continue;
        }

        let prompt = match session.remaining_secs(Utc::now()) {
            Some(secs) => format!(
                "Guess {}/{} [{}]",
                session.current_row() + 1,
                session.max_attempts(),
                crate::output::formatters::clock(secs)
            ),
            None => format!("Guess {}/{}", session.current_row() + 1, session.max_attempts()),
        };

        let Some(input) = get_user_input(&prompt)? else {
            return Ok(());
        };

        let guess = match parse_command(&input) {
            Command::Quit => {
                println!("\n👋 The word was {}.\n", session.target().text().bold());
                return Ok(());
            }
            Command::New => {
                session = new_session(corpus, selector, options, config)?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            Command::Guess(guess) => guess,
        };

        // The clock may have run out while waiting for input
        if session.is_time_up(Utc::now()) {
            continue;
        }

        match session.submit_guess(corpus, &guess, Utc::now()) {
            Ok(turn) => {
                print_board(session.history());
                if let Some(keyboard) = session.keyboard_hints() {
                    print_keyboard(keyboard);
                }
                if let Some(result) = turn.result {
                    if !finish_game(&session, result, store, config)? {
                        return Ok(());
                    }
                    session = new_session(corpus, selector, options, config)?;
                }
            }
            Err(e) => println!("❌ {e}\n"),
        }
    }
}

fn new_session(
    corpus: &WordCorpus,
    selector: &mut WordSelector,
    options: &PlayOptions,
    config: &GameConfig,
) -> Result<Session> {
    let now = Utc::now();
    let selection = selector
        .select(corpus, options.mode, options.category.as_deref(), now)
        .context("Could not pick a target word")?;
    if let Some(category) = &selection.category {
        println!("Category: {}", category.bright_magenta());
    }
    Ok(config.new_session(selection.word, options.mode_flags(), now))
}

/// Record the game and ask whether to continue
fn finish_game<S: ResultStore>(
    session: &Session,
    mut result: GameResult,
    store: &mut S,
    config: &GameConfig,
) -> Result<bool> {
    result.points = config.recorded_points(result.is_win, result.points);
    print_game_result(&result);
    if !session.history().is_empty() {
        println!("\n{}\n", session.share_grid());
    }

    store
        .finish_game(result, Utc::now())
        .context("Failed to save game result")?;
    print_stats(&store.stats()?);

    Ok(matches!(
        get_user_input("Play again? (yes/no)")?
            .unwrap_or_default()
            .to_lowercase()
            .as_str(),
        "yes" | "y"
    ))
}

/// Prompt and read one line; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_recognized() {
        assert!(matches!(parse_command(" QUIT "), Command::Quit));
        assert!(matches!(parse_command("new"), Command::New));
        assert!(matches!(parse_command(" crane "), Command::Guess(g) if g == "crane"));
    }

    #[test]
    fn mode_flags_follow_options() {
        let options = PlayOptions {
            mode: GameMode::DailyChallenge,
            category: None,
            timed: true,
            blind: true,
        };
        let flags = options.mode_flags();
        assert!(flags.daily && flags.timed && flags.blind);
        assert!(!PlayOptions::default().mode_flags().daily);
    }
}
