//! Display functions for command results

use super::formatters::{clock, create_progress_bar, feedback_row, keyboard_rows};
use crate::api::Response;
use crate::commands::{DailyReport, EvaluateResult, SimulationSummary, ValidationReport};
use crate::core::{GuessRecord, KeyboardState};
use crate::session::{GameResult, LossReason, Outcome};
use crate::stats::GameStats;
use colored::Colorize;

/// Print every guess so far as colored tiles
pub fn print_board(records: &[GuessRecord]) {
    println!();
    for record in records {
        println!("   {}", feedback_row(record));
    }
    println!();
}

pub fn print_keyboard(keyboard: &KeyboardState) {
    for (indent, row) in keyboard_rows(keyboard).iter().enumerate() {
        println!("   {}{row}", " ".repeat(indent * 2));
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_game_result(result: &GameResult) {
    println!("\n{}", "═".repeat(60).cyan());
    if result.is_win {
        println!(
            "{}",
            format!("🎉 Solved in {} guesses!", result.attempts)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ The word was {}", result.word).red().bold()
        );
    }
    println!("   Points:  {}", result.points.to_string().bright_yellow().bold());
    println!("   Time:    {}", clock(result.time_elapsed));
    println!("{}", "═".repeat(60).cyan());
}

/// Print a replayed game
pub fn print_evaluation(result: &EvaluateResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target: {}",
        result.target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, record) in result.records.iter().enumerate() {
        println!(
            "Turn {}: {}  {}  {}",
            i + 1,
            record.word(),
            feedback_row(record),
            record.feedback().to_emoji()
        );
    }
    println!();
    print_keyboard(&result.keyboard);

    match result.outcome {
        Outcome::Playing => println!("{}", "⏳ Game still in progress".yellow()),
        Outcome::Won { attempts } => println!(
            "{}",
            format!("✅ Won in {attempts} guesses").green().bold()
        ),
        Outcome::Lost { reason } => println!(
            "{}",
            match reason {
                LossReason::OutOfAttempts => "❌ Out of guesses",
                LossReason::TimeExpired => "⏰ Out of time",
            }
            .red()
            .bold()
        ),
    }
    if let Some(game) = &result.result {
        println!("   Points: {}", game.points.to_string().bright_yellow());
    }
    if !result.records.is_empty() {
        println!("\n{}", result.share);
    }
}

fn distribution_bar(count: usize, total: usize) -> (String, f64) {
    if total == 0 {
        return ("░".repeat(40).bright_black().to_string(), 0.0);
    }
    let pct = (count as f64 / total as f64) * 100.0;
    let bar_width = ((pct / 2.5) as usize).min(40);
    let bar = format!(
        "{}{}",
        "█".repeat(bar_width).green(),
        "░".repeat(40 - bar_width).bright_black()
    );
    (bar, pct)
}

/// Print the simulation summary
pub fn print_simulation(summary: &SimulationSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Games:".bright_cyan().bold());
    println!("   Played:           {}", summary.games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", summary.win_rate).bright_yellow().bold()
    );
    println!("   Average guesses:  {:.2}", summary.average_attempts);
    println!("   Time taken:       {:.2}s", summary.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", summary.games_per_second);

    println!("\n💰 {}", "Points:".bright_cyan().bold());
    println!("   Total:    {}", summary.total_points);
    println!("   Average:  {:.1}", summary.average_points);
    println!(
        "   Range:    {} - {}",
        summary.min_points.to_string().yellow(),
        summary.max_points.to_string().green()
    );

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (i, &count) in summary.distribution.iter().enumerate() {
        let (bar, pct) = distribution_bar(count, summary.games);
        println!("   {}: {bar} {count:4} ({pct:5.1}%)", i + 1);
    }
    let losses = summary.games - summary.wins;
    let (bar, pct) = distribution_bar(losses, summary.games);
    println!("   X: {bar} {losses:4} ({pct:5.1}%)");
}

pub fn print_daily(report: &DailyReport) {
    println!("\n📅 {}", report.date_key.bright_cyan().bold());
    for pick in &report.picks {
        println!(
            "   {:<16} {}  (#{} of {})",
            pick.pool,
            pick.word.text().bright_yellow().bold(),
            pick.index,
            pick.pool_size
        );
    }
}

fn mark(ok: bool) -> colored::ColoredString {
    if ok { "✓".green() } else { "✗".red() }
}

/// One line per checked word
pub fn print_validation(reports: &[ValidationReport]) {
    println!(
        "\n   {:<8} {:>5} {:>6} {:>6} {:>6} {:>5}",
        "WORD", "GUESS", "ANSWER", "VOWEL", "CLEAN", "RANK"
    );
    for report in reports {
        let Some(word) = report.word else {
            println!("   {:<8} {}", report.input, "not a 5-letter word".red());
            continue;
        };
        println!(
            "   {:<8} {:>5} {:>6} {:>6} {:>6} {:>5}",
            word.text(),
            mark(report.valid_guess),
            mark(report.answer_candidate),
            mark(report.vowel_ok),
            mark(!report.problematic),
            report.frequency.unwrap_or_default()
        );
    }
}

/// Print lifetime statistics
pub fn print_stats(stats: &GameStats) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!(
        "   Played: {}   Win %: {:.0}   Streak: {}   Max streak: {}   Points: {}",
        stats.total_games,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak,
        stats.total_points
    );

    let max = stats
        .guess_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or_default();
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        println!(
            "   {}: {} {count}",
            i + 1,
            create_progress_bar(f64::from(count), f64::from(max), 30).green()
        );
    }
    println!();
}

/// Status line followed by the pretty-printed JSON body
pub fn print_response(response: &Response) {
    let status = if response.is_success() {
        response.status.to_string().green()
    } else {
        response.status.to_string().red()
    };
    println!("{status}");
    println!(
        "{}",
        serde_json::to_string_pretty(&response.body).unwrap_or_else(|_| response.body.to_string())
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_bar_handles_empty_total() {
        let (_, pct) = distribution_bar(0, 0);
        assert!(pct.abs() < f64::EPSILON);
    }

    #[test]
    fn distribution_bar_percentage() {
        let (_, pct) = distribution_bar(1, 4);
        assert!((pct - 25.0).abs() < f64::EPSILON);
    }
}
