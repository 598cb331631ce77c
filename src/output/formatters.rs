//! Formatting utilities for terminal output

use crate::core::{GuessRecord, KeyboardState, Verdict};
use colored::{ColoredString, Colorize};

/// Keyboard layout used for hint rows
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// One letter painted with its verdict color
#[must_use]
pub fn colored_tile(letter: char, verdict: Option<Verdict>) -> ColoredString {
    let tile = format!(" {letter} ");
    match verdict {
        Some(Verdict::Correct) => tile.black().on_green().bold(),
        Some(Verdict::Present) => tile.black().on_yellow().bold(),
        Some(Verdict::Absent) => tile.white().on_bright_black(),
        None => tile.normal(),
    }
}

/// A guess rendered as five colored tiles
#[must_use]
pub fn feedback_row(record: &GuessRecord) -> String {
    record
        .tiles()
        .map(|(letter, verdict)| colored_tile(char::from(letter), Some(verdict)).to_string())
        .collect()
}

/// Keyboard hint rows; unguessed letters stay plain
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| colored_tile(c, keyboard.get(c)).to_string())
                .collect()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `m:ss` for a countdown
#[must_use]
pub fn clock(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn clock_format() {
        assert_eq!(clock(180), "3:00");
        assert_eq!(clock(65), "1:05");
        assert_eq!(clock(0), "0:00");
    }

    #[test]
    fn rows_contain_letters() {
        colored::control::set_override(false);
        let crane = Word::new("crane").unwrap();
        let record = GuessRecord::evaluate(crane, &crane);
        assert_eq!(feedback_row(&record), " C  R  A  N  E ");

        let rows = keyboard_rows(&KeyboardState::fold(&[record]));
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains(" Q "));
        assert!(rows[2].contains(" M "));
    }
}
