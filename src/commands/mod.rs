//! Command implementations

pub mod daily;
pub mod evaluate;
pub mod play;
pub mod request;
pub mod simulate;
pub mod validate;

pub use daily::{DailyPick, DailyReport, daily_report, parse_date};
pub use evaluate::{EvaluateConfig, EvaluateResult, evaluate_game};
pub use play::{PlayOptions, run_play};
pub use request::send_request;
pub use simulate::{SimulateConfig, SimulationSummary, run_simulation, summarize};
pub use validate::{ValidationReport, validate_words};
