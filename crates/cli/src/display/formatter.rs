use std::time::Duration;

use colored::{ColoredString, Colorize};
use testpilot_core::TestStatus;

pub const RULE_WIDTH: usize = 70;
/// Characters of a failure kept in the summary row
pub const ERROR_EXCERPT_CHARS: usize = 100;

pub fn status_icon(status: TestStatus) -> &'static str {
    match status {
        TestStatus::Passed => "✅",
        TestStatus::Failed => "❌",
        TestStatus::Skipped => "⏭️ ",
        TestStatus::Error => "❓",
    }
}

/// Status word padded to the column width, then coloured
pub fn status_label(status: TestStatus) -> ColoredString {
    let padded = format!("{:<7}", status.as_str());
    match status {
        TestStatus::Passed => padded.green(),
        TestStatus::Failed => padded.red(),
        TestStatus::Skipped => padded.yellow(),
        TestStatus::Error => padded.normal(),
    }
}

pub fn format_duration(duration: Duration) -> String {
    format!("{:.2}s", duration.as_secs_f64())
}

/// First `max` characters of the trimmed text
pub fn excerpt(text: &str, max: usize) -> String {
    text.trim().chars().take(max).collect()
}

pub fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}
