use testpilot_core::{ProgressListener, RunEvent};

use super::formatter::format_duration;

/// Prints progress to stdout as the run advances
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl ProgressListener for ConsoleProgress {
    fn on_event(&mut self, event: RunEvent<'_>) {
        for line in render_event(&event) {
            println!("{line}");
        }
    }
}

pub fn render_event(event: &RunEvent<'_>) -> Vec<String> {
    match event {
        RunEvent::Detecting { .. } => vec!["🔍 Detecting project environment...".to_string()],
        RunEvent::Started { label, command } => vec![
            format!("\n🚀 Running: {label}..."),
            format!("   Command: {command}"),
        ],
        RunEvent::Passed {
            duration, preview, ..
        } => {
            let mut lines = vec![format!("✅ Success ({})", format_duration(*duration))];
            lines.extend(preview.iter().map(|line| format!("   | {line}")));
            lines
        }
        RunEvent::Failed {
            duration,
            diagnostic,
            ..
        } => {
            let mut lines = vec![
                format!("❌ Failed ({})", format_duration(*duration)),
                "   Error Output:".to_string(),
            ];
            lines.extend(diagnostic.iter().map(|line| format!("   | {line}")));
            lines
        }
        RunEvent::Errored { message, .. } => vec![format!("❌ Exception: {message}")],
        RunEvent::Skipped { label, reason } => vec![format!("⏭️ Skipped {label}: {reason}")],
    }
}
