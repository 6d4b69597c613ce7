use std::fmt::Write;

use testpilot_core::{RunReport, TestStatus};

use super::formatter::{
    ERROR_EXCERPT_CHARS, excerpt, format_duration, rule, status_icon, status_label,
};

pub const NO_TESTS_NOTICE: &str = "⚠️  No tests found to run.\n   Check the project layout or its config files (composer.json, package.json, .sln, etc).";

/// The end-of-run table, ready to print
pub fn render_summary(report: &RunReport) -> String {
    let mut out = String::new();
    let heavy = rule('=');
    let light = rule('-');

    writeln!(out).ok();
    writeln!(out, "{heavy}").ok();
    writeln!(
        out,
        "📊 AUTOMATED TEST SUMMARY ({})",
        format_duration(report.elapsed)
    )
    .ok();
    writeln!(out, "{heavy}").ok();

    if report.is_empty() {
        writeln!(out, "{NO_TESTS_NOTICE}").ok();
        return out;
    }

    writeln!(out, "{:<10} | {:<35} | TIME", "RESULT", "SUITE").ok();
    writeln!(out, "{light}").ok();

    for result in &report.results {
        writeln!(
            out,
            "{} {} | {:<35} | {}",
            status_icon(result.status),
            status_label(result.status),
            result.name,
            format_duration(result.duration)
        )
        .ok();

        match result.status {
            TestStatus::Failed | TestStatus::Error => {
                writeln!(
                    out,
                    "   └─ Error: {}...",
                    excerpt(&result.error, ERROR_EXCERPT_CHARS)
                )
                .ok();
            }
            TestStatus::Skipped => {
                writeln!(out, "   └─ Reason: {}", result.error).ok();
            }
            TestStatus::Passed => {}
        }
    }

    let stats = &report.stats;
    writeln!(out, "{light}").ok();
    writeln!(
        out,
        "Total: {} | Passed: {} | Failed: {} | Skipped: {}",
        stats.total, stats.passed, stats.failed, stats.skipped
    )
    .ok();

    out
}
