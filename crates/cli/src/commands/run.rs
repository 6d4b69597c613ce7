use anyhow::Result;
use testpilot_core::{Mode, ProjectDir, TestRunner};
use tracing::info;

use crate::display::{ConsoleProgress, render_summary};

pub fn run_command(project: &ProjectDir, mode: Mode) -> Result<i32> {
    info!("Running {} tests in {}", mode, project.root().display());

    let report = TestRunner::new()
        .with_listener(ConsoleProgress)
        .detect_and_run(project, mode);

    print!("{}", render_summary(&report));

    Ok(report.exit_code())
}
