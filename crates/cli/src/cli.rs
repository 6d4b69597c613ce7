use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use testpilot_core::{Mode, ProjectDir};

use crate::commands::{plan_command, run_command};

/// Detect the project's ecosystems and run their test suites
#[derive(Parser, Debug)]
#[command(name = "testpilot")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Which suites to run
    #[arg(long, value_enum, default_value_t = ModeArg::All)]
    pub mode: ModeArg,

    /// Project directory (defaults to the current directory)
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Print the selected commands without executing them
    #[arg(short, long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Unit and end-to-end suites
    All,
    /// Unit suites only
    Unit,
    /// End-to-end suites only
    E2e,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::All => Mode::All,
            ModeArg::Unit => Mode::Unit,
            ModeArg::E2e => Mode::E2e,
        }
    }
}

impl Cli {
    /// Run and return the process exit code
    pub fn execute(self) -> Result<i32> {
        let project = match &self.cwd {
            Some(dir) => ProjectDir::new(dir)
                .with_context(|| format!("Cannot use {} as project directory", dir.display()))?,
            None => ProjectDir::current().context("Cannot read the current directory")?,
        };
        let mode = Mode::from(self.mode);

        if self.dry_run {
            plan_command(&project, mode)
        } else {
            run_command(&project, mode)
        }
    }
}
