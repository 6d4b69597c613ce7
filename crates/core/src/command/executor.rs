//! The one boundary where testpilot touches child processes

use std::io;
use std::time::{Duration, Instant};

use tracing::debug;

use super::shell_command::ShellCommand;

/// Captured result of a finished child process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// None when the child was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// stderr when it has content, stdout otherwise
    pub fn diagnostic(&self) -> &str {
        if self.stderr.trim().is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

pub trait CommandExecutor {
    /// Run to completion. `Err` means the process could not be run at all.
    fn execute(&self, command: &ShellCommand) -> io::Result<CommandOutput>;
}

/// Runs commands through the platform shell and blocks until they exit
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl CommandExecutor for SystemExecutor {
    fn execute(&self, command: &ShellCommand) -> io::Result<CommandOutput> {
        debug!("Spawning: {}", command.to_shell_command());

        let start = Instant::now();
        let output = command.to_command().output()?;
        let duration = start.elapsed();

        debug!(
            "Finished {:?} with {:?} in {:.2}s",
            command.line,
            output.status.code(),
            duration.as_secs_f64()
        );

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            duration,
        })
    }
}

/// Last `n` lines of `text` once surrounding whitespace is trimmed
pub fn tail_lines(text: &str, n: usize) -> Vec<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].to_vec()
}
