use std::path::{Path, PathBuf};
use std::process::Command;

/// A command line handed to the platform shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub line: String,
    pub working_dir: Option<PathBuf>,
    pub env: Vec<(String, String)>,
}

impl ShellCommand {
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            working_dir: None,
            env: Vec::new(),
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    pub fn to_shell_command(&self) -> String {
        let mut cmd = String::new();
        for (key, value) in &self.env {
            if value.contains(' ') {
                cmd.push_str(&format!("{key}='{value}' "));
            } else {
                cmd.push_str(&format!("{key}={value} "));
            }
        }
        cmd.push_str(&self.line);
        cmd
    }

    /// The process that runs this line through the shell
    pub fn to_command(&self) -> Command {
        let mut cmd = shell();
        cmd.arg(&self.line);

        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        cmd
    }
}

#[cfg(windows)]
fn shell() -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C");
    cmd
}

#[cfg(not(windows))]
fn shell() -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c");
    cmd
}
