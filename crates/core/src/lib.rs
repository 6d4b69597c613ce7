//! testpilot - detect a project's ecosystems and run their conventional test suites
//!
//! This crate provides functionality to:
//! - Detect PHP, Node.js, .NET and Python projects from their marker files
//! - Pick one test command per ecosystem and mode from ordered decision tables
//! - Execute the commands and collect pass/fail/skip records for a summary
pub mod command;
pub mod dispatch;
pub mod ecosystem;
pub mod error;
pub mod manifest;
pub mod progress;
pub mod project;
pub mod runner;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::{CommandExecutor, CommandOutput, ShellCommand, SystemExecutor};
pub use dispatch::Action;
pub use ecosystem::detect_ecosystems;
pub use progress::{ProgressListener, RunEvent, SilentListener};
pub use project::ProjectDir;
pub use runner::{TestRunner, plan_only};
