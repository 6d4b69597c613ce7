use std::time::Instant;

use tracing::{debug, info, warn};

use crate::command::{CommandExecutor, ShellCommand, SystemExecutor, tail_lines};
use crate::dispatch::{self, Action};
use crate::ecosystem::detect_ecosystems;
use crate::error::Result;
use crate::progress::{ProgressListener, RunEvent, SilentListener};
use crate::project::ProjectDir;
use crate::types::{Ecosystem, Mode, RunReport, RunStats, TestResult, TestStatus};

/// Lines of stdout shown after a passing command
pub const SUCCESS_PREVIEW_LINES: usize = 5;
/// Lines of diagnostic output shown after a failing command
pub const FAILURE_PREVIEW_LINES: usize = 20;
/// Lines of diagnostic output kept on a failed record
pub const RECORDED_ERROR_LINES: usize = 5;

/// What each detected ecosystem would do, without executing anything
pub fn plan_only(project: &ProjectDir, mode: Mode) -> Vec<(Ecosystem, Result<Vec<Action>>)> {
    detect_ecosystems(project)
        .into_iter()
        .map(|ecosystem| (ecosystem, dispatch::plan(ecosystem, project, mode)))
        .collect()
}

/// Coordinates a single run: detect, plan, execute, record
pub struct TestRunner<E: CommandExecutor = SystemExecutor> {
    executor: E,
    listener: Box<dyn ProgressListener>,
    results: Vec<TestResult>,
    stats: RunStats,
    started: Instant,
}

impl TestRunner<SystemExecutor> {
    pub fn new() -> Self {
        Self::with_executor(SystemExecutor)
    }
}

impl Default for TestRunner<SystemExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CommandExecutor> TestRunner<E> {
    pub fn with_executor(executor: E) -> Self {
        Self {
            executor,
            listener: Box::new(SilentListener),
            results: Vec::new(),
            stats: RunStats::default(),
            started: Instant::now(),
        }
    }

    pub fn with_listener(mut self, listener: impl ProgressListener + 'static) -> Self {
        self.listener = Box::new(listener);
        self
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Detect every ecosystem under `project` and run what its tables select
    pub fn detect_and_run(mut self, project: &ProjectDir, mode: Mode) -> RunReport {
        self.listener.on_event(RunEvent::Detecting {
            root: project.root(),
        });

        let ecosystems = detect_ecosystems(project);
        info!("Running {} mode for {:?}", mode, ecosystems);

        for ecosystem in ecosystems {
            match dispatch::plan(ecosystem, project, mode) {
                Ok(actions) => {
                    for action in actions {
                        self.apply(project, action);
                    }
                }
                Err(e) => {
                    warn!("Could not plan {}: {}", ecosystem, e);
                    self.record_planning_error(ecosystem, &e.to_string());
                }
            }
        }

        self.finish()
    }

    pub fn apply(&mut self, project: &ProjectDir, action: Action) {
        match action {
            Action::Run { label, command } => {
                let command = ShellCommand::new(command).with_working_dir(project.root());
                self.execute(&label, &command);
            }
            Action::Skip { label, reason } => self.skip(&label, &reason),
        }
    }

    /// Run `command` and record the outcome. Returns whether it passed.
    pub fn execute(&mut self, label: &str, command: &ShellCommand) -> bool {
        let shown = command.to_shell_command();
        self.listener.on_event(RunEvent::Started {
            label,
            command: &shown,
        });

        match self.executor.execute(command) {
            Ok(output) if output.success() => {
                self.listener.on_event(RunEvent::Passed {
                    label,
                    duration: output.duration,
                    preview: tail_lines(&output.stdout, SUCCESS_PREVIEW_LINES),
                });
                self.push(TestResult::passed(label, shown, output.duration));
                true
            }
            Ok(output) => {
                let diagnostic = output.diagnostic();
                self.listener.on_event(RunEvent::Failed {
                    label,
                    duration: output.duration,
                    diagnostic: tail_lines(diagnostic, FAILURE_PREVIEW_LINES),
                });
                let error = tail_lines(diagnostic, RECORDED_ERROR_LINES).join("\n");
                debug!("{} exited with {:?}", label, output.exit_code);
                self.push(TestResult::failed(label, shown, output.duration, error));
                false
            }
            Err(e) => {
                let message = e.to_string();
                warn!("Could not run {:?}: {}", shown, message);
                self.listener.on_event(RunEvent::Errored {
                    label,
                    message: &message,
                });
                self.push(TestResult::errored(label, Some(shown), message));
                false
            }
        }
    }

    pub fn skip(&mut self, label: &str, reason: &str) {
        self.listener.on_event(RunEvent::Skipped { label, reason });
        self.push(TestResult::skipped(label, reason));
    }

    fn record_planning_error(&mut self, ecosystem: Ecosystem, message: &str) {
        let label = match ecosystem {
            Ecosystem::Node => "Node.js package.json".to_string(),
            other => other.name().to_string(),
        };
        self.listener.on_event(RunEvent::Errored {
            label: &label,
            message,
        });
        self.push(TestResult::errored(label, None, message));
    }

    fn push(&mut self, result: TestResult) {
        self.stats.record(result.status);
        if result.status == TestStatus::Error {
            debug!("Counting error for {} as failed", result.name);
        }
        self.results.push(result);
    }

    pub fn finish(self) -> RunReport {
        RunReport {
            results: self.results,
            stats: self.stats,
            elapsed: self.started.elapsed(),
        }
    }
}
