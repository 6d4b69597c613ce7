use std::fmt;
use std::time::Duration;

/// Outcome of a single suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
    /// The command could not be started at all
    Error,
}

impl TestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TestStatus::Passed => "PASSED",
            TestStatus::Failed => "FAILED",
            TestStatus::Skipped => "SKIPPED",
            TestStatus::Error => "ERROR",
        }
    }

    pub fn is_failure(self) -> bool {
        matches!(self, TestStatus::Failed | TestStatus::Error)
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the run, in invocation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    pub name: String,
    /// None for skipped suites
    pub command: Option<String>,
    pub status: TestStatus,
    pub duration: Duration,
    /// Tail of the diagnostic output, the exception message, or the skip reason
    pub error: String,
}

impl TestResult {
    pub fn passed(name: impl Into<String>, command: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            command: Some(command.into()),
            status: TestStatus::Passed,
            duration,
            error: String::new(),
        }
    }

    pub fn failed(
        name: impl Into<String>,
        command: impl Into<String>,
        duration: Duration,
        error: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            command: Some(command.into()),
            status: TestStatus::Failed,
            duration,
            error: error.into(),
        }
    }

    pub fn errored(name: impl Into<String>, command: Option<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command,
            status: TestStatus::Error,
            duration: Duration::ZERO,
            error: message.into(),
        }
    }

    pub fn skipped(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: None,
            status: TestStatus::Skipped,
            duration: Duration::ZERO,
            error: reason.into(),
        }
    }
}

/// Counters for a run. Every record call bumps `total` and exactly one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunStats {
    pub fn record(&mut self, status: TestStatus) {
        match status {
            TestStatus::Passed => self.record_passed(),
            TestStatus::Failed | TestStatus::Error => self.record_failed(),
            TestStatus::Skipped => self.record_skipped(),
        }
    }

    pub fn record_passed(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    pub fn record_failed(&mut self) {
        self.total += 1;
        self.failed += 1;
    }

    pub fn record_skipped(&mut self) {
        self.total += 1;
        self.skipped += 1;
    }

    pub fn is_consistent(&self) -> bool {
        self.total == self.passed + self.failed + self.skipped
    }
}

/// Everything the reporter needs once the run is over
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub results: Vec<TestResult>,
    pub stats: RunStats,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn success(&self) -> bool {
        self.stats.failed == 0
    }

    pub fn exit_code(&self) -> i32 {
        if self.success() { 0 } else { 1 }
    }
}
