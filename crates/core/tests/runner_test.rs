//! End-to-end runs over temporary projects with a scripted executor

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use tempfile::TempDir;
use testpilot_core::{
    CommandExecutor, CommandOutput, Mode, ProgressListener, ProjectDir, RunEvent, ShellCommand,
    TestRunner, TestStatus,
};

#[derive(Clone)]
enum Scripted {
    Exit {
        code: i32,
        stdout: &'static str,
        stderr: &'static str,
    },
    SpawnError(&'static str),
}

/// Unknown commands succeed silently
#[derive(Default)]
struct ScriptedExecutor {
    responses: HashMap<String, Scripted>,
    calls: Rc<RefCell<Vec<ShellCommand>>>,
}

impl ScriptedExecutor {
    fn respond(mut self, line: &str, response: Scripted) -> Self {
        self.responses.insert(line.to_string(), response);
        self
    }

    fn calls(&self) -> Rc<RefCell<Vec<ShellCommand>>> {
        Rc::clone(&self.calls)
    }
}

impl CommandExecutor for ScriptedExecutor {
    fn execute(&self, command: &ShellCommand) -> io::Result<CommandOutput> {
        self.calls.borrow_mut().push(command.clone());
        match self.responses.get(&command.line) {
            Some(Scripted::SpawnError(message)) => Err(io::Error::new(io::ErrorKind::NotFound, *message)),
            Some(Scripted::Exit { code, stdout, stderr }) => Ok(CommandOutput {
                exit_code: Some(*code),
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
                duration: Duration::from_millis(250),
            }),
            None => Ok(CommandOutput {
                exit_code: Some(0),
                duration: Duration::from_millis(10),
                ..CommandOutput::default()
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Seen {
    Detecting,
    Started(String),
    Passed(String, Vec<String>),
    Failed(String, Vec<String>),
    Errored(String),
    Skipped(String, String),
}

#[derive(Clone, Default)]
struct RecordingListener(Rc<RefCell<Vec<Seen>>>);

impl ProgressListener for RecordingListener {
    fn on_event(&mut self, event: RunEvent<'_>) {
        let seen = match event {
            RunEvent::Detecting { .. } => Seen::Detecting,
            RunEvent::Started { label, .. } => Seen::Started(label.to_string()),
            RunEvent::Passed { label, preview, .. } => Seen::Passed(
                label.to_string(),
                preview.into_iter().map(String::from).collect(),
            ),
            RunEvent::Failed { label, diagnostic, .. } => Seen::Failed(
                label.to_string(),
                diagnostic.into_iter().map(String::from).collect(),
            ),
            RunEvent::Errored { label, .. } => Seen::Errored(label.to_string()),
            RunEvent::Skipped { label, reason } => {
                Seen::Skipped(label.to_string(), reason.to_string())
            }
        };
        self.0.borrow_mut().push(seen);
    }
}

struct Fixture {
    temp_dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    fn file(&self, path: &str, content: &str) -> &Self {
        let path = self.temp_dir.path().join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }

    fn dir(&self, path: &str) -> &Self {
        fs::create_dir_all(self.temp_dir.path().join(path)).unwrap();
        self
    }

    /// Nothing resolves on the search path
    fn project(&self) -> ProjectDir {
        ProjectDir::new(self.temp_dir.path())
            .unwrap()
            .with_search_path("")
    }
}

fn lines(calls: &Rc<RefCell<Vec<ShellCommand>>>) -> Vec<String> {
    calls.borrow().iter().map(|c| c.line.clone()).collect()
}

#[test]
fn test_empty_directory_produces_no_records() {
    let fixture = Fixture::new();
    let executor = ScriptedExecutor::default();
    let calls = executor.calls();

    let report = TestRunner::with_executor(executor).detect_and_run(&fixture.project(), Mode::All);

    assert!(report.is_empty());
    assert!(report.success());
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.stats.total, 0);
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_only_php_table_is_consulted() {
    let fixture = Fixture::new();
    fixture
        .file("composer.json", "{}")
        .file("artisan", "#!/usr/bin/env php")
        .dir("tests");
    let executor = ScriptedExecutor::default();
    let calls = executor.calls();

    let report = TestRunner::with_executor(executor).detect_and_run(&fixture.project(), Mode::All);

    assert_eq!(lines(&calls), vec!["php artisan test"]);
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].name, "Laravel Artisan Test");
    assert_eq!(report.results[0].status, TestStatus::Passed);
    assert_eq!(
        calls.borrow()[0].working_dir(),
        Some(fixture.temp_dir.path())
    );
}

#[test]
fn test_npm_placeholder_is_skipped_not_executed() {
    let fixture = Fixture::new();
    fixture.file(
        "package.json",
        r#"{ "scripts": { "test": "echo \"Error: no test specified\" && exit 1" } }"#,
    );
    let executor = ScriptedExecutor::default();
    let calls = executor.calls();

    let report = TestRunner::with_executor(executor).detect_and_run(&fixture.project(), Mode::Unit);

    assert!(calls.borrow().is_empty());
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].status, TestStatus::Skipped);
    assert_eq!(report.results[0].command, None);
    assert_eq!(report.stats.skipped, 1);
    assert!(report.success());
}

#[test]
fn test_nested_dotnet_project_without_sdk_is_skipped() {
    let fixture = Fixture::new();
    fixture.file("src/Api.csproj", "<Project Sdk=\"Microsoft.NET.Sdk.Web\" />");
    let executor = ScriptedExecutor::default();

    let report = TestRunner::with_executor(executor).detect_and_run(&fixture.project(), Mode::All);

    assert_eq!(report.results.len(), 1);
    let result = &report.results[0];
    assert_eq!(result.status, TestStatus::Skipped);
    assert_eq!(result.duration, Duration::ZERO);
    assert!(result.error.contains("SDK"));
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_failed_command_fails_the_run() {
    let fixture = Fixture::new();
    fixture
        .file("composer.json", "{}")
        .file("vendor/bin/pest", "")
        .file("requirements.txt", "requests\n");
    let executor = ScriptedExecutor::default().respond(
        "vendor/bin/pest --parallel",
        Scripted::Exit {
            code: 2,
            stdout: "Tests: 1 failed, 9 passed",
            stderr: "l1\nl2\nl3\nl4\nl5\nl6\nl7",
        },
    );
    let calls = executor.calls();

    let report = TestRunner::with_executor(executor).detect_and_run(&fixture.project(), Mode::All);

    assert_eq!(
        lines(&calls),
        vec!["vendor/bin/pest --parallel", "python3 -m unittest discover"]
    );
    assert_eq!(report.results[0].status, TestStatus::Failed);
    assert_eq!(report.results[0].error, "l3\nl4\nl5\nl6\nl7");
    assert_eq!(report.results[0].duration, Duration::from_millis(250));
    assert_eq!(report.results[1].status, TestStatus::Passed);
    assert_eq!(report.stats.failed, 1);
    assert_eq!(report.stats.passed, 1);
    assert!(report.stats.is_consistent());
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_spawn_error_is_recorded_and_counted_as_failed() {
    let fixture = Fixture::new();
    fixture.file("pytest.ini", "[pytest]\n").file("pyproject.toml", "");
    let executor =
        ScriptedExecutor::default().respond("pytest", Scripted::SpawnError("sh: not found"));

    let report = TestRunner::with_executor(executor).detect_and_run(&fixture.project(), Mode::All);

    let result = &report.results[0];
    assert_eq!(result.status, TestStatus::Error);
    assert_eq!(result.duration, Duration::ZERO);
    assert_eq!(result.command.as_deref(), Some("pytest"));
    assert!(result.error.contains("sh: not found"));
    assert_eq!(report.stats.failed, 1);
    assert_eq!(report.stats.total, 1);
    assert!(!report.success());
}

#[test]
fn test_e2e_mode_only_runs_node_e2e_branch() {
    let fixture = Fixture::new();
    fixture
        .file("composer.json", "{}")
        .file("artisan", "")
        .dir("tests")
        .file(
            "package.json",
            r#"{ "scripts": { "test": "jest", "test:e2e": "playwright test" } }"#,
        )
        .file("App.sln", "")
        .file("pytest.ini", "")
        .file("requirements.txt", "");
    let executor = ScriptedExecutor::default();
    let calls = executor.calls();

    let report = TestRunner::with_executor(executor).detect_and_run(&fixture.project(), Mode::E2e);

    assert_eq!(lines(&calls), vec!["npm run test:e2e"]);
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].name, "Node.js E2E Test");
}

#[test]
fn test_ecosystems_run_in_fixed_order() {
    let fixture = Fixture::new();
    fixture
        .file("pyproject.toml", "")
        .file("Web.sln", "")
        .file(
            "package.json",
            r#"{ "devDependencies": { "react": "18.0.0", "vitest": "1.0.0", "cypress": "13.0.0" } }"#,
        )
        .file("composer.json", "{}")
        .file("vendor/bin/phpunit", "");
    let executor = ScriptedExecutor::default();
    let calls = executor.calls();

    let report = TestRunner::with_executor(executor).detect_and_run(&fixture.project(), Mode::All);

    assert_eq!(
        lines(&calls),
        vec!["npx vitest run", "npx cypress run", "python3 -m unittest discover"]
    );
    let names: Vec<&str> = report.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "PHPUnit",
            "React Vitest",
            "React Cypress E2E",
            "ASP.NET Test",
            "Python Unittest",
        ]
    );
    assert_eq!(report.stats.skipped, 2);
    assert_eq!(report.stats.passed, 3);
    assert!(report.stats.is_consistent());
}

#[test]
fn test_malformed_package_json_does_not_stop_the_run() {
    let fixture = Fixture::new();
    fixture
        .file("package.json", "{ \"scripts\": ")
        .file("requirements.txt", "");
    let executor = ScriptedExecutor::default();
    let calls = executor.calls();

    let report = TestRunner::with_executor(executor).detect_and_run(&fixture.project(), Mode::All);

    assert_eq!(lines(&calls), vec!["python3 -m unittest discover"]);
    assert_eq!(report.results[0].name, "Node.js package.json");
    assert_eq!(report.results[0].status, TestStatus::Error);
    assert_eq!(report.stats.failed, 1);
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_listener_sees_previews() {
    let fixture = Fixture::new();
    fixture
        .file("package.json", r#"{ "scripts": { "test": "jest" } }"#)
        .file("App.csproj", "");
    let executor = ScriptedExecutor::default().respond(
        "npm test",
        Scripted::Exit {
            code: 0,
            stdout: "1\n2\n3\n4\n5\n6\nTests: 6 passed\n",
            stderr: "",
        },
    );
    let listener = RecordingListener::default();
    let seen = Rc::clone(&listener.0);

    TestRunner::with_executor(executor)
        .with_listener(listener)
        .detect_and_run(&fixture.project(), Mode::Unit);

    assert_eq!(
        *seen.borrow(),
        vec![
            Seen::Detecting,
            Seen::Started("Node.js NPM Test".into()),
            Seen::Passed(
                "Node.js NPM Test".into(),
                vec!["3".into(), "4".into(), "5".into(), "6".into(), "Tests: 6 passed".into()]
            ),
            Seen::Skipped("ASP.NET Test".into(), "dotnet SDK is not installed".into()),
        ]
    );
}

#[test]
fn test_failure_preview_falls_back_to_stdout() {
    let fixture = Fixture::new();
    fixture.file("pytest.ini", "").file("requirements.txt", "");
    let executor = ScriptedExecutor::default().respond(
        "pytest",
        Scripted::Exit {
            code: 1,
            stdout: "FAILED test_app.py::test_home\n1 failed in 0.12s",
            stderr: "",
        },
    );
    let listener = RecordingListener::default();
    let seen = Rc::clone(&listener.0);

    let report = TestRunner::with_executor(executor)
        .with_listener(listener)
        .detect_and_run(&fixture.project(), Mode::All);

    assert!(seen.borrow().contains(&Seen::Failed(
        "Pytest (Python)".into(),
        vec!["FAILED test_app.py::test_home".into(), "1 failed in 0.12s".into()]
    )));
    assert_eq!(
        report.results[0].error,
        "FAILED test_app.py::test_home\n1 failed in 0.12s"
    );
}

#[test]
fn test_plan_only_executes_nothing() {
    let fixture = Fixture::new();
    fixture
        .file("composer.json", "{}")
        .file("vendor/bin/pest", "")
        .file("package.json", "not json");

    let plans = testpilot_core::plan_only(&fixture.project(), Mode::All);

    assert_eq!(plans.len(), 2);
    let (php, php_plan) = &plans[0];
    assert_eq!(*php, testpilot_core::Ecosystem::Php);
    assert_eq!(
        php_plan.as_ref().unwrap()[0].command(),
        Some("vendor/bin/pest --parallel")
    );
    assert!(plans[1].1.is_err());
}

#[test]
fn test_stats_invariant_holds_across_mixed_outcomes() {
    let fixture = Fixture::new();
    fixture
        .file("composer.json", "{}")
        .file("vendor/bin/phpunit", "")
        .file("package.json", r#"{ "scripts": { "test": "jest", "test:e2e": "cypress run" } }"#)
        .file("pytest.ini", "")
        .file("requirements.txt", "");
    let executor = ScriptedExecutor::default()
        .respond(
            "npm test",
            Scripted::Exit {
                code: 1,
                stdout: "",
                stderr: "boom",
            },
        )
        .respond("pytest", Scripted::SpawnError("no shell"));

    let mut runner = TestRunner::with_executor(executor);
    let report = {
        let project = fixture.project();
        for action in testpilot_core::dispatch::plan(testpilot_core::Ecosystem::Php, &project, Mode::All).unwrap() {
            runner.apply(&project, action);
        }
        assert_eq!(runner.stats().skipped, 1);
        runner.detect_and_run(&project, Mode::All)
    };

    assert_eq!(report.stats.total, report.results.len());
    assert!(report.stats.is_consistent());
    assert_eq!(report.stats.skipped, 2);
    assert_eq!(report.stats.passed, 1);
    assert_eq!(report.stats.failed, 2);
}
