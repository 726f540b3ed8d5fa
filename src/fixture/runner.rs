//! Fixture execution with per-case timeout and panic containment.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::fixture::{
    ERROR_MARKER, Expectation, FixtureCase, FixtureError, find_fixture_files, load_fixture_file,
    normalize_whitespace,
};
use crate::parser::{ParseOptions, Parser};

/// Runner configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerOptions {
    /// Nesting ceiling handed to every parse.
    pub max_nesting: usize,
    /// Wall-clock budget for one case.
    pub timeout: Duration,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            max_nesting: ParseOptions::default().max_nesting,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Result of running one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    /// Whether the parser behaved as the case expects.
    pub passed: bool,
    /// Structural rendering, or a marker such as `<error>` or `<timeout>`.
    pub actual: String,
    /// Parser error, panic payload, or mismatch explanation.
    pub message: Option<String>,
}

impl CaseOutcome {
    fn pass(actual: impl Into<String>) -> Self {
        Self {
            passed: true,
            actual: actual.into(),
            message: None,
        }
    }

    fn fail(actual: impl Into<String>, message: Option<String>) -> Self {
        Self {
            passed: false,
            actual: actual.into(),
            message,
        }
    }
}

/// A failed case with enough context to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedCase {
    /// Fixture path relative to the fixture root's parent.
    pub path: String,
    /// 1-based line of the case header.
    pub line: usize,
    /// Case name.
    pub name: String,
    /// Raw case input.
    pub input: String,
    /// Raw expected block.
    pub expected: String,
    /// What the parser produced.
    pub actual: String,
    /// Error or panic text, when any.
    pub message: Option<String>,
}

/// Aggregate result of a fixture run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureReport {
    /// Number of passing cases.
    pub passed: usize,
    /// Number of failing cases.
    pub failed: usize,
    /// Failing cases in execution order.
    pub failures: Vec<FailedCase>,
    /// Wall-clock time of the whole run.
    pub elapsed: Duration,
}

impl FixtureReport {
    /// Returns `true` when no case failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Runs one case on a worker thread, bounded by `options.timeout`.
///
/// A worker that exceeds the timeout is abandoned, not joined.
pub fn run_case(case: &FixtureCase, options: &RunnerOptions) -> CaseOutcome {
    let input = case.pattern_input().to_string();
    let expectation = case.expectation();
    let parse_options = ParseOptions::default()
        .with_extglob(case.extglob())
        .with_max_nesting(options.max_nesting);

    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let _ = sender.send(evaluate(&input, parse_options, &expectation));
    });

    match receiver.recv_timeout(options.timeout) {
        Ok(outcome) => outcome,
        Err(_) => {
            warn!(name = %case.name, line = case.line, "fixture case timed out");
            CaseOutcome::fail(
                "<timeout>",
                Some(format!("case timed out after {:?}", options.timeout)),
            )
        }
    }
}

/// Runs every case under `root` whose name or path contains `filter`.
///
/// `observe` sees each executed case with its pass/fail state, in order.
pub fn run_fixture_dir(
    root: &Path,
    filter: Option<&str>,
    options: &RunnerOptions,
    mut observe: impl FnMut(&str, &FixtureCase, bool),
) -> Result<FixtureReport, FixtureError> {
    let started = Instant::now();
    let base = root.parent().unwrap_or(root);
    let mut report = FixtureReport::default();

    for path in find_fixture_files(root)? {
        let relative = path
            .strip_prefix(base)
            .unwrap_or(&path)
            .display()
            .to_string();

        for case in load_fixture_file(&path)? {
            if let Some(filter) = filter
                && !case.name.contains(filter)
                && !relative.contains(filter)
            {
                continue;
            }

            let outcome = run_case(&case, options);
            observe(&relative, &case, outcome.passed);
            if outcome.passed {
                report.passed += 1;
            } else {
                report.failed += 1;
                report.failures.push(FailedCase {
                    path: relative.clone(),
                    line: case.line,
                    name: case.name.clone(),
                    input: case.input.clone(),
                    expected: case.expected.clone(),
                    actual: outcome.actual,
                    message: outcome.message,
                });
            }
        }
    }

    report.elapsed = started.elapsed();
    debug!(
        passed = report.passed,
        failed = report.failed,
        "fixture run finished"
    );
    Ok(report)
}

fn evaluate(input: &str, options: ParseOptions, expectation: &Expectation) -> CaseOutcome {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut parser = Parser::new(options);
        parser.parse(input).map(|patterns| patterns.to_structural())
    }));

    match result {
        Ok(Ok(actual)) => match expectation {
            Expectation::Structural(expected) => {
                if normalize_whitespace(&actual) == *expected {
                    CaseOutcome::pass(actual)
                } else {
                    CaseOutcome::fail(actual, None)
                }
            }
            Expectation::Error | Expectation::Infinite => CaseOutcome::fail(
                actual,
                Some("expected parse error but got successful parse".to_string()),
            ),
        },
        Ok(Err(error)) => {
            if expectation.expects_error() {
                CaseOutcome::pass(ERROR_MARKER)
            } else {
                CaseOutcome::fail("<parse error>", Some(error.to_string()))
            }
        }
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|text| (*text).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            CaseOutcome::fail("<panic>", Some(message))
        }
    }
}
