//! `.tests` fixture files that drive the parser end to end.
//!
//! A fixture file holds any number of cases:
//!
//! ```text
//! === star suffix
//! *.txt
//! ---
//! (seq (any-seq) (lit ".txt"))
//! ---
//! ```
//!
//! Lines outside a case that are blank or start with `#` are ignored. An
//! input whose first line is `# @extglob` enables extglob for that case.
//! The expected block is a structural rendering, `<error>`, or
//! `<infinite>` (an input that must be rejected quickly rather than parsed
//! forever; it is checked exactly like `<error>`).

pub mod runner;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub use runner::{
    CaseOutcome, FailedCase, FixtureReport, RunnerOptions, run_case, run_fixture_dir,
};

/// Input line that enables extglob for one case.
pub const EXTGLOB_DIRECTIVE: &str = "# @extglob";

/// Expected-output marker for inputs that must fail to parse.
pub const ERROR_MARKER: &str = "<error>";

/// Expected-output marker for inputs an unguarded parser would never finish.
pub const INFINITE_MARKER: &str = "<infinite>";

const CASE_HEADER: &str = "=== ";
const SECTION_SEPARATOR: &str = "---";

/// Fixture loading failures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture root does not exist.
    #[error("could not find fixture directory {}", .0.display())]
    MissingDirectory(PathBuf),
    /// A fixture file or directory could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// What a case expects from the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// Parsing must fail.
    Error,
    /// Parsing must fail, and must do so without unbounded work.
    Infinite,
    /// Parsing must succeed with this whitespace-normalized rendering.
    Structural(String),
}

impl Expectation {
    /// Returns `true` when the case expects a parse failure.
    pub fn expects_error(&self) -> bool {
        matches!(self, Self::Error | Self::Infinite)
    }
}

/// One case read from a fixture file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureCase {
    /// Text after `=== `.
    pub name: String,
    /// Raw input block, directive line included.
    pub input: String,
    /// Raw expected block with trailing blank lines removed.
    pub expected: String,
    /// 1-based line of the `=== ` header.
    pub line: usize,
}

impl FixtureCase {
    /// Returns `true` when the input starts with the extglob directive.
    pub fn extglob(&self) -> bool {
        self.directive_stripped().is_some()
    }

    /// Returns the input with the extglob directive line removed.
    pub fn pattern_input(&self) -> &str {
        self.directive_stripped().unwrap_or(&self.input)
    }

    /// Classifies the expected block.
    pub fn expectation(&self) -> Expectation {
        let normalized = normalize_whitespace(&self.expected);
        match normalized.as_str() {
            ERROR_MARKER => Expectation::Error,
            INFINITE_MARKER => Expectation::Infinite,
            _ => Expectation::Structural(normalized),
        }
    }

    fn directive_stripped(&self) -> Option<&str> {
        self.input
            .strip_prefix(EXTGLOB_DIRECTIVE)
            .and_then(|rest| rest.strip_prefix('\n'))
    }
}

/// Collapses every whitespace run to one space and trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parses fixture text into cases.
pub fn parse_fixtures(content: &str) -> Vec<FixtureCase> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut cases = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let Some(name) = lines[index].strip_prefix(CASE_HEADER) else {
            index += 1;
            continue;
        };
        let name = name.trim().to_string();
        let line = index + 1;
        index += 1;

        let mut input = Vec::new();
        while index < lines.len() && lines[index] != SECTION_SEPARATOR {
            input.push(lines[index]);
            index += 1;
        }
        if index < lines.len() {
            index += 1;
        }

        let mut expected = Vec::new();
        while index < lines.len()
            && lines[index] != SECTION_SEPARATOR
            && !lines[index].starts_with(CASE_HEADER)
        {
            expected.push(lines[index]);
            index += 1;
        }
        if index < lines.len() && lines[index] == SECTION_SEPARATOR {
            index += 1;
        }
        while expected.last().is_some_and(|last| last.trim().is_empty()) {
            expected.pop();
        }

        cases.push(FixtureCase {
            name,
            input: input.join("\n"),
            expected: expected.join("\n"),
            line,
        });
    }

    cases
}

/// Reads and parses one fixture file.
pub fn load_fixture_file(path: &Path) -> Result<Vec<FixtureCase>, FixtureError> {
    let content = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cases = parse_fixtures(&content);
    debug!(path = %path.display(), cases = cases.len(), "loaded fixture file");
    Ok(cases)
}

/// Recursively lists `*.tests` files under `root`, sorted by path.
pub fn find_fixture_files(root: &Path) -> Result<Vec<PathBuf>, FixtureError> {
    if !root.is_dir() {
        return Err(FixtureError::MissingDirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    collect_fixture_files(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_fixture_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), FixtureError> {
    let io_error = |source| FixtureError::Io {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_dir() {
            collect_fixture_files(&path, files)?;
        } else if path.extension().is_some_and(|extension| extension == "tests") {
            files.push(path);
        }
    }
    Ok(())
}
