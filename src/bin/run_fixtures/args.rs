use clap::Parser;
use std::path::PathBuf;

/// run_fixtures: check the pattern parser against `.tests` fixture files.
#[derive(Debug, Parser)]
#[command(name = "run_fixtures")]
#[command(about = "Run shglob fixture files and report mismatches", long_about = None)]
pub struct Cli {
    /// Fixture directory (defaults to tests/fixtures, then tests)
    pub test_dir: Option<PathBuf>,

    /// Print PASS/FAIL for every case
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Only run cases whose name or path contains PAT
    #[arg(short = 'f', long, value_name = "PAT")]
    pub filter: Option<String>,

    /// Show at most N failures (0 = unlimited)
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub max_failures: usize,

    /// Extglob nesting ceiling passed to the parser
    #[arg(long, value_name = "N", default_value_t = 256)]
    pub max_nesting: usize,

    /// Per-case timeout in seconds
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub timeout_secs: u64,
}
