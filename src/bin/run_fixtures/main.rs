mod args;
mod report;

use crate::args::Cli;
use clap::Parser;
use shglob::fixture::{RunnerOptions, run_fixture_dir};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let root = resolve_test_dir(&cli);
    let options = RunnerOptions {
        max_nesting: cli.max_nesting,
        timeout: Duration::from_secs(cli.timeout_secs),
    };

    let verbose = cli.verbose;
    let result = run_fixture_dir(&root, cli.filter.as_deref(), &options, |path, case, passed| {
        if verbose {
            let status = if passed { "PASS" } else { "FAIL" };
            println!("{status} {path}:{} {}", case.line, case.name);
        }
    });

    let report = match result {
        Ok(report) => report,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::from(2);
        }
    };

    println!("{}", report::render(&report, cli.max_failures));

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn resolve_test_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.test_dir {
        return dir.clone();
    }
    let fixtures = Path::new("tests").join("fixtures");
    if fixtures.is_dir() {
        fixtures
    } else {
        PathBuf::from("tests")
    }
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}
