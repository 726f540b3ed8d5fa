use shglob::fixture::{FailedCase, FixtureReport};

const RULE_WIDTH: usize = 60;

/// Renders the failure block (capped at `max_failures`, 0 = all) and the summary line.
pub fn render(report: &FixtureReport, max_failures: usize) -> String {
    let mut out = String::new();

    if !report.failures.is_empty() {
        let rule = "=".repeat(RULE_WIDTH);
        out.push_str(&format!("{rule}\nFAILURES\n{rule}\n"));

        let shown = if max_failures > 0 {
            max_failures.min(report.failures.len())
        } else {
            report.failures.len()
        };
        for failure in &report.failures[..shown] {
            out.push_str(&render_failure(failure));
        }
        if shown < report.failed {
            out.push_str(&format!("\n... and {} more failures\n", report.failed - shown));
        }
    }

    out.push_str(&format!(
        "shglob: {} passed, {} failed in {:.2}s",
        report.passed,
        report.failed,
        report.elapsed.as_secs_f64()
    ));
    out
}

fn render_failure(failure: &FailedCase) -> String {
    let mut out = format!(
        "\n{}:{} {}\n  Input:    {:?}\n  Expected: {}\n  Actual:   {}\n",
        failure.path, failure.line, failure.name, failure.input, failure.expected, failure.actual
    );
    if let Some(message) = &failure.message {
        out.push_str(&format!("  Error:    {message}\n"));
    }
    out
}
