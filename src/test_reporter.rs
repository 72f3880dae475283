use crate::diff::render_diff;
use crate::error::TestFailure;
use crate::state::RunSummary;
use crate::test_case::TestResult;
use colored::Colorize;
use std::io::{self, stdout, Write};
use std::process::ExitCode;

fn write_failure(out: &mut impl Write, failure: &TestFailure) -> io::Result<()> {
    match failure {
        TestFailure::Assertion(assertion) if assertion.is_text_diff() => {
            writeln!(out, "{}:", assertion.message)?;
            write!(out, "{}", render_diff(&assertion.expected, &assertion.actual))
        }
        other => writeln!(out, "{other}"),
    }
}

pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Running playground tests...".blue().bold())?;
    writeln!(out)
}

/// Writes one entry per result followed by the totals.
///
/// When `quiet` is set, passing cases are left out.
pub fn write_report(
    out: &mut impl Write,
    results: &[TestResult],
    summary: &RunSummary,
    quiet: bool,
) -> io::Result<()> {
    for result in results {
        match &result.error {
            Some(failure) => {
                write!(out, "{}: ", result.name)?;
                writeln!(out, "{}:", "Failed".red().bold())?;
                write_failure(out, failure)?;
                writeln!(out)?;
            }
            None => {
                if !quiet {
                    writeln!(out, "{}: {}", result.name, "PASSED".green().bold())?;
                }
            }
        }
    }

    writeln!(
        out,
        "{} tests executed in: {:.4}s",
        summary.total,
        summary.elapsed.as_secs_f32()
    )?;

    let result_string = format!("[{}/{}] tests pass", summary.passed, summary.total);
    if summary.all_passed() {
        writeln!(out, "{}", result_string.green().bold())
    } else {
        writeln!(out, "{}", result_string.red().bold())
    }
}

pub fn report_tests(results: &[TestResult], summary: &RunSummary, quiet: bool) -> ExitCode {
    let mut out = stdout().lock();
    if let Err(error) = write_report(&mut out, results, summary, quiet) {
        eprintln!("Failed to write test report: {}", error);
        return ExitCode::FAILURE;
    }

    if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
