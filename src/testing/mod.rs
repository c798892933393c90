pub mod discover;
pub mod executor;
pub mod plan;
pub mod result;


use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::error::AppError;
use crate::logs::{format_results, write_log};
use crate::process::{command_line, run_captured};
use crate::reporting::Reporter;
use crate::test_runner::TestRunner;
use discover::{discover_tests, Discovery};
use executor::TestExecutor;
use plan::{CheckKind, RunPlan, StaticCheck, Suite};
use result::TestResult;

/// Run every suite and check of the plan into `<log_root>/<stamp>`.
///
/// Test and check failures only show up in the logs; an `Err` means the run
/// itself could not continue. `interrupted` is checked around every child
/// process; once set, the run stops with `AppError::Interrupted` and the
/// current phase's log is not written.
pub fn run_all(
    plan: &RunPlan,
    stamp: &str,
    runner: &dyn TestRunner,
    reporter: &mut dyn Reporter,
    interrupted: &AtomicBool,
) -> Result<PathBuf, AppError> {
    let out_dir = plan.log_root.join(stamp);
    reporter.run_start(&out_dir, runner.name());

    for suite in &plan.suites {
        run_suite(plan, suite, stamp, &out_dir, runner, reporter, interrupted)?;
    }

    for check in &plan.checks {
        run_check(plan, check, &out_dir, runner, reporter, interrupted)?;
    }

    check_interrupt(interrupted)?;
    reporter.run_finished(&out_dir);
    Ok(out_dir)
}

fn check_interrupt(interrupted: &AtomicBool) -> Result<(), AppError> {
    if interrupted.load(Ordering::SeqCst) {
        return Err(AppError::Interrupted);
    }
    Ok(())
}

fn run_suite(
    plan: &RunPlan,
    suite: &Suite,
    stamp: &str,
    out_dir: &Path,
    runner: &dyn TestRunner,
    reporter: &mut dyn Reporter,
    interrupted: &AtomicBool,
) -> Result<PathBuf, AppError> {
    check_interrupt(interrupted)?;
    let discovery = discover_tests(runner, &plan.workspace_root, &suite.selector)?;
    check_interrupt(interrupted)?;

    let extra_header = match &discovery {
        Discovery::Listed(names) => {
            reporter.suite_start(&suite.title, names.len());
            None
        }
        Discovery::ListingFailed { exit_code, output } => {
            reporter.listing_failed(&suite.title, *exit_code, output);
            Some(format!(
                "Listing failed (exit code {}); no tests were run",
                exit_code
            ))
        }
    };

    let names = discovery.names();
    let results = if names.is_empty() {
        Vec::new()
    } else {
        TestExecutor::new(&plan.workspace_root, runner, &mut *reporter, interrupted)
            .execute(&suite.selector, names)?
    };

    let passed = results.iter().filter(|r| r.passed()).count();
    let duration: Duration = results.iter().map(|r: &TestResult| r.duration).sum();
    reporter.suite_summary(
        &suite.title,
        passed,
        results.len() - passed,
        duration.as_secs_f64(),
    );

    let header = format!(
        "Command: {} (individually)\nStarted: {}",
        runner.suite_description(&suite.selector),
        stamp
    );
    let body = format_results(&suite.title, &results, extra_header.as_deref());
    let path = write_log(out_dir, &suite.log_name, &header, &body)?;
    reporter.log_written(&path);

    Ok(path)
}

fn run_check(
    plan: &RunPlan,
    check: &StaticCheck,
    out_dir: &Path,
    runner: &dyn TestRunner,
    reporter: &mut dyn Reporter,
    interrupted: &AtomicBool,
) -> Result<PathBuf, AppError> {
    check_interrupt(interrupted)?;
    reporter.check_start(&check.log_name);

    let mut cmd = match &check.kind {
        CheckKind::Lint(lints) => runner.lint_command(lints),
        CheckKind::FormatCheck => runner.format_check_command(),
    };
    cmd.current_dir(&plan.workspace_root);
    let command = command_line(&cmd);

    let output = run_captured(cmd)?;
    let duration_secs = output.duration.as_secs_f64();
    reporter.check_result(&check.log_name, output.success(), duration_secs);
    check_interrupt(interrupted)?;

    let header = format!(
        "Command: {}\nDuration: {:.2}s\nResult: {}",
        command,
        duration_secs,
        if output.success() { "ok" } else { "FAIL" }
    );
    let path = write_log(out_dir, &check.log_name, &header, &output.output)?;
    reporter.log_written(&path);

    Ok(path)
}
