use std::path::Path;
use std::sync::atomic::AtomicBool;

use super::check_interrupt;
use super::result::TestResult;
use crate::error::AppError;
use crate::process::run_captured;
use crate::reporting::Reporter;
use crate::test_runner::TestRunner;

/// Runs the tests of one target one at a time, in discovery order
pub struct TestExecutor<'a> {
    workspace_root: &'a Path,
    runner: &'a dyn TestRunner,
    reporter: &'a mut dyn Reporter,
    interrupted: &'a AtomicBool,
}

impl<'a> TestExecutor<'a> {
    pub fn new(
        workspace_root: &'a Path,
        runner: &'a dyn TestRunner,
        reporter: &'a mut dyn Reporter,
        interrupted: &'a AtomicBool,
    ) -> Self {
        TestExecutor {
            workspace_root,
            runner,
            reporter,
            interrupted,
        }
    }

    /// One result per name, same order; failures are data, never retried.
    ///
    /// Stops with `AppError::Interrupted` as soon as the interrupt flag is
    /// seen, before or after any test.
    pub fn execute(
        &mut self,
        selector: &[String],
        names: &[String],
    ) -> Result<Vec<TestResult>, AppError> {
        let mut results = Vec::with_capacity(names.len());

        for (index, name) in names.iter().enumerate() {
            check_interrupt(self.interrupted)?;
            let result = self.execute_single_test(selector, name, index + 1, names.len())?;
            results.push(result);
        }
        check_interrupt(self.interrupted)?;

        Ok(results)
    }

    fn execute_single_test(
        &mut self,
        selector: &[String],
        name: &str,
        test_number: usize,
        total_tests: usize,
    ) -> Result<TestResult, AppError> {
        self.reporter.test_start(name, test_number, total_tests);

        let mut cmd = self.runner.run_exact_command(selector, name);
        cmd.current_dir(self.workspace_root);
        let output = run_captured(cmd)?;

        self.reporter
            .test_result(name, output.success(), output.duration.as_millis() as u64);
        self.reporter.test_output(name, &output.output);

        Ok(TestResult::from_output(name, output))
    }
}
