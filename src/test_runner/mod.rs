use std::process::Command;

mod cargo;

pub use cargo::CargoRunner;

/// Line suffix marking a test case in listing mode output
pub const TEST_MARKER: &str = ": test";

/// The build tool this orchestrator drives.
///
/// `selector` is the set of flags identifying which compiled target to act
/// on, e.g. `["--lib", "--bins"]` or `["--test", "integration_tests"]`. It is
/// passed through unchanged.
pub trait TestRunner {
    /// List test names for a target without running them
    fn list_command(&self, selector: &[String]) -> Command;

    /// Run only the test whose name is exactly `test_name`
    fn run_exact_command(&self, selector: &[String], test_name: &str) -> Command;

    /// Run the linter with the given warning categories enabled
    fn lint_command(&self, lints: &[String]) -> Command;

    /// Check formatting without rewriting files
    fn format_check_command(&self) -> Command;

    /// Human readable description of running a whole target, for log headers
    fn suite_description(&self, selector: &[String]) -> String;

    fn name(&self) -> &'static str;
}
