use std::path::Path;

pub mod console;
pub mod json;

/// Reporter trait for live progress output
pub trait Reporter {
    /// Report a note message
    fn note(&mut self, message: &str);

    /// Report the start of a run and where its logs go
    fn run_start(&mut self, out_dir: &Path, runner_name: &str);

    /// Report a suite whose tests were listed
    fn suite_start(&mut self, title: &str, total_tests: usize);

    /// Report a suite whose listing command failed
    fn listing_failed(&mut self, title: &str, exit_code: i32, output: &str);

    /// Report the test start
    fn test_start(&mut self, test_name: &str, test_number: usize, total_tests: usize);

    /// Report a test result (success or failure)
    fn test_result(&mut self, test_name: &str, success: bool, duration_ms: u64);

    /// Report the captured output of a finished test
    fn test_output(&mut self, test_name: &str, output: &str);

    /// Report suite summary
    fn suite_summary(&mut self, title: &str, passed: usize, failed: usize, duration_secs: f64);

    /// Report the start of a static check
    fn check_start(&mut self, check_name: &str);

    /// Report a static check result
    fn check_result(&mut self, check_name: &str, success: bool, duration_secs: f64);

    /// Report a log file that was written
    fn log_written(&mut self, path: &Path);

    /// Report the end of the run
    fn run_finished(&mut self, out_dir: &Path);

    /// Flush any buffered output
    fn flush(&mut self) -> std::io::Result<()>;
}

/// Return the singular or plural form of a word based on the count
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        singular.to_string()
    } else {
        plural.to_string()
    }
}
