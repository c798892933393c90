use std::time::Duration;

use crate::process::CommandOutput;

/// Outcome of running a single test in isolation
#[derive(Debug, Clone)]
pub struct TestResult {
    pub name: String,
    pub exit_code: i32,
    pub duration: Duration,
    pub output: String,
}

impl TestResult {
    pub fn from_output(name: &str, output: CommandOutput) -> Self {
        TestResult {
            name: name.to_string(),
            exit_code: output.exit_code,
            duration: output.duration,
            output: output.output,
        }
    }

    pub fn passed(&self) -> bool {
        self.exit_code == 0
    }
}
