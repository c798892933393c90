use std::path::Path;

use crate::error::AppError;
use crate::process::run_captured;
use crate::test_runner::{TestRunner, TEST_MARKER};

/// What listing a target produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    Listed(Vec<String>),
    /// The listing command exited non-zero; treated as no tests to run
    ListingFailed { exit_code: i32, output: String },
}

impl Discovery {
    pub fn names(&self) -> &[String] {
        match self {
            Discovery::Listed(names) => names,
            Discovery::ListingFailed { .. } => &[],
        }
    }
}

/// Ask the runner to list the tests of a target
pub fn discover_tests(
    runner: &dyn TestRunner,
    workspace_root: &Path,
    selector: &[String],
) -> Result<Discovery, AppError> {
    let mut cmd = runner.list_command(selector);
    cmd.current_dir(workspace_root);
    let listing = run_captured(cmd)?;

    if !listing.success() {
        return Ok(Discovery::ListingFailed {
            exit_code: listing.exit_code,
            output: listing.output,
        });
    }

    Ok(Discovery::Listed(parse_test_list(&listing.output)))
}

/// Extract test names from listing output, in order, duplicates kept
pub fn parse_test_list(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.trim().strip_suffix(TEST_MARKER))
        .map(str::to_string)
        .collect()
}
