use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use error::AppError;

mod error;
mod format;
mod logs;
mod metadata;
mod process;
mod reporting;
mod signal;
mod test_runner;
mod testing;

use reporting::Reporter;
use test_runner::CargoRunner;
use testing::plan::RunPlan;

/// Configuration for the test-logs subcommand
#[derive(Parser)]
#[command(
    name = "cargo",
    bin_name = "cargo",
    styles = clap_cargo::style::CLAP_STYLING,
)]
enum CargoCli {
    TestLogs(TestLogsArgs),
}

#[derive(clap::Args)]
#[command(
    version,
    about = "Run every test of the workspace in isolation and write timestamped logs"
)]
struct TestLogsArgs {
    #[command(flatten)]
    manifest: clap_cargo::Manifest,

    /// Directory that receives one timestamped folder per run [default: <workspace>/test_logs]
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Name of the integration test target
    #[arg(long, default_value = "integration_tests")]
    integration_test: String,

    /// Name of the property test target
    #[arg(long, default_value = "prop_tests")]
    property_test: String,

    /// Display the output of every test while running
    #[arg(long, short)]
    verbose: bool,

    /// Output progress in JSON format for machine consumption
    #[arg(long, short)]
    json: bool,
}

fn main() {
    if let Err(err) = finish(run(), signal::interrupted()) {
        err.report();
        std::process::exit(err.exit_code());
    }
}

/// A recorded Ctrl-C wins over whatever the run returned: a child torn down
/// by it can surface as any error, and one landing after the last phase
/// still has to exit with 130.
fn finish(result: Result<PathBuf, AppError>, interrupted: bool) -> Result<PathBuf, AppError> {
    match result {
        _ if interrupted => Err(AppError::Interrupted),
        result => result,
    }
}

fn run() -> Result<PathBuf, AppError> {
    let CargoCli::TestLogs(args) = CargoCli::parse();

    signal::install_interrupt_handler();

    let workspace_root = metadata::get_workspace_root(args.manifest.manifest_path.as_deref())?;
    let plan = RunPlan::new(
        workspace_root,
        args.log_dir,
        &args.integration_test,
        &args.property_test,
    );

    // Create a reporter
    let mut reporter = if args.json {
        Box::new(reporting::json::JsonReporter::new(stdout())) as Box<dyn Reporter>
    } else {
        Box::new(reporting::console::ConsoleReporter::new(
            stdout(),
            args.verbose,
        )) as Box<dyn Reporter>
    };

    let stamp = logs::run_stamp();
    testing::run_all(
        &plan,
        &stamp,
        &CargoRunner,
        reporter.as_mut(),
        signal::interrupt_flag(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_arguments_use_defaults() {
        let CargoCli::TestLogs(args) = CargoCli::parse_from(["cargo", "test-logs"]);

        assert!(args.manifest.manifest_path.is_none());
        assert!(args.log_dir.is_none());
        assert_eq!(args.integration_test, "integration_tests");
        assert_eq!(args.property_test, "prop_tests");
        assert!(!args.verbose && !args.json);
    }

    #[test]
    fn test_interrupt_overrides_outcome() {
        let ok = finish(Ok(PathBuf::from("/ws/test_logs/stamp")), true);
        assert_eq!(ok.unwrap_err().exit_code(), 130);

        let failed = finish(
            Err(AppError::CommandFailed {
                command: "cargo test -q --lib --bins -- --list".to_string(),
                reason: "broken pipe".to_string(),
            }),
            true,
        );
        assert_eq!(failed.unwrap_err().exit_code(), 130);
    }

    #[test]
    fn test_uninterrupted_outcome_passes_through() {
        let ok = finish(Ok(PathBuf::from("/ws/test_logs/stamp")), false);
        assert_eq!(ok.unwrap(), PathBuf::from("/ws/test_logs/stamp"));

        let failed = finish(Err(AppError::Other(anyhow::anyhow!("disk full"))), false);
        assert_eq!(failed.unwrap_err().exit_code(), 1);
    }

    #[test]
    fn test_overrides() {
        let CargoCli::TestLogs(args) = CargoCli::parse_from([
            "cargo",
            "test-logs",
            "--manifest-path",
            "/ws/Cargo.toml",
            "--log-dir",
            "/tmp/logs",
            "--property-test",
            "props",
            "--json",
        ]);

        assert_eq!(
            args.manifest.manifest_path,
            Some(PathBuf::from("/ws/Cargo.toml"))
        );
        assert_eq!(args.log_dir, Some(PathBuf::from("/tmp/logs")));
        assert_eq!(args.property_test, "props");
        assert!(args.json);
    }
}
