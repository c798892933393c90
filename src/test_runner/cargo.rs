use super::TestRunner;
use std::process::Command;

pub struct CargoRunner;

impl CargoRunner {
    fn test_command(&self, selector: &[String]) -> Command {
        let mut cmd = Command::new("cargo");
        cmd.args(["test", "-q"]);
        cmd.args(selector);
        cmd
    }
}

impl TestRunner for CargoRunner {
    fn list_command(&self, selector: &[String]) -> Command {
        let mut cmd = self.test_command(selector);
        cmd.args(["--", "--list"]);
        cmd
    }

    fn run_exact_command(&self, selector: &[String], test_name: &str) -> Command {
        // --exact keeps the filter from matching other tests by substring
        let mut cmd = self.test_command(selector);
        cmd.arg(test_name);
        cmd.args(["--", "--exact", "--nocapture"]);
        cmd
    }

    fn lint_command(&self, lints: &[String]) -> Command {
        let mut cmd = Command::new("cargo");
        cmd.args(["clippy", "--all-targets", "--"]);
        for lint in lints {
            cmd.args(["-W", lint]);
        }
        cmd
    }

    fn format_check_command(&self) -> Command {
        let mut cmd = Command::new("cargo");
        cmd.args(["fmt", "--all", "--", "--check"]);
        cmd
    }

    fn suite_description(&self, selector: &[String]) -> String {
        let mut parts = vec!["cargo".to_string(), "test".to_string(), "-q".to_string()];
        parts.extend(selector.iter().cloned());
        parts.join(" ")
    }

    fn name(&self) -> &'static str {
        "cargo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::command_line;

    fn selector(flags: &[&str]) -> Vec<String> {
        flags.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_list_command() {
        let cmd = CargoRunner.list_command(&selector(&["--lib", "--bins"]));
        assert_eq!(command_line(&cmd), "cargo test -q --lib --bins -- --list");
    }

    #[test]
    fn test_run_exact_command() {
        let cmd = CargoRunner
            .run_exact_command(&selector(&["--test", "integration_tests"]), "db::opens");
        assert_eq!(
            command_line(&cmd),
            "cargo test -q --test integration_tests db::opens -- --exact --nocapture"
        );
    }

    #[test]
    fn test_lint_command() {
        let cmd = CargoRunner.lint_command(&selector(&["clippy::pedantic", "clippy::perf"]));
        assert_eq!(
            command_line(&cmd),
            "cargo clippy --all-targets -- -W clippy::pedantic -W clippy::perf"
        );
    }

    #[test]
    fn test_suite_description() {
        assert_eq!(
            CargoRunner.suite_description(&selector(&["--lib", "--bins"])),
            "cargo test -q --lib --bins"
        );
    }
}
