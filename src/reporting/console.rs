use super::{pluralize, Reporter};
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

pub struct ConsoleReporter<W: Write> {
    writer: W,
    verbose: bool,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(writer: W, verbose: bool) -> Self {
        ConsoleReporter { writer, verbose }
    }

    fn status(success: bool) -> colored::ColoredString {
        if success {
            "ok".bold().green()
        } else {
            "FAILED".bold().red()
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn note(&mut self, message: &str) {
        writeln!(self.writer, "{}: {}", "note".bold().cyan(), message).unwrap();
    }

    fn run_start(&mut self, out_dir: &Path, runner_name: &str) {
        writeln!(
            self.writer,
            "running tests individually with {}; logging to {}\n",
            runner_name,
            out_dir.display()
        )
        .unwrap();
    }

    fn suite_start(&mut self, title: &str, total_tests: usize) {
        writeln!(
            self.writer,
            "{}: discovered {} {}",
            title.bold(),
            total_tests,
            pluralize(total_tests, "test", "tests")
        )
        .unwrap();
    }

    fn listing_failed(&mut self, title: &str, exit_code: i32, output: &str) {
        self.note(&format!(
            "listing {} exited with code {}; no tests were run",
            title, exit_code
        ));

        if self.verbose {
            writeln!(self.writer, "---- {} listing output ----\n{}", title, output).unwrap();
        }
    }

    fn test_start(&mut self, test_name: &str, test_number: usize, total_tests: usize) {
        write!(
            self.writer,
            "[{}/{}] test {}",
            test_number, total_tests, test_name
        )
        .unwrap();

        if self.verbose {
            writeln!(self.writer).unwrap();
        } else {
            write!(self.writer, " ... ").unwrap();
        }

        self.flush().unwrap();
    }

    fn test_result(&mut self, test_name: &str, success: bool, duration_ms: u64) {
        if self.verbose {
            writeln!(
                self.writer,
                "test {} ... {} ({}ms)",
                test_name,
                Self::status(success),
                duration_ms
            )
            .unwrap();
        } else {
            writeln!(self.writer, "{}", Self::status(success)).unwrap();
        }
    }

    fn test_output(&mut self, test_name: &str, output: &str) {
        if self.verbose {
            writeln!(self.writer, "---- {} output ----\n{}", test_name, output).unwrap();
        }
    }

    fn suite_summary(&mut self, title: &str, passed: usize, failed: usize, duration_secs: f64) {
        writeln!(
            self.writer,
            "{} result: {}. {} passed; {} failed; finished in {:.2}s\n",
            title,
            Self::status(failed == 0),
            passed,
            failed,
            duration_secs
        )
        .unwrap();
    }

    fn check_start(&mut self, check_name: &str) {
        write!(self.writer, "check {} ... ", check_name).unwrap();
        self.flush().unwrap();
    }

    fn check_result(&mut self, _: &str, success: bool, duration_secs: f64) {
        writeln!(self.writer, "{} ({:.2}s)", Self::status(success), duration_secs).unwrap();
    }

    fn log_written(&mut self, path: &Path) {
        if self.verbose {
            self.note(&format!("wrote {}", path.display()));
        }
    }

    fn run_finished(&mut self, out_dir: &Path) {
        writeln!(self.writer, "\nLogs written to: {}", out_dir.display()).unwrap();
        self.flush().unwrap();
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(verbose: bool, report: impl FnOnce(&mut ConsoleReporter<&mut Vec<u8>>)) -> String {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        let mut reporter = ConsoleReporter::new(&mut buffer, verbose);
        report(&mut reporter);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_progress_line() {
        let out = render(false, |r| {
            r.test_start("db::opens", 1, 2);
            r.test_result("db::opens", true, 12);
            r.test_start("db::closes", 2, 2);
            r.test_result("db::closes", false, 3);
        });
        assert_eq!(out, "[1/2] test db::opens ... ok\n[2/2] test db::closes ... FAILED\n");
    }

    #[test]
    fn test_output_only_when_verbose() {
        let quiet = render(false, |r| r.test_output("t", "hello"));
        let loud = render(true, |r| r.test_output("t", "hello"));

        assert!(quiet.is_empty());
        assert_eq!(loud, "---- t output ----\nhello\n");
    }

    #[test]
    fn test_suite_start_pluralizes() {
        let out = render(false, |r| {
            r.suite_start("Unit Tests", 1);
            r.suite_start("Property Tests", 0);
        });
        assert_eq!(
            out,
            "Unit Tests: discovered 1 test\nProperty Tests: discovered 0 tests\n"
        );
    }

    #[test]
    fn test_run_finished_prints_out_dir() {
        let out = render(false, |r| r.run_finished(Path::new("/ws/test_logs/2026-10-15_09-41-07")));
        assert_eq!(out, "\nLogs written to: /ws/test_logs/2026-10-15_09-41-07\n");
    }
}
