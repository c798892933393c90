use std::time::Duration;

use crate::testing::result::TestResult;

/// Format per-test results as the plain-text body of a suite log
pub fn format_results(title: &str, results: &[TestResult], extra_header: Option<&str>) -> String {
    let mut lines = Vec::new();
    if let Some(header) = extra_header {
        lines.push(header.to_string());
    }

    let passed = results.iter().filter(|r| r.passed()).count();
    let failed = results.len() - passed;
    let total: Duration = results.iter().map(|r| r.duration).sum();

    lines.push(format!("{} - total tests: {}", title, results.len()));
    lines.push(format!(
        "Summary: passed={} failed={} duration={:.2}s",
        passed,
        failed,
        total.as_secs_f64()
    ));
    lines.push(String::new());
    lines.push("Per-test results:".to_string());
    for result in results {
        lines.push(format!(
            "- {}: {} ({:.3}s)",
            result.name,
            if result.passed() { "ok" } else { "FAIL" },
            result.duration.as_secs_f64()
        ));
    }
    lines.push(String::new());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, exit_code: i32, millis: u64) -> TestResult {
        TestResult {
            name: name.to_string(),
            exit_code,
            duration: Duration::from_millis(millis),
            output: String::new(),
        }
    }

    #[test]
    fn test_empty_results() {
        let report = format_results("Unit Tests", &[], None);
        assert_eq!(
            report,
            "Unit Tests - total tests: 0\n\
             Summary: passed=0 failed=0 duration=0.00s\n\
             \n\
             Per-test results:\n"
        );
    }

    #[test]
    fn test_mixed_results() {
        let results = [result("t1", 0, 125), result("t2", 101, 4)];
        let report = format_results("Integration Tests", &results, None);

        assert_eq!(
            report,
            "Integration Tests - total tests: 2\n\
             Summary: passed=1 failed=1 duration=0.13s\n\
             \n\
             Per-test results:\n\
             - t1: ok (0.125s)\n\
             - t2: FAIL (0.004s)\n"
        );
    }

    #[test]
    fn test_extra_header_comes_first() {
        let report = format_results(
            "Property Tests",
            &[],
            Some("Listing failed (exit code 101)"),
        );
        assert!(report.starts_with(
            "Listing failed (exit code 101)\nProperty Tests - total tests: 0\n"
        ));
    }

    #[test]
    fn test_signal_exit_is_fail() {
        let report = format_results("Unit Tests", &[result("crashes", -11, 1)], None);
        assert!(report.contains("Summary: passed=0 failed=1"));
        assert!(report.contains("- crashes: FAIL (0.001s)"));
    }

    #[test]
    fn test_lines_follow_input_order() {
        let results = [result("zeta", 0, 0), result("alpha", 0, 0), result("zeta", 1, 0)];
        let report = format_results("Unit Tests", &results, None);
        let per_test: Vec<&str> = report.lines().filter(|l| l.starts_with("- ")).collect();

        assert_eq!(
            per_test,
            [
                "- zeta: ok (0.000s)",
                "- alpha: ok (0.000s)",
                "- zeta: FAIL (0.000s)"
            ]
        );
    }
}
