use std::path::PathBuf;

/// Warning categories enabled for the lint check
pub const LINT_CATEGORIES: [&str; 8] = [
    "clippy::pedantic",
    "clippy::nursery",
    "clippy::perf",
    "clippy::correctness",
    "clippy::suspicious",
    "clippy::style",
    "clippy::complexity",
    "clippy::restriction",
];

#[derive(Debug)]
pub struct RunPlan {
    pub workspace_root: PathBuf,
    pub log_root: PathBuf,
    pub suites: Vec<Suite>,
    pub checks: Vec<StaticCheck>,
}

/// A test target whose cases are listed and run one by one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suite {
    pub log_name: String,
    pub title: String,
    pub selector: Vec<String>,
}

/// A one-shot check logged without per-case breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCheck {
    pub log_name: String,
    pub kind: CheckKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckKind {
    Lint(Vec<String>),
    FormatCheck,
}

impl Suite {
    pub fn new(log_name: &str, title: &str, selector: &[&str]) -> Self {
        Suite {
            log_name: log_name.to_string(),
            title: title.to_string(),
            selector: selector.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RunPlan {
    /// The standard run: unit, integration and property suites, then clippy
    /// and rustfmt
    pub fn new(
        workspace_root: PathBuf,
        log_root: Option<PathBuf>,
        integration_test: &str,
        property_test: &str,
    ) -> Self {
        let log_root = log_root.unwrap_or_else(|| workspace_root.join("test_logs"));

        let suites = vec![
            Suite::new("unit_tests", "Unit Tests", &["--lib", "--bins"]),
            Suite::new(
                "integration_tests",
                "Integration Tests",
                &["--test", integration_test],
            ),
            Suite::new("property_tests", "Property Tests", &["--test", property_test]),
        ];

        let checks = vec![
            StaticCheck {
                log_name: "clippy".to_string(),
                kind: CheckKind::Lint(LINT_CATEGORIES.iter().map(|l| l.to_string()).collect()),
            },
            StaticCheck {
                log_name: "fmt".to_string(),
                kind: CheckKind::FormatCheck,
            },
        ];

        RunPlan {
            workspace_root,
            log_root,
            suites,
            checks,
        }
    }
}
