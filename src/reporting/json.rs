use super::Reporter;
use serde::Serialize;
use std::{
    io::{self, Write},
    path::Path,
};

#[derive(Serialize)]
struct JsonEvent {
    event_type: String,
    payload: serde_json::Value,
    timestamp: u128,
}

pub struct JsonReporter<W: Write> {
    writer: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(writer: W) -> Self {
        JsonReporter { writer }
    }

    /// Helper method to safely emit an event, handling all potential errors
    fn emit_event(&mut self, event_type: &str, payload: serde_json::Value) {
        let timestamp = match std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
            Ok(duration) => duration.as_millis(),
            Err(e) => {
                eprintln!("Error getting system time: {}", e);
                0 // Fallback to 0 on error
            }
        };

        let event = JsonEvent {
            event_type: event_type.to_string(),
            payload,
            timestamp,
        };

        let json_string = match serde_json::to_string(&event) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("JSON serialization error: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(self.writer, "{}", json_string) {
            eprintln!("Write error: {}", e);
        }

        let _ = self.flush();
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn note(&mut self, message: &str) {
        self.emit_event("note", serde_json::json!({ "message": message }));
    }

    fn run_start(&mut self, out_dir: &Path, runner_name: &str) {
        self.emit_event(
            "run_start",
            serde_json::json!({
                "out_dir": out_dir.display().to_string(),
                "runner": runner_name
            }),
        );
    }

    fn suite_start(&mut self, title: &str, total_tests: usize) {
        self.emit_event(
            "suite_start",
            serde_json::json!({
                "suite": title,
                "total_tests": total_tests
            }),
        );
    }

    fn listing_failed(&mut self, title: &str, exit_code: i32, output: &str) {
        self.emit_event(
            "listing_failed",
            serde_json::json!({
                "suite": title,
                "exit_code": exit_code,
                "output": output
            }),
        );
    }

    fn test_start(&mut self, test_name: &str, test_number: usize, total_tests: usize) {
        self.emit_event(
            "test_start",
            serde_json::json!({
                "test": test_name,
                "test_number": test_number,
                "total_tests": total_tests
            }),
        );
    }

    fn test_result(&mut self, test_name: &str, success: bool, duration_ms: u64) {
        self.emit_event(
            "test_result",
            serde_json::json!({
                "test": test_name,
                "success": success,
                "duration_ms": duration_ms
            }),
        );
    }

    fn test_output(&mut self, test_name: &str, output: &str) {
        self.emit_event(
            "test_output",
            serde_json::json!({
                "test": test_name,
                "output": output
            }),
        );
    }

    fn suite_summary(&mut self, title: &str, passed: usize, failed: usize, duration_secs: f64) {
        self.emit_event(
            "suite_summary",
            serde_json::json!({
                "suite": title,
                "passed": passed,
                "failed": failed,
                "duration_secs": duration_secs
            }),
        );
    }

    fn check_start(&mut self, check_name: &str) {
        self.emit_event("check_start", serde_json::json!({ "check": check_name }));
    }

    fn check_result(&mut self, check_name: &str, success: bool, duration_secs: f64) {
        self.emit_event(
            "check_result",
            serde_json::json!({
                "check": check_name,
                "success": success,
                "duration_secs": duration_secs
            }),
        );
    }

    fn log_written(&mut self, path: &Path) {
        self.emit_event(
            "log_written",
            serde_json::json!({ "path": path.display().to_string() }),
        );
    }

    fn run_finished(&mut self, out_dir: &Path) {
        self.emit_event(
            "run_finished",
            serde_json::json!({ "out_dir": out_dir.display().to_string() }),
        );
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
