use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::AppError;

pub mod summary;

pub use summary::format_results;

/// Directory-name stamp for a run, e.g. `2026-10-15_09-41-07`
pub fn run_stamp() -> String {
    chrono::Local::now().format("%Y-%m-%d_%H-%M-%S").to_string()
}

/// Write `{base_dir}/{name}.log` as the header, a line break if the header
/// lacks one, then the body verbatim.
///
/// Creates `base_dir` when missing and replaces any existing file.
pub fn write_log(
    base_dir: &Path,
    name: &str,
    header: &str,
    body: &str,
) -> Result<PathBuf, AppError> {
    let path = base_dir.join(format!("{}.log", name));
    let write_failed = |e: std::io::Error| AppError::LogWriteFailed {
        path: path.clone(),
        reason: e.to_string(),
    };

    fs::create_dir_all(base_dir).map_err(write_failed)?;

    let mut file = fs::File::create(&path).map_err(write_failed)?;
    file.write_all(header.as_bytes()).map_err(write_failed)?;
    if !header.ends_with('\n') {
        file.write_all(b"\n").map_err(write_failed)?;
    }
    file.write_all(body.as_bytes()).map_err(write_failed)?;

    Ok(path)
}
