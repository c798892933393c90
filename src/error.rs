use colored::Colorize;
use std::path::PathBuf;
use thiserror::Error;

use crate::format;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("interrupted by user")]
    Interrupted,
    #[error("failed to retrieve cargo metadata: {reason}")]
    MetadataFailed { reason: String },
    #[error("command '{command}' failed: {reason}")]
    CommandFailed { command: String, reason: String },
    #[error("failed to write log '{}': {reason}", .path.display())]
    LogWriteFailed { path: PathBuf, reason: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// Map error types to exit codes and provide colorized output
impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Interrupted => 130,
            AppError::MetadataFailed { .. } => 40,
            AppError::CommandFailed { .. } => 60,
            AppError::LogWriteFailed { .. } => 70,
            AppError::Other(_) => 1,
        }
    }

    // Create a colored version of the error message
    fn colorized_message(&self) -> String {
        match self {
            AppError::Interrupted => format!("{}", "interrupted by user".bold()),

            AppError::MetadataFailed { reason } => {
                format!("failed to retrieve cargo metadata: {}", reason.bold())
            }

            AppError::CommandFailed { command, reason } => {
                format!(
                    "command '{}' failed: {}",
                    command.bold().yellow(),
                    reason.bold()
                )
            }

            AppError::LogWriteFailed { path, reason } => {
                format!(
                    "failed to write log '{}': {}",
                    path.display().to_string().bold().yellow(),
                    reason.bold()
                )
            }

            AppError::Other(err) => {
                format!("{}", err)
            }
        }
    }

    // Handle printing the error and any additional context
    pub fn report(&self) {
        format::error!(self.colorized_message());

        match self {
            AppError::MetadataFailed { .. } => {
                format::tip!(format!(
                    "run from inside a cargo workspace or pass '{}'",
                    "--manifest-path".bold().yellow()
                ));
            }
            AppError::CommandFailed { .. } => {
                format::tip!("make sure 'cargo' is installed and on your PATH");
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::Interrupted.exit_code(), 130);
        assert_eq!(
            AppError::CommandFailed {
                command: "cargo".to_string(),
                reason: "not found".to_string(),
            }
            .exit_code(),
            60
        );
        assert_eq!(AppError::Other(anyhow::anyhow!("boom")).exit_code(), 1);
    }

    #[test]
    fn test_display_is_uncolored() {
        let err = AppError::LogWriteFailed {
            path: PathBuf::from("/logs/fmt.log"),
            reason: "read-only file system".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write log '/logs/fmt.log': read-only file system"
        );
    }
}
