use std::io::{self, Read};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use crate::error::AppError;
use crate::signal;

/// Exit code, merged output and wall-clock duration of one child process
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub output: String,
    pub duration: Duration,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run a command to completion with stdin closed and stdout/stderr merged
/// into a single pipe.
///
/// The duration covers spawn through the child's exit, including draining
/// everything it wrote. On unix the child leads its own process group, which
/// receives any SIGINT forwarded while it runs.
pub fn run_captured(mut cmd: Command) -> Result<CommandOutput, AppError> {
    let command = command_line(&cmd);
    let command_failed = |reason: String| AppError::CommandFailed {
        command: command.clone(),
        reason,
    };

    let (mut reader, writer) = io::pipe().map_err(|e| command_failed(e.to_string()))?;
    let stderr_writer = writer
        .try_clone()
        .map_err(|e| command_failed(e.to_string()))?;

    cmd.stdin(Stdio::null());
    cmd.stdout(writer);
    cmd.stderr(stderr_writer);
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    let start = Instant::now();
    let mut child = cmd.spawn().map_err(|e| command_failed(e.to_string()))?;
    let _registration = signal::register_child(child.id());

    // The command still owns our copies of the write end; the read below only
    // sees EOF once they are closed.
    drop(cmd);

    let mut output_capture = Vec::new();
    reader
        .read_to_end(&mut output_capture)
        .map_err(|e| command_failed(format!("Failed to read output: {}", e)))?;

    let status = child.wait().map_err(|e| command_failed(e.to_string()))?;
    let duration = start.elapsed();

    Ok(CommandOutput {
        exit_code: exit_code(status),
        output: String::from_utf8_lossy(&output_capture).into_owned(),
        duration,
    })
}

/// Render a command as a space separated command line, for log headers
pub fn command_line(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Children killed by a signal report the negated signal number
#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| -signal))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
