//! External command execution.

use crate::error::{DoctorError, Result};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Captured output of a command that exited successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Build an output holding only stdout.
    pub fn stdout(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// The second whitespace-separated token of stdout, if any.
    ///
    /// Every status probe shapes its output as `<detail> <marker>`.
    pub fn second_token(&self) -> Option<&str> {
        self.stdout.split_whitespace().nth(1)
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Environment variables (merged with system env).
    pub env: Vec<(String, String)>,

    /// Attach the child to the terminal (stdin/stdout/stderr inherited).
    ///
    /// Needed for `sudo` password prompts. Output is not captured.
    pub interactive: bool,
}

/// Render a program and its arguments the way a user would type them.
pub fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Execute a program, failing with [`DoctorError::CommandFailed`] on spawn
/// failure or a non-zero exit.
pub fn execute(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandOutput> {
    let start = Instant::now();
    let rendered = display_command(program, args);

    let mut cmd = Command::new(program);
    cmd.args(args);

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    if options.interactive {
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let status = cmd.status().map_err(|e| {
            tracing::debug!("failed to spawn '{}': {}", rendered, e);
            DoctorError::CommandFailed {
                command: rendered.clone(),
                code: None,
                stderr: e.to_string(),
            }
        })?;
        log_finished(&rendered, start.elapsed(), status.code());

        return if status.success() {
            Ok(CommandOutput::default())
        } else {
            Err(DoctorError::CommandFailed {
                command: rendered,
                code: status.code(),
                stderr: String::new(),
            })
        };
    }

    let output = cmd.output().map_err(|e| {
        tracing::debug!("failed to spawn '{}': {}", rendered, e);
        DoctorError::CommandFailed {
            command: rendered.clone(),
            code: None,
            stderr: e.to_string(),
        }
    })?;
    log_finished(&rendered, start.elapsed(), output.status.code());

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(CommandOutput { stdout, stderr })
    } else {
        Err(DoctorError::CommandFailed {
            command: rendered,
            code: output.status.code(),
            stderr,
        })
    }
}

fn log_finished(command: &str, elapsed: Duration, code: Option<i32>) {
    tracing::debug!(
        "'{}' finished in {}ms with exit code {:?}",
        command,
        elapsed.as_millis(),
        code
    );
}
