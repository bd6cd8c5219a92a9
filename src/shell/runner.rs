//! Subprocess execution for package-manager invocations.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{Result, SamplectlError};

/// A single package-manager invocation: program plus argument vector.
///
/// Arguments are passed as a vector, never through a shell, so package
/// names and URLs need no quoting.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessCall {
    /// Program to execute.
    pub program: String,

    /// Arguments, in order.
    pub args: Vec<String>,

    /// Working directory (inherited when `None`).
    pub cwd: Option<PathBuf>,

    /// Capture stdout instead of inheriting it. Used by the pacman `-Ss`
    /// probe, whose output is inspected for "installed".
    pub capture_stdout: bool,
}

impl ProcessCall {
    /// Create a call with inherited stdio and no working directory.
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: None,
            capture_stdout: false,
        }
    }

    /// The command line for logging and error messages.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Result of executing a process call.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Captured standard output (empty when inherited).
    pub stdout: String,

    /// Whether the process exited with code 0.
    pub success: bool,
}

impl RunOutput {
    /// A success result with the given captured stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            success: true,
        }
    }

    /// A failure result with the given exit code.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: String::new(),
            success: false,
        }
    }
}

/// Executes package-manager invocations.
pub trait CommandRunner {
    /// Run a process call to completion, blocking.
    fn run(&self, call: &ProcessCall) -> Result<RunOutput>;
}

/// Runner backed by [`std::process::Command`].
///
/// Child stderr is always inherited so package-manager output reaches the
/// build log; stdout is inherited unless the call captures it.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, call: &ProcessCall) -> Result<RunOutput> {
        tracing::debug!("Running: {}", call.command_line());

        let mut cmd = Command::new(&call.program);
        cmd.args(&call.args);

        if let Some(cwd) = &call.cwd {
            cmd.current_dir(cwd);
        }

        if call.capture_stdout {
            cmd.stdout(Stdio::piped());
        } else {
            cmd.stdout(Stdio::inherit());
        }
        cmd.stderr(Stdio::inherit());

        let output = cmd
            .output()
            .map_err(|_| SamplectlError::CommandSpawnFailed {
                command: call.command_line(),
            })?;

        let stdout = if call.capture_stdout {
            String::from_utf8_lossy(&output.stdout).to_string()
        } else {
            String::new()
        };

        Ok(RunOutput {
            exit_code: output.status.code(),
            stdout,
            success: output.status.success(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_call_builds_command_line() {
        let mut call = ProcessCall::new("pacman", &["--noconfirm", "-S"]);
        call.args.push("python-lief".to_string());
        assert_eq!(call.command_line(), "pacman --noconfirm -S python-lief");
    }

    #[test]
    fn run_output_constructors() {
        let ok = RunOutput::success("found");
        assert!(ok.success);
        assert_eq!(ok.exit_code, Some(0));
        assert_eq!(ok.stdout, "found");

        let err = RunOutput::failure(2);
        assert!(!err.success);
        assert_eq!(err.exit_code, Some(2));
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_captures_stdout() {
        let call = ProcessCall {
            program: "echo".to_string(),
            args: vec!["hello".to_string()],
            cwd: None,
            capture_stdout: true,
        };

        let output = SystemRunner.run(&call).unwrap();
        assert!(output.success);
        assert!(output.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_reports_exit_code() {
        let call = ProcessCall {
            program: "false".to_string(),
            args: vec![],
            cwd: None,
            capture_stdout: false,
        };

        let output = SystemRunner.run(&call).unwrap();
        assert!(!output.success);
        assert_eq!(output.exit_code, Some(1));
    }

    #[test]
    fn system_runner_spawn_failure_is_an_error() {
        let call = ProcessCall::new("samplectl-no-such-binary", &[]);
        let result = SystemRunner.run(&call);
        assert!(matches!(
            result,
            Err(SamplectlError::CommandSpawnFailed { .. })
        ));
    }
}
