//! Error types for samplectl operations.
//!
//! This module defines [`SamplectlError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SamplectlError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `SamplectlError::Other`) for unexpected errors
//! - Installer failures carry the child's exit code so `main` can propagate it

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for samplectl operations.
#[derive(Debug, Error)]
pub enum SamplectlError {
    /// Manifest file not found at expected location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse the manifest file.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParseError { path: PathBuf, message: String },

    /// The sample directory path has no usable file name.
    #[error("Cannot derive a sample name from path: {path}")]
    InvalidSamplePath { path: PathBuf },

    /// Probing the target Python interpreter failed.
    #[error("Failed to probe interpreter '{interpreter}': {message}")]
    ProbeFailed {
        interpreter: String,
        message: String,
    },

    /// A `--python-version` spec could not be parsed.
    #[error("Invalid version spec: {spec}")]
    InvalidVersionSpec { spec: String },

    /// A package-manager subprocess could not be spawned.
    #[error("Command failed to start: {command}")]
    CommandSpawnFailed { command: String },

    /// A package-manager subprocess exited non-zero. Fatal; the child's
    /// exit code becomes the process exit code.
    #[error("Install of '{requirement}' failed with exit code {code:?}")]
    InstallFailed {
        requirement: String,
        code: Option<i32>,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SamplectlError {
    /// Exit code this error should terminate the process with.
    ///
    /// Installer failures propagate the child's exit code; everything
    /// else maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            SamplectlError::InstallFailed { code, .. } => match code {
                Some(c) if *c != 0 => *c,
                _ => 1,
            },
            _ => 1,
        }
    }
}

/// Result type alias for samplectl operations.
pub type Result<T> = std::result::Result<T, SamplectlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_not_found_displays_path() {
        let err = SamplectlError::ManifestNotFound {
            path: PathBuf::from("/ci/build-test.json"),
        };
        assert!(err.to_string().contains("/ci/build-test.json"));
    }

    #[test]
    fn manifest_parse_error_displays_path_and_message() {
        let err = SamplectlError::ManifestParseError {
            path: PathBuf::from("/ci/build-test.json"),
            message: "expected value at line 3".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/ci/build-test.json"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn probe_failed_displays_interpreter() {
        let err = SamplectlError::ProbeFailed {
            interpreter: "python3.12".into(),
            message: "not found on PATH".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("python3.12"));
        assert!(msg.contains("not found on PATH"));
    }

    #[test]
    fn install_failed_propagates_child_code() {
        let err = SamplectlError::InstallFailed {
            requirement: "numpy".into(),
            code: Some(2),
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn install_failed_without_code_maps_to_one() {
        let err = SamplectlError::InstallFailed {
            requirement: "numpy".into(),
            code: None,
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn non_installer_errors_exit_with_one() {
        let err = SamplectlError::InvalidVersionSpec {
            spec: "~~3.8".into(),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SamplectlError = io_err.into();
        assert!(matches!(err, SamplectlError::Io(_)));
    }
}
