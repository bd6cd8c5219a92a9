//! Interpreter probing and install environment construction.
//!
//! The installer targets a Python interpreter that is not the process
//! running samplectl, so platform, version, and prefix are discovered by
//! running the interpreter once with a small inline script. Environment
//! variable lookup is injected as a closure so tests can simulate any
//! configuration without touching the real environment.

use std::path::{Path, PathBuf};

use crate::error::{Result, SamplectlError};
use crate::platform::Platform;
use crate::shell::{CommandRunner, ProcessCall};

/// Inline script handed to `python -c`, one probed value per line.
const PROBE_SCRIPT: &str = "\
import sys, sysconfig
print(sysconfig.get_platform())
print('%d.%d.%d' % sys.version_info[:3])
print(sys.version_info.releaselevel)
print(sys.prefix)
print(sysconfig.get_config_var('HOST_GNU_TYPE') or '')
";

/// Facts probed from the target interpreter.
#[derive(Debug, Clone, PartialEq)]
pub struct PythonInfo {
    /// Interpreter executable, as given on the command line.
    pub executable: String,

    /// Version tuple `(major, minor, micro)`.
    pub version: Vec<u32>,

    /// Whether `sys.version_info.releaselevel` is `final`. Pre-release
    /// interpreters get a `--pre` retry on pip failures.
    pub is_final: bool,

    /// `sys.prefix` of the interpreter.
    pub prefix: PathBuf,

    /// `sysconfig.get_platform()`, e.g. `linux-x86_64` or `mingw_x86_64_ucrt`.
    pub sysconfig_platform: String,

    /// `HOST_GNU_TYPE` config var, set on MinGW builds.
    pub host_gnu_type: Option<String>,
}

impl PythonInfo {
    /// Probe the interpreter by running it once.
    pub fn probe(executable: &str, runner: &dyn CommandRunner) -> Result<Self> {
        let mut call = ProcessCall::new(executable, &["-c", PROBE_SCRIPT]);
        call.capture_stdout = true;

        let output = runner.run(&call)?;
        if !output.success {
            return Err(SamplectlError::ProbeFailed {
                interpreter: executable.to_string(),
                message: format!("probe exited with code {:?}", output.exit_code),
            });
        }

        Self::parse_probe_output(executable, &output.stdout)
    }

    /// Parse the probe script's five output lines.
    pub fn parse_probe_output(executable: &str, stdout: &str) -> Result<Self> {
        let fail = |message: String| SamplectlError::ProbeFailed {
            interpreter: executable.to_string(),
            message,
        };

        let mut lines = stdout.lines().map(str::trim);
        let sysconfig_platform = lines
            .next()
            .ok_or_else(|| fail("missing platform line".into()))?
            .to_string();
        let version_line = lines
            .next()
            .ok_or_else(|| fail("missing version line".into()))?;
        let releaselevel = lines
            .next()
            .ok_or_else(|| fail("missing releaselevel line".into()))?;
        let prefix = lines
            .next()
            .ok_or_else(|| fail("missing prefix line".into()))?;
        let host_gnu_type = lines.next().unwrap_or_default();

        let version = version_line
            .split('.')
            .map(|n| n.parse::<u32>())
            .collect::<std::result::Result<Vec<u32>, _>>()
            .map_err(|_| fail(format!("unparseable version: {version_line}")))?;

        Ok(Self {
            executable: executable.to_string(),
            version,
            is_final: releaselevel == "final",
            prefix: PathBuf::from(prefix),
            sysconfig_platform,
            host_gnu_type: if host_gnu_type.is_empty() {
                None
            } else {
                Some(host_gnu_type.to_string())
            },
        })
    }
}

/// An active conda environment.
#[derive(Debug, Clone, PartialEq)]
pub struct CondaEnv {
    /// Conda executable, from `CONDA_EXE` (default `conda`).
    pub exe: String,
}

/// MSYS2/MinGW build environment.
#[derive(Debug, Clone, PartialEq)]
pub struct MingwEnv {
    /// MSYS2 package name prefix, e.g. `mingw-w64-ucrt-x86_64`.
    pub package_prefix: String,
}

impl MingwEnv {
    /// Derive the MSYS2 package prefix from `HOST_GNU_TYPE` and the
    /// sysconfig platform string.
    ///
    /// `HOST_GNU_TYPE` looks like `x86_64-w64-mingw32`; the platform string
    /// is `mingw_<arch>` with an optional `_<variant>` suffix (`ucrt`,
    /// `clang`) that becomes part of the prefix.
    pub fn derive(host_gnu_type: &str, sysconfig_platform: &str) -> Option<Self> {
        let mut parts = host_gnu_type.split('-');
        let host_type = parts.next().filter(|s| !s.is_empty())?;
        let vendor = parts.next()?;

        let mut prefix = format!("mingw-{vendor}-");
        let basic_platform = format!("mingw_{host_type}");
        if sysconfig_platform.len() > basic_platform.len() + 1 {
            let variant = &sysconfig_platform[basic_platform.len() + 1..];
            prefix.push_str(variant);
            prefix.push('-');
        }
        prefix.push_str(host_type);

        Some(Self {
            package_prefix: prefix,
        })
    }
}

/// Everything the installer needs to know about the machine, captured once
/// at process start.
#[derive(Debug, Clone)]
pub struct InstallEnvironment {
    /// Platform the target interpreter was built for.
    pub platform: Platform,

    /// Probed interpreter facts.
    pub python: PythonInfo,

    /// Active conda environment, if any.
    pub conda: Option<CondaEnv>,

    /// MSYS2 environment, present iff the platform is MinGW.
    pub mingw: Option<MingwEnv>,

    /// Whether the sample directory carries a `Pipfile`.
    pub pipenv: bool,

    /// Whether `PIP_UPGRADE` is set, adding `--upgrade` to pip installs.
    pub pip_upgrade: bool,
}

impl InstallEnvironment {
    /// Detect the environment for a sample directory using the real
    /// process environment.
    pub fn detect(
        python: &str,
        sample_dir: &Path,
        runner: &dyn CommandRunner,
    ) -> Result<Self> {
        let info = PythonInfo::probe(python, runner)?;
        let conda_active = info.prefix.join("conda-meta").is_dir();
        let pipenv = sample_dir.join("Pipfile").is_file();
        Self::from_parts(info, conda_active, pipenv, |key| std::env::var(key))
    }

    /// Build the environment from already-probed parts.
    ///
    /// Pure apart from `env_fn`, which tests inject.
    pub fn from_parts<F>(
        python: PythonInfo,
        conda_active: bool,
        pipenv: bool,
        env_fn: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        let platform = Platform::from_sysconfig(&python.sysconfig_platform).ok_or_else(|| {
            SamplectlError::ProbeFailed {
                interpreter: python.executable.clone(),
                message: format!("unsupported platform: {}", python.sysconfig_platform),
            }
        })?;

        let mingw = if platform == Platform::MinGw {
            python
                .host_gnu_type
                .as_deref()
                .and_then(|host| MingwEnv::derive(host, &python.sysconfig_platform))
        } else {
            None
        };

        let conda = conda_active.then(|| CondaEnv {
            exe: env_fn("CONDA_EXE").unwrap_or_else(|_| "conda".to_string()),
        });

        let pip_upgrade = env_fn("PIP_UPGRADE").map(|v| !v.is_empty()).unwrap_or(false);

        tracing::debug!(
            "Environment: platform={platform}, conda={}, mingw={}, pipenv={pipenv}",
            conda.is_some(),
            mingw.is_some(),
        );

        Ok(Self {
            platform,
            python,
            conda,
            mingw,
            pipenv,
            pip_upgrade,
        })
    }
}
