//! Command-line interface and mode dispatch.
//!
//! # Modules
//!
//! - [`args`] - CLI argument definitions

pub mod args;

pub use args::{Cli, Mode};

use crate::apps;
use crate::environment::InstallEnvironment;
use crate::error::{Result, SamplectlError};
use crate::manifest::Manifest;
use crate::platform::matches_tags;
use crate::requirements::install_for_sample;
use crate::shell::{CommandRunner, SystemRunner};

/// Execute the invocation described by `cli` against the real system.
pub fn run(cli: &Cli) -> Result<()> {
    run_with_runner(cli, &SystemRunner)
}

/// Execute the invocation with an injected runner.
///
/// Prints the selected test app name (app mode) or the installed
/// requirement summary (req mode) on stdout for the build runner.
pub fn run_with_runner(cli: &Cli, runner: &dyn CommandRunner) -> Result<()> {
    let sample = cli
        .sample_dir
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| SamplectlError::InvalidSamplePath {
            path: cli.sample_dir.clone(),
        })?;

    let manifest_path = cli
        .manifest
        .clone()
        .unwrap_or_else(Manifest::default_path);
    let manifest = Manifest::load(&manifest_path)?;
    let record = manifest.sample(&sample);

    let platforms = record.platforms();

    match cli.mode {
        Mode::App(index) => {
            // The probe is only needed when the sample is platform-gated.
            if !platforms.is_empty() {
                let env = InstallEnvironment::detect(&cli.python, &cli.sample_dir, runner)?;
                if !matches_tags(env.platform, &platforms) {
                    tracing::debug!("Sample '{sample}' not supported on {}", env.platform);
                    return Ok(());
                }
            }

            if let Some(app) = apps::select(&record, &sample, index) {
                println!("{app}");
            }
        }
        Mode::Requirements => {
            let env = InstallEnvironment::detect(&cli.python, &cli.sample_dir, runner)?;
            if !platforms.is_empty() && !matches_tags(env.platform, &platforms) {
                tracing::debug!("Sample '{sample}' not supported on {}", env.platform);
                return Ok(());
            }

            let installed = install_for_sample(&env, runner, &cli.sample_dir, &record)?;
            if !installed.is_empty() {
                println!("Requirements installed: {}", installed.join(" "));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{ProcessCall, RunOutput, ScriptedRunner};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const PROBE_STDOUT: &str = "linux-x86_64\n3.12.1\nfinal\n/nonexistent/prefix\n\n";

    fn setup(manifest: &str, sample: &str) -> (TempDir, Cli) {
        let temp = TempDir::new().unwrap();
        let manifest_path = temp.path().join("build-test.json");
        fs::write(&manifest_path, manifest).unwrap();
        let sample_dir = temp.path().join(sample);
        fs::create_dir_all(&sample_dir).unwrap();

        let cli = Cli {
            sample_dir,
            mode: Mode::App(0),
            manifest: Some(manifest_path),
            python: "python".to_string(),
            debug: false,
        };
        (temp, cli)
    }

    fn probing_runner() -> ScriptedRunner {
        ScriptedRunner::with_script(|call: &ProcessCall| {
            if call.args.first().map(String::as_str) == Some("-c") {
                RunOutput::success(PROBE_STDOUT)
            } else {
                RunOutput::success("")
            }
        })
    }

    #[test]
    fn app_mode_without_platform_gate_skips_probe() {
        let (_temp, cli) = setup(r#"{"simple": {"test_app": ["a", "b"]}}"#, "simple");
        let runner = probing_runner();

        run_with_runner(&cli, &runner).unwrap();
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn app_mode_platform_gate_probes_and_exits_cleanly() {
        let (_temp, cli) = setup(
            r#"{"winonly": {"platform": ["win32"], "test_app": ["a"]}}"#,
            "winonly",
        );
        let runner = probing_runner();

        // Probe reports linux; win32-only sample exits silently with success.
        run_with_runner(&cli, &runner).unwrap();
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn req_mode_installs_base_and_declared() {
        let (_temp, mut cli) = setup(
            r#"{"numpy": {"requirements": ["numpy"]}}"#,
            "numpy",
        );
        cli.mode = Mode::Requirements;
        let runner = probing_runner();

        run_with_runner(&cli, &runner).unwrap();

        let lines = runner.command_lines();
        // probe + base batch + sample batch
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("pip install pip setuptools wheel importlib-metadata"));
        assert!(lines[2].contains("pip install numpy"));
    }

    #[test]
    fn req_mode_platform_gate_skips_installs() {
        let (_temp, mut cli) = setup(
            r#"{"winonly": {"platform": "win32", "requirements": ["pywin32"]}}"#,
            "winonly",
        );
        cli.mode = Mode::Requirements;
        let runner = probing_runner();

        run_with_runner(&cli, &runner).unwrap();
        // Only the probe ran.
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let (_temp, mut cli) = setup("{}", "simple");
        cli.manifest = Some(PathBuf::from("/nonexistent/build-test.json"));
        let runner = probing_runner();

        let result = run_with_runner(&cli, &runner);
        assert!(matches!(
            result,
            Err(SamplectlError::ManifestNotFound { .. })
        ));
    }

    #[test]
    fn sample_name_comes_from_directory_file_name() {
        let (_temp, cli) = setup("{}", "nested");
        // Unknown sample: synthesized app name printed, no error.
        run_with_runner(&cli, &probing_runner()).unwrap();
    }
}
