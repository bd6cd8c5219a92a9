//! Requirement installation.
//!
//! Installs each requirement through the applicable package manager:
//! conda when a conda environment is active, MSYS2 pacman under MinGW,
//! pip otherwise. Conda and pacman failures fall through to pip; pip
//! failures are fatal and terminate the process with the child's exit
//! code. Bare requirements with no pip flags are batched into a single
//! combined pip invocation at the end.

use std::path::Path;

use crate::environment::{CondaEnv, InstallEnvironment, MingwEnv};
use crate::error::{Result, SamplectlError};
use crate::platform::matches_tags;
use crate::requirements::mingw;
use crate::requirements::parser::Requirement;
use crate::shell::{CommandRunner, ProcessCall};

/// Installs requirements against a fixed environment.
pub struct Installer<'a> {
    env: &'a InstallEnvironment,
    runner: &'a dyn CommandRunner,
    sample_dir: &'a Path,
}

impl<'a> Installer<'a> {
    /// Create an installer for a sample directory.
    pub fn new(
        env: &'a InstallEnvironment,
        runner: &'a dyn CommandRunner,
        sample_dir: &'a Path,
    ) -> Self {
        Self {
            env,
            runner,
            sample_dir,
        }
    }

    /// Install a list of requirement strings in declaration order.
    ///
    /// Returns the names actually installed. Requirements whose platform
    /// or interpreter-version gate fails are skipped silently; a failed
    /// pip invocation aborts with the child's exit code.
    pub fn install_all(&self, requires: &[String]) -> Result<Vec<String>> {
        let mut installed = Vec::new();
        let mut batch: Vec<String> = Vec::new();

        for raw in requires {
            let Some(req) = Requirement::parse(raw)? else {
                continue;
            };

            if !req.platform_tags.is_empty()
                && !matches_tags(self.env.platform, &req.platform_tags)
            {
                tracing::debug!("Skipping '{}': platform gate failed", req.package);
                continue;
            }
            if let Some(spec) = &req.python_version {
                if !spec.matches(&self.env.python.version) {
                    tracing::debug!("Skipping '{}': version gate failed", req.package);
                    continue;
                }
            }

            if let Some(conda) = &self.env.conda {
                if let Some(name) = self.try_conda(conda, &req)? {
                    installed.push(name);
                    continue;
                }
            } else if let Some(msys) = &self.env.mingw {
                if let Some(name) = self.try_mingw(msys, &req)? {
                    installed.push(name);
                    continue;
                }
            }

            if req.has_pip_flags() {
                installed.push(self.pip_install_flagged(&req)?);
            } else {
                batch.push(req.package.clone());
            }
        }

        if !batch.is_empty() {
            self.pip_install_batch(&batch)?;
            installed.extend(batch);
        }

        Ok(installed)
    }

    /// Attempt a conda install, substituting the conda alias when present.
    /// Returns the installed name, or `None` to fall through to pip.
    fn try_conda(&self, conda: &CondaEnv, req: &Requirement) -> Result<Option<String>> {
        let name = req.conda_alias.as_deref().unwrap_or(&req.package);
        let prefix = self.env.python.prefix.to_string_lossy().to_string();

        let call = ProcessCall::new(
            conda.exe.as_str(),
            &["install", "-p", &prefix, "-c", "conda-forge", "-y", name],
        );

        let output = self.runner.run(&call)?;
        if output.success {
            Ok(Some(name.to_string()))
        } else {
            tracing::debug!("conda could not install '{name}', falling back to pip");
            Ok(None)
        }
    }

    /// Attempt an MSYS2 pacman install, probing candidate package names.
    /// Returns the installed name, or `None` to fall through to pip.
    fn try_mingw(&self, msys: &MingwEnv, req: &Requirement) -> Result<Option<String>> {
        let base = req.mingw_alias.as_deref().unwrap_or(&req.package);

        for candidate in mingw::candidate_packages(base) {
            let package = format!("{}-{}", msys.package_prefix, candidate);

            let mut search = ProcessCall::new("pacman", &["--noconfirm", "-Ss", &package]);
            search.capture_stdout = true;
            let output = self.runner.run(&search)?;

            if output.exit_code == Some(1) {
                // does not exist under this name
                continue;
            }
            if output.success && output.stdout.contains("installed") {
                return Ok(Some(package));
            }

            let install = ProcessCall::new("pacman", &["--noconfirm", "-S", &package]);
            if self.runner.run(&install)?.success {
                return Ok(Some(package));
            }
        }

        tracing::debug!("pacman could not install '{base}', falling back to pip");
        Ok(None)
    }

    /// Program and base arguments of a pip install invocation.
    fn pip_install_base(&self) -> (String, Vec<String>) {
        if self.env.pipenv {
            (
                "pipenv".to_string(),
                vec!["run".into(), "pip".into(), "install".into()],
            )
        } else {
            (
                self.env.python.executable.clone(),
                vec!["-m".into(), "pip".into(), "install".into()],
            )
        }
    }

    /// Install one flagged requirement via pip. Fatal on failure, with a
    /// single `--pre` retry on pre-release interpreters.
    fn pip_install_flagged(&self, req: &Requirement) -> Result<String> {
        let (program, mut args) = self.pip_install_base();

        if let Some(links) = &req.find_links {
            args.push("--find-links".into());
            args.push(links.clone());
        }
        if req.no_deps {
            args.push("--no-deps".into());
        }
        if req.prefer_binary {
            args.push("--prefer-binary".into());
        }
        if self.env.pip_upgrade {
            args.push("--upgrade".into());
        }
        args.push(req.package.clone());

        let mut call = ProcessCall::new(program, &[]);
        call.args = args;
        call.cwd = Some(self.sample_dir.to_path_buf());

        let output = self.runner.run(&call)?;
        if output.success {
            return Ok(req.package.clone());
        }

        // On pre-release interpreters, wheels often lag; try a pre-release
        // of the package once before giving up.
        if !self.env.python.is_final {
            let mut retry = call.clone();
            retry.args.push("--pre".into());
            if self.runner.run(&retry)?.success {
                return Ok(req.package.clone());
            }
        }

        Err(SamplectlError::InstallFailed {
            requirement: req.package.clone(),
            code: output.exit_code,
        })
    }

    /// Install all batched bare packages in one combined invocation.
    /// Fatal on failure.
    fn pip_install_batch(&self, packages: &[String]) -> Result<()> {
        let (program, mut args) = if self.env.pipenv {
            ("pipenv".to_string(), vec!["install".to_string()])
        } else {
            self.pip_install_base()
        };

        args.extend(packages.iter().cloned());
        if self.env.pip_upgrade {
            args.push("--upgrade".into());
        }

        let mut call = ProcessCall::new(program, &[]);
        call.args = args;
        call.cwd = Some(self.sample_dir.to_path_buf());

        let output = self.runner.run(&call)?;
        if output.success {
            Ok(())
        } else {
            Err(SamplectlError::InstallFailed {
                requirement: packages.join(" "),
                code: output.exit_code,
            })
        }
    }
}
