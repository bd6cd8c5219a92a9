//! Requirement parsing and installation.
//!
//! # Modules
//!
//! - [`parser`] - Requirement string parsing
//! - [`installer`] - Package-manager dispatch and invocation
//! - [`mingw`] - MSYS2 package name candidates

pub mod installer;
pub mod mingw;
pub mod parser;

use std::path::Path;

pub use installer::Installer;
pub use parser::Requirement;

use crate::environment::InstallEnvironment;
use crate::error::Result;
use crate::manifest::SampleRecord;
use crate::platform::Platform;
use crate::shell::CommandRunner;

/// Base tooling installed before a sample's own requirements.
///
/// pip/setuptools/wheel are skipped when pipenv or conda manage the
/// environment; conda on macOS/Linux additionally needs a compiler and a
/// static libpython to build samples.
fn base_requirements(env: &InstallEnvironment) -> Vec<String> {
    let mut requires: Vec<String> = if env.pipenv || env.conda.is_some() {
        Vec::new()
    } else {
        ["pip", "setuptools", "wheel"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    };

    if env.conda.is_some() && matches!(env.platform, Platform::MacOs | Platform::Linux) {
        requires.push("c-compiler".to_string());
        requires.push("libpython-static --python-version>=3.8".to_string());
    }

    requires.push("importlib-metadata".to_string());
    requires
}

/// Install everything a sample needs: base tooling, the Windows/MinGW
/// logging package, then the sample's declared requirements.
///
/// Returns the names actually installed, in install order.
pub fn install_for_sample(
    env: &InstallEnvironment,
    runner: &dyn CommandRunner,
    sample_dir: &Path,
    record: &SampleRecord,
) -> Result<Vec<String>> {
    let installer = Installer::new(env, runner, sample_dir);

    let mut installed = installer.install_all(&base_requirements(env))?;

    if matches!(env.platform, Platform::Windows | Platform::MinGw) {
        installed.extend(installer.install_all(&["cx_Logging>=3.0".to_string()])?);
    }

    let requires = record.requirements();
    if !requires.is_empty() {
        installed.extend(installer.install_all(&requires)?);
    }

    Ok(installed)
}
