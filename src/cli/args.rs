//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

/// samplectl - CI helper for per-sample test configuration.
#[derive(Debug, Parser)]
#[command(name = "samplectl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the test sample directory; its file name is the sample name
    pub sample_dir: PathBuf,

    /// `req` to install requirements, or an index to print the nth test app
    pub mode: Mode,

    /// Path to the sample manifest (default: build-test.json next to the executable)
    #[arg(long, env = "SAMPLECTL_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Python interpreter the install targets
    #[arg(long, env = "SAMPLECTL_PYTHON", default_value = "python")]
    pub python: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// What the invocation should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Install the sample's requirements.
    Requirements,

    /// Print the test application name at this index.
    App(usize),
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "req" {
            return Ok(Mode::Requirements);
        }
        s.parse::<usize>()
            .map(Mode::App)
            .map_err(|_| format!("expected 'req' or a test app index, got '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_args_are_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn mode_parses_req_literal() {
        assert_eq!("req".parse::<Mode>(), Ok(Mode::Requirements));
    }

    #[test]
    fn mode_parses_index() {
        assert_eq!("0".parse::<Mode>(), Ok(Mode::App(0)));
        assert_eq!("3".parse::<Mode>(), Ok(Mode::App(3)));
    }

    #[test]
    fn mode_rejects_garbage() {
        assert!("install".parse::<Mode>().is_err());
        assert!("-1".parse::<Mode>().is_err());
    }

    #[test]
    fn parses_positional_arguments() {
        let cli = Cli::parse_from(["samplectl", "samples/pandas", "req"]);
        assert_eq!(cli.sample_dir, PathBuf::from("samples/pandas"));
        assert_eq!(cli.mode, Mode::Requirements);
        assert_eq!(cli.python, "python");
        assert!(cli.manifest.is_none());
    }

    #[test]
    fn parses_manifest_and_python_flags() {
        let cli = Cli::parse_from([
            "samplectl",
            "samples/simple",
            "1",
            "--manifest",
            "/ci/build-test.json",
            "--python",
            "python3.12",
        ]);
        assert_eq!(cli.mode, Mode::App(1));
        assert_eq!(cli.manifest, Some(PathBuf::from("/ci/build-test.json")));
        assert_eq!(cli.python, "python3.12");
    }
}
