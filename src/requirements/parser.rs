//! Requirement string parsing.
//!
//! One requirement is a whitespace-separated token sequence: a bare package
//! identifier plus inline flags controlling how it is installed, e.g.
//! `lief --mingw=python-lief --platform=mingw` or
//! `cx_Logging>=3.1 --python-version<3.14`.

use crate::error::Result;
use crate::platform::VersionSpec;

/// A parsed requirement: package plus inline install flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Requirement {
    /// Package identifier, possibly carrying a pip version constraint.
    pub package: String,

    /// Name to install under conda instead of `package`.
    pub conda_alias: Option<String>,

    /// Name to install under MSYS2 instead of `package`.
    pub mingw_alias: Option<String>,

    /// Extra pip `--find-links` location.
    pub find_links: Option<String>,

    /// Pass `--no-deps` to pip.
    pub no_deps: bool,

    /// Platform tags gating this requirement (comma-separated in the flag).
    pub platform_tags: Vec<String>,

    /// Interpreter version gate.
    pub python_version: Option<VersionSpec>,

    /// Pass `--prefer-binary` to pip.
    pub prefer_binary: bool,
}

impl Requirement {
    /// Parse a requirement string.
    ///
    /// Returns `Ok(None)` when no bare package token is present (the
    /// requirement is a no-op). The last bare token wins as the package.
    /// A malformed `--python-version` spec is an error.
    pub fn parse(raw: &str) -> Result<Option<Requirement>> {
        let mut req = Requirement::default();
        let mut package = None;

        for token in raw.split_whitespace() {
            if let Some(value) = token.strip_prefix("--conda=") {
                req.conda_alias = Some(value.to_string());
            } else if let Some(value) = token.strip_prefix("--mingw=") {
                req.mingw_alias = Some(value.to_string());
            } else if let Some(value) = token.strip_prefix("--find-links=") {
                req.find_links = Some(value.to_string());
            } else if token == "--no-deps" {
                req.no_deps = true;
            } else if let Some(value) = token.strip_prefix("--platform=") {
                req.platform_tags = value.split(',').map(|t| t.trim().to_string()).collect();
            } else if let Some(spec) = token.strip_prefix("--python-version") {
                req.python_version = Some(spec.parse()?);
            } else if token == "--prefer-binary" {
                req.prefer_binary = true;
            } else {
                package = Some(token.to_string());
            }
        }

        match package {
            Some(package) => {
                req.package = package;
                Ok(Some(req))
            }
            None => Ok(None),
        }
    }

    /// Whether any pip-specific flag is set. Flagged requirements get their
    /// own pip invocation; bare ones are batched.
    pub fn has_pip_flags(&self) -> bool {
        self.find_links.is_some() || self.no_deps || self.prefer_binary
    }
}
