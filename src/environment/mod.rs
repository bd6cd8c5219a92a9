//! Install environment detection.
//!
//! Everything the installer needs to know about the machine (platform,
//! interpreter version, active conda prefix, MSYS2 host type, pipenv) is
//! captured once at process start into an [`InstallEnvironment`] and passed
//! down, so the install logic itself is deterministic and testable under
//! simulated platforms.
//!
//! # Modules
//!
//! - [`probe`] - Interpreter probing and environment construction

pub mod probe;

pub use probe::{CondaEnv, InstallEnvironment, MingwEnv, PythonInfo};
