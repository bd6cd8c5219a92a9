//! Package-manager subprocess execution.
//!
//! Every external invocation (conda, pacman, pip, pipenv) goes through the
//! [`CommandRunner`] trait so the installer can be exercised in tests without
//! touching real package managers.
//!
//! # Modules
//!
//! - [`runner`] - Runner trait, process call description, system implementation
//! - [`mock`] - Scripted runner test double

pub mod mock;
pub mod runner;

pub use mock::ScriptedRunner;
pub use runner::{CommandRunner, ProcessCall, RunOutput, SystemRunner};
