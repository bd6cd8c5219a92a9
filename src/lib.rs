//! samplectl - CI helper for per-sample test configuration.
//!
//! samplectl resolves a test sample's record from a JSON manifest and either
//! installs the sample's declared requirements through the applicable package
//! manager (conda, MSYS2 pacman, or pip), or prints the name of one of the
//! sample's test entry-point applications for a build runner to consume.
//!
//! # Modules
//!
//! - [`apps`] - Test application selection
//! - [`cli`] - Command-line interface and mode dispatch
//! - [`environment`] - Interpreter probing and install environment detection
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Sample manifest loading and schema
//! - [`platform`] - Platform tag and interpreter version predicates
//! - [`requirements`] - Requirement parsing and installation
//! - [`shell`] - Package-manager subprocess execution
//!
//! # Example
//!
//! ```
//! use samplectl::platform::{Platform, matches_tags};
//!
//! // A negated tag subtracts from the default full platform set
//! let tags = vec!["!win32".to_string()];
//! assert!(matches_tags(Platform::Linux, &tags));
//! assert!(!matches_tags(Platform::Windows, &tags));
//! ```

pub mod apps;
pub mod cli;
pub mod environment;
pub mod error;
pub mod manifest;
pub mod platform;
pub mod requirements;
pub mod shell;

pub use error::{Result, SamplectlError};
