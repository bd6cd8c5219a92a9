//! Sample manifest loading and schema.
//!
//! The manifest is a JSON object mapping sample names to records that declare
//! which platforms the sample runs on, which requirements it needs, and which
//! test applications it ships. It is loaded once per invocation and read-only.
//!
//! # Modules
//!
//! - [`loader`] - Manifest file discovery and loading
//! - [`schema`] - Record types and string-or-list handling

pub mod loader;
pub mod schema;

pub use loader::Manifest;
pub use schema::{OneOrMany, SampleRecord};
