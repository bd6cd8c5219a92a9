//! Platform tag and interpreter version predicates.
//!
//! Samples and individual requirements can be gated on the platform the
//! target interpreter was built for and on its version. Both predicates are
//! pure functions over values captured once at startup.
//!
//! # Modules
//!
//! - [`tags`] - Platform enum and tag set matching
//! - [`python`] - Interpreter version spec parsing and evaluation

pub mod python;
pub mod tags;

pub use python::{CmpOp, VersionSpec};
pub use tags::{matches_tags, Platform};
