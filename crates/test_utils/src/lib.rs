//! Test Utilities
//!
//! Shared fixtures and builders for the contracting intake test suite.
//! Nothing here is compiled into production binaries; the crates pull this
//! in as a dev-dependency only.

pub mod builders;
pub mod fixtures;

pub use builders::{ProposerBuilder, SubmissionBuilder};
