//! Core Kernel
//!
//! Shared types and utilities for the contracting intake system.
//!
//! This crate holds the pieces every other crate depends on: the canonical
//! identity-document type (with its checksum validation) and calendar-age
//! computation.

pub mod document;
pub mod temporal;

pub use document::IdentityDocument;
pub use temporal::age_in_years;
