//! Contracting domain errors
//!
//! Business outcomes (rejection, denial, conflict) are *not* errors in this
//! domain; they are variants of [`crate::ContractingOutcome`]. The types
//! here cover genuine faults and the birth-date rule's two failure kinds.

use thiserror::Error;

/// Errors that can occur in the contracting domain
#[derive(Debug, Error)]
pub enum ContractingError {
    /// The authorization gateway could not be constructed
    #[error("Authorization gateway setup failed: {0}")]
    GatewaySetup(String),
}

/// Why a birth date failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BirthDateError {
    /// The text could not be parsed with the fixed date format
    #[error("The birth date format is invalid.")]
    Malformed,

    /// The proposer is younger than the legal adult age
    #[error("The proposer must be at least 18 years old.")]
    Underage,
}
