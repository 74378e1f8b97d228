//! Proposer model

use chrono::NaiveDate;
use core_kernel::IdentityDocument;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An inbound contracting submission, exactly as the caller sent it.
///
/// Nothing here has been validated: the document may carry punctuation and
/// the birth date is still text. [`crate::SubmissionValidator`] turns a
/// submission into a [`Proposer`] or a list of field violations.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub full_name: String,
    pub document: String,
    pub birth_date: String,
    pub coverage: Decimal,
}

/// An accepted proposer.
///
/// Constructed only by validation, inserted into the registry at most once,
/// and never mutated afterwards. The document is always in canonical
/// digits-only form regardless of how the submission spelled it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposer {
    pub full_name: String,
    pub document: IdentityDocument,
    pub birth_date: NaiveDate,
    pub coverage: Decimal,
}
