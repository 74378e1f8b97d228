//! Canonical identity documents
//!
//! A proposer is keyed by a national identity number. The number arrives in
//! arbitrary formatting (`"908.630.180-09"`, `"90863018009"`, ...), so the
//! newtype normalizes to a digits-only canonical form on construction and
//! all equality, hashing, and serialization operate on that form.
//!
//! Validation follows the official checksum formula: two check digits, each
//! a weighted digit sum mod 11. Sequences of eleven identical digits pass
//! the formula but are not issued, so they are rejected outright, as is the
//! well-known placeholder `12345678909`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Checksum-valid placeholder that circulates widely in examples and must
/// never be accepted.
const BLACKLISTED: &str = "12345678909";

/// An identity document in canonical, digits-only form.
///
/// Construction never fails: any non-digit characters in the input are
/// stripped. Whether the resulting number is *valid* is a separate question
/// answered by [`IdentityDocument::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityDocument(String);

impl IdentityDocument {
    /// Creates a document from raw input, stripping every non-digit
    /// character (dots, dashes, spaces).
    pub fn new(raw: &str) -> Self {
        Self(raw.chars().filter(|c| c.is_ascii_digit()).collect())
    }

    /// Returns the canonical digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks the document against the checksum formula.
    ///
    /// The canonical form is left-padded with `'0'` to eleven digits before
    /// evaluation; more than eleven digits is always invalid. Both check
    /// digits (positions 9 and 10) must match the weighted sums of the
    /// preceding digits.
    pub fn is_valid(&self) -> bool {
        if self.0.len() > 11 {
            return false;
        }

        let padded = format!("{:0>11}", self.0);

        let mut first = padded.chars();
        if let Some(head) = first.next() {
            if first.all(|c| c == head) {
                return false;
            }
        }
        if padded == BLACKLISTED {
            return false;
        }

        let digits: Vec<u32> = padded.chars().filter_map(|c| c.to_digit(10)).collect();

        check_digit(&digits[..9], 10) == digits[9] && check_digit(&digits[..10], 11) == digits[10]
    }
}

/// Convenience over [`IdentityDocument::is_valid`] for raw, unstripped input.
pub fn validate_identity_document(raw: &str) -> bool {
    IdentityDocument::new(raw).is_valid()
}

/// Computes a check digit: sum of `(weight - i) * digit[i]`, reduced mod 11.
/// A remainder of 0 or 1 yields 0; anything else yields `11 - r`.
fn check_digit(digits: &[u32], start_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| (start_weight - i as u32) * d)
        .sum();

    match sum % 11 {
        0 | 1 => 0,
        r => 11 - r,
    }
}

impl fmt::Display for IdentityDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IdentityDocument {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
