//! Builders with valid defaults
//!
//! Each builder starts from a fully valid value so a test only has to spell
//! out the field it is probing.

use chrono::NaiveDate;
use core_kernel::IdentityDocument;
use domain_contracting::{Proposer, Submission};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures;

/// Builds [`Submission`] values, valid unless overridden.
#[derive(Debug, Clone)]
pub struct SubmissionBuilder {
    full_name: String,
    document: String,
    birth_date: String,
    coverage: Decimal,
}

impl Default for SubmissionBuilder {
    fn default() -> Self {
        Self {
            full_name: "Renato Silva".to_string(),
            document: fixtures::VALID_DOCUMENT.to_string(),
            birth_date: fixtures::ADULT_BIRTH_DATE.to_string(),
            coverage: dec!(150000),
        }
    }
}

impl SubmissionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn document(mut self, document: impl Into<String>) -> Self {
        self.document = document.into();
        self
    }

    pub fn birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.birth_date = birth_date.into();
        self
    }

    pub fn coverage(mut self, coverage: Decimal) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn build(self) -> Submission {
        Submission {
            full_name: self.full_name,
            document: self.document,
            birth_date: self.birth_date,
            coverage: self.coverage,
        }
    }
}

/// Builds already-accepted [`Proposer`] values for registry tests.
#[derive(Debug, Clone)]
pub struct ProposerBuilder {
    full_name: String,
    document: String,
    birth_date: NaiveDate,
    coverage: Decimal,
}

impl Default for ProposerBuilder {
    fn default() -> Self {
        Self {
            full_name: "Renato Silva".to_string(),
            document: fixtures::VALID_DOCUMENT.to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 10)
                .expect("valid fixture date"),
            coverage: dec!(150000),
        }
    }
}

impl ProposerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn document(mut self, document: impl Into<String>) -> Self {
        self.document = document.into();
        self
    }

    pub fn build(self) -> Proposer {
        Proposer {
            full_name: self.full_name,
            document: IdentityDocument::new(&self.document),
            birth_date: self.birth_date,
            coverage: self.coverage,
        }
    }
}
