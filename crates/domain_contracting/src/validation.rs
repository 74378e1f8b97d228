//! Submission validation rules
//!
//! Every rule is a pure function; the validator runs all of them and
//! reports the full set of violations, one field/message pair per failing
//! rule, so a caller can fix everything in one round trip.
//!
//! Field identifiers match the wire names of the submission payload
//! (`name`, `identityDocument`, `birthDate`, `coverage`).

use chrono::NaiveDate;
use core_kernel::{age_in_years, IdentityDocument};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::error::BirthDateError;
use crate::proposer::{Proposer, Submission};

/// Fixed, locale-independent birth-date format.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Minimum insurable coverage.
pub const MINIMUM_COVERAGE: Decimal = dec!(100000);

/// Minimum age, in whole years, to contract.
pub const LEGAL_ADULT_AGE: i32 = 18;

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Wire name of the offending field
    pub field: String,
    /// Human-readable description of the violation
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validates a full personal name: at least a given name and a surname,
/// each part two or more characters of letters, hyphens, or apostrophes.
pub fn validate_full_name(raw: &str) -> bool {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    if parts.len() < 2 {
        return false;
    }

    parts.iter().all(|part| {
        part.chars().count() >= 2
            && part
                .chars()
                .all(|c| c.is_alphabetic() || c == '-' || c == '\'')
    })
}

/// Parses a birth date with the fixed format and checks legal adulthood
/// against the supplied reference date.
pub fn validate_birth_date(
    raw: &str,
    reference: NaiveDate,
) -> Result<NaiveDate, BirthDateError> {
    let birth = NaiveDate::parse_from_str(raw.trim(), BIRTH_DATE_FORMAT)
        .map_err(|_| BirthDateError::Malformed)?;

    if age_in_years(birth, reference) < LEGAL_ADULT_AGE {
        return Err(BirthDateError::Underage);
    }

    Ok(birth)
}

/// Validates the requested coverage amount. No upper bound.
pub fn validate_coverage(amount: Decimal) -> bool {
    amount >= MINIMUM_COVERAGE
}

/// Runs the full rule set over a submission.
pub struct SubmissionValidator;

impl SubmissionValidator {
    /// Validates every field of `submission`, with ages computed as of
    /// `reference`.
    ///
    /// Returns the constructed [`Proposer`] when everything passes, or the
    /// complete list of violations otherwise. Rules are independent, so a
    /// submission can fail several at once.
    pub fn validate(
        submission: &Submission,
        reference: NaiveDate,
    ) -> Result<Proposer, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        if !validate_full_name(&submission.full_name) {
            violations.push(FieldViolation::new(
                "name",
                "The full name is not in a valid format.",
            ));
        }

        let document = IdentityDocument::new(&submission.document);
        if !document.is_valid() {
            violations.push(FieldViolation::new(
                "identityDocument",
                "The identity document is invalid.",
            ));
        }

        let birth_date = match validate_birth_date(&submission.birth_date, reference) {
            Ok(date) => Some(date),
            Err(error) => {
                violations.push(FieldViolation::new("birthDate", error.to_string()));
                None
            }
        };

        if !validate_coverage(submission.coverage) {
            violations.push(FieldViolation::new(
                "coverage",
                format!("The coverage must be at least {MINIMUM_COVERAGE}."),
            ));
        }

        match (violations.is_empty(), birth_date) {
            (true, Some(birth_date)) => Ok(Proposer {
                full_name: submission.full_name.trim().to_string(),
                document,
                birth_date,
                coverage: submission.coverage,
            }),
            _ => Err(violations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accepts_plain_two_part_names() {
        assert!(validate_full_name("Renato Silva"));
        assert!(validate_full_name("João da Silva"));
    }

    #[test]
    fn accepts_hyphens_apostrophes_and_accents() {
        assert!(validate_full_name("Maria D'Ávila-Souza"));
        assert!(validate_full_name("Jean-Pierre O'Neill"));
    }

    #[test]
    fn rejects_single_token_names() {
        assert!(!validate_full_name("Renato"));
        assert!(!validate_full_name("   Renato   "));
    }

    #[test]
    fn rejects_short_or_non_letter_parts() {
        assert!(!validate_full_name("Fabio S"));
        assert!(!validate_full_name("Renato Si1va"));
    }

    #[test]
    fn rejects_empty_and_whitespace_names() {
        assert!(!validate_full_name(""));
        assert!(!validate_full_name("   "));
    }

    #[test]
    fn exact_legal_age_is_accepted() {
        let reference = date(2024, 6, 1);
        assert_eq!(
            validate_birth_date("2006-06-01", reference),
            Ok(date(2006, 6, 1))
        );
    }

    #[test]
    fn one_day_short_of_legal_age_is_underage() {
        let reference = date(2024, 6, 1);
        assert_eq!(
            validate_birth_date("2006-06-02", reference),
            Err(BirthDateError::Underage)
        );
    }

    #[test]
    fn unparseable_dates_are_malformed() {
        let reference = date(2024, 6, 1);
        assert_eq!(
            validate_birth_date("13/25/2000", reference),
            Err(BirthDateError::Malformed)
        );
        assert_eq!(
            validate_birth_date("not-a-date", reference),
            Err(BirthDateError::Malformed)
        );
    }

    #[test]
    fn coverage_boundary() {
        assert!(validate_coverage(dec!(100000)));
        assert!(validate_coverage(dec!(1000000)));
        assert!(!validate_coverage(dec!(99999.99)));
    }

    #[test]
    fn valid_submission_builds_a_canonical_proposer() {
        let submission = Submission {
            full_name: "Renato Silva".to_string(),
            document: "908.630.180-09".to_string(),
            birth_date: "1990-05-10".to_string(),
            coverage: dec!(150000),
        };

        let proposer = SubmissionValidator::validate(&submission, date(2024, 6, 1)).unwrap();
        assert_eq!(proposer.document.as_str(), "90863018009");
        assert_eq!(proposer.birth_date, date(1990, 5, 10));
    }

    #[test]
    fn all_violations_are_reported_together() {
        let submission = Submission {
            full_name: "Renato".to_string(),
            document: "123.456.789-10".to_string(),
            birth_date: "2020-01-01".to_string(),
            coverage: dec!(90000),
        };

        let violations =
            SubmissionValidator::validate(&submission, date(2024, 6, 1)).unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["name", "identityDocument", "birthDate", "coverage"]
        );
    }

    #[test]
    fn underage_violation_names_the_birth_date_field() {
        let submission = Submission {
            full_name: "Rodrigo Santos".to_string(),
            document: "289.810.560-05".to_string(),
            birth_date: "2020-12-10".to_string(),
            coverage: dec!(150000),
        };

        let violations =
            SubmissionValidator::validate(&submission, date(2024, 6, 1)).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "birthDate");
        assert!(violations[0].message.contains("18"));
    }
}
