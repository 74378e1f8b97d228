//! Contracting DTOs

use domain_contracting::{Proposer, Submission};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inbound contracting request payload.
///
/// The identity document may carry any punctuation; the birth date is text
/// in the fixed `YYYY-MM-DD` format.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRequest {
    pub name: String,
    pub identity_document: String,
    pub birth_date: String,
    pub coverage: Decimal,
}

impl From<ContractRequest> for Submission {
    fn from(request: ContractRequest) -> Self {
        Submission {
            full_name: request.name,
            document: request.identity_document,
            birth_date: request.birth_date,
            coverage: request.coverage,
        }
    }
}

/// Successful contracting response: confirmation plus the accepted
/// proposer in canonical form.
#[derive(Debug, Serialize)]
pub struct ContractAcceptedResponse {
    pub message: String,
    pub proposer: Proposer,
}

/// Listing response with a count-sensitive message. The proposer list is
/// omitted entirely when the registry is empty.
#[derive(Debug, Serialize)]
pub struct ContractListResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposers: Option<Vec<Proposer>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn request_uses_camel_case_wire_names() {
        let request: ContractRequest = serde_json::from_str(
            r#"{
                "name": "Renato Silva",
                "identityDocument": "908.630.180-09",
                "birthDate": "1990-05-10",
                "coverage": 150000
            }"#,
        )
        .unwrap();

        assert_eq!(request.identity_document, "908.630.180-09");
        assert_eq!(request.coverage, dec!(150000));

        let submission: Submission = request.into();
        assert_eq!(submission.full_name, "Renato Silva");
    }

    #[test]
    fn empty_listing_omits_the_proposer_array() {
        let body = ContractListResponse {
            message: "There are no registered proposers.".to_string(),
            proposers: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("proposers").is_none());
    }
}
