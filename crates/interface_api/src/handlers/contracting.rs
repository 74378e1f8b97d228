//! Contracting handlers

use axum::{extract::State, Json};

use domain_contracting::ContractingOutcome;

use crate::dto::contracting::{ContractAcceptedResponse, ContractListResponse, ContractRequest};
use crate::error::ApiError;
use crate::AppState;

/// Submits a contracting request.
///
/// Every workflow outcome maps to an explicit response: 200 with the
/// accepted proposer, 422 with per-field violations, 401 on authorization
/// denial (external-dependency failures included), 409 on a duplicate
/// identity document.
pub async fn submit_contract(
    State(state): State<AppState>,
    Json(request): Json<ContractRequest>,
) -> Result<Json<ContractAcceptedResponse>, ApiError> {
    match state.workflow.submit(request.into()).await {
        ContractingOutcome::Registered(proposer) => Ok(Json(ContractAcceptedResponse {
            message: "Contract completed.".to_string(),
            proposer,
        })),
        ContractingOutcome::Rejected(violations) => Err(ApiError::ValidationFailed(violations)),
        ContractingOutcome::Denied { reason } => Err(ApiError::AuthorizationDenied(reason)),
        ContractingOutcome::Conflict { document } => Err(ApiError::Conflict(format!(
            "The identity document '{document}' has already contracted insurance."
        ))),
    }
}

/// Lists accepted proposers with a count-sensitive message.
pub async fn list_contracts(State(state): State<AppState>) -> Json<ContractListResponse> {
    let proposers = state.registry.list().await;

    let (message, proposers) = match proposers.len() {
        0 => ("There are no registered proposers.".to_string(), None),
        1 => ("We have 1 proposer registered.".to_string(), Some(proposers)),
        n => (
            format!("We have {n} proposers registered."),
            Some(proposers),
        ),
    };

    Json(ContractListResponse { message, proposers })
}
