//! Contracting workflow
//!
//! Single-pass orchestration of a submission: validate, authorize,
//! register. Each submission runs as its own task; the only suspension
//! point is the authorization call, so concurrent submissions only contend
//! on the registry's critical section. Dropping the future while the
//! authorization call is in flight aborts the call and leaves the registry
//! untouched.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use core_kernel::IdentityDocument;

use crate::ports::AuthorizationPort;
use crate::proposer::{Proposer, Submission};
use crate::registry::ProposerRegistry;
use crate::validation::{FieldViolation, SubmissionValidator};

/// Terminal outcome of one submission.
///
/// All four are ordinary results: rejection, denial, and conflict are
/// business outcomes, not errors, and are never raised as faults.
#[derive(Debug, Clone, PartialEq)]
pub enum ContractingOutcome {
    /// Every rule passed, authorization was granted, and the proposer was
    /// inserted into the registry
    Registered(Proposer),
    /// One or more validation rules failed; nothing else was attempted
    Rejected(Vec<FieldViolation>),
    /// The external dependency declined the request or could not be
    /// consulted (fail-closed)
    Denied { reason: Option<String> },
    /// A proposer with the same canonical document is already registered
    Conflict { document: IdentityDocument },
}

/// Orchestrates validation, external authorization, and registration.
pub struct ContractingWorkflow {
    registry: Arc<ProposerRegistry>,
    authorizer: Arc<dyn AuthorizationPort>,
}

impl ContractingWorkflow {
    pub fn new(registry: Arc<ProposerRegistry>, authorizer: Arc<dyn AuthorizationPort>) -> Self {
        Self {
            registry,
            authorizer,
        }
    }

    /// Processes a submission with ages computed as of today.
    pub async fn submit(&self, submission: Submission) -> ContractingOutcome {
        self.submit_as_of(submission, Utc::now().date_naive()).await
    }

    /// Processes a submission against an explicit reference date.
    ///
    /// The reference date only affects the age rule; tests use it to pin
    /// wall-clock-dependent behavior.
    pub async fn submit_as_of(
        &self,
        submission: Submission,
        reference: NaiveDate,
    ) -> ContractingOutcome {
        let proposer = match SubmissionValidator::validate(&submission, reference) {
            Ok(proposer) => proposer,
            Err(violations) => {
                tracing::debug!(count = violations.len(), "submission rejected by validation");
                return ContractingOutcome::Rejected(violations);
            }
        };

        let authorization = self.authorizer.authorize().await;
        if !authorization.is_authorized() {
            tracing::info!(
                document = %proposer.document,
                decision = ?authorization.decision,
                "contracting denied by authorization dependency"
            );
            return ContractingOutcome::Denied {
                reason: authorization.message,
            };
        }

        if self.registry.try_insert(proposer.clone()).await {
            tracing::info!(document = %proposer.document, "proposer registered");
            ContractingOutcome::Registered(proposer)
        } else {
            tracing::info!(document = %proposer.document, "duplicate submission");
            ContractingOutcome::Conflict {
                document: proposer.document,
            }
        }
    }
}
