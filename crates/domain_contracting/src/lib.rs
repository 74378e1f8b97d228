//! Contracting Domain
//!
//! This crate implements the intake of insurance-contracting requests:
//!
//! - **Validation**: a composable set of pure rules over a submission
//!   (identity-document checksum, full-name shape, legal-adult age,
//!   minimum coverage), each failure reported as a field/message pair.
//! - **Authorization**: an async port to the external authorization
//!   dependency, with a fail-closed HTTP adapter — a dependency outage is a
//!   business denial, never a system fault.
//! - **Registry**: the shared store of accepted proposers, keyed by
//!   canonical identity document, with an atomic check-and-insert.
//! - **Workflow**: the single-pass orchestration tying the above together
//!   and returning one of four explicit outcomes.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_contracting::{
//!     ContractingOutcome, ContractingWorkflow, ProposerRegistry, Submission,
//! };
//! use domain_contracting::ports::mock::MockAuthorizationPort;
//! use rust_decimal_macros::dec;
//!
//! let registry = Arc::new(ProposerRegistry::new());
//! let workflow = ContractingWorkflow::new(
//!     registry,
//!     Arc::new(MockAuthorizationPort::allowing()),
//! );
//!
//! let outcome = workflow
//!     .submit(Submission {
//!         full_name: "Renato Silva".to_string(),
//!         document: "908.630.180-09".to_string(),
//!         birth_date: "1990-05-10".to_string(),
//!         coverage: dec!(150000),
//!     })
//!     .await;
//!
//! assert!(matches!(outcome, ContractingOutcome::Registered(_)));
//! ```

pub mod adapters;
pub mod error;
pub mod ports;
pub mod proposer;
pub mod registry;
pub mod validation;
pub mod workflow;

pub use adapters::{AuthorizerConfig, ExternalAuthorizer};
pub use error::{BirthDateError, ContractingError};
pub use ports::{AuthorizationDecision, AuthorizationPort, AuthorizationResult};
pub use proposer::{Proposer, Submission};
pub use registry::ProposerRegistry;
pub use validation::{FieldViolation, SubmissionValidator};
pub use workflow::{ContractingOutcome, ContractingWorkflow};
