//! Adapters to external systems

pub mod external_authorizer;

pub use external_authorizer::{AuthorizerConfig, ExternalAuthorizer};
