//! HTTP API Layer
//!
//! This crate provides the REST API for the contracting intake system using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: token issuance, contracting submission, listing, health
//! - **Middleware**: JWT authentication and audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: consistent JSON error responses; business outcomes
//!   (denial, conflict, validation failure) are explicit responses, never
//!   internal faults
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_contracting::{
    AuthorizationPort, AuthorizerConfig, ContractingError, ContractingWorkflow, ExternalAuthorizer,
    ProposerRegistry,
};

use crate::auth::{CredentialVerifier, StaticCredentials};
use crate::config::ApiConfig;
use crate::handlers::{auth as auth_handlers, contracting, health};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ProposerRegistry>,
    pub workflow: Arc<ContractingWorkflow>,
    pub credentials: Arc<dyn CredentialVerifier>,
    pub config: ApiConfig,
}

impl AppState {
    /// Wires the production dependency graph from configuration: one
    /// registry, one authorizer client, one workflow, static credentials.
    pub fn from_config(config: ApiConfig) -> Result<Self, ContractingError> {
        let authorizer = Arc::new(ExternalAuthorizer::new(AuthorizerConfig {
            endpoint: config.authorizer_url.clone(),
            timeout_secs: config.authorizer_timeout_secs,
        })?);

        Ok(Self::with_authorizer(config, authorizer))
    }

    /// Like [`AppState::from_config`] but with a caller-supplied
    /// authorization port. Tests use this to swap in a mock or a stub.
    pub fn with_authorizer(config: ApiConfig, authorizer: Arc<dyn AuthorizationPort>) -> Self {
        let registry = Arc::new(ProposerRegistry::new());
        let workflow = Arc::new(ContractingWorkflow::new(registry.clone(), authorizer));
        let credentials = Arc::new(StaticCredentials::new(
            config.auth_username.clone(),
            config.auth_password.clone(),
        ));

        Self {
            registry,
            workflow,
            credentials,
            config,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/auth/login", post(auth_handlers::login));

    // Contracting routes
    let contract_routes = Router::new()
        .route("/", post(contracting::submit_contract))
        .route("/", get(contracting::list_contracts));

    // Protected API routes; auth runs first so the audit log sees the user
    let api_routes = Router::new()
        .nest("/contracts", contract_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
