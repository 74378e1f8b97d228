//! Authorization port
//!
//! The workflow never talks HTTP directly; it depends on this trait. The
//! production implementation is [`crate::adapters::ExternalAuthorizer`];
//! tests use the mock below.

use async_trait::async_trait;

/// Outcome of the external authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationDecision {
    /// The dependency explicitly authorized the request
    Authorized,
    /// The dependency explicitly declined the request
    Denied,
    /// The dependency could not be consulted; treated as not authorized
    Unreachable,
}

/// Decision plus optional diagnostic text, produced once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationResult {
    pub decision: AuthorizationDecision,
    pub message: Option<String>,
}

impl AuthorizationResult {
    pub fn authorized(message: Option<String>) -> Self {
        Self {
            decision: AuthorizationDecision::Authorized,
            message,
        }
    }

    pub fn denied(message: Option<String>) -> Self {
        Self {
            decision: AuthorizationDecision::Denied,
            message,
        }
    }

    /// A failed call to the dependency, carrying its diagnostic. Collapses
    /// to "not authorized" for workflow purposes.
    pub fn unreachable(diagnostic: impl Into<String>) -> Self {
        Self {
            decision: AuthorizationDecision::Unreachable,
            message: Some(diagnostic.into()),
        }
    }

    /// Only an explicit `Authorized` counts.
    pub fn is_authorized(&self) -> bool {
        self.decision == AuthorizationDecision::Authorized
    }
}

/// Port to the external authorization dependency.
///
/// Implementations must be fail-closed: a transport or protocol failure is
/// returned as an [`AuthorizationResult`] with `Unreachable`, never as an
/// error the caller has to handle.
#[async_trait]
pub trait AuthorizationPort: Send + Sync {
    async fn authorize(&self) -> AuthorizationResult;
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    //! Canned authorization port for tests.

    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Port returning a fixed result, counting calls.
    #[derive(Debug)]
    pub struct MockAuthorizationPort {
        result: AuthorizationResult,
        calls: AtomicUsize,
    }

    impl MockAuthorizationPort {
        pub fn with_result(result: AuthorizationResult) -> Self {
            Self {
                result,
                calls: AtomicUsize::new(0),
            }
        }

        /// Always authorizes.
        pub fn allowing() -> Self {
            Self::with_result(AuthorizationResult::authorized(None))
        }

        /// Always declines.
        pub fn denying() -> Self {
            Self::with_result(AuthorizationResult::denied(Some(
                "Authorization declined".to_string(),
            )))
        }

        /// Simulates an unreachable dependency.
        pub fn unreachable() -> Self {
            Self::with_result(AuthorizationResult::unreachable("connection refused"))
        }

        /// Number of times the port was consulted.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AuthorizationPort for MockAuthorizationPort {
        async fn authorize(&self) -> AuthorizationResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_explicit_authorization_counts() {
        assert!(AuthorizationResult::authorized(None).is_authorized());
        assert!(!AuthorizationResult::denied(None).is_authorized());
        assert!(!AuthorizationResult::unreachable("timeout").is_authorized());
    }

    #[test]
    fn unreachable_keeps_the_diagnostic() {
        let result = AuthorizationResult::unreachable("connect timed out");
        assert_eq!(result.decision, AuthorizationDecision::Unreachable);
        assert_eq!(result.message.as_deref(), Some("connect timed out"));
    }
}
