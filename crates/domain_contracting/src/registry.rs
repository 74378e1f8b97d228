//! Accepted-proposer registry
//!
//! One registry instance is shared by every in-flight submission. It is an
//! explicitly constructed component the owner injects where needed, never a
//! process global. Entries are append-only for the life of the process and
//! keyed by canonical identity document.

use tokio::sync::Mutex;

use crate::proposer::Proposer;

/// Shared, concurrency-safe store of accepted proposers.
///
/// The whole collection sits behind one async mutex so that the duplicate
/// check and the insert in [`ProposerRegistry::try_insert`] form a single
/// critical section: of any number of concurrent insertions with the same
/// canonical document, exactly one succeeds.
#[derive(Debug, Default)]
pub struct ProposerRegistry {
    entries: Mutex<Vec<Proposer>>,
}

impl ProposerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically checks for an existing entry with the same canonical
    /// document and inserts when there is none.
    ///
    /// Returns `true` when the proposer was inserted, `false` when a
    /// duplicate already exists (the registry is left untouched).
    pub async fn try_insert(&self, proposer: Proposer) -> bool {
        let mut entries = self.entries.lock().await;
        if entries.iter().any(|e| e.document == proposer.document) {
            return false;
        }
        entries.push(proposer);
        true
    }

    /// Returns a snapshot of all accepted proposers in insertion order.
    pub async fn list(&self) -> Vec<Proposer> {
        self.entries.lock().await.clone()
    }

    /// Number of accepted proposers.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}
