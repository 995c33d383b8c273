//! Domain-level error type for the engine's restore boundary.
//!
//! Session commands never fail (business-rule violations are silent no-ops);
//! the only fallible surface is rebuilding a session from an externally
//! persisted snapshot, where corrupt data must be rejected.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Snapshot data violating a structural invariant (duplicate ids,
    /// references to unknown players, totals that do not match the ledger).
    #[error("validation error: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
}
