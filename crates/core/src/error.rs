//! Domain error model.

use thiserror::Error;

use crate::id::OrderItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Deterministic failures of pure domain code. Collaborator and persistence
/// failures are modelled by the processor crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A quantity adjustment fell outside the representable range.
    #[error("quantity of order item {0} out of range")]
    QuantityOverflow(OrderItemId),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
