//! Error types for pricing and grid construction.

use thiserror::Error;

/// Errors raised by the pricing core.
///
/// Validation runs once at the entry of each public operation, before any
/// numeric work, so a returned error always means no partial result exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// An input failed its precondition.
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter {
        /// Name of the offending input
        field: &'static str,
        /// Human readable description of the violation
        reason: String,
    },
}

impl PricingError {
    /// Build an `InvalidParameter` error and log the rejection.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        let err = PricingError::InvalidParameter {
            field,
            reason: reason.into(),
        };
        tracing::warn!(%err, "rejected input");
        err
    }

    /// Field name carried by an `InvalidParameter` error.
    pub fn field(&self) -> &'static str {
        match self {
            PricingError::InvalidParameter { field, .. } => field,
        }
    }
}

pub type PricingResult<T> = std::result::Result<T, PricingError>;
