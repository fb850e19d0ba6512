//! # Error Types
//!
//! All error types for asset record management.

use thiserror::Error;

// =============================================================================
// LEDGER ERRORS
// =============================================================================

/// Errors from the world-state backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Underlying store failed to read or write.
    #[error("world state I/O failure: {0}")]
    Io(String),

    /// A range-scan iterator was used after being closed.
    #[error("range scan iterator already closed")]
    IteratorClosed,
}

// =============================================================================
// CONTRACT ERRORS
// =============================================================================

/// Errors from asset record operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// Operation target key is absent.
    #[error("the asset {id} does not exist")]
    NotFound {
        /// ID the operation targeted.
        id: String,
    },

    /// Create target key is already present.
    #[error("the asset {id} already exists")]
    AlreadyExists {
        /// ID the create targeted.
        id: String,
    },

    /// Stored bytes are not a well-formed asset encoding, or encoding failed.
    #[error("asset serialization failure: {0}")]
    Serialization(String),

    /// World-state access failed.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

impl ContractError {
    /// Returns true if this error indicates a missing record rather than a
    /// store or encoding failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_error_display() {
        let err = ContractError::NotFound {
            id: "asset9".to_string(),
        };
        assert_eq!(err.to_string(), "the asset asset9 does not exist");

        let err = ContractError::AlreadyExists {
            id: "asset1".to_string(),
        };
        assert_eq!(err.to_string(), "the asset asset1 already exists");
    }

    #[test]
    fn test_ledger_error_conversion() {
        let ledger_err = LedgerError::Io("disk full".to_string());
        let err: ContractError = ledger_err.into();
        assert!(matches!(err, ContractError::Ledger(_)));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(ContractError::NotFound {
            id: "x".to_string()
        }
        .is_not_found());
        assert!(!ContractError::Ledger(LedgerError::IteratorClosed).is_not_found());
    }
}
