//! # Error Types
//!
//! Errors crossing the invocation boundary. Contract failures are wrapped
//! with the operation name so callers can user-report them.

use asset_contract::prelude::{ContractError, InvocationKind};
use thiserror::Error;

/// Errors from Submit/Evaluate invocations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A client-supplied string argument could not be parsed to its typed
    /// form. Raised before any ledger access.
    #[error("invalid argument {argument:?} for {operation}: {reason}")]
    InvalidArgument {
        /// Operation being invoked.
        operation: String,
        /// Offending argument value.
        argument: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The operation name is not in the contract's table.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// The operation was invoked through the wrong verb; its
    /// classification is fixed by name.
    #[error("{operation} must be invoked as {expected:?}")]
    WrongInvocationKind {
        /// Operation being invoked.
        operation: String,
        /// The verb the table requires.
        expected: InvocationKind,
    },

    /// The contract operation itself failed.
    #[error("operation {operation} failed: {source}")]
    Invocation {
        /// Operation being invoked.
        operation: String,
        /// Underlying contract failure.
        #[source]
        source: ContractError,
    },

    /// The invocation could not be delivered or its result was lost.
    #[error("invocation delivery failure: {0}")]
    Delivery(String),

    /// A result payload came back in an unexpected shape.
    #[error("malformed result payload for {operation}: {reason}")]
    MalformedPayload {
        /// Operation whose payload was rejected.
        operation: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The invocation did not complete within the configured budget.
    #[error("invocation timeout after {timeout_ms}ms")]
    Timeout {
        /// Configured budget in milliseconds.
        timeout_ms: u64,
    },
}

impl GatewayError {
    /// The contract failure behind this error, if any.
    #[must_use]
    pub fn contract_cause(&self) -> Option<&ContractError> {
        match self {
            Self::Invocation { source, .. } => Some(source),
            _ => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
