//! # Asset Contract - Ledger-Backed Record Manager
//!
//! Manages `Asset` records in a replicated key-value world state. All
//! mutations flow through the contract operations; the underlying ordering
//! and replication engine is an external collaborator consumed through the
//! [`WorldState`](ports::outbound::WorldState) port.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Canonical encoding is byte-stable across executions | `domain/codec.rs` - field order fixed by `Asset` declaration |
//! | INVARIANT-2 | One world-state entry per asset ID | `contract.rs` - existence checks before every write |
//! | INVARIANT-3 | Writes replace the whole record, never a partial field set | `contract.rs` - all writes re-encode a full `Asset` |
//! | INVARIANT-4 | Absence is "entry not present", never a sentinel value | `ports/outbound.rs` - `get` returns `Option` |
//! | INVARIANT-5 | Range-scan iterators are released on every exit path | `ports/outbound.rs` - `RangeScan` closes on `Drop` |
//!
//! ## Determinism
//!
//! Independent re-execution of the same write by multiple agreement
//! participants must produce byte-identical output, or cross-node agreement
//! on the resulting state fails. Contract operations therefore perform no
//! clock reads, no randomness, and no I/O beyond the world-state port.
//!
//! ## Usage Example
//!
//! ```ignore
//! use asset_contract::prelude::*;
//!
//! let contract = AssetContract::new(InMemoryWorldState::new());
//! contract.init_ledger()?;
//!
//! let asset = contract.read_asset("asset1")?;
//! assert_eq!(asset.owner, "Tomoko");
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod contract;
pub mod domain;
pub mod errors;
pub mod ports;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{sample_assets, Asset};

    // Codec
    pub use crate::domain::codec::{decode_asset, encode_asset};

    // Ports
    pub use crate::ports::inbound::{AssetContractApi, InvocationKind, Operation};
    pub use crate::ports::outbound::{RangeScan, StateIterator, WorldState};

    // Errors
    pub use crate::errors::{ContractError, LedgerError};

    // Adapters
    pub use crate::adapters::InMemoryWorldState;

    // Contract service
    pub use crate::contract::AssetContract;
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_exports() {
        // Verify prelude exports compile
        use prelude::*;
        let contract = AssetContract::new(InMemoryWorldState::new());
        assert!(!contract.asset_exists("asset1").unwrap());
        assert!(!VERSION.is_empty());
    }
}
