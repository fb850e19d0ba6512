//! # Asset Gateway - Transaction Invocation Layer
//!
//! Client-side routing of named asset-contract operations as either
//! **Submit** (ordered, consensus-bound, state-mutating) or **Evaluate**
//! (single-node, read-only) invocations, with string-argument marshaling
//! to the contract's typed API.
//!
//! ## Invocation Contract
//!
//! | Verb | Operations | Guarantee |
//! |------|------------|-----------|
//! | Submit | `InitLedger`, `CreateAsset`, `UpdateAsset`, `DeleteAsset`, `TransferAsset` | Ordered and agreed before taking effect |
//! | Evaluate | `ReadAsset`, `GetAllAssets`, `AssetExists` | Local committed state, no ordering relative to concurrent Submits |
//!
//! The verb is a property of the operation name, never a caller flag.
//! Arguments cross the boundary as strings; integer arguments are parsed
//! before any ledger access, and a parse failure surfaces as
//! [`GatewayError::InvalidArgument`] without touching state.
//!
//! ## Usage Example
//!
//! ```ignore
//! use asset_gateway::prelude::*;
//! use std::sync::Arc;
//!
//! let gateway = Arc::new(InProcessGateway::from_state(
//!     InMemoryWorldState::new(),
//!     GatewayConfig::default(),
//! ));
//! let client = AssetClient::new(gateway);
//!
//! client.init_ledger().await?;
//! let previous = client.transfer_asset("asset1", "Carol").await?;
//! assert_eq!(previous, "Tomoko");
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

pub mod client;
pub mod config;
pub mod errors;
pub mod gateway;
pub mod invocation;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::client::AssetClient;
    pub use crate::config::GatewayConfig;
    pub use crate::errors::GatewayError;
    pub use crate::gateway::InProcessGateway;
    pub use crate::invocation::TransactionGateway;

    // Re-exported contract surface commonly needed alongside the gateway
    pub use asset_contract::prelude::{
        Asset, AssetContractApi, InMemoryWorldState, InvocationKind, Operation,
    };
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
