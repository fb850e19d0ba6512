//! # Driving Ports (API - Inbound)
//!
//! The interfaces exposed by the asset record manager. The invocation layer
//! uses [`AssetContractApi`] for typed access and the [`Operation`] table to
//! route named operations as Submit or Evaluate.

use crate::domain::entities::Asset;
use crate::errors::ContractError;

// =============================================================================
// OPERATION TABLE
// =============================================================================

/// How an operation must be invoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvocationKind {
    /// State-changing; must be ordered and agreed by all participants
    /// before it takes effect.
    Submit,
    /// Read-only; served from local state with no ordering guarantee.
    Evaluate,
}

/// The named operations of the asset contract.
///
/// Submit vs Evaluate is a property of the operation name, fixed by this
/// table; it is never a caller-selectable flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Seed the six fixed sample assets.
    InitLedger,
    /// Issue a new asset.
    CreateAsset,
    /// Read one asset by ID.
    ReadAsset,
    /// Overwrite an existing asset.
    UpdateAsset,
    /// Remove an asset.
    DeleteAsset,
    /// Change an asset's owner, returning the previous owner.
    TransferAsset,
    /// Check presence of an ID.
    AssetExists,
    /// List every asset in key order.
    GetAllAssets,
}

impl Operation {
    /// All operations, in table order.
    pub const ALL: [Operation; 8] = [
        Operation::InitLedger,
        Operation::CreateAsset,
        Operation::ReadAsset,
        Operation::UpdateAsset,
        Operation::DeleteAsset,
        Operation::TransferAsset,
        Operation::AssetExists,
        Operation::GetAllAssets,
    ];

    /// Resolve an operation from its wire name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "InitLedger" => Some(Self::InitLedger),
            "CreateAsset" => Some(Self::CreateAsset),
            "ReadAsset" => Some(Self::ReadAsset),
            "UpdateAsset" => Some(Self::UpdateAsset),
            "DeleteAsset" => Some(Self::DeleteAsset),
            "TransferAsset" => Some(Self::TransferAsset),
            "AssetExists" => Some(Self::AssetExists),
            "GetAllAssets" => Some(Self::GetAllAssets),
            _ => None,
        }
    }

    /// The operation's wire name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::InitLedger => "InitLedger",
            Self::CreateAsset => "CreateAsset",
            Self::ReadAsset => "ReadAsset",
            Self::UpdateAsset => "UpdateAsset",
            Self::DeleteAsset => "DeleteAsset",
            Self::TransferAsset => "TransferAsset",
            Self::AssetExists => "AssetExists",
            Self::GetAllAssets => "GetAllAssets",
        }
    }

    /// Whether the operation mutates state (Submit) or only reads it
    /// (Evaluate).
    #[must_use]
    pub fn kind(self) -> InvocationKind {
        match self {
            Self::InitLedger
            | Self::CreateAsset
            | Self::UpdateAsset
            | Self::DeleteAsset
            | Self::TransferAsset => InvocationKind::Submit,
            Self::ReadAsset | Self::AssetExists | Self::GetAllAssets => InvocationKind::Evaluate,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ASSET CONTRACT API (Primary Driving Port)
// =============================================================================

/// Typed API of the asset record manager.
///
/// Every operation executes to completion within one logical transaction
/// context against the world-state port; none suspends mid-flight. The
/// implementation must stay deterministic across independent re-execution
/// (no clock, no randomness).
pub trait AssetContractApi: Send + Sync {
    /// Seed the six fixed sample assets, overwriting unconditionally.
    fn init_ledger(&self) -> Result<(), ContractError>;

    /// Issue a new asset.
    ///
    /// Fails with [`ContractError::AlreadyExists`] if `id` is present.
    fn create_asset(
        &self,
        id: &str,
        color: &str,
        size: i64,
        owner: &str,
        appraised_value: i64,
    ) -> Result<(), ContractError>;

    /// Read the asset stored under `id`.
    ///
    /// Fails with [`ContractError::NotFound`] if absent, or
    /// [`ContractError::Serialization`] if the stored bytes are corrupt.
    fn read_asset(&self, id: &str) -> Result<Asset, ContractError>;

    /// Fully overwrite an existing asset.
    ///
    /// Fails with [`ContractError::NotFound`] if `id` is absent.
    fn update_asset(
        &self,
        id: &str,
        color: &str,
        size: i64,
        owner: &str,
        appraised_value: i64,
    ) -> Result<(), ContractError>;

    /// Remove the asset stored under `id`.
    ///
    /// Fails with [`ContractError::NotFound`] if absent.
    fn delete_asset(&self, id: &str) -> Result<(), ContractError>;

    /// Change the owner of `id` to `new_owner`.
    ///
    /// # Returns
    ///
    /// * `String` - The previous owner
    fn transfer_asset(&self, id: &str, new_owner: &str) -> Result<String, ContractError>;

    /// Check whether an asset exists under `id`.
    fn asset_exists(&self, id: &str) -> Result<bool, ContractError>;

    /// List every asset in the namespace, ordered by key.
    ///
    /// An empty ledger yields an empty vec, not an error.
    fn get_all_assets(&self) -> Result<Vec<Asset>, ContractError>;
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_name_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::parse(op.name()), Some(op));
        }
    }

    #[test]
    fn test_unknown_operation_rejected() {
        assert_eq!(Operation::parse("MintAsset"), None);
        assert_eq!(Operation::parse(""), None);
        // Names are case-sensitive
        assert_eq!(Operation::parse("createAsset"), None);
    }

    #[test]
    fn test_submit_evaluate_classification() {
        use InvocationKind::{Evaluate, Submit};

        assert_eq!(Operation::InitLedger.kind(), Submit);
        assert_eq!(Operation::CreateAsset.kind(), Submit);
        assert_eq!(Operation::UpdateAsset.kind(), Submit);
        assert_eq!(Operation::DeleteAsset.kind(), Submit);
        assert_eq!(Operation::TransferAsset.kind(), Submit);

        assert_eq!(Operation::ReadAsset.kind(), Evaluate);
        assert_eq!(Operation::AssetExists.kind(), Evaluate);
        assert_eq!(Operation::GetAllAssets.kind(), Evaluate);
    }
}
