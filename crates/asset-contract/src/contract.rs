//! # Asset Contract Service
//!
//! The record manager: CRUD/transfer operations over the world-state port
//! using the canonical codec.
//!
//! ## Execution Model
//!
//! Each operation runs to completion inside one logical transaction
//! context. Concurrent Submit transactions are NOT serialized here; the
//! external ledger's optimistic concurrency control rejects conflicting
//! writes at commit time. Operations therefore fail fast on the first
//! error, mutate nothing before their existence checks pass, and perform
//! no wall-clock reads or other non-determinism, so independent
//! re-execution by agreement participants stays byte-identical.

use crate::domain::codec::{decode_asset, encode_asset};
use crate::domain::entities::{sample_assets, Asset};
use crate::errors::ContractError;
use crate::ports::inbound::AssetContractApi;
use crate::ports::outbound::WorldState;

use tracing::{debug, instrument};

/// The asset record manager, generic over the world-state backend.
///
/// The service holds no entity state of its own; every operation re-reads
/// from the world state, and returned values are owned by the caller.
pub struct AssetContract<S: WorldState> {
    state: S,
}

impl<S: WorldState> AssetContract<S> {
    /// Create a record manager over the given world-state backend.
    pub fn new(state: S) -> Self {
        Self { state }
    }

    /// Access the underlying world-state backend.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Encode `asset` and write it under its own ID.
    fn put_asset(&self, asset: &Asset) -> Result<(), ContractError> {
        let bytes = encode_asset(asset)?;
        self.state.put(&asset.id, bytes)?;
        Ok(())
    }
}

impl<S: WorldState> AssetContractApi for AssetContract<S> {
    #[instrument(skip(self))]
    fn init_ledger(&self) -> Result<(), ContractError> {
        // Unconditional puts: the seed is an idempotent reset of exactly
        // these six keys, with no existence check.
        for asset in sample_assets() {
            self.put_asset(&asset)?;
        }
        debug!("seeded sample assets");
        Ok(())
    }

    #[instrument(skip(self))]
    fn create_asset(
        &self,
        id: &str,
        color: &str,
        size: i64,
        owner: &str,
        appraised_value: i64,
    ) -> Result<(), ContractError> {
        if self.asset_exists(id)? {
            return Err(ContractError::AlreadyExists { id: id.to_string() });
        }

        let asset = Asset::new(id, color, size, owner, appraised_value);
        self.put_asset(&asset)?;
        debug!(id, "asset created");
        Ok(())
    }

    #[instrument(skip(self))]
    fn read_asset(&self, id: &str) -> Result<Asset, ContractError> {
        let bytes = self
            .state
            .get(id)?
            .ok_or_else(|| ContractError::NotFound { id: id.to_string() })?;
        decode_asset(&bytes)
    }

    #[instrument(skip(self))]
    fn update_asset(
        &self,
        id: &str,
        color: &str,
        size: i64,
        owner: &str,
        appraised_value: i64,
    ) -> Result<(), ContractError> {
        if !self.asset_exists(id)? {
            return Err(ContractError::NotFound { id: id.to_string() });
        }

        // Full overwrite; there is no partial-field update.
        let asset = Asset::new(id, color, size, owner, appraised_value);
        self.put_asset(&asset)?;
        debug!(id, "asset updated");
        Ok(())
    }

    #[instrument(skip(self))]
    fn delete_asset(&self, id: &str) -> Result<(), ContractError> {
        if !self.asset_exists(id)? {
            return Err(ContractError::NotFound { id: id.to_string() });
        }

        // A key vanishing between the check and the delete is resolved by
        // the ledger's concurrency control, not re-checked here.
        self.state.delete(id)?;
        debug!(id, "asset deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    fn transfer_asset(&self, id: &str, new_owner: &str) -> Result<String, ContractError> {
        // Read-modify-write on the owner field only. No compare-and-swap
        // at this layer; conflicting concurrent transfers are rejected at
        // commit time by the external ledger.
        let mut asset = self.read_asset(id)?;

        let old_owner = std::mem::replace(&mut asset.owner, new_owner.to_string());
        self.put_asset(&asset)?;
        debug!(id, old_owner, new_owner, "asset transferred");
        Ok(old_owner)
    }

    #[instrument(skip(self))]
    fn asset_exists(&self, id: &str) -> Result<bool, ContractError> {
        Ok(self.state.get(id)?.is_some())
    }

    #[instrument(skip(self))]
    fn get_all_assets(&self) -> Result<Vec<Asset>, ContractError> {
        // Open-ended scan of the whole namespace, in key order. The scan
        // guard releases the iterator on every exit path, including decode
        // failures mid-scan.
        let mut scan = self.state.range_scan("", "")?;

        let mut assets = Vec::new();
        while let Some((_key, value)) = scan.next_entry()? {
            assets.push(decode_asset(&value)?);
        }

        scan.close()?;
        Ok(assets)
    }
}

// =============================================================================
// TESTS
// =============================================================================
