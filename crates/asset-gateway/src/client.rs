//! # Typed Asset Client
//!
//! Convenience facade over a [`TransactionGateway`]: typed arguments go
//! in, typed results come out, and each operation is routed through the
//! verb its name is classified under. Callers never choose Submit vs
//! Evaluate themselves.

use crate::errors::GatewayError;
use crate::invocation::TransactionGateway;
use asset_contract::prelude::{Asset, Operation};

use std::sync::Arc;
use tracing::info;

/// Typed client for the asset contract.
#[derive(Clone)]
pub struct AssetClient {
    gateway: Arc<dyn TransactionGateway>,
}

impl AssetClient {
    /// Create a client over any gateway implementation.
    pub fn new(gateway: Arc<dyn TransactionGateway>) -> Self {
        Self { gateway }
    }

    /// Route `op` through the verb fixed by its table classification.
    async fn invoke(&self, op: Operation, args: Vec<String>) -> Result<Vec<u8>, GatewayError> {
        use asset_contract::prelude::InvocationKind;

        match op.kind() {
            InvocationKind::Submit => self.gateway.submit(op.name(), &args).await,
            InvocationKind::Evaluate => self.gateway.evaluate(op.name(), &args).await,
        }
    }

    fn malformed(op: Operation, reason: impl std::fmt::Display) -> GatewayError {
        GatewayError::MalformedPayload {
            operation: op.name().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Seed the ledger with the six fixed sample assets.
    pub async fn init_ledger(&self) -> Result<(), GatewayError> {
        self.invoke(Operation::InitLedger, Vec::new()).await?;
        info!("ledger initialized");
        Ok(())
    }

    /// Issue a new asset.
    pub async fn create_asset(
        &self,
        id: &str,
        color: &str,
        size: i64,
        owner: &str,
        appraised_value: i64,
    ) -> Result<(), GatewayError> {
        self.invoke(
            Operation::CreateAsset,
            vec![
                id.to_string(),
                color.to_string(),
                size.to_string(),
                owner.to_string(),
                appraised_value.to_string(),
            ],
        )
        .await?;
        info!(id, "asset created");
        Ok(())
    }

    /// Read one asset by ID.
    pub async fn read_asset(&self, id: &str) -> Result<Asset, GatewayError> {
        let payload = self
            .invoke(Operation::ReadAsset, vec![id.to_string()])
            .await?;
        serde_json::from_slice(&payload).map_err(|e| Self::malformed(Operation::ReadAsset, e))
    }

    /// Fully overwrite an existing asset.
    pub async fn update_asset(
        &self,
        id: &str,
        color: &str,
        size: i64,
        owner: &str,
        appraised_value: i64,
    ) -> Result<(), GatewayError> {
        self.invoke(
            Operation::UpdateAsset,
            vec![
                id.to_string(),
                color.to_string(),
                size.to_string(),
                owner.to_string(),
                appraised_value.to_string(),
            ],
        )
        .await?;
        info!(id, "asset updated");
        Ok(())
    }

    /// Remove an asset.
    pub async fn delete_asset(&self, id: &str) -> Result<(), GatewayError> {
        self.invoke(Operation::DeleteAsset, vec![id.to_string()])
            .await?;
        info!(id, "asset deleted");
        Ok(())
    }

    /// Change an asset's owner.
    ///
    /// # Returns
    ///
    /// * `String` - The previous owner
    pub async fn transfer_asset(&self, id: &str, new_owner: &str) -> Result<String, GatewayError> {
        let payload = self
            .invoke(
                Operation::TransferAsset,
                vec![id.to_string(), new_owner.to_string()],
            )
            .await?;
        let old_owner = String::from_utf8(payload)
            .map_err(|e| Self::malformed(Operation::TransferAsset, e))?;
        info!(id, old_owner, new_owner, "asset transferred");
        Ok(old_owner)
    }

    /// Check presence of an asset ID.
    pub async fn asset_exists(&self, id: &str) -> Result<bool, GatewayError> {
        let payload = self
            .invoke(Operation::AssetExists, vec![id.to_string()])
            .await?;
        match payload.as_slice() {
            b"true" => Ok(true),
            b"false" => Ok(false),
            other => Err(Self::malformed(
                Operation::AssetExists,
                format!("expected boolean text, got {} bytes", other.len()),
            )),
        }
    }

    /// List every asset, ordered by key.
    pub async fn get_all_assets(&self) -> Result<Vec<Asset>, GatewayError> {
        let payload = self.invoke(Operation::GetAllAssets, Vec::new()).await?;
        serde_json::from_slice(&payload).map_err(|e| Self::malformed(Operation::GetAllAssets, e))
    }
}

// =============================================================================
// TESTS
// =============================================================================
