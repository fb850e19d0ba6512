//! # In-Process Gateway
//!
//! [`TransactionGateway`] adapter that executes invocations against a
//! local [`AssetContract`]. It enforces the Submit/Evaluate table, applies
//! the configured invocation budget, and tags every invocation with a
//! correlation ID for log correlation.
//!
//! In production the same port is implemented by a network adapter that
//! carries Submit transactions through the ordering service; this adapter
//! stands in wherever a live ledger is not wired up (tests, local tools).

use crate::config::GatewayConfig;
use crate::errors::GatewayError;
use crate::invocation::{dispatch, TransactionGateway};
use asset_contract::contract::AssetContract;
use asset_contract::ports::inbound::{InvocationKind, Operation};
use asset_contract::ports::outbound::WorldState;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

/// Gateway executing invocations against an in-process contract.
pub struct InProcessGateway<S: WorldState + 'static> {
    contract: Arc<AssetContract<S>>,
    config: GatewayConfig,
}

impl<S: WorldState + 'static> InProcessGateway<S> {
    /// Wrap an existing contract.
    pub fn new(contract: Arc<AssetContract<S>>, config: GatewayConfig) -> Self {
        Self { contract, config }
    }

    /// Build a contract over `state` and wrap it.
    pub fn from_state(state: S, config: GatewayConfig) -> Self {
        Self::new(Arc::new(AssetContract::new(state)), config)
    }

    /// Access the wrapped contract.
    pub fn contract(&self) -> &AssetContract<S> {
        &self.contract
    }

    /// Route a named invocation, enforcing its table classification.
    async fn invoke(
        &self,
        verb: InvocationKind,
        operation: &str,
        args: &[String],
    ) -> Result<Vec<u8>, GatewayError> {
        let op = Operation::parse(operation)
            .ok_or_else(|| GatewayError::UnknownOperation(operation.to_string()))?;

        if op.kind() != verb {
            return Err(GatewayError::WrongInvocationKind {
                operation: operation.to_string(),
                expected: op.kind(),
            });
        }

        let correlation_id = Uuid::new_v4();
        debug!(
            %correlation_id,
            operation = %op,
            ?verb,
            namespace = %self.config.namespace,
            contract = %self.config.contract_name,
            "dispatching invocation"
        );

        // The contract runs synchronously to completion; execute it off
        // the async worker and bound the wait with the configured budget.
        let contract = Arc::clone(&self.contract);
        let owned_args = args.to_vec();
        let task = tokio::task::spawn_blocking(move || dispatch(contract.as_ref(), op, &owned_args));

        let timeout_ms = self.config.invocation_timeout_ms;
        let result = tokio::time::timeout(Duration::from_millis(timeout_ms), task)
            .await
            .map_err(|_| GatewayError::Timeout { timeout_ms })?
            .map_err(|e| GatewayError::Delivery(format!("invocation task failed: {e}")))?;

        match &result {
            Ok(payload) => debug!(
                %correlation_id,
                operation = %op,
                payload_len = payload.len(),
                "invocation completed"
            ),
            Err(e) => warn!(%correlation_id, operation = %op, error = %e, "invocation failed"),
        }

        result
    }
}

#[async_trait]
impl<S: WorldState + 'static> TransactionGateway for InProcessGateway<S> {
    async fn submit(&self, operation: &str, args: &[String]) -> Result<Vec<u8>, GatewayError> {
        self.invoke(InvocationKind::Submit, operation, args).await
    }

    async fn evaluate(&self, operation: &str, args: &[String]) -> Result<Vec<u8>, GatewayError> {
        self.invoke(InvocationKind::Evaluate, operation, args).await
    }
}

// =============================================================================
// TESTS
// =============================================================================
