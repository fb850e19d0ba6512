//! # Invocation Port and Argument Marshaling
//!
//! [`TransactionGateway`] is the outbound boundary of the client: named
//! operations with string arguments go out, result payload bytes come
//! back. The marshaling here converts string arguments to the contract's
//! typed API and typed results to payload bytes.
//!
//! ## Result Payload Conventions
//!
//! | Operation | Payload |
//! |-----------|---------|
//! | `InitLedger`, `CreateAsset`, `UpdateAsset`, `DeleteAsset` | empty |
//! | `ReadAsset` | canonical asset JSON |
//! | `GetAllAssets` | JSON array of canonical asset objects |
//! | `AssetExists` | `true` / `false` text |
//! | `TransferAsset` | previous owner, UTF-8 |

use crate::errors::GatewayError;
use asset_contract::prelude::{encode_asset, AssetContractApi, Operation};
use async_trait::async_trait;

// =============================================================================
// TRANSACTION GATEWAY (Outbound Port)
// =============================================================================

/// Delivery boundary for contract invocations.
///
/// Production adapters carry the invocation to a remote ordering service
/// (Submit) or a single node (Evaluate); the in-process adapter executes
/// against a local contract. Either way the verb's guarantee holds:
/// Submit results are ordered and agreed, Evaluate results reflect local
/// committed state only.
#[async_trait]
pub trait TransactionGateway: Send + Sync {
    /// Invoke a state-mutating operation through ordering and agreement.
    ///
    /// # Returns
    ///
    /// * `Vec<u8>` - The operation's result payload bytes
    async fn submit(&self, operation: &str, args: &[String]) -> Result<Vec<u8>, GatewayError>;

    /// Invoke a read-only operation against local committed state.
    ///
    /// # Returns
    ///
    /// * `Vec<u8>` - The operation's result payload bytes
    async fn evaluate(&self, operation: &str, args: &[String]) -> Result<Vec<u8>, GatewayError>;
}

// =============================================================================
// ARGUMENT MARSHALING
// =============================================================================

fn expect_arity(operation: Operation, args: &[String], expected: usize) -> Result<(), GatewayError> {
    if args.len() == expected {
        return Ok(());
    }
    Err(GatewayError::InvalidArgument {
        operation: operation.name().to_string(),
        argument: format!("{} argument(s)", args.len()),
        reason: format!("expected {expected}"),
    })
}

fn parse_int(operation: Operation, raw: &str) -> Result<i64, GatewayError> {
    raw.parse::<i64>()
        .map_err(|e| GatewayError::InvalidArgument {
            operation: operation.name().to_string(),
            argument: raw.to_string(),
            reason: e.to_string(),
        })
}

fn wrap(operation: Operation) -> impl Fn(asset_contract::prelude::ContractError) -> GatewayError {
    move |source| GatewayError::Invocation {
        operation: operation.name().to_string(),
        source,
    }
}

/// Execute a named operation against a contract, marshaling string
/// arguments in and the result payload out.
///
/// Integer arguments are parsed BEFORE the contract runs, so a malformed
/// `size` or `appraised_value` never reaches the ledger.
pub fn dispatch<C>(
    contract: &C,
    operation: Operation,
    args: &[String],
) -> Result<Vec<u8>, GatewayError>
where
    C: AssetContractApi + ?Sized,
{
    match operation {
        Operation::InitLedger => {
            expect_arity(operation, args, 0)?;
            contract.init_ledger().map_err(wrap(operation))?;
            Ok(Vec::new())
        }
        Operation::CreateAsset => {
            expect_arity(operation, args, 5)?;
            let size = parse_int(operation, &args[2])?;
            let appraised_value = parse_int(operation, &args[4])?;
            contract
                .create_asset(&args[0], &args[1], size, &args[3], appraised_value)
                .map_err(wrap(operation))?;
            Ok(Vec::new())
        }
        Operation::ReadAsset => {
            expect_arity(operation, args, 1)?;
            let asset = contract.read_asset(&args[0]).map_err(wrap(operation))?;
            encode_asset(&asset).map_err(wrap(operation))
        }
        Operation::UpdateAsset => {
            expect_arity(operation, args, 5)?;
            let size = parse_int(operation, &args[2])?;
            let appraised_value = parse_int(operation, &args[4])?;
            contract
                .update_asset(&args[0], &args[1], size, &args[3], appraised_value)
                .map_err(wrap(operation))?;
            Ok(Vec::new())
        }
        Operation::DeleteAsset => {
            expect_arity(operation, args, 1)?;
            contract.delete_asset(&args[0]).map_err(wrap(operation))?;
            Ok(Vec::new())
        }
        Operation::TransferAsset => {
            expect_arity(operation, args, 2)?;
            let old_owner = contract
                .transfer_asset(&args[0], &args[1])
                .map_err(wrap(operation))?;
            Ok(old_owner.into_bytes())
        }
        Operation::AssetExists => {
            expect_arity(operation, args, 1)?;
            let exists = contract.asset_exists(&args[0]).map_err(wrap(operation))?;
            Ok(if exists { b"true".to_vec() } else { b"false".to_vec() })
        }
        Operation::GetAllAssets => {
            expect_arity(operation, args, 0)?;
            let assets = contract.get_all_assets().map_err(wrap(operation))?;
            serde_json::to_vec(&assets).map_err(|e| GatewayError::MalformedPayload {
                operation: operation.name().to_string(),
                reason: e.to_string(),
            })
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
