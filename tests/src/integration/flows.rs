//! # Integration Test Flows
//!
//! Tests that asset-contract and asset-gateway work together correctly:
//! named operations flow from the typed client through the gateway's
//! Submit/Evaluate routing into the contract and back as result payloads.
//!
//! ## Flows Tested
//!
//! 1. **Seed → query**: `InitLedger` via Submit, then `GetAllAssets` via
//!    Evaluate returns the six fixed assets in key order
//! 2. **Full lifecycle**: create, read, update, transfer, delete of one
//!    asset through the gateway
//! 3. **Error surfacing**: contract failures cross the boundary wrapped
//!    with the operation name and the original cause

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use asset_contract::prelude::{
        sample_assets, Asset, AssetContractApi, InMemoryWorldState,
    };
    use asset_gateway::prelude::{AssetClient, GatewayConfig, GatewayError, InProcessGateway};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Gateway plus client over a fresh in-memory world state.
    fn create_test_stack() -> (Arc<InProcessGateway<InMemoryWorldState>>, AssetClient) {
        let gateway = Arc::new(InProcessGateway::from_state(
            InMemoryWorldState::new(),
            GatewayConfig::default(),
        ));
        let client = AssetClient::new(gateway.clone());
        (gateway, client)
    }

    // =============================================================================
    // INTEGRATION TESTS: SEED AND QUERY
    // =============================================================================

    /// Seeding then querying returns the fixed table in key order.
    #[tokio::test]
    async fn test_init_then_get_all_returns_seed_table() {
        let (_gateway, client) = create_test_stack();

        client.init_ledger().await.unwrap();

        let assets = client.get_all_assets().await.unwrap();
        assert_eq!(assets, sample_assets());
        assert_eq!(
            assets[2],
            Asset::new("asset3", "green", 10, "Jin Soo", 500)
        );
    }

    /// Empty ledger yields an empty list, not an error.
    #[tokio::test]
    async fn test_get_all_on_empty_ledger() {
        let (_gateway, client) = create_test_stack();
        let assets = client.get_all_assets().await.unwrap();
        assert!(assets.is_empty());
    }

    // =============================================================================
    // INTEGRATION TESTS: FULL LIFECYCLE
    // =============================================================================

    /// Create → read → update → transfer → delete through the gateway.
    #[tokio::test]
    async fn test_full_asset_lifecycle() {
        let (_gateway, client) = create_test_stack();

        // Create
        client
            .create_asset("asset7", "purple", 8, "Alice", 900)
            .await
            .unwrap();
        assert!(client.asset_exists("asset7").await.unwrap());

        // Duplicate create is rejected, state untouched
        let err = client
            .create_asset("asset7", "orange", 1, "Bob", 1)
            .await
            .unwrap_err();
        assert!(err.contract_cause().is_some());
        assert_eq!(
            client.read_asset("asset7").await.unwrap(),
            Asset::new("asset7", "purple", 8, "Alice", 900)
        );

        // Update fully overwrites
        client
            .update_asset("asset7", "violet", 9, "Alice", 950)
            .await
            .unwrap();
        assert_eq!(
            client.read_asset("asset7").await.unwrap(),
            Asset::new("asset7", "violet", 9, "Alice", 950)
        );

        // Transfer changes the owner only and reports the previous one
        let previous = client.transfer_asset("asset7", "Carol").await.unwrap();
        assert_eq!(previous, "Alice");
        assert_eq!(
            client.read_asset("asset7").await.unwrap(),
            Asset::new("asset7", "violet", 9, "Carol", 950)
        );

        // Delete removes the entry
        client.delete_asset("asset7").await.unwrap();
        assert!(!client.asset_exists("asset7").await.unwrap());
    }

    /// Evaluate reads observe Submit writes made through the same stack.
    #[tokio::test]
    async fn test_read_your_writes_through_gateway() {
        let (gateway, client) = create_test_stack();

        client.init_ledger().await.unwrap();
        client.transfer_asset("asset2", "Dave").await.unwrap();

        // Visible through the client...
        assert_eq!(client.read_asset("asset2").await.unwrap().owner, "Dave");

        // ...and directly through the contract under the gateway.
        assert_eq!(
            gateway.contract().read_asset("asset2").unwrap().owner,
            "Dave"
        );
    }

    // =============================================================================
    // INTEGRATION TESTS: ERROR SURFACING
    // =============================================================================

    /// Contract failures cross the boundary with operation and cause.
    #[tokio::test]
    async fn test_contract_errors_cross_the_boundary() {
        let (_gateway, client) = create_test_stack();

        let err = client.read_asset("ghost").await.unwrap_err();
        match err {
            GatewayError::Invocation { operation, source } => {
                assert_eq!(operation, "ReadAsset");
                assert_eq!(source.to_string(), "the asset ghost does not exist");
            }
            other => panic!("expected Invocation error, got {other:?}"),
        }

        let err = client.delete_asset("ghost").await.unwrap_err();
        assert!(err.contract_cause().is_some_and(|c| c.is_not_found()));

        let err = client
            .update_asset("ghost", "blue", 1, "Nobody", 1)
            .await
            .unwrap_err();
        assert!(err.contract_cause().is_some_and(|c| c.is_not_found()));

        // Failed mutations left nothing behind
        assert!(client.get_all_assets().await.unwrap().is_empty());
    }

    /// Raw gateway enforcement: the verb is fixed by the operation name.
    #[tokio::test]
    async fn test_verb_is_fixed_by_operation_name() {
        use asset_gateway::prelude::TransactionGateway;

        let (gateway, _client) = create_test_stack();

        let err = gateway
            .submit("GetAllAssets", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::WrongInvocationKind { .. }));

        let err = gateway
            .evaluate("CreateAsset", &["a".into(), "b".into(), "1".into(), "c".into(), "2".into()])
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::WrongInvocationKind { .. }));
    }
}
