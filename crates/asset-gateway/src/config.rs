//! Gateway configuration.

/// Configuration for a gateway connection.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Ledger namespace (channel) the contract lives in.
    pub namespace: String,
    /// Deployed contract name within the namespace.
    pub contract_name: String,
    /// Budget for a single Submit/Evaluate invocation, in milliseconds.
    pub invocation_timeout_ms: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            namespace: "mychannel".to_string(),
            contract_name: "basic".to_string(),
            invocation_timeout_ms: 5000,
        }
    }
}
