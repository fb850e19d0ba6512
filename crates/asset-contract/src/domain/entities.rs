//! # Core Domain Entities
//!
//! The `Asset` record and the fixed bootstrap seed table.

use serde::{Deserialize, Serialize};

// =============================================================================
// ASSET
// =============================================================================

/// A tracked asset, the sole entity in the world-state namespace.
///
/// Exactly one world-state entry exists per `id`; the entry's value is the
/// canonical encoding of this struct.
///
/// ## Wire Contract
///
/// Field declaration order IS the canonical wire order: the encoding emits
/// keys `AppraisedValue, Color, ID, Owner, Size` in exactly that sequence.
/// Agreement participants compare the resulting bytes, so reordering these
/// fields is a consensus-breaking change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Asset {
    /// Current appraised value.
    #[serde(rename = "AppraisedValue")]
    pub appraised_value: i64,
    /// Descriptive color.
    #[serde(rename = "Color")]
    pub color: String,
    /// Primary key, unique across the namespace, immutable after creation.
    #[serde(rename = "ID")]
    pub id: String,
    /// Current owner; the field `transfer_asset` exists to change.
    #[serde(rename = "Owner")]
    pub owner: String,
    /// Size measure.
    #[serde(rename = "Size")]
    pub size: i64,
}

impl Asset {
    /// Builds an asset from its parts.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        color: impl Into<String>,
        size: i64,
        owner: impl Into<String>,
        appraised_value: i64,
    ) -> Self {
        Self {
            appraised_value,
            color: color.into(),
            id: id.into(),
            owner: owner.into(),
            size,
        }
    }
}

// =============================================================================
// SEED TABLE
// =============================================================================

/// The fixed bootstrap assets seeded by `init_ledger`.
///
/// The table is part of the contract's observable behavior: every
/// participant seeds exactly these six records.
#[must_use]
pub fn sample_assets() -> Vec<Asset> {
    vec![
        Asset::new("asset1", "blue", 5, "Tomoko", 300),
        Asset::new("asset2", "red", 5, "Brad", 400),
        Asset::new("asset3", "green", 10, "Jin Soo", 500),
        Asset::new("asset4", "yellow", 10, "Max", 600),
        Asset::new("asset5", "black", 15, "Adriana", 700),
        Asset::new("asset6", "white", 15, "Michel", 800),
    ]
}

// =============================================================================
// TESTS
// =============================================================================
