//! # Canonical Asset Codec
//!
//! Deterministic encode/decode between [`Asset`] and its wire bytes.
//!
//! The wire form is a UTF-8 JSON object with keys exactly
//! `AppraisedValue, Color, ID, Owner, Size` in that order. The order comes
//! from the `Asset` field declaration order; `serde_json` emits struct
//! fields in declaration order, so repeated encodes of equal values are
//! byte-identical regardless of how the value was constructed.
//!
//! Round-trip law: `decode_asset(&encode_asset(a)?)? == a` for every valid
//! asset.

use crate::domain::entities::Asset;
use crate::errors::ContractError;

/// Encodes an asset into its canonical wire bytes.
///
/// Encoding a well-formed `Asset` cannot fail (no maps, no non-string
/// keys), but failures still propagate as [`ContractError::Serialization`]
/// rather than panicking.
pub fn encode_asset(asset: &Asset) -> Result<Vec<u8>, ContractError> {
    serde_json::to_vec(asset).map_err(|e| ContractError::Serialization(e.to_string()))
}

/// Decodes canonical wire bytes into an asset.
///
/// Fails with [`ContractError::Serialization`] on missing, extra, or
/// mistyped fields.
pub fn decode_asset(bytes: &[u8]) -> Result<Asset, ContractError> {
    serde_json::from_slice(bytes).map_err(|e| ContractError::Serialization(e.to_string()))
}

// =============================================================================
// TESTS
// =============================================================================
