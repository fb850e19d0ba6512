//! # Asset-Ledger Test Suite
//!
//! Unified test crate for cross-crate flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Contract + gateway choreography
//!     ├── flows.rs      # End-to-end lifecycle flows
//!     └── determinism.rs# Byte-stability of the wire encoding
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ledger-tests
//!
//! # By category
//! cargo test -p ledger-tests integration::
//! ```

pub mod integration;
