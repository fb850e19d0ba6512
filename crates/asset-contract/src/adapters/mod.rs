//! # Adapters Layer (Outer Hexagon)
//!
//! Concrete world-state backends. A production deployment supplies an
//! adapter over the replicated ledger; the in-memory adapter backs tests
//! and in-process use.

pub mod memory_ledger;

pub use memory_ledger::*;
