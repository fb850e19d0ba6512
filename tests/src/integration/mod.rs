//! Cross-crate integration tests.

pub mod determinism;
pub mod flows;
