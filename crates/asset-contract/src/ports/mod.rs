//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions for asset record management. These are the interfaces
//! between the domain and the outside world.
//!
//! - **Driving Ports (Inbound)**: [`AssetContractApi`], the [`Operation`]
//!   name table with its Submit/Evaluate classification
//! - **Driven Ports (Outbound)**: [`WorldState`], [`StateIterator`]
//! - No concrete implementations in this module

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
