//! # Domain Layer (Inner Hexagon)
//!
//! Pure asset-record business logic: the entity, its canonical codec, and
//! the fixed seed table. NO I/O, NO async, NO external collaborators.
//!
//! Dependencies point INWARD only (ports and adapters depend on this, not
//! vice versa).

pub mod codec;
pub mod entities;

pub use codec::*;
pub use entities::*;
