//! Wayfarer - State and computation core for interactive fiction
//!
//! This crate re-exports all layers of the Wayfarer core for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: wayfarer_engine     - Computation tracking, property resolution, seeded RNG
//! Layer 1: wayfarer_world      - Direction, Exit, Command value models
//! Layer 0: wayfarer_foundation - Core types (EntityId, typed ids, PropertyValue, Error)
//! ```

pub use wayfarer_engine as engine;
pub use wayfarer_foundation as foundation;
pub use wayfarer_world as world;
