//! Computed-property tracking, property resolution, and seeded randomness.
//!
//! This crate provides:
//! - [`PropertyComputationTracker`] - Task-lineage-scoped re-entrancy tracking
//! - [`PropertyResolver`] - Stored and computed item/location properties
//! - [`SeededRandomNumberGenerator`] - Reproducible randomness shared across tasks
//! - [`EngineConfig`] - Session configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod random;
pub mod resolver;
pub mod tracker;

pub use config::EngineConfig;
pub use random::{DEFAULT_SEED, SeededRandomNumberGenerator};
pub use resolver::{Formula, PropertyResolver};
pub use tracker::{ComputationKey, PropertyComputationTracker, TrackingContext};
