//! Core identity, value, and error types for Wayfarer.
//!
//! This crate provides:
//! - Typed identifiers ([`ItemId`], [`LocationId`], [`DaemonId`], [`FuseId`], ...)
//! - [`EntityId`] - Closed identity over the six addressable entity kinds
//! - [`PropertyValue`] - Values produced by item and location properties
//! - [`Error`] - Recoverable error values with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod error;
pub mod ids;
pub mod value;

pub use entity::{EntityId, EntityKind};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use ids::{DaemonId, FuseId, ItemId, LocationId, PropertyId, VerbId};
pub use value::PropertyValue;
