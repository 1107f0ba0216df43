//! World connectivity and command value models for Wayfarer.
//!
//! This crate provides:
//! - [`Direction`] - The twelve directions of travel
//! - [`Exit`] / [`Exits`] - Connectivity edges out of a location
//! - [`Command`] - A fully parsed player action
//!
//! All types are immutable values; clones never share mutable state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod direction;
pub mod exit;

pub use command::Command;
pub use direction::{Direction, ParseDirectionError};
pub use exit::{Exit, Exits};
