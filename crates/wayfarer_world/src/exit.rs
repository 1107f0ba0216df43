//! Connectivity edges between locations.
//!
//! An [`Exit`] only describes the edge. Deciding whether the player may pass
//! belongs to movement resolution, which reads the fields in this order:
//!
//! 1. a blocked message refuses passage and is shown, whatever else is set;
//! 2. a door defers to the open/locked state stored on the door item;
//! 3. a destination allows passage;
//! 4. anything else is a dead end.
//!
//! The door's state is never copied onto the exit, so the two cannot diverge.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use wayfarer_foundation::{ItemId, LocationId};

use crate::direction::Direction;

/// One direction's connectivity out of a location.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Exit {
    destination: Option<LocationId>,
    blocked_message: Option<String>,
    door: Option<ItemId>,
}

impl Exit {
    /// Creates an exit with an optional destination and nothing else.
    #[must_use]
    pub fn new(destination: Option<LocationId>) -> Self {
        Self {
            destination,
            blocked_message: None,
            door: None,
        }
    }

    /// Creates an open passage to `destination`.
    #[must_use]
    pub fn to(destination: impl Into<LocationId>) -> Self {
        Self::new(Some(destination.into()))
    }

    /// Creates an exit that leads nowhere and explains why.
    #[must_use]
    pub fn blocked(message: impl Into<String>) -> Self {
        Self::new(None).with_blocked_message(message)
    }

    /// Sets the message shown instead of allowing passage.
    #[must_use]
    pub fn with_blocked_message(mut self, message: impl Into<String>) -> Self {
        self.blocked_message = Some(message.into());
        self
    }

    /// Sets the item acting as this exit's door.
    #[must_use]
    pub fn with_door(mut self, door: impl Into<ItemId>) -> Self {
        self.door = Some(door.into());
        self
    }

    /// The location this exit leads to, if any.
    #[must_use]
    pub fn destination(&self) -> Option<&LocationId> {
        self.destination.as_ref()
    }

    /// The message shown instead of allowing passage, if any.
    #[must_use]
    pub fn blocked_message(&self) -> Option<&str> {
        self.blocked_message.as_deref()
    }

    /// The door item guarding this exit, if any.
    #[must_use]
    pub fn door(&self) -> Option<&ItemId> {
        self.door.as_ref()
    }

    /// Returns true if a blocked message is set.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.blocked_message.is_some()
    }

    /// Returns true if a door guards this exit.
    #[must_use]
    pub fn has_door(&self) -> bool {
        self.door.is_some()
    }

    /// Returns true if the exit has no destination, message, or door.
    #[must_use]
    pub fn is_dead_end(&self) -> bool {
        self.destination.is_none() && self.blocked_message.is_none() && self.door.is_none()
    }
}

/// The exits of one location, keyed by direction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Exits(BTreeMap<Direction, Exit>);

impl Exits {
    /// Creates an empty exit table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the exit in `direction`, returning the previous one.
    pub fn insert(&mut self, direction: Direction, exit: Exit) -> Option<Exit> {
        self.0.insert(direction, exit)
    }

    /// Returns the exit in `direction`.
    #[must_use]
    pub fn get(&self, direction: Direction) -> Option<&Exit> {
        self.0.get(&direction)
    }

    /// Returns the number of exits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no exits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates exits in direction order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &Exit)> {
        self.0.iter().map(|(dir, exit)| (*dir, exit))
    }

    /// Iterates the directions that have exits.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.0.keys().copied()
    }
}

impl FromIterator<(Direction, Exit)> for Exits {
    fn from_iter<I: IntoIterator<Item = (Direction, Exit)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
