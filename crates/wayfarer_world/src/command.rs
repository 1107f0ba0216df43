//! Fully parsed player commands.
//!
//! The parser is the only producer of [`Command`]s and action dispatch the
//! only consumer. A command always keeps the raw text it was parsed from.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use wayfarer_foundation::{EntityId, VerbId};

use crate::direction::Direction;

/// An object slot of a command together with the words that modified it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct ObjectSlot {
    entity: EntityId,
    modifiers: Vec<String>,
}

/// One parsed player action, e.g. "put the small brass key in the box".
///
/// Modifiers are stored with their object, so a command without a direct
/// object can never carry direct-object modifiers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Command {
    verb: VerbId,
    direct: Option<ObjectSlot>,
    indirect: Option<ObjectSlot>,
    preposition: Option<String>,
    direction: Option<Direction>,
    raw_input: String,
}

impl Command {
    /// Creates a command with only a verb.
    #[must_use]
    pub fn new(verb: impl Into<VerbId>, raw_input: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            direct: None,
            indirect: None,
            preposition: None,
            direction: None,
            raw_input: raw_input.into(),
        }
    }

    /// Sets the direct object and the modifier words that preceded it.
    #[must_use]
    pub fn with_direct_object<I, S>(mut self, entity: impl Into<EntityId>, modifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.direct = Some(ObjectSlot {
            entity: entity.into(),
            modifiers: modifiers.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Sets the indirect object and the modifier words that preceded it.
    #[must_use]
    pub fn with_indirect_object<I, S>(mut self, entity: impl Into<EntityId>, modifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indirect = Some(ObjectSlot {
            entity: entity.into(),
            modifiers: modifiers.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Sets the preposition linking the two objects.
    #[must_use]
    pub fn with_preposition(mut self, preposition: impl Into<String>) -> Self {
        self.preposition = Some(preposition.into());
        self
    }

    /// Sets the direction of a movement command.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// The verb.
    #[must_use]
    pub fn verb(&self) -> &VerbId {
        &self.verb
    }

    /// The direct object, if any.
    #[must_use]
    pub fn direct_object(&self) -> Option<&EntityId> {
        self.direct.as_ref().map(|slot| &slot.entity)
    }

    /// Modifier words of the direct object, in parse order.
    #[must_use]
    pub fn direct_object_modifiers(&self) -> &[String] {
        self.direct.as_ref().map_or(&[][..], |slot| slot.modifiers.as_slice())
    }

    /// The indirect object, if any.
    #[must_use]
    pub fn indirect_object(&self) -> Option<&EntityId> {
        self.indirect.as_ref().map(|slot| &slot.entity)
    }

    /// Modifier words of the indirect object, in parse order.
    #[must_use]
    pub fn indirect_object_modifiers(&self) -> &[String] {
        self.indirect.as_ref().map_or(&[][..], |slot| slot.modifiers.as_slice())
    }

    /// The preposition, if any.
    #[must_use]
    pub fn preposition(&self) -> Option<&str> {
        self.preposition.as_deref()
    }

    /// The direction, if this is a movement command.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// The text the player typed.
    #[must_use]
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }
}
