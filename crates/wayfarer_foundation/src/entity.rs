//! Entity identity across the six kinds of addressable engine objects.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ids::{DaemonId, FuseId, ItemId, LocationId};

/// Reference to any addressable engine object.
///
/// Equality and hashing are variant-aware: an item and a location with the
/// same raw id are different entities, and the two singletons are equal only
/// to themselves.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EntityId {
    /// A daemon (recurring timed event).
    Daemon(DaemonId),
    /// A fuse (one-shot timed event).
    Fuse(FuseId),
    /// An item.
    Item(ItemId),
    /// A location.
    Location(LocationId),
    /// The player.
    Player,
    /// Game-wide scope.
    Global,
}

/// The kind of an [`EntityId`], without its payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EntityKind {
    /// See [`EntityId::Daemon`].
    Daemon,
    /// See [`EntityId::Fuse`].
    Fuse,
    /// See [`EntityId::Item`].
    Item,
    /// See [`EntityId::Location`].
    Location,
    /// See [`EntityId::Player`].
    Player,
    /// See [`EntityId::Global`].
    Global,
}

impl EntityKind {
    /// All six kinds, in declaration order.
    pub const ALL: [EntityKind; 6] = [
        Self::Daemon,
        Self::Fuse,
        Self::Item,
        Self::Location,
        Self::Player,
        Self::Global,
    ];

    /// The name used when this kind is the expected side of a mismatch.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Daemon => "DaemonID",
            Self::Fuse => "FuseID",
            Self::Item => "ItemID",
            Self::Location => "LocationID",
            Self::Player => "Player",
            Self::Global => "Global",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl EntityId {
    /// Shorthand for an item reference.
    #[must_use]
    pub fn item(id: impl Into<ItemId>) -> Self {
        Self::Item(id.into())
    }

    /// Shorthand for a location reference.
    #[must_use]
    pub fn location(id: impl Into<LocationId>) -> Self {
        Self::Location(id.into())
    }

    /// Shorthand for a daemon reference.
    #[must_use]
    pub fn daemon(id: impl Into<DaemonId>) -> Self {
        Self::Daemon(id.into())
    }

    /// Shorthand for a fuse reference.
    #[must_use]
    pub fn fuse(id: impl Into<FuseId>) -> Self {
        Self::Fuse(id.into())
    }

    /// Returns the kind of this entity.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Daemon(_) => EntityKind::Daemon,
            Self::Fuse(_) => EntityKind::Fuse,
            Self::Item(_) => EntityKind::Item,
            Self::Location(_) => EntityKind::Location,
            Self::Player => EntityKind::Player,
            Self::Global => EntityKind::Global,
        }
    }

    /// Returns true if this is the player.
    #[must_use]
    pub const fn is_player(&self) -> bool {
        matches!(self, Self::Player)
    }

    /// Returns true if this is the global scope.
    #[must_use]
    pub const fn is_global(&self) -> bool {
        matches!(self, Self::Global)
    }

    /// Returns the daemon id, if this is a daemon.
    #[must_use]
    pub fn as_daemon(&self) -> Option<&DaemonId> {
        match self {
            Self::Daemon(id) => Some(id),
            _ => None,
        }
    }

    /// Returns the fuse id, if this is a fuse.
    #[must_use]
    pub fn as_fuse(&self) -> Option<&FuseId> {
        match self {
            Self::Fuse(id) => Some(id),
            _ => None,
        }
    }

    /// Returns the item id, if this is an item.
    #[must_use]
    pub fn as_item(&self) -> Option<&ItemId> {
        match self {
            Self::Item(id) => Some(id),
            _ => None,
        }
    }

    /// Returns the location id, if this is a location.
    #[must_use]
    pub fn as_location(&self) -> Option<&LocationId> {
        match self {
            Self::Location(id) => Some(id),
            _ => None,
        }
    }

    /// Extracts the daemon id.
    ///
    /// # Errors
    /// Returns an entity kind mismatch if this is not a daemon.
    pub fn expect_daemon(&self) -> Result<&DaemonId> {
        self.as_daemon().ok_or_else(|| self.mismatch(EntityKind::Daemon))
    }

    /// Extracts the fuse id.
    ///
    /// # Errors
    /// Returns an entity kind mismatch if this is not a fuse.
    pub fn expect_fuse(&self) -> Result<&FuseId> {
        self.as_fuse().ok_or_else(|| self.mismatch(EntityKind::Fuse))
    }

    /// Extracts the item id.
    ///
    /// # Errors
    /// Returns an entity kind mismatch if this is not an item.
    pub fn expect_item(&self) -> Result<&ItemId> {
        self.as_item().ok_or_else(|| self.mismatch(EntityKind::Item))
    }

    /// Extracts the location id.
    ///
    /// # Errors
    /// Returns an entity kind mismatch if this is not a location.
    pub fn expect_location(&self) -> Result<&LocationId> {
        self.as_location()
            .ok_or_else(|| self.mismatch(EntityKind::Location))
    }

    fn mismatch(&self, expected: EntityKind) -> Error {
        Error::entity_kind_mismatch(expected, self)
    }
}

/// Renders the variant the way it reads in source: `.item(lamp)`, `.player`.
impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daemon(id) => write!(f, ".daemon({id})"),
            Self::Fuse(id) => write!(f, ".fuse({id})"),
            Self::Item(id) => write!(f, ".item({id})"),
            Self::Location(id) => write!(f, ".location({id})"),
            Self::Player => f.write_str(".player"),
            Self::Global => f.write_str(".global"),
        }
    }
}

impl From<DaemonId> for EntityId {
    fn from(id: DaemonId) -> Self {
        Self::Daemon(id)
    }
}

impl From<FuseId> for EntityId {
    fn from(id: FuseId) -> Self {
        Self::Fuse(id)
    }
}

impl From<ItemId> for EntityId {
    fn from(id: ItemId) -> Self {
        Self::Item(id)
    }
}

impl From<LocationId> for EntityId {
    fn from(id: LocationId) -> Self {
        Self::Location(id)
    }
}
