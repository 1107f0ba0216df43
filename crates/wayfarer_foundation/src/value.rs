//! Values produced by item and location properties.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::entity::EntityId;
use crate::error::{Error, Result};
use crate::ids::ItemId;

/// A property value, stored or computed.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PropertyValue {
    /// Boolean flag, e.g. `isOpen`.
    Bool(bool),
    /// Integer quantity, e.g. `size` or `capacity`.
    Int(i64),
    /// Text, e.g. `description`.
    Text(String),
    /// Reference to another entity, e.g. `parent`.
    Entity(EntityId),
    /// A list of items, e.g. the contents of a container.
    Items(Vec<ItemId>),
}

impl PropertyValue {
    /// Returns the name of this value's type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
            Self::Entity(_) => "entity",
            Self::Items(_) => "items",
        }
    }

    /// Reads the value as a boolean.
    ///
    /// # Errors
    /// Returns a type mismatch if the value is not a boolean.
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => Err(other.mismatch("bool")),
        }
    }

    /// Reads the value as an integer.
    ///
    /// # Errors
    /// Returns a type mismatch if the value is not an integer.
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Self::Int(n) => Ok(*n),
            other => Err(other.mismatch("int")),
        }
    }

    /// Reads the value as text.
    ///
    /// # Errors
    /// Returns a type mismatch if the value is not text.
    pub fn as_text(&self) -> Result<&str> {
        match self {
            Self::Text(s) => Ok(s),
            other => Err(other.mismatch("text")),
        }
    }

    /// Reads the value as an entity reference.
    ///
    /// # Errors
    /// Returns a type mismatch if the value is not an entity.
    pub fn as_entity(&self) -> Result<&EntityId> {
        match self {
            Self::Entity(e) => Ok(e),
            other => Err(other.mismatch("entity")),
        }
    }

    fn mismatch(&self, expected: &'static str) -> Error {
        Error::property_type_mismatch(expected, format!("{} ({self})", self.type_name()))
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Entity(e) => write!(f, "{e}"),
            Self::Items(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<EntityId> for PropertyValue {
    fn from(e: EntityId) -> Self {
        Self::Entity(e)
    }
}

impl From<Vec<ItemId>> for PropertyValue {
    fn from(items: Vec<ItemId>) -> Self {
        Self::Items(items)
    }
}
