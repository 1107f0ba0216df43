//! Compass, vertical, and in/out directions.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A direction of travel out of a location.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// `north`
    North,
    /// `south`
    South,
    /// `east`
    East,
    /// `west`
    West,
    /// `northeast`
    Northeast,
    /// `northwest`
    Northwest,
    /// `southeast`
    Southeast,
    /// `southwest`
    Southwest,
    /// `up`
    Up,
    /// `down`
    Down,
    /// `inside`
    Inside,
    /// `outside`
    Outside,
}

/// Returned when a word does not name a direction.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown direction: {0}")]
pub struct ParseDirectionError(pub String);

impl Direction {
    /// Every direction, in display order.
    pub const ALL: [Direction; 12] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Northeast,
        Self::Northwest,
        Self::Southeast,
        Self::Southwest,
        Self::Up,
        Self::Down,
        Self::Inside,
        Self::Outside,
    ];

    /// Returns the direction leading back.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::Northeast => Self::Southwest,
            Self::Southwest => Self::Northeast,
            Self::Northwest => Self::Southeast,
            Self::Southeast => Self::Northwest,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Inside => Self::Outside,
            Self::Outside => Self::Inside,
        }
    }

    /// Returns the lower-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Northeast => "northeast",
            Self::Northwest => "northwest",
            Self::Southeast => "southeast",
            Self::Southwest => "southwest",
            Self::Up => "up",
            Self::Down => "down",
            Self::Inside => "inside",
            Self::Outside => "outside",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(word: &str) -> Result<Self, Self::Err> {
        let direction = match word.to_ascii_lowercase().as_str() {
            "n" | "north" => Self::North,
            "s" | "south" => Self::South,
            "e" | "east" => Self::East,
            "w" | "west" => Self::West,
            "ne" | "northeast" => Self::Northeast,
            "nw" | "northwest" => Self::Northwest,
            "se" | "southeast" => Self::Southeast,
            "sw" | "southwest" => Self::Southwest,
            "u" | "up" => Self::Up,
            "d" | "down" => Self::Down,
            "in" | "inside" => Self::Inside,
            "out" | "outside" => Self::Outside,
            _ => return Err(ParseDirectionError(word.to_string())),
        };
        Ok(direction)
    }
}
