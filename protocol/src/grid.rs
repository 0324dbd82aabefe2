//! Grid coordinates and cell values.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ProtocolError;

/// Letter used for a blank (wildcard) tile.
pub const BLANK: char = '_';

/// Sparse board mapping. Absent keys are empty cells.
pub type Grid = BTreeMap<Coord, Cell>;

/// Integer position of a cell on the unbounded board.
///
/// Encoded on the wire as `"x,y"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell offset by `(dx, dy)`, clamped to the `i32` range.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x.saturating_add(dx), y: self.y.saturating_add(dy) }
    }

    /// The cell offset by `(dx, dy)`, or `None` past the edge of the `i32` range.
    #[must_use]
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self { x: self.x.checked_add(dx)?, y: self.y.checked_add(dy)? })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Coord {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ProtocolError::InvalidCoord(s.to_owned());
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse::<i32>().map_err(|_| invalid())?;
        let y = y.trim().parse::<i32>().map_err(|_| invalid())?;
        Ok(Self { x, y })
    }
}

impl Serialize for Coord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Score multiplier printed on a board cell. Assigned by the server only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// `DW`
    DoubleWord,
    /// `DL`
    DoubleLetter,
    /// `TW`
    TripleWord,
    /// `TL`
    TripleLetter,
}

impl Modifier {
    /// Wire tag for this modifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DoubleWord => "DW",
            Self::DoubleLetter => "DL",
            Self::TripleWord => "TW",
            Self::TripleLetter => "TL",
        }
    }
}

impl FromStr for Modifier {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DW" => Ok(Self::DoubleWord),
            "DL" => Ok(Self::DoubleLetter),
            "TW" => Ok(Self::TripleWord),
            "TL" => Ok(Self::TripleLetter),
            other => Err(ProtocolError::InvalidCell(other.to_owned())),
        }
    }
}

impl Serialize for Modifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Modifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Value held by one board cell: nothing, a placed letter, or a modifier.
///
/// A cell never holds both a letter and a modifier; once a letter is placed
/// on a modifier cell the server reports the letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Letter(char),
    Modifier(Modifier),
}

impl Cell {
    /// The placed letter, if any.
    #[must_use]
    pub fn letter(self) -> Option<char> {
        match self {
            Self::Letter(letter) => Some(letter),
            Self::Empty | Self::Modifier(_) => None,
        }
    }

    /// The modifier, if the cell is an unoccupied modifier cell.
    #[must_use]
    pub fn modifier(self) -> Option<Modifier> {
        match self {
            Self::Modifier(modifier) => Some(modifier),
            Self::Empty | Self::Letter(_) => None,
        }
    }

    /// Whether a tile occupies this cell.
    #[must_use]
    pub fn is_letter(self) -> bool {
        matches!(self, Self::Letter(_))
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Letter(letter) => write!(f, "{letter}"),
            Self::Modifier(modifier) => f.write_str(modifier.as_str()),
        }
    }
}

impl FromStr for Cell {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::Empty);
        }
        let mut chars = s.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            return Ok(Self::Letter(letter));
        }
        s.parse().map(Self::Modifier)
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
