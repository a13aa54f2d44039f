//! Cell archetypes and their sub-types

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Top-level category of a map cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Archetype {
    Wall,
    #[default]
    Floor,
    Door,
    Stair,
}

impl Archetype {
    /// Check if cells of this archetype can hold contents
    pub const fn can_hold_contents(&self) -> bool {
        matches!(self, Archetype::Wall | Archetype::Floor)
    }
}

/// Wall refinement
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum WallSubtype {
    #[default]
    Default,
    Item,
    Secret,
    NotApplicable,
}

/// Floor refinement
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum FloorSubtype {
    #[default]
    Default,
    Item,
    Secret,
    NotApplicable,
}

/// Door refinement
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum DoorSubtype {
    #[default]
    Default,
    Locked,
    Unlocked,
    /// Level exit
    Exit,
    NotApplicable,
}

/// Stair refinement
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum StairSubtype {
    #[default]
    Default,
    Up,
    Down,
    NotApplicable,
}

/// Item occupying a wall or floor cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Contents {
    /// Nothing here
    #[default]
    Empty,
    Key,
    Kitten,
    Secret,
    NotApplicable,
}

impl Contents {
    /// Check if this counts as an item
    pub const fn is_item(&self) -> bool {
        matches!(self, Contents::Key | Contents::Kitten | Contents::Secret)
    }
}

/// A sub-type paired with the archetype it refines
///
/// Used by the cell constructors so that an archetype and its sub-type are
/// always supplied together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subtype {
    Wall(WallSubtype),
    Floor(FloorSubtype),
    Door(DoorSubtype),
    Stair(StairSubtype),
}

impl From<WallSubtype> for Subtype {
    fn from(value: WallSubtype) -> Self {
        Subtype::Wall(value)
    }
}

impl From<FloorSubtype> for Subtype {
    fn from(value: FloorSubtype) -> Self {
        Subtype::Floor(value)
    }
}

impl From<DoorSubtype> for Subtype {
    fn from(value: DoorSubtype) -> Self {
        Subtype::Door(value)
    }
}

impl From<StairSubtype> for Subtype {
    fn from(value: StairSubtype) -> Self {
        Subtype::Stair(value)
    }
}

/// Grid coordinates (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

bitflags! {
    /// Cached "contains" flags of a wall or floor cell
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ContainsFlags: u8 {
        const KEY = 0x01;
        const KITTEN = 0x02;
        const SECRET = 0x04;
        const ITEM = 0x08;
    }
}

impl ContainsFlags {
    /// Flags implied by a contents value
    pub const fn for_contents(contents: Contents) -> Self {
        match contents {
            Contents::Key => Self::KEY.union(Self::ITEM),
            Contents::Kitten => Self::KITTEN.union(Self::ITEM),
            Contents::Secret => Self::SECRET.union(Self::ITEM),
            Contents::Empty | Contents::NotApplicable => Self::empty(),
        }
    }
}

// Manual serde impl for ContainsFlags
impl Serialize for ContainsFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContainsFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(ContainsFlags::from_bits_truncate(bits))
    }
}
