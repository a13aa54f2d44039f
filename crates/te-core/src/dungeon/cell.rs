//! Map cell entity
//!
//! A cell's archetype decides which sub-state is meaningful. Internally the
//! cell is a tagged union over the archetypes, so a field that does not apply
//! to the current archetype simply does not exist and reads back as
//! `NotApplicable`.

use serde::{Deserialize, Serialize};

use super::defaults::archetype_defaults;
use super::kinds::{
    Archetype, ContainsFlags, Contents, Coord, DoorSubtype, FloorSubtype, StairSubtype, Subtype,
    WallSubtype,
};
use super::record::CellRecord;
use crate::consts::*;
use crate::error::{Attribute, CellError};

const WALL_ONLY: &[Archetype] = &[Archetype::Wall];
const FLOOR_ONLY: &[Archetype] = &[Archetype::Floor];
const DOOR_ONLY: &[Archetype] = &[Archetype::Door];
const STAIR_ONLY: &[Archetype] = &[Archetype::Stair];
const HOLDERS: &[Archetype] = &[Archetype::Wall, Archetype::Floor];

/// Contents of a wall or floor cell plus the cached flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) struct Stash {
    pub(super) contents: Contents,
    pub(super) flags: ContainsFlags,
}

impl Stash {
    pub(super) const fn holding(contents: Contents) -> Self {
        Self {
            contents,
            flags: ContainsFlags::for_contents(contents),
        }
    }

    /// Replace contents, keeping the item flag for item sub-types
    fn fill(&mut self, contents: Contents, item_subtype: bool) {
        *self = Self::holding(contents);
        if item_subtype {
            self.flags.insert(ContainsFlags::ITEM);
        }
    }

    /// Item and secret sub-types displace whatever the cell held; any other
    /// sub-type drops back to the flags implied by the contents
    fn mark_subtype(&mut self, item: bool, secret: bool) {
        if item {
            *self = Self::holding(Contents::Empty);
            self.flags.insert(ContainsFlags::ITEM);
        } else if secret {
            *self = Self::holding(Contents::Empty);
            self.flags.insert(ContainsFlags::SECRET);
        } else {
            self.flags = ContainsFlags::for_contents(self.contents);
        }
    }
}

/// Per-archetype sub-state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Region {
    Wall {
        subtype: WallSubtype,
        stash: Stash,
    },
    Floor {
        subtype: FloorSubtype,
        stash: Stash,
    },
    Door {
        floor: FloorSubtype,
        subtype: DoorSubtype,
    },
    Stair {
        floor: FloorSubtype,
        subtype: StairSubtype,
        destination: Option<Coord>,
    },
}

impl Region {
    fn defaults(archetype: Archetype) -> Self {
        let d = archetype_defaults(archetype);
        match archetype {
            Archetype::Wall => Region::Wall {
                subtype: d.wall,
                stash: Stash::holding(d.contents),
            },
            Archetype::Floor => Region::Floor {
                subtype: d.floor,
                stash: Stash::holding(d.contents),
            },
            Archetype::Door => Region::Door {
                floor: d.floor,
                subtype: d.door,
            },
            Archetype::Stair => Region::Stair {
                floor: d.floor,
                subtype: d.stair,
                destination: None,
            },
        }
    }
}

fn rejected(attribute: Attribute, required: &'static [Archetype], actual: Archetype) -> CellError {
    tracing::debug!(%attribute, %actual, "rejected cell mutation");
    CellError::InvalidStateTransition {
        attribute,
        required,
        actual,
    }
}

fn not_applicable(attribute: Attribute) -> CellError {
    tracing::debug!(%attribute, "rejected NotApplicable write");
    CellError::NotApplicableValue { attribute }
}

/// A single map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "CellRecord", try_from = "CellRecord")]
pub struct Cell {
    region: Region,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Cell {
    /// Create a floor cell
    pub fn new() -> Self {
        Self::with_archetype(Archetype::Floor)
    }

    /// Create a cell seeded with the archetype's defaults
    pub fn with_archetype(archetype: Archetype) -> Self {
        Self {
            region: Region::defaults(archetype),
        }
    }

    /// Create a cell with an archetype and one of its sub-types
    pub fn with_subtype(
        archetype: Archetype,
        subtype: impl Into<Subtype>,
    ) -> Result<Self, CellError> {
        let mut cell = Self::with_archetype(archetype);
        cell.set_subtype(subtype.into())?;
        Ok(cell)
    }

    /// Create a wall or floor cell with a sub-type and contents
    pub fn with_contents(
        archetype: Archetype,
        subtype: impl Into<Subtype>,
        contents: Contents,
    ) -> Result<Self, CellError> {
        let mut cell = Self::with_subtype(archetype, subtype)?;
        cell.set_contents(contents)?;
        Ok(cell)
    }

    pub(super) const fn from_region(region: Region) -> Self {
        Self { region }
    }

    pub const fn archetype(&self) -> Archetype {
        match self.region {
            Region::Wall { .. } => Archetype::Wall,
            Region::Floor { .. } => Archetype::Floor,
            Region::Door { .. } => Archetype::Door,
            Region::Stair { .. } => Archetype::Stair,
        }
    }

    pub const fn wall_subtype(&self) -> WallSubtype {
        match self.region {
            Region::Wall { subtype, .. } => subtype,
            _ => WallSubtype::NotApplicable,
        }
    }

    pub const fn floor_subtype(&self) -> FloorSubtype {
        match self.region {
            Region::Floor { subtype, .. } => subtype,
            Region::Door { floor, .. } | Region::Stair { floor, .. } => floor,
            Region::Wall { .. } => FloorSubtype::NotApplicable,
        }
    }

    pub const fn door_subtype(&self) -> DoorSubtype {
        match self.region {
            Region::Door { subtype, .. } => subtype,
            _ => DoorSubtype::NotApplicable,
        }
    }

    pub const fn stair_subtype(&self) -> StairSubtype {
        match self.region {
            Region::Stair { subtype, .. } => subtype,
            _ => StairSubtype::NotApplicable,
        }
    }

    pub const fn contents(&self) -> Contents {
        match self.region {
            Region::Wall { stash, .. } | Region::Floor { stash, .. } => stash.contents,
            _ => Contents::NotApplicable,
        }
    }

    /// Cached contains flags (always empty for doors and stairs)
    pub const fn flags(&self) -> ContainsFlags {
        match self.region {
            Region::Wall { stash, .. } | Region::Floor { stash, .. } => stash.flags,
            _ => ContainsFlags::empty(),
        }
    }

    pub const fn contains_key(&self) -> bool {
        self.flags().contains(ContainsFlags::KEY)
    }

    pub const fn contains_kitten(&self) -> bool {
        self.flags().contains(ContainsFlags::KITTEN)
    }

    pub const fn contains_secret(&self) -> bool {
        self.flags().contains(ContainsFlags::SECRET)
    }

    pub const fn contains_item(&self) -> bool {
        self.flags().contains(ContainsFlags::ITEM)
    }

    /// Where a stair cell leads, if it has been linked
    pub const fn stair_destination(&self) -> Option<Coord> {
        match self.region {
            Region::Stair { destination, .. } => destination,
            _ => None,
        }
    }

    /// Reassign the archetype, resetting all sub-state to its defaults
    pub fn set_archetype(&mut self, archetype: Archetype) {
        self.region = Region::defaults(archetype);
    }

    /// Set whichever sub-type the value refines
    pub fn set_subtype(&mut self, subtype: Subtype) -> Result<(), CellError> {
        match subtype {
            Subtype::Wall(v) => self.set_wall_subtype(v),
            Subtype::Floor(v) => self.set_floor_subtype(v),
            Subtype::Door(v) => self.set_door_subtype(v),
            Subtype::Stair(v) => self.set_stair_subtype(v),
        }
    }

    /// Set the wall sub-type
    ///
    /// `Item` and `Secret` clear the contents and raise the matching flag.
    pub fn set_wall_subtype(&mut self, value: WallSubtype) -> Result<(), CellError> {
        let actual = self.archetype();
        let Region::Wall { subtype, stash } = &mut self.region else {
            return Err(rejected(Attribute::WallSubtype, WALL_ONLY, actual));
        };
        if value == WallSubtype::NotApplicable {
            return Err(not_applicable(Attribute::WallSubtype));
        }
        *subtype = value;
        stash.mark_subtype(value == WallSubtype::Item, value == WallSubtype::Secret);
        Ok(())
    }

    /// Set the floor sub-type
    ///
    /// Doors and stairs keep their default floor; only floor cells may change it.
    pub fn set_floor_subtype(&mut self, value: FloorSubtype) -> Result<(), CellError> {
        let actual = self.archetype();
        let Region::Floor { subtype, stash } = &mut self.region else {
            return Err(rejected(Attribute::FloorSubtype, FLOOR_ONLY, actual));
        };
        if value == FloorSubtype::NotApplicable {
            return Err(not_applicable(Attribute::FloorSubtype));
        }
        *subtype = value;
        stash.mark_subtype(value == FloorSubtype::Item, value == FloorSubtype::Secret);
        Ok(())
    }

    pub fn set_door_subtype(&mut self, value: DoorSubtype) -> Result<(), CellError> {
        let actual = self.archetype();
        let Region::Door { subtype, .. } = &mut self.region else {
            return Err(rejected(Attribute::DoorSubtype, DOOR_ONLY, actual));
        };
        if value == DoorSubtype::NotApplicable {
            return Err(not_applicable(Attribute::DoorSubtype));
        }
        *subtype = value;
        Ok(())
    }

    pub fn set_stair_subtype(&mut self, value: StairSubtype) -> Result<(), CellError> {
        let actual = self.archetype();
        let Region::Stair { subtype, .. } = &mut self.region else {
            return Err(rejected(Attribute::StairSubtype, STAIR_ONLY, actual));
        };
        if value == StairSubtype::NotApplicable {
            return Err(not_applicable(Attribute::StairSubtype));
        }
        *subtype = value;
        Ok(())
    }

    /// Set the contents of a wall or floor cell
    ///
    /// All contains flags are recomputed from the new contents. The item flag
    /// also stays raised while the sub-type is `Item`.
    ///
    /// Besides the archetype check, writing `Contents::NotApplicable` fails
    /// with [`CellError::NotApplicableValue`] and leaves the cell unchanged.
    pub fn set_contents(&mut self, value: Contents) -> Result<(), CellError> {
        let actual = self.archetype();
        let (stash, item_subtype) = match &mut self.region {
            Region::Wall { subtype, stash } => (stash, *subtype == WallSubtype::Item),
            Region::Floor { subtype, stash } => (stash, *subtype == FloorSubtype::Item),
            _ => return Err(rejected(Attribute::Contents, HOLDERS, actual)),
        };
        if value == Contents::NotApplicable {
            return Err(not_applicable(Attribute::Contents));
        }
        stash.fill(value, item_subtype);
        Ok(())
    }

    /// Set the key flag; the item flag follows the value
    pub fn set_contains_key(&mut self, value: bool) -> Result<(), CellError> {
        self.set_contains(Attribute::ContainsKey, ContainsFlags::KEY, value)
    }

    /// Set the kitten flag; the item flag follows the value
    pub fn set_contains_kitten(&mut self, value: bool) -> Result<(), CellError> {
        self.set_contains(Attribute::ContainsKitten, ContainsFlags::KITTEN, value)
    }

    /// Set the secret flag; the item flag follows the value
    pub fn set_contains_secret(&mut self, value: bool) -> Result<(), CellError> {
        self.set_contains(Attribute::ContainsSecret, ContainsFlags::SECRET, value)
    }

    pub fn set_contains_item(&mut self, value: bool) -> Result<(), CellError> {
        let stash = self.stash_mut(Attribute::ContainsItem)?;
        stash.flags.set(ContainsFlags::ITEM, value);
        Ok(())
    }

    // Sibling flags are left alone: only the item flag mirrors the write.
    fn set_contains(
        &mut self,
        attribute: Attribute,
        flag: ContainsFlags,
        value: bool,
    ) -> Result<(), CellError> {
        let stash = self.stash_mut(attribute)?;
        stash.flags.set(flag, value);
        stash.flags.set(ContainsFlags::ITEM, value);
        Ok(())
    }

    fn stash_mut(&mut self, attribute: Attribute) -> Result<&mut Stash, CellError> {
        let actual = self.archetype();
        match &mut self.region {
            Region::Wall { stash, .. } | Region::Floor { stash, .. } => Ok(stash),
            _ => Err(rejected(attribute, HOLDERS, actual)),
        }
    }

    /// Link a stair cell to the coordinates it leads to
    pub fn set_stair_destination(&mut self, coord: impl Into<Coord>) -> Result<(), CellError> {
        let actual = self.archetype();
        let Region::Stair { destination, .. } = &mut self.region else {
            return Err(rejected(Attribute::StairDestination, STAIR_ONLY, actual));
        };
        *destination = Some(coord.into());
        Ok(())
    }

    /// Check if the player can move onto this cell
    pub const fn is_passable(&self) -> bool {
        match self.region {
            Region::Wall { .. } => false,
            Region::Door { subtype, .. } => !matches!(subtype, DoorSubtype::Locked),
            Region::Floor { .. } | Region::Stair { .. } => true,
        }
    }

    /// Check if this is the level exit
    pub const fn is_exit(&self) -> bool {
        matches!(
            self.region,
            Region::Door {
                subtype: DoorSubtype::Exit,
                ..
            }
        )
    }

    /// Get the display character for this cell
    pub const fn symbol(&self) -> char {
        match self.region {
            Region::Wall { .. } => WALL_SYM,
            Region::Floor { stash, .. } => match stash.contents {
                Contents::Key => KEY_SYM,
                Contents::Kitten => KITTEN_SYM,
                _ => FLOOR_SYM,
            },
            Region::Door { subtype, .. } => match subtype {
                DoorSubtype::Locked => LOCKED_DOOR_SYM,
                DoorSubtype::Exit => EXIT_SYM,
                _ => OPEN_DOOR_SYM,
            },
            Region::Stair { subtype, .. } => match subtype {
                StairSubtype::Up => UP_STAIR_SYM,
                _ => DOWN_STAIR_SYM,
            },
        }
    }
}
