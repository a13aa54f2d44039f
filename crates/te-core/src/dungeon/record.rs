//! Flat cell record for map persistence
//!
//! A [`CellRecord`] lists every attribute of a cell side by side, the way a
//! map file stores it. Converting a record back into a [`Cell`] checks that
//! each field is legal for the record's archetype.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Region, Stash};
use super::kinds::{
    Archetype, ContainsFlags, Contents, Coord, DoorSubtype, FloorSubtype, StairSubtype,
    WallSubtype,
};
use crate::error::{Attribute, CellError};

/// Every attribute of a cell as plain fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    pub archetype: Archetype,
    pub wall_subtype: WallSubtype,
    pub floor_subtype: FloorSubtype,
    pub door_subtype: DoorSubtype,
    pub stair_subtype: StairSubtype,
    pub contents: Contents,
    pub contains_key: bool,
    pub contains_kitten: bool,
    pub contains_secret: bool,
    pub contains_item: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stair_destination: Option<Coord>,
}

impl CellRecord {
    fn flags(&self) -> ContainsFlags {
        let mut flags = ContainsFlags::empty();
        flags.set(ContainsFlags::KEY, self.contains_key);
        flags.set(ContainsFlags::KITTEN, self.contains_kitten);
        flags.set(ContainsFlags::SECRET, self.contains_secret);
        flags.set(ContainsFlags::ITEM, self.contains_item);
        flags
    }
}

impl From<&Cell> for CellRecord {
    fn from(cell: &Cell) -> Self {
        Self {
            archetype: cell.archetype(),
            wall_subtype: cell.wall_subtype(),
            floor_subtype: cell.floor_subtype(),
            door_subtype: cell.door_subtype(),
            stair_subtype: cell.stair_subtype(),
            contents: cell.contents(),
            contains_key: cell.contains_key(),
            contains_kitten: cell.contains_kitten(),
            contains_secret: cell.contains_secret(),
            contains_item: cell.contains_item(),
            stair_destination: cell.stair_destination(),
        }
    }
}

impl From<Cell> for CellRecord {
    fn from(cell: Cell) -> Self {
        Self::from(&cell)
    }
}

/// Require a field to be set exactly when its archetype allows it
fn check(
    applies: bool,
    is_set: bool,
    attribute: Attribute,
    archetype: Archetype,
) -> Result<(), CellError> {
    if applies == is_set {
        return Ok(());
    }
    tracing::warn!(%attribute, %archetype, "inconsistent cell record");
    Err(CellError::InconsistentRecord {
        attribute,
        archetype,
    })
}

impl TryFrom<CellRecord> for Cell {
    type Error = CellError;

    fn try_from(record: CellRecord) -> Result<Self, Self::Error> {
        let archetype = record.archetype;
        let is_wall = archetype == Archetype::Wall;
        let is_door = archetype == Archetype::Door;
        let is_stair = archetype == Archetype::Stair;
        let holds = archetype.can_hold_contents();

        check(
            is_wall,
            record.wall_subtype != WallSubtype::NotApplicable,
            Attribute::WallSubtype,
            archetype,
        )?;
        check(
            !is_wall,
            record.floor_subtype != FloorSubtype::NotApplicable,
            Attribute::FloorSubtype,
            archetype,
        )?;
        check(
            is_door,
            record.door_subtype != DoorSubtype::NotApplicable,
            Attribute::DoorSubtype,
            archetype,
        )?;
        check(
            is_stair,
            record.stair_subtype != StairSubtype::NotApplicable,
            Attribute::StairSubtype,
            archetype,
        )?;
        check(
            holds,
            record.contents != Contents::NotApplicable,
            Attribute::Contents,
            archetype,
        )?;

        // Flags may be clear on any archetype, but only holders may raise them
        let flags = record.flags();
        if !holds {
            for (flag, attribute) in [
                (ContainsFlags::KEY, Attribute::ContainsKey),
                (ContainsFlags::KITTEN, Attribute::ContainsKitten),
                (ContainsFlags::SECRET, Attribute::ContainsSecret),
                (ContainsFlags::ITEM, Attribute::ContainsItem),
            ] {
                check(false, flags.contains(flag), attribute, archetype)?;
            }
        }
        if !is_stair {
            check(
                false,
                record.stair_destination.is_some(),
                Attribute::StairDestination,
                archetype,
            )?;
        }

        let stash = Stash {
            contents: record.contents,
            flags,
        };
        let region = match archetype {
            Archetype::Wall => Region::Wall {
                subtype: record.wall_subtype,
                stash,
            },
            Archetype::Floor => Region::Floor {
                subtype: record.floor_subtype,
                stash,
            },
            Archetype::Door => Region::Door {
                floor: record.floor_subtype,
                subtype: record.door_subtype,
            },
            Archetype::Stair => Region::Stair {
                floor: record.floor_subtype,
                subtype: record.stair_subtype,
                destination: record.stair_destination,
            },
        };
        Ok(Cell::from_region(region))
    }
}
