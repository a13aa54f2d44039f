//! Archetype default sub-state

use super::kinds::{Archetype, Contents, DoorSubtype, FloorSubtype, StairSubtype, WallSubtype};

/// Sub-state seeded whenever a cell is given an archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeDefaults {
    pub wall: WallSubtype,
    pub floor: FloorSubtype,
    pub door: DoorSubtype,
    pub stair: StairSubtype,
    pub contents: Contents,
}

/// Default sub-state for an archetype
///
/// Doors and stairs sit on a default floor; doors start unlocked. Only walls
/// and floors can hold contents.
pub const fn archetype_defaults(archetype: Archetype) -> ArchetypeDefaults {
    match archetype {
        Archetype::Wall => ArchetypeDefaults {
            wall: WallSubtype::Default,
            floor: FloorSubtype::NotApplicable,
            door: DoorSubtype::NotApplicable,
            stair: StairSubtype::NotApplicable,
            contents: Contents::Empty,
        },
        Archetype::Floor => ArchetypeDefaults {
            wall: WallSubtype::NotApplicable,
            floor: FloorSubtype::Default,
            door: DoorSubtype::NotApplicable,
            stair: StairSubtype::NotApplicable,
            contents: Contents::Empty,
        },
        Archetype::Door => ArchetypeDefaults {
            wall: WallSubtype::NotApplicable,
            floor: FloorSubtype::Default,
            door: DoorSubtype::Unlocked,
            stair: StairSubtype::NotApplicable,
            contents: Contents::NotApplicable,
        },
        Archetype::Stair => ArchetypeDefaults {
            wall: WallSubtype::NotApplicable,
            floor: FloorSubtype::Default,
            door: DoorSubtype::NotApplicable,
            stair: StairSubtype::Default,
            contents: Contents::NotApplicable,
        },
    }
}
