//! Dungeon map system
//!
//! Contains the cell archetypes, the cell entity and the level grid.

mod cell;
mod defaults;
mod kinds;
mod level;
mod record;

pub use cell::Cell;
pub use defaults::{archetype_defaults, ArchetypeDefaults};
pub use kinds::{
    Archetype, ContainsFlags, Contents, Coord, DoorSubtype, FloorSubtype, StairSubtype, Subtype,
    WallSubtype,
};
pub use level::{Level, LevelOptions};
pub use record::CellRecord;
