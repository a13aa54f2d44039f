//! Cell state errors
//!
//! Every archetype-scoped mutation reports a rejected write through
//! [`CellError`] instead of panicking.

use strum::Display;
use thiserror::Error;

use crate::dungeon::{Archetype, Coord};

/// Archetype-scoped cell attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Attribute {
    #[strum(serialize = "wall subtype")]
    WallSubtype,
    #[strum(serialize = "floor subtype")]
    FloorSubtype,
    #[strum(serialize = "door subtype")]
    DoorSubtype,
    #[strum(serialize = "stair subtype")]
    StairSubtype,
    #[strum(serialize = "contents")]
    Contents,
    #[strum(serialize = "contains-key flag")]
    ContainsKey,
    #[strum(serialize = "contains-kitten flag")]
    ContainsKitten,
    #[strum(serialize = "contains-secret flag")]
    ContainsSecret,
    #[strum(serialize = "contains-item flag")]
    ContainsItem,
    #[strum(serialize = "stair destination")]
    StairDestination,
}

/// Errors raised by cell and level mutation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    #[error("Only cells of archetype {} can have a {attribute} (cell is {actual})", join(.required))]
    InvalidStateTransition {
        attribute: Attribute,
        required: &'static [Archetype],
        actual: Archetype,
    },

    #[error("The {attribute} cannot be set to NotApplicable")]
    NotApplicableValue { attribute: Attribute },

    #[error("Inconsistent record: a {archetype} cell cannot carry this {attribute}")]
    InconsistentRecord {
        attribute: Attribute,
        archetype: Archetype,
    },

    #[error("Position {coord} is outside the {width}x{height} level")]
    OutOfBounds {
        coord: Coord,
        width: usize,
        height: usize,
    },
}

fn join(archetypes: &[Archetype]) -> String {
    archetypes
        .iter()
        .map(|a| a.to_string().to_uppercase())
        .collect::<Vec<_>>()
        .join(" or ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_display() {
        let err = CellError::InvalidStateTransition {
            attribute: Attribute::DoorSubtype,
            required: &[Archetype::Door],
            actual: Archetype::Wall,
        };
        assert_eq!(
            err.to_string(),
            "Only cells of archetype DOOR can have a door subtype (cell is Wall)"
        );
    }

    #[test]
    fn test_invalid_transition_lists_every_archetype() {
        let err = CellError::InvalidStateTransition {
            attribute: Attribute::Contents,
            required: &[Archetype::Wall, Archetype::Floor],
            actual: Archetype::Stair,
        };
        assert!(err.to_string().contains("WALL or FLOOR"));
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = CellError::OutOfBounds {
            coord: Coord::new(9, 2),
            width: 4,
            height: 4,
        };
        assert!(err.to_string().contains("(9, 2)"));
        assert!(err.to_string().contains("4x4"));
    }
}
