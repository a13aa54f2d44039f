use proptest::prelude::*;
use strum::IntoEnumIterator;

use te_core::dungeon::{
    archetype_defaults, Archetype, Cell, CellRecord, Contents, Coord, DoorSubtype, FloorSubtype,
    StairSubtype, WallSubtype,
};
use te_core::{Attribute, CellError};

fn archetypes() -> impl Strategy<Value = Archetype> {
    prop::sample::select(Archetype::iter().collect::<Vec<_>>())
}

fn door_subtypes() -> impl Strategy<Value = DoorSubtype> {
    prop::sample::select(DoorSubtype::iter().collect::<Vec<_>>())
}

fn stair_subtypes() -> impl Strategy<Value = StairSubtype> {
    prop::sample::select(StairSubtype::iter().collect::<Vec<_>>())
}

fn contents() -> impl Strategy<Value = Contents> {
    prop::sample::select(Contents::iter().collect::<Vec<_>>())
}

fn is_transition_error(result: Result<(), CellError>, attribute: Attribute) -> bool {
    matches!(
        result,
        Err(CellError::InvalidStateTransition { attribute: a, .. }) if a == attribute
    )
}

/// Field-by-field view used to compare states
fn snapshot(cell: &Cell) -> CellRecord {
    CellRecord::from(cell)
}

#[test]
fn test_new_cells_match_default_table() {
    for archetype in Archetype::iter() {
        let cell = Cell::with_archetype(archetype);
        let defaults = archetype_defaults(archetype);
        assert_eq!(cell.archetype(), archetype);
        assert_eq!(cell.wall_subtype(), defaults.wall, "{archetype}");
        assert_eq!(cell.floor_subtype(), defaults.floor, "{archetype}");
        assert_eq!(cell.door_subtype(), defaults.door, "{archetype}");
        assert_eq!(cell.stair_subtype(), defaults.stair, "{archetype}");
        assert_eq!(cell.contents(), defaults.contents, "{archetype}");
        assert!(!cell.contains_key());
        assert!(!cell.contains_kitten());
        assert!(!cell.contains_secret());
        assert!(!cell.contains_item());
        assert_eq!(cell.stair_destination(), None);
    }
}

#[test]
fn test_default_table_rows() {
    let wall = Cell::with_archetype(Archetype::Wall);
    assert_eq!(wall.wall_subtype(), WallSubtype::Default);
    assert_eq!(wall.floor_subtype(), FloorSubtype::NotApplicable);
    assert_eq!(wall.contents(), Contents::Empty);

    let stair = Cell::with_archetype(Archetype::Stair);
    assert_eq!(stair.floor_subtype(), FloorSubtype::Default);
    assert_eq!(stair.stair_subtype(), StairSubtype::Default);
    assert_eq!(stair.door_subtype(), DoorSubtype::NotApplicable);
    assert_eq!(stair.contents(), Contents::NotApplicable);
}

#[test]
fn test_scenario_floor_kitten() {
    let mut cell = Cell::with_archetype(Archetype::Floor);
    cell.set_contents(Contents::Kitten).unwrap();
    assert!(cell.contains_kitten());
    assert!(cell.contains_item());
    assert_eq!(cell.contents(), Contents::Kitten);
}

#[test]
fn test_scenario_wall_rejects_lock() {
    let mut cell = Cell::with_archetype(Archetype::Wall);
    assert!(is_transition_error(
        cell.set_door_subtype(DoorSubtype::Locked),
        Attribute::DoorSubtype
    ));
    assert_eq!(cell.door_subtype(), DoorSubtype::NotApplicable);
}

#[test]
fn test_scenario_door_unlocked() {
    let cell = Cell::with_archetype(Archetype::Door);
    assert_eq!(cell.door_subtype(), DoorSubtype::Unlocked);
}

#[test]
fn test_scenario_stair_destination_cleared() {
    let mut cell = Cell::with_archetype(Archetype::Stair);
    cell.set_stair_destination((3, 4)).unwrap();
    assert_eq!(cell.stair_destination(), Some(Coord::new(3, 4)));

    cell.set_archetype(Archetype::Floor);
    assert_eq!(cell.stair_destination(), None);
    assert_eq!(cell.floor_subtype(), FloorSubtype::Default);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn door_subtype_only_on_doors(archetype in archetypes(), value in door_subtypes()) {
        prop_assume!(archetype != Archetype::Door);
        let mut cell = Cell::with_archetype(archetype);
        let before = snapshot(&cell);
        prop_assert!(is_transition_error(cell.set_door_subtype(value), Attribute::DoorSubtype));
        prop_assert_eq!(cell.door_subtype(), DoorSubtype::NotApplicable);
        prop_assert_eq!(snapshot(&cell), before);
    }

    #[test]
    fn stair_subtype_only_on_stairs(archetype in archetypes(), value in stair_subtypes()) {
        prop_assume!(archetype != Archetype::Stair);
        let mut cell = Cell::with_archetype(archetype);
        prop_assert!(is_transition_error(cell.set_stair_subtype(value), Attribute::StairSubtype));
        prop_assert_eq!(cell.stair_subtype(), StairSubtype::NotApplicable);
    }

    #[test]
    fn key_contents_on_holders(archetype in archetypes()) {
        prop_assume!(archetype.can_hold_contents());
        let mut cell = Cell::with_archetype(archetype);
        cell.set_contents(Contents::Key).unwrap();
        prop_assert!(cell.contains_key());
        prop_assert!(cell.contains_item());
        prop_assert!(!cell.contains_kitten());
        prop_assert!(!cell.contains_secret());
    }

    #[test]
    fn contents_rejected_off_holders(archetype in archetypes(), value in contents()) {
        prop_assume!(!archetype.can_hold_contents());
        let mut cell = Cell::with_archetype(archetype);
        prop_assert!(is_transition_error(cell.set_contents(value), Attribute::Contents));
        prop_assert_eq!(cell.contents(), Contents::NotApplicable);
        prop_assert!(!cell.contains_item());
    }

    #[test]
    fn contents_keep_flags_consistent(archetype in archetypes(), value in contents()) {
        prop_assume!(archetype.can_hold_contents());
        prop_assume!(value != Contents::NotApplicable);
        let mut cell = Cell::with_archetype(archetype);
        cell.set_contents(value).unwrap();
        prop_assert_eq!(cell.contains_key(), value == Contents::Key);
        prop_assert_eq!(cell.contains_kitten(), value == Contents::Kitten);
        prop_assert_eq!(cell.contains_secret(), value == Contents::Secret);
        prop_assert_eq!(cell.contains_item(), value.is_item());
    }

    #[test]
    fn set_archetype_is_idempotent(start in archetypes(), target in archetypes()) {
        let mut once = Cell::with_archetype(start);
        once.set_archetype(target);
        let mut twice = once;
        twice.set_archetype(target);
        prop_assert_eq!(snapshot(&once), snapshot(&twice));
        prop_assert_eq!(once, Cell::with_archetype(target));
    }

    #[test]
    fn stair_destination_round_trip(archetype in archetypes(), row in 0usize..64, col in 0usize..64) {
        let mut cell = Cell::with_archetype(archetype);
        let result = cell.set_stair_destination((row, col));
        if archetype == Archetype::Stair {
            prop_assert!(result.is_ok());
            prop_assert_eq!(cell.stair_destination(), Some(Coord::new(row, col)));
        } else {
            prop_assert!(is_transition_error(result, Attribute::StairDestination));
            prop_assert_eq!(cell.stair_destination(), None);
        }
    }

    #[test]
    fn flag_setters_scoped_to_holders(archetype in archetypes(), value in any::<bool>()) {
        let mut cell = Cell::with_archetype(archetype);
        let results = [
            cell.set_contains_key(value),
            cell.set_contains_kitten(value),
            cell.set_contains_secret(value),
            cell.set_contains_item(value),
        ];
        for result in results {
            prop_assert_eq!(result.is_ok(), archetype.can_hold_contents());
        }
        if !archetype.can_hold_contents() {
            prop_assert!(cell.flags().is_empty());
        }
    }

    #[test]
    fn serialized_cells_survive_reload(archetype in archetypes(), value in contents()) {
        let mut cell = Cell::with_archetype(archetype);
        let _ = cell.set_contents(value);
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, cell);
    }
}
