//! Core constants

/// Default level dimensions
pub const DEFAULT_COLS: usize = 40;
pub const DEFAULT_ROWS: usize = 20;

/// Display characters
pub const WALL_SYM: char = '#';
pub const FLOOR_SYM: char = '.';
pub const KEY_SYM: char = 'k';
pub const KITTEN_SYM: char = 'f';
pub const LOCKED_DOOR_SYM: char = '+';
pub const OPEN_DOOR_SYM: char = '/';
pub const EXIT_SYM: char = 'E';
pub const UP_STAIR_SYM: char = '<';
pub const DOWN_STAIR_SYM: char = '>';
