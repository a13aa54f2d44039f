//! Level grid
//!
//! Owns a rectangle of cells addressed by (row, column).

use serde::{Deserialize, Serialize};

use super::{Archetype, Cell, Coord, StairSubtype};
use crate::error::CellError;
use crate::{DEFAULT_COLS, DEFAULT_ROWS};

/// Level construction options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelOptions {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Archetype every cell starts with
    pub fill: Archetype,
}

impl Default for LevelOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_COLS,
            height: DEFAULT_ROWS,
            fill: Archetype::Floor,
        }
    }
}

/// A dungeon level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    width: usize,
    height: usize,
    /// Indexed as `cells[row][col]`
    cells: Vec<Vec<Cell>>,
}

impl Default for Level {
    fn default() -> Self {
        Self::new(LevelOptions::default())
    }
}

impl Level {
    /// Create a level filled with default cells of one archetype
    pub fn new(options: LevelOptions) -> Self {
        let width = options.width.max(1);
        let height = options.height.max(1);
        Self {
            width,
            height,
            cells: vec![vec![Cell::with_archetype(options.fill); width]; height],
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Check if position is inside the level
    pub const fn is_valid_pos(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    fn out_of_bounds(&self, coord: Coord) -> CellError {
        CellError::OutOfBounds {
            coord,
            width: self.width,
            height: self.height,
        }
    }

    /// Get cell at position
    pub fn cell(&self, coord: impl Into<Coord>) -> Result<&Cell, CellError> {
        let coord = coord.into();
        self.cells
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .ok_or_else(|| self.out_of_bounds(coord))
    }

    /// Get mutable cell at position
    pub fn cell_mut(&mut self, coord: impl Into<Coord>) -> Result<&mut Cell, CellError> {
        let coord = coord.into();
        if !self.is_valid_pos(coord) {
            return Err(self.out_of_bounds(coord));
        }
        Ok(&mut self.cells[coord.row][coord.col])
    }

    /// Replace the cell at position
    pub fn set_cell(&mut self, coord: impl Into<Coord>, cell: Cell) -> Result<(), CellError> {
        *self.cell_mut(coord)? = cell;
        Ok(())
    }

    /// Check if the player can step onto position
    pub fn is_passable(&self, coord: impl Into<Coord>) -> bool {
        self.cell(coord).is_ok_and(Cell::is_passable)
    }

    /// Iterate over every cell with its position, row by row
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (Coord::new(row, col), cell))
        })
    }

    /// Find the first stair of the given kind
    pub fn find_stairs(&self, kind: StairSubtype) -> Option<Coord> {
        self.iter()
            .find(|(_, cell)| {
                cell.archetype() == Archetype::Stair && cell.stair_subtype() == kind
            })
            .map(|(coord, _)| coord)
    }

    /// Render the level as one line of symbols per row
    pub fn to_ascii(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
