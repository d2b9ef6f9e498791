//! 5x5 board geometry with flat cell indices

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StarhopError;

/// Board side length
pub const BOARD_SIZE: u8 = 5;

/// Total number of cells
pub const CELL_COUNT: u8 = BOARD_SIZE * BOARD_SIZE;

/// Index of the center cell, where the piece always stands
pub const CENTER_INDEX: u8 = 12;

/// Board regions used to spread targets around the board
pub const CORNERS: [u8; 4] = [0, 4, 20, 24];
pub const EDGES: [u8; 12] = [1, 2, 3, 5, 9, 10, 14, 15, 19, 21, 22, 23];
pub const INNER: [u8; 8] = [6, 7, 8, 11, 13, 16, 17, 18];

/// A cell on the board, index 0..25 in row-major order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Cell(u8);

impl Cell {
    /// The center cell (row 2, col 2)
    pub const CENTER: Cell = Cell(CENTER_INDEX);

    /// Cell from a flat index, `None` when off the board
    pub const fn new(index: u8) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Cell from signed row/col, `None` when off the board
    pub fn from_row_col(row: i8, col: i8) -> Option<Self> {
        if Self::in_bounds(row, col) {
            Some(Self(row as u8 * BOARD_SIZE + col as u8))
        } else {
            None
        }
    }

    /// Check if a row/col pair is on the board
    pub fn in_bounds(row: i8, col: i8) -> bool {
        (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn row(self) -> i8 {
        (self.0 / BOARD_SIZE) as i8
    }

    pub const fn col(self) -> i8 {
        (self.0 % BOARD_SIZE) as i8
    }

    /// Neighbor at a (row, col) offset, if on the board
    pub fn offset(self, dr: i8, dc: i8) -> Option<Cell> {
        Self::from_row_col(self.row() + dr, self.col() + dc)
    }

    /// Region this cell belongs to (the center has none)
    pub fn region(self) -> Option<Region> {
        Region::of(self)
    }

    /// Iterate every cell on the board
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).map(Cell)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::CENTER
    }
}

impl TryFrom<u8> for Cell {
    type Error = StarhopError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Cell::new(index).ok_or(StarhopError::CellOutOfRange(index as i64))
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell.0
    }
}

impl fmt::Display for Cell {
    /// Human-facing, 1-based "row col" label
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {} Column {}", self.row() + 1, self.col() + 1)
    }
}

/// Static partition of the 24 non-center cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Corner,
    Edge,
    Inner,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Corner, Region::Edge, Region::Inner];

    /// Cells in this region
    pub fn cells(self) -> &'static [u8] {
        match self {
            Region::Corner => &CORNERS,
            Region::Edge => &EDGES,
            Region::Inner => &INNER,
        }
    }

    pub fn contains(self, cell: Cell) -> bool {
        self.cells().contains(&cell.index())
    }

    pub fn of(cell: Cell) -> Option<Region> {
        Self::ALL.into_iter().find(|region| region.contains(cell))
    }
}
