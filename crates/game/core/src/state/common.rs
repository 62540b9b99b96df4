use std::fmt;

/// Discrete grid coordinate expressed as `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A tile that was just placed on the board by a spawn.
///
/// Returned to the caller and never stored by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePosition {
    pub cell: Cell,
    pub value: u32,
}

impl TilePosition {
    pub const fn new(cell: Cell, value: u32) -> Self {
        Self { cell, value }
    }

    #[inline]
    pub const fn row(&self) -> usize {
        self.cell.row
    }

    #[inline]
    pub const fn col(&self) -> usize {
        self.cell.col
    }
}
