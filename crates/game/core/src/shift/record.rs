use super::{Direction, LineMove};
use crate::state::Cell;

/// A single tile transition produced by a full-grid shift.
///
/// Indices are line-local: `old_index` and `new_index` count from the leading
/// edge of `direction` inside row or column `line`. Use [`Self::from_cell`]
/// and [`Self::to_cell`] for grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub line: usize,
    pub direction: Direction,
    pub old_index: usize,
    pub new_index: usize,
    pub value: u32,
    pub new_value: u32,
    pub merged: bool,
}

impl MoveRecord {
    pub fn new(line: usize, direction: Direction, movement: LineMove) -> Self {
        Self {
            line,
            direction,
            old_index: movement.old_index,
            new_index: movement.new_index,
            value: movement.value,
            new_value: movement.new_value,
            merged: movement.merged,
        }
    }

    /// Grid cell the tile left.
    pub fn from_cell(&self, size: usize) -> Cell {
        self.direction.cell(size, self.line, self.old_index)
    }

    /// Grid cell the tile landed on.
    pub fn to_cell(&self, size: usize) -> Cell {
        self.direction.cell(size, self.line, self.new_index)
    }
}
