//! Row/column extraction and write-back.
//!
//! [`extract`] reads a line so that index 0 is the leading edge of the shift;
//! [`write_back`] is its exact inverse.

use super::Direction;
use crate::state::Grid;

/// Reads line `line` of `grid` in the traversal order of `direction`.
///
/// # Panics
///
/// Panics if `line` is not below the grid size.
pub fn extract(grid: &Grid, line: usize, direction: Direction) -> Vec<u32> {
    let size = grid.size();
    assert!(line < size, "line {line} is outside a grid of size {size}");
    (0..size)
        .map(|offset| grid[direction.cell(size, line, offset)])
        .collect()
}

/// Writes `values` into line `line` of `grid`, using the same traversal order
/// as [`extract`].
///
/// # Panics
///
/// Panics if `line` is not below the grid size or `values` is not exactly one
/// line long.
pub fn write_back(grid: &mut Grid, line: usize, direction: Direction, values: &[u32]) {
    let size = grid.size();
    assert!(line < size, "line {line} is outside a grid of size {size}");
    assert_eq!(values.len(), size, "line length must match grid size");
    for (offset, value) in values.iter().enumerate() {
        grid[direction.cell(size, line, offset)] = *value;
    }
}
