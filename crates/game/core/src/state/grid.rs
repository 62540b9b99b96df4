use std::fmt;
use std::ops::{Index, IndexMut};

use super::Cell;

/// Square board of tile values stored in row-major order.
///
/// A value of `0` marks an empty cell. The side length is fixed when the grid
/// is created and never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    size: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// Creates an empty `size`×`size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Builds a grid from nested rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a square.
    pub fn from_rows<R>(rows: &[R]) -> Self
    where
        R: AsRef<[u32]>,
    {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), size, "grid rows must form a square");
            cells.extend_from_slice(row);
        }
        Self { size, cells }
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the value at `cell`, or `None` when the cell lies outside the grid.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<u32> {
        self.offset(cell).map(|offset| self.cells[offset])
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    #[inline]
    pub fn is_empty_at(&self, cell: Cell) -> bool {
        self.get(cell) == Some(0)
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let size = self.size;
        (0..size * size).map(move |offset| Cell::new(offset / size, offset % size))
    }

    /// Iterates over the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(|cell| self[*cell] == 0)
    }

    /// Iterates over the occupied cells together with their values.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.cells()
            .map(|cell| (cell, self[cell]))
            .filter(|(_, value)| *value != 0)
    }

    pub fn max_value(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Raw values in row-major order.
    pub fn values(&self) -> &[u32] {
        &self.cells
    }

    #[inline]
    fn offset(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.size + cell.col)
    }
}

impl Index<Cell> for Grid {
    type Output = u32;

    fn index(&self, cell: Cell) -> &u32 {
        assert!(
            self.contains(cell),
            "cell {cell} is outside a {size}x{size} grid",
            size = self.size
        );
        &self.cells[cell.row * self.size + cell.col]
    }
}

impl IndexMut<Cell> for Grid {
    fn index_mut(&mut self, cell: Cell) -> &mut u32 {
        assert!(
            self.contains(cell),
            "cell {cell} is outside a {size}x{size} grid",
            size = self.size
        );
        &mut self.cells[cell.row * self.size + cell.col]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_value().to_string().len();
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>width$}", self[Cell::new(row, col)])?;
            }
            if row + 1 < self.size {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

/// Cell count does not match the declared side length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("a grid of size {size} needs {size}x{size} cells, got {actual}")]
pub struct GridShapeError {
    pub size: usize,
    pub actual: usize,
}

/// Unchecked wire form of [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    size: usize,
    cells: Vec<u32>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridShapeError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        let GridRepr { size, cells } = repr;
        if size.checked_mul(size) != Some(cells.len()) {
            return Err(GridShapeError {
                size,
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }
}
