use crate::state::Cell;

/// Direction a shift pushes tiles toward.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Returns true when lines for this direction are rows.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Maps a position inside a line to its grid cell.
    ///
    /// `line` selects the row (horizontal) or column (vertical), and `offset`
    /// counts from the leading edge, so offset 0 is always the cell tiles are
    /// pushed toward. Both the extractor and its inverse go through this one
    /// mapping.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `line` or `offset` is not below `size`.
    #[inline]
    pub const fn cell(self, size: usize, line: usize, offset: usize) -> Cell {
        debug_assert!(line < size && offset < size);
        match self {
            Direction::Left => Cell::new(line, offset),
            Direction::Right => Cell::new(line, size - 1 - offset),
            Direction::Up => Cell::new(offset, line),
            Direction::Down => Cell::new(size - 1 - offset, line),
        }
    }
}
