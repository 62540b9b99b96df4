use merge_core::{Cell, Direction, Grid, MergeRule, RandomSource, TilePolicy};

/// Tunable parameters of [`ClassicPolicy`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PolicyConfig {
    /// Tiles placed on the starting board.
    pub initial_tiles: usize,
    /// Chance, in percent, that a spawned tile carries `high_value`.
    pub high_value_percent: u32,
    pub low_value: u32,
    pub high_value: u32,
}

impl PolicyConfig {
    pub const DEFAULT_INITIAL_TILES: usize = 2;
    pub const DEFAULT_HIGH_VALUE_PERCENT: u32 = 10;
    pub const DEFAULT_LOW_VALUE: u32 = 2;
    pub const DEFAULT_HIGH_VALUE: u32 = 4;

    pub fn new() -> Self {
        Self {
            initial_tiles: Self::DEFAULT_INITIAL_TILES,
            high_value_percent: Self::DEFAULT_HIGH_VALUE_PERCENT,
            low_value: Self::DEFAULT_LOW_VALUE,
            high_value: Self::DEFAULT_HIGH_VALUE,
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Classic 2048 rules.
///
/// - Starts with `initial_tiles` tiles on random empty cells.
/// - Spawns `high_value` with `high_value_percent`% chance, else `low_value`.
/// - Spawns on the trailing edge of the last shift (the edge tiles moved away
///   from), falling back to any empty cell.
/// - Scores each tile by the points its merges earned: `(k - 1) * 2^k` for a
///   `2^k` tile.
#[derive(Clone, Debug, Default)]
pub struct ClassicPolicy {
    config: PolicyConfig,
}

impl ClassicPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    fn draw_value(&self, rng: &mut dyn RandomSource) -> u32 {
        if rng.chance(self.config.high_value_percent) {
            self.config.high_value
        } else {
            self.config.low_value
        }
    }

    fn pick(cells: &[Cell], rng: &mut dyn RandomSource) -> Option<Cell> {
        if cells.is_empty() {
            None
        } else {
            Some(cells[rng.index(cells.len())])
        }
    }
}

impl MergeRule for ClassicPolicy {}

impl TilePolicy for ClassicPolicy {
    fn initial_grid(&self, size: usize, rng: &mut dyn RandomSource) -> Grid {
        let mut grid = Grid::new(size);
        for _ in 0..self.config.initial_tiles {
            let empty: Vec<Cell> = grid.empty_cells().collect();
            let Some(cell) = Self::pick(&empty, rng) else {
                break;
            };
            grid[cell] = self.draw_value(rng);
        }
        grid
    }

    fn next_tile_value(&self, rng: &mut dyn RandomSource) -> u32 {
        self.draw_value(rng)
    }

    fn next_tile_position(
        &self,
        grid: &Grid,
        rng: &mut dyn RandomSource,
        last_direction: Direction,
    ) -> Cell {
        let size = grid.size();
        let trailing: Vec<Cell> = (0..size)
            .map(|line| last_direction.cell(size, line, size - 1))
            .collect();

        let open: Vec<Cell> = trailing
            .iter()
            .copied()
            .filter(|cell| grid.is_empty_at(*cell))
            .collect();
        if let Some(cell) = Self::pick(&open, rng) {
            return cell;
        }

        let empty: Vec<Cell> = grid.empty_cells().collect();
        if let Some(cell) = Self::pick(&empty, rng) {
            return cell;
        }

        // Full board: hand back an occupied cell so the engine reports a block.
        trailing[0]
    }

    fn score_for_value(&self, value: u32) -> u64 {
        match value {
            0..=2 => 0,
            v if v.is_power_of_two() => u64::from(v.trailing_zeros() - 1) * u64::from(v),
            v => u64::from(v),
        }
    }
}
