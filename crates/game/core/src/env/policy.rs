use super::RandomSource;
use crate::shift::{Direction, MergeRule};
use crate::state::{Cell, Grid};

/// Strategy that supplies tile values, spawn positions and scoring.
///
/// The merge rule is a supertrait so a policy carries its own combine
/// function; implementors that want classic doubling can rely on the
/// [`MergeRule`] defaults with an empty `impl MergeRule for X {}`.
pub trait TilePolicy: MergeRule + Send + Sync {
    /// Produces the starting board. Must return a grid of side `size`.
    fn initial_grid(&self, size: usize, rng: &mut dyn RandomSource) -> Grid;

    /// Produces the value of the next spawned tile.
    ///
    /// Called once at construction and once after every successful spawn.
    /// Must never return `0`, which the grid reads as an empty cell.
    fn next_tile_value(&self, rng: &mut dyn RandomSource) -> u32;

    /// Chooses where the next tile appears after a shift toward
    /// `last_direction`.
    ///
    /// Returning an occupied (or out-of-range) cell is allowed; the engine
    /// then reports that no tile was produced.
    fn next_tile_position(
        &self,
        grid: &Grid,
        rng: &mut dyn RandomSource,
        last_direction: Direction,
    ) -> Cell;

    /// Score contribution of a single cell. Must return 0 for 0.
    fn score_for_value(&self, value: u32) -> u64;
}
