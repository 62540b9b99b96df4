#![allow(dead_code)]

use merge_core::{Cell, Direction, Grid, GridEngine, MergeRule, RandomSource, RngStream, TilePolicy};

/// Empty starting board, always spawns a 2 on the first empty cell of the
/// trailing edge, scores each tile at face value.
pub struct PlainPolicy;

impl MergeRule for PlainPolicy {}

impl TilePolicy for PlainPolicy {
    fn initial_grid(&self, size: usize, _rng: &mut dyn RandomSource) -> Grid {
        Grid::new(size)
    }

    fn next_tile_value(&self, _rng: &mut dyn RandomSource) -> u32 {
        2
    }

    fn next_tile_position(
        &self,
        grid: &Grid,
        _rng: &mut dyn RandomSource,
        last_direction: Direction,
    ) -> Cell {
        let size = grid.size();
        let trailing = size - 1;
        (0..size)
            .flat_map(|line| (0..size).map(move |offset| (line, offset)))
            .map(|(line, offset)| last_direction.cell(size, line, trailing - offset))
            .find(|cell| grid.is_empty_at(*cell))
            .unwrap_or(Cell::ORIGIN)
    }

    fn score_for_value(&self, value: u32) -> u64 {
        value as u64
    }
}

pub fn engine(size: usize) -> GridEngine<PlainPolicy, RngStream> {
    GridEngine::new(size, PlainPolicy, RngStream::from_seed(0)).expect("valid size")
}

pub fn engine_with(rows: &[&[u32]]) -> GridEngine<PlainPolicy, RngStream> {
    let mut engine = engine(rows.len());
    for (row, values) in rows.iter().enumerate() {
        engine.write_line(values, row, Direction::Left);
    }
    engine
}
