//! Property tests for the line shifter and the grid engine.
//!
//! Invariants covered:
//! - No resting tile absorbs more than one merge per shift.
//! - Tile sums are conserved and tile counts never grow from a shift.
//! - A shift without merges leaves a line that cannot move again.
//! - Shift followed by undo restores the exact grid.

mod common;

use std::collections::HashSet;

use common::engine;
use merge_core::{Direction, Doubling, shift_line};
use proptest::prelude::*;

fn tile() -> impl Strategy<Value = u32> {
    prop::sample::select(vec![0u32, 0, 2, 4, 8, 16])
}

fn line() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(tile(), 1..8)
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn occupied(values: &[u32]) -> usize {
    values.iter().filter(|value| **value != 0).count()
}

proptest! {
    #[test]
    fn each_destination_merges_at_most_once(values in line()) {
        let shifted = shift_line(&values, &Doubling);
        let mut seen = HashSet::new();
        for movement in shifted.moves.iter().filter(|m| m.merged) {
            prop_assert!(seen.insert(movement.new_index));
        }
    }

    #[test]
    fn shifting_conserves_sum(values in line()) {
        let shifted = shift_line(&values, &Doubling);
        let merges = shifted.moves.iter().filter(|m| m.merged).count();

        prop_assert_eq!(values.iter().sum::<u32>(), shifted.values.iter().sum::<u32>());
        prop_assert_eq!(occupied(&shifted.values), occupied(&values) - merges);
        prop_assert_eq!(shifted.values.len(), values.len());
    }

    #[test]
    fn output_is_compacted(values in line()) {
        let shifted = shift_line(&values, &Doubling);
        let count = occupied(&shifted.values);
        prop_assert!(shifted.values[..count].iter().all(|value| *value != 0));
        prop_assert!(shifted.values[count..].iter().all(|value| *value == 0));
    }

    #[test]
    fn merge_free_result_is_stable(values in line()) {
        let shifted = shift_line(&values, &Doubling);
        prop_assume!(shifted.moves.iter().all(|m| !m.merged));

        let again = shift_line(&shifted.values, &Doubling);
        prop_assert!(again.moves.is_empty());
        prop_assert_eq!(again.values, shifted.values);
    }

    #[test]
    fn undo_restores_exact_grid(
        cells in prop::collection::vec(tile(), 16),
        direction in direction(),
    ) {
        let mut engine = engine(4);
        for (row, chunk) in cells.chunks(4).enumerate() {
            engine.write_line(chunk, row, Direction::Left);
        }
        let before = engine.grid().clone();

        engine.shift(direction);
        prop_assert!(engine.undo());
        prop_assert_eq!(engine.grid(), &before);
        prop_assert!(!engine.is_shift_pending());
    }

    #[test]
    fn records_match_grid_changes(
        cells in prop::collection::vec(tile(), 16),
        direction in direction(),
    ) {
        let mut engine = engine(4);
        for (row, chunk) in cells.chunks(4).enumerate() {
            engine.write_line(chunk, row, Direction::Left);
        }
        let before = engine.grid().clone();

        let records = engine.shift(direction);

        prop_assert_eq!(records.is_empty(), engine.grid() == &before);
        let before_sum: u32 = before.values().iter().sum();
        let after_sum: u32 = engine.grid().values().iter().sum();
        prop_assert_eq!(before_sum, after_sum);
        for record in &records {
            prop_assert_eq!(record.direction, direction);
            prop_assert_eq!(before[record.from_cell(4)], record.value);
        }
    }
}
