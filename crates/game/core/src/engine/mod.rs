//! Move lifecycle state machine.
//!
//! The [`GridEngine`] is the only owner of the board. A move is a `shift`,
//! optionally followed by `undo`, and committed by `spawn`. The pending shift
//! and its undo snapshot live together in one tagged state, so an illegal call
//! sequence is a visible match arm rather than a stale flag.

mod errors;

pub use errors::{EngineError, SpawnOutcome};

use std::mem;

use crate::config::GameConfig;
use crate::env::{RandomSource, RngStream, TilePolicy};
use crate::shift::{Direction, MoveRecord, line, shift_line};
use crate::state::{Cell, Grid, TilePosition};

/// Where the engine stands within the current move.
#[derive(Clone, Debug, PartialEq, Eq)]
enum MoveState {
    Idle,
    /// A shift was applied and neither undone nor committed by a spawn.
    ShiftPending {
        snapshot: Grid,
        direction: Direction,
    },
}

/// Game engine owning the grid, the pending move, and the injected policy.
///
/// Single-threaded and synchronous; hosts that share an engine across threads
/// must serialize calls themselves.
pub struct GridEngine<P, S = RngStream> {
    grid: Grid,
    state: MoveState,
    last_direction: Option<Direction>,
    next_value: u32,
    policy: P,
    rng: S,
}

impl<P: TilePolicy> GridEngine<P, RngStream> {
    /// Builds an engine from configuration, seeding the default RNG stream
    /// with `config.seed`.
    ///
    /// # Errors
    ///
    /// See [`GridEngine::new`].
    pub fn from_config(config: &GameConfig, policy: P) -> Result<Self, EngineError> {
        config.validate()?;
        Self::new(config.size, policy, RngStream::from_seed(config.seed))
    }
}

impl<P, S> GridEngine<P, S>
where
    P: TilePolicy,
    S: RandomSource,
{
    /// Creates an engine with a `size`×`size` board produced by the policy.
    ///
    /// The first preview value is drawn immediately.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidSize` for a size outside
    /// `GameConfig::MIN_SIZE..=GameConfig::MAX_SIZE`, and
    /// `EngineError::InitialGridMismatch` if the policy's initial grid has a
    /// different size.
    pub fn new(size: usize, policy: P, mut rng: S) -> Result<Self, EngineError> {
        GameConfig::validate_size(size)?;

        let grid = policy.initial_grid(size, &mut rng);
        if grid.size() != size {
            return Err(EngineError::InitialGridMismatch {
                expected: size,
                actual: grid.size(),
            });
        }
        let next_value = policy.next_tile_value(&mut rng);
        debug_assert_ne!(next_value, 0, "tile policy produced a zero value");

        tracing::debug!(size, next_value, "grid engine created");

        Ok(Self {
            grid,
            state: MoveState::Idle,
            last_direction: None,
            next_value,
            policy,
            rng,
        })
    }

    /// Shifts every line toward `direction` and returns the tile transitions.
    ///
    /// Records are ordered by line, then by the order tiles were visited in
    /// that line. An empty list means nothing moved. The pre-shift grid is
    /// kept for [`Self::undo`], replacing any earlier snapshot, and the shift
    /// is pending afterwards even if nothing moved.
    pub fn shift(&mut self, direction: Direction) -> Vec<MoveRecord> {
        let snapshot = self.grid.clone();
        let size = self.grid.size();
        let mut records = Vec::new();

        for index in 0..size {
            let values = line::extract(&self.grid, index, direction);
            let shifted = shift_line(&values, &self.policy);
            if shifted.changed() {
                tracing::trace!(line = index, moves = shifted.moves.len(), "line shifted");
                line::write_back(&mut self.grid, index, direction, &shifted.values);
            }
            records.extend(
                shifted
                    .moves
                    .into_iter()
                    .map(|movement| MoveRecord::new(index, direction, movement)),
            );
        }

        self.state = MoveState::ShiftPending {
            snapshot,
            direction,
        };
        self.last_direction = Some(direction);

        tracing::debug!(%direction, records = records.len(), "grid shifted");
        records
    }

    /// Reverts the pending shift.
    ///
    /// Returns `false` without touching the grid when no shift is pending,
    /// including after a previous undo or a spawn.
    #[must_use = "undo reports whether a shift was reverted"]
    pub fn undo(&mut self) -> bool {
        match mem::replace(&mut self.state, MoveState::Idle) {
            MoveState::ShiftPending { snapshot, direction } => {
                self.grid = snapshot;
                tracing::debug!(%direction, "shift undone");
                true
            }
            MoveState::Idle => {
                tracing::debug!("undo ignored: no pending shift");
                false
            }
        }
    }

    /// Commits the pending shift by placing the previewed tile.
    ///
    /// The policy picks the cell. If it is occupied the grid is left alone but
    /// the pending shift is still consumed. The preview value is redrawn only
    /// after a successful placement.
    pub fn spawn(&mut self) -> SpawnOutcome {
        let direction = match mem::replace(&mut self.state, MoveState::Idle) {
            MoveState::ShiftPending { direction, .. } => direction,
            MoveState::Idle => {
                tracing::debug!("spawn ignored: no pending shift");
                return SpawnOutcome::NoPendingShift;
            }
        };

        let cell = self
            .policy
            .next_tile_position(&self.grid, &mut self.rng, direction);
        match self.grid.get(cell) {
            Some(0) => {}
            Some(value) => {
                tracing::debug!(%cell, value, "spawn blocked by occupied cell");
                return SpawnOutcome::Blocked(cell);
            }
            None => {
                tracing::warn!(
                    %cell,
                    size = self.grid.size(),
                    "policy chose a cell outside the grid"
                );
                return SpawnOutcome::Blocked(cell);
            }
        }

        let tile = TilePosition::new(cell, self.next_value);
        self.grid[cell] = tile.value;
        self.next_value = self.policy.next_tile_value(&mut self.rng);
        debug_assert_ne!(self.next_value, 0, "tile policy produced a zero value");

        tracing::debug!(
            %cell,
            value = tile.value,
            next_value = self.next_value,
            "tile spawned"
        );
        SpawnOutcome::Placed(tile)
    }

    /// Sum of the policy's per-cell score over all occupied cells.
    pub fn score(&self) -> u64 {
        self.grid
            .occupied()
            .map(|(_, value)| self.policy.score_for_value(value))
            .sum()
    }

    /// Value the next successful spawn will place.
    #[inline]
    pub fn preview_next_value(&self) -> u32 {
        self.next_value
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// # Panics
    ///
    /// Panics if the cell lies outside the grid.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> u32 {
        self.grid[Cell::new(row, col)]
    }

    /// Overwrites a cell directly. Intended for tests and scenario setup; it
    /// bypasses the move lifecycle.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the grid.
    pub fn set_cell(&mut self, row: usize, col: usize, value: u32) {
        self.grid[Cell::new(row, col)] = value;
    }

    /// Reads one row or column in the traversal order of `direction`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the grid size.
    pub fn line(&self, index: usize, direction: Direction) -> Vec<u32> {
        line::extract(&self.grid, index, direction)
    }

    /// Writes one row or column using the traversal order of `direction`.
    /// Intended for tests; it bypasses the move lifecycle.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the grid size or `values` has the wrong
    /// length.
    pub fn write_line(&mut self, values: &[u32], index: usize, direction: Direction) {
        line::write_back(&mut self.grid, index, direction, values);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Returns true between a shift and the next undo or spawn.
    pub fn is_shift_pending(&self) -> bool {
        matches!(self.state, MoveState::ShiftPending { .. })
    }

    /// Direction of the most recent shift, if any shift has happened.
    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }
}
