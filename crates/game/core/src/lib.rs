//! Deterministic rules for a sliding-tile merge puzzle.
//!
//! `merge-core` owns the n×n grid and enforces move legality, merging,
//! scoring, single-step undo and tile spawning with a one-move preview.
//! All state mutation flows through [`engine::GridEngine`]; rendering and
//! input handling belong to the host.
//!
//! Random choices (tile values, spawn positions, the starting board) and the
//! score table are delegated to an injected [`env::TilePolicy`].
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod shift;
pub mod state;

pub use config::GameConfig;
pub use engine::{EngineError, GridEngine, SpawnOutcome};
pub use env::{PcgRng, RandomSource, RngOracle, RngStream, TilePolicy, compute_seed};
pub use error::{ErrorSeverity, GameError};
pub use shift::{Direction, Doubling, LineMove, LineShift, MergeRule, MoveRecord, shift_line};
pub use state::{Cell, Grid, GridShapeError, TilePosition};
