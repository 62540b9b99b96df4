//! Error and outcome types for the grid engine.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Cell, TilePosition};

/// Errors surfaced while constructing a [`super::GridEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    #[error("grid size {size} is outside the supported range")]
    InvalidSize { size: usize },

    #[error("policy produced a {actual}x{actual} grid, expected {expected}x{expected}")]
    InitialGridMismatch { expected: usize, actual: usize },
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            EngineError::InvalidSize { .. } => ErrorSeverity::Validation,
            EngineError::InitialGridMismatch { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            EngineError::InvalidSize { .. } => "ENGINE_INVALID_SIZE",
            EngineError::InitialGridMismatch { .. } => "ENGINE_INITIAL_GRID_MISMATCH",
        }
    }
}

/// Result of [`super::GridEngine::spawn`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpawnOutcome {
    /// A tile was written to the grid.
    Placed(TilePosition),
    /// No shift was pending; nothing changed.
    NoPendingShift,
    /// The policy chose a cell that is occupied or outside the grid. The
    /// pending shift is still consumed.
    Blocked(Cell),
}

impl SpawnOutcome {
    pub fn tile(&self) -> Option<TilePosition> {
        match self {
            SpawnOutcome::Placed(tile) => Some(*tile),
            _ => None,
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, SpawnOutcome::Placed(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnOutcome::Placed(_) => "placed",
            SpawnOutcome::NoPendingShift => "no_pending_shift",
            SpawnOutcome::Blocked(_) => "blocked",
        }
    }
}
