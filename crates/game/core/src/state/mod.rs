//! Authoritative board representation.
//!
//! This module owns the n×n grid of tile values and the small coordinate types
//! that describe it. Hosts read the grid freely but mutate it exclusively
//! through [`crate::engine::GridEngine`].
mod common;
mod grid;

pub use common::{Cell, TilePosition};
pub use grid::{Grid, GridShapeError};
