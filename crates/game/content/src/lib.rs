//! Concrete rule sets and configuration loaders.
//!
//! This crate supplies the tile policies consumed by `merge-core` and loads
//! game configuration from TOML data files:
//! - Classic 2048 policy (spawn values, spawn placement, scoring)
//! - Game and policy configuration (data-driven via TOML)
//!
//! Content is consumed by the engine through the `TilePolicy` trait and never
//! appears in grid state.

pub mod policies;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use policies::{ClassicPolicy, PolicyConfig};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentConfig, ContentFactory, LoadResult};
