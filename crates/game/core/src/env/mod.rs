//! Traits describing the pluggable rules around the grid.
//!
//! The engine never decides on its own where tiles appear, which values they
//! carry, or how they score. Those choices come from an injected
//! [`TilePolicy`] fed by a deterministic [`RandomSource`], so alternate rule
//! sets can be swapped without touching the engine.
mod policy;
mod rng;

pub use policy::TilePolicy;
pub use rng::{PcgRng, RandomSource, RngOracle, RngStream, compute_seed};
