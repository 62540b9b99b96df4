//! Tile policies implementing `merge_core::TilePolicy`.

mod classic;

pub use classic::{ClassicPolicy, PolicyConfig};
