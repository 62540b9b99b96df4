//! One-dimensional shift machinery.
//!
//! A full-board move is reduced to `n` independent line shifts: the
//! [`line`] extractor reads a row or column in the traversal order implied by
//! the [`Direction`], [`shift_line`] compacts and merges it toward index 0, and
//! the extractor's inverse writes the result back. Every tile transition is
//! reported as a [`MoveRecord`].
mod direction;
pub mod line;
mod merge;
mod record;

pub use direction::Direction;
pub use merge::{Doubling, LineMove, LineShift, MergeRule, shift_line};
pub use record::MoveRecord;
