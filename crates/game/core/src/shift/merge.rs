//! Line shifter: compacts one line toward index 0 and merges equal neighbours.

/// Merge rule used while shifting a line.
///
/// The default rule merges two equal non-zero tiles into their sum.
pub trait MergeRule {
    /// Returns true when `incoming` may merge into the resting tile `held`.
    fn can_merge(&self, held: u32, incoming: u32) -> bool {
        held != 0 && held == incoming
    }

    /// Value of the tile produced by merging `incoming` into `held`.
    fn combine(&self, held: u32, incoming: u32) -> u32 {
        held.saturating_add(incoming)
    }
}

/// Classic doubling rule: `v + v = 2v`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Doubling;

impl MergeRule for Doubling {}

/// One tile transition inside a single line, in line-local indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineMove {
    pub old_index: usize,
    pub new_index: usize,
    /// Value of the tile before it moved.
    pub value: u32,
    /// Value resting at `new_index` after the move. Differs from `value` only
    /// for merges.
    pub new_value: u32,
    pub merged: bool,
}

/// Result of shifting one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineShift {
    pub values: Vec<u32>,
    /// Transitions in the order source tiles were visited.
    pub moves: Vec<LineMove>,
}

impl LineShift {
    /// Returns true if at least one tile moved or merged.
    pub fn changed(&self) -> bool {
        !self.moves.is_empty()
    }
}

/// Compacts `line` toward index 0, merging each resting tile at most once.
///
/// Source tiles are visited from the leading edge. A tile merges into the
/// most recently placed tile when the rule allows it and that tile has not
/// already absorbed a merge during this call; otherwise it slides into the
/// next free slot. Tiles that stay put produce no [`LineMove`].
pub fn shift_line<R>(line: &[u32], rule: &R) -> LineShift
where
    R: MergeRule + ?Sized,
{
    let mut values = vec![0; line.len()];
    let mut merged = vec![false; line.len()];
    let mut moves = Vec::new();
    let mut cursor: Option<usize> = None;

    for (old_index, &value) in line.iter().enumerate() {
        if value == 0 {
            continue;
        }

        if let Some(target) = cursor {
            let held = values[target];
            if !merged[target] && rule.can_merge(held, value) {
                let new_value = rule.combine(held, value);
                values[target] = new_value;
                merged[target] = true;
                moves.push(LineMove {
                    old_index,
                    new_index: target,
                    value,
                    new_value,
                    merged: true,
                });
                continue;
            }
        }

        let new_index = cursor.map_or(0, |target| target + 1);
        values[new_index] = value;
        cursor = Some(new_index);
        if new_index != old_index {
            moves.push(LineMove {
                old_index,
                new_index,
                value,
                new_value: value,
                merged: false,
            });
        }
    }

    LineShift { values, moves }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(old_index: usize, new_index: usize, value: u32) -> LineMove {
        LineMove {
            old_index,
            new_index,
            value,
            new_value: value,
            merged: false,
        }
    }

    fn merge(old_index: usize, new_index: usize, value: u32) -> LineMove {
        LineMove {
            old_index,
            new_index,
            value,
            new_value: value * 2,
            merged: true,
        }
    }

    #[test]
    fn merges_leading_pair() {
        let shifted = shift_line(&[2, 2, 0, 0], &Doubling);
        assert_eq!(shifted.values, vec![4, 0, 0, 0]);
        assert_eq!(shifted.moves, vec![merge(1, 0, 2)]);
    }

    #[test]
    fn merged_tile_does_not_merge_again() {
        let shifted = shift_line(&[2, 0, 2, 2], &Doubling);
        assert_eq!(shifted.values, vec![4, 2, 0, 0]);
        assert_eq!(shifted.moves, vec![merge(2, 0, 2), slide(3, 1, 2)]);
    }

    #[test]
    fn run_of_three_merges_once() {
        let shifted = shift_line(&[2, 2, 2], &Doubling);
        assert_eq!(shifted.values, vec![4, 2, 0]);
        assert_eq!(shifted.moves.iter().filter(|m| m.merged).count(), 1);
    }

    #[test]
    fn no_cascade_into_fresh_merge() {
        // 4 must not absorb the 4 produced by merging the two 2s.
        let shifted = shift_line(&[2, 2, 4, 0], &Doubling);
        assert_eq!(shifted.values, vec![4, 4, 0, 0]);
    }

    #[test]
    fn two_pairs_merge_independently() {
        let shifted = shift_line(&[4, 4, 8, 8], &Doubling);
        assert_eq!(shifted.values, vec![8, 16, 0, 0]);
        assert_eq!(
            shifted.moves,
            vec![merge(1, 0, 4), slide(2, 1, 8), merge(3, 1, 8)]
        );
    }

    #[test]
    fn slides_across_gaps() {
        let shifted = shift_line(&[0, 0, 0, 8], &Doubling);
        assert_eq!(shifted.values, vec![8, 0, 0, 0]);
        assert_eq!(shifted.moves, vec![slide(3, 0, 8)]);
    }

    #[test]
    fn compacted_line_is_unchanged() {
        let shifted = shift_line(&[2, 4, 8, 0], &Doubling);
        assert_eq!(shifted.values, vec![2, 4, 8, 0]);
        assert!(!shifted.changed());
    }

    #[test]
    fn empty_line_is_unchanged() {
        let shifted = shift_line(&[0, 0, 0], &Doubling);
        assert_eq!(shifted.values, vec![0, 0, 0]);
        assert!(shifted.moves.is_empty());
    }

    #[test]
    fn custom_rule_is_honoured() {
        /// Threes-style: 1 and 2 combine into 3, equal multiples of 3 double.
        struct Threes;

        impl MergeRule for Threes {
            fn can_merge(&self, held: u32, incoming: u32) -> bool {
                matches!((held, incoming), (1, 2) | (2, 1)) || (held >= 3 && held == incoming)
            }
        }

        let shifted = shift_line(&[1, 2, 1, 1], &Threes);
        assert_eq!(shifted.values, vec![3, 1, 1, 0]);
        assert!(shifted.moves[0].merged);
        assert_eq!(shifted.moves[0].new_value, 3);
    }
}
