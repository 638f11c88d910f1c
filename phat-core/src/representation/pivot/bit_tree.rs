//! 64-ary bit tree pivot column.
//!
//! Leaves hold one bit per row. Each bit of an inner block records whether the
//! corresponding child block is non-zero, so the maximum is found by following
//! the highest set bit from the root down, and a toggle only climbs while a
//! block changes between zero and non-zero.

use super::PivotColumn;
use crate::index::Index;

const BLOCK_BITS: usize = 64;

/// Working column backed by a 64-ary bit tree.
#[derive(Debug, Default, Clone)]
pub struct BitTreeColumn {
    /// Levels ordered root first; the last level holds the row bits.
    levels: Vec<Vec<u64>>,
}

impl BitTreeColumn {
    fn toggle(&mut self, row: Index) {
        let mut position = row;
        for level in self.levels.iter_mut().rev() {
            let block = position / BLOCK_BITS;
            let bit = position % BLOCK_BITS;
            let word = &mut level[block];
            let was_zero = *word == 0;
            *word ^= 1_u64 << bit;
            if was_zero == (*word == 0) {
                return;
            }
            position = block;
        }
    }
}

impl PivotColumn for BitTreeColumn {
    const NAME: &'static str = "bit_tree_pivot_column";

    fn init(&mut self, num_rows: usize) {
        let mut sizes = vec![num_rows.div_ceil(BLOCK_BITS).max(1)];
        while let Some(&last) = sizes.last() {
            if last == 1 {
                break;
            }
            sizes.push(last.div_ceil(BLOCK_BITS));
        }
        self.levels = sizes.into_iter().rev().map(|size| vec![0; size]).collect();
    }

    fn add_col(&mut self, col: &[Index]) {
        for &row in col {
            self.toggle(row);
        }
    }

    fn max_index(&self) -> Option<Index> {
        let mut position = 0;
        for level in &self.levels {
            let word = level[position];
            if word == 0 {
                return None;
            }
            let bit = BLOCK_BITS - 1 - word.leading_zeros() as usize;
            position = position * BLOCK_BITS + bit;
        }
        (!self.levels.is_empty()).then_some(position)
    }

    fn remove_max(&mut self) {
        if let Some(row) = self.max_index() {
            self.toggle(row);
        }
    }

    fn col(&self) -> Vec<Index> {
        let Some(leaves) = self.levels.last() else {
            return Vec::new();
        };
        let mut rows = Vec::new();
        for (block, &word) in leaves.iter().enumerate() {
            let mut remaining = word;
            while remaining != 0 {
                let bit = remaining.trailing_zeros() as usize;
                rows.push(block * BLOCK_BITS + bit);
                remaining &= remaining - 1;
            }
        }
        rows
    }

    fn clear(&mut self) {
        while let Some(row) = self.max_index() {
            self.toggle(row);
        }
    }
}
