//! Dense pivot column: membership flags plus a max-heap of touched rows.

use std::collections::BinaryHeap;

use super::PivotColumn;
use crate::index::Index;

/// Dense working column.
///
/// `present[r]` records membership. Every present row sits in `history`
/// exactly once (`in_history` guards duplicates); rows toggled off may linger
/// there and are discarded lazily. The heap top is always present or the heap
/// is empty, so the maximum is a peek.
#[derive(Debug, Default, Clone)]
pub struct FullColumn {
    present: Vec<bool>,
    in_history: Vec<bool>,
    history: BinaryHeap<Index>,
}

impl FullColumn {
    fn toggle(&mut self, row: Index) {
        let now_present = !self.present[row];
        self.present[row] = now_present;
        if now_present {
            if !self.in_history[row] {
                self.in_history[row] = true;
                self.history.push(row);
            }
        } else {
            self.prune();
        }
    }

    fn prune(&mut self) {
        while let Some(&top) = self.history.peek() {
            if self.present[top] {
                break;
            }
            self.history.pop();
            self.in_history[top] = false;
        }
    }
}

impl PivotColumn for FullColumn {
    const NAME: &'static str = "full_pivot_column";

    fn init(&mut self, num_rows: usize) {
        self.present = vec![false; num_rows];
        self.in_history = vec![false; num_rows];
        self.history.clear();
    }

    fn add_col(&mut self, col: &[Index]) {
        for &row in col {
            self.toggle(row);
        }
    }

    fn max_index(&self) -> Option<Index> {
        self.history.peek().copied()
    }

    fn remove_max(&mut self) {
        if let Some(top) = self.history.pop() {
            self.present[top] = false;
            self.in_history[top] = false;
            self.prune();
        }
    }

    fn col(&self) -> Vec<Index> {
        let mut rows: Vec<Index> = self
            .history
            .iter()
            .copied()
            .filter(|&row| self.present[row])
            .collect();
        rows.sort_unstable();
        rows
    }

    fn clear(&mut self) {
        for row in self.history.drain() {
            self.present[row] = false;
            self.in_history[row] = false;
        }
    }
}
