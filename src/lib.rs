mod error;
pub mod text;

pub use error::{Error, ParseError, Result};

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::debug;

/// A pizza order to fill: at most `capacity` slices, choosing each pizza type
/// in `items` (its slice count) at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub capacity: u64,
    pub items: Vec<u64>,
}

/// The pizza types to order, as indices into [`Problem::items`] in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Solution {
    pub count: usize,
    pub chosen: Vec<usize>,
}

impl Solution {
    pub fn new(mut chosen: Vec<usize>) -> Self {
        chosen.sort_unstable();
        Self {
            count: chosen.len(),
            chosen,
        }
    }
}

/// A slice count still tied to its position in the input.
#[derive(Debug, Clone, Copy)]
struct Item {
    index: usize,
    size: u64,
}

impl Problem {
    /// Greedily picks pizza types, largest first.
    ///
    /// A type is taken only while its size is strictly below the slices still
    /// wanted, so a pizza that would fill the order exactly is passed over.
    pub fn solve(&self) -> Solution {
        let mut remaining = self.capacity;
        let mut accepted = Vec::new();

        for item in by_size_descending(&self.items) {
            if item.size < remaining {
                remaining -= item.size;
                accepted.push(item.index);
            }
        }

        debug!(
            accepted = accepted.len(),
            rejected = self.items.len() - accepted.len(),
            remaining,
            "greedy walk finished"
        );

        Solution::new(accepted)
    }

    /// Total slices of the pizza types picked by `solution`.
    pub fn sum_of(&self, solution: &Solution) -> u64 {
        solution
            .chosen
            .iter()
            .filter_map(|&index| self.items.get(index))
            .sum()
    }
}

/// Pair every size with its index, then order largest first.
///
/// The sort is stable, so equal sizes keep ascending index order.
fn by_size_descending(sizes: &[u64]) -> Vec<Item> {
    let mut items: Vec<Item> = sizes
        .iter()
        .enumerate()
        .map(|(index, &size)| Item { index, size })
        .collect();
    items.sort_by_key(|item| Reverse(item.size));
    items
}
