//! Whole-column aggregation tree implementation.

use crate::error::{CoreError, CoreResult};
use std::fmt;
use tracing::debug;

/// Sum, minimum, and maximum over a contiguous range of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    /// Exact arithmetic sum of the range.
    pub sum: f64,
    /// Smallest value in the range.
    pub min: f64,
    /// Largest value in the range.
    pub max: f64,
}

impl ColumnStats {
    fn leaf(value: f64) -> Self {
        Self {
            sum: value,
            min: value,
            max: value,
        }
    }

    fn merge(left: Self, right: Self) -> Self {
        Self {
            sum: left.sum + right.sum,
            min: left.min.min(right.min),
            max: left.max.max(right.max),
        }
    }
}

fn build_node(tree: &mut [ColumnStats], values: &[f64], node: usize, start: usize, end: usize) {
    if start == end {
        tree[node] = ColumnStats::leaf(values[start]);
        return;
    }
    let mid = (start + end) / 2;
    build_node(tree, values, 2 * node, start, mid);
    build_node(tree, values, 2 * node + 1, mid + 1, end);
    tree[node] = ColumnStats::merge(tree[2 * node], tree[2 * node + 1]);
}

/// Static aggregation tree over a fixed numeric column.
///
/// `AggregateIndex` is built once from the column's values in O(n) and
/// answers whole-range sum/min/max in O(1) from the root. It is immutable
/// after construction; if the column changes, build a new index.
///
/// Only the whole-range query is exposed. The underlying tree could
/// answer arbitrary sub-range aggregates, but that capability is
/// deliberately not part of the contract.
///
/// # Example
///
/// ```rust
/// use rowdex_core::AggregateIndex;
///
/// let index = AggregateIndex::build(&[3.0, -1.0, 4.0]);
/// let stats = index.full_range_stats().unwrap();
/// assert_eq!(stats.sum, 6.0);
/// assert_eq!(stats.min, -1.0);
/// assert_eq!(stats.max, 4.0);
/// ```
pub struct AggregateIndex {
    len: usize,
    /// 1-based complete binary tree; 4n slots tolerate non-power-of-two
    /// column lengths. Slots outside the built tree are never read.
    tree: Vec<ColumnStats>,
}

impl AggregateIndex {
    /// Builds the tree from a column of values.
    ///
    /// An empty column builds an explicitly empty index; querying it
    /// fails rather than reporting sentinel extrema.
    #[must_use]
    pub fn build(values: &[f64]) -> Self {
        let len = values.len();
        if len == 0 {
            return Self {
                len: 0,
                tree: Vec::new(),
            };
        }

        let mut tree = vec![ColumnStats::leaf(0.0); 4 * len];
        build_node(&mut tree, values, 1, 0, len - 1);
        debug!(rows = len, "aggregate index built");
        Self { len, tree }
    }

    /// Returns the sum, minimum, and maximum of the whole column in O(1).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyColumn`] when the index was built over
    /// zero values.
    pub fn full_range_stats(&self) -> CoreResult<ColumnStats> {
        if self.len == 0 {
            return Err(CoreError::EmptyColumn);
        }
        Ok(self.tree[1])
    }

    /// Returns the arithmetic mean of the column.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyColumn`] when the index is empty.
    pub fn mean(&self) -> CoreResult<f64> {
        let stats = self.full_range_stats()?;
        Ok(stats.sum / self.len as f64)
    }

    /// Returns the number of column values the index was built over.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the index was built over zero values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for AggregateIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AggregateIndex")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
