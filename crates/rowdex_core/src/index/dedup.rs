//! Duplicate-row detection implementation.

use crate::error::{CoreError, CoreResult};
use crate::types::RowId;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Separator between cells in a serialized row key. The unit separator
/// keeps `["ab", "c"]` and `["a", "bc"]` distinct for any realistic cell
/// content.
const CELL_SEPARATOR: char = '\u{1F}';

struct HashEntry {
    key: String,
    /// First row seen with this key.
    row: RowId,
}

/// Fixed-capacity chained hash table from row keys to first occurrences.
///
/// The bucket count is chosen once at construction; there is no resizing.
struct RowKeyTable {
    buckets: Vec<Vec<HashEntry>>,
}

impl RowKeyTable {
    fn new(bucket_count: usize) -> Self {
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Vec::new);
        Self { buckets }
    }

    /// Polynomial rolling hash reduced modulo the bucket count. A
    /// correctness-only hash: keys are dataset-internal, not
    /// attacker-controlled.
    fn slot(&self, key: &str) -> usize {
        let modulus = self.buckets.len() as u64;
        let mut h: u64 = 0;
        for byte in key.bytes() {
            h = (h.wrapping_mul(31).wrapping_add(u64::from(byte))) % modulus;
        }
        h as usize
    }

    fn first_occurrence(&self, key: &str) -> Option<RowId> {
        self.buckets[self.slot(key)]
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.row)
    }

    fn remember(&mut self, key: String, row: RowId) {
        let slot = self.slot(&key);
        self.buckets[slot].push(HashEntry { key, row });
    }
}

/// Flat-array disjoint set over row positions.
///
/// Find compresses paths; union is by size, so find chains stay
/// logarithmic regardless of union order. Representatives are stable
/// only between unions.
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] == i {
            return i;
        }
        let root = self.find(self.parent[i]);
        self.parent[i] = root;
        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return;
        }
        let (big, small) = if self.size[root_a] >= self.size[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
    }
}

/// Duplicate-row detector combining a chained hash table with
/// equivalence classes.
///
/// Rows are recorded in dataset order under their serialized content
/// key. The first row seen with a given key anchors it; every later row
/// with the identical key is unioned into that row's equivalence class.
/// After recording, the caller materializes a deduplicated dataset by
/// keeping [`distinct_rows`](Self::distinct_rows).
///
/// Query methods take `&mut self` because find compresses paths.
///
/// # Example
///
/// ```rust
/// use rowdex_core::{DedupIndex, RowId};
///
/// let rows = [vec!["a", "b"], vec!["c", "d"], vec!["a", "b"]];
/// let mut index = DedupIndex::for_rows(rows.len()).unwrap();
/// for (i, cells) in rows.iter().enumerate() {
///     index.record_row(&DedupIndex::row_key(cells), RowId::new(i)).unwrap();
/// }
///
/// assert!(index.same_class(RowId::new(0), RowId::new(2)));
/// assert_eq!(index.distinct_rows(), vec![RowId::new(0), RowId::new(1)]);
/// ```
pub struct DedupIndex {
    table: RowKeyTable,
    classes: DisjointSet,
    /// Rows in record order (the caller's dataset order).
    recorded: Vec<RowId>,
}

impl DedupIndex {
    /// Creates a detector for `row_count` rows over `bucket_count` hash
    /// buckets.
    ///
    /// The bucket count is fixed for the lifetime of the index; size it
    /// for the expected row count (see [`for_rows`](Self::for_rows)).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ZeroBuckets`] when `bucket_count` is zero,
    /// which would make every hash reduction undefined.
    pub fn new(row_count: usize, bucket_count: usize) -> CoreResult<Self> {
        if bucket_count == 0 {
            return Err(CoreError::ZeroBuckets);
        }
        Ok(Self {
            table: RowKeyTable::new(bucket_count),
            classes: DisjointSet::new(row_count),
            recorded: Vec::new(),
        })
    }

    /// Creates a detector with the conventional sizing of two buckets
    /// per expected row.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ZeroBuckets`] for a zero-row dataset.
    pub fn for_rows(row_count: usize) -> CoreResult<Self> {
        Self::new(row_count, row_count * 2)
    }

    /// Serializes a row's cells into its content key.
    #[must_use]
    pub fn row_key<S: AsRef<str>>(cells: &[S]) -> String {
        let mut key = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                key.push(CELL_SEPARATOR);
            }
            key.push_str(cell.as_ref());
        }
        key
    }

    /// Records a row under its content key.
    ///
    /// If an earlier row was recorded with the identical key, the two
    /// rows are unioned into one equivalence class; otherwise this row
    /// becomes the key's first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RowOutOfRange`] when `row` is at or beyond
    /// the row count the index was constructed for.
    pub fn record_row(&mut self, key: &str, row: RowId) -> CoreResult<()> {
        if row.as_usize() >= self.row_count() {
            return Err(CoreError::RowOutOfRange {
                row: row.as_usize(),
                row_count: self.row_count(),
            });
        }

        match self.table.first_occurrence(key) {
            Some(first) => self.classes.union(first.as_usize(), row.as_usize()),
            None => self.table.remember(key.to_owned(), row),
        }
        self.recorded.push(row);
        Ok(())
    }

    /// Returns the canonical member of the row's duplicate-equivalence
    /// class.
    ///
    /// The row must be within the row count the index was constructed
    /// for.
    pub fn representative(&mut self, row: RowId) -> RowId {
        RowId::new(self.classes.find(row.as_usize()))
    }

    /// Returns true iff the two rows are duplicates of one another.
    pub fn same_class(&mut self, a: RowId, b: RowId) -> bool {
        self.classes.find(a.as_usize()) == self.classes.find(b.as_usize())
    }

    /// Returns one row per equivalence class: the first recorded row
    /// whose class has not been seen yet, in record order.
    pub fn distinct_rows(&mut self) -> Vec<RowId> {
        let mut seen = HashSet::new();
        let mut keep = Vec::new();
        for i in 0..self.recorded.len() {
            let row = self.recorded[i];
            let class = self.classes.find(row.as_usize());
            if seen.insert(class) {
                keep.push(row);
            }
        }
        debug!(
            recorded = self.recorded.len(),
            distinct = keep.len(),
            "deduplicated rows"
        );
        keep
    }

    /// Returns the number of distinct equivalence classes among recorded
    /// rows.
    pub fn class_count(&mut self) -> usize {
        let mut classes = HashSet::new();
        for i in 0..self.recorded.len() {
            let row = self.recorded[i];
            classes.insert(self.classes.find(row.as_usize()));
        }
        classes.len()
    }

    /// Returns the number of recorded rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recorded.len()
    }

    /// Returns true if no rows have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recorded.is_empty()
    }

    /// Returns the row count the index was constructed for.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.classes.parent.len()
    }

    /// Returns the fixed bucket count.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.table.buckets.len()
    }
}

impl fmt::Debug for DedupIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DedupIndex")
            .field("recorded", &self.recorded.len())
            .field("row_count", &self.row_count())
            .field("buckets", &self.bucket_count())
            .finish_non_exhaustive()
    }
}
