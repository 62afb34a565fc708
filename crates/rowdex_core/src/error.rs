//! Error types for the rowdex core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in rowdex core operations.
///
/// The taxonomy is narrow: everything here is an invalid construction or
/// use of an index. Lookup misses are not errors; they surface as empty
/// results from the query methods.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Whole-range statistics requested from an index built over zero values.
    #[error("aggregate index is empty: no statistics to report")]
    EmptyColumn,

    /// Duplicate detector constructed with no hash buckets.
    #[error("bucket count must be non-zero")]
    ZeroBuckets,

    /// Row identifier outside the row count the index was constructed for.
    #[error("row {row} out of range: index covers {row_count} rows")]
    RowOutOfRange {
        /// The offending row position.
        row: usize,
        /// Number of rows the index was constructed for.
        row_count: usize,
    },
}
