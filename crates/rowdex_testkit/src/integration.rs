//! Cross-index integration helpers and end-to-end flows.
//!
//! These helpers replay the way the surrounding application consumes the
//! core: build an index fresh from the current table, query it, and drop
//! it.

use rowdex_core::{CoreResult, DedupIndex, RowId};

/// Materializes the deduplicated table: one row per equivalence class,
/// first occurrence wins, original order preserved.
///
/// # Errors
///
/// Fails for an empty table (zero rows means zero buckets).
pub fn deduplicated_table(rows: &[Vec<String>]) -> CoreResult<Vec<Vec<String>>> {
    let mut index = DedupIndex::for_rows(rows.len())?;
    for (i, cells) in rows.iter().enumerate() {
        index.record_row(&DedupIndex::row_key(cells), RowId::new(i))?;
    }
    Ok(index
        .distinct_rows()
        .into_iter()
        .map(|row| rows[row.as_usize()].clone())
        .collect())
}
