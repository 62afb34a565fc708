//! Canned datasets and index-building helpers.

use rowdex_core::{CoreResult, DedupIndex, PrefixIndex, RangeIndex, RowId};
use tracing_subscriber::EnvFilter;

/// Initializes a test tracing subscriber honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs the
/// subscriber.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Column headers for [`sample_rows`].
pub fn sample_headers() -> Vec<String> {
    ["name", "city", "price"]
        .iter()
        .map(|h| (*h).to_string())
        .collect()
}

/// A small table with duplicate rows (rows 0/3 and 2/5 are identical).
pub fn sample_rows() -> Vec<Vec<String>> {
    let raw = [
        ["widget", "lisbon", "19.5"],
        ["gadget", "oslo", "7.25"],
        ["sprocket", "turin", "42.0"],
        ["widget", "lisbon", "19.5"],
        ["flange", "oslo", "3.75"],
        ["sprocket", "turin", "42.0"],
    ];
    raw.iter()
        .map(|cells| cells.iter().map(|c| (*c).to_string()).collect())
        .collect()
}

/// The price column of [`sample_rows`], already coerced to doubles.
pub fn sample_prices() -> Vec<f64> {
    vec![19.5, 7.25, 42.0, 19.5, 3.75, 42.0]
}

/// A small vocabulary with a shared `gov` prefix cluster.
pub fn sample_dictionary() -> Vec<&'static str> {
    vec![
        "govern",
        "government",
        "governor",
        "gopher",
        "rust",
        "ruby",
        "rose",
    ]
}

/// A [`PrefixIndex`] loaded with [`sample_dictionary`].
pub fn loaded_dictionary() -> PrefixIndex {
    let mut index = PrefixIndex::new();
    index.extend(sample_dictionary());
    index
}

/// Builds a [`RangeIndex`] where row `i` holds `values[i]`.
pub fn range_index_over(values: &[f64]) -> RangeIndex {
    let mut index = RangeIndex::new();
    for (i, value) in values.iter().enumerate() {
        index.insert(*value, RowId::new(i));
    }
    index
}

/// Builds a [`DedupIndex`] with every row of `rows` recorded in order.
///
/// # Errors
///
/// Fails for an empty table (zero rows means zero buckets).
pub fn dedup_over(rows: &[Vec<String>]) -> CoreResult<DedupIndex> {
    let mut index = DedupIndex::for_rows(rows.len())?;
    for (i, cells) in rows.iter().enumerate() {
        index.record_row(&DedupIndex::row_key(cells), RowId::new(i))?;
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_table_is_consistent() {
        let rows = sample_rows();
        let headers = sample_headers();
        assert!(rows.iter().all(|r| r.len() == headers.len()));
        assert_eq!(sample_prices().len(), rows.len());
    }

    #[test]
    fn sample_table_has_known_duplicates() {
        let rows = sample_rows();
        assert_eq!(rows[0], rows[3]);
        assert_eq!(rows[2], rows[5]);
        assert_ne!(rows[0], rows[1]);
    }

    #[test]
    fn dictionary_loads() {
        let index = loaded_dictionary();
        assert_eq!(index.len(), sample_dictionary().len());
    }
}
