//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random columns, tokens, and tables
//! with enough repetition to exercise the duplicate-handling paths.

use proptest::prelude::*;
use rowdex_core::RowId;

/// Strategy for row identifiers below `row_count`.
pub fn row_id_strategy(row_count: usize) -> impl Strategy<Value = RowId> {
    (0..row_count).prop_map(RowId::new)
}

/// Strategy for finite column values in a range wide enough to produce
/// interesting tree shapes but narrow enough to collide occasionally.
pub fn value_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => -1e6f64..1e6,
        // Small integers collide often, covering the shared-node path.
        1 => (-20i32..20).prop_map(f64::from),
    ]
}

/// Strategy for a numeric column.
pub fn column_strategy(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(value_strategy(), 0..max_len)
}

/// Strategy for purely alphabetic tokens.
pub fn token_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z]{1,12}").expect("Invalid regex")
}

/// Strategy for tokens with punctuation and digits mixed in, exercising
/// the non-letter skip path.
pub fn noisy_token_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9,.'-]{1,16}").expect("Invalid regex")
}

/// Strategy for a vocabulary of tokens.
pub fn vocabulary_strategy(max_words: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(token_strategy(), 0..max_words)
}

/// Strategy for one row of cells drawn from a deliberately small
/// alphabet, so tables repeat rows with useful frequency.
pub fn row_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex("[ab]{1,2}").expect("Invalid regex"),
        1..4,
    )
}

/// Strategy for a table of rows.
pub fn table_strategy(max_rows: usize) -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(row_strategy(), 1..max_rows)
}
