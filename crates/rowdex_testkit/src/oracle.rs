//! Naive reference implementations used as oracles.
//!
//! Every oracle is a linear scan with no index structure at all; the
//! property suites below compare index answers against these on random
//! inputs.

use rowdex_core::{RangeMatch, RowId};
use std::collections::HashSet;

/// Case-folds a token the way the prefix dictionary stores it: ASCII
/// letters lowercased, everything else dropped.
pub fn fold_token(token: &str) -> String {
    token
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Linear-scan range query over raw `(value, row)` pairs.
///
/// Groups rows by exact key (insertion order preserved within a key) and
/// returns qualifying keys ascending, mirroring the `RangeIndex`
/// contract.
pub fn naive_range_query(pairs: &[(f64, RowId)], min: f64, max: f64) -> Vec<RangeMatch> {
    let mut keys: Vec<f64> = Vec::new();
    for (value, _) in pairs {
        if !keys.iter().any(|k| k.total_cmp(value).is_eq()) {
            keys.push(*value);
        }
    }
    keys.sort_by(f64::total_cmp);

    keys.iter()
        .filter(|v| **v >= min && **v <= max)
        .map(|v| RangeMatch {
            value: *v,
            rows: pairs
                .iter()
                .filter(|(pv, _)| pv.total_cmp(v).is_eq())
                .map(|(_, r)| *r)
                .collect(),
        })
        .collect()
}

/// Linear-scan `(sum, min, max)`; `None` for an empty column.
pub fn naive_stats(values: &[f64]) -> Option<(f64, f64, f64)> {
    let first = *values.first()?;
    let mut sum = 0.0;
    let mut min = first;
    let mut max = first;
    for value in values {
        sum += value;
        min = min.min(*value);
        max = max.max(*value);
    }
    Some((sum, min, max))
}

/// First-occurrence positions of distinct rows, in table order.
pub fn naive_distinct_rows(rows: &[Vec<String>]) -> Vec<usize> {
    let mut seen = HashSet::new();
    let mut keep = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        if seen.insert(row.clone()) {
            keep.push(i);
        }
    }
    keep
}

/// Every distinct folded vocabulary word starting with the folded
/// prefix, ascending.
pub fn naive_suggestions(words: &[String], prefix: &str) -> Vec<String> {
    let folded_prefix = fold_token(prefix);
    let mut out: Vec<String> = words
        .iter()
        .map(|w| fold_token(w))
        .filter(|w| !w.is_empty() && w.starts_with(&folded_prefix))
        .collect();
    out.sort();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{dedup_over, range_index_over};
    use crate::generators::{column_strategy, noisy_token_strategy, table_strategy, vocabulary_strategy};
    use proptest::prelude::*;
    use rowdex_core::{AggregateIndex, PrefixIndex};

    #[test]
    fn fold_token_drops_noise() {
        assert_eq!(fold_token("Don't!"), "dont");
        assert_eq!(fold_token("1234"), "");
    }

    proptest! {
        #[test]
        fn range_query_matches_oracle(
            column in column_strategy(48),
            min in -1e6f64..1e6,
            max in -1e6f64..1e6,
        ) {
            let pairs: Vec<(f64, RowId)> = column
                .iter()
                .enumerate()
                .map(|(i, v)| (*v, RowId::new(i)))
                .collect();

            let index = range_index_over(&column);
            prop_assert_eq!(
                index.query_range(min, max),
                naive_range_query(&pairs, min, max)
            );
        }

        #[test]
        fn scan_is_strictly_ascending(column in column_strategy(48)) {
            let index = range_index_over(&column);
            let keys: Vec<f64> = index.scan_ordered().iter().map(|m| m.value).collect();
            for pair in keys.windows(2) {
                prop_assert!(pair[0].total_cmp(&pair[1]).is_lt());
            }
            prop_assert_eq!(keys.len(), index.key_count());
        }

        #[test]
        fn aggregate_matches_oracle(
            // Integer-valued cells keep both sums exact, so the
            // comparison needs no epsilon.
            cells in prop::collection::vec(-10_000i32..10_000, 1..64)
        ) {
            let column: Vec<f64> = cells.iter().map(|v| f64::from(*v)).collect();
            let index = AggregateIndex::build(&column);
            let stats = index.full_range_stats().unwrap();
            let (sum, min, max) = naive_stats(&column).unwrap();
            prop_assert_eq!(stats.sum, sum);
            prop_assert_eq!(stats.min, min);
            prop_assert_eq!(stats.max, max);
        }

        #[test]
        fn trie_round_trip(
            vocabulary in vocabulary_strategy(24),
            probe in noisy_token_strategy(),
        ) {
            let mut index = PrefixIndex::new();
            index.extend(&vocabulary);

            for word in &vocabulary {
                prop_assert!(index.contains(word));
            }

            let folded: HashSet<String> = vocabulary.iter().map(|w| fold_token(w)).collect();
            let probe_folded = fold_token(&probe);
            let expected = !probe_folded.is_empty() && folded.contains(&probe_folded);
            prop_assert_eq!(index.contains(&probe), expected);
        }

        #[test]
        fn suggestions_match_oracle(
            vocabulary in vocabulary_strategy(24),
            prefix in noisy_token_strategy(),
        ) {
            let mut index = PrefixIndex::new();
            index.extend(&vocabulary);

            let suggestions = index.suggest(&prefix);
            prop_assert_eq!(&suggestions, &naive_suggestions(&vocabulary, &prefix));

            let folded_prefix = fold_token(&prefix);
            for word in &suggestions {
                prop_assert!(word.starts_with(&folded_prefix));
            }
        }

        #[test]
        fn dedup_matches_oracle(rows in table_strategy(24)) {
            let mut index = dedup_over(&rows).unwrap();
            let kept: Vec<usize> = index
                .distinct_rows()
                .iter()
                .map(|r| r.as_usize())
                .collect();
            prop_assert_eq!(&kept, &naive_distinct_rows(&rows));

            // Deduplicating the already-deduplicated table is a no-op.
            let deduped: Vec<Vec<String>> = kept.iter().map(|i| rows[*i].clone()).collect();
            let mut second = dedup_over(&deduped).unwrap();
            prop_assert_eq!(second.distinct_rows().len(), deduped.len());
        }
    }
}
