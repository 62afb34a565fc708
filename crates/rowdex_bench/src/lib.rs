//! Shared input generation for rowdex benchmarks.
//!
//! All generators take an explicit seed so runs are reproducible.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A uniform random numeric column of length `n`.
pub fn uniform_column(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-1e6..1e6)).collect()
}

/// A table of `n` rows drawn from `distinct` underlying row shapes, so
/// roughly `n / distinct` copies of each appear.
pub fn duplicated_rows(n: usize, distinct: usize, seed: u64) -> Vec<Vec<String>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let shape = rng.gen_range(0..distinct);
            vec![
                format!("name{shape}"),
                format!("city{}", shape % 7),
                format!("{}.5", shape),
            ]
        })
        .collect()
}

/// A vocabulary of `n` pronounceable-ish lowercase words.
pub fn dictionary_words(n: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let len = rng.gen_range(3..12);
            (0..len)
                .map(|_| (b'a' + rng.gen_range(0..26u8)) as char)
                .collect()
        })
        .collect()
}
