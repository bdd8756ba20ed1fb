//! Catalog selection generators.

use rand::Rng;

/// Pick one entry from a non-empty pool, uniformly at random.
pub fn one_of<'a, R: Rng>(rng: &mut R, pool: &'a [String]) -> &'a str {
    &pool[rng.gen_range(0..pool.len())]
}

/// Sample a duplicate-free subset from a pool.
///
/// A target count is drawn uniformly in `min..=max`, then candidates are
/// drawn one at a time; a draw that duplicates an already-selected entry is
/// skipped rather than retried, so attempts are bounded by the target and a
/// pool smaller than the target simply yields fewer entries. For a non-empty
/// pool and `min >= 1` the result is never empty: the first draw always
/// lands.
pub fn unique_sample<R: Rng>(rng: &mut R, pool: &[String], min: usize, max: usize) -> Vec<String> {
    if pool.is_empty() || max == 0 {
        return Vec::new();
    }

    let target = rng.gen_range(min..=max);
    let mut selected: Vec<String> = Vec::with_capacity(target);

    for _ in 0..target {
        let candidate = &pool[rng.gen_range(0..pool.len())];
        if !selected.iter().any(|s| s == candidate) {
            selected.push(candidate.clone());
        }
    }

    selected
}
