//! Exact [Bell numbers](https://en.wikipedia.org/wiki/Bell_number).
//!
//! The Bell number B(n) counts the partitions of an n-element set. Two independent algorithms are
//! provided, which must agree on every input:
//!
//! - [`BellNumbers::triangle`] builds the Bell triangle row by row. It needs no state and is the
//!   default for small inputs.
//! - [`BellNumbers::recursive`] evaluates `B(n) = Σ C(n - 1, k) B(k)` over `k < n`, memoizing
//!   every value in the engine's [`BellCache`].
//!
//! [`BellNumbers::bell`] picks between them according to the engine threshold.

use crate::prelude::*;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Inputs up to this value use the triangle algorithm by default.
pub const DEFAULT_THRESHOLD: usize = 100;

/// Binomial coefficient C(n, k), or zero when `k > n`.
///
/// Evaluates `C(n, k) = Π (n - i) / (i + 1)` over `i < k`, multiplying before dividing at each
/// step. After step `i` the partial product equals C(n, i + 1), so each division is exact.
pub fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::zero();
    }

    let k = k.min(n - k);
    let mut res = BigUint::one();
    for i in 0..k {
        res *= n - i;
        res /= i + 1;
    }
    res
}

/// Memoized Bell numbers B(n) for `n ≥ 1`.
///
/// Bell numbers are a pure function of `n`, so entries are only ever added.
#[derive(Clone, Debug, Default)]
pub struct BellCache(BTreeMap<usize, BigUint>);

impl BellCache {
    /// An empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// The cached value of B(n), if any.
    pub fn get(&self, n: usize) -> Option<&BigUint> {
        self.0.get(&n)
    }

    /// Number of cached values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// B(k), which must be either zero or cached.
    fn value(&self, k: usize) -> BigUint {
        if k == 0 {
            BigUint::one()
        } else {
            self.0[&k].clone()
        }
    }

    /// Fills in every missing value up to B(n), in increasing order, and returns B(n).
    fn fill(&mut self, n: usize) -> BigUint {
        if n == 0 {
            return BigUint::one();
        }
        if let Some(res) = self.get(n) {
            return res.clone();
        }

        let start = self.0.range(..n).next_back().map_or(1, |(&m, _)| m + 1);
        for m in start..=n {
            if self.0.contains_key(&m) {
                continue;
            }

            // C(m - 1, k) is updated in place, one multiplicative step per term.
            let mut coeff = BigUint::one();
            let mut sum = BigUint::zero();
            for k in 0..m {
                sum += &coeff * self.value(k);
                coeff *= m - 1 - k;
                coeff /= k + 1;
            }

            tracing::trace!(n = m, "cached Bell number");
            self.0.insert(m, sum);
        }

        self.value(n)
    }
}

/// Engine computing Bell numbers, owning the cache used by the recursive algorithm.
///
/// The cache lives behind a mutex, so an engine may be shared by reference between threads.
#[derive(Debug)]
pub struct BellNumbers {
    /// Largest input evaluated by [`Self::triangle`] in [`Self::bell`].
    threshold: usize,
    /// Memoized values for [`Self::recursive`].
    cache: Mutex<BellCache>,
}

impl Default for BellNumbers {
    fn default() -> Self {
        Self::new()
    }
}

impl BellNumbers {
    /// An engine with an empty cache and [`DEFAULT_THRESHOLD`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }

    /// An engine with an empty cache, switching algorithms past `threshold`.
    #[must_use]
    pub fn with_threshold(threshold: usize) -> Self {
        Self::with_cache(BellCache::new(), threshold)
    }

    /// An engine reusing a previously filled cache.
    #[must_use]
    pub fn with_cache(cache: BellCache, threshold: usize) -> Self {
        Self {
            threshold,
            cache: Mutex::new(cache),
        }
    }

    /// The threshold between the two algorithms.
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    /// Gives back the cache, e.g. to hand it to another engine.
    pub fn into_cache(self) -> BellCache {
        self.cache
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of values currently cached.
    pub fn cache_len(&self) -> usize {
        self.lock().len()
    }

    /// Locks the cache. Entries are only inserted once fully computed, so a poisoned cache is
    /// still consistent.
    fn lock(&self) -> MutexGuard<BellCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The Bell number B(n), through the triangle algorithm up to the threshold and the recursive
    /// one past it.
    pub fn bell(&self, n: usize) -> BigUint {
        if n <= self.threshold {
            tracing::debug!(n, "Bell number via triangle");
            Self::triangle(n)
        } else {
            tracing::debug!(n, threshold = self.threshold, "Bell number via recursion");
            self.recursive(n)
        }
    }

    /// The Bell number B(n), via the Bell triangle.
    ///
    /// Row 0 is `[1]`. Each following row starts with the last entry of the row above, and every
    /// other entry is the sum of its left neighbor and the entry above that neighbor. B(n) is the
    /// first entry of row n. Takes O(n²) additions, only keeping one row at a time.
    pub fn triangle(n: usize) -> BigUint {
        let mut row = vec![BigUint::one()];
        for i in 1..=n {
            let mut next = Vec::with_capacity(i + 1);
            next.push(row[i - 1].clone());
            for j in 1..=i {
                let entry = &row[j - 1] + &next[j - 1];
                next.push(entry);
            }
            row = next;
        }

        row.swap_remove(0)
    }

    /// The Bell number B(n), via `B(n) = Σ C(n - 1, k) B(k)` over `k < n`.
    ///
    /// Every value up to B(n) ends up in the cache.
    pub fn recursive(&self, n: usize) -> BigUint {
        self.lock().fill(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concat_idents::concat_idents;

    /// Runs a test body against both algorithms.
    macro_rules! test {
        ($($name: ident),*) => {
            $(
                concat_idents!(fn_name = triangle, $name {
                    #[test]
                    fn fn_name() {
                        $name(BellNumbers::triangle);
                    }
                });

                concat_idents!(fn_name = recursive, $name {
                    #[test]
                    fn fn_name() {
                        let engine = BellNumbers::new();
                        $name(|n| engine.recursive(n));
                    }
                });
            )*
        };
    }

    /// Values from OEIS A000110.
    const KNOWN: &[u64] = &[
        1, 1, 2, 5, 15, 52, 203, 877, 4140, 21147, 115_975, 678_570, 4_213_597, 27_644_437,
        190_899_322, 1_382_958_545,
    ];

    fn _known<F: Fn(usize) -> BigUint>(bell: F) {
        for (n, &expected) in KNOWN.iter().enumerate() {
            assert_eq!(bell(n), BigUint::from(expected), "B({n})");
        }
    }

    fn _large<F: Fn(usize) -> BigUint>(bell: F) {
        let expected: BigUint = "49631246523618756274".parse().unwrap();
        assert_eq!(bell(26), expected);
    }

    /// B(n + 1) = Σ C(n, k) B(k), checked against the other algorithm's values.
    fn _recurrence<F: Fn(usize) -> BigUint>(bell: F) {
        for n in 0..20 {
            let sum: BigUint = (0..=n).map(|k| binomial(n, k) * BellNumbers::triangle(k)).sum();
            assert_eq!(bell(n + 1), sum, "B({})", n + 1);
        }
    }

    test!(_known, _large, _recurrence);

    #[test]
    fn algorithms_agree() {
        let engine = BellNumbers::new();
        for n in 0..=30 {
            assert_eq!(BellNumbers::triangle(n), engine.recursive(n), "B({n})");
        }
        assert_eq!(BellNumbers::triangle(100), engine.recursive(100));
    }

    #[test]
    fn binomial_values() {
        assert_eq!(binomial(0, 0), BigUint::one());
        assert_eq!(binomial(5, 2), BigUint::from(10u32));
        assert_eq!(binomial(5, 3), BigUint::from(10u32));
        assert_eq!(binomial(52, 5), BigUint::from(2_598_960u32));
        assert_eq!(binomial(3, 4), BigUint::zero());

        // C(100, 50) overflows every primitive.
        let expected: BigUint = "100891344545564193334812497256".parse().unwrap();
        assert_eq!(binomial(100, 50), expected);
    }

    /// Rows of Pascal's triangle.
    #[test]
    fn binomial_pascal() {
        for n in 1..40 {
            for k in 1..n {
                assert_eq!(
                    binomial(n, k),
                    binomial(n - 1, k - 1) + binomial(n - 1, k),
                    "C({n}, {k})"
                );
            }
        }
    }

    #[test]
    fn threshold() {
        let engine = BellNumbers::with_threshold(3);
        assert_eq!(engine.threshold(), 3);

        assert_eq!(engine.bell(3), BigUint::from(5u32));
        assert_eq!(engine.cache_len(), 0);

        assert_eq!(engine.bell(10), BigUint::from(115_975u32));
        assert_eq!(engine.cache_len(), 10);
    }

    #[test]
    fn cache_reuse() {
        let engine = BellNumbers::new();
        engine.recursive(12);
        let cache = engine.into_cache();
        assert_eq!(cache.len(), 12);
        assert_eq!(cache.get(5), Some(&BigUint::from(52u32)));
        assert_eq!(cache.get(13), None);

        let engine = BellNumbers::with_cache(cache, 0);
        assert_eq!(engine.bell(15), BigUint::from(1_382_958_545u64));
        assert_eq!(engine.cache_len(), 15);
    }

    #[test]
    fn shared_between_threads() {
        let engine = BellNumbers::new();
        std::thread::scope(|scope| {
            for n in [20, 25, 30, 22] {
                let engine = &engine;
                scope.spawn(move || {
                    assert_eq!(engine.recursive(n), BellNumbers::triangle(n));
                });
            }
        });
        assert_eq!(engine.cache_len(), 30);
    }
}
