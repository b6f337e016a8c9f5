//! Power sets of [`ElementSet`]s.

use crate::prelude::*;

impl<E: Ord + Clone> ElementSet<E> {
    /// Powerset P(x), the set of all subsets of x, including Ø and x itself.
    ///
    /// Built by doubling: starting from {Ø}, each element e of x adds the sets s ∪ {e} for every
    /// subset s found so far. The result has 2^|x| elements, so callers should keep |x| small.
    #[must_use]
    pub fn power_set(&self) -> ElementSet<Self> {
        let mut powerset = ElementSet::singleton(Self::new());

        for el in self {
            let batch: Vec<Self> = powerset
                .iter()
                .map(|subset| {
                    let mut subset = subset.clone();
                    subset.add(el.clone());
                    subset
                })
                .collect();
            powerset.add_all(batch);
        }

        tracing::debug!(
            cardinality = self.cardinality(),
            subsets = powerset.cardinality(),
            "built power set"
        );
        powerset
    }
}
