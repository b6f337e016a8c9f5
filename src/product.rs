//! Cartesian products of [`ElementSet`]s.

use crate::prelude::*;

impl<E: Ord + Clone> ElementSet<E> {
    /// Cartesian product x × y, the set of pairs `(a, b)` with `a ∈ x` and `b ∈ y`.
    ///
    /// The second set may hold a different element type. Its cardinality is `|x| · |y|`.
    pub fn cartesian_product<F: Ord + Clone>(
        &self,
        other: &ElementSet<F>,
    ) -> ElementSet<Pair<E, F>> {
        self.iter()
            .flat_map(|a| other.iter().map(move |b| Pair::new(a.clone(), b.clone())))
            .collect()
    }

    /// Cartesian product of this set followed by every set in `others`, in order.
    ///
    /// Each tuple has `others.len() + 1` components, the i-th one drawn from the i-th operand.
    ///
    /// ## Errors
    ///
    /// [`SetError::EmptyOperandList`] if `others` is empty.
    pub fn cartesian_product_all(&self, others: &[Self]) -> Result<ElementSet<OrderedTuple<E>>> {
        if others.is_empty() {
            return Err(SetError::EmptyOperandList);
        }

        Self::product_of(std::iter::once(self).chain(others))
    }

    /// Cartesian product S₁ × ... × Sₙ of a list of sets, in list order.
    ///
    /// Starts from the set holding only the empty tuple, and for each operand replaces every
    /// tuple by all of its one-element extensions.
    ///
    /// ## Errors
    ///
    /// [`SetError::EmptyOperandList`] if there are no operands.
    pub fn product_of<'a, I: IntoIterator<Item = &'a Self>>(
        sets: I,
    ) -> Result<ElementSet<OrderedTuple<E>>>
    where
        E: 'a,
    {
        let mut iter = sets.into_iter().peekable();
        if iter.peek().is_none() {
            return Err(SetError::EmptyOperandList);
        }

        let mut product = ElementSet::singleton(OrderedTuple::empty());
        for (i, set) in iter.enumerate() {
            // Every extension is a new tuple.
            product = product
                .iter()
                .flat_map(|tuple| set.iter().map(move |el| tuple.extended(el.clone())))
                .collect();

            tracing::trace!(operand = i, tuples = product.cardinality(), "extended product");
        }

        Ok(product)
    }
}
