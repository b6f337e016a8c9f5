//! Set algebra on [`ElementSet`]: relations between sets, and the boolean operations.
//!
//! None of these methods mutate their operands. Operations return newly allocated sets holding
//! clones of the relevant elements.

use crate::prelude::*;

// -------------------- Relations -------------------- //

impl<E: Ord> ElementSet<E> {
    /// Subset relation ⊆.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.cardinality() <= other.cardinality() && other.contains_all(self)
    }

    /// Strict subset relation ⊂.
    pub fn is_proper_subset_of(&self, other: &Self) -> bool {
        self.cardinality() < other.cardinality() && self.is_subset_of(other)
    }

    /// Whether both sets have the same cardinality.
    ///
    /// This is weaker than equality: `{1, 2}` is equivalent to `{3, 4}`.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.cardinality() == other.cardinality()
    }

    /// Whether the sets share at least one element.
    pub fn is_overlapping_with(&self, other: &Self) -> bool {
        let (small, large) = Self::by_cardinality(self, other);
        small.iter().any(|el| large.contains(el))
    }

    /// Whether the sets share no element.
    pub fn is_disjoint_with(&self, other: &Self) -> bool {
        !self.is_overlapping_with(other)
    }

    /// Orders two sets as `(smaller, larger)` by cardinality.
    fn by_cardinality<'a>(fst: &'a Self, snd: &'a Self) -> (&'a Self, &'a Self) {
        if fst.cardinality() <= snd.cardinality() {
            (fst, snd)
        } else {
            (snd, fst)
        }
    }
}

// -------------------- Operations -------------------- //

impl<E: Ord + Clone> ElementSet<E> {
    /// Union x ∪ y.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.iter().chain(other).cloned().collect()
    }

    /// Union of this set with every set in `others`.
    ///
    /// ## Errors
    ///
    /// [`SetError::EmptyOperandList`] if `others` is empty.
    pub fn union_all(&self, others: &[Self]) -> Result<Self> {
        if others.is_empty() {
            return Err(SetError::EmptyOperandList);
        }

        let mut union = self.clone();
        for set in others {
            union.add_all(set.iter().cloned());
        }
        Ok(union)
    }

    /// Union over an iterator of sets. The union over no sets is empty.
    pub fn union_of<'a, I: IntoIterator<Item = &'a Self>>(iter: I) -> Self
    where
        E: 'a,
    {
        iter.into_iter().flatten().cloned().collect()
    }

    /// Intersection x ∩ y.
    ///
    /// Iterates over the smaller set and looks up its elements in the larger one.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (small, large) = Self::by_cardinality(self, other);
        small.iter().filter(|el| large.contains(el)).cloned().collect()
    }

    /// Intersection of this set with every set in `others`, folded left to right.
    ///
    /// Stops as soon as an intermediate result is empty.
    ///
    /// ## Errors
    ///
    /// [`SetError::EmptyOperandList`] if `others` is empty.
    pub fn intersection_all(&self, others: &[Self]) -> Result<Self> {
        self.intersection_iter(others)
    }

    /// Intersection of this set with every set from an iterator, folded left to right.
    ///
    /// Once an intermediate result is empty, no further operand is taken from the iterator.
    ///
    /// ## Errors
    ///
    /// [`SetError::EmptyOperandList`] if the iterator yields no sets.
    pub fn intersection_iter<'a, I>(&self, others: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Self>,
        E: 'a,
    {
        let mut iter = others.into_iter();
        let fst = iter.next().ok_or(SetError::EmptyOperandList)?;

        let mut inter = self.intersection(fst);
        while !inter.is_empty() {
            let Some(set) = iter.next() else {
                break;
            };
            inter = inter.intersection(set);
        }
        Ok(inter)
    }

    /// Difference x - y, the elements of x not in y.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.iter().filter(|el| !other.contains(el)).cloned().collect()
    }

    /// Symmetric difference x Δ y = (x - y) ∪ (y - x).
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.difference(other).union(&other.difference(self))
    }

    /// Complement of this set within `universe`, that is `universe - self`.
    #[must_use]
    pub fn complement(&self, universe: &Self) -> Self {
        universe.difference(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn set<const N: usize>(els: [u32; N]) -> ElementSet<u32> {
        els.into()
    }

    #[test]
    fn subset() {
        assert!(set([1, 2]).is_subset_of(&set([1, 2, 3])));
        assert!(set([1, 2]).is_subset_of(&set([1, 2])));
        assert!(set([]).is_subset_of(&set([])));
        assert!(!set([1, 4]).is_subset_of(&set([1, 2, 3])));
    }

    #[test]
    fn proper_subset() {
        assert!(set([1, 2]).is_proper_subset_of(&set([1, 2, 3])));
        assert!(!set([1, 2]).is_proper_subset_of(&set([1, 2])));
        assert!(set([]).is_proper_subset_of(&set([7])));
    }

    #[test]
    fn equivalent() {
        assert!(set([1, 2]).is_equivalent_to(&set([3, 4])));
        assert!(!set([1, 2]).is_equivalent_to(&set([1, 2, 3])));
    }

    #[test]
    fn overlap() {
        assert!(set([1, 2, 3]).is_overlapping_with(&set([3, 4])));
        assert!(!set([1, 2]).is_overlapping_with(&set([3, 4])));
        assert!(set([1, 2]).is_disjoint_with(&set([3, 4])));
        assert!(set([]).is_disjoint_with(&set([])));
    }

    #[test]
    fn union() {
        assert_eq!(set([1, 2, 3]).union(&set([3, 4])), set([1, 2, 3, 4]));
    }

    #[test]
    fn union_all() {
        let union = set([1]).union_all(&[set([2]), set([2, 3]), set([])]);
        assert_eq!(union, Ok(set([1, 2, 3])));
        assert_eq!(set([1]).union_all(&[]), Err(SetError::EmptyOperandList));
    }

    #[test]
    fn union_of() {
        let sets = [set([1, 2]), set([5])];
        assert_eq!(ElementSet::union_of(&sets), set([1, 2, 5]));
        assert_eq!(ElementSet::<u32>::union_of([]), set([]));
    }

    #[test]
    fn intersection() {
        assert_eq!(set([1, 2, 3]).intersection(&set([2, 3, 4])), set([2, 3]));
        assert_eq!(set([1, 2, 3]).intersection(&set([])), set([]));
    }

    #[test]
    fn intersection_all() {
        let inter = set([1, 2, 3, 4]).intersection_all(&[set([2, 3, 4]), set([3, 4, 5])]);
        assert_eq!(inter, Ok(set([3, 4])));

        let inter = set([1, 2]).intersection_all(&[set([3]), set([1, 2])]);
        assert_eq!(inter, Ok(set([])));

        assert_eq!(
            set([1]).intersection_all(&[]),
            Err(SetError::EmptyOperandList)
        );
    }

    #[test]
    fn intersection_iter_stops_when_empty() {
        let others = [set([3]), set([1, 2]), set([1])];
        let taken = Cell::new(0);
        let counted = others.iter().inspect(|_| taken.set(taken.get() + 1));
        let inter = set([1, 2]).intersection_iter(counted);
        assert_eq!(inter, Ok(set([])));
        assert_eq!(taken.get(), 1);

        let taken = Cell::new(0);
        let counted = others[1..].iter().inspect(|_| taken.set(taken.get() + 1));
        let inter = set([1, 2]).intersection_iter(counted);
        assert_eq!(inter, Ok(set([1])));
        assert_eq!(taken.get(), 2);

        assert_eq!(
            set([1]).intersection_iter([]),
            Err(SetError::EmptyOperandList)
        );
    }

    #[test]
    fn difference() {
        let a = set([1, 2, 3]);
        let b = set([2, 3, 4]);
        assert_eq!(a.difference(&b), set([1]));
        assert_eq!(b.difference(&a), set([4]));
    }

    #[test]
    fn symmetric_difference() {
        assert_eq!(
            set([1, 2, 3]).symmetric_difference(&set([2, 3, 4])),
            set([1, 4])
        );
    }

    #[test]
    fn complement() {
        let universe = set([1, 2, 3, 4, 5]);
        assert_eq!(set([1, 2, 3]).complement(&universe), set([4, 5]));
        assert_eq!(universe.complement(&universe), set([]));
    }

    #[test]
    fn operands_untouched() {
        let a = set([1, 2]);
        let b = set([2, 3]);
        let mut union = a.union(&b);
        union.add(10);
        assert_eq!(a, set([1, 2]));
        assert_eq!(b, set([2, 3]));
    }
}
