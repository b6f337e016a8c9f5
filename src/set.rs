//! Finite sets of unique elements [`ElementSet`].

use crate::prelude::*;
use std::collections::btree_set;

/// A finite set of unique elements.
///
/// ## Invariants
///
/// No two stored elements are equal. Since the set is backed by a [`BTreeSet`], equality is the
/// one given by `E: Ord`.
///
/// The set is only ever mutated through [`add`](Self::add), [`add_all`](Self::add_all),
/// [`remove`](Self::remove), [`remove_all`](Self::remove_all), [`retain`](Self::retain) and
/// [`clear`](Self::clear). Every algebraic construction borrows its operands and returns a new set
/// which shares no storage with them.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementSet<E: Ord>(BTreeSet<E>);

// -------------------- Basic traits -------------------- //

impl<E: Ord> Default for ElementSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Ord> FromIterator<E> for ElementSet<E> {
    /// Builds a set from an iterator, collapsing duplicates.
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<E: Ord> IntoIterator for ElementSet<E> {
    type Item = E;
    type IntoIter = btree_set::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, E: Ord> IntoIterator for &'a ElementSet<E> {
    type Item = &'a E;
    type IntoIter = btree_set::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<E: Ord> Extend<E> for ElementSet<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<E: Ord, const N: usize> From<[E; N]> for ElementSet<E> {
    fn from(value: [E; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<E: Ord> From<Vec<E>> for ElementSet<E> {
    fn from(value: Vec<E>) -> Self {
        value.into_iter().collect()
    }
}

impl<E: Ord> From<BTreeSet<E>> for ElementSet<E> {
    fn from(value: BTreeSet<E>) -> Self {
        Self(value)
    }
}

impl<E: Ord> From<ElementSet<E>> for Vec<E> {
    fn from(set: ElementSet<E>) -> Self {
        set.0.into_iter().collect()
    }
}

impl<E: Ord + Debug> Debug for ElementSet<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Writes a set in roster notation, e.g. `{1, 2, 3}`.
impl<E: Ord + Display> Display for ElementSet<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut iter = self.iter();
        if let Some(fst) = iter.next() {
            write!(f, "{fst}")?;
            for el in iter {
                write!(f, ", {el}")?;
            }
        }
        f.write_char('}')
    }
}

// -------------------- Basic methods -------------------- //

impl<E: Ord> ElementSet<E> {
    /// The empty set Ø.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// The singleton set {x}.
    #[must_use]
    pub fn singleton(el: E) -> Self {
        let mut set = Self::new();
        set.add(el);
        set
    }

    /// Adds an element. Returns whether it was not already present.
    pub fn add(&mut self, el: E) -> bool {
        self.0.insert(el)
    }

    /// Adds every element from an iterator. Returns whether any of them was not already present.
    pub fn add_all<I: IntoIterator<Item = E>>(&mut self, iter: I) -> bool {
        iter.into_iter().fold(false, |changed, el| self.add(el) | changed)
    }

    /// Removes an element. Returns whether it was present.
    pub fn remove(&mut self, el: &E) -> bool {
        self.0.remove(el)
    }

    /// Removes every element from an iterator. Returns whether any of them was present.
    pub fn remove_all<'a, I: IntoIterator<Item = &'a E>>(&mut self, iter: I) -> bool
    where
        E: 'a,
    {
        iter.into_iter().fold(false, |changed, el| self.remove(el) | changed)
    }

    /// Keeps only the elements satisfying the predicate.
    pub fn retain<P: FnMut(&E) -> bool>(&mut self, pred: P) {
        self.0.retain(pred);
    }

    /// Removes all elements from the set.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Membership ∈.
    pub fn contains(&self, el: &E) -> bool {
        self.0.contains(el)
    }

    /// Whether every element from the iterator belongs to the set.
    pub fn contains_all<'a, I: IntoIterator<Item = &'a E>>(&self, iter: I) -> bool
    where
        E: 'a,
    {
        iter.into_iter().all(|el| self.contains(el))
    }

    /// Set cardinality.
    pub fn cardinality(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the set has exactly one element.
    pub fn is_unit(&self) -> bool {
        self.cardinality() == 1
    }

    /// Whether the set is finite. Always true.
    pub const fn is_finite(&self) -> bool {
        true
    }

    /// Iterate over the elements of the set.
    ///
    /// The order is the one given by `E: Ord`, but callers shouldn't give it any meaning.
    pub fn iter(&self) -> btree_set::Iter<E> {
        self.0.iter()
    }

    /// The elements of the set, as an iterator. Alias for [`Self::iter`].
    pub fn elements(&self) -> btree_set::Iter<E> {
        self.iter()
    }

    /// Copies the elements of the set into a vector.
    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Number of partitions of this set, i.e. the Bell number of its cardinality.
    pub fn bell_number(&self, engine: &BellNumbers) -> BigUint {
        engine.bell(self.cardinality())
    }
}
