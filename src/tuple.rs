//! Ordered tuples, the elements of cartesian products.

use crate::prelude::*;

/// A fixed-order, fixed-arity sequence of values.
///
/// Tuples are immutable once built: [`extended`](Self::extended) returns a new tuple rather than
/// growing the existing one. Equality is componentwise and order-sensitive.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderedTuple<E>(SmallVec<E>);

impl<E> OrderedTuple<E> {
    /// The empty tuple `()`.
    #[must_use]
    pub fn empty() -> Self {
        Self(SmallVec::new())
    }

    /// Number of components.
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    /// The component at `index`.
    ///
    /// ## Errors
    ///
    /// [`SetError::IndexOutOfRange`] unless `index < self.arity()`.
    pub fn get(&self, index: usize) -> Result<&E> {
        self.0.get(index).ok_or(SetError::IndexOutOfRange {
            index,
            arity: self.arity(),
        })
    }

    /// The components as a slice.
    pub fn as_slice(&self) -> &[E] {
        &self.0
    }

    /// Iterate over the components in order.
    pub fn iter(&self) -> std::slice::Iter<E> {
        self.0.iter()
    }

    /// A new tuple with `el` appended. The original is left as is.
    #[must_use]
    pub fn extended(&self, el: E) -> Self
    where
        E: Clone,
    {
        let mut vec = SmallVec::with_capacity(self.arity() + 1);
        vec.extend(self.iter().cloned());
        vec.push(el);
        Self(vec)
    }
}

impl<E> FromIterator<E> for OrderedTuple<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<E> IntoIterator for OrderedTuple<E> {
    type Item = E;
    type IntoIter = smallvec::IntoIter<[E; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a OrderedTuple<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<E, const N: usize> From<[E; N]> for OrderedTuple<E> {
    fn from(value: [E; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<E> From<OrderedTuple<E>> for Vec<E> {
    fn from(tuple: OrderedTuple<E>) -> Self {
        tuple.0.into_vec()
    }
}

impl<E: Debug> Debug for OrderedTuple<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut tuple = f.debug_tuple("");
        for el in self {
            tuple.field(el);
        }
        tuple.finish()
    }
}

/// Writes a tuple as `(x, y, z)`.
impl<E: Display> Display for OrderedTuple<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('(')?;
        let mut iter = self.iter();
        if let Some(fst) = iter.next() {
            write!(f, "{fst}")?;
            for el in iter {
                write!(f, ", {el}")?;
            }
        }
        f.write_char(')')
    }
}

/// An ordered pair `(a, b)` of possibly different types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<A, B> {
    /// First component.
    pub first: A,
    /// Second component.
    pub second: B,
}

impl<A, B> Pair<A, B> {
    /// Builds the pair `(first, second)`.
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// The pair with its components swapped.
    pub fn swap(self) -> Pair<B, A> {
        Pair::new(self.second, self.first)
    }
}

impl<E> Pair<E, E> {
    /// The component at `index`, 0 for the first and 1 for the second.
    ///
    /// ## Errors
    ///
    /// [`SetError::IndexOutOfRange`] unless `index < 2`.
    pub fn get(&self, index: usize) -> Result<&E> {
        match index {
            0 => Ok(&self.first),
            1 => Ok(&self.second),
            _ => Err(SetError::IndexOutOfRange { index, arity: 2 }),
        }
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        (pair.first, pair.second)
    }
}

/// A pair of components of one type is a tuple of arity 2.
impl<E> From<Pair<E, E>> for OrderedTuple<E> {
    fn from(pair: Pair<E, E>) -> Self {
        Self(smallvec![pair.first, pair.second])
    }
}

impl<A: Display, B: Display> Display for Pair<A, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({}, {})", self.first, self.second)
    }
}
