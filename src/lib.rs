//! # Finite discrete sets
//!
//! Generic sets of unique elements, [`ElementSet`], together with the usual set algebra (union,
//! intersection, difference, symmetric difference, complement and the subset family of relations),
//! derived-set constructions (cartesian products, power sets, partitions) and an exact counter for
//! [Bell numbers](https://en.wikipedia.org/wiki/Bell_number), the number of partitions of a finite
//! set.
//!
//! Every algebraic operation borrows its operands and returns a freshly allocated set.
//!
//! ```
//! use finsets::prelude::*;
//!
//! let a: ElementSet<u32> = [1, 2, 3].into();
//! let b: ElementSet<u32> = [3, 4].into();
//! assert_eq!(a.union(&b), ElementSet::from([1, 2, 3, 4]));
//! assert!(a.intersection(&b).is_unit());
//!
//! let engine = BellNumbers::new();
//! assert_eq!(a.bell_number(&engine), 5u32.into());
//! ```

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod algebra;
pub mod bell;
pub mod error;
pub mod partition;
pub mod powerset;
pub mod prelude;
pub mod product;
pub mod set;
pub mod tuple;
pub mod value;


/// Small vector, sized for the tuples most products build.
type SmallVec<T> = smallvec::SmallVec<[T; 4]>;

/// [`smallvec::smallvec`] coerced into [`SmallVec`].
#[macro_export]
macro_rules! smallvec {
    ($elem: expr; $n: expr) => (
        SmallVec::from_elem($elem, $n)
    );
    ($($x: expr), *$(,)*) => ({
        let vec: SmallVec<_> = smallvec::smallvec![$($x,)*];
        vec
    });
}

/// Result type for fallible set operations.
pub type Result<T> = std::result::Result<T, error::SetError>;
