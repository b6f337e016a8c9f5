//! Crate prelude.

// The actual prelude.
pub use crate::{
    bell::{binomial, BellCache, BellNumbers},
    error::SetError,
    partition::Partition,
    set::ElementSet,
    tuple::{OrderedTuple, Pair},
    value::{RawSet, Value},
};

// Convenient imports within the crate.
pub(crate) use crate::{smallvec, Result, SmallVec};
pub(crate) use num_bigint::BigUint;
pub(crate) use num_traits::{One, Zero};
pub(crate) use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
};
