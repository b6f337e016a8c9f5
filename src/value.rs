//! Dynamically typed values, for sets whose elements aren't known to share one type.

use crate::prelude::*;

/// A set of arbitrary [`Value`]s.
pub type RawSet = ElementSet<Value>;

/// A value of one of a fixed set of kinds.
///
/// Values of different kinds are never equal. They're ordered first by kind, in declaration order,
/// and then by content.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A string.
    Str(String),
    /// A tuple of values.
    Tuple(Box<OrderedTuple<Value>>),
    /// A set of values.
    Set(RawSet),
}

impl Value {
    /// The inner set, if this value is one.
    pub fn as_set(&self) -> Option<&RawSet> {
        match self {
            Self::Set(set) => Some(set),
            _ => None,
        }
    }

    /// The inner tuple, if this value is one.
    pub fn as_tuple(&self) -> Option<&OrderedTuple<Value>> {
        match self {
            Self::Tuple(tuple) => Some(&**tuple),
            _ => None,
        }
    }

    /// The inner integer, if this value is one.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The inner string, if this value is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(str) => Some(str.as_str()),
            _ => None,
        }
    }

    /// Whether this is the empty set Ø.
    pub fn is_empty_set(&self) -> bool {
        self.as_set().is_some_and(ElementSet::is_empty)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<OrderedTuple<Value>> for Value {
    fn from(value: OrderedTuple<Value>) -> Self {
        Self::Tuple(Box::new(value))
    }
}

impl<A: Into<Value>, B: Into<Value>> From<Pair<A, B>> for Value {
    fn from(pair: Pair<A, B>) -> Self {
        OrderedTuple::<Value>::from([pair.first.into(), pair.second.into()]).into()
    }
}

impl From<RawSet> for Value {
    fn from(value: RawSet) -> Self {
        Self::Set(value)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(str) => write!(f, "{str}"),
            Self::Tuple(tuple) => write!(f, "{tuple}"),
            Self::Set(set) => write!(f, "{set}"),
        }
    }
}

impl RawSet {
    /// Builds a set of values from anything convertible into them.
    pub fn of<T: Into<Value>, I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().map(Into::into).collect()
    }

    /// Whether the empty set is one of the elements.
    pub fn contains_empty_set(&self) -> bool {
        self.iter().any(Value::is_empty_set)
    }

    /// The elements which are themselves sets.
    pub fn subsets(&self) -> impl Iterator<Item = &RawSet> {
        self.iter().filter_map(Value::as_set)
    }

    /// Cartesian product with values as components, so that the result is again a [`RawSet`].
    #[must_use]
    pub fn product_values(&self, other: &Self) -> Self {
        self.cartesian_product(other)
            .into_iter()
            .map(Value::from)
            .collect()
    }

    /// Power set with values as elements, so that the result is again a [`RawSet`].
    #[must_use]
    pub fn power_set_values(&self) -> Self {
        self.power_set().into_iter().map(Value::Set).collect()
    }
}
