//! Errors raised by set operations.

use thiserror::Error;

/// Error in evaluating a set operation.
///
/// Every error is raised at the point of the invalid call. Operands are never mutated, so a failed
/// call leaves no partial state behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SetError {
    /// An n-ary union, intersection or cartesian product was given no operands.
    #[error("operation requires at least one operand set")]
    EmptyOperandList,

    /// Positional access into a tuple outside of `0..arity`.
    #[error("index {index} out of range for tuple of arity {arity}")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The number of components in the tuple.
        arity: usize,
    },

    /// A set can't be split into zero segments.
    #[error("cannot partition a set into {0} segments")]
    InvalidPartitionCount(usize),
}
