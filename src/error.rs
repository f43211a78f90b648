//! Error type shared by every operation in the crate.

use thiserror::Error;

/// Errors reported before any element of the sequence is touched.
///
/// Sorting itself never fails: an inconsistent comparator produces an
/// unspecified order, not an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// The requested range reaches past the end of the sequence.
    #[error("range end {end} is out of bounds for a sequence of length {len}")]
    OutOfBounds { end: usize, len: usize },

    /// A selection was requested from an input with no elements.
    #[error("input is empty")]
    EmptyInput,

    /// A selection count of zero, or larger than the number of available elements.
    #[error("count {count} is invalid for {available} available elements")]
    InvalidCount { count: usize, available: usize },

    /// A bounded bogo sort ran out of shuffles before the range became ordered.
    #[error("sequence still unordered after {shuffles} shuffles")]
    BudgetExhausted { shuffles: usize },
}
