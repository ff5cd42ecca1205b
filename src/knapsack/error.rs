//! Knapsack error types.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KnapsackError {
    /// A problem needs at least one item.
    #[error("knapsack problem has no items")]
    NoItems,

    /// `from_weights_values` got slices of different lengths.
    #[error("got {weights} weights but {values} values")]
    MismatchedColumns { weights: usize, values: usize },

    /// A bit string does not have one gene per item.
    #[error("expected {expected} genes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
