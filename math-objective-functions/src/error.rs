//! Error types for objective function evaluation.
//!
//! Two categories exist: input that cannot be read as a numeric vector or
//! batch, and registry lookups for a name that is not one of the known
//! functions. Helper methods sort a variant into its category.

use thiserror::Error;

/// Errors that can occur while building inputs or evaluating objectives.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObjectiveError {
    /// An element could not be coerced to a floating point number.
    #[error("non-numeric element at row {row}, index {index}: '{value}'")]
    NonNumeric {
        /// Row of the offending element (0 for a single vector)
        row: usize,
        /// Position of the element inside its row
        index: usize,
        /// The text that failed to parse
        value: String,
    },

    /// A row of a batch does not share the dimension of the first row.
    #[error("ragged batch: row {row} has {got} elements, expected {expected}")]
    RaggedBatch {
        /// Index of the inconsistent row
        row: usize,
        /// Dimension of the first row
        expected: usize,
        /// Dimension of the inconsistent row
        got: usize,
    },

    /// A batch was built from zero rows, so its dimension is unknown.
    #[error("empty batch: at least one row is required")]
    EmptyBatch,

    /// The input vectors have dimension zero.
    #[error("{function}: input vectors must have at least one element")]
    EmptyVector {
        /// Name of the function that was evaluated
        function: &'static str,
    },

    /// No objective function is registered under this name.
    #[error("unknown objective function: '{name}'")]
    NotFound {
        /// The requested name
        name: String,
    },
}

/// A specialized `Result` type for objective function operations.
pub type Result<T> = std::result::Result<T, ObjectiveError>;

impl ObjectiveError {
    /// Returns `true` if the input could not be interpreted as a numeric
    /// vector or batch.
    ///
    /// This includes `NonNumeric`, `RaggedBatch`, `EmptyBatch` and
    /// `EmptyVector`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ObjectiveError::NonNumeric { .. }
                | ObjectiveError::RaggedBatch { .. }
                | ObjectiveError::EmptyBatch
                | ObjectiveError::EmptyVector { .. }
        )
    }

    /// Returns `true` if a lookup by name failed.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ObjectiveError::NotFound { .. })
    }
}
