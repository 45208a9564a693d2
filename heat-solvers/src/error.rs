//! Error types for vector, matrix and solver operations.
//!
//! All failure modes are surfaced as `Result` values; nothing in this crate
//! recovers internally. Callers (typically the FDM application crate) decide
//! how to report them.

use thiserror::Error;

/// Errors raised by dense-vector and sparse-matrix operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinAlgError {
    /// An index was at or past the end of a vector, or a matrix row/column
    /// index was at or past the corresponding dimension.
    #[error("index {index} out of bounds for dimension {len}")]
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// The dimension it was checked against
        len: usize,
    },

    /// Two vectors had different lengths, or a matrix-vector product was
    /// attempted with `cols != vector length`.
    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension provided
        actual: usize,
    },

    /// A strict sparse read hit an entry that was never explicitly set.
    /// Distinct from the implicit-zero semantics of multiplication.
    #[error("no entry stored at ({row}, {col})")]
    KeyNotPresent {
        /// Row of the missing entry
        row: usize,
        /// Column of the missing entry
        col: usize,
    },
}

/// Convenience alias for fallible linear-algebra operations.
pub type Result<T> = std::result::Result<T, LinAlgError>;
