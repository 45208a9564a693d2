//! Core traits for linear algebra operations
//!
//! This module defines the fundamental abstractions used throughout the solver
//! library:
//! - [`Scalar`]: Trait for real scalar types
//! - [`LinearOperator`]: Trait for matrix-like objects that can perform
//!   matrix-vector products

use crate::error::LinAlgError;
use crate::vector::Vector;
use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::{Debug, Display};

/// Trait for real scalar types usable in vectors, matrices and solvers.
///
/// The heat equation is real-valued, so unlike a general solver library this
/// abstracts over real floating-point fields only.
///
/// # Implementations
///
/// Blanket-implemented for every type satisfying the bounds; in practice:
/// - `f64` (the default for diffusion problems)
/// - `f32` (for memory-constrained applications)
pub trait Scalar:
    Float + NumAssign + FromPrimitive + ToPrimitive + Debug + Display + Send + Sync + 'static
{
}

impl<T> Scalar for T where
    T: Float + NumAssign + FromPrimitive + ToPrimitive + Debug + Display + Send + Sync + 'static
{
}

/// Trait for linear operators (matrices) that can perform matrix-vector
/// products.
///
/// This abstraction lets solvers work with any matrix representation; the
/// heat application only uses the map-backed [`crate::SparseMatrix`], but the
/// CG loop never needs to know that.
pub trait LinearOperator<T: Scalar> {
    /// Number of rows in the operator
    fn num_rows(&self) -> usize;

    /// Number of columns in the operator
    fn num_cols(&self) -> usize;

    /// Apply the operator: y = A * x
    ///
    /// Fails with [`LinAlgError::ShapeMismatch`] when `x.len() != num_cols()`.
    fn apply(&self, x: &Vector<T>) -> Result<Vector<T>, LinAlgError>;

    /// Check if the operator is square
    fn is_square(&self) -> bool {
        self.num_rows() == self.num_cols()
    }
}
