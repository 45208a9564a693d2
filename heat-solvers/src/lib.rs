//! Linear algebra and iterative solvers for implicit finite-difference schemes
//!
//! This crate provides the numerical building blocks used by the heat
//! diffusion application:
//!
//! - **Dense Vectors**: owned fixed-length vectors with checked arithmetic
//! - **Sparse Matrices**: uncompressed `(row, col) -> value` storage with
//!   bounds-checked access and matrix-vector products
//! - **Iterative Solvers**: unpreconditioned Conjugate Gradient for symmetric
//!   positive definite systems
//! - **Generic Scalar Types**: works with f64 and f32
//!
//! # Example
//!
//! ```
//! use solvers::{SparseMatrix, Vector, CgConfig, cg};
//!
//! let a: SparseMatrix<f64> = SparseMatrix::identity(3);
//! let b = Vector::from_vec(vec![1.0, 2.0, 3.0]);
//!
//! let solution = cg(&a, &b, None, &CgConfig::default()).unwrap();
//! assert!(solution.converged);
//! ```

pub mod error;
pub mod iterative;
pub mod sparse;
pub mod traits;
pub mod vector;

// Re-export main types
pub use error::LinAlgError;
pub use sparse::SparseMatrix;
pub use traits::{LinearOperator, Scalar};
pub use vector::Vector;

// Re-export iterative solvers
pub use iterative::{CgConfig, CgSolution, cg};
