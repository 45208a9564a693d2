//! Map-backed sparse matrix format
//!
//! Stores only explicitly-set entries as a `(row, col) -> value` mapping.
//! Anything never set is implicitly zero for multiplication, while the strict
//! accessor [`SparseMatrix::get`] distinguishes "stored" from "absent".
//!
//! This uncompressed-key representation keeps assembly trivial and iteration
//! deterministic (`BTreeMap` orders by row, then column). It is intended for
//! small-to-medium systems; a matrix-vector product is a plain O(nnz) walk
//! over the stored triplets.

use crate::error::LinAlgError;
use crate::traits::{LinearOperator, Scalar};
use crate::vector::Vector;
use ndarray::Array2;
use num_traits::{One, Zero};
use std::collections::BTreeMap;
use std::fmt;

/// Sparse matrix with uncompressed `(row, col)` keys.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<T: Scalar> {
    num_rows: usize,
    num_cols: usize,
    entries: BTreeMap<(usize, usize), T>,
}

impl<T: Scalar> SparseMatrix<T> {
    /// Create an empty matrix of logical shape `(num_rows, num_cols)`.
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            entries: BTreeMap::new(),
        }
    }

    /// Create an identity matrix of size `n`.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            m.entries.insert((i, i), T::one());
        }
        m
    }

    /// Build a matrix from `(row, col, value)` triplets.
    ///
    /// Later triplets overwrite earlier ones at the same position. Fails with
    /// [`LinAlgError::IndexOutOfBounds`] on any out-of-shape triplet.
    pub fn from_triplets(
        num_rows: usize,
        num_cols: usize,
        triplets: impl IntoIterator<Item = (usize, usize, T)>,
    ) -> Result<Self, LinAlgError> {
        let mut m = Self::new(num_rows, num_cols);
        for (row, col, value) in triplets {
            m.insert(row, col, value)?;
        }
        Ok(m)
    }

    /// Logical shape `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns.
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Number of explicitly stored entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Fraction of stored entries relative to the dense size.
    pub fn sparsity(&self) -> f64 {
        if self.num_rows == 0 || self.num_cols == 0 {
            return 0.0;
        }
        self.nnz() as f64 / (self.num_rows as f64 * self.num_cols as f64)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), LinAlgError> {
        if row >= self.num_rows {
            return Err(LinAlgError::IndexOutOfBounds {
                index: row,
                len: self.num_rows,
            });
        }
        if col >= self.num_cols {
            return Err(LinAlgError::IndexOutOfBounds {
                index: col,
                len: self.num_cols,
            });
        }
        Ok(())
    }

    /// Store `value` at `(row, col)`, replacing any previous entry.
    pub fn insert(&mut self, row: usize, col: usize, value: T) -> Result<(), LinAlgError> {
        self.check_bounds(row, col)?;
        self.entries.insert((row, col), value);
        Ok(())
    }

    /// Mutable access to the entry at `(row, col)`, creating it as zero when
    /// absent.
    pub fn entry(&mut self, row: usize, col: usize) -> Result<&mut T, LinAlgError> {
        self.check_bounds(row, col)?;
        Ok(self.entries.entry((row, col)).or_insert_with(T::zero))
    }

    /// Strict read: the stored value at `(row, col)`.
    ///
    /// Fails with [`LinAlgError::KeyNotPresent`] when no entry was ever set
    /// there, even though multiplication would treat it as zero.
    pub fn get(&self, row: usize, col: usize) -> Result<T, LinAlgError> {
        self.check_bounds(row, col)?;
        self.entries
            .get(&(row, col))
            .copied()
            .ok_or(LinAlgError::KeyNotPresent { row, col })
    }

    /// Iterate over stored `(row, col, value)` triplets in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.entries.iter().map(|(&(i, j), &v)| (i, j, v))
    }

    /// Matrix-vector product `y = A * x`.
    ///
    /// Requires `x.len() == num_cols`, otherwise fails with
    /// [`LinAlgError::ShapeMismatch`]. The result has length `num_rows` and
    /// is zero-initialized before accumulation; absent entries contribute
    /// nothing.
    pub fn matvec(&self, x: &Vector<T>) -> Result<Vector<T>, LinAlgError> {
        if x.len() != self.num_cols {
            return Err(LinAlgError::ShapeMismatch {
                expected: self.num_cols,
                actual: x.len(),
            });
        }

        let mut result = Vector::zeros(self.num_rows);
        for (&(i, j), &value) in &self.entries {
            // Shape was validated above; stored keys are in bounds by
            // construction.
            result[i] = result[i] + value * x[j];
        }
        Ok(result)
    }

    /// Dense rendering, zeros filled in. Diagnostic only.
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::from_elem((self.num_rows, self.num_cols), T::zero());
        for (&(i, j), &value) in &self.entries {
            dense[[i, j]] = value;
        }
        dense
    }
}

impl<T: Scalar> LinearOperator<T> for SparseMatrix<T> {
    fn num_rows(&self) -> usize {
        self.num_rows
    }

    fn num_cols(&self) -> usize {
        self.num_cols
    }

    fn apply(&self, x: &Vector<T>) -> Result<Vector<T>, LinAlgError> {
        self.matvec(x)
    }
}

impl<T: Scalar> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                match self.entries.get(&(i, j)) {
                    Some(v) => write!(f, "{v}")?,
                    None => write!(f, "0")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
