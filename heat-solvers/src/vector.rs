//! Owned dense vectors with checked arithmetic
//!
//! [`Vector`] is a fixed-length sequence of scalars with value semantics:
//! `clone()` deep-copies, moves transfer ownership. The length is set at
//! construction and never changes.
//!
//! Every operation that can fail (`get`, `try_add`, `try_sub`, `dot`) returns
//! a [`LinAlgError`] instead of panicking; the `Index`/`Add`/`Sub`/`Mul`
//! operator forms are sugar over the checked methods and panic with the same
//! message, which keeps test and demo code readable.

use crate::error::LinAlgError;
use crate::traits::Scalar;
use ndarray::Array1;
use num_traits::{Float, One, Zero};
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// Fixed-length dense vector over a real scalar type.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T: Scalar> {
    data: Array1<T>,
}

impl<T: Scalar> Vector<T> {
    /// Create a vector of `n` zeros.
    pub fn zeros(n: usize) -> Self {
        Self {
            data: Array1::from_elem(n, T::zero()),
        }
    }

    /// Create a vector of `n` ones.
    pub fn ones(n: usize) -> Self {
        Self {
            data: Array1::from_elem(n, T::one()),
        }
    }

    /// Create a vector from an explicit list of values.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self {
            data: Array1::from_vec(values),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checked element read.
    pub fn get(&self, index: usize) -> Result<T, LinAlgError> {
        self.data
            .get(index)
            .copied()
            .ok_or(LinAlgError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, LinAlgError> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(LinAlgError::IndexOutOfBounds { index, len })
    }

    /// Elementwise sum. Fails with [`LinAlgError::ShapeMismatch`] when the
    /// lengths differ.
    pub fn try_add(&self, rhs: &Self) -> Result<Self, LinAlgError> {
        self.check_same_len(rhs)?;
        Ok(Self {
            data: &self.data + &rhs.data,
        })
    }

    /// Elementwise difference. Fails with [`LinAlgError::ShapeMismatch`]
    /// when the lengths differ.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, LinAlgError> {
        self.check_same_len(rhs)?;
        Ok(Self {
            data: &self.data - &rhs.data,
        })
    }

    /// Multiply every element by `scalar`. Always succeeds.
    pub fn scale(&self, scalar: T) -> Self {
        Self {
            data: self.data.mapv(|v| v * scalar),
        }
    }

    /// Dot product. Fails with [`LinAlgError::ShapeMismatch`] when the
    /// lengths differ.
    pub fn dot(&self, rhs: &Self) -> Result<T, LinAlgError> {
        self.check_same_len(rhs)?;
        Ok(self
            .data
            .iter()
            .zip(rhs.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Squared Euclidean norm.
    pub fn norm_sqr(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &v| acc + v * v)
    }

    /// Euclidean norm (magnitude).
    pub fn norm(&self) -> T {
        self.norm_sqr().sqrt()
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// View the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // Array1 built from a Vec is always contiguous in standard layout.
        self.data.as_slice().expect("vector storage is contiguous")
    }

    fn check_same_len(&self, rhs: &Self) -> Result<(), LinAlgError> {
        if self.len() != rhs.len() {
            return Err(LinAlgError::ShapeMismatch {
                expected: self.len(),
                actual: rhs.len(),
            });
        }
        Ok(())
    }
}

impl<T: Scalar> From<Vec<T>> for Vector<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T: Scalar> Index<usize> for Vector<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics when `index >= len()`. Use [`Vector::get`] for a checked read.
    fn index(&self, index: usize) -> &T {
        match self.data.get(index) {
            Some(v) => v,
            None => panic!(
                "{}",
                LinAlgError::IndexOutOfBounds {
                    index,
                    len: self.data.len(),
                }
            ),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Vector<T> {
    /// # Panics
    ///
    /// Panics when `index >= len()`. Use [`Vector::get_mut`] for checked
    /// access.
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(v) => v,
            None => panic!("{}", LinAlgError::IndexOutOfBounds { index, len }),
        }
    }
}

impl<T: Scalar> Add for &Vector<T> {
    type Output = Vector<T>;

    /// # Panics
    ///
    /// Panics on unequal lengths. Use [`Vector::try_add`] for a checked sum.
    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        match self.try_add(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Scalar> Sub for &Vector<T> {
    type Output = Vector<T>;

    /// # Panics
    ///
    /// Panics on unequal lengths. Use [`Vector::try_sub`] for a checked
    /// difference.
    fn sub(self, rhs: &Vector<T>) -> Vector<T> {
        match self.try_sub(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, scalar: T) -> Vector<T> {
        self.scale(scalar)
    }
}

impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
