//! Sparse matrix representations

mod map;

pub use map::SparseMatrix;
