//! Discretization assembly for the implicit heat scheme

mod laplacian;

pub use laplacian::{initial_condition, system_matrix};
