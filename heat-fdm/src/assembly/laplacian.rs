//! System matrix and initial condition for the backward Euler scheme
//!
//! Assembles `M = I - coeff * L`, where `L` is the n-dimensional discrete
//! Laplacian stencil scaled by `1/dx^2` into `coeff = alpha * dt / dx^2`.
//! Per interior point: `-2` on the diagonal for each axis and `+1`
//! for each lattice neighbor, so
//!
//! - `M[i][i] = 1 + 2 * n * coeff`
//! - `M[i][j] = -coeff` for each neighbor `j` of `i`
//!
//! Only nonzero entries are stored. The matrix is symmetric and strictly
//! diagonally dominant with positive diagonal, hence SPD, which is the
//! precondition for solving each time step with CG.

use crate::grid::Grid;
use solvers::{LinAlgError, SparseMatrix, Vector};
use std::f64::consts::PI;

/// Assemble the backward Euler system matrix for `grid` and the given
/// `coeff = alpha * dt / dx^2`.
///
/// Walks each point's neighbor list instead of scanning all index pairs, so
/// assembly is O(P * n) for P grid points.
pub fn system_matrix(grid: &Grid, coeff: f64) -> Result<SparseMatrix<f64>, LinAlgError> {
    let total = grid.num_points();
    let diagonal = 1.0 + 2.0 * grid.dimension() as f64 * coeff;

    let mut matrix = SparseMatrix::new(total, total);
    for i in 0..total {
        matrix.insert(i, i, diagonal)?;
        for j in grid.neighbors(i) {
            matrix.insert(i, j, -coeff)?;
        }
    }
    Ok(matrix)
}

/// Evaluate the initial temperature field: the product over all axes of
/// `profile(PI * coordinate)`.
pub fn initial_condition<F>(grid: &Grid, profile: F) -> Vector<f64>
where
    F: Fn(f64) -> f64,
{
    let mut w0 = Vector::ones(grid.num_points());
    for i in 0..grid.num_points() {
        for coordinate in grid.coordinates(i) {
            w0[i] *= profile(PI * coordinate);
        }
    }
    w0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_system_matrix_1d_rows() {
        let grid = Grid::new(1, 3);
        let coeff = 0.5;
        let m = system_matrix(&grid, coeff).unwrap();

        assert_eq!(m.shape(), (3, 3));
        // Tridiagonal: 3 diagonal + 4 neighbor entries
        assert_eq!(m.nnz(), 7);

        assert_relative_eq!(m.get(0, 0).unwrap(), 2.0);
        assert_relative_eq!(m.get(0, 1).unwrap(), -0.5);
        assert_relative_eq!(m.get(1, 0).unwrap(), -0.5);
        assert_relative_eq!(m.get(1, 2).unwrap(), -0.5);
        // Non-adjacent entries are never stored
        assert!(m.get(0, 2).is_err());
    }

    #[test]
    fn test_system_matrix_2d_no_wraparound_entry() {
        // m = 3: flat 2 (end of row 0) and flat 3 (start of row 1) must not
        // be coupled even though their flat indices differ by 1.
        let grid = Grid::new(2, 3);
        let m = system_matrix(&grid, 1.0).unwrap();

        assert_relative_eq!(m.get(0, 0).unwrap(), 5.0);
        assert!(m.get(2, 3).is_err());
        assert!(m.get(3, 2).is_err());
        // Same-column vertical coupling exists
        assert_relative_eq!(m.get(2, 5).unwrap(), -1.0);
    }

    #[test]
    fn test_system_matrix_is_symmetric() {
        let grid = Grid::new(2, 4);
        let m = system_matrix(&grid, 0.7).unwrap();
        for (i, j, value) in m.iter() {
            assert_relative_eq!(m.get(j, i).unwrap(), value);
        }
    }

    #[test]
    fn test_initial_condition_1d() {
        let grid = Grid::new(1, 4);
        let w0 = initial_condition(&grid, |x| 10.0 * x.sin());
        // w0[i] = 10 sin(pi * (i+1)/5)
        for i in 0..4 {
            let x = (i as f64 + 1.0) / 5.0;
            assert_relative_eq!(w0[i], 10.0 * (PI * x).sin(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_initial_condition_is_separable_product() {
        let grid = Grid::new(2, 3);
        let w0 = initial_condition(&grid, f64::sin);
        let grid_1d = Grid::new(1, 3);
        let line = initial_condition(&grid_1d, f64::sin);
        for i in 0..grid.num_points() {
            let [ix, iy] = [i % 3, i / 3];
            assert_relative_eq!(w0[i], line[ix] * line[iy], epsilon = 1e-12);
        }
    }
}
