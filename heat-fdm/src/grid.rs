//! Regular n-dimensional grid over the unit hypercube
//!
//! Interior points only: each axis carries `m` points at spacings
//! `1/(m+1), 2/(m+1), ...`, with the Dirichlet boundary at 0 and 1 excluded.
//! A point is addressed either by a flat index in `[0, m^n)` or by its
//! mixed-radix decomposition in base `m`; the mapping is derived on demand,
//! never stored.

/// Regular lattice of `points_per_axis^dimension` interior points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    dimension: usize,
    points_per_axis: usize,
}

impl Grid {
    /// Create a grid with `dimension` axes and `points_per_axis` interior
    /// points per axis. Both must be nonzero; the caller (config validation)
    /// guarantees that.
    pub fn new(dimension: usize, points_per_axis: usize) -> Self {
        debug_assert!(dimension > 0 && points_per_axis > 0);
        Self {
            dimension,
            points_per_axis,
        }
    }

    /// Number of axes.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Interior points per axis.
    pub fn points_per_axis(&self) -> usize {
        self.points_per_axis
    }

    /// Total number of interior points, `m^n`.
    pub fn num_points(&self) -> usize {
        self.points_per_axis.pow(self.dimension as u32)
    }

    /// Grid spacing `1/(m+1)`.
    pub fn spacing(&self) -> f64 {
        1.0 / (self.points_per_axis as f64 + 1.0)
    }

    /// Mixed-radix decomposition of a flat index: the lattice position along
    /// each axis, in `[0, m)`.
    pub fn multi_index(&self, flat: usize) -> Vec<usize> {
        let m = self.points_per_axis;
        let mut rest = flat;
        let mut multi = Vec::with_capacity(self.dimension);
        for _ in 0..self.dimension {
            multi.push(rest % m);
            rest /= m;
        }
        multi
    }

    /// Inverse of [`Grid::multi_index`].
    pub fn flat_index(&self, multi: &[usize]) -> usize {
        debug_assert_eq!(multi.len(), self.dimension);
        let m = self.points_per_axis;
        multi
            .iter()
            .rev()
            .fold(0, |flat, &component| flat * m + component)
    }

    /// Physical coordinate of a point along one axis:
    /// `(position + 1) * spacing`, in `(0, 1)`.
    pub fn coordinate(&self, flat: usize, axis: usize) -> f64 {
        let m = self.points_per_axis;
        let position = (flat / m.pow(axis as u32)) % m;
        (position as f64 + 1.0) * self.spacing()
    }

    /// Physical coordinates of a point on every axis.
    pub fn coordinates(&self, flat: usize) -> Vec<f64> {
        let spacing = self.spacing();
        self.multi_index(flat)
            .into_iter()
            .map(|position| (position as f64 + 1.0) * spacing)
            .collect()
    }

    /// Flat indices of the lattice neighbors of `flat`: one step along a
    /// single axis, staying inside the grid.
    ///
    /// Adjacency is decided on the multi-index, so a point in the last layer
    /// of one axis is never paired with the first layer of the next: their
    /// flattened indices differ by `m^k` there too, but the points are not
    /// physically adjacent.
    pub fn neighbors(&self, flat: usize) -> Vec<usize> {
        let m = self.points_per_axis;
        let multi = self.multi_index(flat);
        let mut result = Vec::with_capacity(2 * self.dimension);
        let mut stride = 1;
        for &position in &multi {
            if position > 0 {
                result.push(flat - stride);
            }
            if position + 1 < m {
                result.push(flat + stride);
            }
            stride *= m;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_num_points_and_spacing() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.num_points(), 64);
        assert_relative_eq!(grid.spacing(), 0.2);
    }

    #[test]
    fn test_multi_index_round_trip() {
        let grid = Grid::new(3, 5);
        for flat in 0..grid.num_points() {
            let multi = grid.multi_index(flat);
            assert_eq!(multi.len(), 3);
            assert!(multi.iter().all(|&c| c < 5));
            assert_eq!(grid.flat_index(&multi), flat);
        }
    }

    #[test]
    fn test_coordinates_1d() {
        let grid = Grid::new(1, 4);
        // 4 interior points on (0, 1): 0.2, 0.4, 0.6, 0.8
        assert_relative_eq!(grid.coordinate(0, 0), 0.2);
        assert_relative_eq!(grid.coordinate(3, 0), 0.8);
    }

    #[test]
    fn test_coordinate_matches_coordinates() {
        let grid = Grid::new(2, 3);
        for flat in 0..grid.num_points() {
            let coords = grid.coordinates(flat);
            for axis in 0..2 {
                assert_relative_eq!(coords[axis], grid.coordinate(flat, axis));
            }
        }
    }

    #[test]
    fn test_neighbors_1d_endpoints() {
        let grid = Grid::new(1, 4);
        assert_eq!(grid.neighbors(0), vec![1]);
        assert_eq!(grid.neighbors(3), vec![2]);
        let mut mid = grid.neighbors(1);
        mid.sort_unstable();
        assert_eq!(mid, vec![0, 2]);
    }

    #[test]
    fn test_neighbors_do_not_wrap_across_axes() {
        // 2D, m = 3: flat index 2 is the last point of row 0, flat index 3
        // the first point of row 1. They differ by m^0 = 1 but are not
        // adjacent on the lattice.
        let grid = Grid::new(2, 3);
        assert!(!grid.neighbors(2).contains(&3));
        assert!(!grid.neighbors(3).contains(&2));
        // Vertical adjacency across the same columns does hold.
        assert!(grid.neighbors(2).contains(&5));
        assert!(grid.neighbors(3).contains(&0));
    }

    #[test]
    fn test_neighbors_are_symmetric() {
        let grid = Grid::new(3, 3);
        for flat in 0..grid.num_points() {
            for neighbor in grid.neighbors(flat) {
                assert!(
                    grid.neighbors(neighbor).contains(&flat),
                    "{flat} -> {neighbor} not symmetric"
                );
            }
        }
    }
}
