//! Simulation report serialization
//!
//! Collects what a plotting pipeline needs (grid coordinates, time stamps
//! and per-step temperature snapshots) and writes it as one JSON document.
//! Purely glue: the solver core never performs I/O; the driver records the
//! vectors the core hands back.

use crate::grid::Grid;
use crate::solver::HeatError;
use serde::{Deserialize, Serialize};
use solvers::Vector;
use std::fs;
use std::path::Path;

/// Recorded trajectory of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Number of spatial dimensions
    pub dimension: usize,
    /// Physical coordinates of every grid point (one row per point)
    pub coordinates: Vec<Vec<f64>>,
    /// Time stamp of each recorded snapshot
    pub times: Vec<f64>,
    /// Temperature field at each recorded time
    pub snapshots: Vec<Vec<f64>>,
}

impl SimulationReport {
    /// Create an empty report for `grid`, with coordinates filled in.
    pub fn new(grid: &Grid) -> Self {
        Self {
            dimension: grid.dimension(),
            coordinates: (0..grid.num_points()).map(|i| grid.coordinates(i)).collect(),
            times: Vec::new(),
            snapshots: Vec::new(),
        }
    }

    /// Record the temperature field at time `t`.
    pub fn record(&mut self, t: f64, state: &Vector<f64>) {
        self.times.push(t);
        self.snapshots.push(state.iter().copied().collect());
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), HeatError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
