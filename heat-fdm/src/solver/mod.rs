//! The implicit time stepper
//!
//! [`HeatSolver`] owns the grid, the system matrix `M = I - coeff * L`
//! (assembled once at construction and reused for every step) and the
//! initial temperature field. Advancing by one step means solving
//! `M w_{k+1} = w_k` with CG, warm-started at `w_k`; the state is replaced,
//! never mutated in place.
//!
//! For the default single-Fourier-mode initial condition the analytic decay
//! `exp(-n * pi^2 * alpha * t) * w0` is available as a validation oracle via
//! [`HeatSolver::exact`].

use crate::assembly::{initial_condition, system_matrix};
use crate::config::HeatConfig;
use crate::grid::Grid;
use solvers::{CgConfig, LinAlgError, SparseMatrix, Vector, cg};
use std::f64::consts::PI;
use thiserror::Error;

/// Errors raised while configuring or running a heat simulation.
#[derive(Debug, Error)]
pub enum HeatError {
    /// Dimension must be at least 1.
    #[error("dimension must be at least 1")]
    ZeroDimension,

    /// Grid must have at least one interior point per axis.
    #[error("grid must have at least one interior point per axis")]
    ZeroGridPoints,

    /// A physical parameter was zero, negative or NaN.
    #[error("{name} must be positive, got {value}")]
    NonPositiveParameter {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// CG exhausted its iteration budget during a time step. Fatal for the
    /// whole run; there is no partial result.
    #[error("CG failed to converge after {iterations} iterations (residual {residual:.3e})")]
    SolverDiverged {
        /// Iterations spent before giving up
        iterations: usize,
        /// Residual norm at that point
        residual: f64,
    },

    /// `solve()`/`exact()` called without a configured total time.
    #[error("no total_time configured; use solve_until/exact_at or set total_time")]
    MissingTotalTime,

    /// Underlying vector/matrix failure (shape or bounds).
    #[error(transparent)]
    LinAlg(#[from] LinAlgError),

    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Default initial profile: a single sine mode with amplitude 10.
///
/// The exact-decay oracle assumes the initial condition is the product of
/// one Fourier mode per axis, which this profile provides.
pub fn sine_mode(x: f64) -> f64 {
    10.0 * x.sin()
}

/// Number of whole time steps of length `time_step` in `[0, total_time)`.
///
/// This is the single authority for the step count; every `solve` variant
/// and every caller derives it from here (or passes an explicit count to
/// [`HeatSolver::solve_steps`]) rather than re-deriving it locally.
pub fn num_steps(total_time: f64, time_step: f64) -> usize {
    (total_time / time_step).floor() as usize
}

/// Backward Euler solver for the heat equation on a regular grid.
pub struct HeatSolver {
    config: HeatConfig,
    grid: Grid,
    matrix: SparseMatrix<f64>,
    w0: Vector<f64>,
    cg_config: CgConfig<f64>,
}

impl HeatSolver {
    /// Build a solver with the default single-mode initial profile.
    pub fn new(config: HeatConfig) -> Result<Self, HeatError> {
        Self::with_profile(config, sine_mode)
    }

    /// Build a solver with a caller-supplied initial profile `f`; the
    /// initial field is the product over axes of `f(pi * coordinate)`.
    ///
    /// Note that [`HeatSolver::exact`] remains the single-mode decay law and
    /// is only a meaningful oracle for profiles proportional to `sin`.
    pub fn with_profile<F>(config: HeatConfig, profile: F) -> Result<Self, HeatError>
    where
        F: Fn(f64) -> f64,
    {
        config.validate()?;
        let grid = Grid::new(config.dimension, config.grid_points);
        let matrix = system_matrix(&grid, config.coeff())?;
        let w0 = initial_condition(&grid, profile);

        log::info!(
            "assembled {}D heat system: {} points, {} nnz, coeff {:.4}",
            config.dimension,
            grid.num_points(),
            matrix.nnz(),
            config.coeff()
        );

        Ok(Self {
            config,
            grid,
            matrix,
            w0,
            cg_config: CgConfig::default(),
        })
    }

    /// Replace the CG settings used for each time step.
    pub fn with_cg_config(mut self, cg_config: CgConfig<f64>) -> Self {
        self.cg_config = cg_config;
        self
    }

    /// The simulation parameters.
    pub fn config(&self) -> &HeatConfig {
        &self.config
    }

    /// The spatial grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The assembled system matrix `I - coeff * L`.
    pub fn matrix(&self) -> &SparseMatrix<f64> {
        &self.matrix
    }

    /// The initial temperature field `w0`.
    pub fn initial_state(&self) -> &Vector<f64> {
        &self.w0
    }

    /// Analytic single-mode decay at the configured total time.
    pub fn exact(&self) -> Result<Vector<f64>, HeatError> {
        let total = self.config.total_time.ok_or(HeatError::MissingTotalTime)?;
        Ok(self.exact_at(total))
    }

    /// Analytic single-mode decay at time `t`:
    /// `exp(-n * pi^2 * alpha * t) * w0`. Pure function of the stored state.
    pub fn exact_at(&self, t: f64) -> Vector<f64> {
        let decay =
            (-(self.config.dimension as f64) * PI * PI * self.config.diffusivity * t).exp();
        self.w0.scale(decay)
    }

    /// Advance `state` by one implicit Euler step.
    ///
    /// Solves `M w_next = state` with CG warm-started at `state`; the
    /// system matrix is reused unchanged. Non-convergence within the CG
    /// iteration cap is fatal and aborts the caller's run.
    pub fn step(&self, state: &Vector<f64>) -> Result<Vector<f64>, HeatError> {
        let solution = cg(&self.matrix, state, Some(state), &self.cg_config)?;
        if !solution.converged {
            return Err(HeatError::SolverDiverged {
                iterations: solution.iterations,
                residual: solution.residual,
            });
        }
        log::debug!(
            "time step solved in {} CG iterations (residual {:.3e})",
            solution.iterations,
            solution.residual
        );
        Ok(solution.x)
    }

    /// Advance the initial state by an explicit number of steps.
    pub fn solve_steps(&self, steps: usize) -> Result<Vector<f64>, HeatError> {
        let mut state = self.w0.clone();
        for _ in 0..steps {
            state = self.step(&state)?;
        }
        Ok(state)
    }

    /// Advance the initial state over `[0, t)`, taking
    /// [`num_steps`]`(t, dt)` implicit steps.
    pub fn solve_until(&self, t: f64) -> Result<Vector<f64>, HeatError> {
        self.solve_steps(num_steps(t, self.config.time_step))
    }

    /// Advance the initial state to the configured total time.
    pub fn solve(&self) -> Result<Vector<f64>, HeatError> {
        let total = self.config.total_time.ok_or(HeatError::MissingTotalTime)?;
        self.solve_until(total)
    }
}
