//! Implicit finite-difference solver for the n-dimensional heat equation
//!
//! This crate discretizes the heat diffusion equation on a regular grid over
//! the unit hypercube with homogeneous Dirichlet walls, and advances it in
//! time with the unconditionally stable backward Euler scheme. Each step
//! solves `(I - coeff * L) w_{k+1} = w_k` with the Conjugate Gradient solver
//! from the `solvers` crate; the system matrix is assembled once and reused
//! for every step.
//!
//! # Example
//!
//! ```
//! use fdm::{HeatConfig, HeatSolver};
//!
//! let config = HeatConfig {
//!     dimension: 1,
//!     grid_points: 20,
//!     diffusivity: 0.05,
//!     time_step: 0.01,
//!     total_time: Some(1.0),
//! };
//!
//! let solver = HeatSolver::new(config).unwrap();
//! let numerical = solver.solve().unwrap();
//! let analytic = solver.exact().unwrap();
//! let error = numerical.try_sub(&analytic).unwrap().norm();
//! assert!(error < 0.1);
//! ```

pub mod assembly;
pub mod config;
pub mod grid;
pub mod output;
pub mod solver;

pub use config::HeatConfig;
pub use grid::Grid;
pub use output::SimulationReport;
pub use solver::{HeatError, HeatSolver, num_steps, sine_mode};
