//! Simulation configuration
//!
//! A [`HeatConfig`] can be built in code, parsed from CLI flags, or loaded
//! from a JSON file. `total_time` is optional: when absent, the caller must
//! pass the elapsed time to `solve_until` / `exact_at` instead of using the
//! stored-horizon variants.

use crate::solver::HeatError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Physical and numerical parameters of a heat simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatConfig {
    /// Number of spatial dimensions
    pub dimension: usize,
    /// Interior grid points per axis (boundary excluded)
    pub grid_points: usize,
    /// Diffusion coefficient alpha
    pub diffusivity: f64,
    /// Time step dt
    pub time_step: f64,
    /// Total simulated time; may instead be supplied per call
    #[serde(default)]
    pub total_time: Option<f64>,
}

impl HeatConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, HeatError> {
        let contents = fs::read_to_string(path)?;
        let config: HeatConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the parameters define a well-posed problem.
    pub fn validate(&self) -> Result<(), HeatError> {
        if self.dimension == 0 {
            return Err(HeatError::ZeroDimension);
        }
        if self.grid_points == 0 {
            return Err(HeatError::ZeroGridPoints);
        }
        if !(self.diffusivity > 0.0) {
            return Err(HeatError::NonPositiveParameter {
                name: "diffusivity",
                value: self.diffusivity,
            });
        }
        if !(self.time_step > 0.0) {
            return Err(HeatError::NonPositiveParameter {
                name: "time_step",
                value: self.time_step,
            });
        }
        if let Some(total) = self.total_time {
            if !(total > 0.0) {
                return Err(HeatError::NonPositiveParameter {
                    name: "total_time",
                    value: total,
                });
            }
        }
        Ok(())
    }

    /// Stencil coefficient `alpha * dt / dx^2` for grid spacing
    /// `dx = 1/(grid_points + 1)`.
    pub fn coeff(&self) -> f64 {
        let dx = 1.0 / (self.grid_points as f64 + 1.0);
        self.diffusivity * self.time_step / (dx * dx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base() -> HeatConfig {
        HeatConfig {
            dimension: 1,
            grid_points: 100,
            diffusivity: 0.05,
            time_step: 0.005,
            total_time: Some(5.0),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn test_coeff() {
        // dx = 1/101, coeff = 0.05 * 0.005 * 101^2
        assert_relative_eq!(base().coeff(), 0.05 * 0.005 * 101.0 * 101.0);
    }

    #[test]
    fn test_rejects_degenerate_parameters() {
        let mut c = base();
        c.dimension = 0;
        assert!(matches!(c.validate(), Err(HeatError::ZeroDimension)));

        let mut c = base();
        c.grid_points = 0;
        assert!(matches!(c.validate(), Err(HeatError::ZeroGridPoints)));

        let mut c = base();
        c.time_step = 0.0;
        assert!(matches!(
            c.validate(),
            Err(HeatError::NonPositiveParameter {
                name: "time_step",
                ..
            })
        ));

        let mut c = base();
        c.diffusivity = -1.0;
        assert!(c.validate().is_err());

        let mut c = base();
        c.total_time = Some(f64::NAN);
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let json = serde_json::to_string(&base()).unwrap();
        let parsed: HeatConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.dimension, 1);
        assert_eq!(parsed.total_time, Some(5.0));
    }

    #[test]
    fn test_total_time_defaults_to_none() {
        let parsed: HeatConfig = serde_json::from_str(
            r#"{"dimension":2,"grid_points":10,"diffusivity":0.1,"time_step":0.01}"#,
        )
        .unwrap();
        assert_eq!(parsed.total_time, None);
        assert!(parsed.validate().is_ok());
    }
}
