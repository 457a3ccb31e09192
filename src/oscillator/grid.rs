// src/oscillator/grid.rs
use nalgebra::DVector;

use super::config::OscillatorConfig;
use crate::core::QsimError;

/// Uniform grid including both endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    points: DVector<f64>,
    dx: f64,
}

impl Grid {
    /// `points` equally spaced values from `x_min` to `x_max` inclusive.
    pub fn linspace(x_min: f64, x_max: f64, points: usize) -> Result<Self, QsimError> {
        if points < 2 {
            return Err(QsimError::InvalidConfiguration {
                message: format!("grid needs at least 2 points, got {}", points),
            });
        }
        let step = (x_max - x_min) / (points - 1) as f64;
        let mut values = DVector::from_fn(points, |i, _| x_min + i as f64 * step);
        values[points - 1] = x_max;
        let dx = values[1] - values[0];
        Ok(Self { points: values, dx })
    }

    /// Grid described by a validated configuration.
    pub fn from_config(config: &OscillatorConfig) -> Result<Self, QsimError> {
        config.validate()?;
        Self::linspace(config.x_min, config.x_max, config.points)
    }

    /// Grid coordinates.
    pub fn points(&self) -> &DVector<f64> {
        &self.points
    }

    /// Spacing `x[1] - x[0]`.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Number of points N.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a grid has at least two points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints_and_spacing() -> Result<(), QsimError> {
        let grid = Grid::linspace(-5.0, 5.0, 11)?;
        assert_eq!(grid.len(), 11);
        assert_eq!(grid.points()[0], -5.0);
        assert_eq!(grid.points()[10], 5.0);
        assert!((grid.dx() - 1.0).abs() < 1e-12);
        assert!(grid.points()[5].abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_single_point_is_rejected() {
        assert!(Grid::linspace(0.0, 1.0, 1).is_err());
    }
}
