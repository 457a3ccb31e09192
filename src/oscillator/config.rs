// src/oscillator/config.rs

use std::fmt;

use crate::core::QsimError;

/// Physical constants and grid bounds for one oscillator solve.
///
/// `Default` gives the reference run: ħ = m = ω = 1 on 1000 points over [-5, 5].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatorConfig {
    /// Reduced Planck constant ħ.
    pub hbar: f64,
    /// Particle mass m.
    pub mass: f64,
    /// Angular frequency ω.
    pub omega: f64,
    /// Left grid endpoint (inclusive).
    pub x_min: f64,
    /// Right grid endpoint (inclusive).
    pub x_max: f64,
    /// Number of grid points N.
    pub points: usize,
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            hbar: 1.0,
            mass: 1.0,
            omega: 1.0,
            x_min: -5.0,
            x_max: 5.0,
            points: 1000,
        }
    }
}

impl OscillatorConfig {
    /// Reference configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets ħ.
    pub fn with_hbar(mut self, hbar: f64) -> Self {
        self.hbar = hbar;
        self
    }

    /// Sets the mass.
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Sets ω.
    pub fn with_omega(mut self, omega: f64) -> Self {
        self.omega = omega;
        self
    }

    /// Sets the grid endpoints and point count.
    pub fn with_grid(mut self, x_min: f64, x_max: f64, points: usize) -> Self {
        self.x_min = x_min;
        self.x_max = x_max;
        self.points = points;
        self
    }

    /// Rejects constants that are non-finite or non-positive, an empty or
    /// inverted interval, and grids with fewer than two points.
    pub fn validate(&self) -> Result<(), QsimError> {
        for (name, value) in [("hbar", self.hbar), ("mass", self.mass), ("omega", self.omega)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(QsimError::InvalidConfiguration {
                    message: format!("{} must be finite and positive, got {}", name, value),
                });
            }
        }
        if !self.x_min.is_finite() || !self.x_max.is_finite() || self.x_min >= self.x_max {
            return Err(QsimError::InvalidConfiguration {
                message: format!(
                    "grid interval [{}, {}] is empty or not finite",
                    self.x_min, self.x_max
                ),
            });
        }
        if self.points < 2 {
            return Err(QsimError::InvalidConfiguration {
                message: format!("grid needs at least 2 points, got {}", self.points),
            });
        }
        Ok(())
    }
}

impl fmt::Display for OscillatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Oscillator(hbar={}, m={}, omega={}, x=[{}, {}], N={})",
            self.hbar, self.mass, self.omega, self.x_min, self.x_max, self.points
        )
    }
}
