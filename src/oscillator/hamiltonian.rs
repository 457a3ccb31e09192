// src/oscillator/hamiltonian.rs

//! Hamiltonian Builder: `H = T + diag(V)` on a uniform grid, with `T` the
//! three-point second-derivative stencil scaled by `-ħ²/(2m dx²)`.

use nalgebra::{DMatrix, DVector};
use tracing::debug;

use super::config::OscillatorConfig;
use super::grid::Grid;

/// Harmonic potential `V(x) = ½ m ω² x²` sampled on the grid.
pub fn potential(grid: &Grid, config: &OscillatorConfig) -> DVector<f64> {
    let k = 0.5 * config.mass * config.omega.powi(2);
    grid.points().map(|x| k * x * x)
}

/// Dense kinetic-energy matrix: `-2` on the diagonal, `+1` on the first
/// off-diagonals, scaled by `-0.5 (ħ²/m) / dx²`.
pub fn kinetic_matrix(grid: &Grid, config: &OscillatorConfig) -> DMatrix<f64> {
    let n = grid.len();
    let scale = -0.5 * (config.hbar.powi(2) / config.mass) / grid.dx().powi(2);
    DMatrix::from_fn(n, n, |i, j| {
        let stencil = if i == j {
            -2.0
        } else if i.abs_diff(j) == 1 {
            1.0
        } else {
            0.0
        };
        scale * stencil
    })
}

/// `T + diag(V)`. Symmetric by construction.
pub fn build_hamiltonian(grid: &Grid, config: &OscillatorConfig) -> DMatrix<f64> {
    let mut h = kinetic_matrix(grid, config);
    let v = potential(grid, config);
    for (i, vi) in v.iter().enumerate() {
        h[(i, i)] += vi;
    }
    debug!(n = grid.len(), dx = grid.dx(), "hamiltonian assembled");
    h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QsimError;
    use crate::validation::is_symmetric;

    #[test]
    fn test_potential_values() -> Result<(), QsimError> {
        let grid = Grid::linspace(-2.0, 2.0, 5)?;
        let config = OscillatorConfig::new().with_mass(2.0).with_omega(3.0);
        // ½·2·9·x² = 9x²
        let v = potential(&grid, &config);
        assert_eq!(v.as_slice(), &[36.0, 9.0, 0.0, 9.0, 36.0]);
        Ok(())
    }

    #[test]
    fn test_kinetic_stencil() -> Result<(), QsimError> {
        let grid = Grid::linspace(0.0, 4.0, 5)?; // dx = 1
        let t = kinetic_matrix(&grid, &OscillatorConfig::new());
        assert_eq!(t[(2, 2)], 1.0);
        assert_eq!(t[(2, 1)], -0.5);
        assert_eq!(t[(2, 3)], -0.5);
        assert_eq!(t[(2, 0)], 0.0);
        assert_eq!(t[(0, 4)], 0.0);
        Ok(())
    }

    #[test]
    fn test_hamiltonian_is_symmetric() -> Result<(), QsimError> {
        let cases = [(-5.0, 5.0, 50, 1.0), (-1.0, 3.0, 17, 0.3), (0.0, 1.0, 2, 7.0)];
        for (x_min, x_max, points, mass) in cases {
            let config = OscillatorConfig::new().with_grid(x_min, x_max, points).with_mass(mass);
            let grid = Grid::from_config(&config)?;
            let h = build_hamiltonian(&grid, &config);
            assert!(is_symmetric(&h), "H not symmetric for {}", config);
        }
        Ok(())
    }

    #[test]
    fn test_diagonal_adds_potential() -> Result<(), QsimError> {
        let config = OscillatorConfig::new().with_grid(-2.0, 2.0, 5);
        let grid = Grid::from_config(&config)?;
        let h = build_hamiltonian(&grid, &config);
        let t = kinetic_matrix(&grid, &config);
        assert_eq!(h[(0, 0)] - t[(0, 0)], 2.0);
        assert_eq!(h[(0, 1)], t[(0, 1)]);
        Ok(())
    }
}
