// src/oscillator/mod.rs

//! One-dimensional quantum harmonic oscillator solved by finite differences.
//!
//! The pipeline is grid → Hamiltonian → spectrum → report. [`solve`] runs the
//! first three stages with no side effects; reporting is a separate call.

pub mod config;
pub mod grid;
pub mod hamiltonian;
pub mod report;
pub mod spectrum;

pub use config::OscillatorConfig;
pub use grid::Grid;
pub use hamiltonian::{build_hamiltonian, kinetic_matrix, potential};
pub use report::{LogReporter, PlotData, Series, SpectrumReporter};
pub use spectrum::{Spectrum, solve_symmetric};

use nalgebra::DVector;
use tracing::info;

use crate::core::QsimError;

/// Exact level `E_k = ħω(k + ½)` of the continuum oscillator.
pub fn analytic_energy(k: usize, config: &OscillatorConfig) -> f64 {
    config.hbar * config.omega * (k as f64 + 0.5)
}

/// Results of one oscillator solve.
#[derive(Debug, Clone, PartialEq)]
pub struct OscillatorSolution {
    config: OscillatorConfig,
    grid: Grid,
    potential: DVector<f64>,
    spectrum: Spectrum,
}

impl OscillatorSolution {
    /// Configuration the solve ran with.
    pub fn config(&self) -> &OscillatorConfig {
        &self.config
    }

    /// Spatial grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// `V(x)` on the grid.
    pub fn potential(&self) -> &DVector<f64> {
        &self.potential
    }

    /// Ascending eigenpairs of the Hamiltonian.
    pub fn spectrum(&self) -> &Spectrum {
        &self.spectrum
    }

    /// Labelled series for a plot.
    pub fn plot_data(&self) -> PlotData {
        PlotData::new(&self.grid, &self.potential, &self.spectrum)
    }

    /// Hands the plot series to `reporter`.
    pub fn report<R: SpectrumReporter + ?Sized>(&self, reporter: &mut R) -> Result<(), QsimError> {
        reporter.report(&self.plot_data())
    }
}

/// Builds the grid and Hamiltonian for `config` and decomposes it.
///
/// # Errors
/// * `QsimError::InvalidConfiguration` if `config` fails validation.
/// * Any error from [`solve_symmetric`].
pub fn solve(config: &OscillatorConfig) -> Result<OscillatorSolution, QsimError> {
    let grid = Grid::from_config(config)?;
    let potential = potential(&grid, config);
    let h = build_hamiltonian(&grid, config);
    let spectrum = solve_symmetric(h)?;

    if let Some(&ground) = spectrum.eigenvalues().as_slice().first() {
        info!(%config, ground, expected = analytic_energy(0, config), "oscillator solved");
    }
    Ok(OscillatorSolution { config: *config, grid, potential, spectrum })
}
