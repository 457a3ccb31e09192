// src/oscillator/report.rs

//! Seam between the solver and whatever displays its results. The solver
//! only assembles labelled series; a `SpectrumReporter` decides what to do
//! with them.

use tracing::info;

use super::grid::Grid;
use super::spectrum::Spectrum;
use crate::core::QsimError;
use crate::core::constants::qsim_constants::REPORTED_STATES;
use nalgebra::DVector;

/// One labelled curve over the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend label, `V(x)` or `E_i`.
    pub label: String,
    /// One value per grid point.
    pub values: Vec<f64>,
}

/// Everything a plot of the oscillator needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    /// Shared x axis.
    pub x: Vec<f64>,
    /// Potential first, then the offset eigenstates in ascending energy.
    pub series: Vec<Series>,
}

impl PlotData {
    /// The potential curve plus `E_i + ψ_i(x)` for the lowest `REPORTED_STATES`
    /// eigenstates (fewer if the grid is smaller).
    pub fn new(grid: &Grid, potential: &DVector<f64>, spectrum: &Spectrum) -> Self {
        let mut series = Vec::with_capacity(REPORTED_STATES + 1);
        series.push(Series {
            label: "V(x)".to_string(),
            values: potential.iter().copied().collect(),
        });

        for i in 0..REPORTED_STATES.min(spectrum.len()) {
            let energy = spectrum.eigenvalues()[i];
            let values = spectrum.eigenvectors().column(i).iter().map(|psi| energy + psi).collect();
            series.push(Series { label: format!("E_{}", i), values });
        }

        Self { x: grid.points().iter().copied().collect(), series }
    }
}

/// Consumer of solved spectra, typically a plotting backend.
pub trait SpectrumReporter {
    /// Receives the assembled series for one solve.
    fn report(&mut self, data: &PlotData) -> Result<(), QsimError>;
}

/// Reporter that summarises each series through `tracing`.
#[derive(Debug, Default)]
pub struct LogReporter;

impl SpectrumReporter for LogReporter {
    fn report(&mut self, data: &PlotData) -> Result<(), QsimError> {
        info!(points = data.x.len(), series = data.series.len(), "spectrum report");
        for s in &data.series {
            let min = s.values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = s.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            info!(label = %s.label, min, max, "series");
        }
        Ok(())
    }
}
