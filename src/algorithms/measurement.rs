// src/algorithms/measurement.rs
use std::fmt;

use tracing::info;

use crate::core::{CONSTANT_THRESHOLD, QsimError, StateVector};
use crate::oracle::register_with_ancilla_dim;

/// Verdict on the function encoded by the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// All probability mass returned to the all-zero input register.
    Constant,
    /// No probability mass at the all-zero input register.
    Balanced,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Constant => write!(f, "The function is constant."),
            Classification::Balanced => write!(f, "The function is balanced."),
        }
    }
}

/// Input-register probabilities with the ancilla marginalised out.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    probabilities: Vec<f64>,
    classification: Classification,
}

impl Measurement {
    /// Probability of each `n`-bit input register value.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Constant or balanced.
    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Total probability mass, 1 for a unit-norm state.
    pub fn total_probability(&self) -> f64 {
        self.probabilities.iter().sum()
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Measurement Results:")?;
        for (i, p) in self.probabilities.iter().enumerate() {
            writeln!(f, "  P({}) = {:.6}", i, p)?;
        }
        write!(f, "  {}", self.classification)
    }
}

/// Collapses an `(n+1)`-qubit statevector onto its `n`-qubit input register
/// and classifies the encoded function.
///
/// Each amplitude's square is added into `probabilities[index >> 1]`. The
/// function is constant when the mass at input 0 exceeds `CONSTANT_THRESHOLD`.
///
/// # Errors
/// * `QsimError::QubitCountOverflow` if `2^(n+1)` does not fit in `usize`.
/// * `QsimError::DimensionMismatch` if the state does not span `n + 1` qubits.
pub fn measure(n: usize, state: &StateVector) -> Result<Measurement, QsimError> {
    let expected = register_with_ancilla_dim(n)?;
    if state.dim() != expected {
        return Err(QsimError::DimensionMismatch {
            context: "measurement",
            expected,
            actual: state.dim(),
        });
    }

    let mut probabilities = vec![0.0; expected / 2];
    for (index, value) in state.amplitudes().iter().enumerate() {
        probabilities[index >> 1] += value * value;
    }

    let classification = if probabilities[0].abs() > CONSTANT_THRESHOLD {
        Classification::Constant
    } else {
        Classification::Balanced
    };
    info!(n, p_zero = probabilities[0], %classification, "register measured");

    Ok(Measurement { probabilities, classification })
}
