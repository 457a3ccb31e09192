// src/core/state.rs

use nalgebra::DVector;
use std::fmt;

use super::error::QsimError;

/// A real statevector over `k` qubits, stored as a column of `2^k` amplitudes.
///
/// Index bits are big-endian over qubits in registration order: the first
/// registered qubit is the most significant bit. In the Deutsch-Jozsa pipeline
/// the ancilla is registered last and so owns the least significant bit.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    amplitudes: DVector<f64>,
}

impl StateVector {
    /// Wraps an amplitude vector. Its length must be a nonzero power of two.
    pub fn new(amplitudes: DVector<f64>) -> Result<Self, QsimError> {
        let len = amplitudes.len();
        if !len.is_power_of_two() {
            return Err(QsimError::DimensionMismatch {
                context: "statevector",
                expected: len.checked_next_power_of_two().unwrap_or(0),
                actual: len,
            });
        }
        Ok(Self { amplitudes })
    }

    /// Builds a statevector from a column matrix such as a Kronecker product of kets.
    pub fn from_column(column: &nalgebra::DMatrix<f64>) -> Result<Self, QsimError> {
        if column.ncols() != 1 {
            return Err(QsimError::DimensionMismatch {
                context: "statevector column",
                expected: 1,
                actual: column.ncols(),
            });
        }
        Self::new(column.column(0).into_owned())
    }

    /// Read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &DVector<f64> {
        &self.amplitudes
    }

    /// Number of basis amplitudes (`2^k`).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Number of qubits `k` the vector spans.
    pub fn num_qubits(&self) -> usize {
        self.dim().trailing_zeros() as usize
    }

    /// Sum of squared amplitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.norm_squared()
    }

    /// Applies a square gate matrix, returning the transformed state.
    pub fn apply(&self, gate: &nalgebra::DMatrix<f64>) -> Result<Self, QsimError> {
        if gate.nrows() != self.dim() || gate.ncols() != self.dim() {
            return Err(QsimError::DimensionMismatch {
                context: "gate application",
                expected: self.dim(),
                actual: gate.ncols(),
            });
        }
        Ok(Self { amplitudes: gate * &self.amplitudes })
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, a) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, a)?;
        }
        write!(f, "]")
    }
}
