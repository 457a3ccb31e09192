//! Error handling logic

use std::fmt;

/// Error types for both simulation pipelines.
/// Every variant marks a caller contract violation or a numerical failure;
/// none of them are recoverable inside the computation that raised them.
#[derive(Debug, Clone, PartialEq)]
pub enum QsimError {
    /// The Tensor Composer was handed no factors to fold.
    EmptyTensorSequence,

    /// A function map does not cover exactly `2^n` inputs.
    FunctionMapLength {
        /// Required number of entries (`2^n`).
        expected: usize,
        /// Number of entries supplied.
        actual: usize,
    },

    /// A function map entry is not a single bit.
    InvalidFunctionValue {
        /// Input index of the offending entry.
        index: usize,
        /// The value found there.
        value: u8,
    },

    /// A vector or matrix does not have the dimension an operation requires.
    DimensionMismatch {
        /// Operation that detected the mismatch.
        context: &'static str,
        /// Required dimension.
        expected: usize,
        /// Dimension supplied.
        actual: usize,
    },

    /// A statevector's squared norm deviates from 1 beyond tolerance.
    Unnormalized {
        /// Measured sum of squared amplitudes.
        norm_sqr: f64,
        /// Allowed deviation.
        tolerance: f64,
    },

    /// The register is too wide for its state dimension to fit in `usize`.
    QubitCountOverflow {
        /// Total number of qubits requested.
        qubits: usize,
    },

    /// Oscillator configuration rejected by validation.
    InvalidConfiguration {
        /// InvalidConfiguration failure message
        message: String,
    },

    /// A matrix entry is NaN or infinite.
    NonFiniteMatrix {
        /// Row of the first non-finite entry.
        row: usize,
        /// Column of the first non-finite entry.
        col: usize,
    },

    /// A matrix that must be symmetric is not.
    NonSymmetricMatrix {
        /// Row of the first asymmetric pair.
        row: usize,
        /// Column of the first asymmetric pair.
        col: usize,
    },

    /// The dense eigen-decomposition did not converge.
    DecompositionFailed {
        /// DecompositionFailed failure message
        message: String,
    },
}

impl fmt::Display for QsimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QsimError::EmptyTensorSequence => {
                write!(f, "Tensor product requires at least one factor")
            }
            QsimError::FunctionMapLength { expected, actual } => {
                write!(
                    f,
                    "Function map length mismatch: expected {} entries, got {}",
                    expected, actual
                )
            }
            QsimError::InvalidFunctionValue { index, value } => {
                write!(f, "Function map entry {} is {}, expected 0 or 1", index, value)
            }
            QsimError::DimensionMismatch { context, expected, actual } => {
                write!(
                    f,
                    "Dimension mismatch in {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            QsimError::Unnormalized { norm_sqr, tolerance } => {
                write!(
                    f,
                    "State vector normalization failed. Sum(|c_i|^2) = {} (Deviation > {})",
                    norm_sqr, tolerance
                )
            }
            QsimError::QubitCountOverflow { qubits } => {
                write!(f, "State dimension for {} qubits overflows usize", qubits)
            }
            QsimError::InvalidConfiguration { message } => {
                write!(f, "Invalid configuration: {}", message)
            }
            QsimError::NonFiniteMatrix { row, col } => {
                write!(f, "Matrix entry ({}, {}) is not finite", row, col)
            }
            QsimError::NonSymmetricMatrix { row, col } => {
                write!(f, "Matrix is not symmetric at ({}, {})", row, col)
            }
            QsimError::DecompositionFailed { message } => {
                write!(f, "Eigen-decomposition failed: {}", message)
            }
        }
    }
}

impl std::error::Error for QsimError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = QsimError::FunctionMapLength { expected: 8, actual: 4 };
        assert_eq!(err.to_string(), "Function map length mismatch: expected 8 entries, got 4");

        let err = QsimError::NonSymmetricMatrix { row: 2, col: 3 };
        assert_eq!(err.to_string(), "Matrix is not symmetric at (2, 3)");

        assert_eq!(
            QsimError::EmptyTensorSequence.to_string(),
            "Tensor product requires at least one factor"
        );
    }
}
