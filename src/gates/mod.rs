// src/gates/mod.rs

//! Single-qubit constants: computational basis kets and the 2x2 gates the
//! Deutsch-Jozsa circuit is assembled from.

use nalgebra::DMatrix;

use crate::core::FRAC_1_SQRT_2;

/// Basis ket `|0⟩` as a 2x1 column.
pub fn ket_zero() -> DMatrix<f64> {
    DMatrix::from_column_slice(2, 1, &[1.0, 0.0])
}

/// Basis ket `|1⟩` as a 2x1 column.
pub fn ket_one() -> DMatrix<f64> {
    DMatrix::from_column_slice(2, 1, &[0.0, 1.0])
}

/// Identity gate.
pub fn identity() -> DMatrix<f64> {
    DMatrix::identity(2, 2)
}

/// NOT gate (Pauli X).
pub fn pauli_x() -> DMatrix<f64> {
    DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0])
}

/// Hadamard gate `[[1, 1], [1, -1]] / √2`.
pub fn hadamard() -> DMatrix<f64> {
    let s = FRAC_1_SQRT_2;
    DMatrix::from_row_slice(2, 2, &[s, s, s, -s])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_prepares_one() {
        assert_eq!(pauli_x() * ket_zero(), ket_one());
        assert_eq!(pauli_x() * ket_one(), ket_zero());
    }

    #[test]
    fn test_hadamard_is_self_inverse() {
        let h = hadamard();
        let product = &h * &h;
        assert!((product - identity()).abs().max() < 1e-12);
    }
}
