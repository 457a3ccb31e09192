// src/validation/mod.rs

//! Numerical checks on statevectors and matrices: normalisation, the
//! permutation property of oracles, and the finiteness and symmetry required
//! before a symmetric eigen-decomposition.

use nalgebra::DMatrix;

use crate::core::constants::qsim_constants::{NORM_TOLERANCE, SYMMETRY_TOLERANCE};
use crate::core::{QsimError, StateVector};

/// Checks if the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to 1e-9.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QsimError::Unnormalized)` carrying the measured squared norm otherwise.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<(), QsimError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sq = state.norm_sqr();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(QsimError::Unnormalized { norm_sqr: norm_sq, tolerance: effective_tolerance })
    } else {
        Ok(())
    }
}

/// True when every entry is 0 or 1 and every row and column holds exactly one 1.
pub fn is_permutation_matrix(m: &DMatrix<f64>) -> bool {
    if !m.is_square() {
        return false;
    }
    let entries_binary = m.iter().all(|&v| v == 0.0 || v == 1.0);
    let rows_ok = m.row_iter().all(|row| row.sum() == 1.0);
    let cols_ok = m.column_iter().all(|col| col.sum() == 1.0);
    entries_binary && rows_ok && cols_ok
}

/// Fails on the first NaN or infinite entry.
pub fn check_finite(m: &DMatrix<f64>) -> Result<(), QsimError> {
    for col in 0..m.ncols() {
        for row in 0..m.nrows() {
            if !m[(row, col)].is_finite() {
                return Err(QsimError::NonFiniteMatrix { row, col });
            }
        }
    }
    Ok(())
}

/// Fails unless `m` is square and `|m[i,j] - m[j,i]|` stays within tolerance.
pub fn check_symmetric(m: &DMatrix<f64>, tolerance: Option<f64>) -> Result<(), QsimError> {
    if !m.is_square() {
        return Err(QsimError::DimensionMismatch {
            context: "symmetry check",
            expected: m.nrows(),
            actual: m.ncols(),
        });
    }
    let tol = tolerance.unwrap_or(SYMMETRY_TOLERANCE);
    for i in 0..m.nrows() {
        for j in (i + 1)..m.ncols() {
            if (m[(i, j)] - m[(j, i)]).abs() > tol {
                return Err(QsimError::NonSymmetricMatrix { row: i, col: j });
            }
        }
    }
    Ok(())
}

/// Boolean form of [`check_symmetric`] with the default tolerance.
pub fn is_symmetric(m: &DMatrix<f64>) -> bool {
    check_symmetric(m, None).is_ok()
}
