// src/oscillator/spectrum.rs

//! Spectral Solver: one dense symmetric eigen-decomposition, reordered so
//! eigenvalues ascend with their eigenvector columns permuted alongside.

use nalgebra::{DMatrix, DVector, SymmetricEigen};
use tracing::debug;

use crate::core::QsimError;
use crate::validation::{check_finite, check_symmetric};

/// Implicit QR steps allowed per eigenvalue before giving up.
const MAX_QR_STEPS_PER_EIGENVALUE: usize = 30;

/// Ascending eigenvalues with unit-norm eigenvectors stored as columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    eigenvalues: DVector<f64>,
    eigenvectors: DMatrix<f64>,
}

impl Spectrum {
    /// Eigenvalues in ascending order.
    pub fn eigenvalues(&self) -> &DVector<f64> {
        &self.eigenvalues
    }

    /// Column `i` is the eigenvector of `eigenvalues()[i]`.
    pub fn eigenvectors(&self) -> &DMatrix<f64> {
        &self.eigenvectors
    }

    /// Eigenvector `i` as an owned column, or `None` past the end.
    pub fn state(&self, i: usize) -> Option<DVector<f64>> {
        (i < self.len()).then(|| self.eigenvectors.column(i).into_owned())
    }

    /// Number of eigenpairs.
    pub fn len(&self) -> usize {
        self.eigenvalues.len()
    }

    /// True for a zero-sized decomposition.
    pub fn is_empty(&self) -> bool {
        self.eigenvalues.is_empty()
    }
}

/// Decomposes a real symmetric matrix.
///
/// The sign of each eigenvector is whatever the underlying routine produces.
///
/// # Errors
/// * `QsimError::NonFiniteMatrix` / `QsimError::NonSymmetricMatrix` before any
///   work is done.
/// * `QsimError::DecompositionFailed` if the QR iteration does not converge
///   within `30 * n` steps.
pub fn solve_symmetric(h: DMatrix<f64>) -> Result<Spectrum, QsimError> {
    let max_steps = MAX_QR_STEPS_PER_EIGENVALUE * h.nrows().max(1);
    solve_symmetric_within(h, max_steps)
}

/// [`solve_symmetric`] with an explicit cap on implicit QR steps.
pub(crate) fn solve_symmetric_within(
    h: DMatrix<f64>,
    max_steps: usize,
) -> Result<Spectrum, QsimError> {
    check_finite(&h)?;
    check_symmetric(&h, None)?;
    let n = h.nrows();
    debug!(n, max_steps, "symmetric eigen-decomposition");

    // nalgebra reads a cap of 0 as "no limit"
    let eigen = SymmetricEigen::try_new(h, f64::EPSILON, max_steps.max(1)).ok_or_else(|| {
        QsimError::DecompositionFailed {
            message: format!(
                "symmetric eigen-solver did not converge in {} steps for {}x{} matrix",
                max_steps, n, n
            ),
        }
    })?;

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| eigen.eigenvalues[a].total_cmp(&eigen.eigenvalues[b]));

    let eigenvalues = DVector::from_iterator(n, order.iter().map(|&i| eigen.eigenvalues[i]));
    let eigenvectors = eigen.eigenvectors.select_columns(order.iter());
    Ok(Spectrum { eigenvalues, eigenvectors })
}
