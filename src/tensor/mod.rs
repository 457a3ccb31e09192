// src/tensor/mod.rs

//! Tensor Composer: cumulative Kronecker products over ordered factor lists.
//!
//! Factors are folded left to right, so the first factor ends up owning the
//! most significant index bits of the result. The same fold builds composite
//! kets (column factors) and composite gates (square factors).

use nalgebra::DMatrix;
use tracing::debug;

use crate::core::QsimError;

/// Returns `factors[0] ⊗ factors[1] ⊗ ... ⊗ factors[k-1]`.
///
/// # Errors
/// * `QsimError::EmptyTensorSequence` if `factors` is empty.
pub fn tensor_product(factors: &[DMatrix<f64>]) -> Result<DMatrix<f64>, QsimError> {
    let (first, rest) = factors.split_first().ok_or(QsimError::EmptyTensorSequence)?;
    let product = rest.iter().fold(first.clone(), |acc, factor| acc.kronecker(factor));
    debug!(
        factors = factors.len(),
        rows = product.nrows(),
        cols = product.ncols(),
        "tensor product composed"
    );
    Ok(product)
}

/// Tensor product of `count` copies of the same factor.
pub fn tensor_power(factor: &DMatrix<f64>, count: usize) -> Result<DMatrix<f64>, QsimError> {
    tensor_product(&vec![factor.clone(); count])
}
