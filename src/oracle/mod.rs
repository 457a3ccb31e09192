// src/oracle/mod.rs

//! Oracle Builder: encodes a boolean function `f: {0,1}^n -> {0,1}` as the
//! reversible permutation `U|x, b⟩ = |x, b ⊕ f(x)⟩`.

use std::fmt;

use nalgebra::DMatrix;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::core::QsimError;

/// Classical shape of a function map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// Every input maps to the same bit.
    Constant,
    /// Exactly half the inputs map to 1.
    Balanced,
    /// Outside the Deutsch-Jozsa promise.
    Neither,
}

/// Truth table of `f` indexed by the `n`-bit input, validated to hold `2^n` bits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionMap {
    n: usize,
    values: Vec<u8>,
}

impl FunctionMap {
    /// Validates `values` as the truth table of an `n`-input function.
    ///
    /// # Errors
    /// * `QsimError::QubitCountOverflow` if `2^n` does not fit in `usize`.
    /// * `QsimError::FunctionMapLength` if `values.len() != 2^n`.
    /// * `QsimError::InvalidFunctionValue` for any entry other than 0 or 1.
    pub fn new(n: usize, values: Vec<u8>) -> Result<Self, QsimError> {
        let expected = register_dim(n)?;
        if values.len() != expected {
            return Err(QsimError::FunctionMapLength { expected, actual: values.len() });
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|&(_, v)| *v > 1) {
            return Err(QsimError::InvalidFunctionValue { index, value });
        }
        Ok(Self { n, values })
    }

    /// The constant function returning `bit` on every input.
    pub fn constant(n: usize, bit: bool) -> Result<Self, QsimError> {
        Self::new(n, vec![u8::from(bit); register_dim(n)?])
    }

    /// A balanced function with its ones placed by a seeded shuffle.
    ///
    /// Requires `n >= 1`; a zero-input function cannot be balanced.
    pub fn random_balanced(n: usize, seed: u64) -> Result<Self, QsimError> {
        if n == 0 {
            return Err(QsimError::InvalidConfiguration {
                message: "a function of 0 inputs cannot be balanced".to_string(),
            });
        }
        let dim = register_dim(n)?;
        let mut values: Vec<u8> = (0..dim).map(|i| u8::from(i < dim / 2)).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        values.shuffle(&mut rng);
        Self::new(n, values)
    }

    /// Number of input bits.
    pub fn n(&self) -> usize {
        self.n
    }

    /// The truth table.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// `f(input)`.
    pub fn eval(&self, input: usize) -> Option<u8> {
        self.values.get(input).copied()
    }

    /// Classifies the table by counting ones. Used to check promise inputs,
    /// not by the quantum algorithm itself.
    pub fn kind(&self) -> FunctionKind {
        let ones = self.values.iter().filter(|&&v| v == 1).count();
        if ones == 0 || ones == self.values.len() {
            FunctionKind::Constant
        } else if ones * 2 == self.values.len() {
            FunctionKind::Balanced
        } else {
            FunctionKind::Neither
        }
    }
}

impl fmt::Display for FunctionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f[n={}](", self.n)?;
        for (i, v) in self.values.iter().enumerate() {
            write!(f, "{}{}", if i > 0 { "," } else { "" }, v)?;
        }
        write!(f, ")")
    }
}

/// `2^n`, or an overflow error.
pub(crate) fn register_dim(qubits: usize) -> Result<usize, QsimError> {
    u32::try_from(qubits)
        .ok()
        .and_then(|q| 1usize.checked_shl(q))
        .ok_or(QsimError::QubitCountOverflow { qubits })
}

/// `2^(n+1)`: an `n`-bit input register plus the ancilla.
pub(crate) fn register_with_ancilla_dim(n: usize) -> Result<usize, QsimError> {
    let qubits = n.checked_add(1).ok_or(QsimError::QubitCountOverflow { qubits: n })?;
    register_dim(qubits)
}

/// Builds the `2^(n+1)` square oracle matrix for `f_map`.
///
/// For every combined index the input register is `index >> 1` and the ancilla
/// is `index & 1`; the output index keeps the input bits and replaces the
/// ancilla with `ancilla ^ f(input)`. Entry `U[input_state, output_state]` is 1.
///
/// # Errors
/// * `QsimError::QubitCountOverflow` if `2^(n+1)` does not fit in `usize`.
/// * `QsimError::FunctionMapLength` if `f_map` was built for a different `n`.
pub fn oracle_matrix(n: usize, f_map: &FunctionMap) -> Result<DMatrix<f64>, QsimError> {
    let dim = register_with_ancilla_dim(n)?;
    let length_error = || QsimError::FunctionMapLength {
        expected: dim / 2,
        actual: f_map.values().len(),
    };
    if f_map.n() != n {
        return Err(length_error());
    }

    let mut u = DMatrix::<f64>::zeros(dim, dim);
    for input_state in 0..dim {
        let input_string = input_state >> 1;
        let oracle_bit = f_map.eval(input_string).ok_or_else(length_error)?;
        let output_qubit = (input_state & 1) ^ usize::from(oracle_bit);
        let output_state = (input_string << 1) + output_qubit;
        u[(input_state, output_state)] = 1.0;
    }
    debug!(n, dim, "oracle matrix built");
    Ok(u)
}
