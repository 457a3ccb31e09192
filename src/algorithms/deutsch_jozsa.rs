// src/algorithms/deutsch_jozsa.rs
use std::fmt;

use tracing::debug;

use crate::core::{QsimError, StateVector};
use crate::gates::{hadamard, ket_zero, pauli_x};
use crate::oracle::{FunctionMap, oracle_matrix, register_with_ancilla_dim};
use crate::tensor::{tensor_power, tensor_product};

use super::measurement::{Classification, Measurement, measure};

/// Final statevector and measurement of one Deutsch-Jozsa run.
#[derive(Debug, Clone, PartialEq)]
pub struct DeutschJozsaOutcome {
    final_state: StateVector,
    measurement: Measurement,
}

impl DeutschJozsaOutcome {
    /// `|ψ₃⟩`, the state after the closing Hadamard transform.
    pub fn final_state(&self) -> &StateVector {
        &self.final_state
    }

    /// Input-register probabilities and verdict.
    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    /// Shorthand for `measurement().classification()`.
    pub fn classification(&self) -> Classification {
        self.measurement.classification()
    }
}

impl fmt::Display for DeutschJozsaOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final {}", self.final_state)?;
        write!(f, "{}", self.measurement)
    }
}

/// Initial register `|0⟩^{⊗n} ⊗ X|0⟩`, inputs first and the ancilla last.
pub fn initial_state(n: usize) -> Result<StateVector, QsimError> {
    register_with_ancilla_dim(n)?;
    let ancilla = pauli_x() * ket_zero();
    let mut kets = vec![ket_zero(); n];
    kets.push(ancilla);
    StateVector::from_column(&tensor_product(&kets)?)
}

/// Runs Deutsch-Jozsa on `n` input qubits and one ancilla.
///
/// The stages are applied in this exact order:
/// 1. `|ψ₀⟩ = |0⟩^{⊗n} ⊗ |1⟩`
/// 2. `|ψ₁⟩ = H^{⊗(n+1)} |ψ₀⟩`
/// 3. `|ψ₂⟩ = U_f |ψ₁⟩`
/// 4. `|ψ₃⟩ = H^{⊗(n+1)} |ψ₂⟩`
///
/// and `|ψ₃⟩` is then measured on the input register.
///
/// # Errors
/// * `QsimError::FunctionMapLength` if `f_map` was not built for `n` inputs.
/// * `QsimError::QubitCountOverflow` if `2^(n+1)` overflows.
pub fn run(n: usize, f_map: &FunctionMap) -> Result<DeutschJozsaOutcome, QsimError> {
    debug!(n, %f_map, "running Deutsch-Jozsa");
    let u = oracle_matrix(n, f_map)?;

    let psi_0 = initial_state(n)?;
    let composite_h = tensor_power(&hadamard(), n + 1)?;
    debug!(dim = psi_0.dim(), "initial state prepared");

    let psi_1 = psi_0.apply(&composite_h)?;
    let psi_2 = psi_1.apply(&u)?;
    let psi_3 = psi_2.apply(&composite_h)?;

    let measurement = measure(n, &psi_3)?;
    Ok(DeutschJozsaOutcome { final_state: psi_3, measurement })
}
