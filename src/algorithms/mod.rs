// src/algorithms/mod.rs

//! The Deutsch-Jozsa pipeline: the runner that composes Hadamard transforms
//! around the oracle, and the interpreter that measures the input register.

pub mod deutsch_jozsa;
pub mod measurement;

pub use deutsch_jozsa::{DeutschJozsaOutcome, initial_state, run};
pub use measurement::{Classification, Measurement, measure};
