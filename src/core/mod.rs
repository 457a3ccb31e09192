// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod state;

// Re-export public types for convenient access via `qsim::core::TypeName`
pub use error::QsimError;
pub use state::StateVector;

pub mod constants;
pub use constants::qsim_constants::{CONSTANT_THRESHOLD, FRAC_1_SQRT_2};
