//! Numerical constants shared by the simulation pipelines.

/// Constants used by the Deutsch-Jozsa pipeline and the numerical checks.
pub mod qsim_constants {
    /// Probability mass at the all-zero input above which a function is reported constant.
    pub const CONSTANT_THRESHOLD: f64 = 1e-10;
    /// Hadamard normalisation factor `1/√2`.
    pub const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
    /// Default tolerance for normalisation checks.
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// Default tolerance for symmetry checks.
    pub const SYMMETRY_TOLERANCE: f64 = 1e-12;
    /// Number of eigenstates handed to the reporting collaborator.
    pub const REPORTED_STATES: usize = 5;
}
