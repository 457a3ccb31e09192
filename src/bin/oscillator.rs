//! Solves the reference harmonic oscillator and hands the lowest eigenstates
//! to the log reporter.

use qsim::OscillatorConfig;
use qsim::oscillator::{LogReporter, solve};
use tracing::error;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = OscillatorConfig::default();
    let solution = solve(&config).inspect_err(|e| error!("oscillator solve failed: {}", e))?;
    solution.report(&mut LogReporter)?;
    Ok(())
}
