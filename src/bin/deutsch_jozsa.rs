//! Runs Deutsch-Jozsa on the reference test vectors and prints one verdict
//! per case, in declaration order.

use qsim::FunctionMap;
use qsim::algorithms::run;

/// `(n, f_map)` cases.
const CASES: &[(usize, &[u8])] = &[
    (2, &[0, 0, 1, 1]),
    (3, &[1, 1, 1, 1, 1, 1, 1, 1]),
    (3, &[1, 0, 0, 1, 1, 0, 1, 0]),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    for &(n, values) in CASES {
        let f_map = FunctionMap::new(n, values.to_vec())?;
        let outcome = run(n, &f_map)?;
        println!("{}", outcome.classification());
    }
    Ok(())
}
