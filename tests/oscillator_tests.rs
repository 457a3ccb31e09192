// tests/oscillator_tests.rs

use qsim::oscillator::{Grid, OscillatorConfig, analytic_energy, build_hamiltonian, solve};
use qsim::{QsimError, is_symmetric};

#[test]
fn test_reference_ground_state_energy() -> Result<(), QsimError> {
    // N=1000 over [-5, 5], hbar = m = omega = 1
    let config = OscillatorConfig::default();
    let solution = solve(&config)?;
    let spectrum = solution.spectrum();

    assert_eq!(spectrum.len(), 1000);
    let ground = spectrum.eigenvalues()[0];
    assert!((ground - 0.5).abs() < 1e-3, "ground state energy {} not near 0.5", ground);

    for k in 1..5 {
        let numeric = spectrum.eigenvalues()[k];
        assert!((numeric - analytic_energy(k, &config)).abs() < 1e-3, "E_{} = {}", k, numeric);
    }
    Ok(())
}

#[test]
fn test_eigenvalues_non_negative_and_ascending() -> Result<(), QsimError> {
    for (omega, mass) in [(1.0, 1.0), (2.0, 0.5), (0.3, 4.0)] {
        let config = OscillatorConfig::new()
            .with_grid(-5.0, 5.0, 150)
            .with_omega(omega)
            .with_mass(mass);
        let solution = solve(&config)?;
        let values = solution.spectrum().eigenvalues();
        assert!(values.iter().all(|&e| e >= 0.0), "negative eigenvalue for {}", config);
        let ascending = values.as_slice().windows(2).all(|w| w[0] <= w[1]);
        assert!(ascending, "unsorted spectrum for {}", config);
    }
    Ok(())
}

#[test]
fn test_eigenvectors_are_unit_norm() -> Result<(), QsimError> {
    let solution = solve(&OscillatorConfig::new().with_grid(-5.0, 5.0, 100))?;
    for i in 0..solution.spectrum().len() {
        let norm = solution.spectrum().eigenvectors().column(i).norm();
        assert!((norm - 1.0).abs() < 1e-9, "eigenvector {} has norm {}", i, norm);
    }
    Ok(())
}

#[test]
fn test_ground_state_is_even_and_nodeless() -> Result<(), QsimError> {
    let solution = solve(&OscillatorConfig::new().with_grid(-5.0, 5.0, 101))?;
    let psi = solution.spectrum().state(0).expect("ground state present");
    // Normalise the arbitrary sign so the peak is positive
    let sign = psi[50].signum();
    for i in 0..psi.len() {
        assert!(sign * psi[i] > -1e-12, "ground state changes sign at {}", i);
        assert!((psi[i] - psi[psi.len() - 1 - i]).abs() < 1e-8, "ground state not even at {}", i);
    }
    Ok(())
}

#[test]
fn test_hamiltonian_symmetric_for_various_grids() -> Result<(), QsimError> {
    for points in [2, 3, 10, 64] {
        let config = OscillatorConfig::new().with_grid(-3.0, 2.0, points).with_hbar(0.7);
        let grid = Grid::from_config(&config)?;
        assert!(is_symmetric(&build_hamiltonian(&grid, &config)));
    }
    Ok(())
}

#[test]
fn test_solve_is_repeatable_without_shared_state() -> Result<(), QsimError> {
    let a = solve(&OscillatorConfig::new().with_grid(-4.0, 4.0, 80))?;
    let b = solve(&OscillatorConfig::new().with_grid(-4.0, 4.0, 80).with_omega(2.0))?;
    let a_again = solve(a.config())?;
    assert_eq!(a.spectrum().eigenvalues(), a_again.spectrum().eigenvalues());
    assert!(b.spectrum().eigenvalues()[0] > a.spectrum().eigenvalues()[0]);
    Ok(())
}

#[test]
fn test_invalid_grid_is_rejected() {
    let config = OscillatorConfig::new().with_grid(5.0, -5.0, 100);
    assert!(matches!(solve(&config), Err(QsimError::InvalidConfiguration { .. })));
}
