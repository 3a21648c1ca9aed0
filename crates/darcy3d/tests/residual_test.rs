//! Residual-statistics integration tests through the `DarcyFlow` facade.

use darcy3d::{DarcyError, DarcyFlow, DVec3, IVec3};

fn flow_4x4x4() -> DarcyFlow {
    DarcyFlow::new((4, 4, 4), DVec3::splat(4.0), 0, 0.1)
}

#[test]
fn test_all_zero_residual_converged() {
    let flow = flow_4x4x4();
    assert_eq!(flow.mean_residual().unwrap(), 0.0);
    assert_eq!(flow.max_residual().unwrap(), 0.0);
}

#[test]
fn test_constant_residual_mean_is_exact() {
    let mut flow = flow_4x4x4();
    let cells = flow.fields.cells;
    for (x, y, z) in cells.interior() {
        flow.fields.residual_norm[cells.offset(x, y, z)] = 3.25e-4;
    }
    let mean = flow.mean_residual().unwrap();
    assert!((mean - 3.25e-4).abs() < 1e-16, "mean = {}", mean);
    assert_eq!(flow.max_residual().unwrap(), 3.25e-4);
}

#[test]
fn test_single_peak_dominates_max_not_mean() {
    let mut flow = flow_4x4x4();
    let peak = flow.fields.cells.offset(3, 0, 2);
    flow.fields.residual_norm[peak] = 6.4;

    assert_eq!(flow.max_residual().unwrap(), 6.4);
    // 64 interior cells, one of them at 6.4.
    let mean = flow.mean_residual().unwrap();
    assert!((mean - 0.1).abs() < 1e-12, "mean = {}", mean);
}

#[test]
fn test_driver_style_convergence_poll() {
    // A driver polling max-residual against a tolerance sees the solver
    // "converge" as the field shrinks.
    let mut flow = flow_4x4x4();
    let cells = flow.fields.cells;
    let tolerance = 1.0e-3;

    let mut residual = 1.0;
    for (x, y, z) in cells.interior() {
        flow.fields.residual_norm[cells.offset(x, y, z)] = residual;
    }

    let mut iterations = 0;
    while flow.max_residual().unwrap() > tolerance {
        residual *= 0.1;
        for (x, y, z) in cells.interior() {
            flow.fields.residual_norm[cells.offset(x, y, z)] = residual;
        }
        iterations += 1;
        assert!(iterations < 100, "convergence poll did not terminate");
    }
    assert!(flow.max_residual().unwrap() <= tolerance);
}

#[test]
fn test_nan_reports_coordinates_time_and_iteration() {
    let mut flow = DarcyFlow::new((4, 4, 4), DVec3::splat(4.0), 0, 0.5);
    for _ in 0..4 {
        flow.advance();
    }
    let bad = flow.fields.cells.offset(2, 0, 3);
    flow.fields.residual_norm[bad] = f64::NAN;

    for result in [flow.mean_residual(), flow.max_residual()] {
        match result.unwrap_err() {
            DarcyError::ResidualDiverged { cell, time, iteration } => {
                assert_eq!(cell, IVec3::new(2, 0, 3));
                assert!((time - 2.0).abs() < 1e-12);
                assert_eq!(iteration, 4);
            }
            other => panic!("expected divergence error, got {}", other),
        }
    }
}

#[test]
fn test_nan_never_leaks_into_a_returned_value() {
    let mut flow = flow_4x4x4();
    let bad = flow.fields.cells.offset(0, 0, 0);
    flow.fields.residual_norm[bad] = f64::NAN;

    // Both reductions must fail loudly rather than return NaN.
    assert!(flow.mean_residual().is_err());
    assert!(flow.max_residual().is_err());
}
