//! Convergence diagnostics for the iterative pressure solve.
//!
//! The solver writes a normalized residual into every cell each iteration;
//! these reductions summarize it over the interior so a driver can pick its
//! convergence criterion (mean-based, max-based, or both). A NaN anywhere
//! in the interior means the solve has blown up, and is reported as a fatal
//! error naming the cell instead of silently propagating through the
//! statistics.

use glam::IVec3;
use serde::{Deserialize, Serialize};

use crate::constants::RESIDUAL_SENTINEL;
use crate::error::{DarcyError, DarcyResult};
use crate::fields::DarcyFields;

/// Simulation clock, carried into the diagnostics only.
///
/// The residual reductions never advance it; the driver does, once per
/// accepted step.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SimClock {
    /// Current simulation time (s), non-decreasing
    pub current: f64,
    /// Fixed time-step size (s)
    pub dt: f64,
}

impl SimClock {
    /// Start a clock at t = 0 with the given step size.
    pub fn new(dt: f64) -> Self {
        assert!(dt > 0.0, "time step must be positive, got {}", dt);
        Self { current: 0.0, dt }
    }

    /// Advance by one step.
    pub fn advance(&mut self) {
        self.current += self.dt;
    }

    /// Completed step count, `current / dt`.
    pub fn iteration(&self) -> u64 {
        (self.current / self.dt) as u64
    }
}

/// Arithmetic mean of the normalized residual over all interior cells.
///
/// The accumulator starts from zero on every call. Ghost nodes are
/// excluded; a NaN in any interior cell is fatal.
pub fn mean_residual(fields: &DarcyFields, clock: &SimClock) -> DarcyResult<f64> {
    let mut sum = 0.0;
    for (x, y, z) in fields.cells.interior() {
        let norm_res = fields.residual_norm[fields.cells.offset(x, y, z)];
        if norm_res.is_nan() {
            return Err(diverged(x, y, z, clock));
        }
        sum += norm_res;
    }
    Ok(sum / fields.cells.interior_count() as f64)
}

/// Maximum of the normalized residual over all interior cells.
///
/// Starts from [`RESIDUAL_SENTINEL`] so any finite residual replaces it.
/// Same interior-only domain and NaN contract as [`mean_residual`].
pub fn max_residual(fields: &DarcyFields, clock: &SimClock) -> DarcyResult<f64> {
    let mut max_norm_res = RESIDUAL_SENTINEL;
    for (x, y, z) in fields.cells.interior() {
        let norm_res = fields.residual_norm[fields.cells.offset(x, y, z)];
        if norm_res.is_nan() {
            return Err(diverged(x, y, z, clock));
        }
        if norm_res > max_norm_res {
            max_norm_res = norm_res;
        }
    }
    Ok(max_norm_res)
}

fn diverged(x: i32, y: i32, z: i32, clock: &SimClock) -> DarcyError {
    DarcyError::ResidualDiverged {
        cell: IVec3::new(x, y, z),
        time: clock.current,
        iteration: clock.iteration(),
    }
}
