//! Fatal error values for conditions that must end the run.

use glam::{DVec3, IVec3};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type DarcyResult<T> = Result<T, DarcyError>;

/// Unrecoverable failures of the fluid step.
///
/// Every variant is fatal by contract: the simulation driver must log it
/// and stop the run. Retrying with the same inputs reproduces the same
/// failure; only a different time step, viscosity, or grid resolution can
/// clear it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DarcyError {
    /// Von Neumann bound on the diffusive term exceeded.
    #[error(
        "time step too large for stability of the diffusive term \
         (viscosity*dt/dmin^2 = {ratio:.4} > 0.5); decrease the viscosity, \
         decrease the time step, or increase the fluid grid cell size"
    )]
    DiffusiveInstability {
        /// The value of `viscosity * dt / dmin^2`
        ratio: f64,
    },

    /// CFL bound on the advective term exceeded at an interior cell.
    #[error(
        "time step too large for stability of the advective term at cell \
         {cell}: v = {velocity} m/s, Courant number {courant:.4} > 1.0; \
         decrease the time step or increase the fluid grid cell size"
    )]
    AdvectiveInstability {
        /// First interior cell found in violation
        cell: IVec3,
        /// Velocity sample at that cell
        velocity: DVec3,
        /// Combined Courant number over the three axes
        courant: f64,
    },

    /// Normalized residual became NaN; the pressure solve has diverged.
    #[error(
        "normalized residual is NaN in cell {cell} (t = {time}, iteration \
         {iteration}); this often happens when the system has become unstable"
    )]
    ResidualDiverged {
        /// Interior cell holding the NaN
        cell: IVec3,
        /// Simulation time when the divergence was detected
        time: f64,
        /// Iteration count, `time / dt`
        iteration: u64,
    },
}
