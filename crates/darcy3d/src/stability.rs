//! Explicit-integration stability checks for the fluid momentum equation.
//!
//! An FTCS (forward time, central space) step is only valid while both the
//! diffusive and the advective term stay inside their stability bounds.
//! Violations are fatal: continuing to integrate past them silently
//! produces non-physical results, so the checker returns a
//! [`DarcyError`] the driver must treat as end-of-run.

use crate::constants::{CFL_LIMIT, VON_NEUMANN_LIMIT};
use crate::error::{DarcyError, DarcyResult};
use crate::fields::DarcyFields;
use crate::geometry::GridGeometry;
use glam::IVec3;

/// Validate the pending step against both stability bounds.
///
/// The diffusion bound is checked first since it is independent of the
/// velocity field; the CFL scan then sweeps the interior cells and stops at
/// the first violation. The checker is a pure function of its arguments,
/// ghost nodes are never inspected.
pub fn check_stability(
    geometry: &GridGeometry,
    fields: &DarcyFields,
    dt: f64,
    viscosity: f64,
) -> DarcyResult<()> {
    check_diffusion(geometry, dt, viscosity)?;
    check_advection(geometry, fields, dt)
}

/// Von Neumann stability bound on the diffusive term.
///
/// Fails when `viscosity * dt / dmin^2 > 0.5`, with `dmin` the smallest
/// cell dimension. Global, evaluated once per step.
pub fn check_diffusion(geometry: &GridGeometry, dt: f64, viscosity: f64) -> DarcyResult<()> {
    let dmin = geometry.min_cell_size();
    let ratio = viscosity * dt / (dmin * dmin);
    if ratio > VON_NEUMANN_LIMIT {
        return Err(DarcyError::DiffusiveInstability { ratio });
    }
    Ok(())
}

/// Courant-Friedrichs-Lewy bound on the advective term.
///
/// For every interior cell, the combined Courant number
/// `v.x*dt/dx + v.y*dt/dy + v.z*dt/dz` must stay at or below 1. The scan
/// reports the first offending cell with its velocity; it does not look
/// for further violations.
pub fn check_advection(geometry: &GridGeometry, fields: &DarcyFields, dt: f64) -> DarcyResult<()> {
    let d = geometry.cell_size;
    for (x, y, z) in fields.cells.interior() {
        let v = fields.velocity[fields.cells.offset(x, y, z)];
        let courant = v.x * dt / d.x + v.y * dt / d.y + v.z * dt / d.z;
        if courant > CFL_LIMIT {
            return Err(DarcyError::AdvectiveInstability {
                cell: IVec3::new(x, y, z),
                velocity: v,
                courant,
            });
        }
    }
    Ok(())
}
