//! Numerical stability limits and reference fluid constants.

/// Von Neumann stability limit for the explicit diffusive term.
///
/// An FTCS step of the momentum equation is unstable when
/// `viscosity * dt / dmin^2` exceeds this bound.
pub const VON_NEUMANN_LIMIT: f64 = 0.5;

/// CFL limit for the explicit advective term, combined over the three axes.
pub const CFL_LIMIT: f64 = 1.0;

/// Sentinel below any plausible normalized residual, so a max scan replaces
/// it with the first value it sees.
pub const RESIDUAL_SENTINEL: f64 = -1.0e9;

/// Dynamic viscosity of water at 25 degrees C (Pa s).
pub const WATER_VISCOSITY: f64 = 8.9e-4;

/// Density of water (kg/m^3).
pub const WATER_DENSITY: f64 = 1000.0;
