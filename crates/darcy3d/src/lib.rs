//! Ghost-padded grid core for a Darcy-flow (groundwater-style) fluid solver
//! coupled to a particle (DEM) simulation.
//!
//! The crate owns the discretized pressure/velocity field and the numerical
//! machinery that keeps an explicit finite-difference integration valid:
//!
//! - [`GridGeometry`]: cell counts and physical cell sizes, fixed per run.
//! - [`CellIndexer`] / [`FaceIndexer`]: coordinate-to-storage mapping for
//!   the two staggered grids (cell-centered fields vs. cell-face
//!   velocities), with distinct offset types so the two padding schemes
//!   cannot be mixed.
//! - [`DarcyFields`]: eagerly allocated per-cell arrays plus the
//!   per-particle pressure-force array.
//! - [`stability`]: von Neumann (diffusion) and CFL (advection) bounds that
//!   must hold before a step is accepted.
//! - [`residual`]: mean/max normalized-residual reductions the pressure
//!   solver polls for convergence, with NaN divergence detection.
//!
//! The pressure solve itself, the DEM engine, and the drag-force coupling
//! are external collaborators; they read and write these fields through the
//! index mapping. All fatal conditions (stability violation, divergence)
//! surface as [`DarcyError`] values the driver must treat as end-of-run.
//!
//! # Example
//!
//! ```
//! use darcy3d::DarcyFlow;
//! use glam::DVec3;
//!
//! // 4x4x4 interior cells over a 4 m cube, no particles yet, dt = 0.1 s.
//! let mut flow = DarcyFlow::new((4, 4, 4), DVec3::splat(4.0), 0, 0.1);
//!
//! // The driver writes a velocity field through the index mapping.
//! let cells = flow.fields.cells;
//! for (x, y, z) in cells.interior() {
//!     flow.fields.velocity[cells.offset(x, y, z)] = DVec3::new(0.3, 0.0, 0.0);
//! }
//!
//! // Validate the step, then poll convergence of the (external) solver.
//! flow.check_stability(1.0e-3).expect("step is stable");
//! assert_eq!(flow.mean_residual().unwrap(), 0.0);
//! flow.advance();
//! ```

pub mod constants;
pub mod dump;
pub mod error;
pub mod fields;
pub mod geometry;
pub mod index;
pub mod residual;
pub mod stability;

pub use error::{DarcyError, DarcyResult};
pub use fields::{DarcyFields, ScalarField, VectorField};
pub use geometry::GridGeometry;
pub use glam::{DVec3, DVec4, IVec3};
pub use index::{CellIndexer, CellOffset, FaceIndexer, FaceOffset};
pub use residual::SimClock;

/// One Darcy solver run: geometry, fields, and the simulation clock.
///
/// Thin facade over the component modules so a driver can hold a single
/// value per run. Field arrays stay publicly reachable; the DEM engine and
/// the pressure solver address them through `fields.cells`.
pub struct DarcyFlow {
    /// Grid geometry, fixed for the run
    pub geometry: GridGeometry,
    /// All owned field storage
    pub fields: DarcyFields,
    /// Simulation clock for diagnostics
    pub clock: SimClock,
}

impl DarcyFlow {
    /// Set up a run from interior cell counts, physical domain extents, the
    /// DEM engine's particle count, and the time-step size.
    pub fn new(
        num: (usize, usize, usize),
        domain: DVec3,
        particle_count: usize,
        dt: f64,
    ) -> Self {
        let geometry = GridGeometry::new(num, domain);
        let fields = DarcyFields::new(&geometry, particle_count);
        Self {
            geometry,
            fields,
            clock: SimClock::new(dt),
        }
    }

    /// Validate the pending step against both stability bounds.
    ///
    /// Fatal on violation; see [`stability::check_stability`].
    pub fn check_stability(&self, viscosity: f64) -> DarcyResult<()> {
        stability::check_stability(&self.geometry, &self.fields, self.clock.dt, viscosity)
    }

    /// Mean normalized residual over interior cells.
    pub fn mean_residual(&self) -> DarcyResult<f64> {
        residual::mean_residual(&self.fields, &self.clock)
    }

    /// Maximum normalized residual over interior cells.
    pub fn max_residual(&self) -> DarcyResult<f64> {
        residual::max_residual(&self.fields, &self.clock)
    }

    /// Accept the validated step and advance the clock.
    pub fn advance(&mut self) {
        self.clock.advance();
    }

    /// Per-particle pressure forces for the DEM integrator, in the engine's
    /// particle ordering.
    pub fn particle_forces(&self) -> &[DVec4] {
        &self.fields.particle_force
    }
}
