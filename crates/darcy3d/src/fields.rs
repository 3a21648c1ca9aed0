//! Field storage for one Darcy solver run.

use std::ops::{Index, IndexMut};

use glam::{DVec3, DVec4};

use crate::geometry::GridGeometry;
use crate::index::{CellIndexer, CellOffset};

/// Cell-centered scalar field on the ghost-padded grid.
///
/// Indexable only by [`CellOffset`], so a face-grid offset cannot reach it.
#[derive(Clone, Debug)]
pub struct ScalarField(Vec<f64>);

impl ScalarField {
    fn zeroed(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    /// Number of cells including ghosts.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the field holds no cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Set every cell, ghosts included, to `value`.
    pub fn fill(&mut self, value: f64) {
        self.0.fill(value);
    }

    /// Raw storage, padded layout.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Mutable raw storage, padded layout.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.0
    }
}

impl Index<CellOffset> for ScalarField {
    type Output = f64;

    #[inline]
    fn index(&self, offset: CellOffset) -> &f64 {
        &self.0[offset.get()]
    }
}

impl IndexMut<CellOffset> for ScalarField {
    #[inline]
    fn index_mut(&mut self, offset: CellOffset) -> &mut f64 {
        &mut self.0[offset.get()]
    }
}

/// Cell-centered 3-vector field on the ghost-padded grid.
#[derive(Clone, Debug)]
pub struct VectorField(Vec<DVec3>);

impl VectorField {
    fn zeroed(len: usize) -> Self {
        Self(vec![DVec3::ZERO; len])
    }

    /// Number of cells including ghosts.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the field holds no cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Set every cell, ghosts included, to `value`.
    pub fn fill(&mut self, value: DVec3) {
        self.0.fill(value);
    }

    /// Raw storage, padded layout.
    pub fn as_slice(&self) -> &[DVec3] {
        &self.0
    }

    /// Mutable raw storage, padded layout.
    pub fn as_mut_slice(&mut self) -> &mut [DVec3] {
        &mut self.0
    }
}

impl Index<CellOffset> for VectorField {
    type Output = DVec3;

    #[inline]
    fn index(&self, offset: CellOffset) -> &DVec3 {
        &self.0[offset.get()]
    }
}

impl IndexMut<CellOffset> for VectorField {
    #[inline]
    fn index_mut(&mut self, offset: CellOffset) -> &mut DVec3 {
        &mut self.0[offset.get()]
    }
}

/// All per-cell and per-particle arrays owned by one simulation run.
///
/// Allocation is eager: every array is sized at construction from the grid
/// geometry and the DEM engine's particle count, zero-initialized, and all
/// of them are released together when the store drops (never partially).
/// The particle count may change only between runs; build a fresh store for
/// the next run.
pub struct DarcyFields {
    /// Indexer shared by every cell-centered array below
    pub cells: CellIndexer,
    /// Hydraulic pressure, mutated by the pressure solve
    pub pressure: ScalarField,
    /// Fluid velocity sample at the cell, read by the CFL check
    pub velocity: VectorField,
    /// Porosity (void fraction), mutated by the DEM coupling
    pub porosity: ScalarField,
    /// Porosity change per unit time
    pub porosity_rate: ScalarField,
    /// Normalized residual of the latest pressure-solve iteration
    pub residual_norm: ScalarField,
    /// Pressure force on each particle: xyz = force (N), w = interaction
    /// pressure. One entry per particle, in the DEM engine's ordering.
    pub particle_force: Vec<DVec4>,
}

impl DarcyFields {
    /// Allocate all fields for a run with `particle_count` particles.
    pub fn new(geometry: &GridGeometry, particle_count: usize) -> Self {
        let n = geometry.cell_count();
        Self {
            cells: CellIndexer::new(geometry),
            pressure: ScalarField::zeroed(n),
            velocity: VectorField::zeroed(n),
            porosity: ScalarField::zeroed(n),
            porosity_rate: ScalarField::zeroed(n),
            residual_norm: ScalarField::zeroed(n),
            particle_force: vec![DVec4::ZERO; particle_count],
        }
    }

    /// Number of particle-force entries.
    pub fn particle_count(&self) -> usize {
        self.particle_force.len()
    }
}
