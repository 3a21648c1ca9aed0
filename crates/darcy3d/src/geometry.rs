//! Grid geometry for the ghost-padded Darcy fluid grid.

use glam::DVec3;
use log::info;
use serde::{Deserialize, Serialize};

/// Fixed geometry of the fluid grid for one simulation run.
///
/// Cell counts come from the DEM engine's spatial grid and never change
/// mid-run. Cell sizes are derived from the physical domain extents and are
/// strictly positive. All cell-centered fields on this grid carry one layer
/// of ghost cells per side; see [`crate::index::CellIndexer`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GridGeometry {
    /// Number of interior cells in X
    pub nx: usize,
    /// Number of interior cells in Y
    pub ny: usize,
    /// Number of interior cells in Z
    pub nz: usize,
    /// Physical domain extent per axis (m)
    pub domain: DVec3,
    /// Physical cell size per axis (m), `domain / num`
    pub cell_size: DVec3,
}

impl GridGeometry {
    /// Create geometry from interior cell counts and physical domain extents.
    ///
    /// Zero cell counts and non-positive extents are configuration errors
    /// and rejected here, before any field is allocated.
    pub fn new(num: (usize, usize, usize), domain: DVec3) -> Self {
        let (nx, ny, nz) = num;
        assert!(
            nx > 0 && ny > 0 && nz > 0,
            "cell counts must be positive, got {}x{}x{}",
            nx,
            ny,
            nz
        );
        assert!(
            domain.x > 0.0 && domain.y > 0.0 && domain.z > 0.0,
            "domain extents must be positive, got {}",
            domain
        );

        let cell_size = DVec3::new(
            domain.x / nx as f64,
            domain.y / ny as f64,
            domain.z / nz as f64,
        );

        info!("fluid grid dimensions: {}*{}*{}", nx, ny, nz);
        info!(
            "fluid grid cell size: {}*{}*{}",
            cell_size.x, cell_size.y, cell_size.z
        );

        Self {
            nx,
            ny,
            nz,
            domain,
            cell_size,
        }
    }

    /// Total cells in the ghost-padded scalar/vector grid, `(nx+2)(ny+2)(nz+2)`.
    pub fn cell_count(&self) -> usize {
        (self.nx + 2) * (self.ny + 2) * (self.nz + 2)
    }

    /// Total nodes in the congruent-padded cell-face velocity grid,
    /// `(nx+3)(ny+3)(nz+3)`.
    ///
    /// Face velocities sit between the boundary points and the pressure
    /// ghost nodes, but not outside the ghost layer, so the padded extent is
    /// one larger per axis than the scalar grid. See Cohen and Molemaker,
    /// "A fast double precision CFD code using CUDA".
    pub fn face_count(&self) -> usize {
        (self.nx + 3) * (self.ny + 3) * (self.nz + 3)
    }

    /// Number of interior (physically real) cells, `nx*ny*nz`.
    pub fn interior_count(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Smallest cell dimension, consumed by the diffusion stability bound.
    pub fn min_cell_size(&self) -> f64 {
        self.cell_size.x.min(self.cell_size.y).min(self.cell_size.z)
    }
}
