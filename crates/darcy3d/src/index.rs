//! Coordinate-to-storage index mapping for the two padded grids.
//!
//! The scalar/vector grid and the cell-face velocity grid share the same
//! interior cell counts but differ in ghost padding: the scalar grid spans
//! `-1..=n` per axis (extent `n+2`), the face grid spans `-1..=n+1` (extent
//! `n+3`). The extents differ, so an offset computed for one grid must never
//! address the other. Each grid therefore gets its own indexer and its own
//! opaque offset type, making that mixup a compile-time error.

use crate::geometry::GridGeometry;

/// Flat offset into a ghost-padded cell-centered array.
///
/// Only [`CellIndexer::offset`] produces these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellOffset(pub(crate) usize);

impl CellOffset {
    /// Raw array offset.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

/// Flat offset into a congruent-padded face-velocity array.
///
/// Only [`FaceIndexer::offset`] produces these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceOffset(pub(crate) usize);

impl FaceOffset {
    /// Raw array offset.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

/// Maps signed grid coordinates to offsets in the scalar/vector grid.
///
/// Valid coordinates are `-1..=n` per axis; the ghost layers sit at `-1`
/// and `n`. Callers keep coordinates in range by construction (loop
/// bounds); bounds are checked only in debug builds so the hot path stays
/// branch-free.
#[derive(Clone, Copy, Debug)]
pub struct CellIndexer {
    nx: i32,
    ny: i32,
    nz: i32,
}

impl CellIndexer {
    /// Build the indexer for the given geometry.
    pub fn new(geometry: &GridGeometry) -> Self {
        Self {
            nx: geometry.nx as i32,
            ny: geometry.ny as i32,
            nz: geometry.nz as i32,
        }
    }

    /// Interior cell count in X.
    #[inline]
    pub fn nx(&self) -> i32 {
        self.nx
    }

    /// Interior cell count in Y.
    #[inline]
    pub fn ny(&self) -> i32 {
        self.ny
    }

    /// Interior cell count in Z.
    #[inline]
    pub fn nz(&self) -> i32 {
        self.nz
    }

    /// Flat offset of the cell at `(x, y, z)`.
    ///
    /// The `+1` shift places the ghost layer at non-negative offsets, so the
    /// full padded range maps into `[0, (nx+2)(ny+2)(nz+2))`.
    #[inline]
    pub fn offset(&self, x: i32, y: i32, z: i32) -> CellOffset {
        debug_assert!(
            x >= -1 && x <= self.nx && y >= -1 && y <= self.ny && z >= -1 && z <= self.nz,
            "cell coordinate ({}, {}, {}) outside padded range",
            x,
            y,
            z
        );
        let w = (self.nx + 2) as usize;
        let h = (self.ny + 2) as usize;
        CellOffset((x + 1) as usize + w * (y + 1) as usize + w * h * (z + 1) as usize)
    }

    /// Total cells in the padded grid.
    pub fn len(&self) -> usize {
        ((self.nx + 2) * (self.ny + 2) * (self.nz + 2)) as usize
    }

    /// True if the padded grid has no cells (never, for valid geometry).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of interior cells, `nx*ny*nz`.
    pub fn interior_count(&self) -> usize {
        (self.nx * self.ny * self.nz) as usize
    }

    /// True if `(x, y, z)` is a physically real cell rather than a ghost node.
    #[inline]
    pub fn is_interior(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0 && x < self.nx && y >= 0 && y < self.ny && z >= 0 && z < self.nz
    }

    /// Iterate interior cell coordinates, z-outer, x-inner.
    ///
    /// This is the canonical sweep order for stability and residual scans;
    /// ghost nodes are never visited.
    pub fn interior(&self) -> impl Iterator<Item = (i32, i32, i32)> {
        let (nx, ny, nz) = (self.nx, self.ny, self.nz);
        (0..nz).flat_map(move |z| (0..ny).flat_map(move |y| (0..nx).map(move |x| (x, y, z))))
    }
}

/// Maps signed grid coordinates to offsets in the cell-face velocity grid.
///
/// Face velocities live at the lowest corner of their cell, at coordinates
/// `0..=n` per axis, and stay addressable one cell beyond the interior on
/// the positive side; with the ghost layer the valid range is `-1..=n+1`
/// (extent `n+3` per axis).
#[derive(Clone, Copy, Debug)]
pub struct FaceIndexer {
    nx: i32,
    ny: i32,
    nz: i32,
}

impl FaceIndexer {
    /// Build the indexer for the given geometry.
    pub fn new(geometry: &GridGeometry) -> Self {
        Self {
            nx: geometry.nx as i32,
            ny: geometry.ny as i32,
            nz: geometry.nz as i32,
        }
    }

    /// Flat offset of the face node at `(x, y, z)`.
    #[inline]
    pub fn offset(&self, x: i32, y: i32, z: i32) -> FaceOffset {
        debug_assert!(
            x >= -1
                && x <= self.nx + 1
                && y >= -1
                && y <= self.ny + 1
                && z >= -1
                && z <= self.nz + 1,
            "face coordinate ({}, {}, {}) outside padded range",
            x,
            y,
            z
        );
        let w = (self.nx + 3) as usize;
        let h = (self.ny + 3) as usize;
        FaceOffset((x + 1) as usize + w * (y + 1) as usize + w * h * (z + 1) as usize)
    }

    /// Total nodes in the padded face grid.
    pub fn len(&self) -> usize {
        ((self.nx + 3) * (self.ny + 3) * (self.nz + 3)) as usize
    }

    /// True if the padded face grid has no nodes (never, for valid geometry).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use std::collections::HashSet;

    fn geom(nx: usize, ny: usize, nz: usize) -> GridGeometry {
        GridGeometry::new((nx, ny, nz), DVec3::new(nx as f64, ny as f64, nz as f64))
    }

    #[test]
    fn test_cell_offset_origin_and_strides() {
        let cells = CellIndexer::new(&geom(4, 5, 6));
        // Ghost corner maps to offset 0.
        assert_eq!(cells.offset(-1, -1, -1).get(), 0);
        // X stride 1, Y stride nx+2, Z stride (nx+2)(ny+2).
        assert_eq!(cells.offset(0, -1, -1).get(), 1);
        assert_eq!(cells.offset(-1, 0, -1).get(), 6);
        assert_eq!(cells.offset(-1, -1, 0).get(), 6 * 7);
        assert_eq!(cells.offset(4, 5, 6).get(), cells.len() - 1);
    }

    #[test]
    fn test_cell_offsets_cover_padded_range_exhaustive() {
        let cells = CellIndexer::new(&geom(4, 3, 2));
        let mut seen = HashSet::new();
        for z in -1..=cells.nz() {
            for y in -1..=cells.ny() {
                for x in -1..=cells.nx() {
                    let off = cells.offset(x, y, z).get();
                    assert!(off < cells.len());
                    assert!(seen.insert(off), "duplicate offset {} at ({},{},{})", off, x, y, z);
                }
            }
        }
        assert_eq!(seen.len(), cells.len());
    }

    #[test]
    fn test_face_offsets_cover_padded_range_exhaustive() {
        let faces = FaceIndexer::new(&geom(3, 2, 4));
        let mut seen = HashSet::new();
        for z in -1..=(4 + 1) {
            for y in -1..=(2 + 1) {
                for x in -1..=(3 + 1) {
                    let off = faces.offset(x, y, z).get();
                    assert!(off < faces.len());
                    assert!(seen.insert(off));
                }
            }
        }
        assert_eq!(seen.len(), faces.len());
    }

    #[test]
    fn test_face_grid_is_wider_than_cell_grid() {
        let g = geom(4, 4, 4);
        let cells = CellIndexer::new(&g);
        let faces = FaceIndexer::new(&g);
        assert_eq!(cells.len(), 6 * 6 * 6);
        assert_eq!(faces.len(), 7 * 7 * 7);
        // Same coordinate, different offsets past the first row.
        assert_ne!(cells.offset(0, 1, 0).get(), faces.offset(0, 1, 0).get());
    }

    #[test]
    fn test_is_interior() {
        let cells = CellIndexer::new(&geom(4, 4, 4));
        assert!(cells.is_interior(0, 0, 0));
        assert!(cells.is_interior(3, 3, 3));
        assert!(!cells.is_interior(-1, 0, 0));
        assert!(!cells.is_interior(4, 0, 0));
        assert!(!cells.is_interior(0, 4, 0));
        assert!(!cells.is_interior(0, 0, -1));
    }

    #[test]
    fn test_interior_iterator_order_and_count() {
        let cells = CellIndexer::new(&geom(2, 2, 2));
        let coords: Vec<_> = cells.interior().collect();
        assert_eq!(coords.len(), cells.interior_count());
        assert_eq!(coords[0], (0, 0, 0));
        assert_eq!(coords[1], (1, 0, 0)); // x varies fastest
        assert_eq!(coords[2], (0, 1, 0));
        assert_eq!(coords[4], (0, 0, 1)); // z varies slowest
        assert!(coords.iter().all(|&(x, y, z)| cells.is_interior(x, y, z)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside padded range")]
    fn test_out_of_range_cell_coordinate_panics_in_debug() {
        let cells = CellIndexer::new(&geom(4, 4, 4));
        let _ = cells.offset(5, 0, 0);
    }
}
