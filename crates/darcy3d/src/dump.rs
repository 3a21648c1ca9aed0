//! Text dumps of grid fields for debugging.
//!
//! Scalar dumps include the ghost layers, slab by slab from the top z down;
//! vector dumps cover interior cells only. The asymmetry is deliberate:
//! ghost values carry the boundary conditions a scalar field is debugged
//! against, while the velocity interior is what the CFL scan sees.
//!
//! Dumps are off the critical path. The file-writing variants log and skip
//! on I/O failure instead of failing the run.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::error;

use crate::fields::{ScalarField, VectorField};
use crate::index::CellIndexer;

/// Write a scalar field including its ghost layers.
///
/// Slabs are printed top to bottom (`z = nz` down to `z = -1`), each as a
/// `y` by `x` table of tab-separated values over the padded range.
pub fn write_scalar_field(
    out: &mut impl Write,
    cells: &CellIndexer,
    field: &ScalarField,
) -> io::Result<()> {
    for z in (-1..=cells.nz()).rev() {
        writeln!(out, "z = {}", z)?;
        for y in -1..=cells.ny() {
            for x in -1..=cells.nx() {
                write!(out, "{:.6}\t", field[cells.offset(x, y, z)])?;
            }
            writeln!(out)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write a scalar field with a description header line.
pub fn write_scalar_field_described(
    out: &mut impl Write,
    cells: &CellIndexer,
    field: &ScalarField,
    desc: &str,
) -> io::Result<()> {
    writeln!(out, "\n{}:", desc)?;
    write_scalar_field(out, cells, field)
}

/// Write a vector field over interior cells only.
///
/// Each cell prints as a comma-separated `x,y,z` triplet, tab-separated
/// along rows; ghost nodes are omitted.
pub fn write_vector_field(
    out: &mut impl Write,
    cells: &CellIndexer,
    field: &VectorField,
) -> io::Result<()> {
    for z in 0..cells.nz() {
        for y in 0..cells.ny() {
            for x in 0..cells.nx() {
                let v = field[cells.offset(x, y, z)];
                write!(out, "{:.6},{:.6},{:.6}\t", v.x, v.y, v.z)?;
            }
            writeln!(out)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Dump a scalar field to a file, logging and skipping on failure.
pub fn dump_scalar_to_file(path: &Path, cells: &CellIndexer, field: &ScalarField) {
    match File::create(path) {
        Ok(file) => {
            let mut out = BufWriter::new(file);
            if let Err(e) = write_scalar_field(&mut out, cells, field) {
                error!("could not write field dump to {}: {}", path.display(), e);
            }
        }
        Err(e) => error!("could not open {}: {}", path.display(), e),
    }
}

/// Dump a vector field to a file, logging and skipping on failure.
pub fn dump_vector_to_file(path: &Path, cells: &CellIndexer, field: &VectorField) {
    match File::create(path) {
        Ok(file) => {
            let mut out = BufWriter::new(file);
            if let Err(e) = write_vector_field(&mut out, cells, field) {
                error!("could not write field dump to {}: {}", path.display(), e);
            }
        }
        Err(e) => error!("could not open {}: {}", path.display(), e),
    }
}
