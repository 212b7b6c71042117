//! STL export.
//!
//! Solids are written as-is: overlapping parts stay overlapping and the
//! slicer resolves them.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use dactyl_types::{Point3, Solid, Vector3};
use tracing::info;

use crate::error::{IoError, IoResult};

/// Size of the binary STL header.
pub const HEADER_SIZE: usize = 80;

/// Bytes per triangle in binary STL: normal, three vertices, attribute count.
pub const TRIANGLE_SIZE: usize = 50;

/// Save `solid` to an STL file.
///
/// # Errors
///
/// Returns an error if the file cannot be written or a face refers to a
/// missing vertex.
///
/// # Example
///
/// ```no_run
/// use dactyl_io::save_stl;
/// use dactyl_types::{Solid, Vector3};
///
/// let cube = Solid::cuboid(Vector3::new(1.0, 1.0, 1.0), true);
/// save_stl(&cube, "cube.stl", true).unwrap(); // Binary
/// save_stl(&cube, "cube_ascii.stl", false).unwrap(); // ASCII
/// ```
pub fn save_stl<P: AsRef<Path>>(solid: &Solid, path: P, binary: bool) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| IoError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    if binary {
        write_stl_binary(solid, &mut writer)?;
    } else {
        write_stl_ascii(solid, &mut writer)?;
    }
    writer.flush()?;

    info!(
        path = %path.display(),
        faces = solid.face_count(),
        binary,
        "STL written"
    );
    Ok(())
}

/// Write `solid` as binary STL.
///
/// # Errors
///
/// Returns an error on write failure, a face referring to a missing vertex,
/// or more than `u32::MAX` faces.
pub fn write_stl_binary<W: Write>(solid: &Solid, mut writer: W) -> IoResult<()> {
    let mut header = [b' '; HEADER_SIZE];
    let text = b"Binary STL generated by dactyl-io";
    header[..text.len()].copy_from_slice(text);
    writer.write_all(&header)?;

    let face_count = u32::try_from(solid.face_count()).map_err(|_| IoError::TooManyFaces {
        count: solid.face_count(),
    })?;
    writer.write_all(&face_count.to_le_bytes())?;

    for face in 0..solid.faces.len() {
        let [v0, v1, v2] = triangle(solid, face)?;
        write_vector_binary(&mut writer, &unit_normal(v0, v1, v2))?;
        for vertex in [v0, v1, v2] {
            write_vector_binary(&mut writer, &vertex.coords)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

/// Write `solid` as ASCII STL.
///
/// # Errors
///
/// Returns an error on write failure or a face referring to a missing
/// vertex.
pub fn write_stl_ascii<W: Write>(solid: &Solid, mut writer: W) -> IoResult<()> {
    writeln!(writer, "solid dactyl")?;

    for face in 0..solid.faces.len() {
        let [v0, v1, v2] = triangle(solid, face)?;
        let n = unit_normal(v0, v1, v2);

        writeln!(writer, "  facet normal {:.6e} {:.6e} {:.6e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in [v0, v1, v2] {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid dactyl")?;
    Ok(())
}

fn triangle(solid: &Solid, face: usize) -> IoResult<[&Point3<f64>; 3]> {
    let indices = solid.faces[face];
    let lookup = |index: u32| {
        solid
            .vertices
            .get(index as usize)
            .ok_or(IoError::InvalidFace {
                face,
                index,
                vertex_count: solid.vertex_count(),
            })
    };
    Ok([lookup(indices[0])?, lookup(indices[1])?, lookup(indices[2])?])
}

/// Unit normal of a counter-clockwise triangle, zero if degenerate.
fn unit_normal(v0: &Point3<f64>, v1: &Point3<f64>, v2: &Point3<f64>) -> Vector3<f64> {
    (v1 - v0)
        .cross(&(v2 - v0))
        .try_normalize(f64::EPSILON)
        .unwrap_or_else(Vector3::zeros)
}

fn write_vector_binary<W: Write>(writer: &mut W, v: &Vector3<f64>) -> IoResult<()> {
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: STL stores f32
    let coords = [v.x as f32, v.y as f32, v.z as f32];
    for c in coords {
        writer.write_all(&c.to_le_bytes())?;
    }
    Ok(())
}
