//! Triangle-soup solids.

use crate::{Aabb, Axis};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A solid made of triangles.
///
/// This is the subject of the shape algebra: switch plates, keycaps and web
/// posts are built as `Solid`s at the origin and then moved into place.
/// Union is concatenation ([`merge`](Self::merge)); overlapping parts are
/// left for the slicer or CAD tool to resolve.
///
/// A solid with vertices but no faces is allowed. A single-vertex solid
/// ([`Solid::point`]) is how a point is tracked through the shape algebra.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solid {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,

    /// Triangles as indices into `vertices`, counter-clockwise from outside.
    pub faces: Vec<[u32; 3]>,
}

/// A centred, axis-aligned rectangle at height `z`.
///
/// Keycaps are lofted through a stack of these.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Section {
    /// Height of the section.
    pub z: f64,
    /// Half the extent along X.
    pub half_x: f64,
    /// Half the extent along Y.
    pub half_y: f64,
}

impl Section {
    /// Create a section.
    #[must_use]
    pub const fn new(z: f64, half_x: f64, half_y: f64) -> Self {
        Self { z, half_x, half_y }
    }

    /// Square section with the given half side.
    #[must_use]
    pub const fn square(z: f64, half: f64) -> Self {
        Self::new(z, half, half)
    }

    /// Corners counter-clockwise when viewed from +Z.
    fn corners(&self) -> [Point3<f64>; 4] {
        let (hx, hy, z) = (self.half_x, self.half_y, self.z);
        [
            Point3::new(-hx, -hy, z),
            Point3::new(hx, -hy, z),
            Point3::new(hx, hy, z),
            Point3::new(-hx, hy, z),
        ]
    }
}

impl Solid {
    /// Create an empty solid.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create an empty solid with room for the given counts.
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a solid from vertices and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// A single vertex with no faces.
    ///
    /// Placing this through the shape algebra yields the position the
    /// point lands at.
    #[must_use]
    pub fn point(position: Point3<f64>) -> Self {
        Self::from_parts(vec![position], Vec::new())
    }

    /// A box with edge lengths `size`.
    ///
    /// With `centered` the box is centred on the origin, otherwise it spans
    /// from the origin to `size`.
    ///
    /// # Example
    ///
    /// ```
    /// use dactyl_types::{Solid, Vector3};
    ///
    /// let cube = Solid::cuboid(Vector3::new(2.0, 2.0, 2.0), false);
    /// assert_eq!(cube.vertex_count(), 8);
    /// assert!((cube.signed_volume() - 8.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn cuboid(size: Vector3<f64>, centered: bool) -> Self {
        let (hx, hy, hz) = (size.x * 0.5, size.y * 0.5, size.z * 0.5);
        let mut solid = Self::loft(&[Section::new(-hz, hx, hy), Section::new(hz, hx, hy)]);
        if !centered {
            solid.translate(Vector3::new(hx, hy, hz));
        }
        solid
    }

    /// Loft through a stack of sections ordered by increasing `z`.
    ///
    /// The first section closes the bottom and the last closes the top.
    /// Returns an empty solid for fewer than two sections.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: a loft has four vertices per section, far below u32::MAX
    pub fn loft(sections: &[Section]) -> Self {
        if sections.len() < 2 {
            return Self::new();
        }

        let mut solid = Self::with_capacity(sections.len() * 4, sections.len() * 8 - 4);
        for section in sections {
            solid.vertices.extend(section.corners());
        }

        // Bottom faces down
        solid.faces.push([0, 2, 1]);
        solid.faces.push([0, 3, 2]);

        for level in 0..sections.len() - 1 {
            let lower = (level * 4) as u32;
            let upper = lower + 4;
            for j in 0..4 {
                let next = (j + 1) % 4;
                solid.faces.push([lower + j, lower + next, upper + next]);
                solid.faces.push([lower + j, upper + next, upper + j]);
            }
        }

        let top = ((sections.len() - 1) * 4) as u32;
        solid.faces.push([top, top + 1, top + 2]);
        solid.faces.push([top, top + 2, top + 3]);

        solid
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// True if the solid has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Translate every vertex by `offset`.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for vertex in &mut self.vertices {
            *vertex += offset;
        }
    }

    /// Mirror across the plane through the origin normal to `axis`.
    ///
    /// Winding is reversed so faces still point outward.
    #[must_use]
    pub fn mirrored(&self, axis: Axis) -> Self {
        let i = axis.index();
        let mut result = self.clone();
        for vertex in &mut result.vertices {
            vertex[i] = -vertex[i];
        }
        for face in &mut result.faces {
            face.swap(1, 2);
        }
        result
    }

    /// Append another solid's vertices and faces.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: vertex indices are u32 throughout
    pub fn merge(&mut self, other: &Self) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.faces.extend(
            other
                .faces
                .iter()
                .map(|f| [f[0] + offset, f[1] + offset, f[2] + offset]),
        );
    }

    /// Union of two solids.
    #[must_use]
    pub fn union(mut self, other: &Self) -> Self {
        self.merge(other);
        self
    }

    /// Bounding box of all vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter())
    }

    /// Signed volume by the divergence theorem.
    ///
    /// Positive for a closed solid with outward faces. Overlapping parts of
    /// a union are counted twice.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let sum: f64 = self
            .faces
            .iter()
            .map(|&[a, b, c]| {
                let v0 = self.vertices[a as usize].coords;
                let v1 = self.vertices[b as usize].coords;
                let v2 = self.vertices[c as usize].coords;
                v0.dot(&v1.cross(&v2))
            })
            .sum();
        sum / 6.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn centered_cuboid_bounds() {
        let solid = Solid::cuboid(Vector3::new(17.4, 1.5, 4.0), true);
        let bounds = solid.bounds();

        assert_relative_eq!(bounds.min.x, -8.7, epsilon = 1e-12);
        assert_relative_eq!(bounds.max.y, 0.75, epsilon = 1e-12);
        assert_relative_eq!(bounds.max.z, 2.0, epsilon = 1e-12);
        assert_relative_eq!(solid.signed_volume(), 17.4 * 1.5 * 4.0, epsilon = 1e-9);
    }

    #[test]
    fn corner_cuboid_starts_at_origin() {
        let solid = Solid::cuboid(Vector3::new(1.0, 2.0, 3.0), false);
        let bounds = solid.bounds();

        assert_relative_eq!(bounds.min.coords.norm(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.max.z, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn loft_frustum_volume() {
        // Square frustum: V = h/3 * (A1 + A2 + sqrt(A1*A2))
        let solid = Solid::loft(&[Section::square(0.0, 2.0), Section::square(3.0, 1.0)]);
        let (a1, a2) = (16.0_f64, 4.0_f64);
        let expected = 3.0 / 3.0 * (a1 + a2 + (a1 * a2).sqrt());

        assert_eq!(solid.vertex_count(), 8);
        assert_eq!(solid.face_count(), 12);
        assert_relative_eq!(solid.signed_volume(), expected, epsilon = 1e-9);
    }

    #[test]
    fn loft_needs_two_sections() {
        assert!(Solid::loft(&[Section::square(0.0, 1.0)]).is_empty());
        assert!(Solid::loft(&[]).is_empty());
    }

    #[test]
    fn loft_three_sections_face_count() {
        let solid = Solid::loft(&[
            Section::square(0.0, 3.0),
            Section::square(1.0, 2.5),
            Section::new(2.0, 1.0, 2.0),
        ]);
        assert_eq!(solid.face_count(), 2 + 8 + 8 + 2);
        assert!(solid.signed_volume() > 0.0);
    }

    #[test]
    fn mirror_keeps_volume_positive() {
        let mut solid = Solid::cuboid(Vector3::new(1.0, 1.0, 1.0), false);
        solid.translate(Vector3::new(2.0, 0.0, 0.0));
        let mirrored = solid.mirrored(Axis::X);

        assert_relative_eq!(mirrored.bounds().max.x, -2.0, epsilon = 1e-12);
        assert_relative_eq!(mirrored.signed_volume(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn merge_offsets_indices() {
        let a = Solid::cuboid(Vector3::new(1.0, 1.0, 1.0), false);
        let b = a.clone();
        let merged = a.union(&b);

        assert_eq!(merged.vertex_count(), 16);
        assert_eq!(merged.face_count(), 24);
        assert!(merged.faces[12..].iter().all(|f| f.iter().all(|&i| i >= 8)));
    }

    #[test]
    fn point_has_no_faces() {
        let p = Solid::point(Point3::new(1.0, 2.0, 3.0));
        assert_eq!(p.vertex_count(), 1);
        assert_eq!(p.face_count(), 0);
        assert!(!p.is_empty());
    }
}
