//! 4x4 affine transforms applied to whole solids.

use dactyl_types::{Axis, Solid};
use nalgebra::{Matrix4, Point3, Vector3};

/// A rigid transform of a solid, stored as a homogeneous 4x4 matrix.
///
/// # Example
///
/// ```
/// use dactyl_transform::Transform3D;
/// use dactyl_types::Axis;
///
/// let lift = Transform3D::translation(0.0, 0.0, 19.0);
/// let tent = Transform3D::rotation_degrees(Axis::Y, 15.0);
/// let placed = lift.then(&tent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D {
    matrix: Matrix4<f64>,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Wrap an existing homogeneous matrix.
    #[must_use]
    pub const fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    /// The identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `(tx, ty, tz)`.
    #[must_use]
    pub fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        Self::from_translation(Vector3::new(tx, ty, tz))
    }

    /// Translation by a vector.
    #[must_use]
    pub fn from_translation(offset: Vector3<f64>) -> Self {
        Self {
            matrix: Matrix4::new_translation(&offset),
        }
    }

    /// Rotation about a coordinate axis.
    ///
    /// # Arguments
    ///
    /// * `axis` - Axis to rotate about
    /// * `angle` - Rotation angle in radians
    #[must_use]
    pub fn rotation(axis: Axis, angle: f64) -> Self {
        let unit = match axis {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        };
        let matrix = Matrix4::from_axis_angle(&unit, angle);
        Self { matrix }
    }

    /// CSG-style rotation about a coordinate axis, angle in degrees.
    #[must_use]
    pub fn rotation_degrees(axis: Axis, degrees: f64) -> Self {
        Self::rotation(axis, degrees.to_radians())
    }

    /// The underlying matrix.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// Compose: apply `self` first, then `other`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    /// Transform a point (translation applies).
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.matrix.transform_point(point)
    }

    /// Transform a direction (translation ignored).
    #[must_use]
    pub fn transform_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.matrix.transform_vector(vector)
    }

    /// Transform every vertex of `solid` into a new solid.
    #[must_use]
    pub fn apply_to_solid(&self, solid: &Solid) -> Solid {
        let mut result = solid.clone();
        self.apply_in_place(&mut result);
        result
    }

    /// Transform every vertex of `solid` in place.
    ///
    /// Faces are untouched; rigid transforms keep the winding valid.
    pub fn apply_in_place(&self, solid: &mut Solid) {
        for vertex in &mut solid.vertices {
            *vertex = self.transform_point(vertex);
        }
    }
}
