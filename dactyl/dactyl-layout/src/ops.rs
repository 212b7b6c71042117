//! The two operator sets the placement schedule is replayed against.

use dactyl_transform::{Transform3D, rotate_vector, rotation_matrix};
use dactyl_types::{Axis, Solid};
use nalgebra::Vector3;

use crate::placement::PlacementOps;

/// Shape algebra: moves every vertex of a [`Solid`].
///
/// Rotation goes through the degree-based CSG rotate primitive
/// ([`Transform3D::rotation_degrees`]), so the radian angle of the schedule
/// is converted here.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolidOps;

impl PlacementOps for SolidOps {
    type Subject = Solid;

    fn translate(&self, mut solid: Solid, offset: Vector3<f64>) -> Solid {
        Transform3D::from_translation(offset).apply_in_place(&mut solid);
        solid
    }

    fn rotate(&self, mut solid: Solid, axis: Axis, angle: f64) -> Solid {
        Transform3D::rotation_degrees(axis, angle.to_degrees()).apply_in_place(&mut solid);
        solid
    }
}

/// Vector algebra: translation is vector addition, rotation is a 3x3
/// matrix product in radians.
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorOps;

impl PlacementOps for VectorOps {
    type Subject = Vector3<f64>;

    fn translate(&self, position: Vector3<f64>, offset: Vector3<f64>) -> Vector3<f64> {
        position + offset
    }

    fn rotate(&self, position: Vector3<f64>, axis: Axis, angle: f64) -> Vector3<f64> {
        rotate_vector(&rotation_matrix(axis, angle), position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use dactyl_types::Point3;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn solid_and_vector_rotate_alike() {
        let p = Vector3::new(1.0, 2.0, 3.0);
        for axis in Axis::ALL {
            let v = VectorOps.rotate(p, axis, 0.35);
            let s = SolidOps.rotate(Solid::point(Point3::from(p)), axis, 0.35);
            assert_relative_eq!(s.vertices[0].coords, v, epsilon = 1e-12);
        }
    }

    #[test]
    fn vector_quarter_turn_about_x() {
        let v = VectorOps.rotate(Vector3::z(), Axis::X, FRAC_PI_2);
        assert_relative_eq!(v, -Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn solid_translate_keeps_faces() {
        let cube = Solid::cuboid(Vector3::new(1.0, 1.0, 1.0), true);
        let moved = SolidOps.translate(cube.clone(), Vector3::new(0.0, 0.0, 5.0));
        assert_eq!(moved.faces, cube.faces);
        assert_relative_eq!(moved.bounds().center().z, 5.0, epsilon = 1e-12);
    }
}
