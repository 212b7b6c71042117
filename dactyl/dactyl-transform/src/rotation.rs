//! 3x3 rotation matrices for raw coordinate vectors.

use dactyl_types::Axis;
use nalgebra::{Matrix3, Vector3};

/// Rotation matrix about a coordinate axis.
///
/// Right-handed, column-vector convention: the result multiplies a vector
/// from the left.
///
/// # Arguments
///
/// * `axis` - Axis to rotate about
/// * `angle` - Rotation angle in radians
#[must_use]
pub fn rotation_matrix(axis: Axis, angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    #[rustfmt::skip]
    let matrix = match axis {
        Axis::X => Matrix3::new(
            1.0, 0.0, 0.0,
            0.0,   c,  -s,
            0.0,   s,   c,
        ),
        Axis::Y => Matrix3::new(
              c, 0.0,   s,
            0.0, 1.0, 0.0,
             -s, 0.0,   c,
        ),
        Axis::Z => Matrix3::new(
              c,  -s, 0.0,
              s,   c, 0.0,
            0.0, 0.0, 1.0,
        ),
    };
    matrix
}

/// Multiply `vector` by `matrix`.
#[inline]
#[must_use]
pub fn rotate_vector(matrix: &Matrix3<f64>, vector: Vector3<f64>) -> Vector3<f64> {
    matrix * vector
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn x_quarter_turn_maps_y_to_z() {
        let r = rotate_vector(&rotation_matrix(Axis::X, FRAC_PI_2), Vector3::y());
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn y_quarter_turn_maps_z_to_x() {
        let r = rotate_vector(&rotation_matrix(Axis::Y, FRAC_PI_2), Vector3::z());
        assert_relative_eq!(r.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(r.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn z_quarter_turn_maps_x_to_y() {
        let r = rotate_vector(&rotation_matrix(Axis::Z, FRAC_PI_2), Vector3::x());
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn matrices_are_orthonormal() {
        for axis in Axis::ALL {
            let m = rotation_matrix(axis, 0.7);
            assert_relative_eq!(m * m.transpose(), Matrix3::identity(), epsilon = 1e-12);
            assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn opposite_angles_cancel() {
        let v = Vector3::new(1.0, -2.0, 3.5);
        let there = rotate_vector(&rotation_matrix(Axis::Y, 0.4), v);
        let back = rotate_vector(&rotation_matrix(Axis::Y, -0.4), there);
        assert_relative_eq!(back, v, epsilon = 1e-12);
    }
}
