//! Transforms for the two placement algebras.
//!
//! - [`Transform3D`] moves whole [`Solid`](dactyl_types::Solid)s. Its rotate
//!   primitive takes degrees, like a CSG `rotate(a, v)`.
//! - [`rotation_matrix`] / [`rotate_vector`] rotate a bare 3-vector with an
//!   explicit 3x3 matrix, in radians. Matrices are plain values; nothing is
//!   cached or shared.
//!
//! Both agree: rotating a point about an axis by `a` radians gives the same
//! coordinates whether it goes through `Transform3D::rotation_degrees(axis,
//! a.to_degrees())` or `rotate_vector(&rotation_matrix(axis, a), p)`.
//!
//! # Example
//!
//! ```
//! use dactyl_transform::{Transform3D, rotate_vector, rotation_matrix};
//! use dactyl_types::{Axis, Solid, Point3, Vector3};
//!
//! let angle = 0.3_f64;
//! let p = Vector3::new(0.0, 1.0, 2.0);
//!
//! let by_matrix = rotate_vector(&rotation_matrix(Axis::X, angle), p);
//!
//! let solid = Solid::point(Point3::from(p));
//! let by_transform = Transform3D::rotation_degrees(Axis::X, angle.to_degrees())
//!     .apply_to_solid(&solid);
//!
//! assert!((by_transform.vertices[0].coords - by_matrix).norm() < 1e-12);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod rotation;
mod transform;

pub use rotation::{rotate_vector, rotation_matrix};
pub use transform::Transform3D;
