//! Core geometry types for the dactyl keyboard generator.
//!
//! - [`Solid`] - A triangle soup that the placement pipeline moves around
//! - [`Section`] - A rectangular cross-section used to loft keycaps
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`Axis`] - One of the three coordinate axes
//!
//! # Units
//!
//! All coordinates are `f64` millimetres.
//!
//! # Coordinate System
//!
//! Right-handed: X runs across the columns, Y runs along a column (away from
//! the typist), Z points up out of the plate. Faces wind counter-clockwise
//! when viewed from outside.
//!
//! # Example
//!
//! ```
//! use dactyl_types::{Solid, Vector3};
//!
//! let mut wall = Solid::cuboid(Vector3::new(17.4, 1.5, 4.0), true);
//! wall.translate(Vector3::new(0.0, 7.95, 2.0));
//!
//! assert_eq!(wall.face_count(), 12);
//! assert!(wall.signed_volume() > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod axis;
mod bounds;
mod solid;

pub use axis::Axis;
pub use bounds::Aabb;
pub use solid::{Section, Solid};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
