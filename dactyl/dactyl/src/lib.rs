//! Curved keyboard key well generation.
//!
//! This umbrella crate re-exports the dactyl-* crates behind one API.
//!
//! # Quick Start
//!
//! ```no_run
//! use dactyl::prelude::*;
//!
//! let layout = KeyLayout::new(GeometryParameters::default()).unwrap();
//! let well = key_well(&layout, &WellOptions::default().with_caps(CapSize::One)).unwrap();
//! save_stl(&well, "key_well.stl", true).unwrap();
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - solids, sections, bounding boxes, axes
//! - [`transform`] - rigid transforms and axis rotations
//! - [`layout`] - parameters, curvature, placement schedule, grid traversal
//! - [`parts`] - switch plates, keycaps, web posts
//! - [`io`] - STL and JSON export
//!
//! # Feature Flags
//!
//! - `serde` - serialization of parameters and solids

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

/// Core data structures: `Solid`, `Section`, `Aabb`, `Axis`.
pub use dactyl_types as types;

/// Rigid transforms and axis rotation matrices.
pub use dactyl_transform as transform;

/// Key placement on the curved grid.
pub use dactyl_layout as layout;

/// Switch plates, keycaps and web posts.
pub use dactyl_parts as parts;

/// STL and JSON export.
pub use dactyl_io as io;

/// Common imports.
///
/// ```
/// use dactyl::prelude::*;
/// ```
pub mod prelude {
    pub use dactyl_types::{Aabb, Axis, Solid, Vector3};

    pub use dactyl_layout::{
        CurvatureStyle, GeometryParameters, GridCoordinate, KeyGrid, KeyLayout, LayoutError,
        collect,
    };

    pub use dactyl_parts::{CapSize, WellOptions, key_well, sa_cap, single_plate};

    pub use dactyl_io::save_stl;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prelude_imports() {
        use prelude::*;
        let grid = KeyGrid::new(6, 5);
        assert_eq!(grid.len(), 30);
        assert!(Solid::new().is_empty());
    }

    #[test]
    fn module_reexports() {
        let _ = types::Solid::new();
        let _ = transform::Transform3D::identity();
        let _ = layout::GeometryParameters::default();
        let _ = parts::WebDimensions::default();
        assert_eq!(io::HEADER_SIZE, 80);
    }
}
