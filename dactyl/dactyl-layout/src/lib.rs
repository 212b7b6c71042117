//! Key placement for a curved keyboard plate.
//!
//! Maps a logical (column, row) key grid onto a curved surface. Given a grid
//! coordinate, the layout produces either a placed solid or the raw 3D
//! position of a point, through one shared placement schedule.
//!
//! # Pipeline
//!
//! ```text
//! GeometryParameters -> CurvatureModel -> PlacementSchedule -> SolidOps / VectorOps -> collect
//! ```
//!
//! - [`GeometryParameters`] - grid size, curvature, tenting, offsets, style
//! - [`CurvatureModel`] - row/column radii derived once
//! - [`PlacementSchedule`] - the translate/rotate sequence for one key
//! - [`PlacementOps`] - operator set the schedule is replayed against
//!   ([`SolidOps`] for shapes, [`VectorOps`] for positions)
//! - [`KeyLayout`] - the facades [`place_shape`](KeyLayout::place_shape)
//!   and [`position_of`](KeyLayout::position_of)
//! - [`collect`] - unite a placed shape over every kept grid cell
//!
//! # Example
//!
//! ```
//! use dactyl_layout::{GeometryParameters, KeyLayout, collect};
//! use dactyl_types::{Solid, Vector3};
//!
//! let layout = KeyLayout::new(GeometryParameters::default()).unwrap();
//! let grid = layout.grid();
//!
//! let wells = collect(
//!     grid,
//!     |cell, shape| layout.place_shape(cell.column, cell.row, shape),
//!     || Solid::cuboid(Vector3::new(17.4, 17.4, 4.0), true),
//!     grid.thumb_cluster_carve_out(),
//! )
//! .unwrap();
//!
//! assert_eq!(wells.vertex_count(), 26 * 8);
//! ```
//!
//! # Concurrency
//!
//! Everything here is a pure function of its inputs. A [`KeyLayout`] is
//! read-only after construction and can be shared across threads;
//! [`collect_parallel`] does exactly that.

#![warn(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod curvature;
mod error;
mod grid;
mod layout;
mod ops;
mod params;
mod placement;
mod style;

pub use curvature::CurvatureModel;
pub use error::{LayoutError, LayoutResult};
pub use grid::{
    BOTTOM_ROW_COLUMNS, GridCoordinate, KeyGrid, Unite, collect, collect_in_order,
    collect_parallel, positions,
};
pub use layout::KeyLayout;
pub use ops::{SolidOps, VectorOps};
pub use params::{ColumnOffsets, GeometryParameters, SwitchDimensions};
pub use placement::{PlacementOps, PlacementSchedule, PlacementStep, apply_key_geometry};
pub use style::CurvatureStyle;
