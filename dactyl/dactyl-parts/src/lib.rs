//! Parts of the key well and their placement on the curved grid.
//!
//! - [`single_plate`] - switch mount frame
//! - [`sa_cap`] - SA profile keycap in 1u, 1.5u and 2u
//! - [`web_post`] - connector anchor at web height
//! - [`key_holes`], [`caps`], [`key_well`] - the parts placed over the grid
//!
//! Parts are built at the origin; [`KeyLayout`](dactyl_layout::KeyLayout)
//! moves them into place.
//!
//! # Example
//!
//! ```
//! use dactyl_layout::{GeometryParameters, KeyLayout};
//! use dactyl_parts::{CapSize, WellOptions, key_well};
//!
//! let layout = KeyLayout::new(GeometryParameters::default()).unwrap();
//! let well = key_well(&layout, &WellOptions::default().with_caps(CapSize::One)).unwrap();
//! assert!(!well.is_empty());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod assembly;
mod error;
mod keycap;
mod plate;

pub use assembly::{WellOptions, caps, key_holes, key_well};
pub use error::{PartsError, PartsResult};
pub use keycap::{CAP_CLEARANCE, CapSize, sa_cap};
pub use plate::{PLATE_WALL, WebDimensions, single_plate, web_post};
