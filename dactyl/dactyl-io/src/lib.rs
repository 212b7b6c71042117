//! Export for the curved key well.
//!
//! - **STL** - binary and ASCII, via [`save_stl`]
//! - **JSON** - placed key positions, via [`save_positions_json`]
//!
//! Writers take any [`std::io::Write`], so output can go to memory as well
//! as to files.
//!
//! # Example
//!
//! ```
//! use dactyl_io::write_stl_binary;
//! use dactyl_types::{Solid, Vector3};
//!
//! let cube = Solid::cuboid(Vector3::new(1.0, 1.0, 1.0), true);
//! let mut bytes = Vec::new();
//! write_stl_binary(&cube, &mut bytes).unwrap();
//! assert_eq!(bytes.len(), 84 + 50 * 12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod positions;
mod stl;

pub use error::{IoError, IoResult};
pub use positions::{KeyPosition, save_positions_json, write_positions_json};
pub use stl::{HEADER_SIZE, TRIANGLE_SIZE, save_stl, write_stl_ascii, write_stl_binary};
