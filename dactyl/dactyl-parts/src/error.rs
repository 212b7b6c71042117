//! Error types for part construction.

use dactyl_layout::LayoutError;
use thiserror::Error;

/// Result type for part construction.
pub type PartsResult<T> = Result<T, PartsError>;

/// Errors that can occur while building or placing parts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PartsError {
    /// No keycap profile exists for this width.
    #[error("no keycap profile for {units}u")]
    UnknownCapSize {
        /// Requested width in key units.
        units: f64,
    },

    /// Placing the parts on the layout failed.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}
