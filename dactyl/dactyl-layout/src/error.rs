//! Error types for key placement.

use crate::CurvatureStyle;
use thiserror::Error;

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors raised while deriving or applying the key layout.
///
/// All of them come from configuration, so none is worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A parameter is out of range or could not be parsed.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong.
        reason: String,
    },

    /// The curvature style is named but has no placement schedule.
    #[error("curvature style '{style}' is not supported")]
    UnsupportedStyle {
        /// The requested style.
        style: CurvatureStyle,
    },

    /// The skip predicate rejected every cell of the grid.
    #[error("no cells left to place in the {columns}x{rows} grid")]
    EmptyGrid {
        /// Number of columns in the grid.
        columns: usize,
        /// Number of rows in the grid.
        rows: usize,
    },
}

impl LayoutError {
    /// Create an `InvalidConfiguration` error with the given reason.
    #[must_use]
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
