//! Geometry parameters for the curved key well.
//!
//! [`GeometryParameters`] is built once (usually from a config file), checked
//! with [`validate`](GeometryParameters::validate), and read-only afterwards.
//!
//! # Presets
//!
//! [`GeometryParameters::default()`] is the classic 6x5 Dactyl layout:
//! 15 degrees of row curvature, 5 degrees of column curvature, 15 degrees
//! of tenting, centred on the third column.
//!
//! # Example
//!
//! ```
//! use dactyl_layout::{CurvatureStyle, GeometryParameters};
//!
//! let params = GeometryParameters::default()
//!     .with_grid(6, 6)
//!     .with_tenting_angle(0.3);
//!
//! assert!(params.validate().is_ok());
//! assert_eq!(params.curvature_style(), CurvatureStyle::Orthographic);
//! ```

use std::f64::consts::PI;

use nalgebra::Vector3;

use crate::error::{LayoutError, LayoutResult};
use crate::grid::KeyGrid;
use crate::style::CurvatureStyle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Switch and keycap dimensions that feed the curvature radii.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwitchDimensions {
    /// Width of the switch cutout (X).
    pub keyswitch_width: f64,

    /// Height of the switch cutout (Y).
    pub keyswitch_height: f64,

    /// Thickness of the switch plate.
    pub plate_thickness: f64,

    /// Height of an SA profile keycap above the plate.
    pub sa_profile_key_height: f64,
}

impl Default for SwitchDimensions {
    fn default() -> Self {
        Self {
            keyswitch_width: 14.4,
            keyswitch_height: 14.4,
            plate_thickness: 4.0,
            sa_profile_key_height: 12.7,
        }
    }
}

impl SwitchDimensions {
    /// Border added around the cutout on each axis.
    pub const MOUNT_BORDER: f64 = 3.0;

    /// Outer width of one switch mount.
    #[inline]
    #[must_use]
    pub fn mount_width(&self) -> f64 {
        self.keyswitch_width + Self::MOUNT_BORDER
    }

    /// Outer height of one switch mount.
    #[inline]
    #[must_use]
    pub fn mount_height(&self) -> f64 {
        self.keyswitch_height + Self::MOUNT_BORDER
    }

    /// Height of a keycap top above the plate bottom.
    #[inline]
    #[must_use]
    pub fn cap_top_height(&self) -> f64 {
        self.plate_thickness + self.sa_profile_key_height
    }
}

/// Per-column offsets for finger length.
///
/// An exact lookup, not a curve: the middle-finger column gets one offset,
/// every column from `outer_from` on gets another, the rest get none.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColumnOffsets {
    /// Column receiving the `middle` offset.
    pub middle_column: usize,

    /// Offset of the middle-finger column.
    pub middle: Vector3<f64>,

    /// First column receiving the `outer` offset.
    pub outer_from: usize,

    /// Offset of the pinky columns.
    pub outer: Vector3<f64>,
}

impl Default for ColumnOffsets {
    fn default() -> Self {
        Self {
            middle_column: 2,
            middle: Vector3::new(0.0, 2.82, -4.5),
            outer_from: 4,
            outer: Vector3::new(0.0, -12.0, 5.64),
        }
    }
}

impl ColumnOffsets {
    /// No offset for any column.
    #[must_use]
    pub fn none() -> Self {
        Self {
            middle: Vector3::zeros(),
            outer: Vector3::zeros(),
            ..Self::default()
        }
    }

    /// Offset applied to every key of `column`.
    #[must_use]
    pub fn offset(&self, column: usize) -> Vector3<f64> {
        if column == self.middle_column {
            self.middle
        } else if column >= self.outer_from {
            self.outer
        } else {
            Vector3::zeros()
        }
    }
}

/// Complete configuration of the key well.
///
/// Angles are in radians, lengths in millimetres. Centre indices are real
/// valued and may fall between or outside grid cells; they only place the
/// axis of symmetry of the curvature.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeometryParameters {
    /// Number of key columns.
    pub columns: usize,

    /// Number of key rows.
    pub rows: usize,

    /// Curvature between rows of one column.
    pub alpha: f64,

    /// Curvature between columns.
    pub beta: f64,

    /// Row index of the curvature centre (front-back tilt).
    pub center_row: f64,

    /// Column index of the curvature centre (left-right tilt).
    pub center_col: f64,

    /// Rotation of the whole well about Y.
    pub tenting_angle: f64,

    /// Lift of the whole well before tenting.
    pub keyboard_z_offset: f64,

    /// Extra spacing between mounts across columns.
    pub extra_width: f64,

    /// Extra spacing between mounts along a column.
    pub extra_height: f64,

    /// Finger-length offsets.
    pub column_offsets: ColumnOffsets,

    /// Switch and keycap dimensions.
    pub switch: SwitchDimensions,

    /// Explicit curvature style; `None` picks one from the row count.
    pub column_style: Option<CurvatureStyle>,
}

impl Default for GeometryParameters {
    fn default() -> Self {
        Self {
            columns: 6,
            rows: 5,
            alpha: PI / 12.0,
            beta: PI / 36.0,
            center_row: 2.0,
            center_col: 2.0,
            tenting_angle: PI / 12.0,
            keyboard_z_offset: 19.0,
            extra_width: 2.5,
            extra_height: 1.0,
            column_offsets: ColumnOffsets::default(),
            switch: SwitchDimensions::default(),
            column_style: None,
        }
    }
}

impl GeometryParameters {
    /// Set the grid size.
    ///
    /// The centre row follows the grid as `rows - 3`, the way the default
    /// layout tilts its home row.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    // Precision: row counts are tiny
    pub fn with_grid(mut self, columns: usize, rows: usize) -> Self {
        self.columns = columns;
        self.rows = rows;
        self.center_row = rows as f64 - 3.0;
        self
    }

    /// Set row (`alpha`) and column (`beta`) curvature in radians.
    #[must_use]
    pub const fn with_curvature(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Set the curvature centre.
    #[must_use]
    pub const fn with_center(mut self, center_col: f64, center_row: f64) -> Self {
        self.center_col = center_col;
        self.center_row = center_row;
        self
    }

    /// Set the tenting angle in radians.
    #[must_use]
    pub const fn with_tenting_angle(mut self, angle: f64) -> Self {
        self.tenting_angle = angle;
        self
    }

    /// Set the lift applied before tenting.
    #[must_use]
    pub const fn with_z_offset(mut self, z: f64) -> Self {
        self.keyboard_z_offset = z;
        self
    }

    /// Replace the per-column offsets.
    #[must_use]
    pub const fn with_column_offsets(mut self, offsets: ColumnOffsets) -> Self {
        self.column_offsets = offsets;
        self
    }

    /// Replace the switch dimensions.
    #[must_use]
    pub const fn with_switch(mut self, switch: SwitchDimensions) -> Self {
        self.switch = switch;
        self
    }

    /// Force a curvature style instead of choosing one from the row count.
    #[must_use]
    pub const fn with_style(mut self, style: CurvatureStyle) -> Self {
        self.column_style = Some(style);
        self
    }

    /// The style in effect: the explicit one, or
    /// [`CurvatureStyle::for_rows`].
    #[must_use]
    pub fn curvature_style(&self) -> CurvatureStyle {
        self.column_style
            .unwrap_or_else(|| CurvatureStyle::for_rows(self.rows))
    }

    /// The logical key grid.
    #[must_use]
    pub const fn grid(&self) -> KeyGrid {
        KeyGrid::new(self.columns, self.rows)
    }

    /// Check that the parameters describe a curvature model.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfiguration`] if:
    /// - the grid has no columns or no rows
    /// - `alpha` or `beta` is not in `(0, pi]`
    /// - any angle, centre or offset is not finite
    /// - the mount spacing or cap height is not positive
    pub fn validate(&self) -> LayoutResult<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(LayoutError::invalid_configuration(format!(
                "grid must have at least one column and one row, got {}x{}",
                self.columns, self.rows
            )));
        }

        for (name, angle) in [("alpha", self.alpha), ("beta", self.beta)] {
            if !(angle.is_finite() && angle > 0.0 && angle <= PI) {
                return Err(LayoutError::invalid_configuration(format!(
                    "{name} must be a curvature angle in (0, pi] radians, got {angle}"
                )));
            }
        }

        let scalars = [
            ("center_row", self.center_row),
            ("center_col", self.center_col),
            ("tenting_angle", self.tenting_angle),
            ("keyboard_z_offset", self.keyboard_z_offset),
        ];
        if let Some((name, value)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(LayoutError::invalid_configuration(format!(
                "{name} must be finite, got {value}"
            )));
        }

        let offsets = &self.column_offsets;
        if !(offsets.middle.iter().all(|v| v.is_finite())
            && offsets.outer.iter().all(|v| v.is_finite()))
        {
            return Err(LayoutError::invalid_configuration(
                "column offsets must be finite",
            ));
        }

        let spans = [
            ("mount width + extra width", self.switch.mount_width() + self.extra_width),
            ("mount height + extra height", self.switch.mount_height() + self.extra_height),
            ("cap top height", self.switch.cap_top_height()),
        ];
        if let Some((name, value)) = spans.iter().find(|(_, v)| !(v.is_finite() && *v > 0.0)) {
            return Err(LayoutError::invalid_configuration(format!(
                "{name} must be positive, got {value}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_is_valid() {
        let params = GeometryParameters::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.curvature_style(), CurvatureStyle::Standard);
    }

    #[test]
    fn derived_switch_sizes() {
        let switch = SwitchDimensions::default();
        assert_relative_eq!(switch.mount_width(), 17.4, epsilon = 1e-12);
        assert_relative_eq!(switch.mount_height(), 17.4, epsilon = 1e-12);
        assert_relative_eq!(switch.cap_top_height(), 16.7, epsilon = 1e-12);
    }

    #[test]
    fn column_offset_table_is_exact() {
        let offsets = ColumnOffsets::default();
        assert_eq!(offsets.offset(0), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(offsets.offset(1), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(offsets.offset(2), Vector3::new(0.0, 2.82, -4.5));
        assert_eq!(offsets.offset(3), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(offsets.offset(4), Vector3::new(0.0, -12.0, 5.64));
        assert_eq!(offsets.offset(5), Vector3::new(0.0, -12.0, 5.64));
        assert_eq!(offsets.offset(11), Vector3::new(0.0, -12.0, 5.64));
    }

    #[test]
    fn no_offsets() {
        let offsets = ColumnOffsets::none();
        assert!((0..8).all(|c| offsets.offset(c) == Vector3::zeros()));
    }

    #[test]
    fn explicit_style_overrides_row_count() {
        let params = GeometryParameters::default()
            .with_grid(6, 7)
            .with_style(CurvatureStyle::Standard);
        assert_eq!(params.curvature_style(), CurvatureStyle::Standard);

        let params = GeometryParameters::default().with_grid(6, 7);
        assert_eq!(params.curvature_style(), CurvatureStyle::Orthographic);
        assert_relative_eq!(params.center_row, 4.0);
    }

    #[test]
    fn zero_curvature_is_rejected() {
        let params = GeometryParameters::default().with_curvature(0.0, PI / 36.0);
        assert!(matches!(
            params.validate(),
            Err(LayoutError::InvalidConfiguration { .. })
        ));

        let params = GeometryParameters::default().with_curvature(PI / 12.0, -0.1);
        assert!(params.validate().is_err());

        let params = GeometryParameters::default().with_curvature(f64::NAN, 0.1);
        assert!(params.validate().is_err());
    }

    #[test]
    fn empty_grid_is_rejected() {
        let params = GeometryParameters::default().with_grid(0, 5);
        assert!(params.validate().is_err());
    }

    #[test]
    fn non_finite_tenting_is_rejected() {
        let params = GeometryParameters::default().with_tenting_angle(f64::INFINITY);
        assert!(params.validate().is_err());
    }

    #[test]
    fn off_grid_center_is_allowed() {
        let params = GeometryParameters::default().with_center(-1.5, 9.0);
        assert!(params.validate().is_ok());
    }
}
