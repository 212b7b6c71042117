//! Curvature constants derived from the geometry parameters.

use tracing::debug;

use crate::error::LayoutResult;
use crate::params::GeometryParameters;

/// Radii and deltas of the curved key well.
///
/// Derived once per [`GeometryParameters`] and shared read-only by every
/// placement.
///
/// # Example
///
/// ```
/// use dactyl_layout::{CurvatureModel, GeometryParameters};
///
/// let model = CurvatureModel::derive(&GeometryParameters::default()).unwrap();
/// assert!(model.row_radius > 0.0);
/// assert!(model.column_radius > model.row_radius);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvatureModel {
    /// Radius of the sphere the rows of one column sit on.
    pub row_radius: f64,

    /// Radius of the cylinder the columns sit on.
    pub column_radius: f64,

    /// Lateral spacing correction per column (orthographic style).
    pub column_x_delta: f64,

    /// Column angle of column 0 relative to the third column. Not used by
    /// either schedule.
    pub column_base_angle: f64,
}

impl CurvatureModel {
    /// Derive the curvature constants.
    ///
    /// ```text
    /// row_radius      = ((mount_height + extra_height) / 2) / sin(alpha / 2) + cap_top_height
    /// column_radius   = ((mount_width  + extra_width)  / 2) / sin(beta  / 2) + cap_top_height
    /// column_x_delta  = -1 - column_radius * sin(beta)
    /// column_base_angle = (center_col - 2) * beta
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfiguration`](crate::LayoutError::InvalidConfiguration)
    /// if `params` fails [`GeometryParameters::validate`], which guards the
    /// division by `sin(alpha / 2)` and `sin(beta / 2)`.
    pub fn derive(params: &GeometryParameters) -> LayoutResult<Self> {
        params.validate()?;

        let switch = &params.switch;
        let cap_top_height = switch.cap_top_height();

        let row_radius =
            ((switch.mount_height() + params.extra_height) / 2.0) / (params.alpha / 2.0).sin()
                + cap_top_height;
        let column_radius =
            ((switch.mount_width() + params.extra_width) / 2.0) / (params.beta / 2.0).sin()
                + cap_top_height;
        let column_x_delta = -1.0 - column_radius * params.beta.sin();
        let column_base_angle = (params.center_col - 2.0) * params.beta;

        debug!(row_radius, column_radius, column_x_delta, column_base_angle, "curvature derived");

        Ok(Self {
            row_radius,
            column_radius,
            column_x_delta,
            column_base_angle,
        })
    }
}
