//! The key layout: parameters, derived curvature and the placement facades.

use dactyl_types::Solid;
use nalgebra::Vector3;
use tracing::{debug, warn};

use crate::curvature::CurvatureModel;
use crate::error::LayoutResult;
use crate::grid::KeyGrid;
use crate::ops::{SolidOps, VectorOps};
use crate::params::GeometryParameters;
use crate::placement::{PlacementSchedule, apply_key_geometry};
use crate::style::CurvatureStyle;

/// Validated parameters together with their curvature model.
///
/// Built once at startup. Every method is a pure function of the layout and
/// its arguments, so a `&KeyLayout` can be shared across threads.
///
/// # Example
///
/// ```
/// use dactyl_layout::{GeometryParameters, KeyLayout};
/// use dactyl_types::{Solid, Vector3};
///
/// let layout = KeyLayout::new(GeometryParameters::default()).unwrap();
///
/// let anchor = layout.position_of(0, 0, Vector3::zeros()).unwrap();
/// let plate = layout
///     .place_shape(0, 0, Solid::cuboid(Vector3::new(17.4, 17.4, 4.0), true))
///     .unwrap();
///
/// assert!(plate.bounds().contains(&anchor.into()));
/// ```
#[derive(Debug, Clone)]
pub struct KeyLayout {
    params: GeometryParameters,
    curvature: CurvatureModel,
    style: CurvatureStyle,
}

impl KeyLayout {
    /// Validate `params` and derive the curvature model.
    ///
    /// A centre outside the grid is accepted (with a warning); it only moves
    /// the axis of symmetry.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfiguration`](crate::LayoutError::InvalidConfiguration)
    /// if the parameters fail validation.
    #[allow(clippy::cast_precision_loss)]
    // Precision: grid sizes are tiny
    pub fn new(params: GeometryParameters) -> LayoutResult<Self> {
        let curvature = CurvatureModel::derive(&params)?;
        let style = params.curvature_style();

        let (columns, rows) = (params.columns as f64, params.rows as f64);
        if !(0.0..columns).contains(&params.center_col) || !(0.0..rows).contains(&params.center_row)
        {
            warn!(
                center_col = params.center_col,
                center_row = params.center_row,
                columns = params.columns,
                rows = params.rows,
                "curvature centre lies outside the key grid"
            );
        }

        debug!(%style, columns = params.columns, rows = params.rows, "key layout ready");

        Ok(Self {
            params,
            curvature,
            style,
        })
    }

    /// The parameters this layout was built from.
    #[must_use]
    pub const fn params(&self) -> &GeometryParameters {
        &self.params
    }

    /// The derived curvature constants.
    #[must_use]
    pub const fn curvature(&self) -> &CurvatureModel {
        &self.curvature
    }

    /// The curvature style in effect.
    #[must_use]
    pub const fn style(&self) -> CurvatureStyle {
        self.style
    }

    /// The logical key grid.
    #[must_use]
    pub const fn grid(&self) -> KeyGrid {
        self.params.grid()
    }

    /// The placement schedule of one key.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnsupportedStyle`](crate::LayoutError::UnsupportedStyle)
    /// for the fixed style.
    pub fn schedule(&self, column: usize, row: usize) -> LayoutResult<PlacementSchedule> {
        PlacementSchedule::for_key(self, column, row)
    }

    /// Move `shape`, built at the origin, onto the key at (`column`, `row`).
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnsupportedStyle`](crate::LayoutError::UnsupportedStyle)
    /// for the fixed style.
    pub fn place_shape(&self, column: usize, row: usize, shape: Solid) -> LayoutResult<Solid> {
        apply_key_geometry(&SolidOps, self, column, row, shape)
    }

    /// Where `origin`, given in the key's local frame, lands for the key at
    /// (`column`, `row`).
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnsupportedStyle`](crate::LayoutError::UnsupportedStyle)
    /// for the fixed style.
    pub fn position_of(
        &self,
        column: usize,
        row: usize,
        origin: Vector3<f64>,
    ) -> LayoutResult<Vector3<f64>> {
        apply_key_geometry(&VectorOps, self, column, row, origin)
    }

    /// Where the centre of the key at (`column`, `row`) lands.
    ///
    /// # Errors
    ///
    /// Same as [`position_of`](Self::position_of).
    pub fn key_center(&self, column: usize, row: usize) -> LayoutResult<Vector3<f64>> {
        self.position_of(column, row, Vector3::zeros())
    }
}
