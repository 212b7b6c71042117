//! The key placement schedule.
//!
//! Placing a key is a fixed sequence of translations and rotations about
//! X and Y whose parameters depend only on the curvature model and the grid
//! coordinate. [`PlacementSchedule`] records that sequence once; any
//! [`PlacementOps`] algebra can then replay it. Solids and bare vectors are
//! placed by replaying the same schedule, so they cannot disagree on where a
//! key goes.
//!
//! # Schedules
//!
//! Steps are listed innermost first (the first step acts on the subject at
//! the origin). `rr` is the row radius, `cr` the column radius, `ca` the
//! column angle `(center_col - column) * beta`.
//!
//! ```text
//! Orthographic:
//!   T(0, 0, -rr)  Rx(alpha * (center_row - row))  T(0, 0, rr)
//!   Ry(ca)
//!   T(-(column - center_col) * column_x_delta, 0, (1 - cos ca) * cr)
//!   T(column_offset(column))
//!   T(0, 0, z_offset)  Ry(tenting)
//!
//! Standard:
//!   T(0, 0, -rr)  Rx((center_row - row) * alpha)  T(0, 0, rr)
//!   T(0, 0, -cr)  Ry(ca)  T(0, 0, cr)
//!   T(column_offset(column))
//!   T(0, 0, z_offset)  Ry(tenting)
//! ```

use dactyl_types::Axis;
use nalgebra::Vector3;

use crate::error::{LayoutError, LayoutResult};
use crate::layout::KeyLayout;
use crate::style::CurvatureStyle;

/// An algebra the placement schedule can be replayed against.
///
/// Angles always arrive in radians. Implementations that sit on a
/// degree-based rotate primitive convert internally.
pub trait PlacementOps {
    /// What gets placed: a solid, a point, a transform...
    type Subject;

    /// Translate `subject` by `offset`.
    fn translate(&self, subject: Self::Subject, offset: Vector3<f64>) -> Self::Subject;

    /// Rotate `subject` about `axis` (through the origin) by `angle` radians.
    fn rotate(&self, subject: Self::Subject, axis: Axis, angle: f64) -> Self::Subject;
}

/// One operation of a placement schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementStep {
    /// Translate by a vector.
    Translate(Vector3<f64>),
    /// Rotate about a coordinate axis, in radians.
    Rotate {
        /// Axis through the origin.
        axis: Axis,
        /// Angle in radians.
        angle: f64,
    },
}

/// The ordered steps that place one key, innermost first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementSchedule {
    steps: Vec<PlacementStep>,
}

impl PlacementSchedule {
    /// Build the schedule for the key at (`column`, `row`).
    ///
    /// The coordinate is not range-checked: off-grid coordinates follow the
    /// same curvature, which is how neighbouring features are located.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnsupportedStyle`] for
    /// [`CurvatureStyle::Fixed`].
    #[allow(clippy::cast_precision_loss)]
    // Precision: grid indices are tiny
    pub fn for_key(layout: &KeyLayout, column: usize, row: usize) -> LayoutResult<Self> {
        let params = layout.params();
        let curvature = layout.curvature();
        let (col, row_f) = (column as f64, row as f64);

        let column_angle = (params.center_col - col) * params.beta;
        let row_radius = curvature.row_radius;
        let column_radius = curvature.column_radius;

        let mut schedule = Self::default();
        match layout.style() {
            CurvatureStyle::Orthographic => {
                let column_z_delta = (1.0 - column_angle.cos()) * column_radius;
                schedule
                    .lift(-row_radius)
                    .rotate(Axis::X, params.alpha * (params.center_row - row_f))
                    .lift(row_radius)
                    .rotate(Axis::Y, column_angle)
                    .translate(Vector3::new(
                        -(col - params.center_col) * curvature.column_x_delta,
                        0.0,
                        column_z_delta,
                    ));
            }
            CurvatureStyle::Standard => {
                schedule
                    .lift(-row_radius)
                    .rotate(Axis::X, (params.center_row - row_f) * params.alpha)
                    .lift(row_radius)
                    .lift(-column_radius)
                    .rotate(Axis::Y, column_angle)
                    .lift(column_radius);
            }
            style @ CurvatureStyle::Fixed => {
                return Err(LayoutError::UnsupportedStyle { style });
            }
        }

        schedule
            .translate(params.column_offsets.offset(column))
            .lift(params.keyboard_z_offset)
            .rotate(Axis::Y, params.tenting_angle);

        Ok(schedule)
    }

    /// The steps, innermost first.
    #[must_use]
    pub fn steps(&self) -> &[PlacementStep] {
        &self.steps
    }

    /// Apply every step to `subject` through `ops`.
    pub fn replay<O: PlacementOps + ?Sized>(&self, ops: &O, subject: O::Subject) -> O::Subject {
        self.steps.iter().fold(subject, |subject, step| match *step {
            PlacementStep::Translate(offset) => ops.translate(subject, offset),
            PlacementStep::Rotate { axis, angle } => ops.rotate(subject, axis, angle),
        })
    }

    fn translate(&mut self, offset: Vector3<f64>) -> &mut Self {
        self.steps.push(PlacementStep::Translate(offset));
        self
    }

    fn lift(&mut self, z: f64) -> &mut Self {
        self.translate(Vector3::new(0.0, 0.0, z))
    }

    fn rotate(&mut self, axis: Axis, angle: f64) -> &mut Self {
        self.steps.push(PlacementStep::Rotate { axis, angle });
        self
    }
}

/// Place `subject` at (`column`, `row`) using the operator set `ops`.
///
/// # Errors
///
/// Returns [`LayoutError::UnsupportedStyle`] if the layout uses
/// [`CurvatureStyle::Fixed`].
pub fn apply_key_geometry<O: PlacementOps + ?Sized>(
    ops: &O,
    layout: &KeyLayout,
    column: usize,
    row: usize,
    subject: O::Subject,
) -> LayoutResult<O::Subject> {
    let schedule = PlacementSchedule::for_key(layout, column, row)?;
    Ok(schedule.replay(ops, subject))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeometryParameters;
    use approx::assert_relative_eq;

    /// Records the steps it is asked to apply.
    struct Recorder;

    impl PlacementOps for Recorder {
        type Subject = Vec<PlacementStep>;

        fn translate(&self, mut seen: Self::Subject, offset: Vector3<f64>) -> Self::Subject {
            seen.push(PlacementStep::Translate(offset));
            seen
        }

        fn rotate(&self, mut seen: Self::Subject, axis: Axis, angle: f64) -> Self::Subject {
            seen.push(PlacementStep::Rotate { axis, angle });
            seen
        }
    }

    fn layout(style: CurvatureStyle) -> KeyLayout {
        KeyLayout::new(GeometryParameters::default().with_style(style)).unwrap()
    }

    fn rotations(schedule: &PlacementSchedule) -> Vec<(Axis, f64)> {
        schedule
            .steps()
            .iter()
            .filter_map(|step| match *step {
                PlacementStep::Rotate { axis, angle } => Some((axis, angle)),
                PlacementStep::Translate(_) => None,
            })
            .collect()
    }

    #[test]
    fn standard_schedule_shape() {
        let schedule = PlacementSchedule::for_key(&layout(CurvatureStyle::Standard), 0, 0).unwrap();
        assert_eq!(schedule.steps().len(), 9);

        let rot = rotations(&schedule);
        let params = GeometryParameters::default();
        assert_eq!(rot.len(), 3);
        assert_eq!(rot[0].0, Axis::X);
        assert_relative_eq!(rot[0].1, 2.0 * params.alpha, epsilon = 1e-12);
        assert_eq!(rot[1].0, Axis::Y);
        assert_relative_eq!(rot[1].1, 2.0 * params.beta, epsilon = 1e-12);
        assert_eq!(rot[2], (Axis::Y, params.tenting_angle));
    }

    #[test]
    fn orthographic_schedule_shape() {
        let layout = layout(CurvatureStyle::Orthographic);
        let schedule = PlacementSchedule::for_key(&layout, 4, 1).unwrap();
        assert_eq!(schedule.steps().len(), 8);

        let PlacementStep::Translate(drift) = schedule.steps()[4] else {
            panic!("expected drift correction at step 4");
        };
        let params = layout.params();
        let model = layout.curvature();
        let column_angle = (params.center_col - 4.0) * params.beta;
        assert_relative_eq!(drift.x, -2.0 * model.column_x_delta, epsilon = 1e-12);
        assert_relative_eq!(drift.y, 0.0);
        assert_relative_eq!(
            drift.z,
            (1.0 - column_angle.cos()) * model.column_radius,
            epsilon = 1e-12
        );
    }

    #[test]
    fn column_offset_precedes_tenting() {
        let schedule = PlacementSchedule::for_key(&layout(CurvatureStyle::Standard), 4, 0).unwrap();
        let steps = schedule.steps();
        let n = steps.len();

        assert_eq!(steps[n - 3], PlacementStep::Translate(Vector3::new(0.0, -12.0, 5.64)));
        assert_eq!(steps[n - 2], PlacementStep::Translate(Vector3::new(0.0, 0.0, 19.0)));
    }

    #[test]
    fn no_rotation_at_symmetry_center() {
        for style in [CurvatureStyle::Standard, CurvatureStyle::Orthographic] {
            let params = GeometryParameters::default()
                .with_center(3.0, 1.0)
                .with_style(style);
            let layout = KeyLayout::new(params).unwrap();
            let schedule = PlacementSchedule::for_key(&layout, 3, 1).unwrap();
            let rot = rotations(&schedule);

            assert_eq!(rot[0].1, 0.0);
            assert_eq!(rot[1].1, 0.0);
        }
    }

    #[test]
    fn fixed_style_is_unsupported() {
        let layout = layout(CurvatureStyle::Fixed);
        for (column, row) in [(0, 0), (2, 2), (5, 4)] {
            assert_eq!(
                PlacementSchedule::for_key(&layout, column, row),
                Err(LayoutError::UnsupportedStyle {
                    style: CurvatureStyle::Fixed
                })
            );
        }
    }

    #[test]
    fn replay_visits_steps_in_order() {
        let layout = layout(CurvatureStyle::Orthographic);
        let schedule = PlacementSchedule::for_key(&layout, 1, 3).unwrap();
        let seen = apply_key_geometry(&Recorder, &layout, 1, 3, Vec::new()).unwrap();
        assert_eq!(seen, schedule.steps());
    }
}
