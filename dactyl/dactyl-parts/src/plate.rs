//! Switch plate and web post.

use dactyl_layout::SwitchDimensions;
use dactyl_types::{Axis, Solid, Vector3};

/// Width of the plate walls around the switch cutout.
pub const PLATE_WALL: f64 = 1.5;

/// Dimensions of the web posts that join neighbouring plates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebDimensions {
    /// Height of the web between plates.
    pub web_thickness: f64,
    /// Side of the square post.
    pub post_size: f64,
}

impl Default for WebDimensions {
    fn default() -> Self {
        Self {
            web_thickness: 3.5,
            post_size: 0.1,
        }
    }
}

/// The mount for one switch: four walls around the cutout, sitting on
/// `z = 0` with its top at `plate_thickness`.
///
/// The top and left walls are built, then mirrored across X and Y to close
/// the frame.
#[must_use]
pub fn single_plate(switch: &SwitchDimensions) -> Solid {
    let (w, h, t) = (
        switch.keyswitch_width,
        switch.keyswitch_height,
        switch.plate_thickness,
    );

    let mut top_wall = Solid::cuboid(Vector3::new(switch.mount_width(), PLATE_WALL, t), true);
    top_wall.translate(Vector3::new(0.0, PLATE_WALL / 2.0 + h / 2.0, t / 2.0));

    let mut left_wall = Solid::cuboid(Vector3::new(PLATE_WALL, switch.mount_height(), t), true);
    left_wall.translate(Vector3::new(PLATE_WALL / 2.0 + w / 2.0, 0.0, t / 2.0));

    let half = top_wall.union(&left_wall);
    half.mirrored(Axis::X).union(&half.mirrored(Axis::Y))
}

/// A thin post at the plate's web height, used as a hull anchor between
/// neighbouring keys.
#[must_use]
pub fn web_post(switch: &SwitchDimensions, web: &WebDimensions) -> Solid {
    let mut post = Solid::cuboid(
        Vector3::new(web.post_size, web.post_size, web.web_thickness),
        false,
    );
    post.translate(Vector3::new(
        0.0,
        0.0,
        switch.plate_thickness - web.web_thickness / 2.0,
    ));
    post
}
