//! Parts placed over the whole key grid.

use dactyl_layout::{GridCoordinate, KeyLayout, LayoutResult, collect, collect_parallel};
use dactyl_types::Solid;
use tracing::info;

use crate::error::PartsResult;
use crate::keycap::{CapSize, sa_cap};
use crate::plate::single_plate;

/// What [`key_well`] builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WellOptions {
    /// Add keycaps of this size on top of the plates.
    pub caps: Option<CapSize>,

    /// Place cells in parallel (via rayon).
    pub parallel: bool,
}

impl WellOptions {
    /// Include keycaps.
    #[must_use]
    pub const fn with_caps(mut self, size: CapSize) -> Self {
        self.caps = Some(size);
        self
    }

    /// Enable or disable parallel placement.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Switch plates on every key of the grid except the thumb carve-out.
///
/// # Errors
///
/// Returns [`PartsError::Layout`](crate::PartsError::Layout) if placement
/// fails.
pub fn key_holes(layout: &KeyLayout) -> PartsResult<Solid> {
    let switch = layout.params().switch;
    Ok(place_everywhere(layout, || single_plate(&switch), false)?)
}

/// Keycaps on every key of the grid except the thumb carve-out.
///
/// # Errors
///
/// Returns [`PartsError::Layout`](crate::PartsError::Layout) if placement
/// fails.
pub fn caps(layout: &KeyLayout, size: CapSize) -> PartsResult<Solid> {
    let switch = layout.params().switch;
    Ok(place_everywhere(layout, || sa_cap(size, &switch), false)?)
}

/// Plates and, optionally, keycaps as one solid.
///
/// # Errors
///
/// Returns [`PartsError::Layout`](crate::PartsError::Layout) if placement
/// fails.
pub fn key_well(layout: &KeyLayout, options: &WellOptions) -> PartsResult<Solid> {
    let switch = layout.params().switch;
    let mut well = place_everywhere(layout, || single_plate(&switch), options.parallel)?;

    if let Some(size) = options.caps {
        let caps = place_everywhere(layout, || sa_cap(size, &switch), options.parallel)?;
        well.merge(&caps);
    }

    info!(
        vertices = well.vertex_count(),
        faces = well.face_count(),
        caps = options.caps.is_some(),
        "key well built"
    );
    Ok(well)
}

fn place_everywhere<F>(layout: &KeyLayout, make: F, parallel: bool) -> LayoutResult<Solid>
where
    F: Fn() -> Solid + Sync + Send,
{
    let grid = layout.grid();
    let place = |cell: GridCoordinate, shape| layout.place_shape(cell.column, cell.row, shape);
    let skip = grid.thumb_cluster_carve_out();

    if parallel {
        collect_parallel(grid, place, make, skip)
    } else {
        collect(grid, place, make, skip)
    }
}
