//! Traversal of the logical key grid.
//!
//! [`collect`] places one freshly built shape on every kept cell and unions
//! the results. Union is order-independent, so [`collect_in_order`] accepts
//! any cell order and [`collect_parallel`] reduces in whatever order rayon
//! finishes.

use std::fmt;

use dactyl_types::Solid;
use nalgebra::Vector3;
use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::error::{LayoutError, LayoutResult};
use crate::layout::KeyLayout;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Columns that keep a key in the bottom row; the rest of that row is left
/// to the thumb cluster.
pub const BOTTOM_ROW_COLUMNS: [usize; 2] = [2, 3];

/// A (column, row) index pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridCoordinate {
    /// Column index, 0-based.
    pub column: usize,
    /// Row index, 0-based.
    pub row: usize,
}

impl GridCoordinate {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// The size of the key grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyGrid {
    columns: usize,
    rows: usize,
}

impl KeyGrid {
    /// Create a grid of `columns` x `rows` cells.
    #[must_use]
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Index of the bottom row, or `None` for an empty grid.
    #[must_use]
    pub const fn last_row(&self) -> Option<usize> {
        self.rows.checked_sub(1)
    }

    /// Number of cells.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.columns * self.rows
    }

    /// True if the grid has no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if `cell` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, cell: GridCoordinate) -> bool {
        cell.column < self.columns && cell.row < self.rows
    }

    /// Every cell, column by column.
    pub fn cells(&self) -> impl Iterator<Item = GridCoordinate> + use<> {
        let rows = self.rows;
        (0..self.columns)
            .flat_map(move |column| (0..rows).map(move |row| GridCoordinate::new(column, row)))
    }

    /// The default skip predicate: drop the bottom row except
    /// [`BOTTOM_ROW_COLUMNS`].
    ///
    /// # Example
    ///
    /// ```
    /// use dactyl_layout::{GridCoordinate, KeyGrid};
    ///
    /// let skip = KeyGrid::new(6, 5).thumb_cluster_carve_out();
    /// assert!(skip(GridCoordinate::new(0, 4)));
    /// assert!(!skip(GridCoordinate::new(2, 4)));
    /// assert!(!skip(GridCoordinate::new(0, 3)));
    /// ```
    #[must_use]
    pub fn thumb_cluster_carve_out(&self) -> impl Fn(GridCoordinate) -> bool + Send + Sync + use<> {
        let last_row = self.last_row();
        move |cell| Some(cell.row) == last_row && !BOTTOM_ROW_COLUMNS.contains(&cell.column)
    }
}

/// Shapes that can be combined into one.
///
/// Must be commutative and associative up to geometric equivalence.
pub trait Unite: Sized {
    /// Combine `self` with `other`.
    #[must_use]
    fn unite(self, other: Self) -> Self;
}

impl Unite for Solid {
    fn unite(mut self, other: Self) -> Self {
        self.merge(&other);
        self
    }
}

/// Place `make()` on every kept cell of `grid` and unite the results.
///
/// Cells are visited column by column. `skip` returns `true` for cells to
/// leave empty.
///
/// # Errors
///
/// - [`LayoutError::EmptyGrid`] if every cell is skipped
/// - any error returned by `place`
pub fn collect<S, P, F, K>(grid: KeyGrid, place: P, make: F, skip: K) -> LayoutResult<S>
where
    S: Unite,
    P: Fn(GridCoordinate, S) -> LayoutResult<S>,
    F: Fn() -> S,
    K: Fn(GridCoordinate) -> bool,
{
    collect_in_order(grid, grid.cells(), place, make, skip)
}

/// [`collect`] over an explicit cell order.
///
/// # Errors
///
/// - [`LayoutError::InvalidConfiguration`] if a cell lies outside `grid`
/// - [`LayoutError::EmptyGrid`] if every cell is skipped
/// - any error returned by `place`
pub fn collect_in_order<S, I, P, F, K>(
    grid: KeyGrid,
    cells: I,
    place: P,
    make: F,
    skip: K,
) -> LayoutResult<S>
where
    S: Unite,
    I: IntoIterator<Item = GridCoordinate>,
    P: Fn(GridCoordinate, S) -> LayoutResult<S>,
    F: Fn() -> S,
    K: Fn(GridCoordinate) -> bool,
{
    let mut united: Option<S> = None;
    let mut kept = 0_usize;

    for cell in cells {
        check_in_grid(grid, cell)?;
        if skip(cell) {
            trace!(%cell, "skipped");
            continue;
        }
        let placed = place(cell, make())?;
        united = Some(match united {
            Some(acc) => acc.unite(placed),
            None => placed,
        });
        kept += 1;
    }

    debug!(kept, total = grid.len(), "grid collected");
    united.ok_or_else(|| empty_grid(grid))
}

/// [`collect`] with cells placed in parallel and reduced with [`Unite`].
///
/// # Errors
///
/// Same as [`collect`].
pub fn collect_parallel<S, P, F, K>(grid: KeyGrid, place: P, make: F, skip: K) -> LayoutResult<S>
where
    S: Unite + Send,
    P: Fn(GridCoordinate, S) -> LayoutResult<S> + Sync + Send,
    F: Fn() -> S + Sync + Send,
    K: Fn(GridCoordinate) -> bool,
{
    let kept: Vec<GridCoordinate> = grid.cells().filter(|&cell| !skip(cell)).collect();
    info!(kept = kept.len(), total = grid.len(), "placing cells in parallel");

    kept.into_par_iter()
        .map(|cell| place(cell, make()))
        .try_reduce_with(|a, b| Ok(a.unite(b)))
        .unwrap_or_else(|| Err(empty_grid(grid)))
}

/// Where `origin` lands on every kept cell, in traversal order.
///
/// # Errors
///
/// - [`LayoutError::EmptyGrid`] if every cell is skipped
/// - [`LayoutError::UnsupportedStyle`] for the fixed style
pub fn positions<K>(
    layout: &KeyLayout,
    origin: Vector3<f64>,
    skip: K,
) -> LayoutResult<Vec<(GridCoordinate, Vector3<f64>)>>
where
    K: Fn(GridCoordinate) -> bool,
{
    let grid = layout.grid();
    let placed = grid
        .cells()
        .filter(|&cell| !skip(cell))
        .map(|cell| Ok((cell, layout.position_of(cell.column, cell.row, origin)?)))
        .collect::<LayoutResult<Vec<_>>>()?;

    if placed.is_empty() {
        return Err(empty_grid(grid));
    }
    Ok(placed)
}

fn check_in_grid(grid: KeyGrid, cell: GridCoordinate) -> LayoutResult<()> {
    if grid.contains(cell) {
        Ok(())
    } else {
        Err(LayoutError::invalid_configuration(format!(
            "cell {cell} lies outside the {}x{} grid",
            grid.columns(),
            grid.rows()
        )))
    }
}

const fn empty_grid(grid: KeyGrid) -> LayoutError {
    LayoutError::EmptyGrid {
        columns: grid.columns,
        rows: grid.rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CurvatureStyle, GeometryParameters};
    use dactyl_types::Point3;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    fn marker() -> Solid {
        Solid::point(Point3::origin())
    }

    fn sorted_vertices(solid: &Solid) -> Vec<[f64; 3]> {
        let mut v: Vec<[f64; 3]> = solid.vertices.iter().map(|p| [p.x, p.y, p.z]).collect();
        v.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        v
    }

    #[test]
    fn cells_are_column_major() {
        let cells: Vec<_> = KeyGrid::new(2, 3).cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], GridCoordinate::new(0, 0));
        assert_eq!(cells[1], GridCoordinate::new(0, 1));
        assert_eq!(cells[3], GridCoordinate::new(1, 0));
    }

    #[test]
    fn default_carve_out_on_six_by_five() {
        let grid = KeyGrid::new(6, 5);
        let skip = grid.thumb_cluster_carve_out();
        let skipped: Vec<_> = grid.cells().filter(|&c| skip(c)).collect();

        assert_eq!(
            skipped,
            vec![
                GridCoordinate::new(0, 4),
                GridCoordinate::new(1, 4),
                GridCoordinate::new(4, 4),
                GridCoordinate::new(5, 4),
            ]
        );
        assert_eq!(grid.cells().filter(|&c| !skip(c)).count(), 26);
    }

    #[test]
    fn collect_places_every_kept_cell() {
        let layout = KeyLayout::new(GeometryParameters::default()).unwrap();
        let grid = layout.grid();

        let solid = collect(
            grid,
            |c, s| layout.place_shape(c.column, c.row, s),
            marker,
            grid.thumb_cluster_carve_out(),
        )
        .unwrap();

        assert_eq!(solid.vertex_count(), 26);
    }

    #[test]
    fn shuffled_order_gives_same_union() {
        let layout = KeyLayout::new(GeometryParameters::default()).unwrap();
        let grid = layout.grid();
        let place = |c: GridCoordinate, s| layout.place_shape(c.column, c.row, s);

        let canonical = collect(grid, place, marker, grid.thumb_cluster_carve_out()).unwrap();

        let mut cells: Vec<_> = grid.cells().collect();
        cells.shuffle(&mut StdRng::seed_from_u64(17));
        let shuffled =
            collect_in_order(grid, cells, place, marker, grid.thumb_cluster_carve_out()).unwrap();

        assert_eq!(sorted_vertices(&canonical), sorted_vertices(&shuffled));
    }

    #[test]
    fn parallel_matches_sequential() {
        let layout = KeyLayout::new(GeometryParameters::default()).unwrap();
        let grid = layout.grid();
        let place = |c: GridCoordinate, s| layout.place_shape(c.column, c.row, s);

        let sequential = collect(grid, place, marker, grid.thumb_cluster_carve_out()).unwrap();
        let parallel =
            collect_parallel(grid, place, marker, grid.thumb_cluster_carve_out()).unwrap();

        assert_eq!(sorted_vertices(&sequential), sorted_vertices(&parallel));
    }

    #[test]
    fn everything_skipped_is_empty_grid() {
        let grid = KeyGrid::new(3, 2);
        let result = collect(grid, |_, s: Solid| Ok(s), marker, |_| true);
        assert_eq!(result, Err(LayoutError::EmptyGrid { columns: 3, rows: 2 }));

        let result = collect_parallel(grid, |_, s: Solid| Ok(s), marker, |_| true);
        assert_eq!(result, Err(LayoutError::EmptyGrid { columns: 3, rows: 2 }));
    }

    #[test]
    fn single_row_grid_keeps_only_bottom_row_columns() {
        // With one row, the bottom row is the only row
        let grid = KeyGrid::new(6, 1);
        let skip = grid.thumb_cluster_carve_out();
        let kept: Vec<_> = grid.cells().filter(|&c| !skip(c)).map(|c| c.column).collect();
        assert_eq!(kept, vec![2, 3]);
    }

    #[test]
    fn out_of_grid_cell_is_rejected() {
        let grid = KeyGrid::new(2, 2);
        let result = collect_in_order(
            grid,
            [GridCoordinate::new(0, 0), GridCoordinate::new(2, 0)],
            |_, s: Solid| Ok(s),
            marker,
            |_| false,
        );
        assert!(matches!(result, Err(LayoutError::InvalidConfiguration { .. })));
    }

    #[test]
    fn placement_errors_propagate() {
        let params = GeometryParameters::default().with_style(CurvatureStyle::Fixed);
        let layout = KeyLayout::new(params).unwrap();
        let grid = layout.grid();

        let result = collect(
            grid,
            |c, s| layout.place_shape(c.column, c.row, s),
            marker,
            |_| false,
        );
        assert!(matches!(result, Err(LayoutError::UnsupportedStyle { .. })));
    }

    #[test]
    fn positions_follow_traversal_order() {
        let layout = KeyLayout::new(GeometryParameters::default()).unwrap();
        let grid = layout.grid();
        let placed = positions(&layout, Vector3::zeros(), grid.thumb_cluster_carve_out()).unwrap();

        assert_eq!(placed.len(), 26);
        assert_eq!(placed[0].0, GridCoordinate::new(0, 0));
        assert_eq!(placed[0].1, layout.key_center(0, 0).unwrap());
    }
}
