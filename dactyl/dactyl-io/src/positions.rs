//! Key position export as JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use dactyl_layout::GridCoordinate;
use dactyl_types::Vector3;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{IoError, IoResult};

/// Where one key landed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyPosition {
    /// Column index.
    pub column: usize,
    /// Row index.
    pub row: usize,
    /// Position as `[x, y, z]`.
    pub position: [f64; 3],
}

impl KeyPosition {
    /// Record the position of `cell`.
    #[must_use]
    pub fn new(cell: GridCoordinate, position: Vector3<f64>) -> Self {
        Self {
            column: cell.column,
            row: cell.row,
            position: [position.x, position.y, position.z],
        }
    }
}

/// Write `positions` as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error on write or encoding failure.
pub fn write_positions_json<W: Write>(
    positions: &[(GridCoordinate, Vector3<f64>)],
    mut writer: W,
) -> IoResult<()> {
    let records: Vec<KeyPosition> = positions
        .iter()
        .map(|&(cell, position)| KeyPosition::new(cell, position))
        .collect();
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writeln!(writer)?;
    Ok(())
}

/// Save `positions` to a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_positions_json<P: AsRef<Path>>(
    positions: &[(GridCoordinate, Vector3<f64>)],
    path: P,
) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| IoError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_positions_json(positions, &mut writer)?;
    writer.flush()?;

    info!(path = %path.display(), keys = positions.len(), "positions written");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Vec<(GridCoordinate, Vector3<f64>)> {
        vec![
            (GridCoordinate::new(0, 0), Vector3::new(1.0, 2.0, 3.0)),
            (GridCoordinate::new(2, 4), Vector3::new(-1.5, 0.0, 19.0)),
        ]
    }

    #[test]
    fn json_keeps_order_and_values() {
        let mut bytes = Vec::new();
        write_positions_json(&sample(), &mut bytes).unwrap();

        let records: Vec<KeyPosition> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!((records[1].column, records[1].row), (2, 4));
        assert_relative_eq!(records[1].position[0], -1.5);
        assert_relative_eq!(records[1].position[2], 19.0);
    }

    #[test]
    fn save_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("positions.json");
        save_positions_json(&sample(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["column"], 0);
        assert_eq!(value[0]["position"][1], 2.0);
    }
}
