//! # Map File Codec
//!
//! Serializes the grid to a flat record set and back, and moves that record
//! set to and from disk.
//!
//! ## Format
//!
//! A versionless, human-inspectable TOML document:
//!
//! ```toml
//! width = 2
//! height = 2
//!
//! [[cells]]
//! kind = 1
//! motes = 5
//! height = 0
//! walkable = false
//! ```
//!
//! `cells` is the grid flattened in persisted order (all y for x=0, then
//! all y for x=1, ...), so each record's position is implicit in its index.
//! Dimensions are stored and checked on load: a record set read under the
//! wrong width/height would silently misalign every cell, so a mismatch
//! aborts instead.
//!
//! File access is scoped: open, read or write in full, close. No handle
//! survives a call.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{TileMapError, TileMapResult};
use crate::grid::TileGrid;

/// On-disk document shape.
#[derive(Serialize, Deserialize)]
struct MapDocument {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

/// Flattens the grid into a record set in persisted order.
#[must_use]
pub fn flatten(grid: &TileGrid) -> Vec<Cell> {
    grid.cells().to_vec()
}

/// Rebuilds a grid from a flat record set.
///
/// # Errors
///
/// [`TileMapError::CellCountMismatch`] when the record count is not
/// `width * height`.
pub fn unflatten(cells: Vec<Cell>, width: u32, height: u32) -> TileMapResult<TileGrid> {
    TileGrid::from_cells(width, height, cells)
}

/// Writes the full grid to `path`, replacing any previous contents.
///
/// # Errors
///
/// [`TileMapError::Io`] on filesystem failure (permissions, disk full);
/// [`TileMapError::Encode`] if the document cannot be serialized.
pub fn write_map(path: &Path, grid: &TileGrid) -> TileMapResult<()> {
    let doc = MapDocument {
        width: grid.width(),
        height: grid.height(),
        cells: flatten(grid),
    };
    let text = toml::to_string(&doc).map_err(|e| TileMapError::Encode(e.to_string()))?;
    fs::write(path, text).map_err(|source| TileMapError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a grid from `path`, validating it against the caller's dimensions.
///
/// # Errors
///
/// [`TileMapError::Io`] when the file is absent or unreadable;
/// [`TileMapError::Corrupt`] when the document does not decode (bad TOML,
/// wrong field types, unknown kind tags);
/// [`TileMapError::DimensionMismatch`] when the stored dimensions disagree
/// with `width`/`height`;
/// [`TileMapError::CellCountMismatch`] when the record count is short or
/// long for the stored dimensions.
pub fn read_map(path: &Path, width: u32, height: u32) -> TileMapResult<TileGrid> {
    let text = fs::read_to_string(path).map_err(|source| TileMapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: MapDocument = toml::from_str(&text).map_err(|e| TileMapError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if doc.width != width || doc.height != height {
        return Err(TileMapError::DimensionMismatch {
            file_width: doc.width,
            file_height: doc.height,
            expected_width: width,
            expected_height: height,
        });
    }

    unflatten(doc.cells, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::TileKind;
    use std::path::PathBuf;

    fn temp_map_path() -> PathBuf {
        let id = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("tessera_map_{id}.toml"))
    }

    fn sample_grid() -> TileGrid {
        TileGrid::from_fn(3, 2, |x, y| {
            let kind = TileKind::from_tag(((x + y) % 3) as u8 + 1).unwrap();
            Cell::new(kind, (x + 1) as u8, y as i8 - 1, kind.walkable_by_default())
        })
    }

    #[test]
    fn test_flatten_unflatten_roundtrip() {
        let grid = sample_grid();
        let records = flatten(&grid);
        assert_eq!(records.len(), 6);

        let rebuilt = unflatten(records, 3, 2).unwrap();
        assert_eq!(rebuilt, grid);
    }

    #[test]
    fn test_file_roundtrip_preserves_every_field() {
        let path = temp_map_path();
        let grid = sample_grid();

        write_map(&path, &grid).unwrap();
        let loaded = read_map(&path, 3, 2).unwrap();

        assert_eq!(loaded, grid);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_file_is_human_inspectable() {
        let path = temp_map_path();
        write_map(&path, &sample_grid()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("width = 3"));
        assert!(text.contains("height = 2"));
        assert!(text.contains("[[cells]]"));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_map(Path::new("/nonexistent/map.toml"), 3, 2).unwrap_err();
        assert!(matches!(err, TileMapError::Io { .. }));
    }

    #[test]
    fn test_garbage_file_is_corrupt() {
        let path = temp_map_path();
        fs::write(&path, "this is not a map").unwrap();

        let err = read_map(&path, 3, 2).unwrap_err();
        assert!(matches!(err, TileMapError::Corrupt { .. }));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_unknown_kind_tag_is_corrupt() {
        let path = temp_map_path();
        fs::write(
            &path,
            "width = 1\nheight = 1\n\n[[cells]]\nkind = 9\nmotes = 5\nheight = 0\nwalkable = false\n",
        )
        .unwrap();

        let err = read_map(&path, 1, 1).unwrap_err();
        assert!(matches!(err, TileMapError::Corrupt { .. }));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_dimension_mismatch_aborts_load() {
        let path = temp_map_path();
        write_map(&path, &sample_grid()).unwrap();

        let err = read_map(&path, 2, 3).unwrap_err();
        assert!(matches!(
            err,
            TileMapError::DimensionMismatch {
                file_width: 3,
                file_height: 2,
                expected_width: 2,
                expected_height: 3,
            }
        ));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_short_record_set_is_count_mismatch() {
        let path = temp_map_path();
        // Declares 2x2 but carries a single record.
        fs::write(
            &path,
            "width = 2\nheight = 2\n\n[[cells]]\nkind = 1\nmotes = 5\nheight = 0\nwalkable = false\n",
        )
        .unwrap();

        let err = read_map(&path, 2, 2).unwrap_err();
        assert!(matches!(
            err,
            TileMapError::CellCountMismatch {
                expected: 4,
                found: 1
            }
        ));

        fs::remove_file(&path).ok();
    }
}
