//! # Tile Map Error Types
//!
//! All errors that can occur in the tile map core.
//!
//! Out-of-range mutation is deliberately *not* an error: those calls are
//! silently ignored so debug-tooling callers can pass scratch coordinates.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating, loading, or persisting a tile map.
#[derive(Error, Debug)]
pub enum TileMapError {
    /// Filesystem failure: file missing, unreadable, or unwritable.
    #[error("i/o failure on {path}: {source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// Map file is structurally invalid (undecodable document, wrong field
    /// types, unknown tile kind tag).
    #[error("corrupt map file {path}: {reason}")]
    Corrupt {
        /// The file that failed to decode.
        path: PathBuf,
        /// What the decoder rejected.
        reason: String,
    },

    /// Map document failed to encode before writing.
    #[error("failed to encode map file: {0}")]
    Encode(String),

    /// Record count in a map file does not match the declared dimensions.
    #[error("cell count mismatch: file holds {found} cells, expected {expected}")]
    CellCountMismatch {
        /// width * height the caller declared.
        expected: usize,
        /// Number of records actually present.
        found: usize,
    },

    /// Stored dimensions disagree with the dimensions the caller configured.
    ///
    /// Loading anyway would silently misalign every record to the wrong
    /// coordinate, so this aborts the session instead.
    #[error(
        "dimension mismatch: file is {file_width}x{file_height}, \
         caller configured {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        /// Width stored in the file.
        file_width: u32,
        /// Height stored in the file.
        file_height: u32,
        /// Width the caller configured.
        expected_width: u32,
        /// Height the caller configured.
        expected_height: u32,
    },

    /// Invalid map configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for tile map operations.
pub type TileMapResult<T> = Result<T, TileMapError>;
