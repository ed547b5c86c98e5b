//! # Tessera Tilemap
//!
//! Deterministic 2D tile world core: noise-driven grid generation,
//! whole-map persistence, and targeted cell mutation.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: same seed, dimensions, and scale always produce
//!    the same map - across runs, not just within one.
//! 2. **Load-or-generate**: a session loads the persisted map when one
//!    exists, otherwise generates fresh and persists write-through.
//! 3. **Whole-file persistence**: the grid is always written as one flat,
//!    human-inspectable record set; never an incremental patch.
//! 4. **Pure core**: rendering is a sink behind the [`TilePlacer`] trait;
//!    no engine or asset types cross into this crate.
//!
//! ## Core Components
//!
//! - [`NoiseField`]: seeded coherent 2D noise
//! - [`CellClassifier`]: fixed-threshold noise -> tile kind mapping
//! - [`TileGrid`]: the owned 2D array of cell records
//! - [`map_file`]: flatten/unflatten codec and TOML file I/O
//! - [`MapEngine`]: load-or-generate orchestration plus the mutation API
//!
//! ## Example
//!
//! ```rust,ignore
//! use tessera_tilemap::{MapConfig, MapEngine, TileKind};
//!
//! let engine = MapEngine::new(MapConfig::default())?;
//! let mut grid = engine.load_or_generate()?;
//!
//! // Targeted edit, re-persisted write-through.
//! engine.mutate(&mut grid, 10, 12, TileKind::Stone, 40, 8)?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cell;
pub mod classify;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod grid;
pub mod map_file;
pub mod noise;

pub use cell::{Cell, TileKind};
pub use classify::CellClassifier;
pub use config::MapConfig;
pub use dispatch::{dispatch_grid, TilePlacer, VariantPalette};
pub use engine::MapEngine;
pub use error::{TileMapError, TileMapResult};
pub use grid::TileGrid;
pub use noise::{MapSeed, NoiseField};
