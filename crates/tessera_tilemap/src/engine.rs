//! # Generation Engine & Mutation API
//!
//! Session orchestration. Each session takes one of two terminal paths:
//!
//! - a persisted map file exists at the configured path -> **load** it
//!   (any decode failure aborts the session; the engine never hands out a
//!   partially filled grid and never silently regenerates over corrupt
//!   data);
//! - no file -> **generate fresh** (sample, classify, and store every cell
//!   in persisted order), then persist the whole grid write-through before
//!   the session continues.
//!
//! After that the grid is Ready and can be handed to the visual dispatch
//! contract, and mutated in place through [`MapEngine::mutate`].
//!
//! Everything here is single-threaded and synchronous: each operation runs
//! to completion before the next begins.

use tracing::{debug, info};

use crate::cell::TileKind;
use crate::classify::CellClassifier;
use crate::config::MapConfig;
use crate::dispatch::{dispatch_grid, TilePlacer, VariantPalette};
use crate::error::TileMapResult;
use crate::grid::TileGrid;
use crate::map_file;
use crate::noise::{MapSeed, NoiseField};

/// Orchestrates generation, loading, mutation, and re-persistence of one
/// map session's grid.
pub struct MapEngine {
    config: MapConfig,
    noise: NoiseField,
}

impl MapEngine {
    /// Creates an engine for the given configuration.
    ///
    /// # Errors
    ///
    /// [`crate::TileMapError::InvalidConfig`] when the configuration fails
    /// validation (zero dimensions, non-positive scale).
    pub fn new(config: MapConfig) -> TileMapResult<Self> {
        config.validate()?;
        let noise = NoiseField::new(MapSeed::new(config.seed));
        Ok(Self { config, noise })
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// The seeded noise field (shared by classification and variant
    /// selection).
    #[must_use]
    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }

    /// Loads the persisted grid if one exists, otherwise generates a fresh
    /// grid and persists it before returning.
    ///
    /// # Errors
    ///
    /// Load-path failures (unreadable file, corrupt document, count or
    /// dimension mismatch) abort the session and are propagated as-is.
    /// On the fresh path a persist failure is propagated too: the write is
    /// write-through, not deferred.
    pub fn load_or_generate(&self) -> TileMapResult<TileGrid> {
        let path = &self.config.persist_path;

        if path.exists() {
            info!(path = %path.display(), "loading persisted map");
            return map_file::read_map(path, self.config.width, self.config.height);
        }

        info!(
            width = self.config.width,
            height = self.config.height,
            seed = self.config.seed,
            "no persisted map, generating fresh"
        );
        let grid = self.generate();
        map_file::write_map(path, &grid)?;
        Ok(grid)
    }

    /// Generates a fresh grid from noise. Pure: no file access.
    ///
    /// Every `(x, y)` in persisted order is sampled at the configured
    /// scale and classified through the fixed thresholds.
    #[must_use]
    pub fn generate(&self) -> TileGrid {
        let scale = self.config.scale;
        TileGrid::from_fn(self.config.width, self.config.height, |x, y| {
            let sample = self.noise.sample01(x as i32, y as i32, scale);
            CellClassifier::fresh_cell(sample)
        })
    }

    /// Applies a targeted edit to one cell and re-persists the whole grid.
    ///
    /// Overwrites `kind`, `motes`, and `height` at `(x, y)`; `walkable` is
    /// left untouched. Out-of-range coordinates are silently ignored:
    /// nothing changed, so nothing is rewritten and `Ok(false)` is
    /// returned.
    ///
    /// The rewrite is a full-grid overwrite, not an incremental patch.
    ///
    /// # Errors
    ///
    /// A persist failure is surfaced, but the in-memory grid keeps the
    /// edit: memory stays authoritative even when the durable copy lags.
    pub fn mutate(
        &self,
        grid: &mut TileGrid,
        x: i32,
        y: i32,
        kind: TileKind,
        motes: u8,
        height: i8,
    ) -> TileMapResult<bool> {
        if !grid.apply_edit(x, y, kind, motes, height) {
            debug!(x, y, "ignoring out-of-range mutation");
            return Ok(false);
        }
        map_file::write_map(&self.config.persist_path, grid)?;
        Ok(true)
    }

    /// Hands a Ready grid to the visual dispatch contract, deriving a
    /// deterministic variant per cell from this engine's noise field.
    pub fn dispatch<H, P: TilePlacer<H>>(
        &self,
        grid: &TileGrid,
        palette: &VariantPalette<H>,
        placer: &mut P,
    ) {
        dispatch_grid(grid, &self.noise, self.config.scale, palette, placer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::TileKind;
    use crate::error::TileMapError;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(tag: &str) -> PathBuf {
        let id = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("tessera_engine_{tag}_{id}.toml"))
    }

    fn config(path: PathBuf) -> MapConfig {
        MapConfig {
            width: 6,
            height: 4,
            scale: 10.0,
            persist_path: path,
            seed: 42,
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let bad = MapConfig {
            scale: 0.0,
            ..MapConfig::default()
        };
        assert!(matches!(
            MapEngine::new(bad),
            Err(TileMapError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_generate_fills_every_cell() {
        let engine = MapEngine::new(config(temp_path("gen"))).unwrap();
        let grid = engine.generate();

        assert_eq!(grid.cell_count(), 24);
        for (_, _, cell) in grid.iter() {
            assert_eq!(cell.motes, CellClassifier::FRESH_MOTES);
            assert_eq!(cell.height, CellClassifier::FRESH_HEIGHT);
            assert_eq!(cell.walkable, cell.kind.walkable_by_default());
        }
    }

    #[test]
    fn test_same_seed_generates_same_grid() {
        let a = MapEngine::new(config(temp_path("a"))).unwrap();
        let b = MapEngine::new(config(temp_path("b"))).unwrap();
        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn test_fresh_path_persists_write_through() {
        let path = temp_path("fresh");
        let engine = MapEngine::new(config(path.clone())).unwrap();

        let grid = engine.load_or_generate().unwrap();
        assert!(path.exists(), "fresh generation must persist immediately");
        assert_eq!(grid.cell_count(), 24);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_mutation_applies_and_repersists() {
        let path = temp_path("mut");
        let engine = MapEngine::new(config(path.clone())).unwrap();
        let mut grid = engine.load_or_generate().unwrap();

        let applied = engine.mutate(&mut grid, 3, 2, TileKind::Stone, 77, 9).unwrap();
        assert!(applied);

        let reloaded = map_file::read_map(&path, 6, 4).unwrap();
        let cell = reloaded.get(3, 2).unwrap();
        assert_eq!(cell.kind, TileKind::Stone);
        assert_eq!(cell.motes, 77);
        assert_eq!(cell.height, 9);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_out_of_range_mutation_is_tolerated() {
        let path = temp_path("oob");
        let engine = MapEngine::new(config(path.clone())).unwrap();
        let mut grid = engine.load_or_generate().unwrap();
        let before = grid.clone();

        assert!(!engine.mutate(&mut grid, -1, 0, TileKind::Stone, 1, 1).unwrap());
        assert!(!engine.mutate(&mut grid, 6, 0, TileKind::Stone, 1, 1).unwrap());
        assert_eq!(grid, before);

        fs::remove_file(&path).ok();
    }
}
