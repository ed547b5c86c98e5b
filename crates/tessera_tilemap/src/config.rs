//! # Map Configuration
//!
//! Recognized options for a map session. Library-style: the host hands the
//! core a `MapConfig` (or points it at a TOML file); there are no CLI flags
//! and no environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{TileMapError, TileMapResult};

/// Configuration for one map session.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    /// Map width in cells.
    pub width: u32,
    /// Map height in cells.
    pub height: u32,
    /// Noise scale; larger values give larger terrain features.
    /// Must be finite and strictly positive.
    pub scale: f64,
    /// Where the persisted map file lives.
    pub persist_path: PathBuf,
    /// Seed for the noise field. Same seed = same map.
    pub seed: u64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            scale: 10.0,
            persist_path: PathBuf::from("tilemap.toml"),
            seed: 0x07E5_5E4A_07E5_5E4A,
        }
    }
}

impl MapConfig {
    /// Loads configuration from a TOML file and validates it.
    ///
    /// # Errors
    ///
    /// [`TileMapError::Io`] when the file cannot be read,
    /// [`TileMapError::InvalidConfig`] when it does not parse or fails
    /// validation.
    pub fn from_toml(path: impl AsRef<Path>) -> TileMapResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| TileMapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text)
            .map_err(|e| TileMapError::InvalidConfig(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configured values against their preconditions.
    ///
    /// # Errors
    ///
    /// [`TileMapError::InvalidConfig`] for zero dimensions or a scale that
    /// is not finite and strictly positive (noise divides coordinates by
    /// the scale, so zero is undefined).
    pub fn validate(&self) -> TileMapResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(TileMapError::InvalidConfig(format!(
                "map dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(TileMapError::InvalidConfig(format!(
                "scale must be finite and > 0, got {}",
                self.scale
            )));
        }
        Ok(())
    }

    /// Total number of cells a grid with these dimensions holds.
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
