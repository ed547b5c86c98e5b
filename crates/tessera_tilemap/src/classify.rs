//! # Cell Classification
//!
//! Maps a noise sample in [0, 1) to a tile kind via fixed thresholds.
//!
//! The bands are half-open: a sample of exactly 0.33 is dirt, not water,
//! and exactly 0.66 is stone, not dirt. There is no blending or smoothing
//! between bands - the three-way split *is* the whole design.

use crate::cell::{Cell, TileKind};

/// Threshold classifier for noise samples.
pub struct CellClassifier;

impl CellClassifier {
    /// Samples below this are water.
    pub const WATER_MAX: f64 = 0.33;
    /// Samples below this (and at least [`Self::WATER_MAX`]) are dirt.
    pub const DIRT_MAX: f64 = 0.66;

    /// Mote count assigned to freshly generated cells.
    ///
    /// A deliberate placeholder, not derived from noise.
    pub const FRESH_MOTES: u8 = 5;
    /// Height assigned to freshly generated cells. Also a placeholder.
    pub const FRESH_HEIGHT: i8 = 0;

    /// Classifies a noise sample into a tile kind and its walkability.
    #[inline]
    #[must_use]
    pub fn classify(sample: f64) -> (TileKind, bool) {
        let kind = if sample < Self::WATER_MAX {
            TileKind::Water
        } else if sample < Self::DIRT_MAX {
            TileKind::Dirt
        } else {
            TileKind::Stone
        };
        (kind, kind.walkable_by_default())
    }

    /// Builds a complete freshly generated cell from a noise sample.
    #[inline]
    #[must_use]
    pub fn fresh_cell(sample: f64) -> Cell {
        let (kind, walkable) = Self::classify(sample);
        Cell::new(kind, Self::FRESH_MOTES, Self::FRESH_HEIGHT, walkable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_interiors() {
        assert_eq!(CellClassifier::classify(0.1), (TileKind::Water, false));
        assert_eq!(CellClassifier::classify(0.4), (TileKind::Dirt, true));
        assert_eq!(CellClassifier::classify(0.7), (TileKind::Stone, false));
        assert_eq!(CellClassifier::classify(0.9), (TileKind::Stone, false));
    }

    #[test]
    fn test_half_open_boundaries() {
        // Exactly at a threshold belongs to the upper band.
        assert_eq!(CellClassifier::classify(0.33).0, TileKind::Dirt);
        assert_eq!(CellClassifier::classify(0.66).0, TileKind::Stone);
    }

    #[test]
    fn test_range_extremes() {
        assert_eq!(CellClassifier::classify(0.0).0, TileKind::Water);
        assert_eq!(CellClassifier::classify(0.999_999).0, TileKind::Stone);
    }

    #[test]
    fn test_fresh_cell_placeholders() {
        let cell = CellClassifier::fresh_cell(0.5);
        assert_eq!(cell.kind, TileKind::Dirt);
        assert_eq!(cell.motes, 5);
        assert_eq!(cell.height, 0);
        assert!(cell.walkable);
    }

    #[test]
    fn test_classification_is_pure() {
        for i in 0..1000 {
            let sample = f64::from(i) / 1000.0;
            assert_eq!(CellClassifier::classify(sample), CellClassifier::classify(sample));
        }
    }
}
