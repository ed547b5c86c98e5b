//! # Visual Dispatch Contract
//!
//! The rendering layer is an external collaborator: the core only promises
//! to feed it `(position, kind, variant)` triples. The host implements
//! [`TilePlacer`] and supplies a [`VariantPalette`] mapping each tile kind
//! to its ordered visual variant handles - no asset paths or rendering
//! types leak into this crate.
//!
//! Variant selection is **deterministic**: `floor(noise * count)` from the
//! same seeded noise field that classified the cell. A randomized pick
//! would leave classification reproducible but scatter variants differently
//! on every run, so re-dispatching the same grid always places the same
//! tiles.

use crate::cell::TileKind;
use crate::grid::TileGrid;
use crate::noise::NoiseField;

/// Sink for finished tiles. Implemented by the host's rendering layer.
pub trait TilePlacer<H> {
    /// Places one tile: grid position, classification, and the chosen
    /// variant handle.
    fn place(&mut self, x: u32, y: u32, kind: TileKind, variant: &H);
}

/// Host-supplied mapping from tile kind to its ordered variant handles.
///
/// `H` is whatever the host renders with (a texture id, an asset handle,
/// a sprite index). An empty list means the host has no art for that kind
/// and those cells are skipped.
pub struct VariantPalette<H> {
    water: Vec<H>,
    dirt: Vec<H>,
    stone: Vec<H>,
}

impl<H> VariantPalette<H> {
    /// Builds a palette from per-kind variant lists.
    #[must_use]
    pub fn new(water: Vec<H>, dirt: Vec<H>, stone: Vec<H>) -> Self {
        Self { water, dirt, stone }
    }

    /// The ordered variants for a tile kind.
    #[must_use]
    pub fn variants(&self, kind: TileKind) -> &[H] {
        match kind {
            TileKind::Water => &self.water,
            TileKind::Dirt => &self.dirt,
            TileKind::Stone => &self.stone,
        }
    }
}

/// Walks a Ready grid and places every cell through the host's sink.
///
/// The variant for each cell is derived from `(x, y, scale)` via the same
/// noise field used for classification, so a re-run over the same grid
/// places identical variants.
pub fn dispatch_grid<H, P: TilePlacer<H>>(
    grid: &TileGrid,
    noise: &NoiseField,
    scale: f64,
    palette: &VariantPalette<H>,
    placer: &mut P,
) {
    for (x, y, cell) in grid.iter() {
        let variants = palette.variants(cell.kind);
        if variants.is_empty() {
            continue;
        }
        let index = noise.variant_index(x as i32, y as i32, scale, variants.len());
        placer.place(x, y, cell.kind, &variants[index]);
    }
}
