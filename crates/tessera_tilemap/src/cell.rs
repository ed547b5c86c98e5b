//! # Cell Records
//!
//! One grid position's tile classification and gameplay attributes.
//!
//! On the wire a cell's kind is its integer tag (1 = water, 2 = dirt,
//! 3 = stone), matching the tags downstream gameplay logic keys on.

use serde::{Deserialize, Serialize};

/// Tile classification tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum TileKind {
    /// Open water. Not walkable.
    Water = 1,
    /// Bare dirt. The only walkable terrain.
    Dirt = 2,
    /// Stone outcrop. Not walkable.
    Stone = 3,
}

impl TileKind {
    /// Returns the integer tag used in persisted records.
    #[inline]
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Converts from an integer tag.
    #[inline]
    #[must_use]
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(Self::Water),
            2 => Some(Self::Dirt),
            3 => Some(Self::Stone),
            _ => None,
        }
    }

    /// Returns whether freshly classified terrain of this kind is walkable.
    ///
    /// This only describes classification defaults. A cell's stored
    /// `walkable` flag is managed separately and may diverge after mutation.
    #[inline]
    #[must_use]
    pub const fn walkable_by_default(self) -> bool {
        matches!(self, Self::Dirt)
    }
}

impl From<TileKind> for u8 {
    fn from(kind: TileKind) -> Self {
        kind.tag()
    }
}

impl TryFrom<u8> for TileKind {
    type Error = String;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::from_tag(tag).ok_or_else(|| format!("unknown tile kind tag: {tag}"))
    }
}

/// One cell of the tile grid.
///
/// Attributes are independently mutable; no cross-field invariant is
/// enforced at write time. In particular `kind` and `walkable` are allowed
/// to drift apart after a raw mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Tile classification.
    pub kind: TileKind,
    /// Abstract resource quantity, 1-100. Consumed by gameplay logic
    /// outside this core.
    pub motes: u8,
    /// Terrain height, -100 to 100 (canonically -100..-2 or 2..100;
    /// freshly generated cells sit at the placeholder 0).
    pub height: i8,
    /// Whether entities may stand on this cell.
    pub walkable: bool,
}

impl Cell {
    /// Creates a cell with every field given explicitly.
    #[inline]
    #[must_use]
    pub const fn new(kind: TileKind, motes: u8, height: i8, walkable: bool) -> Self {
        Self {
            kind,
            motes,
            height,
            walkable,
        }
    }
}
