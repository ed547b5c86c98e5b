//! # Tile Grid Store
//!
//! The owned 2D array of cell records. One grid exists per session: it is
//! populated exactly once (generated or loaded), mutated in place, and
//! superseded by the next session's load.
//!
//! Cells live in a flat buffer ordered all-y-for-x=0, then all-y-for-x=1,
//! and so on. That order *is* the persisted record order, so position is
//! encoded implicitly and must never be reshuffled.

use crate::cell::{Cell, TileKind};
use crate::error::{TileMapError, TileMapResult};

/// An owned, fully populated 2D grid of [`Cell`] records.
///
/// The grid is an explicit instance handed to the engine and mutation
/// calls - there is no process-wide static. `&mut` access is the
/// concurrency story: the borrow checker enforces the single-caller
/// assumption this core is designed around.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl TileGrid {
    /// Builds a grid by invoking `fill` for every `(x, y)` in persisted
    /// order. Infallible: the result is always fully populated.
    #[must_use]
    pub fn from_fn(width: u32, height: u32, mut fill: impl FnMut(u32, u32) -> Cell) -> Self {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for x in 0..width {
            for y in 0..height {
                cells.push(fill(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Rebuilds a grid from a flat record set in persisted order.
    ///
    /// # Errors
    ///
    /// Returns [`TileMapError::CellCountMismatch`] when the record count
    /// does not equal `width * height` - a partially filled grid is never
    /// handed out.
    pub fn from_cells(width: u32, height: u32, cells: Vec<Cell>) -> TileMapResult<Self> {
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(TileMapError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Grid width in cells.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns whether `(x, y)` lies inside the grid.
    #[inline]
    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Returns the cell at `(x, y)`, or `None` outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x as u32, y as u32)])
        } else {
            None
        }
    }

    /// Overwrites `kind`, `motes`, and `height` of the cell at `(x, y)`.
    ///
    /// Returns `true` when the edit applied. Out-of-range coordinates are a
    /// silent no-op returning `false` - tolerated, not an error, because
    /// debug-tooling callers pass scratch values.
    ///
    /// `walkable` is deliberately left untouched: walkability is a
    /// separately managed attribute, and this asymmetry is part of the
    /// mutation contract.
    pub fn apply_edit(&mut self, x: i32, y: i32, kind: TileKind, motes: u8, height: i8) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x as u32, y as u32);
        let cell = &mut self.cells[idx];
        cell.kind = kind;
        cell.motes = motes;
        cell.height = height;
        true
    }

    /// All cells in persisted order.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates `(x, y, cell)` in persisted order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, &Cell)> {
        self.cells.iter().enumerate().map(|(i, cell)| {
            let x = i as u32 / self.height;
            let y = i as u32 % self.height;
            (x, y, cell)
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (x * self.height + y) as usize
    }
}
