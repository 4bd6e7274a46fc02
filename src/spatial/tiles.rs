//! Square image tiles and their border sequences
//!
//! A tile is an immutable value: rotating or mirroring it yields a new tile
//! with the same id. Borders are never stored; they are read off the current
//! pixel matrix as zero-copy views, so they can't drift out of sync with it.

use crate::io::configuration::MIN_TILE_SIDE;
use crate::io::error::{Result, invalid_input};
use crate::spatial::bitmap::{Bitmap, mirror, rotate_clockwise};
use crate::spatial::symmetry::Orientation;
use ndarray::{ArrayView1, ArrayView2, s};
use std::fmt;

/// Unique tile identifier taken from the puzzle input
pub type TileId = u64;

/// One border of a tile
///
/// Top and bottom read left to right, left and right read top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// First row
    Top,
    /// First column
    Left,
    /// Last row
    Bottom,
    /// Last column
    Right,
}

impl Side {
    /// Order in which edge matching checks the sides of the fixed tile
    pub const SEARCH_ORDER: [Self; 4] = [Self::Top, Self::Left, Self::Bottom, Self::Right];

    /// Numeric side code: 1 = top, 2 = left, 3 = bottom, 4 = right
    pub const fn code(self) -> u8 {
        match self {
            Self::Top => 1,
            Self::Left => 2,
            Self::Bottom => 3,
            Self::Right => 4,
        }
    }

    /// The side an adjacent tile presents against this one
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Left => Self::Right,
            Self::Bottom => Self::Top,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Bottom => "bottom",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// A uniquely identified square pixel matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    pixels: Bitmap,
}

impl Tile {
    /// Create a tile from its id and pixels
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square or its side is shorter
    /// than `MIN_TILE_SIDE`
    pub fn new(id: TileId, pixels: Bitmap) -> Result<Self> {
        let (rows, cols) = pixels.dim();
        if rows != cols {
            return Err(invalid_input(&format!(
                "tile {id} is {rows}x{cols}, tiles must be square"
            )));
        }
        if rows < MIN_TILE_SIDE {
            return Err(invalid_input(&format!(
                "tile {id} has side {rows}, minimum is {MIN_TILE_SIDE}"
            )));
        }
        Ok(Self { id, pixels })
    }

    /// Tile identifier
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Pixels in the tile's current orientation
    pub const fn pixels(&self) -> &Bitmap {
        &self.pixels
    }

    /// Side length N
    pub fn side_length(&self) -> usize {
        self.pixels.nrows()
    }

    /// The tile turned a quarter turn clockwise
    #[must_use]
    pub fn rotate(&self) -> Self {
        Self {
            id: self.id,
            pixels: rotate_clockwise(&self.pixels),
        }
    }

    /// The tile flipped top-to-bottom
    #[must_use]
    pub fn mirror(&self) -> Self {
        Self {
            id: self.id,
            pixels: mirror(&self.pixels),
        }
    }

    /// The tile in the given orientation relative to its current one
    #[must_use]
    pub fn oriented(&self, orientation: Orientation) -> Self {
        Self {
            id: self.id,
            pixels: orientation.apply(&self.pixels),
        }
    }

    /// Border pixels of one side
    pub fn edge(&self, side: Side) -> ArrayView1<'_, bool> {
        let last = self.side_length() - 1;
        match side {
            Side::Top => self.pixels.row(0),
            Side::Left => self.pixels.column(0),
            Side::Bottom => self.pixels.row(last),
            Side::Right => self.pixels.column(last),
        }
    }

    /// The `(N-2) x (N-2)` block inside the border ring
    pub fn interior(&self) -> ArrayView2<'_, bool> {
        let last = self.side_length() - 1;
        self.pixels.slice(s![1..last, 1..last])
    }
}
