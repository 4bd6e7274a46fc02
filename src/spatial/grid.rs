//! Placement grid filled cell by cell during assembly

use crate::io::error::{Result, StitchError, computation_error};
use crate::spatial::tiles::Tile;
use ndarray::Array2;

/// Side length of the smallest square grid holding `tile_count` tiles
pub const fn grid_size(tile_count: usize) -> usize {
    let root = tile_count.isqrt();
    if root * root < tile_count {
        root + 1
    } else {
        root
    }
}

/// Square grid of cells, each empty or holding a resolved tile
///
/// Cells are addressed as `[row, col]` and enumerated in row-major order.
/// A cell is written at most once; `place` refuses occupied cells.
#[derive(Debug, Clone)]
pub struct PlacementGrid {
    cells: Array2<Option<Tile>>,
}

impl PlacementGrid {
    /// Create an empty grid large enough for `tile_count` tiles
    pub fn for_tile_count(tile_count: usize) -> Self {
        let size = grid_size(tile_count);
        Self {
            cells: Array2::from_elem((size, size), None),
        }
    }

    /// Number of rows (equal to the number of columns)
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row-major index to `[row, col]`
    pub fn position(&self, index: usize) -> [usize; 2] {
        let size = self.size().max(1);
        [index / size, index % size]
    }

    /// Cell to the right, if not in the last column
    pub fn right_of(&self, [row, col]: [usize; 2]) -> Option<[usize; 2]> {
        (col + 1 < self.size()).then_some([row, col + 1])
    }

    /// Cell below, if not in the last row
    pub fn below(&self, [row, col]: [usize; 2]) -> Option<[usize; 2]> {
        (row + 1 < self.size()).then_some([row + 1, col])
    }

    /// Tile placed at a cell
    pub fn get(&self, [row, col]: [usize; 2]) -> Option<&Tile> {
        self.cells.get((row, col)).and_then(Option::as_ref)
    }

    /// Whether a cell holds a tile
    pub fn is_filled(&self, position: [usize; 2]) -> bool {
        self.get(position).is_some()
    }

    /// Put a tile into an empty cell
    ///
    /// Returns `false` and leaves the grid unchanged when the cell is
    /// occupied or out of bounds.
    pub fn place(&mut self, [row, col]: [usize; 2], tile: Tile) -> bool {
        match self.cells.get_mut((row, col)) {
            Some(cell) if cell.is_none() => {
                *cell = Some(tile);
                true
            }
            _ => false,
        }
    }

    /// First empty cell in row-major order
    pub fn first_empty(&self) -> Option<[usize; 2]> {
        self.cells
            .indexed_iter()
            .find(|(_, cell)| cell.is_none())
            .map(|((row, col), _)| [row, col])
    }

    /// Convert into a grid of tiles once every cell is filled
    ///
    /// # Errors
    ///
    /// Returns `UnfilledCell` naming the first empty cell when the grid is
    /// incomplete
    pub fn into_complete(self) -> Result<Array2<Tile>> {
        if let Some([row, col]) = self.first_empty() {
            return Err(StitchError::UnfilledCell { row, col });
        }
        let size = self.size();
        let tiles: Vec<Tile> = self.cells.iter().flatten().cloned().collect();
        Array2::from_shape_vec((size, size), tiles)
            .map_err(|error| computation_error("grid completion", &error))
    }
}
