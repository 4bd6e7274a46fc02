//! Greedy grid assembly from pairwise edge matches
//!
//! Assembly runs in two phases. Corner discovery finds the first tile, in
//! input order, with a rotation whose top and left borders match no other
//! tile, and commits it to the top-left cell. The row-major fill then walks
//! the grid, matching each placed tile against every unplaced one and
//! committing candidates below or to the right of it.
//!
//! The fill never backtracks. Inputs are expected to admit exactly one
//! consistent assembly; when a step finds nothing to place, assembly stops
//! with a typed error instead of looping.

use crate::algorithm::bitset::TileSet;
use crate::algorithm::matching::fits_mirrored;
use crate::io::error::{Result, StitchError, computation_error, invalid_input};
use crate::spatial::grid::PlacementGrid;
use crate::spatial::tiles::{Side, Tile, TileId};
use log::{debug, info, trace};
use ndarray::Array2;
use std::collections::HashSet;

/// A completed grid of tiles, each in its resolved orientation
#[derive(Debug, Clone)]
pub struct Assembly {
    tiles: Array2<Tile>,
}

impl Assembly {
    /// Number of rows (equal to the number of columns)
    pub fn size(&self) -> usize {
        self.tiles.nrows()
    }

    /// Side length of every tile
    pub fn tile_side(&self) -> usize {
        self.tiles.first().map_or(0, Tile::side_length)
    }

    /// Tiles indexed by `(row, col)`
    pub const fn tiles(&self) -> &Array2<Tile> {
        &self.tiles
    }

    /// Tile at a grid cell
    pub fn tile_at(&self, row: usize, col: usize) -> Option<&Tile> {
        self.tiles.get((row, col))
    }

    /// Tile ids indexed by `(row, col)`
    pub fn ids(&self) -> Array2<TileId> {
        self.tiles.map(Tile::id)
    }

    /// Ids of the top-left, top-right, bottom-left and bottom-right tiles
    pub fn corner_ids(&self) -> [TileId; 4] {
        let last = self.size().saturating_sub(1);
        [(0, 0), (0, last), (last, 0), (last, last)]
            .map(|(row, col)| self.tile_at(row, col).map_or(0, Tile::id))
    }

    /// Product of the four corner ids
    ///
    /// # Errors
    ///
    /// Returns an error if the product overflows `u64`
    pub fn corner_product(&self) -> Result<u64> {
        self.corner_ids()
            .into_iter()
            .try_fold(1_u64, u64::checked_mul)
            .ok_or_else(|| {
                computation_error("corner product", &"product of corner ids overflows u64")
            })
    }
}

/// Place every tile into a square grid
///
/// `tiles` is never modified; orientations accepted during assembly live
/// only in the returned `Assembly`.
///
/// # Errors
///
/// Returns an error if:
/// - The tile set is empty, has mixed side lengths or repeats an id
/// - No tile qualifies as the top-left corner (`NoCornerTile`)
/// - A fill step finds no tile for a required cell (`UnfilledCell`)
pub fn assemble(tiles: &[Tile]) -> Result<Assembly> {
    validate(tiles)?;

    let mut grid = PlacementGrid::for_tile_count(tiles.len());
    let mut placed = TileSet::new(tiles.len());
    info!(
        "Assembling {} tiles into a {}x{} grid",
        tiles.len(),
        grid.size(),
        grid.size()
    );

    let (corner_index, corner) = find_corner(tiles)?;
    placed.insert(corner_index);
    grid.place([0, 0], corner);

    for index in 0..grid.cell_count().saturating_sub(1) {
        let position = grid.position(index);
        let right = grid.right_of(position);
        let below = grid.below(position);
        let open = |grid: &PlacementGrid, target: Option<[usize; 2]>| {
            target.filter(|&cell| !grid.is_filled(cell))
        };
        if open(&grid, right).is_none() && open(&grid, below).is_none() {
            continue;
        }

        let Some(anchor) = grid.get(position).cloned() else {
            let [row, col] = position;
            return Err(StitchError::UnfilledCell { row, col });
        };

        for candidate_index in placed.missing() {
            let Some(candidate) = tiles.get(candidate_index) else {
                continue;
            };
            let Some(fit) = fits_mirrored(&anchor, candidate) else {
                continue;
            };
            let target = match fit.side {
                Side::Bottom => open(&grid, below),
                Side::Right => open(&grid, right),
                Side::Top | Side::Left => None,
            };
            let Some(target) = target else {
                continue;
            };

            trace!(
                "Placing tile {} at {target:?} ({} of tile {}, {})",
                candidate.id(),
                fit.side,
                anchor.id(),
                fit.orientation
            );
            if grid.place(target, candidate.oriented(fit.orientation)) {
                placed.insert(candidate_index);
            }
            if open(&grid, right).is_none() && open(&grid, below).is_none() {
                break;
            }
        }

        if let Some([row, col]) = open(&grid, right).or_else(|| open(&grid, below)) {
            return Err(StitchError::UnfilledCell { row, col });
        }
    }

    debug!("Placed {placed}");
    Ok(Assembly {
        tiles: grid.into_complete()?,
    })
}

fn validate(tiles: &[Tile]) -> Result<()> {
    let Some(first) = tiles.first() else {
        return Err(invalid_input(&"no tiles to assemble"));
    };
    let side = first.side_length();
    if let Some(odd) = tiles.iter().find(|tile| tile.side_length() != side) {
        return Err(invalid_input(&format!(
            "tile {} has side {}, expected {side} like tile {}",
            odd.id(),
            odd.side_length(),
            first.id()
        )));
    }
    let mut seen = HashSet::with_capacity(tiles.len());
    if let Some(duplicate) = tiles.iter().find(|tile| !seen.insert(tile.id())) {
        return Err(invalid_input(&format!(
            "tile id {} appears more than once",
            duplicate.id()
        )));
    }
    Ok(())
}

// Returns the input index of the corner tile and its accepted rotation
fn find_corner(tiles: &[Tile]) -> Result<(usize, Tile)> {
    for (index, tile) in tiles.iter().enumerate() {
        let mut candidate = tile.clone();
        for quarter_turns in 0..4 {
            if !top_or_left_matches(&candidate, index, tiles) {
                debug!(
                    "Tile {} is the top-left corner after {quarter_turns} quarter turns",
                    tile.id()
                );
                return Ok((index, candidate));
            }
            candidate = candidate.rotate();
        }
    }
    Err(StitchError::NoCornerTile {
        tile_count: tiles.len(),
    })
}

fn top_or_left_matches(candidate: &Tile, own_index: usize, tiles: &[Tile]) -> bool {
    let mut top = false;
    let mut left = false;
    for (index, other) in tiles.iter().enumerate() {
        if index == own_index {
            continue;
        }
        match fits_mirrored(candidate, other).map(|fit| fit.side) {
            Some(Side::Top) => top = true,
            Some(Side::Left) => left = true,
            _ => {}
        }
        if top && left {
            break;
        }
    }
    top || left
}
