//! Seeded generation of uniquely solvable tile puzzles
//!
//! A source bitmap is cut into blocks that become tile interiors. Each tile
//! gets a random border ring, copying the row or column it shares with its
//! upper and left neighbours. Fresh borders are redrawn until they are
//! non-palindromic and unique up to reversal across the whole puzzle, which
//! leaves exactly one consistent assembly for the greedy assembler to find.

use crate::io::configuration::{MAX_BORDER_ATTEMPTS, MIN_TILE_SIDE};
use crate::io::error::{Result, computation_error, invalid_input};
use crate::spatial::bitmap::Bitmap;
use crate::spatial::symmetry::Orientation;
use crate::spatial::tiles::{Side, Tile, TileId};
use ndarray::{Array2, ArrayView2, s};
use rand::seq::SliceRandom;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::HashSet;

// Scrambled ids are drawn from 1000..=9999
const SCRAMBLED_ID_BASE: TileId = 1000;
const SCRAMBLED_ID_RANGE: usize = 9000;

/// A generated puzzle together with its known solution
#[derive(Debug, Clone)]
pub struct SyntheticPuzzle {
    /// Tiles in puzzle input order
    pub tiles: Vec<Tile>,
    /// Tile ids at their true grid positions
    pub layout: Array2<TileId>,
    /// Bitmap the interiors were cut from
    pub image: Bitmap,
}

impl SyntheticPuzzle {
    /// Generate a scrambled puzzle over a random source image
    ///
    /// # Errors
    ///
    /// Returns an error if `grid_size` is zero, `tile_side` is below
    /// `MIN_TILE_SIDE`, or unique borders could not be drawn
    pub fn generate(grid_size: usize, tile_side: usize, seed: u64) -> Result<Self> {
        if grid_size == 0 || tile_side < MIN_TILE_SIDE {
            return Err(invalid_input(&format!(
                "cannot generate a {grid_size}x{grid_size} puzzle of side-{tile_side} tiles"
            )));
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let side = grid_size * (tile_side - 2);
        let image = Array2::from_shape_fn((side, side), |_| rng.random::<bool>());
        Self::build(image, tile_side, true, &mut rng)
    }

    /// Cut a square source image into a puzzle
    ///
    /// Without `scramble`, ids run 1..=n in row-major order and every tile
    /// keeps its true orientation. With it, ids are random four-digit numbers
    /// and tiles are randomly oriented and shuffled.
    ///
    /// # Errors
    ///
    /// Returns an error if the image is empty, not square, or not a whole
    /// number of `tile_side - 2` blocks wide, or if unique borders could not
    /// be drawn
    pub fn from_image(image: &Bitmap, tile_side: usize, scramble: bool, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::build(image.clone(), tile_side, scramble, &mut rng)
    }

    fn build(image: Bitmap, tile_side: usize, scramble: bool, rng: &mut StdRng) -> Result<Self> {
        let (rows, cols) = image.dim();
        if tile_side < MIN_TILE_SIDE {
            return Err(invalid_input(&format!(
                "tile side {tile_side} is below the minimum of {MIN_TILE_SIDE}"
            )));
        }
        let interior = tile_side - 2;
        if rows == 0 || rows != cols || rows % interior != 0 {
            return Err(invalid_input(&format!(
                "a {rows}x{cols} image can't be cut into {interior}x{interior} tile interiors"
            )));
        }
        let grid_size = rows / interior;
        if scramble && grid_size * grid_size > SCRAMBLED_ID_RANGE {
            return Err(invalid_input(&format!(
                "{} tiles exceed the {SCRAMBLED_ID_RANGE} available scrambled ids",
                grid_size * grid_size
            )));
        }

        let mut used_borders = HashSet::new();
        let mut cells: Vec<Bitmap> = Vec::with_capacity(grid_size * grid_size);
        for row in 0..grid_size {
            for col in 0..grid_size {
                let block = image.slice(s![
                    row * interior..(row + 1) * interior,
                    col * interior..(col + 1) * interior
                ]);
                let above = row
                    .checked_sub(1)
                    .and_then(|above_row| cells.get(above_row * grid_size + col));
                let left = col
                    .checked_sub(1)
                    .and_then(|left_col| cells.get(row * grid_size + left_col));
                let pixels = draw_tile(rng, &mut used_borders, block, above, left)?;
                cells.push(pixels);
            }
        }

        let count = cells.len();
        let ids: Vec<TileId> = if scramble {
            sample(rng, SCRAMBLED_ID_RANGE, count)
                .into_iter()
                .map(|offset| SCRAMBLED_ID_BASE + offset as TileId)
                .collect()
        } else {
            (1..=count as TileId).collect()
        };

        let mut tiles = Vec::with_capacity(count);
        for (pixels, &id) in cells.into_iter().zip(&ids) {
            let tile = Tile::new(id, pixels)?;
            tiles.push(if scramble {
                let index = rng.random_range(0..Orientation::ALL.len());
                let orientation = Orientation::ALL
                    .get(index)
                    .copied()
                    .unwrap_or(Orientation::IDENTITY);
                tile.oriented(orientation)
            } else {
                tile
            });
        }
        if scramble {
            tiles.shuffle(rng);
        }

        let layout = Array2::from_shape_vec((grid_size, grid_size), ids)
            .map_err(|error| computation_error("puzzle synthesis", &error))?;

        Ok(Self {
            tiles,
            layout,
            image,
        })
    }
}

/// Canonical form of a border sequence, identical for both reading directions
fn border_key(border: &[bool]) -> Vec<bool> {
    let reversed: Vec<bool> = border.iter().rev().copied().collect();
    if reversed.as_slice() < border {
        reversed
    } else {
        border.to_vec()
    }
}

fn is_palindrome(border: &[bool]) -> bool {
    border.iter().eq(border.iter().rev())
}

// Redraws the free pixels of one tile until its fresh borders are usable
fn draw_tile(
    rng: &mut StdRng,
    used_borders: &mut HashSet<Vec<bool>>,
    interior: ArrayView2<'_, bool>,
    above: Option<&Bitmap>,
    left: Option<&Bitmap>,
) -> Result<Bitmap> {
    let side = interior.nrows() + 2;
    let last = side - 1;

    // Inherited borders were registered by the neighbour that owns them
    let mut fresh_sides = vec![Side::Bottom, Side::Right];
    if above.is_none() {
        fresh_sides.push(Side::Top);
    }
    if left.is_none() {
        fresh_sides.push(Side::Left);
    }

    for _ in 0..MAX_BORDER_ATTEMPTS {
        let mut pixels = Array2::from_shape_fn((side, side), |_| rng.random::<bool>());
        pixels.slice_mut(s![1..last, 1..last]).assign(&interior);
        if let Some(neighbour) = above {
            pixels.row_mut(0).assign(&neighbour.row(last));
        }
        if let Some(neighbour) = left {
            pixels.column_mut(0).assign(&neighbour.column(last));
        }

        let mut keys = HashSet::new();
        let usable = fresh_sides.iter().all(|&border_side| {
            let border = match border_side {
                Side::Top => pixels.row(0),
                Side::Left => pixels.column(0),
                Side::Bottom => pixels.row(last),
                Side::Right => pixels.column(last),
            }
            .to_vec();
            !is_palindrome(&border)
                && keys.insert(border_key(&border))
                && !used_borders.contains(&border_key(&border))
        });

        if usable {
            used_borders.extend(keys);
            return Ok(pixels);
        }
    }

    Err(computation_error(
        "puzzle synthesis",
        &format!("no unique borders for side-{side} tiles after {MAX_BORDER_ATTEMPTS} draws"),
    ))
}
