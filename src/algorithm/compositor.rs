//! Stitching tile interiors into one composite bitmap

use crate::algorithm::assembly::Assembly;
use crate::spatial::bitmap::Bitmap;
use log::info;
use ndarray::{Array2, s};

/// Build the composite image from an assembled grid
///
/// Each tile loses its outer ring of pixels and the remaining interior is
/// copied verbatim to its block position. Tiles are used exactly as the
/// assembler oriented them.
pub fn compose(assembly: &Assembly) -> Bitmap {
    let interior = assembly.tile_side().saturating_sub(2);
    let side = assembly.size() * interior;
    let mut image = Array2::from_elem((side, side), false);

    for ((row, col), tile) in assembly.tiles().indexed_iter() {
        image
            .slice_mut(s![
                row * interior..(row + 1) * interior,
                col * interior..(col + 1) * interior
            ])
            .assign(&tile.interior());
    }

    info!("Composed a {side}x{side} image");
    image
}
