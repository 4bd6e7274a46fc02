//! End-to-end run: assemble, compose, scan

use crate::algorithm::assembly::{Assembly, assemble};
use crate::algorithm::compositor::compose;
use crate::algorithm::scanner::{ScanOutcome, Stencil, scan};
use crate::io::error::Result;
use crate::spatial::bitmap::Bitmap;
use crate::spatial::tiles::Tile;
use log::info;

/// Everything produced by one run over a puzzle
#[derive(Debug, Clone)]
pub struct Solution {
    /// The assembled grid with resolved orientations
    pub assembly: Assembly,
    /// Product of the four corner tile ids
    pub corner_product: u64,
    /// Composite image in assembly orientation
    pub image: Bitmap,
    /// Result of the stencil search over `image`
    pub scan: ScanOutcome,
}

impl Solution {
    /// Roughness reported by the scan
    pub const fn roughness(&self) -> usize {
        self.scan.roughness()
    }
}

/// Assemble the tiles, stitch the composite and scan it for the stencil
///
/// # Errors
///
/// Returns an error if assembly fails or the corner product overflows. A
/// missing stencil is not an error here; see `ScanOutcome`.
pub fn solve(tiles: &[Tile], stencil: &Stencil) -> Result<Solution> {
    let assembly = assemble(tiles)?;
    let corner_product = assembly.corner_product()?;
    info!(
        "Corner tiles {:?} multiply to {corner_product}",
        assembly.corner_ids()
    );

    let image = compose(&assembly);
    let outcome = scan(&image, stencil);
    info!("Roughness {}", outcome.roughness());

    Ok(Solution {
        assembly,
        corner_product,
        image,
        scan: outcome,
    })
}
