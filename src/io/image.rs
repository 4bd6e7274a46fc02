//! PNG export of composite images with stencil matches highlighted

use crate::algorithm::scanner::ScanOutcome;
use crate::io::configuration::{BACKGROUND_COLOR, MONSTER_COLOR, PNG_PIXEL_SCALE, WATER_COLOR};
use crate::io::error::{Result, StitchError, computation_error};
use crate::spatial::bitmap::Bitmap;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

// Converts one bitmap axis to scaled output pixels
fn scaled_extent(cells: usize) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(PNG_PIXEL_SCALE))
        .ok_or_else(|| computation_error("png export", &format!("{cells} pixels exceed image limits")))
}

/// Render a scan result to an RGBA buffer
///
/// When the stencil was found the image is drawn in the winning rotation with
/// matched pixels highlighted; otherwise the composite is drawn as given.
///
/// # Errors
///
/// Returns an error if the scaled image would not fit `u32` dimensions
pub fn render_scan(image: &Bitmap, outcome: &ScanOutcome) -> Result<RgbaImage> {
    let shown = match outcome {
        ScanOutcome::Found(matches) => &matches.image,
        ScanOutcome::PatternNotFound { .. } => image,
    };
    let width = scaled_extent(shown.ncols())?;
    let height = scaled_extent(shown.nrows())?;

    let buffer = ImageBuffer::from_fn(width, height, |x, y| {
        let row = (y / PNG_PIXEL_SCALE) as usize;
        let col = (x / PNG_PIXEL_SCALE) as usize;
        let filled = shown.get((row, col)).copied().unwrap_or(false);
        let covered = match outcome {
            ScanOutcome::Found(matches) => matches.is_covered(row, col),
            ScanOutcome::PatternNotFound { .. } => false,
        };
        let color = match (filled, covered) {
            (true, true) => MONSTER_COLOR,
            (true, false) => WATER_COLOR,
            (false, _) => BACKGROUND_COLOR,
        };
        Rgba(color)
    });
    Ok(buffer)
}

/// Save a scan result as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - The image is too large to encode
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_scan_as_png(image: &Bitmap, outcome: &ScanOutcome, output_path: &Path) -> Result<()> {
    let buffer = render_scan(image, outcome)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StitchError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    buffer
        .save(output_path)
        .map_err(|e| StitchError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
