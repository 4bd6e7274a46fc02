//! Edge-matching tile assembly and stencil search over the stitched image
//!
//! Square tiles with unique borders are placed greedily into a square grid,
//! trying every rotation and mirror image of each candidate. The assembled
//! tiles lose their borders and are stitched into one composite, which is
//! then scanned for a stencil in each of its four rotations.

#![deny(unsafe_code)]

/// Edge matching, grid assembly, compositing and stencil scanning
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Bitmaps, orientations, tiles and the placement grid
pub mod spatial;

pub use io::error::{Result, StitchError};
