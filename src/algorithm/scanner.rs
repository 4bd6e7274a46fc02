//! Stencil search over the rotations of a composite image
//!
//! The scanner turns the image clockwise one quarter at a time and stops at
//! the first rotation holding at least one stencil match. Mirrored
//! orientations of the image are not searched.

use crate::io::configuration::{SEA_MONSTER, STENCIL_MARKER};
use crate::io::error::{Result, StitchError};
use crate::spatial::bitmap::{Bitmap, count_filled, rotate_clockwise};
use bitvec::prelude::*;
use log::{debug, warn};
use ndarray::Array2;

/// A rectangular pattern of required-filled and don't-care cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stencil {
    cells: Array2<bool>,
    required: Vec<[usize; 2]>,
}

impl Stencil {
    /// Build a stencil from text rows
    ///
    /// `marker` marks required cells; every other character is don't care.
    /// Shorter rows are padded on the right with don't-care cells.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows or no required cells
    pub fn from_rows<S: AsRef<str>>(rows: &[S], marker: char) -> Result<Self> {
        if rows.is_empty() {
            return Err(StitchError::InvalidStencil {
                reason: "stencil has no rows".to_string(),
            });
        }
        let stencil = Self::build(rows, marker);
        if stencil.required.is_empty() {
            return Err(StitchError::InvalidStencil {
                reason: format!("stencil has no '{marker}' cells"),
            });
        }
        Ok(stencil)
    }

    /// The built-in sea monster
    pub fn sea_monster() -> Self {
        Self::build(SEA_MONSTER.as_slice(), STENCIL_MARKER)
    }

    fn build<S: AsRef<str>>(rows: &[S], marker: char) -> Self {
        let height = rows.len();
        let width = rows
            .iter()
            .map(|row| row.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let cells = Array2::from_shape_fn((height, width), |(row, col)| {
            rows.get(row)
                .and_then(|text| text.as_ref().chars().nth(col))
                .is_some_and(|cell| cell == marker)
        });
        let required = cells
            .indexed_iter()
            .filter(|&(_, &cell)| cell)
            .map(|((row, col), _)| [row, col])
            .collect();
        Self { cells, required }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Cells of the pattern (`true` = required filled)
    pub const fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Offsets of the required cells, row-major
    pub fn required(&self) -> &[[usize; 2]] {
        &self.required
    }

    /// Whether every required cell is filled with the stencil's top-left at
    /// `anchor`
    pub fn matches_at(&self, image: &Bitmap, [row, col]: [usize; 2]) -> bool {
        self.required
            .iter()
            .all(|&[dr, dc]| image.get((row + dr, col + dc)).copied().unwrap_or(false))
    }
}

/// Stencil matches found in the winning rotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StencilMatches {
    /// Clockwise quarter turns applied to the input image
    pub quarter_turns: u8,
    /// The image in that rotation
    pub image: Bitmap,
    /// Top-left positions of every match, row-major
    pub anchors: Vec<[usize; 2]>,
    /// Row-major mask of pixels covered by a required stencil cell
    pub coverage: BitVec,
    /// Filled pixels not covered by any match
    pub roughness: usize,
}

impl StencilMatches {
    /// Whether the pixel at `(row, col)` of the rotated image is covered
    pub fn is_covered(&self, row: usize, col: usize) -> bool {
        let index = row * self.image.ncols() + col;
        col < self.image.ncols() && self.coverage.get(index).as_deref() == Some(&true)
    }
}

/// Result of scanning an image for a stencil
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// At least one match in some rotation
    Found(StencilMatches),
    /// No rotation holds a match
    PatternNotFound {
        /// Every filled pixel of the unmodified image
        roughness: usize,
    },
}

impl ScanOutcome {
    /// Roughness of the scan, whether or not the stencil was found
    pub const fn roughness(&self) -> usize {
        match self {
            Self::Found(matches) => matches.roughness,
            Self::PatternNotFound { roughness } => *roughness,
        }
    }

    /// Whether the stencil was found
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Treat a missing pattern as an error
    ///
    /// # Errors
    ///
    /// Returns `PatternNotFound` when no rotation held a match
    pub fn into_result(self) -> Result<StencilMatches> {
        match self {
            Self::Found(matches) => Ok(matches),
            Self::PatternNotFound { roughness } => Err(StitchError::PatternNotFound { roughness }),
        }
    }
}

/// Every anchor at which the stencil fits inside the image and matches
pub fn find_anchors(image: &Bitmap, stencil: &Stencil) -> Vec<[usize; 2]> {
    let (rows, cols) = image.dim();
    let (Some(last_row), Some(last_col)) = (
        rows.checked_sub(stencil.height()),
        cols.checked_sub(stencil.width()),
    ) else {
        return Vec::new();
    };

    let mut anchors = Vec::new();
    for row in 0..=last_row {
        for col in 0..=last_col {
            if stencil.matches_at(image, [row, col]) {
                anchors.push([row, col]);
            }
        }
    }
    anchors
}

/// Search the image's four clockwise rotations for the stencil
///
/// The first rotation with any match wins, even if a later one would hold
/// more.
pub fn scan(image: &Bitmap, stencil: &Stencil) -> ScanOutcome {
    let mut oriented = image.clone();
    for quarter_turns in 0..4_u8 {
        let anchors = find_anchors(&oriented, stencil);
        if !anchors.is_empty() {
            let coverage = coverage_mask(&oriented, stencil, &anchors);
            let roughness = oriented
                .iter()
                .zip(coverage.iter().by_vals())
                .filter(|&(&pixel, covered)| pixel && !covered)
                .count();
            debug!(
                "Found {} stencil matches after {quarter_turns} quarter turns",
                anchors.len()
            );
            return ScanOutcome::Found(StencilMatches {
                quarter_turns,
                image: oriented,
                anchors,
                coverage,
                roughness,
            });
        }
        oriented = rotate_clockwise(&oriented);
    }

    let roughness = count_filled(image);
    warn!("Stencil not found in any rotation; reporting all {roughness} filled pixels");
    ScanOutcome::PatternNotFound { roughness }
}

fn coverage_mask(image: &Bitmap, stencil: &Stencil, anchors: &[[usize; 2]]) -> BitVec {
    let cols = image.ncols();
    let mut coverage = bitvec![0; image.len()];
    for &[row, col] in anchors {
        for &[dr, dc] in stencil.required() {
            if let Some(mut bit) = coverage.get_mut((row + dr) * cols + col + dc) {
                *bit = true;
            }
        }
    }
    coverage
}
