//! Edge matching between pairs of tiles
//!
//! The first tile is held fixed while the second is tried in each of its
//! eight orientations. Searches return the first match in a fixed order:
//! unmirrored before mirrored, zero to three clockwise quarter turns, and
//! the sides of the fixed tile in top, left, bottom, right order. Callers
//! rely on that order as the tie-break when several matches are possible.

use crate::spatial::symmetry::Orientation;
use crate::spatial::tiles::{Side, Tile};

/// A successful match found by `fits_mirrored`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fit {
    /// Side of the fixed tile that matched
    pub side: Side,
    /// Orientation the candidate had to take for the match
    pub orientation: Orientation,
}

/// Find the first side of `a` whose border equals the facing border of `b`
///
/// Compares a's top with b's bottom, a's left with b's right, a's bottom
/// with b's top and a's right with b's left, in that order. Borders must be
/// equal element for element; reversed borders don't match.
pub fn fits(a: &Tile, b: &Tile) -> Option<Side> {
    Side::SEARCH_ORDER
        .into_iter()
        .find(|&side| a.edge(side) == b.edge(side.opposite()))
}

/// Try `fits` against up to four clockwise rotations of `b`
///
/// Returns the matching side with the number of quarter turns applied to
/// `b`.
pub fn fits_rotated(a: &Tile, b: &Tile) -> Option<(Side, u8)> {
    if let Some(side) = fits(a, b) {
        return Some((side, 0));
    }
    let mut rotated = b.rotate();
    for quarter_turns in 1..4 {
        if let Some(side) = fits(a, &rotated) {
            return Some((side, quarter_turns));
        }
        if quarter_turns < 3 {
            rotated = rotated.rotate();
        }
    }
    None
}

/// Try `fits_rotated` against `b`, then against `b` mirrored
pub fn fits_mirrored(a: &Tile, b: &Tile) -> Option<Fit> {
    let fit = |(side, quarter_turns): (Side, u8), mirrored: bool| Fit {
        side,
        orientation: Orientation::new(quarter_turns, mirrored),
    };
    fits_rotated(a, b)
        .map(|found| fit(found, false))
        .or_else(|| fits_rotated(a, &b.mirror()).map(|found| fit(found, true)))
}
