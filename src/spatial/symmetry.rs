//! The eight orientations of a square

use crate::spatial::bitmap::{mirror, rotate_clockwise};
use ndarray::Array2;
use std::fmt;

/// One element of the square's symmetry group
///
/// Applying an orientation mirrors first (when `mirrored`) and then rotates
/// clockwise `quarter_turns` times. This is the order in which edge matching
/// discovers orientations, so a recorded match can be replayed verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Orientation {
    /// Clockwise quarter turns, always in `0..4`
    pub quarter_turns: u8,
    /// Whether the pixels are flipped top-to-bottom before rotating
    pub mirrored: bool,
}

impl Orientation {
    /// The orientation that leaves pixels unchanged
    pub const IDENTITY: Self = Self::new(0, false);

    /// All eight orientations in search order
    ///
    /// Unmirrored before mirrored, then by increasing quarter turns.
    pub const ALL: [Self; 8] = [
        Self::new(0, false),
        Self::new(1, false),
        Self::new(2, false),
        Self::new(3, false),
        Self::new(0, true),
        Self::new(1, true),
        Self::new(2, true),
        Self::new(3, true),
    ];

    /// Create an orientation, reducing `quarter_turns` modulo 4
    pub const fn new(quarter_turns: u8, mirrored: bool) -> Self {
        Self {
            quarter_turns: quarter_turns % 4,
            mirrored,
        }
    }

    /// Apply this orientation to a matrix
    pub fn apply<T: Clone>(self, pixels: &Array2<T>) -> Array2<T> {
        let mut oriented = if self.mirrored {
            mirror(pixels)
        } else {
            pixels.clone()
        };
        for _ in 0..self.quarter_turns {
            oriented = rotate_clockwise(&oriented);
        }
        oriented
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees = u16::from(self.quarter_turns) * 90;
        if self.mirrored {
            write!(f, "mirrored, {degrees}° clockwise")
        } else {
            write!(f, "{degrees}° clockwise")
        }
    }
}
