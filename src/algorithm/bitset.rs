use bitvec::prelude::*;
use std::fmt;

/// Fixed-size set of tile indices, used to track which tiles are placed
///
/// Indices are 0-based positions in the puzzle input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSet {
    bits: BitVec,
}

impl TileSet {
    /// Create a set with no tiles present
    pub fn new(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
        }
    }

    /// Insert a tile index
    ///
    /// Returns `true` if the index was newly inserted. Out-of-range indices
    /// are ignored and return `false`.
    pub fn insert(&mut self, index: usize) -> bool {
        match self.bits.get_mut(index) {
            Some(mut bit) if !*bit => {
                *bit = true;
                true
            }
            _ => false,
        }
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Indices not yet in the set, ascending
    pub fn missing(&self) -> Vec<usize> {
        self.bits.iter_zeros().collect()
    }
}

impl fmt::Display for TileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileSet({}/{} placed)", self.count(), self.bits.len())
    }
}
