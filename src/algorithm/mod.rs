/// Greedy grid assembly from pairwise edge matches
pub mod assembly;
/// Fixed-size bitset for tracking placed tiles
pub mod bitset;
/// Border stripping and interior stitching
pub mod compositor;
/// Ordered edge matching across the symmetry group
pub mod matching;
/// End-to-end solve over a tile set
pub mod pipeline;
/// Multi-rotation stencil search and roughness
pub mod scanner;
