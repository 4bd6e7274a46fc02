//! Spatial data structures and pixel transforms
//!
//! This module contains spatial-related functionality including:
//! - Boolean bitmaps and the rotate/mirror primitives
//! - The eight-element symmetry group of a square
//! - Tiles and their border sequences
//! - The placement grid used during assembly
//! - Synthetic puzzle generation

/// Boolean bitmaps with rotation and mirroring
pub mod bitmap;
/// Placement grid state during assembly
pub mod grid;
/// Seeded generator for uniquely solvable puzzles
pub mod synthesis;
/// Orientations of a square
pub mod symmetry;
/// Tiles, sides and border extraction
pub mod tiles;

pub use bitmap::Bitmap;
pub use symmetry::Orientation;
pub use tiles::{Side, Tile, TileId};
