/// Command-line interface and batch file processing
pub mod cli;
/// Text format constants and output settings
pub mod configuration;
/// Error types and result aliases
pub mod error;
/// PNG export of scanned composites
pub mod image;
/// Tile and stencil text parsing
pub mod parse;
/// Progress bar management for batch runs
pub mod progress;
