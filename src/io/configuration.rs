//! Text format constants and runtime configuration defaults

// Tile text format
/// Character marking a filled pixel in tile text
pub const FILLED_PIXEL: char = '#';
/// Character marking an empty pixel in tile text
pub const EMPTY_PIXEL: char = '.';
/// Keyword opening every tile header line (`Tile 1234:`)
pub const TILE_HEADER_KEYWORD: &str = "Tile";

// Interior must be non-empty after stripping the border ring
/// Smallest supported tile side length
pub const MIN_TILE_SIDE: usize = 3;

/// Character marking a required cell in stencil text
pub const STENCIL_MARKER: char = '#';

/// Rows of the built-in sea monster stencil
pub const SEA_MONSTER: [&str; 3] = [
    "                  # ",
    "#    ##    ##    ###",
    " #  #  #  #  #  #   ",
];

// Input discovery
/// Extension of puzzle files picked up from a target directory
pub const INPUT_EXTENSION: &str = "txt";

// Output settings
/// Suffix added to exported composite filenames
pub const OUTPUT_SUFFIX: &str = "_composite";
/// Edge length in output pixels of one composite pixel
pub const PNG_PIXEL_SCALE: u32 = 4;
/// Color of filled pixels not covered by a stencil match
pub const WATER_COLOR: [u8; 4] = [40, 110, 200, 255];
/// Color of pixels covered by a stencil match
pub const MONSTER_COLOR: [u8; 4] = [230, 80, 40, 255];
/// Color of empty pixels
pub const BACKGROUND_COLOR: [u8; 4] = [10, 20, 40, 255];

// Synthetic puzzle generation
/// Redraws allowed per tile before border synthesis gives up
pub const MAX_BORDER_ATTEMPTS: usize = 4096;
/// Fixed seed for reproducible synthetic puzzles
pub const DEFAULT_SEED: u64 = 42;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
