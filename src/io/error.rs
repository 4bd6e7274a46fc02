//! Error types for parsing, assembly, scanning and export

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all tile stitching operations
#[derive(Debug)]
pub enum StitchError {
    /// Tile set or stencil doesn't meet the engine's requirements
    InvalidInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Puzzle or stencil text could not be parsed
    Parse {
        /// 1-based line number of the offending line
        line: usize,
        /// Description of the syntax problem
        reason: String,
    },

    /// Stencil has no required cells or inconsistent rows
    InvalidStencil {
        /// Explanation of why the stencil was rejected
        reason: String,
    },

    /// No tile has a rotation whose top and left borders are unmatched
    NoCornerTile {
        /// Number of tiles that were searched
        tile_count: usize,
    },

    /// Row-major fill could not find a tile for a required cell
    UnfilledCell {
        /// Grid row of the empty cell
        row: usize,
        /// Grid column of the empty cell
        col: usize,
    },

    /// No rotation of the composite image contains the stencil
    ///
    /// Only produced on request; the scanner reports this as a soft
    /// outcome by default.
    PatternNotFound {
        /// Filled pixel count of the unmodified image
        roughness: usize,
    },

    /// Failed to save a composite image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical or generative computation produced no valid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl StitchError {
    /// Check whether this error means the tiles admit no greedy assembly
    pub const fn is_assembly_failure(&self) -> bool {
        matches!(self, Self::NoCornerTile { .. } | Self::UnfilledCell { .. })
    }
}

impl fmt::Display for StitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "Invalid input: {reason}"),
            Self::Parse { line, reason } => write!(f, "Parse error on line {line}: {reason}"),
            Self::InvalidStencil { reason } => write!(f, "Invalid stencil: {reason}"),
            Self::NoCornerTile { tile_count } => {
                write!(
                    f,
                    "Assembly failed: none of the {tile_count} tiles has a rotation with unmatched top and left borders"
                )
            }
            Self::UnfilledCell { row, col } => {
                write!(f, "Assembly failed: no tile fits cell ({row}, {col})")
            }
            Self::PatternNotFound { roughness } => {
                write!(
                    f,
                    "Stencil not found in any rotation (unmatched roughness {roughness})"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for StitchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for stitching results
pub type Result<T> = std::result::Result<T, StitchError>;

impl From<std::io::Error> for StitchError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Attaches the file being processed to bare I/O errors
pub trait WithPath<T> {
    /// Fill in the path and operation of a `FileSystem` error
    ///
    /// # Errors
    ///
    /// Propagates the original error, with file system errors rewritten to
    /// name `path` and `operation`
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<StitchError>,
{
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|e| match e.into() {
            StitchError::FileSystem { source, .. } => StitchError::FileSystem {
                path: path.to_path_buf(),
                operation,
                source,
            },
            other => other,
        })
    }
}

/// Create an invalid input error
pub fn invalid_input(reason: &impl ToString) -> StitchError {
    StitchError::InvalidInput {
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> StitchError {
    StitchError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
