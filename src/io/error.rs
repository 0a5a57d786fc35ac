//! Error types for parsing and assembly
//!
//! Two families share one enum: format errors (the input text is malformed,
//! detected before any matching runs) and assembly inconsistencies (the input
//! parsed but the tile set cannot form a single consistent rectangle).
//! [`AssemblyError::is_format_error`] distinguishes them so callers can tell
//! "bad input syntax" from "bad input shape". No partial results accompany
//! either family.

use crate::algorithm::matching::Side;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all parsing and assembly operations
#[derive(Debug)]
pub enum AssemblyError {
    /// Failed to read the input file
    FileSystem {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The input contained no tile blocks
    EmptyInput,

    /// A block's first line does not match `Tile <integer>:`
    MalformedHeader {
        /// Zero-based index of the offending block
        block: usize,
        /// The line as found
        found: String,
    },

    /// A tile's row count and row width disagree
    NonSquareTile {
        /// Tile id from the block header
        tile_id: u64,
        /// Number of grid rows
        rows: usize,
        /// Width of the (uniform) rows
        cols: usize,
    },

    /// A tile's rows have inconsistent lengths
    RaggedRow {
        /// Tile id from the block header
        tile_id: u64,
        /// Zero-based row index
        row: usize,
        /// Expected row length
        expected: usize,
        /// Actual row length
        found: usize,
    },

    /// A grid cell is outside the `#`/`.` alphabet
    InvalidCell {
        /// Tile id from the block header
        tile_id: u64,
        /// Zero-based row index
        row: usize,
        /// Zero-based column index
        col: usize,
        /// The character as found
        found: char,
    },

    /// A tile's side length is below the 2-cell minimum needed for corners
    TileTooSmall {
        /// Tile id from the block header
        tile_id: u64,
        /// Side length as found
        side: usize,
    },

    /// A tile's side length differs from the rest of the set
    MismatchedTileSize {
        /// Tile id from the block header
        tile_id: u64,
        /// Side length established by the first tile
        expected: usize,
        /// Side length as found
        found: usize,
    },

    /// Two blocks carry the same tile id
    DuplicateTileId {
        /// The repeated id
        tile_id: u64,
    },

    /// The number of tiles with exactly 2 matched sides is not 4
    CornerCount {
        /// Ids of the corner candidates that were found
        found: Vec<u64>,
    },

    /// No orientation of the seed corner puts its matches on its right and
    /// bottom sides
    SeedOrientation {
        /// Id of the seed corner
        tile_id: u64,
    },

    /// The breadth-first walk ended with uncommitted tiles
    IncompleteAssembly {
        /// Tiles committed to a position
        placed: usize,
        /// Tiles in the input set
        total: usize,
    },

    /// Committed positions do not fill a rectangle
    NotRectangular {
        /// Tiles committed to a position
        placed: usize,
        /// Rows spanned by committed positions
        rows: usize,
        /// Columns spanned by committed positions
        cols: usize,
    },

    /// An interior seam of the assembled grid is not bit-for-bit equal
    SeamMismatch {
        /// Row of the placement whose seam failed
        row: usize,
        /// Column of the placement whose seam failed
        col: usize,
        /// Side of that placement the mismatch is on
        side: Side,
    },
}

impl AssemblyError {
    /// Whether this is a format error (bad input syntax) as opposed to an
    /// assembly inconsistency (bad input shape)
    pub const fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::FileSystem { .. }
                | Self::EmptyInput
                | Self::MalformedHeader { .. }
                | Self::NonSquareTile { .. }
                | Self::RaggedRow { .. }
                | Self::InvalidCell { .. }
                | Self::TileTooSmall { .. }
                | Self::MismatchedTileSize { .. }
                | Self::DuplicateTileId { .. }
        )
    }
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileSystem { path, source } => {
                write!(f, "Failed to read '{}': {source}", path.display())
            }
            Self::EmptyInput => {
                write!(f, "Input contains no tile blocks")
            }
            Self::MalformedHeader { block, found } => {
                write!(
                    f,
                    "Block {block}: header '{found}' does not match 'Tile <integer>:'"
                )
            }
            Self::NonSquareTile {
                tile_id,
                rows,
                cols,
            } => {
                write!(f, "Tile {tile_id}: grid is {rows}x{cols}, not square")
            }
            Self::RaggedRow {
                tile_id,
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Tile {tile_id}: row {row} has {found} cells, expected {expected}"
                )
            }
            Self::InvalidCell {
                tile_id,
                row,
                col,
                found,
            } => {
                write!(
                    f,
                    "Tile {tile_id}: invalid cell '{found}' at row {row}, column {col} (expected '#' or '.')"
                )
            }
            Self::TileTooSmall { tile_id, side } => {
                write!(f, "Tile {tile_id}: side length {side} is below the minimum of 2")
            }
            Self::MismatchedTileSize {
                tile_id,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Tile {tile_id}: side length {found} differs from the set's side length {expected}"
                )
            }
            Self::DuplicateTileId { tile_id } => {
                write!(f, "Tile id {tile_id} appears more than once")
            }
            Self::CornerCount { found } => {
                write!(
                    f,
                    "Assembly inconsistency: found {} corner tiles ({found:?}), expected exactly 4",
                    found.len()
                )
            }
            Self::SeedOrientation { tile_id } => {
                write!(
                    f,
                    "Assembly inconsistency: no orientation of corner tile {tile_id} places its matches right and bottom"
                )
            }
            Self::IncompleteAssembly { placed, total } => {
                write!(
                    f,
                    "Assembly inconsistency: only {placed} of {total} tiles could be placed"
                )
            }
            Self::NotRectangular { placed, rows, cols } => {
                write!(
                    f,
                    "Assembly inconsistency: {placed} placed tiles do not fill a {rows}x{cols} rectangle"
                )
            }
            Self::SeamMismatch { row, col, side } => {
                write!(
                    f,
                    "Assembly inconsistency: seam mismatch on the {side} side of the placement at ({row}, {col})"
                )
            }
        }
    }
}

impl std::error::Error for AssemblyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for parsing and assembly results
pub type Result<T> = std::result::Result<T, AssemblyError>;
