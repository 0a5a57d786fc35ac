//! Edge-matching assembler for bordered square image tiles
//!
//! Parses square tiles whose borders are designed to line up with their
//! neighbors, searches all rotation/flip orientations for edge-compatible
//! pairs, identifies the four corner tiles of the assembled image, and
//! reconstructs the full grid layout by breadth-first placement.

#![forbid(unsafe_code)]

/// Neighbor matching, corner identification, and grid assembly
pub mod algorithm;
/// Input parsing, error handling, and the CLI entry point
pub mod io;
/// Tile, border, orientation, and grid data structures
pub mod spatial;

pub use io::error::{AssemblyError, Result};
