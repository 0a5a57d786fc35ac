//! Spatial data structures for tiles and the assembled grid
//!
//! This module contains spatial-related functionality including:
//! - Tile and border records derived from parsed cell grids
//! - Rotation/flip orientation transforms
//! - The position-indexed assembled grid

/// Assembled grid table and seam verification
pub mod grid;
/// Rotation/flip orientation transforms over borders and cell grids
pub mod orientation;
/// Tile and border data structures
pub mod tile;

pub use grid::TileGrid;
pub use orientation::Orientation;
pub use tile::{Border, Tile};
