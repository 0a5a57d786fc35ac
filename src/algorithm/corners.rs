//! Corner identification and scoring
//!
//! A tile on the assembled image's border has fewer than 4 matching neighbors;
//! the four true corners have exactly 2, on two adjacent sides. The product of
//! the four corner ids is the scored answer. Finding anything other than
//! exactly 4 corner-count-2 tiles means the set cannot form a square image and
//! is surfaced as an inconsistency instead of a silently wrong product.

use crate::algorithm::matching::{Side, matched_sides, neighbor_matches};
use crate::io::error::{AssemblyError, Result};
use crate::spatial::tile::Tile;

/// A tile with exactly two matched sides
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CornerTile {
    /// Tile id
    pub id: u64,
    /// The two sides (in the tile's default orientation) its matches fall on;
    /// seeds the grid-walk orientation during reconstruction
    pub matched_sides: [Side; 2],
}

/// Result of corner identification over a full tile set
#[derive(Clone, Debug)]
pub struct CornerReport {
    /// The four corner tiles, sorted by id
    pub corners: Vec<CornerTile>,
    /// Product of the four corner ids
    pub product: u64,
}

impl CornerReport {
    /// Corner ids in ascending order
    pub fn ids(&self) -> Vec<u64> {
        self.corners.iter().map(|corner| corner.id).collect()
    }
}

/// Identify the four corner tiles and their id product
///
/// Order-independent: the result depends only on the set of tiles supplied,
/// not the order they appear in.
///
/// # Errors
///
/// Returns [`AssemblyError::CornerCount`] when the number of tiles with
/// exactly two matched sides is not exactly 4.
pub fn identify_corners(tiles: &[Tile]) -> Result<CornerReport> {
    let mut corners = Vec::new();

    for tile in tiles {
        let matches = neighbor_matches(tile, tiles);
        if let &[first, second] = matched_sides(&matches).as_slice() {
            corners.push(CornerTile {
                id: tile.id(),
                matched_sides: [first, second],
            });
        }
    }

    if corners.len() != 4 {
        return Err(AssemblyError::CornerCount {
            found: corners.iter().map(|corner| corner.id).collect(),
        });
    }

    corners.sort_by_key(|corner| corner.id);
    let product = corners.iter().map(|corner| corner.id).product();

    Ok(CornerReport { corners, product })
}
