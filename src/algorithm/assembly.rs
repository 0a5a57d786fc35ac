//! Breadth-first grid reconstruction
//!
//! The walk seeds one corner at (0, 0), oriented so its two matches fall on
//! its right and bottom sides, then repeatedly dequeues a committed placement
//! and searches all unplaced tiles' orientations for a right match and a
//! bottom match. A found neighbor's orientation is committed the moment it is
//! placed; every tile moves unseen → queued → committed, and a walk that ends
//! with uncommitted tiles or a non-rectangular layout is an inconsistency.

use crate::algorithm::corners::identify_corners;
use crate::algorithm::matching::{Side, matches_on};
use crate::io::error::{AssemblyError, Result};
use crate::spatial::grid::{Placement, TileGrid};
use crate::spatial::orientation::Orientation;
use crate::spatial::tile::{Border, Tile};
use itertools::Itertools;
use std::collections::{HashMap, HashSet, VecDeque};

fn has_match_on(side: Side, border: &Border, self_id: u64, tiles: &[Tile]) -> bool {
    tiles
        .iter()
        .filter(|tile| tile.id() != self_id)
        .cartesian_product(Orientation::ALL)
        .any(|(tile, orientation)| matches_on(side, border, &tile.border().oriented(orientation)))
}

/// Find the orientation of a corner tile that puts both of its matches on its
/// right and bottom sides, making it a valid top-left seed
fn seed_orientation(corner: &Tile, tiles: &[Tile]) -> Result<Orientation> {
    Orientation::ALL
        .into_iter()
        .find(|&orientation| {
            let border = corner.border().oriented(orientation);
            has_match_on(Side::Right, &border, corner.id(), tiles)
                && has_match_on(Side::Bottom, &border, corner.id(), tiles)
        })
        .ok_or(AssemblyError::SeedOrientation {
            tile_id: corner.id(),
        })
}

/// First unplaced tile/orientation that fits the given side of `border`
fn find_neighbor(
    side: Side,
    border: &Border,
    placed: &HashSet<u64>,
    tiles: &[Tile],
) -> Option<Placement> {
    tiles
        .iter()
        .filter(|tile| !placed.contains(&tile.id()))
        .cartesian_product(Orientation::ALL)
        .find_map(|(tile, orientation)| {
            let candidate = tile.border().oriented(orientation);
            matches_on(side, border, &candidate).then(|| Placement {
                id: tile.id(),
                orientation,
                border: candidate,
            })
        })
}

/// Reconstruct the full grid layout from a tile set
///
/// Seeds with the lowest-id corner for deterministic output under input
/// reordering. The returned grid has every interior seam verified bit-for-bit.
///
/// # Errors
///
/// Returns [`AssemblyError::CornerCount`] when corner identification fails,
/// [`AssemblyError::SeedOrientation`] when no orientation places the seed
/// corner's matches on its right and bottom sides,
/// [`AssemblyError::IncompleteAssembly`] when the walk terminates with
/// uncommitted tiles, [`AssemblyError::NotRectangular`] when the committed
/// positions do not fill a rectangle, and [`AssemblyError::SeamMismatch`]
/// when a committed interior edge fails re-verification.
pub fn assemble(tiles: &[Tile]) -> Result<TileGrid> {
    let report = identify_corners(tiles)?;
    let Some(seed) = report.corners.first() else {
        return Err(AssemblyError::CornerCount { found: Vec::new() });
    };
    let Some(seed_tile) = tiles.iter().find(|tile| tile.id() == seed.id) else {
        return Err(AssemblyError::CornerCount {
            found: report.ids(),
        });
    };

    let orientation = seed_orientation(seed_tile, tiles)?;

    let mut placements: HashMap<(usize, usize), Placement> = HashMap::new();
    let mut placed_ids: HashSet<u64> = HashSet::new();
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();

    placements.insert(
        (0, 0),
        Placement {
            id: seed_tile.id(),
            orientation,
            border: seed_tile.border().oriented(orientation),
        },
    );
    placed_ids.insert(seed_tile.id());
    queue.push_back((0, 0));

    while let Some((row, col)) = queue.pop_front() {
        let Some(current) = placements.get(&(row, col)).cloned() else {
            continue;
        };

        for (side, next_pos) in [
            (Side::Right, (row, col + 1)),
            (Side::Bottom, (row + 1, col)),
        ] {
            if placements.contains_key(&next_pos) {
                continue;
            }
            if let Some(placement) = find_neighbor(side, &current.border, &placed_ids, tiles) {
                placed_ids.insert(placement.id);
                placements.insert(next_pos, placement);
                queue.push_back(next_pos);
            }
        }
    }

    if placed_ids.len() != tiles.len() {
        return Err(AssemblyError::IncompleteAssembly {
            placed: placed_ids.len(),
            total: tiles.len(),
        });
    }

    let grid = TileGrid::from_placements(&placements)?;
    grid.verify_seams()?;
    Ok(grid)
}
