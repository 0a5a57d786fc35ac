//! Directional match predicates and the pairwise neighbor search
//!
//! Two facing sides match when the edge bit patterns are equal AND both pairs
//! of bounding corner cells are equal. The corner requirement guards against a
//! reversed-but-unrelated edge pattern comparing equal.
//!
//! The search is exhaustive: every other tile is tried in all 8 orientations
//! against the four sides of the tile under test, O(N² · 8) comparisons. That
//! is fine at puzzle scale (low hundreds of tiles) and no better bound is
//! attempted.

use crate::spatial::orientation::Orientation;
use crate::spatial::tile::{Border, Tile};
use itertools::Itertools;
use std::fmt;

/// One of the four sides of a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    /// Top edge
    Top,
    /// Bottom edge
    Bottom,
    /// Left edge
    Left,
    /// Right edge
    Right,
}

impl Side {
    /// All four sides in a fixed probe order
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// The facing side on a neighboring tile
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// Whether `other` can sit against the given side of `border`
///
/// The candidate's facing edge and both of its bounding corners must equal
/// the tile's edge and corners on that side; e.g. for [`Side::Top`], the
/// candidate's bottom edge and bottom corners against the tile's top edge and
/// top corners.
pub fn matches_on(side: Side, border: &Border, other: &Border) -> bool {
    match side {
        Side::Top => {
            border.top == other.bottom
                && border.top_left == other.bottom_left
                && border.top_right == other.bottom_right
        }
        Side::Bottom => {
            border.bottom == other.top
                && border.bottom_left == other.top_left
                && border.bottom_right == other.top_right
        }
        Side::Left => {
            border.left == other.right
                && border.top_left == other.top_right
                && border.bottom_left == other.bottom_right
        }
        Side::Right => {
            border.right == other.left
                && border.top_right == other.top_left
                && border.bottom_right == other.bottom_left
        }
    }
}

/// A discovered adjacency: some orientation of another tile fits one side
/// of the tile under test (which stays in its default orientation)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighborMatch {
    /// Id of the matching tile
    pub other: u64,
    /// Side of the tile under test the match falls on
    pub side: Side,
    /// Orientation of the matching tile
    pub orientation: Orientation,
}

/// Exhaustive neighbor search for one tile against the whole set
///
/// Self-pairs are skipped by id: orientation is relative, so a tile compared
/// against its own orientations is meaningless. At most one side is recorded
/// per candidate orientation.
pub fn neighbor_matches(tile: &Tile, all: &[Tile]) -> Vec<NeighborMatch> {
    let mut found = Vec::new();

    for (other, orientation) in all
        .iter()
        .filter(|other| other.id() != tile.id())
        .cartesian_product(Orientation::ALL)
    {
        let candidate = other.border().oriented(orientation);
        if let Some(&side) = Side::ALL
            .iter()
            .find(|&&side| matches_on(side, tile.border(), &candidate))
        {
            found.push(NeighborMatch {
                other: other.id(),
                side,
                orientation,
            });
        }
    }

    found
}

/// The distinct sides a match list falls on, in [`Side::ALL`] order
pub fn matched_sides(matches: &[NeighborMatch]) -> Vec<Side> {
    Side::ALL
        .into_iter()
        .filter(|&side| matches.iter().any(|m| m.side == side))
        .collect()
}
