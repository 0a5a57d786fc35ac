//! Rotation/flip orientation transforms
//!
//! A tile has 8 reachable orientations: 0-3 clockwise quarter turns, each with
//! or without a prior horizontal-axis flip. All transforms here are pure; the
//! assembled grid stores the chosen oriented border per cell rather than
//! mutating a shared tile, so the same tile can be examined from multiple
//! search branches without aliasing.
//!
//! A clockwise quarter turn moves the left edge to the top and the right edge
//! to the bottom, reversing both (their read direction inverts relative to the
//! fixed reading-order convention), while top and bottom slide to right and
//! left unreversed. A flip swaps top with bottom, reverses left and right in
//! place, and swaps the vertical corner pairs.

use crate::spatial::tile::Border;
use bitvec::vec::BitVec;
use ndarray::Array2;
use std::fmt;

/// One of the 8 rotate/flip transforms
///
/// The flip, when present, is applied before the quarter turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// Whether a horizontal-axis flip precedes the rotation
    pub flipped: bool,
    /// Number of clockwise quarter turns, 0 through 3
    pub quarter_turns: u8,
}

impl Orientation {
    /// The do-nothing transform
    pub const IDENTITY: Self = Self {
        flipped: false,
        quarter_turns: 0,
    };

    /// All 8 orientations, identity first, then the remaining rotations,
    /// then the four flipped rotations
    pub const ALL: [Self; 8] = [
        Self { flipped: false, quarter_turns: 0 },
        Self { flipped: false, quarter_turns: 1 },
        Self { flipped: false, quarter_turns: 2 },
        Self { flipped: false, quarter_turns: 3 },
        Self { flipped: true, quarter_turns: 0 },
        Self { flipped: true, quarter_turns: 1 },
        Self { flipped: true, quarter_turns: 2 },
        Self { flipped: true, quarter_turns: 3 },
    ];

    /// Whether this is the identity transform
    pub const fn is_identity(self) -> bool {
        !self.flipped && self.quarter_turns == 0
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", u16::from(self.quarter_turns) * 90)?;
        if self.flipped {
            write!(f, "F")?;
        }
        Ok(())
    }
}

fn reversed(bits: &BitVec) -> BitVec {
    bits.iter().by_vals().rev().collect()
}

impl Border {
    /// Border after one clockwise quarter turn
    pub fn rotated(&self) -> Self {
        Self {
            top: reversed(&self.left),
            right: self.top.clone(),
            bottom: reversed(&self.right),
            left: self.bottom.clone(),
            top_left: self.bottom_left,
            top_right: self.top_left,
            bottom_right: self.top_right,
            bottom_left: self.bottom_right,
        }
    }

    /// Border after a horizontal-axis flip (top and bottom swap)
    pub fn flipped(&self) -> Self {
        Self {
            top: self.bottom.clone(),
            bottom: self.top.clone(),
            left: reversed(&self.left),
            right: reversed(&self.right),
            top_left: self.bottom_left,
            top_right: self.bottom_right,
            bottom_left: self.top_left,
            bottom_right: self.top_right,
        }
    }

    /// Border after applying a full orientation (flip first, then turns)
    pub fn oriented(&self, orientation: Orientation) -> Self {
        let mut border = if orientation.flipped {
            self.flipped()
        } else {
            self.clone()
        };
        for _ in 0..orientation.quarter_turns {
            border = border.rotated();
        }
        border
    }
}

/// Cell grid after one clockwise quarter turn
pub fn rotated_cells(cells: &Array2<bool>) -> Array2<bool> {
    let n = cells.nrows();
    Array2::from_shape_fn((n, n), |(row, col)| {
        cells.get((n - 1 - col, row)).copied().unwrap_or(false)
    })
}

/// Cell grid after a horizontal-axis flip (row order reversed)
pub fn flipped_cells(cells: &Array2<bool>) -> Array2<bool> {
    let n = cells.nrows();
    Array2::from_shape_fn((n, n), |(row, col)| {
        cells.get((n - 1 - row, col)).copied().unwrap_or(false)
    })
}

/// Cell grid after applying a full orientation
///
/// Only needed when the actual image content matters; edge/corner metadata is
/// enough for all matching, so the grid stays unmaterialized during search.
pub fn oriented_cells(cells: &Array2<bool>, orientation: Orientation) -> Array2<bool> {
    let mut current = if orientation.flipped {
        flipped_cells(cells)
    } else {
        cells.clone()
    };
    for _ in 0..orientation.quarter_turns {
        current = rotated_cells(&current);
    }
    current
}
