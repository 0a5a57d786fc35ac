//! Tile and border data structures
//!
//! A tile is a square grid of filled/empty cells with a unique id. For
//! matching purposes it is reduced to a border record: the four edge bit
//! patterns with corner cells excluded, plus the four corner cells tracked
//! separately. Matching on edges alone can produce false positives from a
//! reversed-but-unrelated edge, so the bounding corners participate in every
//! comparison.

use bitvec::vec::BitVec;
use ndarray::Array2;
use std::fmt;

/// Border record of a square tile
///
/// Edges run in reading order: `top` and `bottom` left-to-right, `left` and
/// `right` top-to-bottom, each excluding the two corner cells at its ends.
/// Two borders are structurally equal when all eight fields match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Border {
    /// Top edge, corners excluded
    pub top: BitVec,
    /// Bottom edge, corners excluded
    pub bottom: BitVec,
    /// Left edge, corners excluded
    pub left: BitVec,
    /// Right edge, corners excluded
    pub right: BitVec,
    /// Top-left corner cell
    pub top_left: bool,
    /// Top-right corner cell
    pub top_right: bool,
    /// Bottom-left corner cell
    pub bottom_left: bool,
    /// Bottom-right corner cell
    pub bottom_right: bool,
}

impl Border {
    /// Extract the border record from a square cell grid
    ///
    /// The grid is assumed validated (square, side at least 2); cells outside
    /// the stored shape read as empty.
    pub fn from_cells(cells: &Array2<bool>) -> Self {
        let n = cells.nrows();
        let at = |row: usize, col: usize| cells.get((row, col)).copied().unwrap_or(false);

        Self {
            top: (1..n.saturating_sub(1)).map(|col| at(0, col)).collect(),
            bottom: (1..n.saturating_sub(1)).map(|col| at(n - 1, col)).collect(),
            left: (1..n.saturating_sub(1)).map(|row| at(row, 0)).collect(),
            right: (1..n.saturating_sub(1)).map(|row| at(row, n - 1)).collect(),
            top_left: at(0, 0),
            top_right: at(0, n.saturating_sub(1)),
            bottom_left: at(n.saturating_sub(1), 0),
            bottom_right: at(n.saturating_sub(1), n.saturating_sub(1)),
        }
    }

    /// Side length of the tile this border was taken from
    pub fn side(&self) -> usize {
        self.top.len() + 2
    }
}

/// A parsed tile: unique id, square cell grid, and cached border record
///
/// Immutable after parsing. Orientation changes are pure transforms producing
/// new border values, never in-place edits (see [`crate::spatial::orientation`]).
#[derive(Clone, Debug)]
pub struct Tile {
    id: u64,
    cells: Array2<bool>,
    border: Border,
}

impl Tile {
    /// Build a tile from a validated square cell grid
    pub fn new(id: u64, cells: Array2<bool>) -> Self {
        let border = Border::from_cells(&cells);
        Self { id, cells, border }
    }

    /// Unique tile identifier
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// The full cell grid (`true` = filled)
    pub const fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    /// The cached border record for the default orientation
    pub const fn border(&self) -> &Border {
        &self.border
    }

    /// Side length of the square grid
    pub fn side(&self) -> usize {
        self.cells.nrows()
    }
}

const fn cell_char(filled: bool) -> char {
    if filled { '#' } else { '.' }
}

impl fmt::Display for Tile {
    /// Renders the border ring only: corners and edges, hollow interior
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.border;

        write!(f, "{}", cell_char(b.top_left))?;
        for bit in b.top.iter().by_vals() {
            write!(f, "{}", cell_char(bit))?;
        }
        writeln!(f, "{}", cell_char(b.top_right))?;

        let interior = b.top.len();
        for (left_bit, right_bit) in b.left.iter().by_vals().zip(b.right.iter().by_vals()) {
            writeln!(
                f,
                "{}{}{}",
                cell_char(left_bit),
                " ".repeat(interior),
                cell_char(right_bit)
            )?;
        }

        write!(f, "{}", cell_char(b.bottom_left))?;
        for bit in b.bottom.iter().by_vals() {
            write!(f, "{}", cell_char(bit))?;
        }
        write!(f, "{}", cell_char(b.bottom_right))
    }
}
