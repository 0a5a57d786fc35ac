//! Assembled grid table and seam verification
//!
//! The reconstruction output is a dense position-indexed table mapping
//! (row, col) to a placement: tile id, the orientation that was committed for
//! it, and the resulting oriented border. A flat table keeps the result
//! trivially iterable and avoids the aliasing concerns of a linked node graph
//! with mutable neighbor pointers.

use crate::algorithm::matching::{Side, matches_on};
use crate::io::error::{AssemblyError, Result};
use crate::spatial::orientation::Orientation;
use crate::spatial::tile::Border;
use std::collections::HashMap;

/// One cell of the assembled grid
#[derive(Clone, Debug)]
pub struct Placement {
    /// Tile id placed here
    pub id: u64,
    /// Orientation committed for this tile
    pub orientation: Orientation,
    /// The tile's border in the committed orientation
    pub border: Border,
}

/// Dense rows × cols table of placements
#[derive(Clone, Debug)]
pub struct TileGrid {
    placements: Vec<Placement>,
    rows: usize,
    cols: usize,
}

impl TileGrid {
    /// Build a grid from a sparse position map, verifying it fills a full
    /// rectangle starting at (0, 0)
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::NotRectangular`] when the map is empty or any
    /// cell of the bounding rectangle is missing.
    pub fn from_placements(placements: &HashMap<(usize, usize), Placement>) -> Result<Self> {
        let placed = placements.len();
        let rows = placements.keys().map(|&(row, _)| row).max().map_or(0, |row| row + 1);
        let cols = placements.keys().map(|&(_, col)| col).max().map_or(0, |col| col + 1);

        if placed == 0 || placed != rows * cols {
            return Err(AssemblyError::NotRectangular { placed, rows, cols });
        }

        let mut ordered = Vec::with_capacity(placed);
        for row in 0..rows {
            for col in 0..cols {
                match placements.get(&(row, col)) {
                    Some(placement) => ordered.push(placement.clone()),
                    None => return Err(AssemblyError::NotRectangular { placed, rows, cols }),
                }
            }
        }

        Ok(Self {
            placements: ordered,
            rows,
            cols,
        })
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Placement at a position, if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&Placement> {
        if col >= self.cols {
            return None;
        }
        self.placements.get(row * self.cols + col)
    }

    /// Iterate placements with their (row, col) positions in row-major order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Placement)> {
        self.placements
            .iter()
            .enumerate()
            .map(|(index, placement)| ((index / self.cols, index % self.cols), placement))
    }

    /// Re-check every interior seam bit-for-bit
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::SeamMismatch`] naming the first position and
    /// side whose facing edges are not exactly equal.
    pub fn verify_seams(&self) -> Result<()> {
        for ((row, col), placement) in self.iter() {
            if let Some(right) = self.get(row, col + 1) {
                if !matches_on(Side::Right, &placement.border, &right.border) {
                    return Err(AssemblyError::SeamMismatch {
                        row,
                        col,
                        side: Side::Right,
                    });
                }
            }
            if let Some(below) = self.get(row + 1, col) {
                if !matches_on(Side::Bottom, &placement.border, &below.border) {
                    return Err(AssemblyError::SeamMismatch {
                        row,
                        col,
                        side: Side::Bottom,
                    });
                }
            }
        }
        Ok(())
    }

    /// One line per row of `id@orientation` entries, for `--layout` output
    pub fn render_layout(&self) -> Vec<String> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .filter_map(|col| self.get(row, col))
                    .map(|placement| format!("{}@{}", placement.id, placement.orientation))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}
