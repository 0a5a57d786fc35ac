//! Tile block parsing and format validation
//!
//! The input is blank-line-separated blocks, each a `Tile <integer>:` header
//! followed by the square cell grid. Every format check runs here, before any
//! matching computation: a malformed block aborts the run with a format error
//! rather than feeding a half-parsed tile into the search.

use crate::io::error::{AssemblyError, Result};
use crate::spatial::tile::Tile;
use ndarray::Array2;
use std::collections::HashSet;

fn parse_header(line: &str) -> Option<u64> {
    line.strip_prefix("Tile ")?.strip_suffix(':')?.parse().ok()
}

fn parse_block(block_index: usize, block: &str, tiles: &mut Vec<Tile>) -> Result<()> {
    let mut lines = block.lines();
    let header = lines.next().unwrap_or_default();
    let id = parse_header(header).ok_or_else(|| AssemblyError::MalformedHeader {
        block: block_index,
        found: header.to_owned(),
    })?;

    let rows: Vec<&str> = lines.collect();
    let side = rows.len();
    if side < 2 {
        return Err(AssemblyError::TileTooSmall { tile_id: id, side });
    }

    let mut cells = Vec::with_capacity(side * side);
    for (row_index, row) in rows.iter().enumerate() {
        let width = row.chars().count();
        if width != side {
            // Uniform-but-wrong width is a shape problem; varying widths are ragged rows
            let uniform = rows.iter().all(|r| r.chars().count() == width);
            return Err(if uniform {
                AssemblyError::NonSquareTile {
                    tile_id: id,
                    rows: side,
                    cols: width,
                }
            } else {
                AssemblyError::RaggedRow {
                    tile_id: id,
                    row: row_index,
                    expected: side,
                    found: width,
                }
            });
        }
        for (col, ch) in row.chars().enumerate() {
            match ch {
                '#' => cells.push(true),
                '.' => cells.push(false),
                _ => {
                    return Err(AssemblyError::InvalidCell {
                        tile_id: id,
                        row: row_index,
                        col,
                        found: ch,
                    });
                }
            }
        }
    }

    let grid = Array2::from_shape_fn((side, side), |(row, col)| {
        cells.get(row * side + col).copied().unwrap_or(false)
    });
    tiles.push(Tile::new(id, grid));
    Ok(())
}

/// Parse all tile blocks from an input text
///
/// # Errors
///
/// Returns a format error ([`AssemblyError::is_format_error`]) for a
/// malformed header, a non-square or ragged grid, a cell outside `#`/`.`,
/// a side length below 2 or differing from the first tile's, a duplicate
/// tile id, or an input with no blocks at all.
pub fn parse_tiles(input: &str) -> Result<Vec<Tile>> {
    let mut tiles = Vec::new();

    for (block_index, block) in input
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .enumerate()
    {
        parse_block(block_index, block, &mut tiles)?;
    }

    if tiles.is_empty() {
        return Err(AssemblyError::EmptyInput);
    }

    let mut seen: HashSet<u64> = HashSet::new();
    let mut expected_side = None;
    for tile in &tiles {
        if !seen.insert(tile.id()) {
            return Err(AssemblyError::DuplicateTileId { tile_id: tile.id() });
        }
        match expected_side {
            None => expected_side = Some(tile.side()),
            Some(expected) if tile.side() != expected => {
                return Err(AssemblyError::MismatchedTileSize {
                    tile_id: tile.id(),
                    expected,
                    found: tile.side(),
                });
            }
            Some(_) => {}
        }
    }

    Ok(tiles)
}
