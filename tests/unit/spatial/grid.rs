//! Tests for the position-indexed grid table and seam verification

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use tilejoin::AssemblyError;
    use tilejoin::algorithm::assembly::assemble;
    use tilejoin::io::parser::parse_tiles;
    use tilejoin::spatial::grid::{Placement, TileGrid};
    use tilejoin::spatial::orientation::Orientation;
    use tilejoin::spatial::tile::Border;

    const EXAMPLE: &str = include_str!("../../data/example.txt");

    fn placement(id: u64, border: Border) -> Placement {
        Placement {
            id,
            orientation: Orientation::IDENTITY,
            border,
        }
    }

    fn example_grid() -> TileGrid {
        let tiles = parse_tiles(EXAMPLE).unwrap();
        assemble(&tiles).unwrap()
    }

    #[test]
    fn test_positions_index_row_major() {
        let grid = example_grid();

        let collected: Vec<(usize, usize)> = grid.iter().map(|(pos, _)| pos).collect();
        assert_eq!(
            collected,
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 1),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2)
            ]
        );

        for (pos, placement) in grid.iter() {
            assert_eq!(grid.get(pos.0, pos.1).unwrap().id, placement.id);
        }
        assert!(grid.get(0, 3).is_none());
        assert!(grid.get(3, 0).is_none());
    }

    #[test]
    fn test_missing_cell_is_not_rectangular() {
        let grid = example_grid();
        let mut sparse: HashMap<(usize, usize), Placement> = grid
            .iter()
            .map(|(pos, p)| (pos, p.clone()))
            .collect();
        sparse.remove(&(1, 1));

        let error = TileGrid::from_placements(&sparse).unwrap_err();
        assert!(matches!(
            error,
            AssemblyError::NotRectangular {
                placed: 8,
                rows: 3,
                cols: 3
            }
        ));
    }

    #[test]
    fn test_empty_map_is_not_rectangular() {
        let error = TileGrid::from_placements(&HashMap::new()).unwrap_err();
        assert!(matches!(error, AssemblyError::NotRectangular { placed: 0, .. }));
    }

    #[test]
    fn test_seam_verification_detects_a_swap() {
        let grid = example_grid();
        let mut swapped: HashMap<(usize, usize), Placement> = grid
            .iter()
            .map(|(pos, p)| (pos, p.clone()))
            .collect();

        let a = swapped.get(&(0, 0)).cloned().unwrap();
        let b = swapped.get(&(2, 2)).cloned().unwrap();
        swapped.insert((0, 0), placement(b.id, b.border));
        swapped.insert((2, 2), placement(a.id, a.border));

        let broken = TileGrid::from_placements(&swapped).unwrap();
        let error = broken.verify_seams().unwrap_err();
        assert!(matches!(error, AssemblyError::SeamMismatch { .. }));
        assert!(!error.is_format_error());
    }

    #[test]
    fn test_layout_rendering() {
        let grid = example_grid();
        let layout = grid.render_layout();

        assert_eq!(layout.len(), grid.rows());
        for (row, line) in layout.iter().enumerate() {
            let entries: Vec<&str> = line.split_whitespace().collect();
            assert_eq!(entries.len(), grid.cols());
            for (col, entry) in entries.iter().enumerate() {
                let expected = grid.get(row, col).unwrap();
                assert_eq!(
                    *entry,
                    format!("{}@{}", expected.id, expected.orientation)
                );
            }
        }
    }
}
