//! Tests for tile block parsing and format validation

#[cfg(test)]
mod tests {
    use tilejoin::AssemblyError;
    use tilejoin::io::parser::parse_tiles;

    const EXAMPLE: &str = include_str!("../../data/example.txt");

    #[test]
    fn test_parses_the_worked_example() {
        let tiles = parse_tiles(EXAMPLE).unwrap();

        assert_eq!(tiles.len(), 9);
        assert!(tiles.iter().all(|tile| tile.side() == 10));

        let mut ids: Vec<u64> = tiles.iter().map(|tile| tile.id()).collect();
        ids.sort_unstable();
        assert_eq!(
            ids,
            vec![1171, 1427, 1489, 1951, 2311, 2473, 2729, 2971, 3079]
        );
    }

    #[test]
    fn test_extra_blank_lines_are_tolerated() {
        let input = "\n\nTile 1:\n##\n#.\n\n\n\nTile 2:\n..\n.#\n\n";
        let tiles = parse_tiles(input).unwrap();
        assert_eq!(tiles.len(), 2);
    }

    #[test]
    fn test_malformed_header() {
        let input = "Tile one:\n##\n##\n";
        let error = parse_tiles(input).unwrap_err();
        assert!(matches!(
            error,
            AssemblyError::MalformedHeader { block: 0, ref found } if found == "Tile one:"
        ));
        assert!(error.is_format_error());
    }

    #[test]
    fn test_header_without_colon() {
        let error = parse_tiles("Tile 12\n##\n##\n").unwrap_err();
        assert!(matches!(error, AssemblyError::MalformedHeader { .. }));
    }

    #[test]
    fn test_non_square_grid() {
        let input = "Tile 5:\n###\n###\n";
        let error = parse_tiles(input).unwrap_err();
        assert!(matches!(
            error,
            AssemblyError::NonSquareTile {
                tile_id: 5,
                rows: 2,
                cols: 3
            }
        ));
    }

    #[test]
    fn test_ragged_rows() {
        let input = "Tile 6:\n###\n##\n###\n";
        let error = parse_tiles(input).unwrap_err();
        assert!(matches!(
            error,
            AssemblyError::RaggedRow {
                tile_id: 6,
                row: 1,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_invalid_cell_character() {
        let input = "Tile 7:\n#.\n.x\n";
        let error = parse_tiles(input).unwrap_err();
        assert!(matches!(
            error,
            AssemblyError::InvalidCell {
                tile_id: 7,
                row: 1,
                col: 1,
                found: 'x'
            }
        ));
    }

    #[test]
    fn test_tile_below_minimum_side() {
        let error = parse_tiles("Tile 8:\n#\n").unwrap_err();
        assert!(matches!(
            error,
            AssemblyError::TileTooSmall { tile_id: 8, side: 1 }
        ));
    }

    #[test]
    fn test_duplicate_tile_id() {
        let input = "Tile 9:\n##\n##\n\nTile 9:\n..\n..\n";
        let error = parse_tiles(input).unwrap_err();
        assert!(matches!(error, AssemblyError::DuplicateTileId { tile_id: 9 }));
    }

    #[test]
    fn test_mismatched_tile_sizes() {
        let input = "Tile 1:\n##\n##\n\nTile 2:\n###\n###\n###\n";
        let error = parse_tiles(input).unwrap_err();
        assert!(matches!(
            error,
            AssemblyError::MismatchedTileSize {
                tile_id: 2,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_empty_input() {
        for input in ["", "\n\n\n", "   \n\n  "] {
            let error = parse_tiles(input).unwrap_err();
            assert!(matches!(error, AssemblyError::EmptyInput), "input {input:?}");
        }
    }
}
