//! Tests for grid sizing, neighbour lookup and write-once placement

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use tilestitch::StitchError;
    use tilestitch::spatial::grid::{PlacementGrid, grid_size};
    use tilestitch::spatial::tiles::Tile;

    fn blank(id: u64) -> Tile {
        Tile::new(id, Array2::from_elem((3, 3), false)).expect("Failed to build tile")
    }

    // Tests grid side is the ceiling of the square root
    // Verified by using the floor of the square root
    #[test]
    fn test_grid_size() {
        assert_eq!(grid_size(0), 0);
        assert_eq!(grid_size(1), 1);
        assert_eq!(grid_size(9), 3);
        assert_eq!(grid_size(10), 4);
        assert_eq!(grid_size(144), 12);
    }

    // Tests neighbours stop at the last row and column
    // Verified by wrapping right_of into the next row
    #[test]
    fn test_neighbours_do_not_wrap() {
        let grid = PlacementGrid::for_tile_count(9);
        assert_eq!(grid.right_of([0, 1]), Some([0, 2]));
        assert_eq!(grid.right_of([0, 2]), None);
        assert_eq!(grid.below([1, 2]), Some([2, 2]));
        assert_eq!(grid.below([2, 0]), None);
        assert_eq!(grid.position(5), [1, 2]);
    }

    // Tests occupied cells refuse a second tile
    // Verified by overwriting occupied cells in place
    #[test]
    fn test_place_is_write_once() {
        let mut grid = PlacementGrid::for_tile_count(4);
        assert!(grid.place([0, 0], blank(1)));
        assert!(!grid.place([0, 0], blank(2)));
        assert!(!grid.place([5, 5], blank(3)));
        assert_eq!(grid.get([0, 0]).map(Tile::id), Some(1));
        assert_eq!(grid.first_empty(), Some([0, 1]));
    }

    // Tests an incomplete grid reports its first empty cell
    // Verified by returning the last empty cell instead
    #[test]
    fn test_into_complete_reports_gap() {
        let mut grid = PlacementGrid::for_tile_count(4);
        grid.place([0, 0], blank(1));
        grid.place([0, 1], blank(2));
        grid.place([1, 1], blank(4));
        assert!(matches!(
            grid.into_complete(),
            Err(StitchError::UnfilledCell { row: 1, col: 0 })
        ));
    }

    // Tests a full grid converts to a tile matrix in row-major order
    // Verified by transposing the converted matrix
    #[test]
    fn test_into_complete_full() {
        let mut grid = PlacementGrid::for_tile_count(4);
        for index in 0..grid.cell_count() {
            let position = grid.position(index);
            grid.place(position, blank(index as u64 + 1));
        }
        let tiles = grid.into_complete().expect("Grid should be complete");
        assert_eq!(tiles.map(Tile::id), ndarray::array![[1, 2], [3, 4]]);
    }
}
