//! Tests for grid construction, validation and queries

#[cfg(test)]
mod tests {
    use lifegrid::io::configuration::MAX_GRID_DIMENSION;
    use lifegrid::{Cell, Grid, LifeError};

    // Tests that a dead grid has the requested shape and no live cells
    #[test]
    fn test_dead_grid() {
        let Ok(grid) = Grid::dead(3, 5) else {
            unreachable!("3x5 grid should be valid");
        };

        assert_eq!(grid.dimensions(), (3, 5));
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.population(), 0);
        assert!(grid.is_extinct());
    }

    // Tests rejection of zero and oversize dimensions
    #[test]
    fn test_invalid_dimensions_rejected() {
        assert!(matches!(
            Grid::dead(0, 4),
            Err(LifeError::MalformedGrid { .. })
        ));
        assert!(matches!(
            Grid::dead(4, 0),
            Err(LifeError::MalformedGrid { .. })
        ));
        assert!(matches!(
            Grid::from_fn(MAX_GRID_DIMENSION + 1, 1, |_, _| false),
            Err(LifeError::MalformedGrid { .. })
        ));
    }

    // Tests that ragged rows are rejected with the offending row named
    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let rows = vec![vec![true, false], vec![false], vec![true, true]];
        let Err(LifeError::MalformedGrid { reason }) = Grid::from_rows(&rows) else {
            unreachable!("ragged rows should be rejected");
        };
        assert!(reason.contains("row 1"), "unexpected reason: {reason}");
    }

    // Tests that empty inputs are rejected
    #[test]
    fn test_from_rows_rejects_empty() {
        assert!(matches!(
            Grid::from_rows(&[]),
            Err(LifeError::MalformedGrid { .. })
        ));
        assert!(matches!(
            Grid::from_rows(&[vec![], vec![]]),
            Err(LifeError::MalformedGrid { .. })
        ));
    }

    // Tests row-major placement of nested rows
    #[test]
    fn test_from_rows_layout() {
        let rows = vec![vec![true, false, false], vec![false, false, true]];
        let Ok(grid) = Grid::from_rows(&rows) else {
            unreachable!("rectangular rows should be accepted");
        };

        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.get(0, 0), Some(Cell::ALIVE));
        assert_eq!(grid.get(1, 2), Some(Cell::ALIVE));
        assert_eq!(grid.get(0, 2), Some(Cell::DEAD));
        assert_eq!(grid.alive_cells().collect::<Vec<_>>(), vec![(0, 0), (1, 2)]);
    }

    // Tests that out-of-range live coordinates are rejected
    #[test]
    fn test_with_alive_rejects_outside_coordinates() {
        let result = Grid::with_alive(3, 3, &[(1, 1), (3, 0)]);
        assert!(matches!(
            result,
            Err(LifeError::InvalidParameter {
                parameter: "alive",
                ..
            })
        ));
    }

    // Tests that lookups outside the grid report dead / absent
    #[test]
    fn test_out_of_range_lookup() {
        let Ok(grid) = Grid::with_alive(2, 2, &[(1, 1)]) else {
            unreachable!("fixture should be valid");
        };

        assert_eq!(grid.get(2, 0), None);
        assert!(!grid.is_alive(5, 5));
        assert!(grid.is_alive(1, 1));
        assert_eq!(grid.population(), 1);
        assert!(!grid.is_extinct());
    }

    // Tests that from_fn visits coordinates and stores results row-major
    #[test]
    fn test_from_fn_checkerboard() {
        let Ok(grid) = Grid::from_fn(3, 4, |row, col| (row + col) % 2 == 0) else {
            unreachable!("fixture should be valid");
        };

        assert_eq!(grid.population(), 6);
        assert!(grid.is_alive(0, 0));
        assert!(!grid.is_alive(0, 1));
        assert!(grid.is_alive(2, 2));
    }

    // Tests plaintext rendering through Display
    #[test]
    fn test_display_renders_plaintext_rows() {
        let Ok(grid) = Grid::with_alive(2, 3, &[(0, 1), (1, 0)]) else {
            unreachable!("fixture should be valid");
        };
        assert_eq!(grid.to_string(), ".O.\nO..\n");
    }

    // Tests cell value semantics
    #[test]
    fn test_cell_values() {
        assert!(Cell::ALIVE.is_alive());
        assert!(!Cell::DEAD.is_alive());
        assert_eq!(Cell::from(true), Cell::ALIVE);
        assert_eq!(Cell::new(false), Cell::default());
    }
}
