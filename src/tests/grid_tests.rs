#[cfg(test)]
mod tests {
    use crate::components::TetrominoType;
    use crate::game::{COLS, ROWS};
    use crate::grid::Grid;

    fn fill_row(grid: &mut Grid, y: i32, kind: TetrominoType) {
        for x in 0..grid.width() as i32 {
            grid.set(x, y, Some(kind));
        }
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::default();
        assert_eq!(grid.width(), COLS);
        assert_eq!(grid.height(), ROWS);
        assert_eq!(grid.rows().len(), ROWS);
        assert!(grid.rows().iter().all(|row| row.len() == COLS));
        assert!(grid.is_empty());
        assert!(!grid.is_top_row_occupied());
    }

    #[test]
    fn test_out_of_range_access() {
        let mut grid = Grid::new(4, 4);
        grid.set(-1, 0, Some(TetrominoType::I));
        grid.set(4, 0, Some(TetrominoType::I));
        grid.set(0, 4, Some(TetrominoType::I));
        assert!(grid.is_empty());
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert!(!grid.in_bounds(4, 3));
        assert!(grid.in_bounds(3, 3));
    }

    #[test]
    fn test_row_full_only_when_every_cell_set() {
        let mut grid = Grid::new(4, 3);
        for x in 0..3 {
            grid.set(x, 2, Some(TetrominoType::T));
        }
        assert!(!grid.is_row_full(2));

        grid.set(3, 2, Some(TetrominoType::T));
        assert!(grid.is_row_full(2));
        assert!(!grid.is_row_full(5));
    }

    #[test]
    fn test_clear_separated_full_rows() {
        // Rows top to bottom: full, partial, full
        let mut grid = Grid::new(COLS, 3);
        fill_row(&mut grid, 0, TetrominoType::I);
        grid.set(2, 1, Some(TetrominoType::J));
        fill_row(&mut grid, 2, TetrominoType::O);

        assert_eq!(grid.clear_full_rows(), 2);

        assert_eq!(grid.height(), 3);
        assert!(grid.rows()[0].iter().all(Option::is_none));
        assert!(grid.rows()[1].iter().all(Option::is_none));
        assert_eq!(grid.get(2, 2), Some(TetrominoType::J));
        assert_eq!(grid.rows()[2].iter().flatten().count(), 1);
    }

    #[test]
    fn test_clear_full_with_empty_middle_row() {
        let mut grid = Grid::new(COLS, 3);
        fill_row(&mut grid, 0, TetrominoType::S);
        fill_row(&mut grid, 2, TetrominoType::Z);

        assert_eq!(grid.clear_full_rows(), 2);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_clear_adjacent_full_rows() {
        // Two full rows stacked on the floor with a marker above them. The
        // row that slides into the cleared slot must be tested again.
        let mut grid = Grid::new(COLS, ROWS);
        fill_row(&mut grid, ROWS as i32 - 1, TetrominoType::L);
        fill_row(&mut grid, ROWS as i32 - 2, TetrominoType::J);
        grid.set(5, ROWS as i32 - 3, Some(TetrominoType::T));

        assert_eq!(grid.clear_full_rows(), 2);
        assert_eq!(grid.get(5, ROWS as i32 - 1), Some(TetrominoType::T));
        assert_eq!(grid.rows().iter().flatten().flatten().count(), 1);
    }

    #[test]
    fn test_clear_without_full_rows_changes_nothing() {
        let mut grid = Grid::new(COLS, ROWS);
        grid.set(0, 19, Some(TetrominoType::I));
        grid.set(9, 10, Some(TetrominoType::O));
        let before = grid.clone();

        assert_eq!(grid.clear_full_rows(), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_zero_width_grid_clears_nothing() {
        let mut grid = Grid::new(0, 5);
        assert_eq!(grid.clear_full_rows(), 0);
        assert_eq!(grid.height(), 5);
    }

    #[test]
    fn test_top_row_occupied() {
        let mut grid = Grid::new(COLS, ROWS);
        grid.set(3, 1, Some(TetrominoType::I));
        assert!(!grid.is_top_row_occupied());

        grid.set(7, 0, Some(TetrominoType::I));
        assert!(grid.is_top_row_occupied());

        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid.height(), ROWS);
    }
}
