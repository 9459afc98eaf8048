#[cfg(test)]
mod tests {
    use crate::game::{COLS, LEVEL_SPEEDS_MS, LINE_CLEAR_POINTS, LINES_PER_LEVEL, ROWS, STARTING_LEVEL};

    #[test]
    fn test_playfield_dimensions() {
        assert_eq!(COLS, 10);
        assert_eq!(ROWS, 20);
    }

    #[test]
    fn test_progression_tables() {
        assert_eq!(LINE_CLEAR_POINTS, [0, 100, 300, 500, 800]);
        assert_eq!(LINES_PER_LEVEL, 10);
        assert_eq!(STARTING_LEVEL, 1);
        assert_eq!(LEVEL_SPEEDS_MS[0], 800);
        assert!(LEVEL_SPEEDS_MS.windows(2).all(|pair| pair[1] < pair[0]));
    }
}
