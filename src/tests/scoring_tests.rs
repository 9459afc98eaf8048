#[cfg(test)]
mod tests {
    use crate::scoring::{
        Leaderboard, ScoreEntry, drop_interval, level_for_lines, line_clear_points,
    };
    use std::time::Duration;

    fn entry(score: u32, level: u32) -> ScoreEntry {
        ScoreEntry { score, level }
    }

    #[test]
    fn test_line_clear_points() {
        assert_eq!(line_clear_points(0), 0);
        assert_eq!(line_clear_points(1), 100);
        assert_eq!(line_clear_points(2), 300);
        assert_eq!(line_clear_points(3), 500);
        assert_eq!(line_clear_points(4), 800);
        assert_eq!(line_clear_points(7), 800);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(19), 2);
        assert_eq!(level_for_lines(20), 3);
        assert_eq!(level_for_lines(125), 13);
    }

    #[test]
    fn test_drop_interval_speeds_up_with_level() {
        assert_eq!(drop_interval(1), Duration::from_millis(800));
        assert_eq!(drop_interval(2), Duration::from_millis(650));
        assert_eq!(drop_interval(10), Duration::from_millis(30));

        for level in 1..10 {
            assert!(drop_interval(level + 1) < drop_interval(level));
        }
    }

    #[test]
    fn test_drop_interval_clamps_past_table() {
        assert_eq!(drop_interval(11), Duration::from_millis(30));
        assert_eq!(drop_interval(500), Duration::from_millis(30));
        assert_eq!(drop_interval(u32::MAX), Duration::from_millis(30));
        assert_eq!(drop_interval(0), Duration::from_millis(800));
    }

    #[test]
    fn test_leaderboard_keeps_best_first() {
        let mut board = Leaderboard::default();
        assert!(board.is_empty());
        assert_eq!(board.best(), None);

        board.record(entry(300, 1));
        board.record(entry(1200, 3));
        board.record(entry(0, 1));

        let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![1200, 300, 0]);
        assert_eq!(board.best(), Some(entry(1200, 3)));
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn test_leaderboard_ties_keep_insertion_order() {
        let mut board = Leaderboard::default();
        board.record(entry(500, 1));
        board.record(entry(500, 2));
        board.record(entry(500, 3));

        let levels: Vec<u32> = board.entries().iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![1, 2, 3]);
    }

    #[test]
    fn test_leaderboard_from_unsorted_entries() {
        let mut board = Leaderboard::from_entries(vec![entry(10, 1), entry(90, 2), entry(50, 1)]);
        assert_eq!(board.best(), Some(entry(90, 2)));

        board.truncate(2);
        assert_eq!(board.entries(), &[entry(90, 2), entry(50, 1)]);
    }
}
