#[cfg(test)]
mod tests {
    use crate::Time;
    use std::time::{Duration, Instant};

    #[test]
    fn test_time_starts_at_given_instant() {
        let start = Instant::now();
        let time = Time::starting_at(start);
        assert_eq!(time.now(), start);
    }

    #[test]
    fn test_advance_to_moves_frame_start() {
        let start = Instant::now();
        let mut time = Time::starting_at(start);

        time.advance_to(start + Duration::from_millis(16));
        assert_eq!(time.now(), start + Duration::from_millis(16));

        time.advance_to(start + Duration::from_millis(50));
        assert_eq!(time.now(), start + Duration::from_millis(50));
    }

    #[test]
    fn test_new_uses_wall_clock() {
        let before = Instant::now();
        let time = Time::new();
        assert!(time.now() >= before);
    }
}
