#![warn(clippy::all, clippy::pedantic)]

// Playfield dimensions
pub const COLS: usize = 10;
pub const ROWS: usize = 20;

// Points for clearing 0, 1, 2, 3 or 4 rows in a single lock
pub const LINE_CLEAR_POINTS: [u32; 5] = [0, 100, 300, 500, 800];

// Level progression
pub const LINES_PER_LEVEL: u32 = 10;
pub const STARTING_LEVEL: u32 = 1;

// Milliseconds between automatic drops, indexed by level - 1.
// Levels past the end of the table stay at the last entry.
pub const LEVEL_SPEEDS_MS: [u64; 10] = [800, 650, 500, 370, 250, 160, 100, 70, 50, 30];
