#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Grid dimensions are tiny, so usize <-> i32 conversions cannot truncate
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

use crate::components::TetrominoType;
use crate::game::{COLS, ROWS};

/// The playfield of locked cells, stored row-major with row 0 at the top.
///
/// Width and height never change after construction. Line clears only remove
/// rows and insert empty ones at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    rows: Vec<Vec<Option<TetrominoType>>>,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![None; width]; height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<TetrominoType>>] {
        &self.rows
    }

    /// Cell at `(x, y)`, or `None` for both empty and out-of-range cells.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<TetrominoType> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.rows[y as usize][x as usize]
    }

    #[must_use]
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some()
    }

    /// Writes a cell. Out-of-range writes are dropped.
    pub fn set(&mut self, x: i32, y: i32, cell: Option<TetrominoType>) {
        if self.in_bounds(x, y) {
            self.rows[y as usize][x as usize] = cell;
        }
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[must_use]
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(Option::is_some))
    }

    /// Removes every full row, shifting the rows above down, and returns how many went.
    ///
    /// The scan runs bottom to top. After a removal the same index is tested again
    /// because the row that was above it now sits there.
    pub fn clear_full_rows(&mut self) -> usize {
        // A zero-width row is vacuously full and would never stop clearing.
        if self.width == 0 {
            return 0;
        }

        let mut cleared = 0;
        let mut y = self.height;

        while y > 0 {
            if self.is_row_full(y - 1) {
                self.rows.remove(y - 1);
                self.rows.insert(0, vec![None; self.width]);
                cleared += 1;
            } else {
                y -= 1;
            }
        }

        debug_assert_eq!(self.rows.len(), self.height);
        cleared
    }

    #[must_use]
    pub fn is_top_row_occupied(&self) -> bool {
        self.rows
            .first()
            .is_some_and(|row| row.iter().any(Option::is_some))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(Option::is_none)
    }

    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(None);
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(COLS, ROWS)
    }
}
