#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Shapes are at most 4x4 and grids are small, so the casts cannot truncate
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

use crate::components::{Position, TetrominoType};
use crate::grid::Grid;

/// Square occupancy bitmap, row-major, top row first.
pub type Shape = Vec<Vec<bool>>;

/// A falling piece: its type, its own copy of the shape, and the grid
/// position of the shape's top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: TetrominoType,
    shape: Shape,
    position: Position,
}

impl Piece {
    /// Builds a piece of `kind` centred horizontally over a grid `grid_width` cells wide.
    #[must_use]
    pub fn new(kind: TetrominoType, grid_width: usize) -> Self {
        let shape: Shape = kind
            .template()
            .iter()
            .map(|row| row.iter().map(|&cell| cell != 0).collect())
            .collect();
        let width = shape.first().map_or(0, Vec::len);
        let x = (grid_width / 2) as i32 - width.div_ceil(2) as i32;

        Self {
            kind,
            shape,
            position: Position { x, y: 0 },
        }
    }

    /// Same piece placed elsewhere. No collision check is made.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn kind(&self) -> TetrominoType {
        self.kind
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Absolute grid coordinates of every occupied cell, including ones above the grid.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        occupied(&self.shape).map(move |(cx, cy)| self.position.offset(cx, cy))
    }

    /// Shifts the piece by `(dx, dy)` if the destination is free. Returns whether it moved.
    pub fn try_move(&mut self, grid: &Grid, dx: i32, dy: i32) -> bool {
        let target = self.position.offset(dx, dy);
        if collides(grid, target, &self.shape) {
            return false;
        }
        self.position = target;
        true
    }

    /// Turns the shape a quarter turn in place. A rotation that would collide is
    /// dropped; there are no kicks.
    pub fn rotate(&mut self, grid: &Grid) -> bool {
        let rotated = rotate_shape(&self.shape);
        if collides(grid, self.position, &rotated) {
            return false;
        }
        self.shape = rotated;
        true
    }

    /// Writes the piece into the grid. Cells above row 0 are discarded.
    pub fn lock_into(&self, grid: &mut Grid) {
        for cell in self.cells() {
            if cell.y >= 0 {
                grid.set(cell.x, cell.y, Some(self.kind));
            }
        }
    }
}

/// Transposes the shape and then reverses its row order.
#[must_use]
pub fn rotate_shape(shape: &Shape) -> Shape {
    let width = shape.first().map_or(0, Vec::len);
    (0..width)
        .map(|column| shape.iter().map(|row| row[column]).collect())
        .rev()
        .collect()
}

/// Whether `shape` placed with its top-left corner at `origin` hits a wall,
/// the floor, or a locked cell. Rows above the grid are open space.
#[must_use]
pub fn collides(grid: &Grid, origin: Position, shape: &Shape) -> bool {
    let width = grid.width() as i32;
    let height = grid.height() as i32;

    occupied(shape).any(|(cx, cy)| {
        let x = origin.x + cx;
        let y = origin.y + cy;
        x < 0 || x >= width || y >= height || (y >= 0 && grid.is_occupied(x, y))
    })
}

fn occupied(shape: &Shape) -> impl Iterator<Item = (i32, i32)> + '_ {
    shape.iter().enumerate().flat_map(|(cy, row)| {
        row.iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(move |(cx, _)| (cx as i32, cy as i32))
    })
}
