#![warn(clippy::all, clippy::pedantic)]

use serde::{Deserialize, Serialize};

/// The seven piece variants. The discriminant is the value a piece writes
/// into the grid when it locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TetrominoType {
    I = 1,
    O = 2,
    T = 3,
    S = 4,
    Z = 5,
    J = 6,
    L = 7,
}

impl TetrominoType {
    pub const ALL: [TetrominoType; 7] = [
        TetrominoType::I,
        TetrominoType::O,
        TetrominoType::T,
        TetrominoType::S,
        TetrominoType::Z,
        TetrominoType::J,
        TetrominoType::L,
    ];

    /// Looks up a variant by its grid id (1 to 7). Any other id is not a piece.
    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(TetrominoType::I),
            2 => Some(TetrominoType::O),
            3 => Some(TetrominoType::T),
            4 => Some(TetrominoType::S),
            5 => Some(TetrominoType::Z),
            6 => Some(TetrominoType::J),
            7 => Some(TetrominoType::L),
            _ => None,
        }
    }

    #[must_use]
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Spawn orientation of the variant as a square bitmap, top row first.
    #[must_use]
    pub fn template(self) -> &'static [&'static [u8]] {
        match self {
            TetrominoType::I => &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]],
            TetrominoType::O => &[&[1, 1], &[1, 1]],
            TetrominoType::T => &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]],
            TetrominoType::S => &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]],
            TetrominoType::Z => &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]],
            TetrominoType::J => &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]],
            TetrominoType::L => &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]],
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TetrominoType::I => "I",
            TetrominoType::O => "O",
            TetrominoType::T => "T",
            TetrominoType::S => "S",
            TetrominoType::Z => "Z",
            TetrominoType::J => "J",
            TetrominoType::L => "L",
        }
    }
}

/// Grid coordinate. `y` grows downwards and may be negative above the visible grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}
