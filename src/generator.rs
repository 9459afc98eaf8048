#![warn(clippy::all, clippy::pedantic)]

use crate::components::TetrominoType;

/// Supplies the type of each new piece.
pub trait PieceSource: Send + Sync {
    fn next_type(&mut self) -> TetrominoType;
}

/// Independent uniform draws over the seven variants.
///
/// There is no bag and no anti-repeat rule, so long runs of one piece are
/// possible.
#[derive(Debug, Clone)]
pub struct RandomPieces {
    rng: fastrand::Rng,
}

impl RandomPieces {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for RandomPieces {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceSource for RandomPieces {
    fn next_type(&mut self) -> TetrominoType {
        TetrominoType::ALL[self.rng.usize(..TetrominoType::ALL.len())]
    }
}

/// Replays a fixed list of types, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequencePieces {
    types: Vec<TetrominoType>,
    index: usize,
}

impl SequencePieces {
    /// # Panics
    ///
    /// Panics if `types` is empty.
    #[must_use]
    pub fn new(types: Vec<TetrominoType>) -> Self {
        assert!(!types.is_empty(), "piece sequence must not be empty");
        Self { types, index: 0 }
    }
}

impl PieceSource for SequencePieces {
    fn next_type(&mut self) -> TetrominoType {
        let kind = self.types[self.index];
        self.index = (self.index + 1) % self.types.len();
        kind
    }
}
