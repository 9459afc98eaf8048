#![warn(clippy::all, clippy::pedantic)]

//! Game state machine.
//!
//! [`Engine`] owns the grid, the current and next pieces, score, lines, level,
//! the high score and the leaderboard. It moves forward only through
//! [`Engine::update`] (the drop timer) and [`Engine::apply`] (player commands),
//! and reports side effects as [`GameEvent`]s for the caller to drain.

use bevy_ecs::prelude::Resource;
use log::{debug, info, trace};
use std::time::{Duration, Instant};

use crate::components::{Position, TetrominoType};
use crate::game::{COLS, ROWS, STARTING_LEVEL};
use crate::generator::{PieceSource, RandomPieces};
use crate::grid::Grid;
use crate::piece::{Piece, Shape};
use crate::scoring::{self, Leaderboard, ScoreEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Ready,
    Running,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
    Start,
    Restart,
}

/// Side effects produced by the engine, in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A lock completed `count` rows (always at least one).
    LineCleared { count: usize },
    /// The score passed the previous high score.
    HighScore { score: u32 },
    /// The game ended. `entry` has already been added to the leaderboard.
    GameOver { entry: ScoreEntry, high_score: u32 },
}

/// Read-only copy of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Grid,
    pub current: Option<PieceView>,
    pub next: Option<PieceView>,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub lines: u32,
    pub state: EngineState,
    pub game_over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceView {
    pub kind: TetrominoType,
    pub shape: Shape,
    pub position: Position,
}

impl From<&Piece> for PieceView {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind(),
            shape: piece.shape().clone(),
            position: piece.position(),
        }
    }
}

#[derive(Resource)]
pub struct Engine {
    grid: Grid,
    current: Option<Piece>,
    next: Option<Piece>,
    score: u32,
    lines: u32,
    level: u32,
    high_score: u32,
    leaderboard: Leaderboard,
    leaderboard_cap: Option<usize>,
    state: EngineState,
    // Start of the pending drop interval. `None` while no game is running, so a
    // stale update after game over or before start has nothing to fire.
    drop_start: Option<Instant>,
    pieces: Box<dyn PieceSource>,
    events: Vec<GameEvent>,
}

impl Engine {
    #[must_use]
    pub fn new(pieces: Box<dyn PieceSource>) -> Self {
        Self::with_grid(Grid::new(COLS, ROWS), pieces)
    }

    /// Engine over a grid of arbitrary size, mostly useful for tests.
    #[must_use]
    pub fn with_grid(grid: Grid, pieces: Box<dyn PieceSource>) -> Self {
        Self {
            grid,
            current: None,
            next: None,
            score: 0,
            lines: 0,
            level: STARTING_LEVEL,
            high_score: 0,
            leaderboard: Leaderboard::default(),
            leaderboard_cap: None,
            state: EngineState::Ready,
            drop_start: None,
            pieces,
            events: Vec::new(),
        }
    }

    /// Seeds the persisted high score and leaderboard.
    #[must_use]
    pub fn with_records(mut self, high_score: u32, leaderboard: Leaderboard) -> Self {
        self.high_score = high_score;
        self.leaderboard = leaderboard;
        self
    }

    /// Keeps at most `max_entries` games on the leaderboard, dropping the lowest.
    #[must_use]
    pub fn with_leaderboard_cap(mut self, max_entries: usize) -> Self {
        self.leaderboard_cap = Some(max_entries);
        self.leaderboard.truncate(max_entries);
        self
    }

    /// Discards the current game, if any, and begins a new one.
    pub fn start(&mut self, now: Instant) {
        self.grid.clear();
        self.score = 0;
        self.lines = 0;
        self.level = STARTING_LEVEL;
        self.current = Some(self.spawn());
        self.next = Some(self.spawn());
        self.state = EngineState::Running;
        // Replacing the timer is what cancels the previous game's pending drop.
        self.drop_start = Some(now);

        info!(
            "Game started with {:?}, next {:?}",
            self.current.as_ref().map(Piece::kind),
            self.next.as_ref().map(Piece::kind)
        );
    }

    /// Advances the drop timer. Drops the current piece one row when more than
    /// one drop interval has passed since the last drop.
    pub fn update(&mut self, now: Instant) {
        if self.state != EngineState::Running {
            return;
        }
        let Some(drop_start) = self.drop_start else {
            return;
        };

        let elapsed = now.saturating_duration_since(drop_start);
        trace!("Drop timer: {elapsed:?} of {:?}", self.drop_interval());
        if elapsed > self.drop_interval() {
            self.step_down(now);
            if self.state == EngineState::Running {
                self.drop_start = Some(now);
            }
        }
    }

    /// Applies a player command. Gameplay commands outside a running game do nothing.
    pub fn apply(&mut self, command: Command, now: Instant) {
        match command {
            Command::Start | Command::Restart => self.start(now),
            _ if self.state != EngineState::Running => {}
            Command::MoveLeft => {
                self.shift(-1);
            }
            Command::MoveRight => {
                self.shift(1);
            }
            Command::Rotate => {
                if let Some(piece) = self.current.as_mut() {
                    piece.rotate(&self.grid);
                }
            }
            Command::SoftDrop => {
                self.step_down(now);
                if self.state == EngineState::Running {
                    self.drop_start = Some(now);
                }
            }
            Command::HardDrop => {
                if let Some(piece) = self.current.as_mut() {
                    while piece.try_move(&self.grid, 0, 1) {}
                }
                self.settle(now);
            }
        }
    }

    /// Removes and returns the events produced since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            current: self.current.as_ref().map(PieceView::from),
            next: self.next.as_ref().map(PieceView::from),
            score: self.score,
            high_score: self.high_score,
            level: self.level,
            lines: self.lines,
            state: self.state,
            game_over: self.state == EngineState::GameOver,
        }
    }

    #[must_use]
    pub fn drop_interval(&self) -> Duration {
        scoring::drop_interval(self.level)
    }

    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn next(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn lines(&self) -> u32 {
        self.lines
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Whether the drop timer is armed.
    #[cfg(test)]
    pub(crate) fn has_pending_drop(&self) -> bool {
        self.drop_start.is_some()
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    fn spawn(&mut self) -> Piece {
        Piece::new(self.pieces.next_type(), self.grid.width())
    }

    fn shift(&mut self, dx: i32) -> bool {
        self.current
            .as_mut()
            .is_some_and(|piece| piece.try_move(&self.grid, dx, 0))
    }

    /// Moves the current piece down one row, settling it when it cannot move.
    /// Returns whether the piece moved.
    fn step_down(&mut self, now: Instant) -> bool {
        let moved = self
            .current
            .as_mut()
            .is_some_and(|piece| piece.try_move(&self.grid, 0, 1));
        if !moved {
            self.settle(now);
        }
        moved
    }

    /// Locks the current piece, clears rows, and either ends the game or brings
    /// in the next piece.
    fn settle(&mut self, now: Instant) {
        let Some(piece) = self.current.take() else {
            return;
        };
        piece.lock_into(&mut self.grid);
        debug!(
            "Locked {} at ({}, {})",
            piece.kind().name(),
            piece.position().x,
            piece.position().y
        );

        let cleared = self.grid.clear_full_rows();
        if cleared > 0 {
            self.award(cleared);
        }

        if self.grid.is_top_row_occupied() {
            self.finish();
            return;
        }

        self.current = self.next.take();
        self.next = Some(self.spawn());
        self.drop_start = Some(now);
    }

    fn award(&mut self, cleared: usize) {
        self.score = self
            .score
            .saturating_add(scoring::line_clear_points(cleared));
        self.lines = self
            .lines
            .saturating_add(u32::try_from(cleared).unwrap_or(u32::MAX));
        self.level = scoring::level_for_lines(self.lines);
        debug!(
            "Cleared {cleared} rows: score {}, lines {}, level {}",
            self.score, self.lines, self.level
        );

        self.events.push(GameEvent::LineCleared { count: cleared });
        if self.score > self.high_score {
            self.high_score = self.score;
            self.events.push(GameEvent::HighScore {
                score: self.high_score,
            });
        }
    }

    fn finish(&mut self) {
        self.state = EngineState::GameOver;
        self.drop_start = None;

        let entry = ScoreEntry {
            score: self.score,
            level: self.level,
        };
        self.leaderboard.record(entry);
        if let Some(max_entries) = self.leaderboard_cap {
            self.leaderboard.truncate(max_entries);
        }
        self.events.push(GameEvent::GameOver {
            entry,
            high_score: self.high_score,
        });
        info!("Game over: score {}, level {}", entry.score, entry.level);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Box::new(RandomPieces::new()))
    }
}
