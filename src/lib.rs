pub mod app;
pub mod components;
pub mod config;
pub mod engine;
pub mod game;
pub mod generator;
pub mod grid;
pub mod input;
pub mod piece;
pub mod records;
pub mod scoring;
pub mod sound;
pub mod systems;
pub mod ui;

#[cfg(test)]
mod tests;

use bevy_ecs::prelude::Resource;
use std::time::Instant;

/// Frame clock. Holds the instant the current frame started so every
/// system in a frame sees the same wall-clock time.
#[derive(Resource, Debug, Clone)]
pub struct Time {
    frame_start: Instant,
}

impl Time {
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    #[must_use]
    pub fn starting_at(now: Instant) -> Self {
        Self { frame_start: now }
    }

    /// Starts a new frame at `now`.
    pub fn advance_to(&mut self, now: Instant) {
        self.frame_start = now;
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.frame_start
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
