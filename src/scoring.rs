#![warn(clippy::all, clippy::pedantic)]

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::game::{LEVEL_SPEEDS_MS, LINE_CLEAR_POINTS, LINES_PER_LEVEL, STARTING_LEVEL};

/// Points for clearing `rows` rows with one lock. A single lock spans at most
/// four rows; anything larger scores as four.
#[must_use]
pub fn line_clear_points(rows: usize) -> u32 {
    let index = rows.min(LINE_CLEAR_POINTS.len() - 1);
    LINE_CLEAR_POINTS[index]
}

#[must_use]
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + STARTING_LEVEL
}

/// Time between automatic drops at `level`, clamped to the fastest table entry.
#[must_use]
pub fn drop_interval(level: u32) -> Duration {
    let index = usize::try_from(level.saturating_sub(STARTING_LEVEL))
        .unwrap_or(usize::MAX)
        .min(LEVEL_SPEEDS_MS.len() - 1);
    Duration::from_millis(LEVEL_SPEEDS_MS[index])
}

/// One finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: u32,
    pub level: u32,
}

/// Finished games, best score first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    #[must_use]
    pub fn from_entries(mut entries: Vec<ScoreEntry>) -> Self {
        sort_descending(&mut entries);
        Self { entries }
    }

    /// Appends `entry` and restores the ordering. Equal scores keep insertion order.
    pub fn record(&mut self, entry: ScoreEntry) {
        self.entries.push(entry);
        sort_descending(&mut self.entries);
    }

    pub fn truncate(&mut self, max_entries: usize) {
        self.entries.truncate(max_entries);
    }

    #[must_use]
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    #[cfg(test)]
    pub(crate) fn best(&self) -> Option<ScoreEntry> {
        self.entries.first().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn sort_descending(entries: &mut [ScoreEntry]) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
}
