#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::Resource;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::engine::Command;

/// What a key press asks for: a game command, or leaving the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Game(Command),
    Quit,
}

/// Maps a terminal key event to an action. Releases, repeats of unbound keys
/// and anything else unrecognised map to `None`.
#[must_use]
pub fn action_for_key(key: KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyAction::Quit);
    }

    let command = match key.code {
        KeyCode::Left | KeyCode::Char('a') => Command::MoveLeft,
        KeyCode::Right | KeyCode::Char('d') => Command::MoveRight,
        KeyCode::Down | KeyCode::Char('s') => Command::SoftDrop,
        KeyCode::Up | KeyCode::Char('w' | 'x') => Command::Rotate,
        KeyCode::Char(' ') => Command::HardDrop,
        KeyCode::Enter => Command::Start,
        KeyCode::Char('r') => Command::Restart,
        KeyCode::Char('q') | KeyCode::Esc => return Some(KeyAction::Quit),
        _ => return None,
    };
    Some(KeyAction::Game(command))
}

/// Commands collected since the last frame, applied in arrival order.
#[derive(Resource, Debug, Clone, Default)]
pub struct Input {
    commands: Vec<Command>,
}

impl Input {
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, Command> {
        self.commands.drain(..)
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.commands.len()
    }
}
