#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use std::error;
use std::time::Instant;

use crate::Time;
use crate::config::Config;
use crate::engine::{Command, Engine, Snapshot};
use crate::generator::{PieceSource, RandomPieces};
use crate::input::Input;
use crate::records::RecordStore;
use crate::sound::AudioState;
use crate::systems::{event_system, game_tick_system, input_system};

pub type AppResult<T> = std::result::Result<T, Box<dyn error::Error>>;

/// Terminal front end state. The engine and every adapter resource live in
/// `world`; systems run once per frame.
pub struct App {
    pub world: World,
    pub should_quit: bool,
    pub show_leaderboard: bool,
}

impl App {
    /// Builds an app from configuration, persisted records and audio.
    #[must_use]
    pub fn new(config: &Config, store: RecordStore, audio: AudioState) -> Self {
        let pieces: Box<dyn PieceSource> = match config.game.seed {
            Some(seed) => Box::new(RandomPieces::with_seed(seed)),
            None => Box::new(RandomPieces::new()),
        };
        Self::with_pieces(config, store, audio, pieces)
    }

    #[must_use]
    pub fn with_pieces(
        config: &Config,
        store: RecordStore,
        audio: AudioState,
        pieces: Box<dyn PieceSource>,
    ) -> Self {
        let max_entries = config.leaderboard.max_entries;
        let store = store.with_max_entries(max_entries);
        let records = store.records().clone();
        let engine = Engine::new(pieces)
            .with_records(records.high_score, records.leaderboard)
            .with_leaderboard_cap(max_entries);

        let mut world = World::new();
        world.insert_resource(Time::new());
        world.insert_resource(Input::default());
        world.insert_resource(engine);
        world.insert_resource(store);
        world.insert_resource(audio);

        let mut app = Self {
            world,
            should_quit: false,
            show_leaderboard: config.display.show_leaderboard,
        };
        app.apply_config(config);
        app
    }

    /// Applies the parts of a (re)loaded config that can change mid-game.
    pub fn apply_config(&mut self, config: &Config) {
        self.show_leaderboard = config.display.show_leaderboard;
        if let Some(mut audio) = self.world.get_resource_mut::<AudioState>() {
            audio.set_sound_enabled(config.audio.sound_enabled);
            audio.set_volume(config.audio.clamped_volume());
        }
    }

    pub fn push_command(&mut self, command: Command) {
        self.world.resource_mut::<Input>().push(command);
    }

    /// Runs one frame at wall-clock time `now`: queued input, the drop timer,
    /// then event handling.
    pub fn on_frame(&mut self, now: Instant) {
        self.world.resource_mut::<Time>().advance_to(now);

        input_system(&mut self.world);
        game_tick_system(&mut self.world);
        event_system(&mut self.world);
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        self.world.resource::<Engine>()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.engine().snapshot()
    }

    /// Sound is switched on but no output device could be opened.
    #[must_use]
    pub fn audio_unavailable(&self) -> bool {
        self.world
            .get_resource::<AudioState>()
            .is_some_and(|audio| audio.is_sound_enabled() && !audio.is_audio_available())
    }

    #[must_use]
    pub fn records(&self) -> &RecordStore {
        self.world.resource::<RecordStore>()
    }
}
