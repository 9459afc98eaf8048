use bevy_ecs::prelude::*;
use log::{debug, info, trace, warn};

use crate::Time;
use crate::engine::{Engine, GameEvent};
use crate::input::Input;
use crate::records::RecordStore;
use crate::sound::{AudioState, SoundEffect};

// Feed the commands queued since the last frame into the engine
pub fn input_system(world: &mut World) {
    let now = world.resource::<Time>().now();
    let commands: Vec<_> = world.resource_mut::<Input>().drain().collect();
    if commands.is_empty() {
        return;
    }

    let mut engine = world.resource_mut::<Engine>();
    for command in commands {
        trace!("Applying {command:?}");
        engine.apply(command, now);
    }
}

// Advance the drop timer to this frame's time
pub fn game_tick_system(world: &mut World) {
    let now = world.resource::<Time>().now();
    world.resource_mut::<Engine>().update(now);
}

// Hand engine events to the audio and persistence adapters
pub fn event_system(world: &mut World) {
    let events = world.resource_mut::<Engine>().take_events();
    if events.is_empty() {
        return;
    }

    for event in events {
        match event {
            GameEvent::LineCleared { count } => {
                debug!("Line clear: {count}");
                play(world, SoundEffect::LineClear { count });
            }
            GameEvent::HighScore { score } => {
                if let Some(mut store) = world.get_resource_mut::<RecordStore>() {
                    store.set_high_score(score);
                    persist(&store);
                }
            }
            GameEvent::GameOver { entry, high_score } => {
                info!(
                    "Recording game: score {}, level {}",
                    entry.score, entry.level
                );
                play(world, SoundEffect::GameOver);

                let leaderboard = world.resource::<Engine>().leaderboard().clone();
                if let Some(mut store) = world.get_resource_mut::<RecordStore>() {
                    store.set_high_score(high_score);
                    store.set_leaderboard(leaderboard);
                    persist(&store);
                }
            }
        }
    }
}

fn play(world: &World, effect: SoundEffect) {
    if let Some(audio) = world.get_resource::<AudioState>() {
        audio.play_sound(effect);
    }
}

// A failed save is reported and otherwise ignored; the game keeps going
fn persist(store: &RecordStore) {
    if let Err(e) = store.persist() {
        warn!("Could not save records: {e}");
    }
}
