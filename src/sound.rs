use anyhow::Result;
use bevy_ecs::system::Resource;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SizedSample};
use crossbeam_channel::{Receiver, Sender, bounded};
use log::{debug, error};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

// Cues the game can play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    LineClear { count: usize },
    GameOver,
}

impl SoundEffect {
    // Seconds after which the effect is silent
    #[must_use]
    pub fn duration(self) -> f64 {
        match self {
            SoundEffect::LineClear { .. } => 0.5,
            SoundEffect::GameOver => 2.0,
        }
    }
}

// Command to control the audio thread
enum AudioCommand {
    PlaySound(SoundEffect),
    SetVolume(f32), // 0.0 to 1.0
}

#[derive(Resource)]
pub struct AudioState {
    sender: Option<Sender<AudioCommand>>,
    // Cleared by the audio thread when no output device could be opened
    available: Arc<AtomicBool>,
    sound_enabled: bool,
    volume: f32,
}

impl AudioState {
    #[must_use]
    pub fn new(volume: f32) -> Self {
        let (sender, receiver) = bounded(64);
        let available = Arc::new(AtomicBool::new(true));
        let volume = volume.clamp(0.0, 1.0);

        let thread_available = Arc::clone(&available);
        let spawned = thread::Builder::new()
            .name("blockfall-audio".into())
            .spawn(move || {
                if let Err(e) = run_audio_thread(&receiver, volume) {
                    error!("Audio thread error: {e}");
                }
                thread_available.store(false, Ordering::Relaxed);
            });

        if let Err(e) = spawned {
            error!("Could not start audio thread: {e}");
            available.store(false, Ordering::Relaxed);
        }

        Self {
            sender: Some(sender),
            available,
            sound_enabled: true,
            volume,
        }
    }

    // Audio state that never plays anything and starts no thread
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            sender: None,
            available: Arc::new(AtomicBool::new(false)),
            sound_enabled: false,
            volume: 0.0,
        }
    }

    pub fn play_sound(&self, effect: SoundEffect) -> bool {
        if !self.sound_enabled {
            return false;
        }
        match &self.sender {
            Some(sender) => sender.try_send(AudioCommand::PlaySound(effect)).is_ok(),
            None => false,
        }
    }

    #[must_use]
    pub fn is_audio_available(&self) -> bool {
        self.sender.is_some() && self.available.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn is_sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled && self.sender.is_some();
    }

    #[must_use]
    pub fn get_volume(&self) -> f32 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f32) {
        // Clamp volume between 0.0 and 1.0
        self.volume = volume.clamp(0.0, 1.0);

        if let Some(sender) = &self.sender {
            let _ = sender.try_send(AudioCommand::SetVolume(self.volume));
        }
    }
}

fn run_audio_thread(receiver: &Receiver<AudioCommand>, initial_volume: f32) -> Result<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("No audio output device found"))?;
    let config = device.default_output_config()?;
    debug!("Audio output: {:?}", config);

    // Effects and volume changes are forwarded into the stream callback
    let (sound_sender, sound_receiver) = bounded::<SoundEffect>(64);
    let (volume_sender, volume_receiver) = bounded::<f32>(16);

    let _stream = match config.sample_format() {
        cpal::SampleFormat::F32 => run_audio_stream::<f32>(
            &device,
            &config.into(),
            sound_receiver,
            volume_receiver,
            initial_volume,
        )?,
        cpal::SampleFormat::I16 => run_audio_stream::<i16>(
            &device,
            &config.into(),
            sound_receiver,
            volume_receiver,
            initial_volume,
        )?,
        cpal::SampleFormat::U16 => run_audio_stream::<u16>(
            &device,
            &config.into(),
            sound_receiver,
            volume_receiver,
            initial_volume,
        )?,
        _ => return Err(anyhow::anyhow!("Unsupported audio format")),
    };

    // Keep the stream alive until the sender side is dropped
    while let Ok(command) = receiver.recv() {
        match command {
            AudioCommand::PlaySound(effect) => {
                let _ = sound_sender.try_send(effect);
            }
            AudioCommand::SetVolume(volume) => {
                let _ = volume_sender.try_send(volume);
            }
        }
    }

    Ok(())
}

fn run_audio_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    sound_receiver: Receiver<SoundEffect>,
    volume_receiver: Receiver<f32>,
    initial_volume: f32,
) -> Result<cpal::Stream>
where
    T: SizedSample + FromSample<f32>,
{
    let sample_rate = f64::from(config.sample_rate.0);
    let channels = usize::from(config.channels);

    let mut volume = initial_volume;
    let mut active_sounds: Vec<(SoundEffect, f64)> = Vec::new();
    let mut current_time = 0.0;

    let mut next_value = move || {
        while let Ok(new_volume) = volume_receiver.try_recv() {
            volume = new_volume;
        }
        while let Ok(effect) = sound_receiver.try_recv() {
            active_sounds.push((effect, current_time));
        }

        active_sounds.retain(|(effect, start)| current_time - start <= effect.duration());

        let (mut left, mut right) = active_sounds
            .iter()
            .map(|(effect, start)| generate_sound_sample(*effect, current_time - start))
            .fold((0.0, 0.0), |(l, r), (sl, sr)| (l + sl, r + sr));

        current_time += 1.0 / sample_rate;

        left = (left * volume).clamp(-1.0, 1.0);
        right = (right * volume).clamp(-1.0, 1.0);
        (left, right)
    };

    let err_fn = |err: cpal::StreamError| error!("Error in audio stream: {err}");

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            for frame in data.chunks_mut(channels) {
                let (left, right) = next_value();
                let left = T::from_sample(left);
                let right = T::from_sample(right);

                for (channel, sample) in frame.iter_mut().enumerate() {
                    *sample = if channel & 1 == 0 { left } else { right };
                }
            }
        },
        err_fn,
        None,
    )?;

    stream.play()?;

    Ok(stream)
}

// Generate a stereo sample for an effect `t` seconds after it started
#[must_use]
pub fn generate_sound_sample(effect: SoundEffect, t: f64) -> (f32, f32) {
    #[allow(clippy::cast_possible_truncation)]
    let t = t as f32;

    if t < 0.0 || f64::from(t) > effect.duration() {
        return (0.0, 0.0);
    }

    match effect {
        SoundEffect::LineClear { count } => {
            // Rising sweep; bigger clears start higher
            #[allow(clippy::cast_precision_loss)]
            let base = 300.0 + 100.0 * count.min(4) as f32;
            let freq = base + 500.0 * (t * 5.0).min(1.0);
            let amp = if t < 0.2 {
                1.0
            } else {
                (0.5 - t).max(0.0) * 2.0
            };
            let sample = (t * freq * std::f32::consts::TAU).sin() * amp * 0.3;
            (sample * 1.2, sample * 0.8) // Slightly left panned
        }
        SoundEffect::GameOver => {
            // Descending pitch
            let freq = 600.0 - 200.0 * t;
            let amp = (2.0 - t).max(0.0) * 0.5;
            let sample = (t * freq * std::f32::consts::TAU).sin() * amp * 0.4;
            (sample, sample)
        }
    }
}
