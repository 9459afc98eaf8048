#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::os::fd::AsRawFd;
use std::time::{Duration, Instant};

use blockfall::app::{App, AppResult};
use blockfall::config::{self, Config};
use blockfall::input::{KeyAction, action_for_key};
use blockfall::records::{RecordStore, records_file_path};
use blockfall::sound::AudioState;
use blockfall::ui;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, error, info, warn};
use ratatui::{Terminal, prelude::*};

fn main() -> AppResult<()> {
    // Create log file and redirect stderr to it
    let log_path = "blockfall.log";
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;

    // Redirect stderr to the log file so audio backend chatter can't tear the UI
    let stderr_fd = io::stderr().as_raw_fd();
    let log_file_fd = log_file.as_raw_fd();

    // Safety: both descriptors are open for the duration of the call
    unsafe {
        libc::dup2(log_file_fd, stderr_fd);
    }

    // Configure the logger to use stderr (which is now redirected to our file)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting blockfall");

    // Load configuration, continuing with defaults when the file is unusable
    let config = match config::loader::load_config_from_file() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {e}");
            Config::default()
        }
    };
    Config::install(config.clone());

    let store = RecordStore::open(records_file_path());
    let audio = if config.audio.sound_enabled {
        AudioState::new(config.audio.clamped_volume())
    } else {
        AudioState::disabled()
    };
    let app = App::new(&config, store, audio);

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, config.frame_duration());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Game error: {err:?}");
    }

    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    frame_duration: Duration,
) -> AppResult<()> {
    // Flush any keys pressed before the game was on screen
    while event::poll(Duration::from_millis(0))? {
        let _ = event::read()?;
    }

    // Flag to track if we've already warned about audio device issues
    let mut audio_error_logged = false;

    loop {
        let frame_start = Instant::now();

        app.on_frame(frame_start);
        terminal.draw(|f| ui::render(f, &app))?;

        if Config::check_and_reload() {
            info!("Configuration reloaded");
            app.apply_config(&Config::current());
        }

        if !audio_error_logged && app.audio_unavailable() {
            warn!("Audio device is unavailable. Continuing without sound.");
            audio_error_logged = true;
        }

        // Wait for input until the next frame is due
        let mut timeout = frame_duration.saturating_sub(frame_start.elapsed());
        while event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                debug!("Key event: {key:?}");
                match action_for_key(key) {
                    Some(KeyAction::Quit) => app.should_quit = true,
                    Some(KeyAction::Game(command)) => app.push_command(command),
                    None => {}
                }
            }
            timeout = frame_duration.saturating_sub(frame_start.elapsed());
        }

        if app.should_quit {
            info!("Quitting");
            return Ok(());
        }
    }
}
