#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use glassblocks::Time;
use glassblocks::app::{App, AppResult};
use glassblocks::config::{Config, loader};
use glassblocks::events::GameEvent;
use glassblocks::ui;
use log::{debug, error, info};
use ratatui::{Terminal, prelude::*};

fn main() -> AppResult<()> {
    // Log to a file so the terminal UI stays clean
    let log_path = "glassblocks.log";
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .with_context(|| format!("failed to create log file {log_path}"))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    info!("Starting glassblocks");

    let config_path = loader::get_config_file_path();
    let config = match loader::load_config_from(&config_path) {
        Ok(config) => {
            info!("Configuration loaded from {}", config_path.display());
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {e}");
            Config::default()
        }
    };

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    debug!("Key release events supported: {release_events}");
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, Some(config_path));
    app.release_events = release_events;

    let tick_rate = Duration::from_millis(33); // ~30 FPS
    let res = run_app(&mut terminal, &mut app, tick_rate);

    // Restore terminal
    if release_events {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("Game error: {err:?}");
    }
    info!("Exiting with record {}", app.settings().record);

    res
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> AppResult<()> {
    // Drop anything typed before the game started
    while event::poll(Duration::from_millis(0))? {
        let _ = event::read()?;
    }

    app.world.resource_mut::<Time>().update();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                debug!("Key event: {key:?}");
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }

        if last_tick.elapsed() >= tick_rate {
            let delta = {
                let mut time = app.world.resource_mut::<Time>();
                time.update();
                time.delta()
            };
            for event in app.on_tick(delta) {
                match event {
                    GameEvent::GameOver(reason) => debug!("Session ended: {reason:?}"),
                    GameEvent::LeveledUp(level) => debug!("Level {level}"),
                    _ => {}
                }
            }
            last_tick = Instant::now();
        }
    }
}
