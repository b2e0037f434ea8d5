#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Duration;

use crate::Time;
use crate::components::{Input, Session};
use crate::config::loader::save_config_to;
use crate::config::{Config, Rules, Settings};
use crate::events::{GameEvent, GameEvents};
use crate::scheduler::Scheduler;
use crate::snapshot::SessionSnapshot;
use crate::spawner::Spawner;
use crate::systems;

pub type AppResult<T> = anyhow::Result<T>;

pub struct App {
    pub world: World,
    pub should_quit: bool,
    pub show_help: bool,
    /// Whether the terminal reports key releases. Without them every press,
    /// including the terminal's own auto-repeat, is a separate move.
    pub release_events: bool,
    config_path: Option<PathBuf>,
}

impl App {
    /// Builds the game world and starts the first game. Settings changes are
    /// written to `config_path` when one is given.
    #[must_use]
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        Self::with_spawner(config, config_path, Spawner::default())
    }

    #[must_use]
    pub fn with_spawner(config: Config, config_path: Option<PathBuf>, spawner: Spawner) -> Self {
        let mut world = World::new();
        world.insert_resource(Time::new());
        world.insert_resource(Input::default());
        world.insert_resource(Session::new(config.rules.startup_score_goal));
        world.insert_resource(Scheduler::new(&config.rules));
        world.insert_resource(GameEvents::default());
        world.insert_resource(spawner);
        world.insert_resource(config.settings);
        world.insert_resource(config.rules);

        let mut app = Self {
            world,
            should_quit: false,
            show_help: false,
            release_events: false,
            config_path,
        };
        systems::new_game(&mut app.world);
        app
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        self.world.resource::<Settings>()
    }

    #[must_use]
    pub fn config(&self) -> Config {
        Config {
            settings: self.settings().clone(),
            rules: self.world.resource::<Rules>().clone(),
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.world.resource::<Session>().game_over
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from_world(&self.world)
    }

    /// Runs one game step and returns the events it produced.
    pub fn on_tick(&mut self, delta: Duration) -> Vec<GameEvent> {
        systems::input_system(&mut self.world);
        systems::game_tick_system(&mut self.world, delta);

        let events = self.world.resource_mut::<GameEvents>().drain();
        if events
            .iter()
            .any(|event| matches!(event, GameEvent::NewRecord(_)))
        {
            self.save_config();
        }
        events
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.kind {
            KeyEventKind::Release => {
                self.set_held(key.code, false);
                return;
            }
            // Held keys are repeated by the scheduler
            KeyEventKind::Repeat if self.release_events => return,
            KeyEventKind::Press | KeyEventKind::Repeat => {}
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::F(1) => {
                self.show_help = !self.show_help;
                return;
            }
            KeyCode::Char('t' | 'T') => {
                self.toggle_sound();
                return;
            }
            KeyCode::Char('h' | 'H') => {
                self.toggle_helper();
                return;
            }
            _ => {}
        }

        let game_over = self.is_game_over();
        let hold = self.release_events;
        let mut input = self.world.resource_mut::<Input>();
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter if game_over => input.restart = true,
            KeyCode::Char(' ') => input.hard_drop = true,
            KeyCode::Up | KeyCode::Char('w' | 'W') => input.rotate = true,
            KeyCode::Left | KeyCode::Char('a' | 'A') => {
                input.left = true;
                input.left_held = hold;
            }
            KeyCode::Right | KeyCode::Char('d' | 'D') => {
                input.right = true;
                input.right_held = hold;
            }
            KeyCode::Down | KeyCode::Char('s' | 'S') => {
                input.down = true;
                input.down_held = hold;
            }
            _ => {}
        }
    }

    pub fn toggle_sound(&mut self) {
        let sound = {
            let mut settings = self.world.resource_mut::<Settings>();
            settings.sound = !settings.sound;
            settings.sound
        };
        info!("Sound {}", if sound { "on" } else { "off" });
        self.save_config();
    }

    pub fn toggle_helper(&mut self) {
        let helper = {
            let mut settings = self.world.resource_mut::<Settings>();
            settings.helper_enabled = !settings.helper_enabled;
            settings.helper_enabled
        };
        info!("Drop helper {}", if helper { "on" } else { "off" });
        self.save_config();
    }

    fn set_held(&mut self, code: KeyCode, held: bool) {
        let mut input = self.world.resource_mut::<Input>();
        match code {
            KeyCode::Left | KeyCode::Char('a' | 'A') => input.left_held = held,
            KeyCode::Right | KeyCode::Char('d' | 'D') => input.right_held = held,
            KeyCode::Down | KeyCode::Char('s' | 'S') => input.down_held = held,
            _ => {}
        }
    }

    fn save_config(&self) {
        let Some(path) = &self.config_path else {
            return;
        };
        match save_config_to(path, &self.config()) {
            Ok(()) => debug!("Settings saved"),
            Err(err) => warn!("Failed to save settings: {err}"),
        }
    }
}
