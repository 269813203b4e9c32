// src/engine/mod.rs - winit host loop: menu, run, reload flow
use std::path::PathBuf;
use std::time::{Duration, Instant};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use crate::{
    config::RunnerConfig,
    errors::RunnerError,
    input::InputManager,
    player::RunOutcome,
    scene::SceneEvent,
    session::RunSession,
    settings::{SettingsStore, PLAYER_NAME_KEY},
    world::{CharacterMover, TrackWorld},
};

const MAX_NAME_LEN: usize = 24;

enum EngineState {
    /// Name entry, prepopulated from settings. Return starts a run.
    Menu { player_name: String },
    Playing,
}

pub struct RunnerEngine {
    event_loop: Option<EventLoop<()>>,
    window: Window,
    input: InputManager,
    config: RunnerConfig,
    settings: SettingsStore,
    session: Option<RunSession>,

    state: EngineState,

    last_frame: Instant,
    target_fps: u32,
    progress_log_timer: f32,
}

impl RunnerEngine {
    pub fn new() -> Result<Self, RunnerError> {
        log::info!("Initializing lanedash...");

        let event_loop = EventLoop::new();
        let window = WindowBuilder::new()
            .with_title("lanedash")
            .with_inner_size(winit::dpi::LogicalSize::new(1024, 768))
            .build(&event_loop)
            .map_err(|e| RunnerError::WindowError(format!("Window creation failed: {}", e)))?;

        let config = RunnerConfig::load(&PathBuf::from("runner.json"))?;

        let settings_path = std::env::current_dir()?.join("settings.dat");
        let settings = match SettingsStore::open(settings_path.clone()) {
            Ok(store) => store,
            Err(e) => {
                log::warn!("Ignoring unreadable settings file: {}", e);
                SettingsStore::fresh(settings_path)
            }
        };

        // Settings are read once at setup to prepopulate the name field.
        let player_name = settings.get(PLAYER_NAME_KEY).unwrap_or("").to_string();

        let mut engine = Self {
            event_loop: Some(event_loop),
            window,
            input: InputManager::new(),
            config,
            settings,
            session: None,
            state: EngineState::Menu { player_name },
            last_frame: Instant::now(),
            target_fps: 60,
            progress_log_timer: 0.0,
        };
        engine.show_menu_title();
        Ok(engine)
    }

    pub fn run(mut self) -> ! {
        let event_loop = self.event_loop.take().unwrap();
        let target_frame_time = Duration::from_millis(1000 / self.target_fps as u64);

        event_loop.run(move |event, _, control_flow| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == self.window.id() => match event {
                WindowEvent::CloseRequested => {
                    log::info!("Window close requested");
                    *control_flow = ControlFlow::Exit;
                }
                _ => {
                    self.input.handle_window_event(event);
                }
            },
            Event::RedrawRequested(window_id) if window_id == self.window.id() => {
                let now = Instant::now();
                let delta_time = now.duration_since(self.last_frame);

                if delta_time >= target_frame_time {
                    self.update(delta_time.as_secs_f32());
                    self.last_frame = now;
                }
            }
            Event::MainEventsCleared => {
                self.window.request_redraw();
            }
            _ => {}
        })
    }

    fn update(&mut self, dt: f32) {
        match &mut self.state {
            EngineState::Menu { player_name } => {
                let typed = self.input.take_text();
                let mut changed = !typed.is_empty();
                for c in typed.chars() {
                    if c == '\u{8}' {
                        player_name.pop();
                    } else if !c.is_control() && player_name.len() < MAX_NAME_LEN {
                        player_name.push(c);
                    }
                }

                // Return arrives as both an edge and a control character;
                // the control char was filtered above.
                if self.input.is_action_just_pressed("confirm") {
                    let name = player_name.clone();
                    self.start_run(name);
                    changed = false;
                }

                if changed {
                    self.show_menu_title();
                }
            }
            EngineState::Playing => {
                if self.input.is_action_just_pressed("cancel") {
                    log::info!("Run abandoned");
                    self.reload_scene();
                } else if let Some(session) = self.session.as_mut() {
                    let frame_input = self.input.frame_input();
                    let events = session.step(dt, frame_input);

                    self.progress_log_timer += dt;
                    if self.progress_log_timer >= 1.0 {
                        self.progress_log_timer = 0.0;
                        let position = session.player_position();
                        log::debug!(
                            "z={:.1} lane={} camera={:?}",
                            position.z,
                            session.player().lane(),
                            session.camera_position()
                        );
                    }

                    for event in events {
                        match event {
                            SceneEvent::Reload => self.reload_scene(),
                        }
                    }
                }
            }
        }

        // Edge state was sampled above; clear it for the next frame.
        self.input.update();
    }

    /// Writes the name back to settings (the one write per run start) and
    /// spins up a fresh session on the configured course.
    fn start_run(&mut self, player_name: String) {
        log::info!("Starting run for '{}'", player_name);

        self.settings.set(PLAYER_NAME_KEY, player_name);
        if let Err(e) = self.settings.save_to_disk() {
            log::error!("Failed to save settings: {}", e);
        }

        let mover: Option<Box<dyn CharacterMover>> = Some(Box::new(TrackWorld::from_course(
            &self.config.course,
            self.config.player.lane_distance,
        )));

        match RunSession::new(&self.config, mover) {
            Ok(session) => {
                self.session = Some(session);
                self.state = EngineState::Playing;
                self.progress_log_timer = 0.0;
                self.window.set_title("lanedash - running (A/D: lanes, Space: jump, Esc: quit run)");
            }
            Err(e) => {
                // Fatal configuration error: report once, never move.
                log::error!("{}", e);
                self.session = None;
                self.state = EngineState::Playing;
            }
        }
    }

    /// The scene-reload collaborator: tears the run down and recreates the
    /// menu, reading the persisted name again like a fresh scene load would.
    fn reload_scene(&mut self) {
        if let Some(session) = &self.session {
            match session.outcome() {
                Some(RunOutcome::Dead) => log::info!("Reloading scene after death"),
                Some(RunOutcome::Win) => log::info!("Reloading scene after win"),
                None => log::info!("Reloading scene"),
            }
        }

        self.session = None;
        let player_name = self.settings.get(PLAYER_NAME_KEY).unwrap_or("").to_string();
        self.state = EngineState::Menu { player_name };
        self.show_menu_title();
    }

    fn show_menu_title(&self) {
        let name = match &self.state {
            EngineState::Menu { player_name } => player_name.as_str(),
            EngineState::Playing => "",
        };
        self.window
            .set_title(&format!("lanedash - type name, Enter to run: {}", name));
    }
}
