// src/session/mod.rs
use glam::Vec3;

use crate::camera::TrailingCamera;
use crate::config::RunnerConfig;
use crate::errors::RunnerError;
use crate::player::{FrameInput, PlayerController, RunOutcome};
use crate::scene::{SceneEvent, SceneQueue};
use crate::world::{CharacterMover, HitTag};

/// One run of the game: the player controller, its mover, the trailing camera
/// and the deferred-reload queue, stepped in a fixed order each frame.
pub struct RunSession {
    player: PlayerController,
    camera: TrailingCamera,
    mover: Box<dyn CharacterMover>,
    scene_queue: SceneQueue,
    dead_reload_delay: f32,
    win_reload_delay: f32,
    grounded: bool,
    outcome: Option<RunOutcome>,
}

impl RunSession {
    /// The mover is a required collaborator; constructing a session without
    /// one is a configuration error, reported once, and nothing ever moves.
    pub fn new(
        config: &RunnerConfig,
        mover: Option<Box<dyn CharacterMover>>,
    ) -> Result<Self, RunnerError> {
        let mover = mover.ok_or(RunnerError::MissingMover)?;

        Ok(Self {
            player: PlayerController::new(config.player.clone()),
            camera: TrailingCamera::new(Vec3::from_array(config.camera.offset)),
            mover,
            scene_queue: SceneQueue::new(),
            dead_reload_delay: config.scene.dead_reload_delay,
            win_reload_delay: config.scene.win_reload_delay,
            grounded: false,
            outcome: None,
        })
    }

    /// Advances one frame. Order is fixed: player tick, mover (collision
    /// resolution inside), hit dispatch, camera, then the deferred queue.
    /// Returned events are for the surrounding loop to act on.
    pub fn step(&mut self, dt: f32, input: FrameInput) -> Vec<SceneEvent> {
        let motion = self.player.tick(dt, input, self.grounded);
        let moved = self.mover.move_by(motion);
        self.grounded = moved.grounded;

        for tag in &moved.hits {
            // Unknown tags are decoration, skip them.
            let Some(hit) = HitTag::from_tag(tag) else {
                continue;
            };
            if let Some(outcome) = self.player.handle_hit(hit) {
                let delay = match outcome {
                    RunOutcome::Dead => self.dead_reload_delay,
                    RunOutcome::Win => self.win_reload_delay,
                };
                match outcome {
                    RunOutcome::Dead => log::info!("Run over: hit an obstacle"),
                    RunOutcome::Win => log::info!("Run over: crossed the finish"),
                }
                self.scene_queue.schedule_reload(delay);
                self.outcome = Some(outcome);
            }
        }

        // Camera reads the post-collision position, strictly after the move.
        self.camera.follow(Some(moved.position));

        self.scene_queue.advance(dt)
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    pub fn player_position(&self) -> Vec3 {
        self.mover.position()
    }

    pub fn camera_position(&self) -> Vec3 {
        self.camera.position()
    }
}
