// src/player/mod.rs
use glam::Vec3;
use crate::config::PlayerTuning;
use crate::world::HitTag;

/// Edge-triggered gameplay inputs for one frame. Flags are true only on the
/// frame the key went down, never while held (see `input::InputManager`).
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub lane_left: bool,
    pub lane_right: bool,
    pub jump: bool,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Dead,
    Win,
}

pub struct PlayerController {
    tuning: PlayerTuning,
    lane: i32,
    lateral: f32,
    vertical_velocity: f32,
    forward_speed: f32,
    airborne: bool,
    alive: bool,
}

impl PlayerController {
    pub fn new(tuning: PlayerTuning) -> Self {
        let forward_speed = tuning.forward_speed;
        Self {
            tuning,
            lane: 1,
            lateral: 0.0,
            vertical_velocity: 0.0,
            forward_speed,
            airborne: false,
            alive: true,
        }
    }

    /// Advances the controller one frame and returns the motion to hand to the
    /// character mover: x = lateral delta, y = vertical delta, z = forward delta.
    ///
    /// `grounded` is the mover's report from the previous frame's move.
    pub fn tick(&mut self, dt: f32, input: FrameInput, grounded: bool) -> Vec3 {
        if !self.alive {
            return Vec3::ZERO;
        }

        // Left and right are independent clamped checks; a frame where both
        // edges fire applies both, left first.
        if input.lane_left && self.lane > 0 {
            self.lane -= 1;
        }
        if input.lane_right && self.lane < 2 {
            self.lane += 1;
        }

        let target = (self.lane - 1) as f32 * self.tuning.lane_distance;
        let diff = target - self.lateral;
        let step = diff.abs().min(self.tuning.lane_change_speed * dt);
        let mut lateral_delta = step * diff.signum();

        if self.airborne {
            lateral_delta += self.tuning.drift_compensation * dt;
        }
        self.lateral += lateral_delta;

        if grounded {
            self.airborne = false;
            self.vertical_velocity = self.tuning.ground_stick;
            if input.jump {
                self.vertical_velocity = self.tuning.jump_force;
                self.airborne = true;
            }
        } else {
            self.vertical_velocity += self.tuning.gravity * dt;
        }

        Vec3::new(
            lateral_delta,
            self.vertical_velocity * dt,
            self.forward_speed * dt,
        )
    }

    /// Terminal transition on a tagged collision. Returns the outcome the
    /// first time only; in a terminal state further hits are ignored.
    pub fn handle_hit(&mut self, tag: HitTag) -> Option<RunOutcome> {
        if !self.alive {
            return None;
        }

        self.alive = false;
        self.forward_speed = 0.0;

        match tag {
            HitTag::Obstacle => Some(RunOutcome::Dead),
            HitTag::Finish => Some(RunOutcome::Win),
        }
    }

    pub fn lane(&self) -> i32 {
        self.lane
    }

    pub fn lateral(&self) -> f32 {
        self.lateral
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    pub fn is_airborne(&self) -> bool {
        self.airborne
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }
}
