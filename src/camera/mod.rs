// src/camera/mod.rs
use glam::Vec3;

/// Trails the player at a constant offset. Runs after the frame's motion has
/// been resolved so it always sees the post-collision position.
#[derive(Debug, Clone)]
pub struct TrailingCamera {
    offset: Vec3,
    position: Vec3,
}

impl TrailingCamera {
    pub fn new(offset: Vec3) -> Self {
        Self {
            offset,
            position: offset,
        }
    }

    /// Copies the player position plus the fixed offset. With no player
    /// reference the camera holds its last position.
    pub fn follow(&mut self, player_position: Option<Vec3>) {
        if let Some(position) = player_position {
            self.position = position + self.offset;
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}
