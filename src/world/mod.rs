// src/world/mod.rs
use glam::Vec3;
use crate::config::CourseConfig;

/// Collision tags the run logic reacts to. Anything else on the track is
/// decoration and gets ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTag {
    Obstacle,
    Finish,
}

impl HitTag {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Obstacle" => Some(HitTag::Obstacle),
            "Finish" => Some(HitTag::Finish),
            _ => None,
        }
    }
}

/// Result of applying one frame of motion through the mover.
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    pub position: Vec3,
    pub grounded: bool,
    pub hits: Vec<String>,
}

/// The collision-aware mover the session drives. The real thing is a physics
/// character controller; `TrackWorld` below is the built-in stand-in.
pub trait CharacterMover {
    fn move_by(&mut self, motion: Vec3) -> MoveOutcome;
    fn position(&self) -> Vec3;
}

// Player body half extents used for overlap tests against track boxes.
const PLAYER_HALF: Vec3 = Vec3::new(0.5, 1.0, 0.5);
const OBSTACLE_HALF: Vec3 = Vec3::new(1.5, 0.75, 0.5);

struct TagBox {
    center: Vec3,
    half: Vec3,
    tag: String,
}

impl TagBox {
    fn overlaps(&self, point: Vec3) -> bool {
        // Obstacle box inflated by the player's half extents, point-in-box test.
        let half = self.half + PLAYER_HALF;
        (point.x - self.center.x).abs() <= half.x
            && (point.y - self.center.y).abs() <= half.y
            && (point.z - self.center.z).abs() <= half.z
    }
}

/// Flat ground at y = 0, tagged boxes in the lanes, a finish plane at a fixed
/// z. Enough of a world to run and test against.
pub struct TrackWorld {
    position: Vec3,
    boxes: Vec<TagBox>,
    finish_z: f32,
    ground_y: f32,
}

impl TrackWorld {
    pub fn from_course(course: &CourseConfig, lane_distance: f32) -> Self {
        let mut world = Self {
            position: Vec3::ZERO,
            boxes: Vec::new(),
            finish_z: course.finish_z,
            ground_y: 0.0,
        };

        for spec in &course.obstacles {
            let lane_x = (spec.lane - 1) as f32 * lane_distance;
            world.add_box(
                Vec3::new(lane_x, OBSTACLE_HALF.y, spec.z),
                OBSTACLE_HALF,
                "Obstacle",
            );
        }

        world
    }

    pub fn add_box(&mut self, center: Vec3, half: Vec3, tag: &str) {
        self.boxes.push(TagBox {
            center,
            half,
            tag: tag.to_string(),
        });
    }
}

impl CharacterMover for TrackWorld {
    fn move_by(&mut self, motion: Vec3) -> MoveOutcome {
        self.position += motion;

        let grounded = if self.position.y <= self.ground_y {
            self.position.y = self.ground_y;
            true
        } else {
            false
        };

        // Overlap tests happen against the body center, one body-height up.
        let body_center = self.position + Vec3::new(0.0, PLAYER_HALF.y, 0.0);

        let mut hits: Vec<String> = self
            .boxes
            .iter()
            .filter(|b| b.overlaps(body_center))
            .map(|b| b.tag.clone())
            .collect();

        if self.position.z >= self.finish_z {
            hits.push("Finish".to_string());
        }

        MoveOutcome {
            position: self.position,
            grounded,
            hits,
        }
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}
