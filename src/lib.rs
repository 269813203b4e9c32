// ============================================================================
// FILE: src/lib.rs - Library Root
// ============================================================================
pub mod engine;
pub mod session;
pub mod player;
pub mod camera;
pub mod world;
pub mod scene;
pub mod input;
pub mod config;
pub mod settings;
pub mod errors;

pub use engine::RunnerEngine;
pub use session::RunSession;
pub use player::{PlayerController, RunOutcome};
pub use errors::RunnerError;
