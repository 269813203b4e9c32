// src/main.rs
use log::info;

use lanedash::RunnerEngine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    info!("Starting lanedash...");

    let engine = RunnerEngine::new()?;
    engine.run()
}
