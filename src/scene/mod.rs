// src/scene/mod.rs

/// Events the surrounding application loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    Reload,
}

struct DeferredTask {
    remaining: f32,
    event: SceneEvent,
}

/// One-shot deferred tasks owned by the session. A task is armed once, fires
/// exactly once after its delay, and cannot be cancelled.
#[derive(Default)]
pub struct SceneQueue {
    pending: Vec<DeferredTask>,
}

impl SceneQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_reload(&mut self, delay: f32) {
        log::info!("Scene reload scheduled in {:.1}s", delay);
        self.pending.push(DeferredTask {
            remaining: delay,
            event: SceneEvent::Reload,
        });
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Advances all timers and returns the events whose delay has elapsed.
    pub fn advance(&mut self, dt: f32) -> Vec<SceneEvent> {
        let mut fired = Vec::new();
        for task in &mut self.pending {
            task.remaining -= dt;
        }
        self.pending.retain(|task| {
            if task.remaining <= 0.0 {
                fired.push(task.event);
                false
            } else {
                true
            }
        });
        fired
    }
}
