//! Step observer trait for monitoring simulation ticks.

use crate::model::Wall;

/// Trait for observing model updates.
///
/// Implement this to watch a tick as it runs (debugging, visualisation,
/// profiling). All methods have default no-op implementations.
pub trait StepObserver {
    /// Called once spring forces have been accumulated on every particle.
    fn on_forces(&mut self) {}

    /// Called when a particle is clamped against a wall.
    fn on_contact(&mut self, _particle: usize, _wall: Wall) {}

    /// Called when a tick is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Forwards tick events to the `log` facade.
///
/// Contacts are logged at `trace`, tick completion at `debug` with a running
/// tick count.
#[derive(Debug, Default)]
pub struct LogObserver {
    ticks: u64,
}

impl LogObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed ticks seen so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl StepObserver for LogObserver {
    fn on_contact(&mut self, particle: usize, wall: Wall) {
        log::trace!("particle {} hit {:?} wall", particle, wall);
    }

    fn on_step_complete(&mut self) {
        self.ticks += 1;
        log::debug!("tick {} complete", self.ticks);
    }
}
