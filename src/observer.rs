//! Hooks for watching the per-step pipeline.

/// Observer for [`Simulation::step`](crate::Simulation::step).
///
/// Every method defaults to a no-op, so implementors only override what
/// they care about (debug overlays, profiling, logging).
pub trait StepObserver {
    /// Spring forces have been accumulated.
    fn on_forces(&mut self) {}

    /// A pending impulse was applied to `node`.
    fn on_impulse(&mut self, _node: usize) {}

    /// All nodes were integrated and their forces cleared.
    fn on_integrate(&mut self) {}

    /// Vertex normals now reflect the new positions.
    fn on_normals(&mut self) {}

    /// The step is complete; `step` counts steps since the last reset.
    fn on_step_complete(&mut self, _step: u64) {}
}

/// Observer that does nothing.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Observer that traces every stage through `ftlog`.
#[cfg(feature = "logging")]
pub struct LogObserver;

#[cfg(feature = "logging")]
impl StepObserver for LogObserver {
    fn on_impulse(&mut self, node: usize) {
        ftlog::trace!("impulse applied to node {}", node);
    }

    fn on_step_complete(&mut self, step: u64) {
        ftlog::trace!("step {} complete", step);
    }
}
