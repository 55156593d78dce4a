//! Tunable simulation parameters.

use crate::float::Float;

/// Parameters a host UI can change while the simulation runs.
///
/// # Builder Pattern
/// ```
/// use squishy::config::SimulationConfig;
///
/// let config: SimulationConfig<f32> = SimulationConfig::new()
///     .with_stiffness(8.0)
///     .with_damping(0.95)
///     .with_impulse_strength(120.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationConfig<F: Float> {
    /// Spring coefficient used when springs are (re)built. Default: 5.0.
    pub stiffness: F,
    /// Per-step velocity multiplier, expected in (0, 1]. 1.0 = no loss.
    /// Default: 0.98.
    pub damping: F,
    /// Magnitude used by [`Simulation::push`](crate::Simulation::push).
    /// Default: 50.0.
    pub impulse_strength: F,
    /// Uniform node mass. Default: 1.0.
    pub mass: F,
    /// Nominal frame delta for hosts that drive a fixed clock. Default: 0.016.
    pub time_step: F,
    /// How many consecutive steps one target is pushed. Default: 10.
    pub push_frames: usize,
}

impl<F: Float> SimulationConfig<F> {
    pub fn new() -> Self {
        SimulationConfig {
            stiffness: F::from_f32(5.0),
            damping: F::from_f32(0.98),
            impulse_strength: F::from_f32(50.0),
            mass: F::one(),
            time_step: F::from_f32(0.016),
            push_frames: 10,
        }
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_impulse_strength(mut self, impulse_strength: F) -> Self {
        self.impulse_strength = impulse_strength;
        self
    }

    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_time_step(mut self, time_step: F) -> Self {
        self.time_step = time_step;
        self
    }

    /// Set the push duration (at least one step).
    pub fn with_push_frames(mut self, push_frames: usize) -> Self {
        self.push_frames = push_frames.max(1);
        self
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
