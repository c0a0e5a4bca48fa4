use rapier2d::prelude::*;

/// Fixed table parameters. One of these is built at startup, handed to the
/// world constructor, and never mutated afterwards.
#[derive(Debug, Clone, Copy)]
pub struct WorldConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Screen-space gravity, +y points down.
    pub gravity: Vector<Real>,
    /// Fraction of velocity a body keeps per second; 1.0 disables damping.
    pub damping: f32,
    pub solver_iterations: usize,
    /// Seconds advanced per physics tick.
    pub timestep: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            screen_width: 940.0,
            screen_height: 780.0,
            gravity: vector![0.0, 115.0],
            damping: 1.0,
            solver_iterations: 2,
            timestep: 1.0 / 60.0,
        }
    }
}

impl WorldConfig {
    /// Converts the retained-per-second scalar into the coefficient the
    /// integrator applies each step (v *= 1 / (1 + dt * d)).
    pub fn damping_coefficient(&self) -> f32 {
        (self.damping.powf(-self.timestep) - 1.0) / self.timestep
    }
}
