//! Single-ship stepping facade over the integrators.

use catapult_core::{StateVector, Vector2};
use catapult_dynamics::{IntegratorKind, gravitational_acceleration, step_euler, step_rk4};

/// Owns the ship state and advances it with a chosen fixed-step integrator.
///
/// The controller's own `mu` drives the single-attractor [`step`];
/// orchestration layers needing composite fields supply their own
/// acceleration closure and step size instead, leaving the configured `dt`
/// untouched.
///
/// [`step`]: SimulationController::step
#[derive(Debug, Clone)]
pub struct SimulationController {
    state: StateVector,
    mu_km3_s2: f64,
    dt_s: f64,
    integrator: IntegratorKind,
}

impl SimulationController {
    /// Create a controller with an initial state, attractor `mu`, step size,
    /// and integration scheme.
    pub fn new(
        initial_state: StateVector,
        mu_km3_s2: f64,
        dt_s: f64,
        integrator: IntegratorKind,
    ) -> Self {
        Self {
            state: initial_state,
            mu_km3_s2,
            dt_s,
            integrator,
        }
    }

    /// Advance one configured step under the controller's own single-attractor
    /// gravity.
    pub fn step(&mut self) {
        let mu = self.mu_km3_s2;
        self.step_by(self.dt_s, move |position| {
            gravitational_acceleration(position, mu)
        });
    }

    /// Advance one configured step under a supplied acceleration field.
    pub fn step_with_acceleration<F>(&mut self, accel: F)
    where
        F: Fn(Vector2) -> Vector2,
    {
        self.step_by(self.dt_s, accel);
    }

    /// Advance one step of an explicit `dt_s` under a supplied acceleration
    /// field.
    ///
    /// Step size and sign are taken as given; validation belongs to callers.
    pub fn step_by<F>(&mut self, dt_s: f64, accel: F)
    where
        F: Fn(Vector2) -> Vector2,
    {
        self.state = match self.integrator {
            IntegratorKind::Euler => step_euler(self.state, dt_s, accel),
            IntegratorKind::Rk4 => step_rk4(self.state, dt_s, accel),
        };
    }

    /// Replace the ship state wholesale.
    pub fn reset(&mut self, state: StateVector) {
        self.state = state;
    }

    /// Current ship state.
    pub fn state(&self) -> StateVector {
        self.state
    }

    /// Configured step size in seconds.
    pub fn dt_s(&self) -> f64 {
        self.dt_s
    }

    /// Replace the configured step size.
    pub fn set_dt(&mut self, dt_s: f64) {
        self.dt_s = dt_s;
    }

    /// Gravitational parameter behind the single-attractor `step` (km³/s²).
    pub fn mu_km3_s2(&self) -> f64 {
        self.mu_km3_s2
    }

    /// Replace the single-attractor gravitational parameter.
    pub fn set_mu(&mut self, mu_km3_s2: f64) {
        self.mu_km3_s2 = mu_km3_s2;
    }

    /// Active integration scheme.
    pub fn integrator(&self) -> IntegratorKind {
        self.integrator
    }

    /// Switch the integration scheme; takes effect on the next step.
    pub fn set_integrator(&mut self, integrator: IntegratorKind) {
        self.integrator = integrator;
    }
}
