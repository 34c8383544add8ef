//! Explicit Euler and classical RK4 steppers for the coupled position/velocity system.

use catapult_core::{StateVector, Vector2};

/// Fixed-step integration scheme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorKind {
    /// First-order explicit Euler.
    Euler,
    /// Classical fourth-order Runge-Kutta.
    #[default]
    Rk4,
}

impl IntegratorKind {
    /// Lower-case label used in reports and manifests.
    pub fn as_str(self) -> &'static str {
        match self {
            IntegratorKind::Euler => "euler",
            IntegratorKind::Rk4 => "rk4",
        }
    }
}

/// Advance `state` by one explicit Euler step of `dt_s` seconds.
///
/// Position advances along the current velocity and velocity along the
/// acceleration sampled at the current position.
pub fn step_euler<F>(state: StateVector, dt_s: f64, accel: F) -> StateVector
where
    F: Fn(Vector2) -> Vector2,
{
    StateVector {
        position_km: state.position_km + state.velocity_km_s * dt_s,
        velocity_km_s: state.velocity_km_s + accel(state.position_km) * dt_s,
    }
}

/// Advance `state` by one classical RK4 step of `dt_s` seconds.
///
/// The four stages sample the acceleration at the initial position, at two
/// midpoint predictions, and at the full-step prediction; position and
/// velocity slopes are combined with the usual 1:2:2:1 weights.
pub fn step_rk4<F>(state: StateVector, dt_s: f64, accel: F) -> StateVector
where
    F: Fn(Vector2) -> Vector2,
{
    let half = dt_s / 2.0;

    let k1_r = state.velocity_km_s;
    let k1_v = accel(state.position_km);

    let k2_r = state.velocity_km_s + k1_v * half;
    let k2_v = accel(state.position_km + k1_r * half);

    let k3_r = state.velocity_km_s + k2_v * half;
    let k3_v = accel(state.position_km + k2_r * half);

    let k4_r = state.velocity_km_s + k3_v * dt_s;
    let k4_v = accel(state.position_km + k3_r * dt_s);

    StateVector {
        position_km: state.position_km + (k1_r + (k2_r + k3_r) * 2.0 + k4_r) * (dt_s / 6.0),
        velocity_km_s: state.velocity_km_s + (k1_v + (k2_v + k3_v) * 2.0 + k4_v) * (dt_s / 6.0),
    }
}
