//! Point-mass gravity fields and fixed-step integrators over 2-D states.

pub mod gravity;
pub mod integrators;

pub use gravity::{acceleration_from_body, gravitational_acceleration};
pub use integrators::{IntegratorKind, step_euler, step_rk4};
