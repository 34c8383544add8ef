//! Encounter phase search for gravity-assist setups.

use std::f64::consts::PI;

use catapult_core::StateVector;
use catapult_core::angles::wrap_angle;
use catapult_dynamics::{gravitational_acceleration, step_rk4};

/// Coarse prediction step, as a multiple of the scenario step size.
pub const PREDICTION_STEP_FACTOR: f64 = 1000.0;
/// Forward-integration horizon for the encounter search (five 365-day years).
pub const MAX_PREDICTION_TIME_S: f64 = 5.0 * 365.0 * 86_400.0;
/// Radius tolerance as a fraction of the target's orbit radius.
pub const RADIUS_TOLERANCE_FRACTION: f64 = 0.01;
/// Lead bias added to the solved phase so the target arrives slightly ahead.
pub const LEAD_BIAS_RAD: f64 = PI / 180.0;

/// Solved phase placement for a gravity-assist encounter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentSolution {
    /// Initial phase angle to install on the target perturber (rad, wrapped).
    pub phase_angle_rad: f64,
    /// Predicted time of the orbit-radius crossing (s).
    pub intercept_time_s: f64,
    /// Ship polar angle at the crossing (rad).
    pub ship_angle_rad: f64,
    /// Ship radius at the crossing (km).
    pub encounter_radius_km: f64,
    /// Coarse RK4 steps taken before the crossing was found.
    pub integration_steps: usize,
}

/// Search for the perturber phase that puts the target at the ship's future
/// orbit-radius crossing.
///
/// A probe copy of the ship is integrated forward under primary-only gravity
/// with RK4 at `PREDICTION_STEP_FACTOR * dt_s`, out to
/// `MAX_PREDICTION_TIME_S`. The first sample whose radius falls within
/// `RADIUS_TOLERANCE_FRACTION` of `orbit_radius_km` fixes the encounter; the
/// returned phase rewinds the target's circular motion from that point and
/// adds `LEAD_BIAS_RAD`. At the default scales the per-step radius change
/// near the target orbit is far smaller than the tolerance band, so a
/// crossing cannot be stepped over.
///
/// Returns `None` when the horizon is exhausted without a crossing, or when
/// `dt_s` is not a positive finite number (the search could not terminate
/// otherwise). The result is a pure function of the inputs.
pub fn solve_phase_for_assist(
    ship: StateVector,
    mu_primary_km3_s2: f64,
    orbit_radius_km: f64,
    angular_speed_rad_s: f64,
    dt_s: f64,
) -> Option<AlignmentSolution> {
    if !(dt_s.is_finite() && dt_s > 0.0) {
        return None;
    }

    let prediction_dt_s = dt_s * PREDICTION_STEP_FACTOR;
    let tolerance_km = RADIUS_TOLERANCE_FRACTION * orbit_radius_km;

    let mut probe = ship;
    let mut elapsed_s = 0.0;
    let mut steps = 0;
    while elapsed_s < MAX_PREDICTION_TIME_S {
        probe = step_rk4(probe, prediction_dt_s, |position| {
            gravitational_acceleration(position, mu_primary_km3_s2)
        });
        elapsed_s += prediction_dt_s;
        steps += 1;

        let radius_km = probe.position_km.norm();
        if (radius_km - orbit_radius_km).abs() < tolerance_km {
            let ship_angle_rad = probe.position_km.polar_angle();
            let phase_angle_rad =
                wrap_angle(ship_angle_rad - angular_speed_rad_s * elapsed_s + LEAD_BIAS_RAD);
            return Some(AlignmentSolution {
                phase_angle_rad,
                intercept_time_s: elapsed_s,
                ship_angle_rad,
                encounter_radius_km: radius_km,
                integration_steps: steps,
            });
        }
    }

    None
}
