//! Scenario parameter bundle consumed by [`SimulationModel::reset`].
//!
//! [`SimulationModel::reset`]: crate::model::SimulationModel::reset

use catapult_core::Vector2;

use crate::bodies::PerturberId;

/// Everything a reset needs to rebuild the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioParams {
    /// Initial ship position (km).
    pub ship_position_km: Vector2,
    /// Initial ship velocity (km/s).
    pub ship_velocity_km_s: Vector2,
    /// Base integrator step in seconds, before time scaling.
    pub dt_s: f64,
    /// Drop recorded trajectories on reset instead of continuing across a break.
    pub clear_trajectories: bool,
    /// Run the encounter search and install the solved perturber phase.
    pub auto_align_assist: bool,
    /// Which perturber the assist search targets.
    pub assist_target: PerturberId,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            ship_position_km: Vector2::ZERO,
            ship_velocity_km_s: Vector2::ZERO,
            dt_s: 0.1,
            clear_trajectories: true,
            auto_align_assist: false,
            assist_target: PerturberId::Jupiter,
        }
    }
}
