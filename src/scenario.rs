//! Conversion of configuration records into runnable simulation scenes.

use catapult_config::{AssistTarget, BodyConfig, IntegratorChoice, ScenarioConfig};
use catapult_core::{StateVector, Vector2};
use catapult_dynamics::IntegratorKind;
use catapult_sim::bodies::{Body, MU_SUN_KM3_S2, Perturber};
use catapult_sim::{PerturberId, ScenarioParams, SimulationModel};
use thiserror::Error;

/// Errors raised while turning configs into a runnable scene.
#[derive(Debug, Error)]
pub enum ScenarioBuildError {
    #[error("step size must be a positive finite number, got {0}")]
    InvalidStep(f64),
    #[error("time scale must be a positive finite number, got {0}")]
    InvalidTimeScale(f64),
    #[error("body '{0}' not found in catalog")]
    MissingBody(String),
    #[error("catalog entry '{0}' needs an orbit radius")]
    MissingOrbitRadius(String),
    #[error("catalog entry '{0}' needs a positive gravitational parameter")]
    InvalidMu(String),
}

/// Convert a scenario manifest into reset parameters.
pub fn build_params(config: &ScenarioConfig) -> Result<ScenarioParams, ScenarioBuildError> {
    if !(config.dt_s.is_finite() && config.dt_s > 0.0) {
        return Err(ScenarioBuildError::InvalidStep(config.dt_s));
    }
    if let Some(scale) = config.time_scale {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ScenarioBuildError::InvalidTimeScale(scale));
        }
    }

    let assist = config.assist.as_ref();
    Ok(ScenarioParams {
        ship_position_km: Vector2::new(config.ship.position_km[0], config.ship.position_km[1]),
        ship_velocity_km_s: Vector2::new(
            config.ship.velocity_km_s[0],
            config.ship.velocity_km_s[1],
        ),
        dt_s: config.dt_s,
        clear_trajectories: config.clear_trajectories,
        auto_align_assist: assist.is_some(),
        assist_target: assist.map_or(PerturberId::Jupiter, |a| match a.target {
            AssistTarget::Earth => PerturberId::Earth,
            AssistTarget::Jupiter => PerturberId::Jupiter,
        }),
    })
}

/// Build a model for a scenario around the stock Sun/Earth/Jupiter system.
pub fn build_model(
    config: &ScenarioConfig,
) -> Result<(SimulationModel, ScenarioParams), ScenarioBuildError> {
    let params = build_params(config)?;
    let mut model = SimulationModel::new(
        StateVector::new(params.ship_position_km, params.ship_velocity_km_s),
        MU_SUN_KM3_S2,
        params.dt_s,
        integrator_kind(config.integrator),
        config.max_trajectory_points,
    );
    if let Some(scale) = config.time_scale {
        model.set_time_scale(scale);
    }
    Ok((model, params))
}

/// Build a model for a scenario from a named-body catalog.
///
/// The catalog must contain `SUN`, `EARTH`, and `JUPITER` entries
/// (case-insensitive); the two perturbers additionally need orbit radii.
pub fn build_model_with_catalog(
    config: &ScenarioConfig,
    catalog: &[BodyConfig],
) -> Result<(SimulationModel, ScenarioParams), ScenarioBuildError> {
    let params = build_params(config)?;
    let sun_cfg = find_body(catalog, "SUN")?;
    if !(sun_cfg.mu_km3_s2.is_finite() && sun_cfg.mu_km3_s2 > 0.0) {
        return Err(ScenarioBuildError::InvalidMu(sun_cfg.name.clone()));
    }
    let earth_cfg = find_body(catalog, "EARTH")?;
    let jupiter_cfg = find_body(catalog, "JUPITER")?;

    let sun = Body::new(
        sun_cfg.mass_kg,
        sun_cfg.radius_km,
        sun_cfg.mu_km3_s2,
        Vector2::ZERO,
    );
    let earth = perturber_from(earth_cfg, sun.mu_km3_s2, config.max_trajectory_points)?;
    let jupiter = perturber_from(jupiter_cfg, sun.mu_km3_s2, config.max_trajectory_points)?;

    let mut model = SimulationModel::with_bodies(
        StateVector::new(params.ship_position_km, params.ship_velocity_km_s),
        params.dt_s,
        integrator_kind(config.integrator),
        config.max_trajectory_points,
        sun,
        earth,
        jupiter,
    );
    if let Some(scale) = config.time_scale {
        model.set_time_scale(scale);
    }
    Ok((model, params))
}

/// Map the manifest integrator choice onto the dynamics scheme.
pub fn integrator_kind(choice: IntegratorChoice) -> IntegratorKind {
    match choice {
        IntegratorChoice::Euler => IntegratorKind::Euler,
        IntegratorChoice::Rk4 => IntegratorKind::Rk4,
    }
}

fn find_body<'a>(
    catalog: &'a [BodyConfig],
    name: &str,
) -> Result<&'a BodyConfig, ScenarioBuildError> {
    catalog
        .iter()
        .find(|body| body.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ScenarioBuildError::MissingBody(name.to_string()))
}

fn perturber_from(
    config: &BodyConfig,
    mu_primary_km3_s2: f64,
    max_trajectory_points: usize,
) -> Result<Perturber, ScenarioBuildError> {
    if !(config.mu_km3_s2.is_finite() && config.mu_km3_s2 > 0.0) {
        return Err(ScenarioBuildError::InvalidMu(config.name.clone()));
    }
    let orbit_radius_km = config
        .orbit_radius_km
        .ok_or_else(|| ScenarioBuildError::MissingOrbitRadius(config.name.clone()))?;
    let body = Body::new(
        config.mass_kg,
        config.radius_km,
        config.mu_km3_s2,
        Vector2::ZERO,
    );
    Ok(Perturber::new(
        body,
        orbit_radius_km,
        mu_primary_km3_s2,
        max_trajectory_points,
    ))
}
