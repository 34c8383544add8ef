use cosmic_catapult::config::{
    AssistTarget, BodyConfig, IntegratorChoice, ScenarioConfig, ShipConfig, load_bodies,
    load_scenario, load_scenarios,
};
use cosmic_catapult::scenario::{
    ScenarioBuildError, build_model, build_model_with_catalog, build_params,
};
use cosmic_catapult::sim::PerturberId;

fn stub_config(dt_s: f64, time_scale: Option<f64>) -> ScenarioConfig {
    ScenarioConfig {
        name: "stub".to_string(),
        description: None,
        dt_s,
        time_scale,
        max_trajectory_points: 100,
        integrator: IntegratorChoice::Rk4,
        clear_trajectories: true,
        ship: ShipConfig {
            position_km: [149_597_870.7, 0.0],
            velocity_km_s: [0.0, 29.78],
        },
        assist: None,
    }
}

fn body(name: &str, mu: f64, orbit_radius_km: Option<f64>) -> BodyConfig {
    BodyConfig {
        name: name.to_string(),
        mu_km3_s2: mu,
        radius_km: 1_000.0,
        mass_kg: 1.0e24,
        orbit_radius_km,
    }
}

#[test]
fn shipped_scenarios_parse() {
    let transfer = load_scenario("configs/scenarios/jupiter_transfer.toml").expect("toml parse");
    assert_eq!(transfer.name, "jupiter-transfer");
    assert_eq!(transfer.dt_s, 50.0);
    assert_eq!(transfer.time_scale, Some(1000.0));
    assert_eq!(transfer.max_trajectory_points, 20_000);
    assert_eq!(transfer.integrator, IntegratorChoice::Rk4);
    assert_eq!(
        transfer.assist.map(|a| a.target),
        Some(AssistTarget::Jupiter)
    );

    let cruise = load_scenario("configs/scenarios/circular_cruise.yaml").expect("yaml parse");
    assert_eq!(cruise.name, "circular-cruise");
    assert!(cruise.assist.is_none());
    assert!(cruise.clear_trajectories);
}

#[test]
fn scenario_directory_scan_is_sorted() {
    let scenarios = load_scenarios("configs/scenarios").expect("scan");
    let names: Vec<&str> = scenarios.iter().map(|s| s.name.as_str()).collect();
    // Only the TOML manifests take part in the scan, in path order.
    assert_eq!(names, vec!["earth-flyby", "jupiter-transfer"]);
}

#[test]
fn catalog_and_builtin_systems_agree() {
    let config = load_scenario("configs/scenarios/jupiter_transfer.toml").expect("toml parse");
    let catalog = load_bodies("configs/bodies.yaml").expect("catalog parse");

    let (builtin, _) = build_model(&config).expect("builtin model");
    let (from_catalog, _) = build_model_with_catalog(&config, &catalog).expect("catalog model");

    assert_eq!(
        builtin.primary_mu_km3_s2(),
        from_catalog.primary_mu_km3_s2()
    );
    assert_eq!(
        builtin.earth().orbit_radius_km(),
        from_catalog.earth().orbit_radius_km()
    );
    assert!(
        (builtin.jupiter().orbit_radius_km() - from_catalog.jupiter().orbit_radius_km()).abs()
            < 1.0
    );
    assert!(
        (builtin.jupiter().angular_speed_rad_s() - from_catalog.jupiter().angular_speed_rad_s())
            .abs()
            < 1e-15
    );
}

#[test]
fn params_conversion_carries_the_assist_request() {
    let transfer = load_scenario("configs/scenarios/jupiter_transfer.toml").expect("toml parse");
    let params = build_params(&transfer).expect("params");
    assert!(params.auto_align_assist);
    assert_eq!(params.assist_target, PerturberId::Jupiter);
    assert_eq!(params.dt_s, 50.0);
    assert!(params.clear_trajectories);
    assert_eq!(params.ship_position_km.y, 149_597_870.7);

    let cruise = load_scenario("configs/scenarios/circular_cruise.yaml").expect("yaml parse");
    let params = build_params(&cruise).expect("params");
    assert!(!params.auto_align_assist);
    assert_eq!(params.assist_target, PerturberId::Jupiter);
}

#[test]
fn invalid_steps_are_rejected() {
    assert!(matches!(
        build_params(&stub_config(0.0, None)),
        Err(ScenarioBuildError::InvalidStep(_))
    ));
    assert!(matches!(
        build_params(&stub_config(-1.0, None)),
        Err(ScenarioBuildError::InvalidStep(_))
    ));
    assert!(matches!(
        build_params(&stub_config(f64::NAN, None)),
        Err(ScenarioBuildError::InvalidStep(_))
    ));
    assert!(matches!(
        build_params(&stub_config(50.0, Some(0.0))),
        Err(ScenarioBuildError::InvalidTimeScale(_))
    ));
    assert!(build_params(&stub_config(50.0, Some(1000.0))).is_ok());
}

#[test]
fn missing_catalog_bodies_are_reported() {
    let config = stub_config(50.0, None);

    let no_jupiter = vec![
        body("SUN", 1.327e11, None),
        body("EARTH", 3.986e5, Some(1.496e8)),
    ];
    match build_model_with_catalog(&config, &no_jupiter) {
        Err(ScenarioBuildError::MissingBody(name)) => assert_eq!(name, "JUPITER"),
        other => panic!("expected a missing-body error, got {:?}", other.err()),
    }

    let no_orbit = vec![
        body("SUN", 1.327e11, None),
        body("EARTH", 3.986e5, None),
        body("JUPITER", 1.267e8, Some(7.786e8)),
    ];
    match build_model_with_catalog(&config, &no_orbit) {
        Err(ScenarioBuildError::MissingOrbitRadius(name)) => assert_eq!(name, "EARTH"),
        other => panic!("expected a missing-orbit error, got {:?}", other.err()),
    }

    let dead_sun = vec![
        body("SUN", 0.0, None),
        body("EARTH", 3.986e5, Some(1.496e8)),
        body("JUPITER", 1.267e8, Some(7.786e8)),
    ];
    match build_model_with_catalog(&config, &dead_sun) {
        Err(ScenarioBuildError::InvalidMu(name)) => assert_eq!(name, "SUN"),
        other => panic!("expected an invalid-mu error, got {:?}", other.err()),
    }
}
