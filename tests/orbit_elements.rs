use std::f64::consts::PI;

use cosmic_catapult::orbits::{OrbitClass, OrbitalElements};
use cosmic_catapult::{StateVector, Vector2};

const MU_EARTH: f64 = 3.986_004_418e5; // km^3 / s^2

fn vis_viva_speed(radius_km: f64, semi_major_axis_km: f64, mu: f64) -> f64 {
    (mu * (2.0 / radius_km - 1.0 / semi_major_axis_km)).sqrt()
}

#[test]
fn elliptic_elements_round_trip_from_periapsis() {
    let a = 10_000.0;
    let e = 0.3;
    let r_p = a * (1.0 - e);
    let v_p = vis_viva_speed(r_p, a, MU_EARTH);
    let state = StateVector::new(Vector2::new(r_p, 0.0), Vector2::new(0.0, v_p));

    let elements = OrbitalElements::from_state(state, MU_EARTH);

    assert!(
        (elements.semi_major_axis_km - a).abs() < 1e-6,
        "a = {}",
        elements.semi_major_axis_km
    );
    assert!(
        (elements.eccentricity - e).abs() < 1e-9,
        "e = {}",
        elements.eccentricity
    );
    assert!((elements.periapsis_km - 7_000.0).abs() < 1e-6);
    assert!((elements.apoapsis_km - 13_000.0).abs() < 1e-6);
    assert!(elements.true_anomaly_rad < 1e-6);
    assert_eq!(elements.class, OrbitClass::Elliptic);

    // The eccentricity vector points at periapsis, here along +x.
    assert!((elements.eccentricity_vector.x - e).abs() < 1e-9);
    assert!(elements.eccentricity_vector.y.abs() < 1e-12);
}

#[test]
fn hyperbolic_state_classified_from_excess_speed() {
    // 12 km/s tangential at 7000 km is well above the 10.67 km/s escape speed.
    let state = StateVector::new(Vector2::new(7_000.0, 0.0), Vector2::new(0.0, 12.0));
    let elements = OrbitalElements::from_state(state, MU_EARTH);

    assert!(elements.specific_energy_km2_s2 > 0.0);
    assert!(elements.semi_major_axis_km < 0.0);
    assert!(elements.eccentricity > 1.0);
    assert_eq!(elements.class, OrbitClass::Hyperbolic);
}

#[test]
fn exact_zero_energy_state_is_parabolic() {
    // Toy attractor chosen so v^2/2 == mu/r holds exactly in floating point.
    let state = StateVector::new(Vector2::new(1.0, 0.0), Vector2::new(0.0, 2.0));
    let elements = OrbitalElements::from_state(state, 2.0);

    assert_eq!(elements.specific_energy_km2_s2, 0.0);
    assert_eq!(elements.semi_major_axis_km, 0.0);
    assert_eq!(elements.eccentricity, 1.0);
    assert_eq!(elements.class, OrbitClass::Parabolic);
    assert_eq!(elements.true_anomaly_rad, 0.0);
}

#[test]
fn apoapsis_true_anomaly_survives_the_acos_boundary() {
    let a = 10_000.0;
    let e = 0.3;
    let r_a = a * (1.0 + e);
    let v_a = vis_viva_speed(r_a, a, MU_EARTH);
    let state = StateVector::new(Vector2::new(r_a, 0.0), Vector2::new(0.0, v_a));

    let elements = OrbitalElements::from_state(state, MU_EARTH);

    // cos(nu) sits at -1 up to rounding; the clamp keeps acos well-defined.
    assert!(
        (elements.true_anomaly_rad - PI).abs() < 1e-6,
        "nu = {}",
        elements.true_anomaly_rad
    );
    assert!((elements.apoapsis_km - 13_000.0).abs() < 1e-6);
    assert!((elements.periapsis_km - 7_000.0).abs() < 1e-6);
}

#[test]
fn degenerate_states_stay_finite() {
    let cases = [
        // Ship sitting on the attractor.
        (StateVector::new(Vector2::ZERO, Vector2::new(5.0, 0.0)), MU_EARTH),
        // Massless attractor.
        (
            StateVector::new(Vector2::new(7_000.0, 0.0), Vector2::new(0.0, 7.5)),
            0.0,
        ),
        // Purely radial plunge with zero angular momentum.
        (
            StateVector::new(Vector2::new(7_000.0, 0.0), Vector2::new(-5.0, 0.0)),
            MU_EARTH,
        ),
    ];

    for (state, mu) in cases {
        let elements = OrbitalElements::from_state(state, mu);
        assert!(elements.radius_km.is_finite());
        assert!(elements.speed_km_s.is_finite());
        assert!(elements.specific_energy_km2_s2.is_finite());
        assert!(elements.angular_momentum_km2_s.is_finite());
        assert!(elements.semi_major_axis_km.is_finite());
        assert!(elements.eccentricity.is_finite());
        assert!(elements.eccentricity_vector.x.is_finite());
        assert!(elements.eccentricity_vector.y.is_finite());
        assert!(elements.periapsis_km.is_finite());
        assert!(elements.apoapsis_km.is_finite());
        assert!(elements.true_anomaly_rad.is_finite());
    }
}

#[test]
fn display_reports_class_label() {
    let r = 8_000.0;
    let v = (MU_EARTH / r).sqrt();
    let state = StateVector::new(Vector2::new(r, 0.0), Vector2::new(0.0, v));
    let report = format!("{}", OrbitalElements::from_state(state, MU_EARTH));

    assert!(report.contains("eccentricity"));
    assert!(report.contains("class"));
    assert!(report.contains("elliptic"), "report = {report}");
}
