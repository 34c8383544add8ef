//! Classical orbital elements derived from an instantaneous 2-D state.

use std::fmt;

use catapult_core::{StateVector, Vector2};

/// Conic classification by scalar eccentricity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitClass {
    Elliptic,
    Parabolic,
    Hyperbolic,
}

impl OrbitClass {
    /// Classify a conic from its scalar eccentricity.
    pub fn from_eccentricity(eccentricity: f64) -> Self {
        if eccentricity < 1.0 {
            OrbitClass::Elliptic
        } else if eccentricity == 1.0 {
            OrbitClass::Parabolic
        } else {
            OrbitClass::Hyperbolic
        }
    }

    /// Lower-case label used in reports and exports.
    pub fn as_str(self) -> &'static str {
        match self {
            OrbitClass::Elliptic => "elliptic",
            OrbitClass::Parabolic => "parabolic",
            OrbitClass::Hyperbolic => "hyperbolic",
        }
    }
}

impl fmt::Display for OrbitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orbital elements of the conic through a state about a single attractor.
///
/// Every field is guarded so that degenerate inputs (zero radius, zero
/// gravitational parameter, radial trajectories) yield finite values rather
/// than NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Position sample the elements were derived from (km).
    pub position_km: Vector2,
    /// Velocity sample the elements were derived from (km/s).
    pub velocity_km_s: Vector2,
    /// Distance from the attractor (km).
    pub radius_km: f64,
    /// Speed magnitude (km/s).
    pub speed_km_s: f64,
    /// Specific orbital energy (km²/s²); zero when the radius vanishes.
    pub specific_energy_km2_s2: f64,
    /// Magnitude of the specific angular momentum (km²/s).
    pub angular_momentum_km2_s: f64,
    /// Semi-major axis (km); `0.0` is the parabolic/degenerate sentinel.
    pub semi_major_axis_km: f64,
    /// Scalar eccentricity.
    pub eccentricity: f64,
    /// Eccentricity vector, pointing from the focus toward periapsis.
    pub eccentricity_vector: Vector2,
    /// Periapsis radius `a(1 - e)` (km).
    pub periapsis_km: f64,
    /// Apoapsis radius `a(1 + e)` (km); not physical for open orbits.
    pub apoapsis_km: f64,
    /// True anomaly magnitude in `[0, pi]` (rad).
    pub true_anomaly_rad: f64,
    /// Conic classification from the scalar eccentricity.
    pub class: OrbitClass,
}

impl OrbitalElements {
    /// Derive the elements of the conic through `state` about an attractor of
    /// gravitational parameter `mu_km3_s2` fixed at the origin.
    pub fn from_state(state: StateVector, mu_km3_s2: f64) -> Self {
        let r_vec = state.position_km;
        let v_vec = state.velocity_km_s;
        let radius = r_vec.norm();
        let speed = v_vec.norm();

        let specific_energy = if radius == 0.0 {
            0.0
        } else {
            0.5 * speed * speed - mu_km3_s2 / radius
        };

        let angular_momentum = r_vec.cross(v_vec).abs();

        // Parabolic (and exactly-degenerate) states share the zero sentinel.
        let semi_major_axis = if specific_energy == 0.0 {
            0.0
        } else {
            -mu_km3_s2 / (2.0 * specific_energy)
        };

        let eccentricity_vector = if radius == 0.0 || mu_km3_s2 == 0.0 {
            Vector2::ZERO
        } else {
            let radial_speed = r_vec.dot(v_vec);
            (r_vec * (speed * speed - mu_km3_s2 / radius) - v_vec * radial_speed) / mu_km3_s2
        };

        let eccentricity = if mu_km3_s2 == 0.0 {
            0.0
        } else {
            let radicand = 1.0
                + 2.0 * specific_energy * angular_momentum * angular_momentum
                    / (mu_km3_s2 * mu_km3_s2);
            if radicand < 0.0 { 0.0 } else { radicand.sqrt() }
        };

        let true_anomaly = {
            let denom = eccentricity * radius;
            if denom == 0.0 {
                0.0
            } else {
                (eccentricity_vector.dot(r_vec) / denom).clamp(-1.0, 1.0).acos()
            }
        };

        Self {
            position_km: r_vec,
            velocity_km_s: v_vec,
            radius_km: radius,
            speed_km_s: speed,
            specific_energy_km2_s2: specific_energy,
            angular_momentum_km2_s: angular_momentum,
            semi_major_axis_km: semi_major_axis,
            eccentricity,
            eccentricity_vector,
            periapsis_km: semi_major_axis * (1.0 - eccentricity),
            apoapsis_km: semi_major_axis * (1.0 + eccentricity),
            true_anomaly_rad: true_anomaly,
            class: OrbitClass::from_eccentricity(eccentricity),
        }
    }
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "position        : ({:.3}, {:.3}) km",
            self.position_km.x, self.position_km.y
        )?;
        writeln!(
            f,
            "velocity        : ({:.6}, {:.6}) km/s",
            self.velocity_km_s.x, self.velocity_km_s.y
        )?;
        writeln!(f, "radius          : {:.3} km", self.radius_km)?;
        writeln!(f, "speed           : {:.6} km/s", self.speed_km_s)?;
        writeln!(
            f,
            "specific energy : {:.6} km^2/s^2",
            self.specific_energy_km2_s2
        )?;
        writeln!(
            f,
            "angular momentum: {:.3} km^2/s",
            self.angular_momentum_km2_s
        )?;
        writeln!(f, "semi-major axis : {:.3} km", self.semi_major_axis_km)?;
        writeln!(f, "eccentricity    : {:.6}", self.eccentricity)?;
        writeln!(f, "periapsis       : {:.3} km", self.periapsis_km)?;
        writeln!(f, "apoapsis        : {:.3} km", self.apoapsis_km)?;
        writeln!(
            f,
            "true anomaly    : {:.3} deg",
            self.true_anomaly_rad.to_degrees()
        )?;
        write!(f, "class           : {}", self.class)
    }
}
