//! Massive bodies and circularly orbiting perturbers.

use catapult_core::Vector2;
use catapult_core::constants::AU_KM;

use crate::trajectory::TrajectoryBuffer;

/// Gravitational parameter of the Sun (km³/s²).
pub const MU_SUN_KM3_S2: f64 = 1.327_124_400_18e11;
/// Gravitational parameter of Earth (km³/s²).
pub const MU_EARTH_KM3_S2: f64 = 3.986_004_418e5;
/// Gravitational parameter of Jupiter (km³/s²).
pub const MU_JUPITER_KM3_S2: f64 = 1.266_865_34e8;
/// Mean orbital radius of Earth (km).
pub const EARTH_ORBIT_RADIUS_KM: f64 = AU_KM;
/// Mean orbital radius of Jupiter (km).
pub const JUPITER_ORBIT_RADIUS_KM: f64 = 5.2044 * AU_KM;

/// A massive body: physical parameters plus its current position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub mass_kg: f64,
    pub radius_km: f64,
    pub mu_km3_s2: f64,
    pub position_km: Vector2,
}

impl Body {
    /// Construct a body at a given position.
    pub fn new(mass_kg: f64, radius_km: f64, mu_km3_s2: f64, position_km: Vector2) -> Self {
        Self {
            mass_kg,
            radius_km,
            mu_km3_s2,
            position_km,
        }
    }
}

/// The Sun, fixed at the origin.
pub fn sun() -> Body {
    Body::new(1.989e30, 695_700.0, MU_SUN_KM3_S2, Vector2::ZERO)
}

/// Earth at phase zero of its circular orbit.
pub fn earth() -> Body {
    Body::new(
        5.972e24,
        6_371.0,
        MU_EARTH_KM3_S2,
        Vector2::new(EARTH_ORBIT_RADIUS_KM, 0.0),
    )
}

/// Jupiter at phase zero of its circular orbit.
pub fn jupiter() -> Body {
    Body::new(
        1.898e27,
        69_911.0,
        MU_JUPITER_KM3_S2,
        Vector2::new(JUPITER_ORBIT_RADIUS_KM, 0.0),
    )
}

/// Identifies one of the model's circularly orbiting perturbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerturberId {
    Earth,
    Jupiter,
}

impl PerturberId {
    /// Legacy scenario-index mapping: `1` selects Earth, anything else Jupiter.
    pub fn from_index(index: i64) -> Self {
        if index == 1 {
            PerturberId::Earth
        } else {
            PerturberId::Jupiter
        }
    }

    /// Lower-case label used in reports and manifests.
    pub fn as_str(self) -> &'static str {
        match self {
            PerturberId::Earth => "earth",
            PerturberId::Jupiter => "jupiter",
        }
    }
}

/// A body on a fixed-radius circular orbit about the origin.
///
/// Perturbers are kinematic: they pull on the ship but feel no gravity
/// themselves. The position is always recomputed from the orbit radius and
/// the accumulated phase angle, never integrated.
#[derive(Debug, Clone)]
pub struct Perturber {
    pub(crate) body: Body,
    pub(crate) orbit_radius_km: f64,
    pub(crate) angular_speed_rad_s: f64,
    pub(crate) phase_angle_rad: f64,
    pub(crate) trajectory: TrajectoryBuffer,
}

impl Perturber {
    /// Place `body` on a circular orbit of `orbit_radius_km` about an
    /// attractor of `mu_primary_km3_s2`, starting at phase angle zero.
    ///
    /// The mean motion `sqrt(mu / r³)` is fixed here for the perturber's
    /// lifetime; a zero orbit radius yields a stationary body at the origin.
    pub fn new(
        body: Body,
        orbit_radius_km: f64,
        mu_primary_km3_s2: f64,
        max_trajectory_points: usize,
    ) -> Self {
        let angular_speed_rad_s = if orbit_radius_km > 0.0 {
            (mu_primary_km3_s2 / (orbit_radius_km * orbit_radius_km * orbit_radius_km)).sqrt()
        } else {
            0.0
        };
        let mut perturber = Self {
            body,
            orbit_radius_km,
            angular_speed_rad_s,
            phase_angle_rad: 0.0,
            trajectory: TrajectoryBuffer::new(max_trajectory_points),
        };
        perturber.recompute_position();
        perturber
    }

    /// Advance the phase by `angular_speed * dt_s` and recompute the position.
    pub fn advance_phase(&mut self, dt_s: f64) {
        self.phase_angle_rad += self.angular_speed_rad_s * dt_s;
        self.recompute_position();
    }

    /// Set the phase angle directly (radians) and recompute the position.
    pub fn set_phase(&mut self, phase_angle_rad: f64) {
        self.phase_angle_rad = phase_angle_rad;
        self.recompute_position();
    }

    fn recompute_position(&mut self) {
        self.body.position_km = Vector2::from_polar(self.orbit_radius_km, self.phase_angle_rad);
    }

    /// Physical body, including its current position.
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Current position on the circular orbit (km).
    pub fn position_km(&self) -> Vector2 {
        self.body.position_km
    }

    /// Orbit radius about the primary (km).
    pub fn orbit_radius_km(&self) -> f64 {
        self.orbit_radius_km
    }

    /// Fixed mean motion (rad/s).
    pub fn angular_speed_rad_s(&self) -> f64 {
        self.angular_speed_rad_s
    }

    /// Accumulated phase angle (rad); grows without wrapping.
    pub fn phase_angle_rad(&self) -> f64 {
        self.phase_angle_rad
    }

    /// Recorded orbit trace.
    pub fn trajectory(&self) -> &TrajectoryBuffer {
        &self.trajectory
    }
}
