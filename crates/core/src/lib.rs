//! Core vectors, angles, and shared constants for the Cosmic Catapult workspace.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// Physical constants expressed in kilometres and seconds.
pub mod constants {
    /// Kilometres per astronomical unit.
    pub const AU_KM: f64 = 149_597_870.7;
    /// Seconds per Julian day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::SECONDS_PER_DAY;

    /// Convert days to seconds.
    #[inline]
    pub fn days_to_seconds(days: f64) -> f64 {
        days * SECONDS_PER_DAY
    }

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / SECONDS_PER_DAY
    }
}

/// Angle helpers shared by the kinematics and alignment code.
pub mod angles {
    use std::f64::consts::{PI, TAU};

    /// Wrap an angle into the half-open interval `(-pi, pi]`.
    #[inline]
    pub fn wrap_angle(angle_rad: f64) -> f64 {
        let wrapped = angle_rad.rem_euclid(TAU);
        if wrapped > PI { wrapped - TAU } else { wrapped }
    }

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees.to_radians()
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians.to_degrees()
    }
}

/// Planar Cartesian vector used for positions (km) and velocities (km/s).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    /// Construct a vector from components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Construct a vector from polar form (radius, angle from the +x axis).
    #[inline]
    pub fn from_polar(radius: f64, angle_rad: f64) -> Self {
        Self::new(radius * angle_rad.cos(), radius * angle_rad.sin())
    }

    /// Squared Euclidean norm.
    #[inline]
    pub fn norm_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm(self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3-D cross product of two planar vectors.
    #[inline]
    pub fn cross(self, other: Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Polar angle measured from the +x axis via `atan2`.
    #[inline]
    pub fn polar_angle(self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    #[inline]
    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, other: Vector2) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    #[inline]
    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    #[inline]
    fn mul(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;

    #[inline]
    fn mul(self, vector: Vector2) -> Vector2 {
        vector * self
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;

    #[inline]
    fn div(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    #[inline]
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

/// Instantaneous ship state: position in km, velocity in km/s.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StateVector {
    pub position_km: Vector2,
    pub velocity_km_s: Vector2,
}

impl StateVector {
    /// Construct a state from position and velocity.
    #[inline]
    pub const fn new(position_km: Vector2, velocity_km_s: Vector2) -> Self {
        Self {
            position_km,
            velocity_km_s,
        }
    }
}
