//! Newtonian point-mass acceleration.

use catapult_core::Vector2;

/// Gravitational acceleration (km/s²) at `position_km` toward a point mass at the origin.
#[inline]
pub fn gravitational_acceleration(position_km: Vector2, mu_km3_s2: f64) -> Vector2 {
    acceleration_from_body(position_km, Vector2::ZERO, mu_km3_s2)
}

/// Gravitational acceleration (km/s²) at `position_km` toward a point mass at `body_position_km`.
///
/// Zero separation yields the zero vector, so degenerate states never produce
/// non-finite accelerations. There is no softening; close approaches produce
/// the full inverse-square pull.
#[inline]
pub fn acceleration_from_body(
    position_km: Vector2,
    body_position_km: Vector2,
    mu_km3_s2: f64,
) -> Vector2 {
    let offset = position_km - body_position_km;
    let r = offset.norm();
    if r == 0.0 {
        return Vector2::ZERO;
    }
    offset * (-mu_km3_s2 / (r * r * r))
}
