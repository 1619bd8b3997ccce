//! Gravity calculation for the satellite.
//!
//! Single-primary Newtonian gravity in vector form. The primary sits at
//! the origin of the simulation frame.

use bevy::math::DVec3;

/// Compute gravitational acceleration at a position relative to the
/// primary's center.
///
/// a = -(GM / r³) · r_vec, the inverse-square law in vector form.
///
/// # Arguments
/// * `pos` - Position in meters from the primary's center
/// * `gm` - Standard gravitational parameter GM in m³/s²
///
/// # Returns
/// Acceleration vector in m/s²
#[inline]
pub fn gravitational_acceleration(pos: DVec3, gm: f64) -> DVec3 {
    let r_squared = pos.length_squared();

    // Avoid the 1/r³ singularity at very small distances.
    // 1.0 meter threshold is safe - any physical primary radius is far
    // larger, so the collision predicate fires long before this.
    if r_squared <= 1.0 {
        return DVec3::ZERO;
    }

    let r = r_squared.sqrt();
    -pos * (gm / (r_squared * r))
}
