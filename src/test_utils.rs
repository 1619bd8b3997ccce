//! Test utilities for the satellite orbit simulator.
//!
//! Fixtures for creating launch states around the default Earth and
//! assertions for physical invariants.

use bevy::math::DVec3;

use crate::types::{EARTH_RADIUS, OrbitalState, PrimaryBody};

/// Fixtures for creating test orbital states.
pub mod fixtures {
    use super::*;

    /// Launch position on the +X axis at the given altitude (m).
    pub fn launch_position(altitude: f64) -> DVec3 {
        DVec3::new(EARTH_RADIUS + altitude, 0.0, 0.0)
    }

    /// Satellite in a circular orbit at the given altitude, velocity +Y.
    pub fn circular_orbit(altitude: f64) -> OrbitalState {
        let earth = PrimaryBody::default();
        let pos = launch_position(altitude);
        let v = earth.circular_speed(pos.length());
        OrbitalState::new(pos, DVec3::new(0.0, v, 0.0))
    }

    /// Satellite at exactly the local escape speed (parabolic boundary).
    pub fn parabolic_trajectory(altitude: f64) -> OrbitalState {
        let earth = PrimaryBody::default();
        let pos = launch_position(altitude);
        let v = earth.escape_speed(pos.length());
        OrbitalState::new(pos, DVec3::new(0.0, v, 0.0))
    }

    /// Satellite at 1.1x escape speed (clearly hyperbolic).
    pub fn escape_trajectory(altitude: f64) -> OrbitalState {
        let earth = PrimaryBody::default();
        let pos = launch_position(altitude);
        let v = earth.escape_speed(pos.length()) * 1.1;
        OrbitalState::new(pos, DVec3::new(0.0, v, 0.0))
    }

    /// Satellite released at rest: pure radial infall.
    pub fn radial_drop(altitude: f64) -> OrbitalState {
        OrbitalState::new(launch_position(altitude), DVec3::ZERO)
    }
}

/// Assertions for verifying physical invariants.
pub mod assertions {
    use super::*;

    /// Specific orbital energy E = v²/2 - GM/r.
    pub fn orbital_energy(state: &OrbitalState, primary: &PrimaryBody) -> f64 {
        0.5 * state.speed() * state.speed() - primary.gm() / state.radius()
    }

    /// Magnitude of the specific angular momentum r × v.
    pub fn angular_momentum(state: &OrbitalState) -> f64 {
        state.pos.cross(state.vel).length()
    }

    /// Assert relative energy drift stays within tolerance.
    ///
    /// # Panics
    /// Panics if the drift exceeds the tolerance.
    pub fn assert_energy_conserved(initial: f64, final_energy: f64, tolerance: f64) {
        let drift = if initial.abs() > 1e-10 {
            ((final_energy - initial) / initial).abs()
        } else {
            (final_energy - initial).abs()
        };
        assert!(
            drift <= tolerance,
            "Energy not conserved: initial={initial:.6e}, final={final_energy:.6e}, drift={drift:.6e}, tolerance={tolerance:.6e}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circular_fixture_velocity_is_tangential() {
        let state = fixtures::circular_orbit(700e3);
        let cos = state.pos.dot(state.vel) / (state.radius() * state.speed());
        assert_relative_eq!(cos, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_circular_fixture_energy_negative() {
        let earth = PrimaryBody::default();
        let state = fixtures::circular_orbit(700e3);
        assert!(assertions::orbital_energy(&state, &earth) < 0.0);
    }

    #[test]
    fn test_escape_fixture_energy_positive() {
        let earth = PrimaryBody::default();
        let state = fixtures::escape_trajectory(700e3);
        assert!(assertions::orbital_energy(&state, &earth) > 0.0);
    }

    #[test]
    fn test_radial_drop_has_no_angular_momentum() {
        let state = fixtures::radial_drop(700e3);
        assert_relative_eq!(assertions::angular_momentum(&state), 0.0);
    }
}
