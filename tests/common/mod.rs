//! Shared helpers for integration tests.

#![allow(dead_code)]

use bevy::math::DVec3;

use satsim::physics::{check_collision, step};
use satsim::types::{OrbitalState, PrimaryBody, TIME_STEP};

/// Satellite in a circular orbit at the given altitude (m), on the +X
/// axis with velocity along +Y.
pub fn circular_orbit(altitude: f64) -> OrbitalState {
    let earth = PrimaryBody::default();
    let r = earth.radius + altitude;
    OrbitalState::new(
        DVec3::new(r, 0.0, 0.0),
        DVec3::new(0.0, earth.circular_speed(r), 0.0),
    )
}

/// Specific orbital energy E = v²/2 - GM/r.
pub fn orbital_energy(state: &OrbitalState, primary: &PrimaryBody) -> f64 {
    0.5 * state.speed() * state.speed() - primary.gm() / state.radius()
}

/// Propagate with the driver's tick semantics: collision check first,
/// then one step. Returns the final state and the 1-based tick at which
/// a collision was detected, if any.
pub fn propagate(
    mut state: OrbitalState,
    primary: &PrimaryBody,
    ticks: u64,
) -> (OrbitalState, Option<u64>) {
    for tick in 1..=ticks {
        if check_collision(state.pos, primary.radius) {
            return (state, Some(tick));
        }
        step(&mut state, primary.gm(), TIME_STEP);
    }
    (state, None)
}
