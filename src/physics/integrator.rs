//! Fixed-step integrator for the satellite trajectory.
//!
//! Uses semi-implicit (symplectic) Euler: velocity is updated from the
//! acceleration at the pre-step position, then position is updated with
//! the already-updated velocity. The ordering matters - it bounds the
//! long-run energy drift in a way naive explicit Euler does not, and it
//! is what the trajectory shapes in the UI were tuned against. Energy
//! still drifts slowly over many orbits; that is accepted behavior for a
//! first-order scheme, not something to correct with sub-stepping or
//! adaptive control.

use bevy::math::DVec3;
use bevy::prelude::Resource;

use super::gravity::gravitational_acceleration;
use crate::types::{OrbitalState, TIME_STEP};

/// Configuration for the fixed-step integrator.
#[derive(Resource, Clone, Copy, Debug)]
pub struct StepConfig {
    /// Simulation seconds per tick. Must be positive.
    pub dt: f64,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self { dt: TIME_STEP }
    }
}

/// Advance the state by one timestep under the primary's gravity.
///
/// `gm` is the primary's standard gravitational parameter, `dt` the
/// timestep in seconds (`dt > 0`). The caller is responsible for running
/// the collision check before stepping within the same tick.
pub fn step(state: &mut OrbitalState, gm: f64, dt: f64) {
    debug_assert!(dt > 0.0, "timestep must be positive");

    let acc = gravitational_acceleration(state.pos, gm);

    // Velocity first, then position from the updated velocity.
    state.vel += acc * dt;
    state.pos += state.vel * dt;
}

/// Collision predicate: true iff the satellite is at or below the
/// primary's surface. Boundary-inclusive, no side effects.
pub fn check_collision(pos: DVec3, primary_radius: f64) -> bool {
    pos.length() <= primary_radius
}
