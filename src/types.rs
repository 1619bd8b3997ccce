//! Core physics types and constants for the satellite orbit simulator.

use bevy::math::DVec3;
use bevy::prelude::*;

/// Physical constants (SI units)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67430e-11;

/// Earth mass (kg)
pub const EARTH_MASS: f64 = 5.972e24;

/// Earth radius (m)
pub const EARTH_RADIUS: f64 = 6.371e6;

/// Default launch altitude above the surface (m)
pub const DEFAULT_ALTITUDE: f64 = 700e3;

/// Physics tick rate (Hz)
pub const SIMULATION_RATE: f64 = 100.0;

/// Simulation seconds advanced per physics tick
pub const TIME_STEP: f64 = 1.0;

/// The primary body the satellite orbits.
///
/// Fixed at startup; the simulation never mutates it. Kept as a resource
/// rather than bare constants so tests can run against arbitrary bodies.
#[derive(Resource, Clone, Copy, Debug)]
pub struct PrimaryBody {
    /// Mass in kg.
    pub mass: f64,
    /// Mean radius in meters. Collision is declared at or below this distance.
    pub radius: f64,
}

impl Default for PrimaryBody {
    fn default() -> Self {
        Self {
            mass: EARTH_MASS,
            radius: EARTH_RADIUS,
        }
    }
}

impl PrimaryBody {
    /// Standard gravitational parameter GM (m³/s²).
    pub fn gm(&self) -> f64 {
        G * self.mass
    }

    /// Speed of a circular orbit at radial distance `r` from the center.
    pub fn circular_speed(&self, r: f64) -> f64 {
        (self.gm() / r).sqrt()
    }

    /// Local escape speed at radial distance `r` from the center.
    pub fn escape_speed(&self, r: f64) -> f64 {
        (2.0 * self.gm() / r).sqrt()
    }
}

/// Physical state of the satellite, relative to the primary body's center.
/// Uses f64 (DVec3) for physics accuracy over orbital scales.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitalState {
    /// Position in meters, primary-centered frame.
    pub pos: DVec3,
    /// Velocity in meters per second.
    pub vel: DVec3,
}

impl OrbitalState {
    /// Create a state from initial position and velocity.
    ///
    /// Any real vectors are accepted, including zero velocity (radial
    /// infall) and positions at or inside the surface (which trip the
    /// collision check on the next tick).
    pub fn new(pos: DVec3, vel: DVec3) -> Self {
        Self { pos, vel }
    }

    /// Radial distance from the primary's center (m).
    pub fn radius(&self) -> f64 {
        self.pos.length()
    }

    /// Speed (m/s).
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }
}

/// Simulation phase, driven only by explicit commands and collision
/// detection, never by elapsed time or step count.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SimulationPhase {
    /// Not launched; the user edits the candidate initial conditions.
    #[default]
    Idle,
    /// Integrator advancing every fixed tick.
    Running,
    /// Satellite intersected the surface; state frozen until reset.
    Crashed,
}

impl SimulationPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, SimulationPhase::Running)
    }
}
