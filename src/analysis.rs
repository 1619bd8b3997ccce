//! Orbit analysis: derived quantities for display.
//!
//! Stateless. Everything here is a pure function of the instantaneous
//! state and the primary body's parameters; the report is recomputed
//! every tick while running and on every edit while idle.

use bevy::math::DVec3;
use bevy::prelude::Resource;

use crate::types::{OrbitalState, PrimaryBody};

/// Half-width of the energy band treated as "near parabolic" (J/kg).
///
/// Exact zero specific energy is unreachable in floating point, so
/// trajectories within ±100 J/kg of zero are classified as
/// [`OrbitClass::NearParabolic`] rather than split on the sign bit.
pub const ENERGY_EPSILON: f64 = 100.0;

/// Trajectory classification from specific orbital energy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitClass {
    /// Bound orbit: specific energy below -[`ENERGY_EPSILON`].
    Elliptical,
    /// Specific energy within ±[`ENERGY_EPSILON`] of zero.
    NearParabolic,
    /// Escape trajectory: specific energy above +[`ENERGY_EPSILON`].
    Hyperbolic,
}

impl OrbitClass {
    /// Display label, matching the on-screen wording.
    pub fn label(&self) -> &'static str {
        match self {
            OrbitClass::Elliptical => "Elliptical",
            OrbitClass::NearParabolic => "Near-Parabolic",
            OrbitClass::Hyperbolic => "Hyperbolic (Escape)",
        }
    }
}

/// Instantaneous derived orbital quantities.
#[derive(Clone, Copy, Debug)]
pub struct OrbitalReport {
    /// Radial distance from the primary's center (m).
    pub radius: f64,
    /// Current speed (m/s).
    pub speed: f64,
    /// Height above the primary's surface (m); negative below the surface.
    pub altitude: f64,
    /// Specific mechanical energy v²/2 - GM/r (J/kg).
    pub specific_energy: f64,
    /// Speed of a circular orbit at the current radius (m/s).
    pub circular_speed: f64,
    /// Local escape speed at the current radius (m/s).
    pub escape_speed: f64,
    /// Trajectory classification under the ±[`ENERGY_EPSILON`] band.
    pub class: OrbitClass,
    /// Semi-major axis -GM/(2E) (m); None for unbound trajectories.
    pub semi_major_axis: Option<f64>,
    /// Orbital period 2π·sqrt(a³/GM) (s); None for unbound trajectories.
    pub period: Option<f64>,
}

impl OrbitalReport {
    /// Altitude in kilometers, for display.
    pub fn altitude_km(&self) -> f64 {
        self.altitude / 1000.0
    }

    /// Period in minutes, when the orbit is bound.
    pub fn period_minutes(&self) -> Option<f64> {
        self.period.map(|p| p / 60.0)
    }

    /// Ratio of current speed to circular speed (1.0 = circular orbit).
    pub fn circular_ratio(&self) -> f64 {
        self.speed / self.circular_speed
    }

    /// Ratio of current speed to escape speed (≥1.0 escapes).
    pub fn escape_ratio(&self) -> f64 {
        self.speed / self.escape_speed
    }
}

/// Most recent report, shared with the UI.
#[derive(Resource, Clone, Copy, Debug)]
pub struct CurrentReport(pub OrbitalReport);

impl Default for CurrentReport {
    /// Report for the default scenario: circular orbit at the default
    /// altitude over the default primary.
    fn default() -> Self {
        let primary = PrimaryBody::default();
        let r = primary.radius + crate::types::DEFAULT_ALTITUDE;
        let pos = DVec3::new(r, 0.0, 0.0);
        let vel = DVec3::new(0.0, primary.circular_speed(r), 0.0);
        Self(analyze(pos, vel, &primary))
    }
}

/// Classify a trajectory from its specific orbital energy.
pub fn classify(specific_energy: f64) -> OrbitClass {
    if specific_energy < -ENERGY_EPSILON {
        OrbitClass::Elliptical
    } else if specific_energy <= ENERGY_EPSILON {
        OrbitClass::NearParabolic
    } else {
        OrbitClass::Hyperbolic
    }
}

/// Compute the full report for an instantaneous state.
///
/// Total over all inputs: degenerate radii produce finite-or-infinite
/// numeric fields, never a panic; period and semi-major axis are gated on
/// strictly negative energy (a circular orbit is elliptical here, so it
/// always carries a period).
pub fn analyze(pos: DVec3, vel: DVec3, primary: &PrimaryBody) -> OrbitalReport {
    let gm = primary.gm();
    let radius = pos.length();
    let speed = vel.length();

    let specific_energy = 0.5 * speed * speed - gm / radius;

    let (semi_major_axis, period) = if specific_energy < 0.0 {
        let a = -gm / (2.0 * specific_energy);
        let t = std::f64::consts::TAU * (a.powi(3) / gm).sqrt();
        (Some(a), Some(t))
    } else {
        (None, None)
    };

    OrbitalReport {
        radius,
        speed,
        altitude: radius - primary.radius,
        specific_energy,
        circular_speed: primary.circular_speed(radius),
        escape_speed: primary.escape_speed(radius),
        class: classify(specific_energy),
        semi_major_axis,
        period,
    }
}

/// Convenience wrapper over [`analyze`] for an [`OrbitalState`].
pub fn analyze_state(state: &OrbitalState, primary: &PrimaryBody) -> OrbitalReport {
    analyze(state.pos, state.vel, primary)
}
