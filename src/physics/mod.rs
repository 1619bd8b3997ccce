//! Physics driver for the satellite simulation.
//!
//! Runs in Bevy's FixedUpdate schedule at [`SIMULATION_RATE`] Hz, each
//! tick advancing [`StepConfig::dt`] seconds of simulation time. The
//! core never blocks or sleeps; the schedule provides the cadence.
//!
//! Tick order while running: collision check first, then (if clear) one
//! integration step and a fresh report. The tick that finds the
//! satellite at or below the surface freezes the state where it is.

mod gravity;
mod integrator;

use bevy::math::DVec3;
use bevy::prelude::*;

pub use gravity::gravitational_acceleration;
pub use integrator::{StepConfig, check_collision, step};

use crate::analysis::{CurrentReport, analyze_state};
use crate::satellite::Satellite;
use crate::types::{PrimaryBody, SIMULATION_RATE, SimulationPhase};

/// Message fired when the satellite hits the surface.
///
/// Carries the frozen impact state so the notification and explosion can
/// render it after the phase has moved to `Crashed`.
#[derive(Message, Clone, Debug)]
pub struct ImpactMessage {
    /// Impact position in meters from the primary's center.
    pub position: DVec3,
    /// Speed at impact (m/s).
    pub speed: f64,
    /// Altitude at impact (m); at or below zero by construction.
    pub altitude: f64,
}

impl ImpactMessage {
    /// Impact speed in km/s for display.
    pub fn speed_km_s(&self) -> f64 {
        self.speed / 1000.0
    }
}

/// System set for the propagation tick, so downstream FixedUpdate
/// systems (the trail recorder) can order themselves after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhysicsSet;

/// Plugin providing the fixed-step propagation loop.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ImpactMessage>()
            .insert_resource(Time::<Fixed>::from_hz(SIMULATION_RATE))
            .init_resource::<StepConfig>()
            .init_resource::<CurrentReport>()
            .add_systems(FixedUpdate, physics_tick.in_set(PhysicsSet));
    }
}

/// One driver tick: collision predicate, then step, then analysis.
fn physics_tick(
    mut satellite: ResMut<Satellite>,
    mut phase: ResMut<SimulationPhase>,
    mut report: ResMut<CurrentReport>,
    mut impacts: MessageWriter<ImpactMessage>,
    primary: Res<PrimaryBody>,
    config: Res<StepConfig>,
) {
    if !phase.is_running() {
        return;
    }

    if check_collision(satellite.state.pos, primary.radius) {
        let state = satellite.state;
        *phase = SimulationPhase::Crashed;

        let impact = ImpactMessage {
            position: state.pos,
            speed: state.speed(),
            altitude: state.radius() - primary.radius,
        };
        info!("Satellite crashed at {:.2} km/s", impact.speed_km_s());
        impacts.write(impact);
        return;
    }

    step(&mut satellite.state, primary.gm(), config.dt);
    report.0 = analyze_state(&satellite.state, &primary);
}

#[cfg(test)]
mod proptest_physics;
