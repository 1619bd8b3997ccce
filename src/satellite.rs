//! Satellite state ownership and the launch/reset lifecycle.
//!
//! The committed [`OrbitalState`] lives here, owned exclusively by the
//! physics tick for the duration of a run. The UI edits a separate
//! candidate ([`LaunchSettings`]) and only a launch command copies the
//! candidate into the committed state.

use bevy::prelude::*;

use crate::analysis::{CurrentReport, analyze_state};
use crate::input::LaunchSettings;
use crate::types::{PrimaryBody, SimulationPhase};

/// Command to commit the candidate state and start propagating.
/// Ignored unless the phase is [`SimulationPhase::Idle`].
#[derive(Message)]
pub struct LaunchCommand;

/// Command to return to [`SimulationPhase::Idle`] with fresh state built
/// from the current altitude field. Valid in any phase.
#[derive(Message)]
pub struct ResetCommand;

/// The committed satellite state being propagated.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct Satellite {
    pub state: crate::types::OrbitalState,
}

/// Plugin owning the satellite lifecycle.
pub struct SatellitePlugin;

impl Plugin for SatellitePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<LaunchCommand>()
            .add_message::<ResetCommand>()
            .init_resource::<Satellite>()
            .add_systems(Startup, init_satellite)
            .add_systems(Update, (handle_launch, handle_reset).chain());
    }
}

/// Seed the committed state and report from the default candidate.
fn init_satellite(
    mut satellite: ResMut<Satellite>,
    settings: Res<LaunchSettings>,
    primary: Res<PrimaryBody>,
    mut report: ResMut<CurrentReport>,
) {
    satellite.state = settings.candidate;
    report.0 = analyze_state(&satellite.state, &primary);
}

/// Commit the candidate and move to Running.
fn handle_launch(
    mut launches: MessageReader<LaunchCommand>,
    mut satellite: ResMut<Satellite>,
    mut phase: ResMut<SimulationPhase>,
    mut report: ResMut<CurrentReport>,
    settings: Res<LaunchSettings>,
    primary: Res<PrimaryBody>,
) {
    if launches.read().next().is_none() {
        return;
    }

    if *phase != SimulationPhase::Idle {
        return;
    }

    satellite.state = settings.candidate;
    report.0 = analyze_state(&satellite.state, &primary);
    *phase = SimulationPhase::Running;

    info!(
        "Launch: altitude {:.1} km, speed {:.1} m/s",
        report.0.altitude_km(),
        report.0.speed
    );
}

/// Rebuild the candidate at the current altitude setting and return to
/// Idle. Trail and effects listen for the same command and clean up.
fn handle_reset(
    mut resets: MessageReader<ResetCommand>,
    mut satellite: ResMut<Satellite>,
    mut phase: ResMut<SimulationPhase>,
    mut report: ResMut<CurrentReport>,
    mut settings: ResMut<LaunchSettings>,
    primary: Res<PrimaryBody>,
) {
    if resets.read().next().is_none() {
        return;
    }

    // Keep the altitude the user dialed in; fall back to the default
    // scenario if the field is malformed.
    let altitude_text = settings.altitude_text.clone();
    *settings = LaunchSettings::for_primary(&primary);
    settings.altitude_text = altitude_text;
    if settings.apply_altitude_edit(&primary).is_err() {
        *settings = LaunchSettings::for_primary(&primary);
    }

    satellite.state = settings.candidate;
    report.0 = analyze_state(&satellite.state, &primary);
    *phase = SimulationPhase::Idle;

    info!("Simulation reset, ready to launch");
}
